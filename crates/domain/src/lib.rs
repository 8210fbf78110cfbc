#![warn(clippy::pedantic)]
#![allow(clippy::missing_errors_doc)]

mod config;
mod effort;
mod equipment;
mod error;
mod exercise;
mod metrics;
mod name;
mod profile;
mod session;
mod set;
mod snapshot;
mod substitution;
mod training_load;
mod units;

pub use config::*;
pub use effort::*;
pub use equipment::*;
pub use error::*;
pub use exercise::*;
pub use metrics::*;
pub use name::*;
pub use profile::*;
pub use session::*;
pub use set::*;
pub use snapshot::*;
pub use substitution::*;
pub use training_load::*;
pub use units::*;
