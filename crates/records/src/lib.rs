#![warn(clippy::pedantic)]
#![allow(clippy::missing_errors_doc)]

pub mod config;
pub mod error;
pub mod input;
mod lenient;
pub mod output;

pub use config::*;
pub use error::*;
pub use input::*;
pub use output::*;
