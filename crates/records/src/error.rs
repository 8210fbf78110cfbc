use trainload_domain as domain;

#[derive(thiserror::Error, Debug)]
pub enum RecordError {
    #[error(transparent)]
    Json(#[from] serde_json::Error),
    #[error(transparent)]
    InvalidName(#[from] domain::NameError),
    #[error(transparent)]
    InvalidSession(#[from] domain::SessionError),
    #[error(transparent)]
    InvalidConfig(#[from] domain::ConfigError),
    #[error(transparent)]
    InvalidId(#[from] uuid::Error),
    #[error("missing {0}")]
    MissingField(&'static str),
}
