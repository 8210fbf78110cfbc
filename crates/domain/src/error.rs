#[derive(thiserror::Error, Debug, PartialEq)]
pub enum SessionError {
    #[error("Session ID must not be nil")]
    MissingId,
    #[error("Session owner must not be nil")]
    MissingUser,
    #[error("Session is already completed")]
    AlreadyCompleted,
}
