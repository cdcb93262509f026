use thiserror::Error;

#[derive(Error, Debug)]
pub enum TechbotError {
    /// A required request field or parameter is absent or blank. Carries the client-facing message.
    #[error("{0}")]
    MissingInput(&'static str),

    #[error("Upstream error: {0}")]
    Upstream(String),
}

impl TechbotError {
    /// True for errors caused by the caller's input (mapped to 4xx by the HTTP layers).
    pub fn is_client_error(&self) -> bool {
        matches!(self, TechbotError::MissingInput(_))
    }
}
