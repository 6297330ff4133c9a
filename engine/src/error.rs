#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EngineError {
    InvalidArgument(String),
}

impl EngineError {
    pub fn invalid(message: impl Into<String>) -> Self {
        EngineError::InvalidArgument(message.into())
    }
}

impl std::fmt::Display for EngineError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            EngineError::InvalidArgument(message) => write!(f, "Invalid argument: {}", message),
        }
    }
}

impl std::error::Error for EngineError {}
