use std::fmt::{Display, Formatter};

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum IntegrationErrorCode {
    DuplicateFactory,
    InvalidSettings,
}

impl IntegrationErrorCode {
    pub fn as_str(&self) -> &'static str {
        match self {
            IntegrationErrorCode::DuplicateFactory => "integration/duplicate-factory",
            IntegrationErrorCode::InvalidSettings => "integration/invalid-settings",
        }
    }
}

#[derive(Clone, Debug)]
pub struct IntegrationError {
    pub code: IntegrationErrorCode,
    message: String,
}

impl IntegrationError {
    pub fn new(code: IntegrationErrorCode, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
        }
    }

    pub fn code_str(&self) -> &'static str {
        self.code.as_str()
    }
}

impl Display for IntegrationError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} ({})", self.message, self.code_str())
    }
}

impl std::error::Error for IntegrationError {}

pub type IntegrationResult<T> = Result<T, IntegrationError>;

pub fn duplicate_factory(message: impl Into<String>) -> IntegrationError {
    IntegrationError::new(IntegrationErrorCode::DuplicateFactory, message)
}

pub fn invalid_settings(message: impl Into<String>) -> IntegrationError {
    IntegrationError::new(IntegrationErrorCode::InvalidSettings, message)
}
