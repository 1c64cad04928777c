use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EnvVarError {
    NotFound { name: String },
    NonBoolean { name: String, raw_value: String },
    NonNumeric { name: String, raw_value: String },
}

impl std::error::Error for EnvVarError {}

impl fmt::Display for EnvVarError {
    fn fmt(
        &self,
        f: &mut fmt::Formatter<'_>,
    ) -> fmt::Result {
        match self {
            EnvVarError::NotFound { name } => write!(f, "Cannot find the '{name}' environment variable"),
            EnvVarError::NonBoolean { name, raw_value } => write!(f, "The environment variable '{name}' holds a non-boolean value - '{raw_value}'"),
            EnvVarError::NonNumeric { name, raw_value } => write!(f, "The environment variable '{name}' holds a non-numeric value - '{raw_value}'"),
        }
    }
}
