use crate::env_source::EnvSource;
use crate::error::EnvVarError;
use tracing::log::debug;

pub fn get_env<T>(
    source: &impl EnvSource,
    variable_name: &str,
    mapper: impl FnOnce(&str) -> Result<T, EnvVarError>,
) -> Result<T, EnvVarError> {
    match source.raw_value(variable_name) {
        Some(raw_value) => mapper(&raw_value),
        None => Err(EnvVarError::NotFound { name: variable_name.to_string() }),
    }
}

pub fn get_env_or<T>(
    source: &impl EnvSource,
    variable_name: &str,
    mapper: impl FnOnce(&str) -> Result<T, EnvVarError>,
    default: T,
) -> Result<T, EnvVarError> {
    get_env_or_else(source, variable_name, mapper, || default)
}

pub fn get_env_or_else<T>(
    source: &impl EnvSource,
    variable_name: &str,
    mapper: impl FnOnce(&str) -> Result<T, EnvVarError>,
    default: impl FnOnce() -> T,
) -> Result<T, EnvVarError> {
    match source.raw_value(variable_name) {
        Some(raw_value) => mapper(&raw_value),
        None => {
            debug!("Environment variable '{variable_name}' not found, using the default value");
            Ok(default())
        },
    }
}
