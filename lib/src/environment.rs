use crate::boolean_value::boolean_mapper;
use crate::env_source::{EnvSource, ProcessEnv};
use crate::error::EnvVarError;
use crate::get_env::{get_env, get_env_or, get_env_or_else};
use crate::number_value::number_mapper;
use crate::string_value::string_mapper;
use tracing::log::debug;

pub struct Environment;

impl Environment {
    pub fn string(variable_name: &str) -> Result<String, EnvVarError> {
        get_env(&ProcessEnv, variable_name, string_mapper())
    }

    pub fn string_or(
        variable_name: &str,
        default: &str,
    ) -> String {
        Self::string_or_else(variable_name, || default.to_string())
    }

    pub fn string_or_else(
        variable_name: &str,
        default: impl FnOnce() -> String,
    ) -> String {
        match ProcessEnv.raw_value(variable_name) {
            Some(raw_value) => raw_value,
            None => {
                debug!("Environment variable '{variable_name}' not found, using the default value");
                default()
            },
        }
    }

    pub fn number(variable_name: &str) -> Result<f64, EnvVarError> {
        get_env(&ProcessEnv, variable_name, number_mapper(variable_name))
    }

    pub fn number_or(
        variable_name: &str,
        default: f64,
    ) -> Result<f64, EnvVarError> {
        get_env_or(&ProcessEnv, variable_name, number_mapper(variable_name), default)
    }

    pub fn number_or_else(
        variable_name: &str,
        default: impl FnOnce() -> f64,
    ) -> Result<f64, EnvVarError> {
        get_env_or_else(&ProcessEnv, variable_name, number_mapper(variable_name), default)
    }

    pub fn boolean(variable_name: &str) -> Result<bool, EnvVarError> {
        get_env(&ProcessEnv, variable_name, boolean_mapper(variable_name))
    }

    pub fn boolean_or(
        variable_name: &str,
        default: bool,
    ) -> Result<bool, EnvVarError> {
        get_env_or(&ProcessEnv, variable_name, boolean_mapper(variable_name), default)
    }

    pub fn boolean_or_else(
        variable_name: &str,
        default: impl FnOnce() -> bool,
    ) -> Result<bool, EnvVarError> {
        get_env_or_else(&ProcessEnv, variable_name, boolean_mapper(variable_name), default)
    }

    pub fn custom<T>(
        variable_name: &str,
        mapper: impl FnOnce(&str) -> Result<T, EnvVarError>,
    ) -> Result<T, EnvVarError> {
        get_env(&ProcessEnv, variable_name, mapper)
    }

    pub fn custom_or_else<T>(
        variable_name: &str,
        mapper: impl FnOnce(&str) -> Result<T, EnvVarError>,
        default: impl FnOnce() -> T,
    ) -> Result<T, EnvVarError> {
        get_env_or_else(&ProcessEnv, variable_name, mapper, default)
    }
}
