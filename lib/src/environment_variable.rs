use crate::boolean_value::boolean_mapper;
use crate::env_source::{EnvSource, ProcessEnv};
use crate::error::EnvVarError;
use crate::get_env::{get_env, get_env_or_else};
use crate::number_value::number_mapper;
use crate::string_value::string_mapper;

pub type RawValueMapper<T> = Box<dyn Fn(&str) -> Result<T, EnvVarError> + Send + Sync>;

pub struct EnvironmentVariable<T> {
    name: String,
    mapper: RawValueMapper<T>,
}

impl<T> EnvironmentVariable<T> {
    pub fn new(
        name: &str,
        mapper: impl Fn(&str) -> Result<T, EnvVarError> + Send + Sync + 'static,
    ) -> Self {
        Self {
            name: name.to_string(),
            mapper: Box::new(mapper),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn value(&self) -> Result<T, EnvVarError> {
        self.value_in(&ProcessEnv)
    }

    pub fn value_or(
        &self,
        default: T,
    ) -> Result<T, EnvVarError> {
        self.value_in_or(&ProcessEnv, default)
    }

    pub fn value_or_else(
        &self,
        default: impl FnOnce() -> T,
    ) -> Result<T, EnvVarError> {
        self.value_in_or_else(&ProcessEnv, default)
    }

    pub fn value_in(
        &self,
        source: &impl EnvSource,
    ) -> Result<T, EnvVarError> {
        get_env(source, &self.name, &self.mapper)
    }

    pub fn value_in_or(
        &self,
        source: &impl EnvSource,
        default: T,
    ) -> Result<T, EnvVarError> {
        self.value_in_or_else(source, || default)
    }

    pub fn value_in_or_else(
        &self,
        source: &impl EnvSource,
        default: impl FnOnce() -> T,
    ) -> Result<T, EnvVarError> {
        get_env_or_else(source, &self.name, &self.mapper, default)
    }
}

impl EnvironmentVariable<String> {
    pub fn string(name: &str) -> Self {
        Self::new(name, string_mapper())
    }
}

impl EnvironmentVariable<f64> {
    pub fn number(name: &str) -> Self {
        Self::new(name, number_mapper(name))
    }
}

impl EnvironmentVariable<bool> {
    pub fn boolean(name: &str) -> Self {
        Self::new(name, boolean_mapper(name))
    }
}
