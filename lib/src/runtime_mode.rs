use crate::env_source::{EnvSource, ProcessEnv};
use crate::environment::Environment;
use crate::error::EnvVarError;
use crate::get_env::get_env;

const VARIABLE_NAME: &str = "APP_ENV";

const PRODUCTION_VALUE: &str = "production";
const TEST_VALUE: &str = "test";

pub struct RuntimeMode;

impl RuntimeMode {
    pub fn value() -> Result<String, EnvVarError> {
        Environment::string(VARIABLE_NAME)
    }

    pub fn value_or(default: &str) -> String {
        Environment::string_or(VARIABLE_NAME, default)
    }

    pub fn value_or_else(default: impl FnOnce() -> String) -> String {
        Environment::string_or_else(VARIABLE_NAME, default)
    }

    pub fn is_production() -> Result<bool, EnvVarError> {
        Self::flag(PRODUCTION_VALUE)
    }

    pub fn is_production_or(default: bool) -> bool {
        Self::flag_or_else(PRODUCTION_VALUE, || default)
    }

    pub fn is_production_or_else(default: impl FnOnce() -> bool) -> bool {
        Self::flag_or_else(PRODUCTION_VALUE, default)
    }

    pub fn is_test() -> Result<bool, EnvVarError> {
        Self::flag(TEST_VALUE)
    }

    pub fn is_test_or(default: bool) -> bool {
        Self::flag_or_else(TEST_VALUE, || default)
    }

    pub fn is_test_or_else(default: impl FnOnce() -> bool) -> bool {
        Self::flag_or_else(TEST_VALUE, default)
    }

    // flags compare the raw mode value against the sentinel, not the boolean parser
    fn flag(sentinel: &str) -> Result<bool, EnvVarError> {
        get_env(&ProcessEnv, VARIABLE_NAME, |raw_value| Ok(raw_value == sentinel))
    }

    fn flag_or_else(
        sentinel: &str,
        default: impl FnOnce() -> bool,
    ) -> bool {
        match ProcessEnv.raw_value(VARIABLE_NAME) {
            Some(raw_value) => raw_value == sentinel,
            None => default(),
        }
    }
}
