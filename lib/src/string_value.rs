use crate::error::EnvVarError;

pub fn string_mapper() -> impl Fn(&str) -> Result<String, EnvVarError> + Send + Sync + 'static {
    |raw_value: &str| Ok(raw_value.to_string())
}
