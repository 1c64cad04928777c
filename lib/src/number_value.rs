use crate::error::EnvVarError;

pub fn number_mapper(variable_name: &str) -> impl Fn(&str) -> Result<f64, EnvVarError> + Send + Sync + 'static {
    let name = variable_name.to_string();

    move |raw_value: &str| {
        raw_value.trim().parse::<f64>().map_err(|_| EnvVarError::NonNumeric {
            name: name.clone(),
            raw_value: raw_value.to_string(),
        })
    }
}
