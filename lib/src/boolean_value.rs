use crate::error::EnvVarError;

// an empty value, once trimmed, counts as true
const TRUE_RAW_VALUES: [&str; 4] = ["true", "t", "1", ""];
const FALSE_RAW_VALUES: [&str; 3] = ["false", "f", "0"];

pub fn boolean_mapper(variable_name: &str) -> impl Fn(&str) -> Result<bool, EnvVarError> + Send + Sync + 'static {
    let name = variable_name.to_string();

    move |raw_value: &str| {
        let polished_raw_value = raw_value.trim().to_lowercase();

        if TRUE_RAW_VALUES.contains(&polished_raw_value.as_str()) {
            return Ok(true);
        }

        if FALSE_RAW_VALUES.contains(&polished_raw_value.as_str()) {
            return Ok(false);
        }

        Err(EnvVarError::NonBoolean {
            name: name.clone(),
            raw_value: raw_value.to_string(),
        })
    }
}
