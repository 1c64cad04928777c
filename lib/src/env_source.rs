use std::collections::HashMap;
use std::env;

pub trait EnvSource {
    fn raw_value(
        &self,
        variable_name: &str,
    ) -> Option<String>;
}

pub struct ProcessEnv;

impl EnvSource for ProcessEnv {
    fn raw_value(
        &self,
        variable_name: &str,
    ) -> Option<String> {
        env::var(variable_name).ok()
    }
}

#[derive(Clone, Default)]
pub struct StaticEnv {
    values: HashMap<String, String>,
}

impl StaticEnv {
    pub fn new() -> Self {
        Self { values: HashMap::new() }
    }

    pub fn with_var(
        self,
        variable_name: &str,
        raw_value: &str,
    ) -> Self {
        let mut values = self.values;
        values.insert(variable_name.to_string(), raw_value.to_string());

        Self { values }
    }
}

impl EnvSource for StaticEnv {
    fn raw_value(
        &self,
        variable_name: &str,
    ) -> Option<String> {
        self.values.get(variable_name).cloned()
    }
}
