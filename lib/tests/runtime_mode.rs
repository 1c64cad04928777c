
#[cfg(test)]
mod test {
    use crate::commons::{EnvContext, MODE_KEY};
    use serial_test::serial;
    use std::env;
    use test_context::test_context;
    use typed_env::runtime_mode::RuntimeMode;

    #[test_context(EnvContext)]
    #[serial]
    #[test]
    fn should_fail_when_mode_is_missing(_ctx: &mut EnvContext) {
        assert_eq!("Cannot find the 'APP_ENV' environment variable", RuntimeMode::value().unwrap_err().to_string());
        assert_eq!("Cannot find the 'APP_ENV' environment variable", RuntimeMode::is_production().unwrap_err().to_string());
        assert_eq!("Cannot find the 'APP_ENV' environment variable", RuntimeMode::is_test().unwrap_err().to_string());
    }

    #[test_context(EnvContext)]
    #[serial]
    #[test]
    fn should_return_defaults_when_mode_is_missing(_ctx: &mut EnvContext) {
        assert_eq!("Dodo", RuntimeMode::value_or("Dodo"));
        assert_eq!("Dodo", RuntimeMode::value_or_else(|| "Dodo".to_string()));
        assert!(RuntimeMode::is_production_or(true));
        assert!(RuntimeMode::is_test_or_else(|| true));
    }

    #[test_context(EnvContext)]
    #[serial]
    #[test]
    fn should_detect_production_mode(_ctx: &mut EnvContext) -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
        env::set_var(MODE_KEY, "production");

        assert_eq!("production", RuntimeMode::value()?);
        assert!(RuntimeMode::is_production()?);
        assert!(!RuntimeMode::is_test()?);

        Ok(())
    }

    #[test_context(EnvContext)]
    #[serial]
    #[test]
    fn should_detect_test_mode(_ctx: &mut EnvContext) -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
        env::set_var(MODE_KEY, "test");

        assert_eq!("test", RuntimeMode::value()?);
        assert!(!RuntimeMode::is_production()?);
        assert!(RuntimeMode::is_test()?);

        Ok(())
    }

    #[test_context(EnvContext)]
    #[serial]
    #[test]
    fn should_ignore_defaults_when_mode_is_set(_ctx: &mut EnvContext) -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
        env::set_var(MODE_KEY, "production");

        assert_eq!("production", RuntimeMode::value_or("Dodo"));
        assert!(RuntimeMode::is_production_or(false));
        assert!(!RuntimeMode::is_test_or(true));
        assert!(!RuntimeMode::is_test_or_else(|| panic!("default factory should not run")));

        Ok(())
    }
}
