//! Configuration management via environment variables

/// Get an environment variable with a default value
///
/// # Arguments
/// * `name` - The environment variable name
/// * `default` - The default value to return if the variable is not set
pub fn env_or(name: &str, default: &str) -> String {
    std::env::var(name).unwrap_or_else(|_| default.to_string())
}

/// Get an environment variable, parsing to a specific type
///
/// Returns the default if the variable is not set or parsing fails.
pub fn env_parse<T: std::str::FromStr>(name: &str, default: T) -> T {
    std::env::var(name)
        .ok()
        .and_then(|s| s.parse().ok())
        .unwrap_or(default)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;

    #[test]
    #[serial]
    fn env_or_returns_default_when_unset() {
        std::env::remove_var("URLMON_TEST_UNSET");
        assert_eq!(env_or("URLMON_TEST_UNSET", "fallback"), "fallback");
    }

    #[test]
    #[serial]
    fn env_parse_falls_back_on_garbage() {
        std::env::set_var("URLMON_TEST_PORT", "not-a-number");
        assert_eq!(env_parse("URLMON_TEST_PORT", 8000u16), 8000);
        std::env::set_var("URLMON_TEST_PORT", "9001");
        assert_eq!(env_parse("URLMON_TEST_PORT", 8000u16), 9001);
        std::env::remove_var("URLMON_TEST_PORT");
    }
}
