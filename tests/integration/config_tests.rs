//! Configuration loading tests
//!
//! Drives `Config::from_lookup` with an in-memory environment.

#[cfg(test)]
mod tests {
    use crate::common::*;
    use smartcost_api::SmartCostError;
    use smartcost_api::config::Config;
    use smartcost_api::utils::logging::LogFormat;
    use std::collections::HashMap;

    fn load(env: &HashMap<&'static str, String>) -> smartcost_api::Result<Config> {
        Config::from_lookup(|key| env.get(key).cloned())
    }

    fn config_message(result: smartcost_api::Result<Config>) -> String {
        match result {
            Err(SmartCostError::Config(message)) => message,
            other => panic!("expected config error, got {:?}", other),
        }
    }

    #[test]
    fn test_defaults() {
        let config = load(&required_env()).unwrap();

        assert_eq!(config.server().host, "0.0.0.0");
        assert_eq!(config.server().port, 8000);
        assert!(!config.server().debug);
        assert_eq!(config.server().log_format, LogFormat::Text);
        assert!(config.server().cors.allows_all_origins());
        assert_eq!(config.azure().management_endpoint, "https://management.azure.com");
        assert_eq!(config.azure().timeout, 30);
        assert!(config.azure().verify_on_startup);
        assert_eq!(
            config.azure().scope(),
            format!("/subscriptions/{}", SUBSCRIPTION_ID)
        );
    }

    #[test]
    fn test_all_missing_keys_reported() {
        let mut env = required_env();
        env.remove("AZURE_CLIENT_SECRET");
        env.insert("AZURE_TENANT_ID", "   ".to_string());

        let message = config_message(load(&env));
        assert!(message.contains("AZURE_CLIENT_SECRET"));
        assert!(message.contains("AZURE_TENANT_ID"));
        assert!(!message.contains("AZURE_SUBSCRIPTION_ID"));
    }

    #[test]
    fn test_overrides() {
        let mut env = required_env();
        env.insert("API_HOST", "127.0.0.1".to_string());
        env.insert("API_PORT", "9090".to_string());
        env.insert("API_WORKERS", "2".to_string());
        env.insert("DEBUG", "true".to_string());
        env.insert("LOG_FORMAT", "json".to_string());
        env.insert(
            "CORS_ALLOWED_ORIGINS",
            "https://portal.example.com, https://ops.example.com".to_string(),
        );
        env.insert(
            "AZURE_MANAGEMENT_ENDPOINT",
            "https://management.usgovcloudapi.net/".to_string(),
        );
        env.insert("AZURE_REQUEST_TIMEOUT_SECS", "10".to_string());
        env.insert("AZURE_VERIFY_CREDENTIALS", "no".to_string());

        let config = load(&env).unwrap();
        assert_eq!(config.server().address(), "127.0.0.1:9090");
        assert_eq!(config.server().worker_count(), 2);
        assert!(config.server().debug);
        assert_eq!(config.server().log_format, LogFormat::Json);
        assert_eq!(config.server().cors.allowed_origins.len(), 2);
        assert!(!config.server().cors.allows_all_origins());
        assert_eq!(
            config.azure().management_endpoint,
            "https://management.usgovcloudapi.net"
        );
        assert_eq!(config.azure().timeout, 10);
        assert!(!config.azure().verify_on_startup);
    }

    #[test]
    fn test_invalid_values_rejected() {
        for (key, value) in [
            ("API_PORT", "eighty"),
            ("API_PORT", "0"),
            ("API_WORKERS", "0"),
            ("DEBUG", "maybe"),
            ("LOG_FORMAT", "xml"),
            ("AZURE_REQUEST_TIMEOUT_SECS", "0"),
            ("AZURE_MANAGEMENT_ENDPOINT", "management.azure.com"),
            ("AZURE_SUBSCRIPTION_ID", "/subscriptions/abc"),
        ] {
            let mut env = required_env();
            env.insert(key, value.to_string());
            assert!(load(&env).is_err(), "{}={} should be rejected", key, value);
        }
    }

    #[test]
    fn test_debug_output_hides_secret() {
        let config = load(&required_env()).unwrap();
        let rendered = format!("{:?}", config);
        assert!(!rendered.contains("fixture-secret"));
    }
}
