//! Configuration loading tests

#[cfg(test)]
mod tests {
    use crate::{assert_err, assert_ok};
    use std::io::Write;
    use std::time::Duration;
    use tempfile::NamedTempFile;
    use transcript_gateway::config::LogFormat;
    use transcript_gateway::server::AppState;
    use transcript_gateway::{Config, ErrorKind, GatewayError, GenerationRequest};

    fn yaml_file(content: &str) -> NamedTempFile {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(content.as_bytes()).unwrap();
        file
    }

    #[tokio::test]
    async fn test_from_file_reads_every_section() {
        let file = yaml_file(
            r#"
server:
  host: 127.0.0.1
  port: 9100
  workers: 2
  cors:
    allowed_origins: ["https://app.example.com"]
    allow_credentials: true
retry:
  max_retries: 5
  base_delay_secs: 0.5
  max_delay_secs: 4.0
logging:
  level: debug
  format: json
"#,
        );

        let config = assert_ok!(Config::from_file(file.path()).await);

        assert_eq!(config.server().address(), "127.0.0.1:9100");
        assert_eq!(config.server().worker_count(), 2);
        assert!(config.server().cors.allow_credentials);
        assert_eq!(config.logging().format, LogFormat::Json);

        let retry = config.retry().to_retry_config();
        assert_eq!(retry.max_retries, 5);
        assert_eq!(retry.base_delay, Duration::from_millis(500));
        assert_eq!(retry.max_delay, Duration::from_secs(4));
    }

    #[tokio::test]
    async fn test_empty_file_yields_defaults() {
        let file = yaml_file("{}\n");
        let config = assert_ok!(Config::from_file(file.path()).await);

        assert_eq!(config.server().port, 8000);
        assert_eq!(config.retry().max_retries, 3);
        assert_eq!(config.logging().level, "info");
    }

    #[tokio::test]
    async fn test_missing_file_is_config_error() {
        let dir = tempfile::tempdir().unwrap();
        let err = assert_err!(Config::from_file(dir.path().join("absent.yaml")).await);

        assert!(matches!(err, GatewayError::Config(_)));
        assert!(err.to_string().contains("Failed to read config file"));
    }

    #[tokio::test]
    async fn test_invalid_section_is_rejected() {
        let file = yaml_file("retry:\n  jitter: 1.5\n");
        let err = assert_err!(Config::from_file(file.path()).await);
        assert!(err.to_string().contains("Retry config error"));

        let file = yaml_file("server:\n  cors:\n    allow_credentials: true\n");
        let err = assert_err!(Config::from_file(file.path()).await);
        assert!(err.to_string().contains("Server config error"));
    }

    #[tokio::test]
    async fn test_malformed_yaml_is_rejected() {
        let file = yaml_file("server: [unclosed\n");
        let err = assert_err!(Config::from_file(file.path()).await);
        assert!(err.to_string().contains("Failed to parse config"));
    }

    #[test]
    fn test_yaml_output_omits_api_key() {
        let mut config = Config::default();
        config.gateway.llm.api_key = Some("secret-key".to_string());

        let yaml = assert_ok!(config.to_yaml());
        assert!(!yaml.contains("secret-key"));

        let reparsed = assert_ok!(Config::from_yaml_str(&yaml));
        assert_eq!(reparsed.gateway.server, config.gateway.server);
        assert_eq!(reparsed.gateway.llm.api_key, None);
    }

    #[tokio::test]
    async fn test_state_without_endpoint_fails_per_call() {
        let config = assert_ok!(Config::from_yaml_str("retry:\n  max_retries: 0\n"));
        let state = assert_ok!(AppState::from_config(&config));

        let err = assert_err!(
            state
                .gateway
                .generate(&GenerationRequest::new("s", "u"))
                .await
        );
        assert_eq!(err.kind(), ErrorKind::Llm);
        assert!(err.message().contains("endpoint not configured"));
    }
}
