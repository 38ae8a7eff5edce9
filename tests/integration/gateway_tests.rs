//! Gateway integration tests
//!
//! Routing, retry and error classification across the gateway, the Azure
//! client and the extraction service.

#[cfg(test)]
mod tests {
    use crate::common::fixtures::{
        API_VERSION, CHAT_DEPLOYMENT, REASONING_DEPLOYMENT, azure_gateway, completion_body,
        deployment_path, fast_retry,
    };
    use crate::common::providers::{Call, ScriptedProvider};
    use crate::{assert_err, assert_ok};
    use serde_json::json;
    use std::sync::Arc;
    use std::time::Duration;
    use transcript_gateway::{
        ErrorKind, ExtractionService, FileReader, Gateway, GenerationRequest, GenerationResult,
        InformationExtractor, ModelRouter, RetryConfig, RetryPolicy, ServiceError,
    };
    use wiremock::matchers::{body_partial_json, header, method, path, query_param};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn scripted_gateway(provider: Arc<ScriptedProvider>, max_retries: u32) -> Gateway {
        Gateway::new(
            provider,
            ModelRouter::new("openai", "gpt-4o", "o1"),
            fast_retry(max_retries),
        )
    }

    // ==================== Routing Through Azure ====================

    #[tokio::test]
    async fn test_chat_mode_reaches_chat_deployment() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path(deployment_path(CHAT_DEPLOYMENT)))
            .and(query_param("api-version", API_VERSION))
            .and(header("api-key", "test-key"))
            .and(body_partial_json(json!({"temperature": 0.3})))
            .respond_with(ResponseTemplate::new(200).set_body_json(completion_body("hello")))
            .expect(1)
            .mount(&server)
            .await;

        let gateway = azure_gateway(&server.uri(), 0);
        let request = GenerationRequest::new("sys", "user").with_temperature(0.3);

        let result = assert_ok!(gateway.generate(&request).await);
        assert_eq!(result, GenerationResult::Text("hello".to_string()));
    }

    #[tokio::test]
    async fn test_reasoning_mode_concatenates_prompts() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path(deployment_path(REASONING_DEPLOYMENT)))
            .and(body_partial_json(json!({
                "messages": [{"role": "user", "content": [{"type": "text", "text": "Think.Why?"}]}]
            })))
            .respond_with(ResponseTemplate::new(200).set_body_json(completion_body("Because.")))
            .expect(1)
            .mount(&server)
            .await;

        let gateway = azure_gateway(&server.uri(), 0);
        let request = GenerationRequest::new("Think.", "Why?").with_mode("reasoning");

        let result = assert_ok!(gateway.generate(&request).await);
        assert_eq!(result.as_text(), Some("Because."));
    }

    // ==================== Retry ====================

    #[tokio::test]
    async fn test_transient_server_errors_are_retried() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(503).set_body_string("busy"))
            .up_to_n_times(2)
            .expect(2)
            .mount(&server)
            .await;
        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(200).set_body_json(completion_body("finally")))
            .expect(1)
            .mount(&server)
            .await;

        let gateway = azure_gateway(&server.uri(), 3);
        let result = assert_ok!(gateway.generate(&GenerationRequest::new("s", "u")).await);
        assert_eq!(result.as_text(), Some("finally"));
    }

    #[tokio::test]
    async fn test_exhausted_retries_keep_provider_classification() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(500).set_body_json(json!({
                "error": {"message": "internal failure"}
            })))
            .expect(3)
            .mount(&server)
            .await;

        let gateway = azure_gateway(&server.uri(), 2);
        let err = assert_err!(gateway.generate(&GenerationRequest::new("s", "u")).await);

        assert_eq!(err.kind(), ErrorKind::Llm);
        assert_eq!(err.http_code(), 502);
        assert_eq!(err.detail("status"), Some(&json!(500)));
        assert_eq!(err.detail("model"), Some(&json!(CHAT_DEPLOYMENT)));
        assert!(err.message().contains("internal failure"));
    }

    #[tokio::test]
    async fn test_slow_provider_surfaces_as_timeout() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .respond_with(
                ResponseTemplate::new(200)
                    .set_body_json(completion_body("late"))
                    .set_delay(Duration::from_secs(3)),
            )
            .mount(&server)
            .await;

        let gateway = azure_gateway(&server.uri(), 0);
        let err = assert_err!(gateway.generate(&GenerationRequest::new("s", "u")).await);

        assert_eq!(err.kind(), ErrorKind::ProviderTimeout);
        assert!(err.is_a(ErrorKind::Llm));
        assert_eq!(err.detail("timeout_seconds"), Some(&json!(1)));
        assert_eq!(err.detail("provider"), Some(&json!("openai")));
    }

    #[tokio::test(start_paused = true)]
    async fn test_backoff_waits_between_attempts() {
        let provider = Arc::new(ScriptedProvider::new([
            Err(ServiceError::llm("openai", "first")),
            Err(ServiceError::llm("openai", "second")),
            Ok(json!("third time lucky")),
        ]));
        let gateway = Gateway::new(
            provider.clone(),
            ModelRouter::default(),
            RetryPolicy::new(RetryConfig {
                jitter: 0.0,
                ..RetryConfig::default()
            }),
        );

        let start = tokio::time::Instant::now();
        let result = assert_ok!(gateway.generate(&GenerationRequest::new("s", "u")).await);

        assert_eq!(result.as_text(), Some("third time lucky"));
        assert_eq!(provider.calls().len(), 3);
        // 2s then 4s
        assert!(start.elapsed() >= Duration::from_secs(6));
        assert!(start.elapsed() < Duration::from_secs(7));
    }

    // ==================== Classification ====================

    #[tokio::test]
    async fn test_unknown_mode_never_calls_provider() {
        let provider = Arc::new(ScriptedProvider::new([Ok(json!("unused"))]));
        let gateway = scripted_gateway(provider.clone(), 3);

        let request = GenerationRequest::new("s", "u").with_mode("poetry");
        let err = assert_err!(gateway.generate(&request).await);

        assert_eq!(err.kind(), ErrorKind::Llm);
        assert_eq!(err.detail("mode"), Some(&json!("poetry")));
        assert!(err.message().contains("Unknown mode: poetry"));
        assert!(provider.calls().is_empty());
    }

    #[tokio::test]
    async fn test_foreign_provider_is_substituted() {
        let provider = Arc::new(ScriptedProvider::new([Ok(json!("answered"))]));
        let gateway = scripted_gateway(provider.clone(), 0);

        let request = GenerationRequest::new("s", "u")
            .with_provider("anthropic")
            .with_temperature(0.7);
        let result = assert_ok!(gateway.generate(&request).await);

        assert_eq!(result.as_text(), Some("answered"));
        assert_eq!(
            provider.calls(),
            vec![Call::Chat {
                model: "gpt-4o".to_string(),
                temperature: 0.7
            }]
        );
    }

    #[tokio::test]
    async fn test_every_failure_is_a_service_error() {
        let failures = [
            ServiceError::llm("openai", "refused"),
            ServiceError::provider_timeout("openai", 60),
            ServiceError::data_processing("bad shape"),
        ];

        for mode in ["chat", "reasoning", "unknown"] {
            for failure in &failures {
                let provider = Arc::new(ScriptedProvider::new([Err(failure.clone())]));
                let gateway = scripted_gateway(provider, 0);
                let request = GenerationRequest::new("s", "u").with_mode(mode);

                let err = assert_err!(gateway.generate(&request).await);
                assert!(err.is_a(ErrorKind::Service));
                if mode != "unknown" {
                    assert_eq!(&err, failure, "mode {} changed the error", mode);
                }
            }
        }
    }

    // ==================== Extraction ====================

    #[tokio::test]
    async fn test_extraction_requests_structured_output() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path(deployment_path(CHAT_DEPLOYMENT)))
            .and(body_partial_json(json!({
                "temperature": 0.0,
                "response_format": {
                    "type": "json_schema",
                    "json_schema": {"name": "client_questions", "strict": true}
                }
            })))
            .respond_with(ResponseTemplate::new(200).set_body_json(completion_body(
                r#"{"questions": ["発表は来週火曜日", "予算は3万円以内"]}"#,
            )))
            .expect(1)
            .mount(&server)
            .await;

        let service = ExtractionService::new(azure_gateway(&server.uri(), 0));
        let items = assert_ok!(service.extract("佐藤：来週の火曜日に発表します。").await);

        assert_eq!(items, vec!["発表は来週火曜日", "予算は3万円以内"]);
    }

    #[tokio::test]
    async fn test_undecodable_structured_output_is_retried() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(200).set_body_json(completion_body("not json")))
            .up_to_n_times(1)
            .expect(1)
            .mount(&server)
            .await;
        Mock::given(method("POST"))
            .respond_with(
                ResponseTemplate::new(200).set_body_json(completion_body(r#"{"questions": []}"#)),
            )
            .expect(1)
            .mount(&server)
            .await;

        let service = ExtractionService::new(azure_gateway(&server.uri(), 1));
        let items = assert_ok!(service.extract("transcript").await);
        assert!(items.is_empty());
    }

    #[tokio::test]
    async fn test_extraction_rejects_missing_field() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .respond_with(
                ResponseTemplate::new(200).set_body_json(completion_body(r#"{"answers": ["x"]}"#)),
            )
            .mount(&server)
            .await;

        let service = ExtractionService::new(azure_gateway(&server.uri(), 0));
        let err = assert_err!(service.extract("transcript").await);

        assert_eq!(err.kind(), ErrorKind::DataProcessing);
        assert_eq!(err.detail("field"), Some(&json!("questions")));
    }

    #[tokio::test]
    async fn test_transcript_file_through_extraction() {
        let dir = tempfile::tempdir().unwrap();
        let file = dir.path().join("meeting.txt");
        std::fs::write(&file, "佐藤：予算は3万円以内です。\n\n田中：了解しました。\n").unwrap();

        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .respond_with(
                ResponseTemplate::new(200)
                    .set_body_json(completion_body(r#"{"questions": ["予算は3万円以内"]}"#)),
            )
            .expect(1)
            .mount(&server)
            .await;

        let reader = FileReader::new();
        let transcript = assert_ok!(reader.read(&file).await);
        assert_eq!(assert_ok!(reader.read_lines(&file).await).len(), 2);

        let service = ExtractionService::new(azure_gateway(&server.uri(), 0));
        let items = assert_ok!(service.extract(&transcript).await);
        assert_eq!(items, vec!["予算は3万円以内"]);

        let received = server.received_requests().await.unwrap();
        let body: serde_json::Value = serde_json::from_slice(&received[0].body).unwrap();
        let user = body["messages"][1]["content"].as_str().unwrap();
        assert!(user.ends_with(&transcript));
    }
}
