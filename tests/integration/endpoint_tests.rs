//! HTTP endpoint tests against the full application

#[cfg(test)]
mod tests {
    use crate::common::fixtures::{azure_gateway, completion_body};
    use crate::common::providers::StaticExtractor;
    use actix_web::{test, web};
    use serde_json::{Value, json};
    use std::sync::Arc;
    use transcript_gateway::server::routes::answer::{AnswerResponse, SUMMARY_LABEL};
    use transcript_gateway::server::{AppState, HttpServer};
    use transcript_gateway::utils::error::{ERROR_ID_HEADER, ErrorResponse};
    use transcript_gateway::{Config, ExtractionService, ServiceError};
    use wiremock::matchers::method;
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn azure_state(server: &MockServer) -> AppState {
        let gateway = azure_gateway(&server.uri(), 0);
        let extractor = Arc::new(ExtractionService::new(gateway.clone()));
        AppState::new(Config::default(), gateway, extractor)
    }

    macro_rules! app {
        ($state:expr) => {
            test::init_service(HttpServer::create_app(web::Data::new($state))).await
        };
    }

    fn answer_request(query: &str) -> test::TestRequest {
        test::TestRequest::post()
            .uri("/v1/generate_answer")
            .set_json(json!({ "query": query }))
    }

    #[actix_web::test]
    async fn test_transcript_to_labelled_items() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(200).set_body_json(completion_body(
                r#"{"questions": ["新製品の発表は来週火曜日に決定", "宣伝資料はマーケティング部が担当"]}"#,
            )))
            .expect(1)
            .mount(&server)
            .await;

        let app = app!(azure_state(&server));
        let req = answer_request("佐藤：新製品の発表は来週の火曜日です。").to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status().as_u16(), 200);

        let body: AnswerResponse = test::read_body_json(resp).await;
        assert_eq!(
            body.data.extract_query,
            vec![
                SUMMARY_LABEL,
                "新製品の発表は来週火曜日に決定",
                "宣伝資料はマーケティング部が担当"
            ]
        );
    }

    #[actix_web::test]
    async fn test_provider_rejection_becomes_processing_error() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(401).set_body_json(json!({
                "error": {"message": "Access denied"}
            })))
            .expect(1)
            .mount(&server)
            .await;

        let app = app!(azure_state(&server));
        let resp = test::call_service(&app, answer_request("some transcript").to_request()).await;

        assert_eq!(resp.status().as_u16(), 500);
        assert!(resp.headers().contains_key(ERROR_ID_HEADER));

        let body: ErrorResponse = test::read_body_json(resp).await;
        assert_eq!(body.error.error_type, "DataProcessingError");
        assert_eq!(
            body.error.details.get("original_error"),
            Some(&json!("Invalid Azure API key or credentials"))
        );
    }

    #[actix_web::test]
    async fn test_empty_query_never_reaches_provider() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(200).set_body_json(completion_body("{}")))
            .expect(0)
            .mount(&server)
            .await;

        let app = app!(azure_state(&server));
        let resp = test::call_service(&app, answer_request("").to_request()).await;

        assert_eq!(resp.status().as_u16(), 422);
        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body["error"]["type"], "ValidationError");
        assert_eq!(body["error"]["details"]["field"], "query");
    }

    #[actix_web::test]
    async fn test_error_id_header_matches_body() {
        let state = AppState::new(
            Config::default(),
            azure_gateway("http://127.0.0.1:9", 0),
            Arc::new(StaticExtractor(Err(ServiceError::llm("openai", "down")))),
        );
        let app = app!(state);

        let resp = test::call_service(&app, answer_request("a").to_request()).await;
        let header_id: i64 = resp
            .headers()
            .get(ERROR_ID_HEADER)
            .and_then(|v| v.to_str().ok())
            .and_then(|v| v.parse().ok())
            .unwrap();

        let body: ErrorResponse = test::read_body_json(resp).await;
        assert_eq!(body.error.code, 500);
        assert_eq!(body.error.id, header_id);
        assert_eq!(body.error.details.get("original_error"), Some(&json!("down")));
    }

    #[actix_web::test]
    async fn test_health_reports_build_info() {
        let state = AppState::new(
            Config::default(),
            azure_gateway("http://127.0.0.1:9", 0),
            Arc::new(StaticExtractor(Ok(Vec::new()))),
        );
        let app = app!(state);

        let req = test::TestRequest::get().uri("/health").to_request();
        let body: Value = test::call_and_read_body_json(&app, req).await;

        assert_eq!(body["status"], "healthy");
        assert_eq!(body["version"], transcript_gateway::VERSION);
        assert_eq!(body["git_hash"], transcript_gateway::build_info().git_hash);
        assert_eq!(body["llm"]["models"]["chat"], "gpt-4o-test");
        assert_eq!(body["llm"]["models"]["reasoning"], "o1-test");
    }

    #[actix_web::test]
    async fn test_empty_extraction_still_labelled() {
        let state = AppState::new(
            Config::default(),
            azure_gateway("http://127.0.0.1:9", 0),
            Arc::new(StaticExtractor(Ok(Vec::new()))),
        );
        let app = app!(state);

        let body: AnswerResponse =
            test::call_and_read_body_json(&app, answer_request("hello").to_request()).await;
        assert_eq!(body.data.extract_query, vec![SUMMARY_LABEL]);
    }
}
