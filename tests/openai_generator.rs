use problem_processor::config::GeneratorConfig;
use problem_processor::engines::mutation::{OpenAiGenerator, TextGenerator};
use problem_processor::GenerationError;
use serde_json::json;
use wiremock::matchers::{body_partial_json, header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn generator_for(server: &MockServer) -> OpenAiGenerator {
    let config = GeneratorConfig {
        agent: "gpt-4".to_string(),
        api_key: "sk-test".to_string(),
        endpoint: format!("{}/v1", server.uri()),
        temperature: Some(0.7),
        ..Default::default()
    };
    OpenAiGenerator::from_config(&config).unwrap()
}

#[tokio::test]
async fn test_generate_sends_system_and_user_messages() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/v1/chat/completions"))
        .and(header("authorization", "Bearer sk-test"))
        .and(body_partial_json(json!({
            "model": "gpt-4",
            "temperature": 0.7,
            "messages": [
                { "role": "system", "content": "Rephrase: Sort a list." },
                { "role": "user", "content": "Sort a list." },
            ],
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "choices": [{ "message": { "role": "assistant", "content": "Order the elements of a list." } }]
        })))
        .expect(1)
        .mount(&server)
        .await;

    let generator = generator_for(&server);
    let text = generator.generate("Rephrase: Sort a list.", "Sort a list.").await.unwrap();

    assert_eq!(text, "Order the elements of a list.");
}

#[tokio::test]
async fn test_api_error_status() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(429).set_body_string("rate limited"))
        .mount(&server)
        .await;

    let result = generator_for(&server).generate("p", "u").await;

    match result {
        Err(GenerationError::Api { status, body }) => {
            assert_eq!(status, 429);
            assert_eq!(body, "rate limited");
        }
        other => panic!("expected API error, got {:?}", other),
    }
}

#[tokio::test]
async fn test_missing_choices_is_malformed() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "choices": [] })))
        .mount(&server)
        .await;

    let result = generator_for(&server).generate("p", "u").await;

    assert!(matches!(result, Err(GenerationError::MalformedResponse(_))));
}

#[tokio::test]
async fn test_empty_content_is_rejected() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "choices": [{ "message": { "content": "   " } }]
        })))
        .mount(&server)
        .await;

    let result = generator_for(&server).generate("p", "u").await;

    assert!(matches!(result, Err(GenerationError::EmptyResponse)));
}

#[tokio::test]
async fn test_closed_generator_refuses_requests() {
    let server = MockServer::start().await;
    let generator = generator_for(&server);

    generator.close().await.unwrap();

    assert!(matches!(generator.generate("p", "u").await, Err(GenerationError::Closed)));
    assert!(generator.close().await.is_err());
}
