use mockito::Matcher;

use crate::envelope::PromptRequest;
use crate::error::Error;
use crate::provider::Provider;
use crate::providers::{RelayConfig, RelayProvider};

fn provider_for(server: &mockito::Server) -> RelayProvider {
    RelayProvider::new(RelayConfig::new(format!("{}/query", server.url()))).unwrap()
}

#[tokio::test]
async fn test_relay_success_path() {
    let mut server = mockito::Server::new_async().await;
    let mock = server
        .mock("POST", "/query")
        .match_body(Matcher::Json(serde_json::json!({
            "prompt": "hello",
            "systemInstruction": "Be brief."
        })))
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(r#"{ "response": "hi!", "success": true }"#)
        .create_async()
        .await;

    let provider = provider_for(&server);
    let request = PromptRequest::new("hello").with_system_instruction("Be brief.");
    let reply = provider.generate(&request).await.unwrap();

    assert_eq!(reply, "hi!");
    mock.assert_async().await;
}

#[tokio::test]
async fn test_relay_failure_surfaces_error_message() {
    let mut server = mockito::Server::new_async().await;
    server
        .mock("POST", "/query")
        .with_status(500)
        .with_header("content-type", "application/json")
        .with_body(r#"{ "error": "API key not configured", "success": false }"#)
        .create_async()
        .await;

    let provider = provider_for(&server);
    let err = provider
        .generate(&PromptRequest::new("hello"))
        .await
        .unwrap_err();

    match err {
        Error::RequestFailed { status, body } => {
            assert_eq!(status, 500);
            assert_eq!(body, "API key not configured");
        }
        other => panic!("expected RequestFailed, got {other:?}"),
    }
}

#[tokio::test]
async fn test_relay_success_flag_without_response_is_malformed() {
    let mut server = mockito::Server::new_async().await;
    server
        .mock("POST", "/query")
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(r#"{ "success": true }"#)
        .create_async()
        .await;

    let provider = provider_for(&server);
    let err = provider
        .generate(&PromptRequest::new("hello"))
        .await
        .unwrap_err();

    assert!(matches!(err, Error::MalformedResponse(_)));
}

#[tokio::test]
async fn test_relay_rejects_empty_prompt_before_any_call() {
    let server = mockito::Server::new_async().await;
    let provider = provider_for(&server);

    let err = provider
        .generate(&PromptRequest::new(""))
        .await
        .unwrap_err();

    assert!(matches!(err, Error::InvalidInput(_)));
}
