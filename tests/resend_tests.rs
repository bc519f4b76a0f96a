use bdrc_contact::ContactError;
use bdrc_contact::api::handle_contact;
use bdrc_contact::core::config::AppConfig;
use bdrc_contact::core::models::OutboundEmail;
use bdrc_contact::email::{EmailSender, ResendClient, SendOutcome};
use serde_json::{Value, json};
use wiremock::matchers::{body_json, header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn sample_email() -> OutboundEmail {
    OutboundEmail {
        from: "site@example.com".to_string(),
        to: "team@example.com".to_string(),
        subject: "BDRC Contact — Ann".to_string(),
        reply_to: "ann@example.com".to_string(),
        html: "<p>Hi</p>".to_string(),
    }
}

#[tokio::test]
async fn test_send_posts_expected_payload() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/emails"))
        .and(header("authorization", "Bearer re_test"))
        .and(body_json(json!({
            "from": "site@example.com",
            "to": "team@example.com",
            "subject": "BDRC Contact — Ann",
            "reply_to": "ann@example.com",
            "html": "<p>Hi</p>"
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "id": "4ef9a417" })))
        .expect(1)
        .mount(&server)
        .await;

    let client = ResendClient::new("re_test", &server.uri()).unwrap();
    let outcome = client.send(&sample_email()).await.unwrap();

    assert_eq!(
        outcome,
        SendOutcome::Delivered {
            id: Some("4ef9a417".to_string())
        }
    );
}

#[tokio::test]
async fn test_success_without_id_is_still_delivered() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/emails"))
        .respond_with(ResponseTemplate::new(200).set_body_string("accepted"))
        .mount(&server)
        .await;

    let client = ResendClient::new("re_test", &server.uri()).unwrap();
    let outcome = client.send(&sample_email()).await.unwrap();

    assert_eq!(outcome, SendOutcome::Delivered { id: None });
}

#[tokio::test]
async fn test_error_response_is_rejected_outcome() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/emails"))
        .respond_with(ResponseTemplate::new(403).set_body_json(json!({
            "statusCode": 403,
            "name": "validation_error",
            "message": "You can only send testing emails to your own email address."
        })))
        .mount(&server)
        .await;

    let client = ResendClient::new("re_test", &server.uri()).unwrap();
    let outcome = client.send(&sample_email()).await.unwrap();

    assert_eq!(
        outcome,
        SendOutcome::Rejected(
            "validation_error: You can only send testing emails to your own email address."
                .to_string()
        )
    );
}

#[tokio::test]
async fn test_unreachable_server_is_error() {
    let server = MockServer::start().await;
    let uri = server.uri();
    drop(server);

    let client = ResendClient::new("re_test", &uri).unwrap();
    let result = client.send(&sample_email()).await;

    assert!(matches!(result, Err(ContactError::HttpError(_))));
}

fn config_for(server: &MockServer) -> AppConfig {
    let base = server.uri();
    AppConfig::from_lookup(move |key| match key {
        "RESEND_API_KEY" => Some("re_test".to_string()),
        "TO_EMAIL" => Some("team@example.com".to_string()),
        "FROM_EMAIL" => Some("site@example.com".to_string()),
        "RESEND_API_URL" => Some(base.clone()),
        _ => None,
    })
}

fn contact_event() -> Value {
    json!({
        "requestContext": { "http": { "method": "POST" } },
        "body": json!({
            "name": "Ann",
            "email": "ann@example.com",
            "message": "Hi\nthere"
        }).to_string()
    })
}

#[tokio::test]
async fn test_handler_relays_through_resend() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/emails"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "id": "msg_1" })))
        .expect(1)
        .mount(&server)
        .await;

    let config = config_for(&server);
    let response = handle_contact(&config, &contact_event(), |settings| {
        ResendClient::new(&settings.api_key, &config.resend_api_url)
    })
    .await;

    assert_eq!(response["statusCode"], 200);
    assert_eq!(response["body"], r#"{"ok":true}"#);

    let requests = server.received_requests().await.unwrap();
    let sent: Value = serde_json::from_slice(&requests[0].body).unwrap();
    assert_eq!(sent["subject"], "BDRC Contact — Ann");
    assert_eq!(sent["reply_to"], "ann@example.com");
    assert!(sent["html"].as_str().unwrap().contains("Hi<br/>there"));
}

#[tokio::test]
async fn test_handler_maps_resend_error_to_bad_gateway() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/emails"))
        .respond_with(ResponseTemplate::new(422).set_body_json(json!({
            "statusCode": 422,
            "name": "invalid_from_address",
            "message": "Invalid `from` field."
        })))
        .mount(&server)
        .await;

    let config = config_for(&server);
    let response = handle_contact(&config, &contact_event(), |settings| {
        ResendClient::new(&settings.api_key, &config.resend_api_url)
    })
    .await;

    assert_eq!(response["statusCode"], 502);
    let body: Value = serde_json::from_str(response["body"].as_str().unwrap()).unwrap();
    assert_eq!(
        body,
        json!({ "error": "invalid_from_address: Invalid `from` field." })
    );
}
