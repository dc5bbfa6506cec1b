use std::collections::VecDeque;
use std::sync::{Arc, Mutex};
use std::time::Duration;

use async_trait::async_trait;
use reqwest::StatusCode;
use serde_json::json;
use spotify_web::Error;
use spotify_web::authorization::{
    AccessTokenProvider, AuthorizationCodeFlow, ClientCredentialsFlow, cancellable,
};
use spotify_web::error::TransportError;
use spotify_web::http::{HttpClient, HttpRequest, HttpResponse};
use spotify_web::model::AuthorizationScopes;

const REDIRECT_URI: &str = "http://localhost:8888/callback";

// In-memory transport that answers with queued responses and records requests
#[derive(Default)]
struct RecordingClient {
    responses: Mutex<VecDeque<HttpResponse>>,
    requests: Mutex<Vec<HttpRequest>>,
    delay: Option<Duration>,
}

impl RecordingClient {
    fn with_responses(responses: Vec<HttpResponse>) -> Arc<Self> {
        Arc::new(Self {
            responses: Mutex::new(responses.into()),
            ..Self::default()
        })
    }

    fn delayed(responses: Vec<HttpResponse>, delay: Duration) -> Arc<Self> {
        Arc::new(Self {
            responses: Mutex::new(responses.into()),
            delay: Some(delay),
            ..Self::default()
        })
    }

    fn request_count(&self) -> usize {
        self.requests.lock().unwrap().len()
    }

    fn request_body(&self, index: usize) -> String {
        self.requests.lock().unwrap()[index]
            .body_text()
            .unwrap_or_default()
            .to_string()
    }
}

#[async_trait]
impl HttpClient for RecordingClient {
    async fn send(&self, request: HttpRequest) -> Result<HttpResponse, TransportError> {
        self.requests.lock().unwrap().push(request);
        if let Some(delay) = self.delay {
            tokio::time::sleep(delay).await;
        }
        let response = self.responses.lock().unwrap().pop_front();
        response.ok_or_else(|| "no response queued".into())
    }
}

// Transport whose requests never complete
struct PendingClient;

#[async_trait]
impl HttpClient for PendingClient {
    async fn send(&self, _request: HttpRequest) -> Result<HttpResponse, TransportError> {
        std::future::pending().await
    }
}

fn token_response(access_token: &str, expires_in: i64, refresh_token: Option<&str>) -> HttpResponse {
    let mut body = json!({
        "access_token": access_token,
        "token_type": "Bearer",
        "scope": "user-top-read user-read-email",
        "expires_in": expires_in,
    });
    if let Some(refresh_token) = refresh_token {
        body["refresh_token"] = json!(refresh_token);
    }
    HttpResponse::new(StatusCode::OK, body.to_string())
}

fn code_flow(http: Arc<RecordingClient>) -> AuthorizationCodeFlow {
    AuthorizationCodeFlow::new(http, "id", "secret", "the-code", REDIRECT_URI)
}

#[tokio::test]
async fn test_client_credentials_caches_valid_token() {
    let http = RecordingClient::with_responses(vec![token_response("a1", 3600, None)]);
    let flow = ClientCredentialsFlow::new(http.clone(), "id", "secret");

    let first = flow.access_token().await.unwrap();
    assert_eq!(http.request_count(), 1);
    assert_eq!(first.value(), "a1");
    assert_eq!(
        first.scope(),
        AuthorizationScopes::USER_TOP_READ | AuthorizationScopes::USER_READ_EMAIL
    );

    let second = flow.access_token().await.unwrap();
    assert_eq!(http.request_count(), 1);
    assert_eq!(second, first);
}

#[tokio::test]
async fn test_client_credentials_request_shape() {
    let http = RecordingClient::with_responses(vec![token_response("a1", 3600, None)]);
    let flow = ClientCredentialsFlow::new(http.clone(), "id", "secret")
        .with_token_url("https://accounts.example.com/api/token");

    flow.access_token().await.unwrap();

    let requests = http.requests.lock().unwrap();
    let request = &requests[0];
    assert_eq!(request.method, reqwest::Method::POST);
    assert_eq!(request.url, "https://accounts.example.com/api/token");
    assert_eq!(request.headers["authorization"], "Basic aWQ6c2VjcmV0");
    assert_eq!(
        request.headers["content-type"],
        "application/x-www-form-urlencoded"
    );
    assert_eq!(request.body_text(), Some("grant_type=client_credentials"));
}

#[tokio::test]
async fn test_client_credentials_requests_again_after_expiry() {
    let http = RecordingClient::with_responses(vec![
        token_response("a1", 0, None),
        token_response("a2", 3600, None),
    ]);
    let flow = ClientCredentialsFlow::new(http.clone(), "id", "secret");

    let first = flow.access_token().await.unwrap();
    assert!(first.has_expired());

    let second = flow.access_token().await.unwrap();
    assert_eq!(http.request_count(), 2);
    assert_eq!(second.value(), "a2");
    assert_eq!(http.request_body(1), "grant_type=client_credentials");
    assert_eq!(flow.current_access_token().await, Some(second));
}

#[tokio::test]
async fn test_concurrent_callers_share_one_request() {
    let http = RecordingClient::delayed(
        vec![token_response("a1", 3600, None)],
        Duration::from_millis(50),
    );
    let flow = ClientCredentialsFlow::new(http.clone(), "id", "secret");

    let (first, second) = tokio::join!(flow.access_token(), flow.access_token());

    assert_eq!(http.request_count(), 1);
    assert_eq!(first.unwrap(), second.unwrap());
}

#[tokio::test]
async fn test_authorization_code_exchange_then_cache() {
    let http = RecordingClient::with_responses(vec![token_response("a1", 3600, Some("r1"))]);
    let flow = code_flow(http.clone());

    let token = flow.access_token().await.unwrap();
    assert_eq!(token.value(), "a1");
    assert_eq!(flow.refresh_token().await.as_deref(), Some("r1"));
    assert_eq!(
        http.request_body(0),
        "grant_type=authorization_code&code=the-code&redirect_uri=http%3A%2F%2Flocalhost%3A8888%2Fcallback"
    );

    flow.access_token().await.unwrap();
    assert_eq!(http.request_count(), 1);
}

#[tokio::test]
async fn test_authorization_code_refreshes_expired_token() {
    let http = RecordingClient::with_responses(vec![
        token_response("a1", 0, Some("r1")),
        token_response("a2", 3600, None),
    ]);
    let flow = code_flow(http.clone());

    flow.access_token().await.unwrap();
    let refreshed = flow.access_token().await.unwrap();

    assert_eq!(http.request_count(), 2);
    assert_eq!(
        http.request_body(1),
        "grant_type=refresh_token&refresh_token=r1"
    );
    assert_eq!(refreshed.value(), "a2");
    // the refresh response carried no refresh token
    assert_eq!(flow.refresh_token().await.as_deref(), Some("r1"));
}

#[tokio::test]
async fn test_authorization_code_rotates_refresh_token() {
    let http = RecordingClient::with_responses(vec![
        token_response("a1", 0, Some("r1")),
        token_response("a2", 3600, Some("r2")),
    ]);
    let flow = code_flow(http.clone());

    flow.access_token().await.unwrap();
    flow.access_token().await.unwrap();

    assert_eq!(flow.refresh_token().await.as_deref(), Some("r2"));
}

#[tokio::test]
async fn test_authorization_code_without_refresh_token_fails_on_expiry() {
    let http = RecordingClient::with_responses(vec![token_response("a1", 0, None)]);
    let flow = code_flow(http.clone());

    flow.access_token().await.unwrap();
    let err = flow.access_token().await.unwrap_err();

    assert!(matches!(err, Error::InvalidOperation(_)));
    assert_eq!(http.request_count(), 1);
}

#[tokio::test]
async fn test_token_endpoint_error_is_authorization_error() {
    let http = RecordingClient::with_responses(vec![HttpResponse::new(
        StatusCode::BAD_REQUEST,
        r#"{"error":"invalid_client","error_description":"bad secret"}"#,
    )]);
    let flow = ClientCredentialsFlow::new(http.clone(), "id", "wrong");

    let err = flow.access_token().await.unwrap_err();

    match err {
        Error::Authorization {
            status,
            error,
            description,
        } => {
            assert_eq!(status, StatusCode::BAD_REQUEST);
            assert_eq!(error, "invalid_client");
            assert_eq!(description, "bad secret");
        }
        other => panic!("unexpected error: {other:?}"),
    }
    assert_eq!(flow.current_access_token().await, None);
}

#[tokio::test]
async fn test_token_endpoint_error_without_json_body() {
    let http = RecordingClient::with_responses(vec![HttpResponse::new(
        StatusCode::BAD_GATEWAY,
        "upstream unavailable",
    )]);
    let flow = code_flow(http);

    let err = flow.access_token().await.unwrap_err();

    assert!(matches!(
        err,
        Error::Authorization { status, ref error, ref description }
            if status == StatusCode::BAD_GATEWAY
                && error == "Bad Gateway"
                && description == "upstream unavailable"
    ));
}

#[tokio::test]
async fn test_unknown_scope_fails_acquisition() {
    let http = RecordingClient::with_responses(vec![HttpResponse::new(
        StatusCode::OK,
        r#"{"access_token":"a1","token_type":"Bearer","scope":"user-top-read user-read-aura","expires_in":3600}"#,
    )]);
    let flow = ClientCredentialsFlow::new(http, "id", "secret");

    let err = flow.access_token().await.unwrap_err();

    assert!(matches!(err, Error::Json(ref e) if e.to_string().contains("user-read-aura")));
    assert_eq!(flow.current_access_token().await, None);
}

#[tokio::test]
async fn test_transport_failure_propagates() {
    // no queued response makes the transport fail
    let http = RecordingClient::with_responses(Vec::new());
    let flow = ClientCredentialsFlow::new(http.clone(), "id", "secret");

    let err = flow.access_token().await.unwrap_err();

    assert!(matches!(err, Error::Transport(_)));
    assert_eq!(http.request_count(), 1);
}

#[tokio::test]
async fn test_cancelled_request_leaves_flow_unchanged() {
    let flow = ClientCredentialsFlow::new(Arc::new(PendingClient), "id", "secret");

    let result = cancellable(flow.access_token(), async {}).await;
    assert!(matches!(result, Err(Error::Cancelled)));

    let (cancel, cancelled) = tokio::sync::oneshot::channel::<()>();
    let access_token = flow.access_token();
    let signal = async {
        let _ = cancelled.await;
    };
    cancel.send(()).unwrap();
    let result = cancellable(access_token, signal).await;

    assert!(matches!(result, Err(Error::Cancelled)));
    assert_eq!(flow.current_access_token().await, None);
}

#[tokio::test]
async fn test_cancellable_passes_through_completed_result() {
    let http = RecordingClient::with_responses(vec![token_response("a1", 3600, None)]);
    let flow = ClientCredentialsFlow::new(http, "id", "secret");

    let token = cancellable(flow.access_token(), std::future::pending())
        .await
        .unwrap();
    assert_eq!(token.value(), "a1");
}

#[test]
fn test_authorization_url() {
    let url = AuthorizationCodeFlow::authorization_url(
        "client",
        REDIRECT_URI,
        Some("xyz"),
        Some(AuthorizationScopes::USER_READ_PRIVATE | AuthorizationScopes::USER_READ_EMAIL),
        Some(true),
    );

    assert_eq!(
        url,
        "https://accounts.spotify.com/authorize?client_id=client&response_type=code\
         &redirect_uri=http%3A%2F%2Flocalhost%3A8888%2Fcallback&state=xyz\
         &scope=user-read-email%20user-read-private&show_dialog=true"
    );
}

#[test]
fn test_authorization_url_omits_absent_parameters() {
    let url = AuthorizationCodeFlow::authorization_url_from(
        "https://accounts.example.com/authorize",
        "client",
        REDIRECT_URI,
        None,
        Some(AuthorizationScopes::empty()),
        None,
    );

    assert_eq!(
        url,
        "https://accounts.example.com/authorize?client_id=client&response_type=code\
         &redirect_uri=http%3A%2F%2Flocalhost%3A8888%2Fcallback"
    );
}
