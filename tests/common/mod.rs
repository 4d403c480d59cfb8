use serde_json::json;
use wiremock::matchers::{header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

use omada_exporter::{OmadaClient, OmadaResult};

/// Controller id the mock controller redirects to.
pub const CID: &str = "abcd1234";

/// Site id the privilege list resolves "Default" to.
pub const SITE_ID: &str = "site-id-1";

/// Session token the mock login endpoint hands out.
pub const TOKEN: &str = "test-token";

/// Prefixes an endpoint with the controller id, the way the client
/// builds its request paths.
#[allow(dead_code)]
pub fn api_path(endpoint: &str) -> String {
    format!("/{CID}/{endpoint}")
}

/// Wraps a result payload in the controller's response envelope.
#[allow(dead_code)]
pub fn envelope(result: serde_json::Value) -> serde_json::Value {
    json!({
        "errorCode": 0,
        "msg": "Success",
        "result": result,
    })
}

/// Mounts the controller-id discovery flow: a request for the root is
/// redirected to `/{cid}/login`, which serves the login page.
#[allow(dead_code)]
pub async fn setup_cid_probe(server: &MockServer) {
    Mock::given(method("GET"))
        .and(path("/"))
        .respond_with(
            ResponseTemplate::new(302).insert_header("location", format!("/{CID}/login").as_str()),
        )
        .mount(server)
        .await;

    Mock::given(method("GET"))
        .and(path(format!("/{CID}/login")))
        .respond_with(ResponseTemplate::new(200))
        .mount(server)
        .await;
}

/// Mounts the login-status pair: an anonymous probe (no token header)
/// reports the `-1200` not-logged-in sentinel, a probe carrying the
/// session token reports logged in. The anonymous mock matches any
/// probe, so it gets a low priority and the tokened mock wins whenever
/// the token header is present (wiremock picks the highest-priority
/// matching mock; 1 is highest, 5 the default).
#[allow(dead_code)]
pub async fn setup_login_status(server: &MockServer) {
    Mock::given(method("GET"))
        .and(path(api_path("api/v2/loginStatus")))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "errorCode": -1200,
            "msg": "The user has not logged in.",
        })))
        .with_priority(10)
        .mount(server)
        .await;

    Mock::given(method("GET"))
        .and(path(api_path("api/v2/loginStatus")))
        .and(header("Csrf-Token", TOKEN))
        .respond_with(ResponseTemplate::new(200).set_body_json(envelope(json!({ "login": true }))))
        .mount(server)
        .await;
}

/// Mounts a login endpoint returning the shared test token.
#[allow(dead_code)]
pub async fn setup_login(server: &MockServer) {
    Mock::given(method("POST"))
        .and(path(api_path("api/v2/login")))
        .respond_with(ResponseTemplate::new(200).set_body_json(envelope(json!({ "token": TOKEN }))))
        .mount(server)
        .await;
}

/// Mounts `users/current` with the given `(name, key)` site privileges.
#[allow(dead_code)]
pub async fn setup_current_user(server: &MockServer, sites: &[(&str, &str)]) {
    let sites: Vec<_> = sites
        .iter()
        .map(|(name, key)| json!({ "name": name, "key": key }))
        .collect();

    Mock::given(method("GET"))
        .and(path(api_path("api/v2/users/current")))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(envelope(json!({ "privilege": { "sites": sites } }))),
        )
        .mount(server)
        .await;
}

/// Mounts everything the builder needs: cid discovery, login status,
/// login and a privilege list resolving "Default" to [`SITE_ID`].
#[allow(dead_code)]
pub async fn setup_session(server: &MockServer) {
    setup_cid_probe(server).await;
    setup_login_status(server).await;
    setup_login(server).await;
    setup_current_user(server, &[("Default", SITE_ID)]).await;
}

/// Builds a client against the mock server with test credentials.
#[allow(dead_code)]
pub async fn build_client(server: &MockServer) -> OmadaResult<OmadaClient> {
    OmadaClient::builder()
        .host(server.uri())
        .username("test-user")
        .password("test-password")
        .site("Default")
        .build()
        .await
}

/// Set up a fully mocked session and a client logged into it.
#[allow(dead_code)]
pub async fn setup_test_client(server: &MockServer) -> OmadaClient {
    setup_session(server).await;
    build_client(server).await.expect("failed to build OmadaClient")
}
