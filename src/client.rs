use std::fmt;
use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use reqwest::header::{HeaderMap, HeaderValue, ACCEPT, CONTENT_TYPE};
use reqwest::{Client as ReqwestClient, StatusCode};
use secrecy::{ExposeSecret, SecretString};
use serde::de::DeserializeOwned;
use tokio::sync::Mutex;
use url::Url;

use crate::api::{clients, controller, devices, ports};
use crate::models::api_response::{ApiResponse, ERROR_CODE_NOT_LOGGED_IN};
use crate::models::auth::{LoginRequest, LoginResult, LoginStatus};
use crate::models::user::CurrentUser;
use crate::{OmadaError, OmadaResult};

/// Header the controller expects the session token in.
const TOKEN_HEADER: &str = "Csrf-Token";

/// Decides when a session token is (re-)acquired around a request.
///
/// The controller can expire a token server-side at any time, so an
/// authenticated call needs a policy for noticing. [`Preflight`] probes the
/// login-status endpoint before each request; [`Reactive`] waits for the
/// controller to deny a request and then logs in and retries once.
#[async_trait]
pub trait AuthStrategy: Send + Sync {
    /// Runs before an authenticated request is issued.
    async fn prepare(&self, client: &OmadaClient) -> OmadaResult<()>;

    /// Runs when the controller denies a request. Returns `true` when the
    /// request should be retried once after a fresh login.
    async fn on_denied(&self, client: &OmadaClient) -> OmadaResult<bool>;
}

/// Probe the login-status endpoint before every authenticated request and
/// log in when the session has lapsed. A denied request is not retried.
pub struct Preflight;

#[async_trait]
impl AuthStrategy for Preflight {
    async fn prepare(&self, client: &OmadaClient) -> OmadaResult<()> {
        if !client.is_logged_in().await? {
            log::info!("not logged in, logging in with user: {}", client.username());
            client.login().await?;
        }
        Ok(())
    }

    async fn on_denied(&self, _client: &OmadaClient) -> OmadaResult<bool> {
        Ok(false)
    }
}

/// Skip the pre-flight probe; log in lazily and again whenever the
/// controller denies a request, retrying the request once.
pub struct Reactive;

#[async_trait]
impl AuthStrategy for Reactive {
    async fn prepare(&self, client: &OmadaClient) -> OmadaResult<()> {
        if !client.has_token().await {
            client.login().await?;
        }
        Ok(())
    }

    async fn on_denied(&self, client: &OmadaClient) -> OmadaResult<bool> {
        log::info!("session rejected, logging in with user: {}", client.username());
        client.login().await?;
        Ok(true)
    }
}

/// Mutable session state: the token the controller handed out, if any.
#[derive(Debug, Default)]
struct SessionState {
    token: Option<String>,
}

/// Builder for the Omada client.
///
/// Resolves the controller identity and the site id once, at build time;
/// both are treated as configuration afterwards.
#[derive(Default)]
pub struct OmadaClientBuilder {
    host: Option<String>,
    username: Option<String>,
    password: Option<SecretString>,
    site: Option<String>,
    timeout: Option<Duration>,
    accept_invalid_certs: bool,
    auth: Option<Arc<dyn AuthStrategy>>,
}

impl OmadaClientBuilder {
    /// Sets the controller host, including protocol.
    pub fn host(mut self, host: impl Into<String>) -> Self {
        self.host = Some(host.into());
        self
    }

    /// Sets the username for authentication.
    pub fn username(mut self, username: impl Into<String>) -> Self {
        self.username = Some(username.into());
        self
    }

    /// Sets the password for authentication.
    pub fn password(mut self, password: impl Into<String>) -> Self {
        self.password = Some(SecretString::from(password.into()));
        self
    }

    /// Sets the site to scrape. Matched case-sensitively against the site
    /// names in the user's privilege list. Defaults to "Default".
    pub fn site(mut self, site: impl Into<String>) -> Self {
        self.site = Some(site.into());
        self
    }

    /// Sets the per-request timeout. Defaults to 15 seconds.
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Sets whether to skip TLS certificate verification on the controller.
    pub fn accept_invalid_certs(mut self, accept: bool) -> Self {
        self.accept_invalid_certs = accept;
        self
    }

    /// Sets the authentication strategy. Defaults to [`Preflight`].
    pub fn auth_strategy(mut self, auth: Arc<dyn AuthStrategy>) -> Self {
        self.auth = Some(auth);
        self
    }

    /// Builds the client: validates the configuration, discovers the
    /// controller identity and resolves the configured site's id.
    ///
    /// # Errors
    ///
    /// Returns `ConfigurationError` for missing/invalid settings,
    /// `ProtocolError` when the controller identity cannot be parsed,
    /// `AuthenticationError` when login is rejected and `SiteNotFound`
    /// when the site name has no exact match.
    pub async fn build(self) -> OmadaResult<OmadaClient> {
        let host = self
            .host
            .ok_or_else(|| OmadaError::Configuration("Controller host is required".into()))?;
        let host = host.trim_end_matches('/').to_string();
        Url::parse(&host)?;

        let username = self
            .username
            .ok_or_else(|| OmadaError::Configuration("Username is required".into()))?;
        let password = self
            .password
            .ok_or_else(|| OmadaError::Configuration("Password is required".into()))?;

        let site = self.site.unwrap_or_else(|| "Default".to_string());
        let timeout = self.timeout.unwrap_or(Duration::from_secs(15));

        let http_client = ReqwestClient::builder()
            .timeout(timeout)
            .danger_accept_invalid_certs(self.accept_invalid_certs)
            .cookie_store(true)
            .user_agent(concat!("omada-exporter/", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(|e| OmadaError::Configuration(format!("Failed to create HTTP client: {e}")))?;

        let mut client = OmadaClient {
            host,
            cid: String::new(),
            site,
            site_id: String::new(),
            username,
            password,
            http_client,
            auth: self.auth.unwrap_or_else(|| Arc::new(Preflight)),
            session: Arc::new(Mutex::new(SessionState::default())),
        };

        client.cid = client.resolve_cid().await?;
        let site = client.site.clone();
        client.site_id = client.resolve_site_id(&site).await?;

        Ok(client)
    }
}

/// Client for the Omada controller's session-authenticated REST API.
///
/// Owns exactly one session. The controller identity and site id are
/// resolved once at build time; the token is refreshed on demand by the
/// configured [`AuthStrategy`].
pub struct OmadaClient {
    host: String,
    cid: String,
    site: String,
    site_id: String,
    username: String,
    password: SecretString,
    http_client: ReqwestClient,
    auth: Arc<dyn AuthStrategy>,
    session: Arc<Mutex<SessionState>>,
}

impl fmt::Debug for OmadaClient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("OmadaClient")
            .field("host", &self.host)
            .field("cid", &self.cid)
            .field("site", &self.site)
            .field("site_id", &self.site_id)
            .field("username", &self.username)
            .finish()
    }
}

impl OmadaClient {
    pub fn builder() -> OmadaClientBuilder {
        OmadaClientBuilder::default()
    }

    /// The configured (human-readable) site name.
    pub fn site(&self) -> &str {
        &self.site
    }

    /// The resolved opaque site id.
    pub fn site_id(&self) -> &str {
        &self.site_id
    }

    pub fn username(&self) -> &str {
        &self.username
    }

    /// Gets the devices API interface.
    pub fn devices(&self) -> devices::DeviceApi<'_> {
        devices::DeviceApi::new(self)
    }

    /// Gets the clients API interface.
    pub fn clients(&self) -> clients::ClientApi<'_> {
        clients::ClientApi::new(self)
    }

    /// Gets the switch-ports API interface.
    pub fn ports(&self) -> ports::PortApi<'_> {
        ports::PortApi::new(self)
    }

    /// Gets the controller-status API interface.
    pub fn controller(&self) -> controller::ControllerApi<'_> {
        controller::ControllerApi::new(self)
    }

    /// Discovers the controller identity: an opaque path segment every API
    /// call must be prefixed with. The controller redirects requests for
    /// its root to `/{cid}/login`, so the segment is read off the final
    /// URL after redirects.
    async fn resolve_cid(&self) -> OmadaResult<String> {
        let res = self.http_client.get(&self.host).send().await?;

        let path = res.url().path().replace("/login", "");
        let cid = path.trim_matches('/');
        if cid.is_empty() {
            return Err(OmadaError::Protocol {
                code: 0,
                msg: format!("could not parse controller id from path {:?}", res.url().path()),
            });
        }

        Ok(cid.to_string())
    }

    /// Looks up the id of the site with the given name.
    ///
    /// There is no site-lookup endpoint available to read-only roles, so
    /// the current user's privilege list is scanned for an exact,
    /// case-sensitive name match.
    async fn resolve_site_id(&self, name: &str) -> OmadaResult<String> {
        let user: CurrentUser = self.get_json("api/v2/users/current", &[]).await?;

        user.privilege
            .sites
            .into_iter()
            .find(|s| s.name == name)
            .map(|s| s.key)
            .ok_or_else(|| OmadaError::SiteNotFound(name.to_string()))
    }

    /// Asks the controller whether the current session is logged in.
    ///
    /// The sentinel error code `-1200` means "not logged in" and is a
    /// normal `false`; any other non-zero code is a protocol error.
    pub async fn is_logged_in(&self) -> OmadaResult<bool> {
        let url = self.api_url("api/v2/loginStatus");
        let res = self
            .http_client
            .get(url)
            .headers(self.request_headers().await?)
            .send()
            .await?;

        let body = res.bytes().await?;
        let status: ApiResponse<LoginStatus> = serde_json::from_slice(&body)?;

        if status.error_code == ERROR_CODE_NOT_LOGGED_IN {
            return Ok(false);
        }
        if status.error_code != 0 {
            return Err(OmadaError::Protocol {
                code: status.error_code,
                msg: status.msg.unwrap_or_else(|| "unknown API error".into()),
            });
        }

        Ok(status.result.is_some_and(|r| r.login))
    }

    /// Exchanges the configured credentials for a session token.
    pub async fn login(&self) -> OmadaResult<()> {
        let url = self.api_url("api/v2/login");
        let body = LoginRequest {
            username: self.username.clone(),
            password: self.password.expose_secret().to_string(),
        };

        let res = self
            .http_client
            .post(url)
            .headers(base_headers())
            .json(&body)
            .send()
            .await?;

        if !res.status().is_success() {
            return Err(OmadaError::Authentication(format!(
                "login failed with status code: {}",
                res.status()
            )));
        }

        let bytes = res.bytes().await?;
        let login: ApiResponse<LoginResult> = serde_json::from_slice(&bytes)?;

        if login.error_code != 0 {
            return Err(OmadaError::Authentication(
                login.msg.unwrap_or_else(|| "login rejected".into()),
            ));
        }

        let token = login.result.map(|r| r.token).unwrap_or_default();
        if token.is_empty() {
            return Err(OmadaError::Authentication(
                "controller returned no token".into(),
            ));
        }

        self.session.lock().await.token = Some(token);
        Ok(())
    }

    async fn has_token(&self) -> bool {
        self.session.lock().await.token.is_some()
    }

    /// Issues an authenticated GET and unwraps the response envelope.
    ///
    /// The configured [`AuthStrategy`] runs before the request and decides
    /// whether a denied request is retried (at most once).
    pub(crate) async fn get_json<T>(&self, path: &str, query: &[(&str, &str)]) -> OmadaResult<T>
    where
        T: DeserializeOwned,
    {
        self.auth.prepare(self).await?;

        match self.send_get(path, query).await {
            Err(OmadaError::NotAuthenticated) => {
                if self.auth.on_denied(self).await? {
                    self.send_get(path, query).await
                } else {
                    Err(OmadaError::NotAuthenticated)
                }
            }
            other => other,
        }
    }

    async fn send_get<T>(&self, path: &str, query: &[(&str, &str)]) -> OmadaResult<T>
    where
        T: DeserializeOwned,
    {
        let url = self.api_url(path);
        let mut req = self.http_client.get(url).headers(self.request_headers().await?);
        if !query.is_empty() {
            req = req.query(query);
        }

        let res = req.send().await?;

        if res.status() == StatusCode::UNAUTHORIZED || res.status() == StatusCode::FORBIDDEN {
            return Err(OmadaError::NotAuthenticated);
        }
        let res = res.error_for_status()?;

        let body = res.bytes().await?;
        let envelope: ApiResponse<T> = serde_json::from_slice(&body)?;
        envelope.into_result()
    }

    fn api_url(&self, path: &str) -> String {
        format!("{}/{}/{}", self.host, self.cid, path)
    }

    async fn request_headers(&self) -> OmadaResult<HeaderMap> {
        let mut headers = base_headers();

        if let Some(token) = &self.session.lock().await.token {
            headers.insert(
                TOKEN_HEADER,
                HeaderValue::from_str(token)
                    .map_err(|e| OmadaError::Authentication(format!("invalid token: {e}")))?,
            );
        }

        Ok(headers)
    }
}

fn base_headers() -> HeaderMap {
    let mut headers = HeaderMap::new();
    headers.insert(ACCEPT, HeaderValue::from_static("application/json"));
    headers.insert(
        CONTENT_TYPE,
        HeaderValue::from_static("application/json; charset=UTF-8"),
    );
    headers.insert("X-Requested-With", HeaderValue::from_static("XMLHttpRequest"));
    headers
}

impl Clone for OmadaClient {
    fn clone(&self) -> Self {
        OmadaClient {
            host: self.host.clone(),
            cid: self.cid.clone(),
            site: self.site.clone(),
            site_id: self.site_id.clone(),
            username: self.username.clone(),
            password: self.password.clone(),
            http_client: self.http_client.clone(),
            auth: self.auth.clone(),
            session: self.session.clone(),
        }
    }
}
