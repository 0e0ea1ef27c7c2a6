use std::env;
use std::fmt;
use std::path::Path;
use std::sync::Arc;
use std::time::Duration;

use reqwest::header::{HeaderMap, HeaderValue};
use reqwest::{Client as ReqwestClient, Method, Response, header, multipart};
use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::error::{Error, Result};
use crate::observability;
use crate::session::{FileTokenStore, TokenStore};
use crate::types::{
    AccessToken, ChatRequest, ChatResponse, Property, PropertyCreateParams, PropertyImage,
    PropertyImageParams, PropertyUpdateParams, RegisterParams, UploadResponse, User,
    UserCreateParams, UserUpdateParams,
};

const BASE_URL_ENV: &str = "COASTLINE_BASE_URL";
const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// Client for the Coastal Vision listing service.
///
/// The client wraps every remote call the front-ends make: authentication,
/// the public listings browser, the broker/agent portal surface, image
/// upload, and the chat concierge. All business rules live behind the
/// remote service; this client only shapes requests and normalizes failures
/// into [`Error`].
#[derive(Clone)]
pub struct Coastline {
    client: ReqwestClient,
    base_url: String,
    timeout: Duration,
    tokens: Arc<dyn TokenStore>,
}

impl Coastline {
    /// Create a new client.
    ///
    /// The base URL can be provided directly or read from the
    /// COASTLINE_BASE_URL environment variable. The session token persists
    /// in the default per-user file store.
    pub fn new(base_url: Option<String>) -> Result<Self> {
        let tokens: Arc<dyn TokenStore> = Arc::new(FileTokenStore::default_location()?);
        Self::with_options(base_url, None, Some(tokens))
    }

    /// Create a new client with custom settings.
    pub fn with_options(
        base_url: Option<String>,
        timeout: Option<Duration>,
        tokens: Option<Arc<dyn TokenStore>>,
    ) -> Result<Self> {
        let base_url = match base_url {
            Some(url) => url,
            None => env::var(BASE_URL_ENV).map_err(|_| {
                Error::configuration(
                    "Base URL not provided and COASTLINE_BASE_URL environment variable not set",
                )
            })?,
        };
        url::Url::parse(&base_url)?;
        let base_url = base_url.trim_end_matches('/').to_string();

        let timeout = timeout.unwrap_or(DEFAULT_TIMEOUT);
        let client = ReqwestClient::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| {
                Error::http_client(
                    format!("Failed to build HTTP client: {}", e),
                    Some(Box::new(e)),
                )
            })?;

        let tokens = match tokens {
            Some(tokens) => tokens,
            None => Arc::new(FileTokenStore::default_location()?),
        };

        Ok(Self {
            client,
            base_url,
            timeout,
            tokens,
        })
    }

    /// The base URL all requests are issued against.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// The token store backing this client's session.
    pub fn token_store(&self) -> &Arc<dyn TokenStore> {
        &self.tokens
    }

    /// The currently bound session token, if any.
    pub fn token(&self) -> Option<String> {
        self.tokens.get()
    }

    fn endpoint(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    /// Create and return default headers for API requests.
    ///
    /// A bound token is attached as a bearer authorization header when
    /// `auth` is requested. An absent token is not an error: the request
    /// goes out unauthenticated and the service is responsible for
    /// rejecting it. A token that cannot form a valid header value is
    /// treated the same as an absent one.
    fn default_headers(&self, auth: bool) -> HeaderMap {
        let mut headers = HeaderMap::new();
        headers.insert(
            header::CONTENT_TYPE,
            HeaderValue::from_static("application/json"),
        );
        headers.insert(header::ACCEPT, HeaderValue::from_static("application/json"));
        if auth {
            if let Some(token) = self.tokens.get() {
                if let Ok(value) = HeaderValue::from_str(&format!("Bearer {}", token)) {
                    headers.insert(header::AUTHORIZATION, value);
                }
            }
        }
        headers
    }

    /// Convert a reqwest transport failure into our Error type.
    fn transport_error(&self, e: reqwest::Error) -> Error {
        if e.is_timeout() {
            Error::timeout(
                format!("Request timed out: {}", e),
                Some(self.timeout.as_secs_f64()),
            )
        } else if e.is_connect() {
            Error::connection(format!("Connection error: {}", e), Some(Box::new(e)))
        } else {
            Error::http_client(format!("Request failed: {}", e), Some(Box::new(e)))
        }
    }

    /// Process API response errors and convert to our Error type.
    ///
    /// The response body text becomes the error message verbatim; callers
    /// surface it inline. An empty body gets a generic fallback.
    async fn process_error_response(response: Response) -> Error {
        let status_code = response.status().as_u16();
        let body = match response.text().await {
            Ok(body) => body,
            Err(e) => {
                return Error::http_client(
                    format!("Failed to read error response: {}", e),
                    Some(Box::new(e)),
                );
            }
        };
        Error::from_status(status_code, body)
    }

    /// Send a prepared request and parse the response body.
    async fn execute<T: DeserializeOwned>(&self, builder: reqwest::RequestBuilder) -> Result<T> {
        observability::CLIENT_REQUESTS.click();
        let response = builder
            .send()
            .await
            .map_err(|e| self.transport_error(e))?;

        if !response.status().is_success() {
            observability::CLIENT_REQUEST_ERRORS.click();
            return Err(Self::process_error_response(response).await);
        }

        response.json::<T>().await.map_err(|e| {
            Error::serialization(
                format!("Failed to parse response: {}", e),
                Some(Box::new(e)),
            )
        })
    }

    /// Send a prepared request and discard the response body (for 204
    /// endpoints).
    async fn execute_empty(&self, builder: reqwest::RequestBuilder) -> Result<()> {
        observability::CLIENT_REQUESTS.click();
        let response = builder
            .send()
            .await
            .map_err(|e| self.transport_error(e))?;

        if !response.status().is_success() {
            observability::CLIENT_REQUEST_ERRORS.click();
            return Err(Self::process_error_response(response).await);
        }

        Ok(())
    }

    /// Issue a JSON request against an arbitrary path.
    ///
    /// This is the generic operation the typed endpoint methods are built
    /// on: JSON content-type and accept headers, bearer authorization when
    /// `auth` is true and a token is bound, body attached when present. A
    /// non-success status fails with the HTTP-level error carrying the
    /// status code and the response body text; an unparseable success body
    /// fails with a serialization error.
    ///
    /// The client never reacts to a 401/403 itself. Interpreting those as
    /// "session invalid" and clearing the token store is caller policy; see
    /// [`Error::is_auth_failure`].
    pub async fn request<T: DeserializeOwned>(
        &self,
        method: Method,
        path: &str,
        body: Option<Value>,
        auth: bool,
    ) -> Result<T> {
        let mut builder = self
            .client
            .request(method, self.endpoint(path))
            .headers(self.default_headers(auth));
        if let Some(body) = body {
            builder = builder.json(&body);
        }
        self.execute(builder).await
    }

    /// Issue a JSON request against an arbitrary path, expecting no
    /// response body.
    pub async fn request_empty(
        &self,
        method: Method,
        path: &str,
        body: Option<Value>,
        auth: bool,
    ) -> Result<()> {
        let mut builder = self
            .client
            .request(method, self.endpoint(path))
            .headers(self.default_headers(auth));
        if let Some(body) = body {
            builder = builder.json(&body);
        }
        self.execute_empty(builder).await
    }

    // -------- Auth --------

    /// Log in with the given credentials.
    ///
    /// The service expects a form-encoded body for this endpoint. On
    /// success the returned token is bound into the token store so
    /// subsequent authenticated calls carry it.
    pub async fn login(&self, username: &str, password: &str) -> Result<AccessToken> {
        let form = [("username", username), ("password", password)];
        let builder = self.client.post(self.endpoint("/auth/login")).form(&form);
        let token: AccessToken = self.execute(builder).await?;
        self.tokens.set(&token.access_token)?;
        observability::LOGINS.click();
        Ok(token)
    }

    /// Register a new broker or agent account.
    pub async fn register(&self, params: RegisterParams) -> Result<User> {
        self.request(
            Method::POST,
            "/auth/register",
            Some(serde_json::to_value(&params)?),
            false,
        )
        .await
    }

    /// The user bound to the current session.
    pub async fn me(&self) -> Result<User> {
        self.request(Method::GET, "/auth/me", None, true).await
    }

    /// Drop the bound session token.
    ///
    /// Purely client-side: the service is never told, the token simply
    /// stops being attached.
    pub fn logout(&self) -> Result<()> {
        self.tokens.clear()
    }

    // -------- Public listings --------

    /// Browse the public listings, no session required.
    pub async fn public_properties(&self) -> Result<Vec<Property>> {
        self.request(Method::GET, "/public/properties", None, false)
            .await
    }

    /// Fetch one public listing by id.
    pub async fn public_property(&self, id: i64) -> Result<Property> {
        self.request(
            Method::GET,
            &format!("/public/properties/{}", id),
            None,
            false,
        )
        .await
    }

    // -------- Portal: properties --------

    /// The portal's property list: the caller's own listings, plus their
    /// agents' listings for brokers.
    pub async fn properties(&self) -> Result<Vec<Property>> {
        self.request(Method::GET, "/properties", None, true).await
    }

    /// Create a property listing, optionally with inline images.
    pub async fn create_property(&self, params: PropertyCreateParams) -> Result<Property> {
        self.request(
            Method::POST,
            "/properties",
            Some(serde_json::to_value(&params)?),
            true,
        )
        .await
    }

    /// Fetch one portal listing by id.
    pub async fn property(&self, id: i64) -> Result<Property> {
        self.request(Method::GET, &format!("/properties/{}", id), None, true)
            .await
    }

    /// Apply a partial update to a listing.
    pub async fn update_property(
        &self,
        id: i64,
        params: PropertyUpdateParams,
    ) -> Result<Property> {
        self.request(
            Method::PUT,
            &format!("/properties/{}", id),
            Some(serde_json::to_value(&params)?),
            true,
        )
        .await
    }

    /// Archive a listing (soft delete).
    pub async fn archive_property(&self, id: i64) -> Result<()> {
        self.request_empty(Method::DELETE, &format!("/properties/{}", id), None, true)
            .await
    }

    /// Attach images to an existing listing.
    pub async fn add_property_images(
        &self,
        property_id: i64,
        images: Vec<PropertyImageParams>,
    ) -> Result<Vec<PropertyImage>> {
        self.request(
            Method::POST,
            &format!("/properties/{}/images", property_id),
            Some(serde_json::to_value(&images)?),
            true,
        )
        .await
    }

    /// Detach and delete one image from a listing.
    pub async fn delete_property_image(&self, property_id: i64, image_id: i64) -> Result<()> {
        self.request_empty(
            Method::DELETE,
            &format!("/properties/{}/images/{}", property_id, image_id),
            None,
            true,
        )
        .await
    }

    // -------- Portal: users --------

    /// The broker's team roster.
    pub async fn users(&self) -> Result<Vec<User>> {
        self.request(Method::GET, "/users", None, true).await
    }

    /// Create a user on the broker's team.
    pub async fn create_user(&self, params: UserCreateParams) -> Result<User> {
        self.request(
            Method::POST,
            "/users",
            Some(serde_json::to_value(&params)?),
            true,
        )
        .await
    }

    /// Fetch one team user by id.
    pub async fn user(&self, id: i64) -> Result<User> {
        self.request(Method::GET, &format!("/users/{}", id), None, true)
            .await
    }

    /// Apply a partial update to a team user.
    pub async fn update_user(&self, id: i64, params: UserUpdateParams) -> Result<User> {
        self.request(
            Method::PUT,
            &format!("/users/{}", id),
            Some(serde_json::to_value(&params)?),
            true,
        )
        .await
    }

    /// Deactivate a team user (soft delete).
    pub async fn deactivate_user(&self, id: i64) -> Result<()> {
        self.request_empty(Method::DELETE, &format!("/users/{}", id), None, true)
            .await
    }

    // -------- Uploads --------

    /// Upload an image and return the URL of the stored object.
    ///
    /// The file goes up as a multipart `file` field with no JSON
    /// content-type and no bearer token; the transport sets the multipart
    /// boundary. Uploads are independent of one another: concurrent calls
    /// share no state and complete in no guaranteed order. Display order is
    /// assigned by the caller via
    /// [`PropertyImageParams::with_order_index`], not upload completion
    /// order.
    pub async fn upload_image(&self, filename: &str, bytes: Vec<u8>) -> Result<String> {
        let part = multipart::Part::bytes(bytes).file_name(filename.to_string());
        let form = multipart::Form::new().part("file", part);
        let builder = self
            .client
            .post(self.endpoint("/uploads/image"))
            .multipart(form);
        let response: UploadResponse = self.execute(builder).await?;
        observability::UPLOADS.click();
        Ok(response.url)
    }

    /// Upload an image from disk; the multipart filename is taken from the
    /// path.
    pub async fn upload_image_file(&self, path: &Path) -> Result<String> {
        let bytes = tokio::fs::read(path)
            .await
            .map_err(|e| Error::io(format!("Failed to read {}", path.display()), e))?;
        let filename = path
            .file_name()
            .and_then(|n| n.to_str())
            .unwrap_or("upload")
            .to_string();
        self.upload_image(&filename, bytes).await
    }

    // -------- Chat --------

    /// Exchange one chat utterance for the assistant's reply.
    ///
    /// Stateless across calls: the service remembers nothing, so continuity
    /// requires resending prior turns in the request's history. See
    /// [`crate::chat::ChatSession`] for a wrapper that does this.
    pub async fn chat(&self, request: ChatRequest) -> Result<String> {
        let response: ChatResponse = self
            .request(
                Method::POST,
                "/chat",
                Some(serde_json::to_value(&request)?),
                false,
            )
            .await?;
        observability::CHAT_TURNS.click();
        Ok(response.reply)
    }
}

impl fmt::Debug for Coastline {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Coastline")
            .field("base_url", &self.base_url)
            .field("timeout", &self.timeout)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::session::MemoryTokenStore;

    fn test_client(tokens: Arc<dyn TokenStore>) -> Coastline {
        Coastline::with_options(
            Some("https://api.coastalvision.example".to_string()),
            Some(Duration::from_secs(5)),
            Some(tokens),
        )
        .unwrap()
    }

    #[test]
    fn client_creation() {
        let client = test_client(Arc::new(MemoryTokenStore::new()));
        assert_eq!(client.base_url, "https://api.coastalvision.example");
        assert_eq!(client.timeout, Duration::from_secs(5));
    }

    #[test]
    fn base_url_trailing_slash_is_trimmed() {
        let client = Coastline::with_options(
            Some("https://api.coastalvision.example/".to_string()),
            None,
            Some(Arc::new(MemoryTokenStore::new())),
        )
        .unwrap();
        assert_eq!(
            client.endpoint("/public/properties"),
            "https://api.coastalvision.example/public/properties"
        );
    }

    #[test]
    fn invalid_base_url_is_rejected() {
        let result = Coastline::with_options(
            Some("not a url".to_string()),
            None,
            Some(Arc::new(MemoryTokenStore::new())),
        );
        assert!(result.is_err());
    }

    #[test]
    fn bearer_header_attached_when_token_bound() {
        let client = test_client(Arc::new(MemoryTokenStore::with_token("tok-123")));
        let headers = client.default_headers(true);
        assert_eq!(
            headers.get(header::AUTHORIZATION).unwrap(),
            "Bearer tok-123"
        );
        assert_eq!(headers.get(header::CONTENT_TYPE).unwrap(), "application/json");
    }

    #[test]
    fn bearer_header_omitted_when_no_token() {
        let client = test_client(Arc::new(MemoryTokenStore::new()));
        let headers = client.default_headers(true);
        assert!(headers.get(header::AUTHORIZATION).is_none());
    }

    #[test]
    fn bearer_header_omitted_when_auth_not_requested() {
        let client = test_client(Arc::new(MemoryTokenStore::with_token("tok-123")));
        let headers = client.default_headers(false);
        assert!(headers.get(header::AUTHORIZATION).is_none());
    }

    #[test]
    fn logout_clears_the_store() {
        let tokens: Arc<dyn TokenStore> = Arc::new(MemoryTokenStore::with_token("tok-123"));
        let client = test_client(tokens.clone());
        assert_eq!(client.token(), Some("tok-123".to_string()));

        client.logout().unwrap();
        assert_eq!(client.token(), None);
        assert_eq!(tokens.get(), None);
    }
}
