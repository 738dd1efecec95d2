use crate::FetchError;
use reqwest::blocking::Client;
use serde::Serialize;

/// Status and body of an HTTP response.
#[derive(Debug, Clone, PartialEq)]
pub struct HttpResponse {
    /// HTTP status code.
    pub status: u16,

    /// Response body as text.
    pub body: String,
}

impl HttpResponse {
    /// Returns `true` for 2xx status codes.
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// Sends a JSON body with a bearer token and returns the raw response.
///
/// A non-success status is not an error at this level; it is returned as an
/// [`HttpResponse`] and interpreted by the client.
pub trait Transport {
    /// Sends `body` to `url` as a POST request.
    fn post_json<B: Serialize>(
        &self,
        url: &str,
        bearer: &str,
        body: &B,
    ) -> Result<HttpResponse, FetchError>;
}

/// [`Transport`] on a blocking [`reqwest`] client.
#[derive(Debug, Clone, Default)]
pub struct ReqwestTransport {
    client: Client,
}

impl ReqwestTransport {
    /// Constructs a transport with a default client.
    pub fn new() -> Self {
        Self {
            client: Client::new(),
        }
    }

    /// Constructs a transport on a preconfigured client, e.g. one with a timeout.
    pub fn with_client(client: Client) -> Self {
        Self { client }
    }
}

impl Transport for ReqwestTransport {
    fn post_json<B: Serialize>(
        &self,
        url: &str,
        bearer: &str,
        body: &B,
    ) -> Result<HttpResponse, FetchError> {
        let resp = self
            .client
            .post(url)
            .bearer_auth(bearer)
            .json(body) // auto serialize
            .send()
            .map_err(|e| FetchError::Network(e.to_string()))?;
        let status = resp.status().as_u16();
        let body = resp
            .text()
            .map_err(|e| FetchError::Network(e.to_string()))?;

        Ok(HttpResponse { status, body })
    }
}
