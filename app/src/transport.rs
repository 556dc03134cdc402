//! Blocking HTTP transport backed by ureq.

use todo_core::{HttpMethod, HttpRequest, HttpResponse, Transport, TransportError};
use ureq::{Agent, RequestBuilder};

/// Executes core requests over the network with a shared ureq agent.
///
/// ureq's status-code-as-error behavior is disabled so 4xx/5xx responses
/// come back as data, leaving status interpretation to the core client.
#[derive(Clone)]
pub struct UreqTransport {
    agent: Agent,
}

impl UreqTransport {
    pub fn new() -> Self {
        let agent = Agent::config_builder()
            .http_status_as_error(false)
            .build()
            .new_agent();
        Self { agent }
    }
}

impl Default for UreqTransport {
    fn default() -> Self {
        Self::new()
    }
}

impl Transport for UreqTransport {
    fn execute(&self, request: &HttpRequest) -> Result<HttpResponse, TransportError> {
        let path = request.path.as_str();
        let body = request.body.as_deref().unwrap_or_default().as_bytes();
        let headers = &request.headers;

        let result = match request.method {
            HttpMethod::Get => with_headers(self.agent.get(path), headers).call(),
            HttpMethod::Delete => with_headers(self.agent.delete(path), headers).call(),
            HttpMethod::Post => with_headers(self.agent.post(path), headers).send(body),
            HttpMethod::Put => with_headers(self.agent.put(path), headers).send(body),
        };
        let mut response = result.map_err(|e| TransportError::Connection(e.to_string()))?;

        let status = response.status().as_u16();
        let headers = response
            .headers()
            .iter()
            .filter_map(|(name, value)| Some((name.to_string(), value.to_str().ok()?.to_string())))
            .collect();
        let body = response
            .body_mut()
            .read_to_string()
            .map_err(|e| TransportError::Connection(e.to_string()))?;

        Ok(HttpResponse { status, headers, body })
    }
}

fn with_headers<B>(mut builder: RequestBuilder<B>, headers: &[(String, String)]) -> RequestBuilder<B> {
    for (name, value) in headers {
        builder = builder.header(name.as_str(), value.as_str());
    }
    builder
}
