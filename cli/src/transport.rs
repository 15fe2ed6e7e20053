//! Executes `HttpRequest` values built by the core client.

use todo_core::{HttpMethod, HttpRequest, HttpResponse};

use crate::error::{CliError, CliResult};

pub trait Transport {
    fn execute(&self, request: HttpRequest) -> CliResult<HttpResponse>;
}

/// Blocking transport over `ureq`.
///
/// Status-code-as-error is disabled so 4xx/5xx responses come back as data
/// and the core client decides what they mean.
pub struct UreqTransport {
    agent: ureq::Agent,
}

impl UreqTransport {
    pub fn new() -> Self {
        let agent = ureq::Agent::config_builder()
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
    fn execute(&self, request: HttpRequest) -> CliResult<HttpResponse> {
        tracing::debug!(method = %request.method, url = %request.url, "sending request");

        let HttpRequest {
            method, url, body, ..
        } = request;
        let body = body.unwrap_or_default();

        let result = match method {
            HttpMethod::Get => self.agent.get(&url).call(),
            HttpMethod::Delete => self.agent.delete(&url).call(),
            HttpMethod::Post => self
                .agent
                .post(&url)
                .content_type("application/json")
                .send(body.as_bytes()),
            HttpMethod::Patch => self
                .agent
                .patch(&url)
                .content_type("application/json")
                .send(body.as_bytes()),
        };
        let mut response = result.map_err(|e| CliError::Transport(e.to_string()))?;

        let status = response.status().as_u16();
        let body = response
            .body_mut()
            .read_to_string()
            .map_err(|e| CliError::Transport(e.to_string()))?;
        tracing::debug!(status, "response received");

        Ok(HttpResponse::new(status, body))
    }
}
