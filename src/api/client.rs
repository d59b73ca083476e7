//! Blocking HTTP client for the computation backend.

use serde::de::DeserializeOwned;

use super::types::{
    root_text, ApiRequest, ApiResponse, CalculusBody, ErrorBody, MatrixBody, PlotBody, RootsBody,
};
use crate::config::Config;
use crate::error::{MathscopeError, Result, GENERIC_BACKEND_ERROR};
use crate::series::PlotSeries;

/// Client for the backend's JSON endpoints.
///
/// Cheap to clone; clones share the underlying connection pool.
#[derive(Debug, Clone)]
pub struct ApiClient {
    agent: ureq::Agent,
    config: Config,
}

impl ApiClient {
    /// Create a client for the configured backend.
    pub fn new(config: &Config) -> Self {
        let agent = ureq::AgentBuilder::new().timeout(config.timeout).build();
        Self {
            agent,
            config: config.clone(),
        }
    }

    /// Base URL requests are sent to.
    pub fn base_url(&self) -> &str {
        &self.config.api_url
    }

    /// Send a request and decode the response for its endpoint.
    pub fn send(&self, request: &ApiRequest) -> Result<ApiResponse> {
        match request {
            ApiRequest::Solve(_) | ApiRequest::Polynomial(_) => {
                let body: RootsBody = self.post(request)?;
                Ok(ApiResponse::Roots(body.roots.iter().map(root_text).collect()))
            },
            ApiRequest::Matrix(_) => {
                let body: MatrixBody = self.post(request)?;
                Ok(ApiResponse::Matrix(body.result))
            },
            ApiRequest::Calculus(_) => {
                let body: CalculusBody = self.post(request)?;
                Ok(ApiResponse::Calculus {
                    expression: body.result_expression,
                    original: PlotSeries::from_wire(&body.plot_data.original),
                    result: PlotSeries::from_wire(&body.plot_data.result),
                })
            },
            ApiRequest::GeneralPlot(_) | ApiRequest::Parametric(_) => {
                let body: PlotBody = self.post(request)?;
                Ok(ApiResponse::Plot(PlotSeries::from_wire(&body.plot_data)))
            },
        }
    }

    fn post<T: DeserializeOwned>(&self, request: &ApiRequest) -> Result<T> {
        let url = self.config.endpoint(request.path());
        tracing::debug!("POST {}", url);

        match self.agent.post(&url).send_json(request) {
            Ok(response) => response
                .into_json::<T>()
                .map_err(|e| MathscopeError::Transport(format!("unreadable response: {}", e))),
            Err(ureq::Error::Status(code, response)) => {
                let body: ErrorBody = response
                    .into_json()
                    .map_err(|e| MathscopeError::Transport(format!("unreadable error body: {}", e)))?;
                let message = body
                    .error
                    .unwrap_or_else(|| GENERIC_BACKEND_ERROR.to_string());
                tracing::warn!("{} returned {}: {}", url, code, message);
                Err(MathscopeError::Backend(message))
            },
            Err(ureq::Error::Transport(transport)) => {
                tracing::error!("{} unreachable: {}", url, transport);
                Err(transport.into())
            },
        }
    }
}
