//! Backend API: typed request/response bodies and the HTTP client.

mod client;
mod types;

pub use client::ApiClient;
pub use types::{
    ApiRequest, ApiResponse, CalculusOperation, CalculusRequest, GeneralPlotRequest,
    MatrixOperation, MatrixRequest, ParameterRange, ParametricRequest, PolynomialRequest,
    SolveRequest,
};
