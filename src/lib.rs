//! Mathscope - a terminal client for an interactive mathematics API.
//!
//! Equation solving, matrix arithmetic, differentiation, integration and
//! function evaluation all happen on a remote backend reached over HTTP/JSON.
//! This crate collects the input, sends the requests, and keeps the returned
//! curves in step with the visible range of each chart.
//!
//! # Features
//!
//! - Quadratic, cubic and polynomial root finding
//! - Matrix addition, subtraction and multiplication
//! - Derivatives and integrals plotted next to the original function
//! - y = f(x) and parametric plots that refetch on pan and zoom
//! - Locally sampled rose curves
//! - PNG export and clipboard copy of results
//!
//! # Example
//!
//! ```ignore
//! use mathscope::api::ApiClient;
//! use mathscope::config::Config;
//! use mathscope::forms;
//! use mathscope::view::ViewRange;
//!
//! let client = ApiClient::new(&Config::new("http://127.0.0.1:5000"));
//! let request = forms::general_plot_request("sin(x) / x", ViewRange::default())?;
//! let response = client.send(&request)?;
//! ```

#![warn(
    missing_docs,
    missing_debug_implementations,
    rust_2018_idioms,
    unreachable_pub
)]
#![deny(unsafe_code)]

pub mod api;
pub mod app;
pub mod chart;
pub mod clipboard;
pub mod config;
pub mod error;
pub mod forms;
pub mod pages;
pub mod sampler;
pub mod series;
pub mod sync;
pub mod ui;
pub mod util;
pub mod view;
pub mod worker;

pub use error::{MathscopeError, Result};
