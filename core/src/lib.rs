//! Async API client core for the EV analytics backend.
//!
//! # Overview
//! `RequestClient` performs one JSON round trip against a fixed base address
//! and returns either the decoded payload or a single normalized `ApiError`,
//! whatever went wrong (transport failure, non-2xx status, undecodable body).
//! Feature façades in `api` pair each backend endpoint with a method.
//!
//! # Design
//! - `RequestClient` is stateless: it holds only `base_url` and a `Transport`.
//! - Each call is split into `build_request` and `parse_response` around the
//!   transport round trip, so the I/O boundary is explicit and both halves
//!   are testable as plain data.
//! - Endpoint paths and reference tables are immutable values injected at
//!   construction, not globals.

pub mod api;
pub mod catalog;
pub mod client;
pub mod config;
pub mod error;
pub mod format;
pub mod geo;
pub mod http;
pub mod transport;
pub mod types;

#[cfg(test)]
mod testing;

pub use api::{BatteryApi, DrivingApi, EnergyApi, EvApi, OptimalPathApi, WeatherApi};
pub use client::{query_path, RequestClient};
pub use config::{ApiConfig, Endpoints};
pub use error::{ApiError, ErrorBody};
pub use http::{HttpMethod, HttpRequest, HttpResponse, RequestOptions};
pub use transport::{ReqwestTransport, Transport, TransportError};
