//! Synchronous REST request builder.
//!
//! # Overview
//! A `RestRequest` collects a resource path, a method and an ordered list of
//! typed parameters. A `RestClient` turns it into an `HttpRequest` value
//! (absolute URL, headers, optional body) without touching the network
//! (host-does-IO pattern). The caller executes the actual HTTP round-trip.
//!
//! # Design
//! - Adding a parameter appends it or fails immediately; only `Host` headers
//!   are validated, through `is_valid_host`.
//! - Parameter values keep their type and render through a fixed,
//!   locale-independent `Display`.
//! - `add_object` flattens any `serde::Serialize` struct into form
//!   parameters, so no reflection layer is needed.
//! - The core logs through the `log` facade and never installs a logger.

pub mod client;
pub mod error;
pub mod host;
pub mod http;
pub mod parameter;
pub mod request;

pub use client::RestClient;
pub use error::RequestError;
pub use host::is_valid_host;
pub use http::{HttpRequest, Method};
pub use parameter::{ParamValue, Parameter, ParameterKind};
pub use request::RestRequest;
