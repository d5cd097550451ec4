//! # Currency Converter Types
//!
//! Request value objects and response shapes for the currency converter API.
//! This crate has no IO dependencies - only data structures and the
//! validation rules requests must pass before they are sent.
//!
//! - `request` - parameters for the convert endpoints
//! - `response` - JSON shapes returned by every endpoint
//! - `error` - request validation errors

pub mod error;
pub mod request;
pub mod response;

pub use error::RequestError;
pub use request::{ConvertHistoricalRequest, ConvertRequest, DATE_FORMAT};
pub use response::*;
