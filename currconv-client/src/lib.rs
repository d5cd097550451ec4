//! # Currency Converter Client SDK
//!
//! A typed Rust client for the currency converter API.
//!
//! ```no_run
//! use currconv_client::{ApiClient, Config};
//! use currconv_types::ConvertRequest;
//!
//! # async fn run() -> Result<(), currconv_client::ClientError> {
//! let client = ApiClient::new(Config::new("https://free.currconv.com", "v7", "my-key"));
//! let rates = client
//!     .convert_compact(&ConvertRequest::new(["USD_MYR", "MYR_USD"]))
//!     .await?;
//! println!("{:?}", rates.get("USD_MYR"));
//! # Ok(())
//! # }
//! ```

mod client;
mod config;
mod error;

pub use client::ApiClient;
pub use config::{Config, DEFAULT_BASE_URL, DEFAULT_VERSION};
pub use error::{ClientError, ConfigError};
