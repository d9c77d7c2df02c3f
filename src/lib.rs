//! Tokopay SDK for Rust.
//!
//! A typed client for the Tokopay payment gateway: merchant balance,
//! order creation, status checks, retry/cancel, and balance withdrawal.
//!
//! # Quick Start
//!
//! ```rust,no_run
//! use tokopay_sdk::{ApiOutcome, TokopayClient};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), tokopay_sdk::TokopayError> {
//!     let client = TokopayClient::new("M250101ABCDEF", "your-secret-key")?;
//!
//!     match client.simple_order("INV-1001", "QRIS", 10_000.0).await? {
//!         ApiOutcome::Success(order) => println!("pay at {:?}", order.pay_url),
//!         ApiOutcome::Rejected(err) => println!("gateway said no: {}", err.message),
//!     }
//!     Ok(())
//! }
//! ```
//!
//! ## Full Order
//!
//! ```rust,no_run
//! use tokopay_sdk::{CreateOrderParams, OrderItem, TokopayClient};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), tokopay_sdk::TokopayError> {
//!     let client = TokopayClient::from_env()?;
//!
//!     let params = CreateOrderParams::new("DANA", "INV-1002", 15_000.0, "John Doe", "john@example.com")
//!         .customer_phone("081234567890")
//!         .redirect_url("https://shop.example.com/callback")
//!         .items(vec![OrderItem {
//!             product_code: "SKU-1".into(),
//!             name: "Test Product".into(),
//!             price: 15_000.0,
//!             product_url: None,
//!             image_url: None,
//!         }]);
//!
//!     let order = client.create_order(&params).await?.into_result()?;
//!     println!("trx_id: {:?}", order.trx_id);
//!     Ok(())
//! }
//! ```
//!
//! # Logging
//!
//! This crate emits debug-level logs through the [`log`](https://docs.rs/log/) facade.
//! Call lines never include the secret key. With [`ClientConfig::debug`] set, full
//! requests (secret redacted) and responses are also logged under the
//! `tokopay_sdk::trace` target.
//!
//! # Errors
//!
//! Every failure is a [`TokopayError`] with a stable [`ErrorCode`]:
//!
//! - Validation failures (`VALIDATION_ERROR`) are raised before any I/O.
//! - Transport failures map HTTP 401/400/404 to `AUTHENTICATION_ERROR`,
//!   `VALIDATION_ERROR`, `ORDER_ERROR`; anything else is `NETWORK_ERROR`.
//! - Malformed payloads raise `EMPTY_RESPONSE` or `INVALID_RESPONSE`.
//!
//! A business rejection by the gateway (its `status` is not `"Success"`) is not
//! an error: it comes back as [`ApiOutcome::Rejected`]. Use
//! [`ApiOutcome::into_result`] to fold it into `?` chains.
pub mod api;
pub mod client;
pub mod config;
pub mod encoding;
pub mod errors;
pub mod models;
pub mod response;
pub mod signer;
pub mod transport;
pub mod validation;

// Re-export primary types for convenience.
pub use client::TokopayClient;
pub use config::{ClientConfig, DEFAULT_API_BASE};
pub use errors::{ErrorCode, ErrorDetails, TokopayError};
pub use models::*;
pub use response::{ApiOutcome, RemoteError};
pub use signer::{sign, Credentials};
pub use transport::{HttpTransport, Transport, TransportError};
