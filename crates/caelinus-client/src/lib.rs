//! # caelinus-client
//!
//! Keeps a subscription snapshot fresh from the CAELINUS backend and answers
//! entitlement questions against it.
//!
//! - **backend**: `SubscriptionBackend` trait, the seam for transports and fakes
//! - **http**: `HttpBackend`, the reqwest implementation
//! - **service**: `PremiumService`: snapshot cache, refresh, upgrade, redeem, gating

pub mod backend;
pub mod error;
pub mod http;
pub mod service;

pub use backend::SubscriptionBackend;
pub use error::ClientError;
pub use http::HttpBackend;
pub use service::PremiumService;
