/*
[INPUT]:  HTTP client configuration and the service endpoint
[OUTPUT]: HTTP responses and typed API results
[POS]:    HTTP layer - encrypted REST communication
[UPDATE]: When adding new service calls or changing client behavior
*/

pub mod account;
pub mod client;
pub mod error;
pub mod service;

pub use error::{BitbitxError, Result};

pub use client::{BitbitxClient, ClientConfig, EXCHANGE_NAME};
