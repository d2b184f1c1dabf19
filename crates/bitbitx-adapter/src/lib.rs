/*
[INPUT]:  Crate modules and public type definitions
[OUTPUT]: Public bitbitx adapter crate surface
[POS]:    Crate root - module wiring
[UPDATE]: When public modules or exports change
*/

pub mod auth;
pub mod codec;
pub mod http;
pub mod types;

// Re-export commonly used types from auth
pub use auth::{Session, SessionManager};

// Re-export the envelope codec
pub use codec::EnvelopeCodec;

// Re-export commonly used types from http
pub use http::{BitbitxClient, BitbitxError, ClientConfig, EXCHANGE_NAME, Result};

// Re-export all types
pub use types::*;
