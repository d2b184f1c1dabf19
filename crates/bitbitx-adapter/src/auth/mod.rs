/*
[INPUT]:  Login results and session state
[OUTPUT]: Public auth layer surface
[POS]:    Auth layer - module wiring
[UPDATE]: When adding auth flows or changing session handling
*/

pub mod session;

pub use session::{Session, SessionManager};
