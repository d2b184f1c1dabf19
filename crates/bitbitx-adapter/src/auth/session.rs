/*
[INPUT]:  uuid/token pairs from successful logins
[OUTPUT]: Session retrieval and authentication status
[POS]:    Auth layer - session lifecycle management
[UPDATE]: When adding session refresh or changing storage strategy
*/

use std::sync::{Arc, RwLock};

/// The authenticated identity pair a successful login returns.
///
/// Authenticated calls send both values back as the `token` and `uuid`
/// headers.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Session {
    pub uuid: String,
    pub token: String,
}

/// Thread-safe holder for the current session.
///
/// Owned by the client instance rather than process-wide, so separate
/// clients keep separate identities. Concurrent logins race benignly:
/// the last write wins.
#[derive(Debug, Clone, Default)]
pub struct SessionManager {
    data: Arc<RwLock<Option<Session>>>,
}

impl SessionManager {
    /// Create a new empty session manager
    pub fn new() -> Self {
        Self {
            data: Arc::new(RwLock::new(None)),
        }
    }

    /// Store a new session
    pub fn set(&self, uuid: String, token: String) {
        let mut guard = self.data.write().unwrap();
        *guard = Some(Session { uuid, token });
    }

    /// Get the current session if available
    pub fn get(&self) -> Option<Session> {
        let guard = self.data.read().unwrap();
        guard.clone()
    }

    /// Whether a login has populated the session
    pub fn is_authenticated(&self) -> bool {
        let guard = self.data.read().unwrap();
        guard.is_some()
    }

    /// Clear the stored session
    pub fn clear(&self) {
        let mut guard = self.data.write().unwrap();
        *guard = None;
    }
}
