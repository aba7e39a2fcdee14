//! Session resolver.
//!
//! Reuses the session id carried by the inbound cookie, or mints a fresh
//! `session_<epoch-millis>_<suffix>` id. There is no server-side session
//! store, so no uniqueness check is made against anything.

use rand::Rng;
use rand::distributions::Alphanumeric;
use tracing::debug;

use northbound_types::chat::SessionId;

/// Length of the random suffix of a minted session id.
pub const SESSION_SUFFIX_LEN: usize = 6;

/// Clock and randomness used to mint session ids.
///
/// Injectable so tests can pin the exact id that gets minted.
pub trait SessionIdSource: Send + Sync {
    /// Current wall-clock time in milliseconds since the Unix epoch.
    fn now_millis(&self) -> i64;

    /// A short lowercase alphanumeric suffix.
    fn random_suffix(&self) -> String;
}

/// Production source: system clock plus the thread-local RNG.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemSessionIdSource;

impl SessionIdSource for SystemSessionIdSource {
    fn now_millis(&self) -> i64 {
        chrono::Utc::now().timestamp_millis()
    }

    fn random_suffix(&self) -> String {
        rand::thread_rng()
            .sample_iter(&Alphanumeric)
            .take(SESSION_SUFFIX_LEN)
            .map(|b| char::from(b).to_ascii_lowercase())
            .collect()
    }
}

/// Derives the session id for one request.
#[derive(Debug, Clone, Default)]
pub struct SessionResolver<S: SessionIdSource = SystemSessionIdSource> {
    source: S,
}

impl SessionResolver<SystemSessionIdSource> {
    pub fn system() -> Self {
        Self {
            source: SystemSessionIdSource,
        }
    }
}

impl<S: SessionIdSource> SessionResolver<S> {
    pub fn new(source: S) -> Self {
        Self { source }
    }

    /// Return the cookie value unchanged when present and non-empty,
    /// otherwise mint a new id. Never fails.
    pub fn resolve(&self, cookie_value: Option<&str>) -> SessionId {
        if let Some(existing) = cookie_value.and_then(SessionId::new) {
            return existing;
        }

        let minted = SessionId::minted(self.source.now_millis(), &self.source.random_suffix());
        debug!(session_id = %minted, "Minted new chat session id");
        minted
    }
}
