/**
 * Session Management
 *
 * In-memory session store keyed by an opaque session id carried in a
 * cookie. Sessions are created by the login handshake and destroyed by the
 * session gate on failed checks.
 */

use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use axum::http::{header, HeaderMap};
use chrono::{DateTime, Utc};

/// Name of the session cookie
pub const SESSION_COOKIE: &str = "boardz_sid";

/// An authenticated session
#[derive(Clone, Debug)]
pub struct Session {
    /// Email asserted by the identity provider at login
    pub email: String,
    pub created_at: DateTime<Utc>,
}

/// Shared session store
///
/// Cloneable handle over a mutex-guarded map; lives in the application
/// state.
#[derive(Clone, Default)]
pub struct SessionStore {
    sessions: Arc<Mutex<HashMap<String, Session>>>,
}

impl SessionStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a session for an email, returning the new session id
    pub fn create(&self, email: String) -> String {
        let sid = uuid::Uuid::new_v4().to_string();
        let session = Session {
            email,
            created_at: Utc::now(),
        };
        self.sessions
            .lock()
            .expect("session store lock poisoned")
            .insert(sid.clone(), session);
        sid
    }

    /// Look up a session by id
    pub fn get(&self, sid: &str) -> Option<Session> {
        self.sessions
            .lock()
            .expect("session store lock poisoned")
            .get(sid)
            .cloned()
    }

    /// Destroy a session, if it exists
    pub fn destroy(&self, sid: &str) {
        self.sessions
            .lock()
            .expect("session store lock poisoned")
            .remove(sid);
    }

    /// Resolve the session referenced by a request's cookie, if any
    pub fn session_for(&self, headers: &HeaderMap) -> Option<Session> {
        session_id(headers).and_then(|sid| self.get(&sid))
    }
}

/// Extract the session id from a request's Cookie header
pub fn session_id(headers: &HeaderMap) -> Option<String> {
    let cookies = headers.get(header::COOKIE)?.to_str().ok()?;
    cookies.split(';').find_map(|pair| {
        let (name, value) = pair.trim().split_once('=')?;
        (name == SESSION_COOKIE).then(|| value.to_string())
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::HeaderValue;

    #[test]
    fn test_create_and_get() {
        let store = SessionStore::new();
        let sid = store.create("user@example.com".to_string());

        let session = store.get(&sid).unwrap();
        assert_eq!(session.email, "user@example.com");
    }

    #[test]
    fn test_destroy() {
        let store = SessionStore::new();
        let sid = store.create("user@example.com".to_string());

        store.destroy(&sid);
        assert!(store.get(&sid).is_none());
    }

    #[test]
    fn test_destroy_unknown_is_noop() {
        let store = SessionStore::new();
        store.destroy("nope");
    }

    #[test]
    fn test_session_id_from_cookie_header() {
        let mut headers = HeaderMap::new();
        headers.insert(
            header::COOKIE,
            HeaderValue::from_static("theme=dark; boardz_sid=abc123; lang=en"),
        );
        assert_eq!(session_id(&headers), Some("abc123".to_string()));
    }

    #[test]
    fn test_session_id_missing() {
        let headers = HeaderMap::new();
        assert_eq!(session_id(&headers), None);

        let mut headers = HeaderMap::new();
        headers.insert(header::COOKIE, HeaderValue::from_static("theme=dark"));
        assert_eq!(session_id(&headers), None);
    }

    #[test]
    fn test_session_for_resolves_cookie() {
        let store = SessionStore::new();
        let sid = store.create("user@example.com".to_string());

        let mut headers = HeaderMap::new();
        headers.insert(
            header::COOKIE,
            HeaderValue::from_str(&format!("{}={}", SESSION_COOKIE, sid)).unwrap(),
        );

        assert_eq!(
            store.session_for(&headers).map(|s| s.email),
            Some("user@example.com".to_string())
        );
    }
}
