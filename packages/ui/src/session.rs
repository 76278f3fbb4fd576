//! Identity state held by the client.

use api::{ApiError, UserInfo};

/// Authentication state at a point in time.
///
/// Starts out loading with no user. Each completed identity fetch replaces it
/// wholesale via [`Session::from_identity`].
#[derive(Debug, Clone, PartialEq)]
pub struct Session {
    pub is_authenticated: bool,
    pub user: Option<UserInfo>,
    pub loading: bool,
    pub error: Option<String>,
}

impl Default for Session {
    fn default() -> Self {
        Self {
            is_authenticated: false,
            user: None,
            loading: true,
            error: None,
        }
    }
}

impl Session {
    /// Session for a completed identity fetch.
    ///
    /// A `me: null` answer and a failed request both end unauthenticated; a
    /// failure additionally keeps the message in `error`.
    pub fn from_identity(result: Result<Option<UserInfo>, ApiError>) -> Self {
        match result {
            Ok(Some(user)) => Self {
                is_authenticated: true,
                user: Some(user),
                loading: false,
                error: None,
            },
            Ok(None) => Self {
                loading: false,
                ..Self::default()
            },
            Err(e) => Self {
                loading: false,
                error: Some(e.to_string()),
                ..Self::default()
            },
        }
    }

    /// Enter the transient loading state of a refetch.
    pub fn begin_refresh(&mut self) {
        self.loading = true;
    }
}

/// Hands out generation tickets for identity fetches so that a slow response
/// can never overwrite the result of a newer request.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct IdentityTracker {
    latest: u64,
}

impl IdentityTracker {
    /// Start a new fetch; every earlier ticket becomes stale.
    pub fn begin(&mut self) -> u64 {
        self.latest += 1;
        self.latest
    }

    pub fn is_current(&self, ticket: u64) -> bool {
        ticket == self.latest
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use api::Role;

    fn alice() -> UserInfo {
        UserInfo {
            id: "u1".into(),
            email: "alice@example.org".into(),
            name: Some("Alice".into()),
            avatar: None,
            role: Some(Role::Patient),
        }
    }

    #[test]
    fn test_initial_session_is_loading() {
        let session = Session::default();
        assert!(session.loading);
        assert!(!session.is_authenticated);
        assert!(session.user.is_none());
    }

    #[test]
    fn test_resolved_user() {
        let session = Session::from_identity(Ok(Some(alice())));
        assert!(session.is_authenticated);
        assert!(!session.loading);
        assert_eq!(session.user.as_ref().map(|u| u.id.as_str()), Some("u1"));
    }

    #[test]
    fn test_anonymous() {
        let session = Session::from_identity(Ok(None));
        assert!(!session.is_authenticated);
        assert!(!session.loading);
        assert!(session.error.is_none());
    }

    #[test]
    fn test_failed_refetch_drops_stale_user() {
        let mut session = Session::from_identity(Ok(Some(alice())));
        session.begin_refresh();
        assert!(session.loading);
        assert!(session.user.is_some());

        let session = Session::from_identity(Err(ApiError::Status(502)));
        assert!(!session.is_authenticated);
        assert!(session.user.is_none());
        assert!(!session.loading);
        assert_eq!(session.error.as_deref(), Some("server returned status 502"));
    }

    #[test]
    fn test_superseded_ticket_is_stale() {
        let mut tracker = IdentityTracker::default();
        let first = tracker.begin();
        let second = tracker.begin();

        assert!(!tracker.is_current(first));
        assert!(tracker.is_current(second));
    }
}
