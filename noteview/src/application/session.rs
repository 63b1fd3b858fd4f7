// src/application/session.rs
use tracing::{debug, info};
use url::form_urlencoded;

use crate::domain::{DomainError, Notification};
use crate::ports::Notifier;

/// Who is signed in for the lifetime of one run
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Session {
    user: Option<String>,
}

impl Session {
    pub fn signed_out() -> Self {
        Self::default()
    }

    pub fn signed_in(user: impl Into<String>) -> Self {
        let mut session = Self::default();
        session.sign_in(user);
        session
    }

    pub fn sign_in(&mut self, user: impl Into<String>) {
        let user = user.into();
        info!(%user, "Signed in");
        self.user = Some(user);
    }

    pub fn sign_out(&mut self) {
        if let Some(user) = self.user.take() {
            info!(%user, "Signed out");
        }
    }

    pub fn is_authenticated(&self) -> bool {
        self.user.is_some()
    }

    /// Landing page for this session
    pub fn home_route(&self) -> &'static str {
        if self.is_authenticated() {
            "/dashboard"
        } else {
            "/"
        }
    }
}

/// Gate for pages that need a signed-in user
pub struct RouteGuard<N: Notifier> {
    notifier: N,
}

impl<N: Notifier> RouteGuard<N> {
    pub fn new(notifier: N) -> Self {
        Self { notifier }
    }

    pub fn check(&self, session: &Session, path: &str) -> Result<(), DomainError> {
        if session.is_authenticated() {
            debug!(path, "Route allowed");
            return Ok(());
        }
        self.notifier.notify(Notification::destructive(
            "Authentication required",
            "Please sign in to access this page",
        ));
        Err(DomainError::Unauthenticated(path.to_string()))
    }
}

/// Where to send an anonymous visitor so they come back to `path` afterwards
pub fn sign_in_redirect(path: &str) -> String {
    let query = form_urlencoded::Serializer::new(String::new())
        .append_pair("from", path)
        .finish();
    format!("/signin?{query}")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infrastructure::notifier::RecordingNotifier;
    use rstest::rstest;

    #[test]
    fn given_signed_in_session_when_checking_route_then_allows() {
        let notifier = RecordingNotifier::new();
        let guard = RouteGuard::new(notifier.clone());

        let result = guard.check(&Session::signed_in("john@example.com"), "/dashboard");

        assert!(result.is_ok());
        assert!(notifier.notifications().is_empty());
    }

    #[test]
    fn given_signed_out_session_when_checking_route_then_rejects_and_notifies() {
        let notifier = RecordingNotifier::new();
        let guard = RouteGuard::new(notifier.clone());

        let result = guard.check(&Session::signed_out(), "/notes/all");

        assert_eq!(result, Err(DomainError::Unauthenticated("/notes/all".to_string())));
        let last = notifier.last().unwrap();
        assert!(last.is_destructive());
        assert_eq!(last.title, "Authentication required");
    }

    #[test]
    fn given_session_when_signing_out_then_home_route_changes() {
        let mut session = Session::signed_in("john@example.com");
        assert_eq!(session.home_route(), "/dashboard");

        session.sign_out();

        assert!(!session.is_authenticated());
        assert_eq!(session.home_route(), "/");
    }

    #[rstest]
    #[case("/note/1", "/signin?from=%2Fnote%2F1")]
    #[case("/notes/all", "/signin?from=%2Fnotes%2Fall")]
    #[case("/note/1?version=v2&x=y", "/signin?from=%2Fnote%2F1%3Fversion%3Dv2%26x%3Dy")]
    fn given_path_when_building_redirect_then_encodes_it_as_query_value(
        #[case] path: &str,
        #[case] expected: &str,
    ) {
        assert_eq!(sign_in_redirect(path), expected);
    }
}
