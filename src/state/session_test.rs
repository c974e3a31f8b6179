use super::*;

fn user(uid: &str) -> UserIdentity {
    UserIdentity {
        uid: uid.to_owned(),
        email: Some(format!("{uid}@example.com")),
    }
}

#[test]
fn default_session_is_unknown() {
    let s = SessionState::default();
    assert_eq!(s.status, SessionStatus::Unknown);
    assert!(s.user.is_none());
    assert!(!s.is_resolved());
}

#[test]
fn event_with_user_is_authenticated() {
    let s = SessionState::from_event(Some(user("u1")));
    assert_eq!(s.status, SessionStatus::Authenticated);
    assert_eq!(s.user.as_ref().map(|u| u.uid.as_str()), Some("u1"));
    assert!(s.is_resolved());
}

#[test]
fn event_without_user_is_unauthenticated() {
    let s = SessionState::from_event(None);
    assert_eq!(s.status, SessionStatus::Unauthenticated);
    assert!(s.user.is_none());
    assert!(s.is_resolved());
}

#[test]
fn status_never_returns_to_unknown_through_events() {
    // A sign-out after a sign-in lands on Unauthenticated, not Unknown.
    let signed_in = SessionState::from_event(Some(user("u1")));
    assert_eq!(signed_in.status, SessionStatus::Authenticated);
    let signed_out = SessionState::from_event(None);
    assert_eq!(signed_out.status, SessionStatus::Unauthenticated);
}
