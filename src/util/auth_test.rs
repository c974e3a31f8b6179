use super::*;

#[test]
fn unknown_defers_the_redirect() {
    let mut gate = RedirectGate::default();
    assert!(!gate.on_status(SessionStatus::Unknown));
    assert!(!gate.on_status(SessionStatus::Unknown));
}

#[test]
fn unknown_to_unauthenticated_fires_exactly_once() {
    let mut gate = RedirectGate::default();
    assert!(!gate.on_status(SessionStatus::Unknown));
    assert!(gate.on_status(SessionStatus::Unauthenticated));
    assert!(!gate.on_status(SessionStatus::Unauthenticated));
}

#[test]
fn unknown_to_authenticated_never_fires() {
    let mut gate = RedirectGate::default();
    assert!(!gate.on_status(SessionStatus::Unknown));
    assert!(!gate.on_status(SessionStatus::Authenticated));
    assert!(!gate.on_status(SessionStatus::Authenticated));
}

#[test]
fn sign_out_after_authentication_fires_once() {
    let mut gate = RedirectGate::default();
    assert!(!gate.on_status(SessionStatus::Unknown));
    assert!(!gate.on_status(SessionStatus::Authenticated));
    assert!(gate.on_status(SessionStatus::Unauthenticated));
    assert!(!gate.on_status(SessionStatus::Unauthenticated));
}
