use super::*;
use tabguard::Identity;

fn snapshot(phase: InitPhase, identity: Option<&str>) -> SessionSnapshot {
    SessionSnapshot { phase, identity: identity.map(Identity::new), ..SessionSnapshot::default() }
}

#[test]
fn redirect_unauth_once_initialized_without_identity() {
    assert!(should_redirect_unauth(&snapshot(InitPhase::Initialized, None)));
}

#[test]
fn no_redirect_while_bootstrap_pending() {
    assert!(!should_redirect_unauth(&snapshot(InitPhase::NotStarted, None)));
    assert!(!should_redirect_unauth(&snapshot(InitPhase::Initializing, None)));
}

#[test]
fn no_unauth_redirect_when_identity_present() {
    assert!(!should_redirect_unauth(&snapshot(InitPhase::Initialized, Some("u1"))));
}

#[test]
fn leave_auth_page_only_when_signed_in_and_settled() {
    assert!(should_leave_auth_page(&snapshot(InitPhase::Initialized, Some("u1"))));
    assert!(!should_leave_auth_page(&snapshot(InitPhase::Initializing, Some("u1"))));
    assert!(!should_leave_auth_page(&snapshot(InitPhase::Initialized, None)));
}
