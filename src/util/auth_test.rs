use super::*;

#[test]
fn should_redirect_unauth_when_token_missing() {
    let state = AuthState { user: None, token_present: false };
    assert!(should_redirect_unauth(&state));
}

#[test]
fn should_not_redirect_with_token_but_unknown_user() {
    let state = AuthState { user: None, token_present: true };
    assert!(!should_redirect_unauth(&state));
}

#[test]
fn should_not_redirect_when_user_exists() {
    let state = AuthState {
        user: Some(User {
            id: "u1".to_owned(),
            email: "ada@example.com".to_owned(),
            first_name: "Ada".to_owned(),
            last_name: "Lovelace".to_owned(),
        }),
        token_present: true,
    };
    assert!(!should_redirect_unauth(&state));
}

#[test]
fn browser_session_is_signed_out_outside_browser() {
    let session = browser_session();
    assert!(!session.is_authenticated());
    assert_eq!(session.restore(), AuthState::default());
}
