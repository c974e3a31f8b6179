use super::*;

#[test]
fn credentials_project_to_user_identity() {
    let creds = StoredCredentials {
        uid: "u1".to_owned(),
        email: Some("a@b.com".to_owned()),
        id_token: "tok".to_owned(),
        refresh_token: "ref".to_owned(),
        expires_at_ms: 1_000.0,
    };
    let user = creds.user();
    assert_eq!(user.uid, "u1");
    assert_eq!(user.email.as_deref(), Some("a@b.com"));
}

#[test]
fn token_freshness_honors_the_skew() {
    let expires = 1_000_000.0;
    assert!(token_is_fresh(expires - TOKEN_EXPIRY_SKEW_MS - 1.0, expires));
    assert!(!token_is_fresh(expires - TOKEN_EXPIRY_SKEW_MS, expires));
    assert!(!token_is_fresh(expires, expires));
    assert!(!token_is_fresh(expires + 1.0, expires));
}

#[test]
fn expiry_parses_seconds_string() {
    assert_eq!(expiry_from_now(0.0, "3600"), 3_600_000.0);
    assert_eq!(expiry_from_now(500.0, "1"), 1_500.0);
}

#[test]
fn expiry_falls_back_to_one_hour() {
    assert_eq!(expiry_from_now(0.0, "not-a-number"), 3_600_000.0);
}

#[test]
fn credentials_round_trip_through_json() {
    let creds = StoredCredentials {
        uid: "u2".to_owned(),
        email: None,
        id_token: "tok".to_owned(),
        refresh_token: "ref".to_owned(),
        expires_at_ms: 42.0,
    };
    let raw = serde_json::to_string(&creds).unwrap();
    let back: StoredCredentials = serde_json::from_str(&raw).unwrap();
    assert_eq!(back, creds);
}
