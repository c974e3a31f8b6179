use super::*;

fn test_config() -> IdentityConfig {
    IdentityConfig {
        api_key: "k123",
        auth_domain: "demo.example.app",
    }
}

#[test]
fn endpoints_carry_the_api_key() {
    assert_eq!(
        password_sign_in_endpoint("k123"),
        "https://identitytoolkit.googleapis.com/v1/accounts:signInWithPassword?key=k123"
    );
    assert_eq!(
        sign_up_endpoint("k123"),
        "https://identitytoolkit.googleapis.com/v1/accounts:signUp?key=k123"
    );
    assert_eq!(
        idp_sign_in_endpoint("k123"),
        "https://identitytoolkit.googleapis.com/v1/accounts:signInWithIdp?key=k123"
    );
    assert_eq!(refresh_endpoint("k123"), "https://securetoken.googleapis.com/v1/token?key=k123");
}

#[test]
fn popup_url_and_origin_derive_from_the_auth_domain() {
    let config = test_config();
    assert_eq!(auth_origin(&config), "https://demo.example.app");
    assert_eq!(
        federated_popup_url(&config, GOOGLE_PROVIDER_ID),
        "https://demo.example.app/__/auth/handler?apiKey=k123&authType=signInViaPopup&providerId=google.com"
    );
}

#[test]
fn refresh_body_percent_encodes_the_token() {
    assert_eq!(
        refresh_request_body("ab/cd+ef"),
        "grant_type=refresh_token&refresh_token=ab%2Fcd%2Bef"
    );
}

#[test]
fn idp_post_body_encodes_token_and_names_provider() {
    assert_eq!(
        idp_post_body("google.com", "a.b.c"),
        "id_token=a.b.c&providerId=google.com"
    );
}

#[test]
fn password_request_serializes_camel_case() {
    let req = PasswordAuthRequest {
        email: "a@b.com",
        password: "secret1",
        return_secure_token: true,
    };
    let value = serde_json::to_value(&req).unwrap();
    assert_eq!(value["email"], "a@b.com");
    assert_eq!(value["password"], "secret1");
    assert_eq!(value["returnSecureToken"], true);
}

#[test]
fn auth_response_parses_with_and_without_email() {
    let with_email: AuthSuccessResponse = serde_json::from_str(
        r#"{"localId":"u1","email":"a@b.com","idToken":"t","refreshToken":"r","expiresIn":"3600"}"#,
    )
    .unwrap();
    assert_eq!(with_email.local_id, "u1");
    assert_eq!(with_email.email.as_deref(), Some("a@b.com"));

    let without_email: AuthSuccessResponse =
        serde_json::from_str(r#"{"localId":"u2","idToken":"t","refreshToken":"r","expiresIn":"3600"}"#).unwrap();
    assert_eq!(without_email.email, None);
}

#[test]
fn refresh_response_parses_snake_case() {
    let resp: RefreshResponse = serde_json::from_str(
        r#"{"user_id":"u1","id_token":"t2","refresh_token":"r2","expires_in":"3600","token_type":"Bearer"}"#,
    )
    .unwrap();
    assert_eq!(resp.user_id, "u1");
    assert_eq!(resp.id_token, "t2");
}

#[test]
fn popup_messages_require_the_credential_kind() {
    let valid = r#"{"kind":"identity-credential","provider_id":"google.com","id_token":"a.b.c"}"#;
    let parsed = parse_popup_message(valid).unwrap();
    assert_eq!(parsed.provider_id, "google.com");
    assert_eq!(parsed.id_token, "a.b.c");

    let wrong_kind = r#"{"kind":"other","provider_id":"google.com","id_token":"a.b.c"}"#;
    assert_eq!(parse_popup_message(wrong_kind), None);
    assert_eq!(parse_popup_message("not json"), None);
    assert_eq!(parse_popup_message("42"), None);
}
