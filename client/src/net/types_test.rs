use super::*;

#[test]
fn user_deserializes_without_auth_method() {
    let user: User = serde_json::from_str(r#"{"id":"u1","name":"Alice","avatar_url":null}"#).unwrap();
    assert_eq!(user.id, "u1");
    assert_eq!(user.auth_method, "session");
}

#[test]
fn user_ignores_extra_profile_fields() {
    let user: User =
        serde_json::from_str(r#"{"id":"u2","name":"Bo","avatar_url":"https://a/b.png","auth_method":"email","age":31}"#)
            .unwrap();
    assert_eq!(user.avatar_url.as_deref(), Some("https://a/b.png"));
    assert_eq!(user.auth_method, "email");
}
