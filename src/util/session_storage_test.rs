use super::*;

fn profile_json() -> String {
    r#"{"id": "u1", "email": "dev@example.com", "full_name": "Dev One"}"#.to_owned()
}

#[test]
fn decodes_token_and_user_together() {
    let stored = decode_stored(Some("tok123".to_owned()), Some(profile_json())).unwrap();
    assert_eq!(stored.token, "tok123");
    assert_eq!(stored.user.id, "u1");
    assert_eq!(stored.user.email, "dev@example.com");
}

#[test]
fn missing_token_reads_as_signed_out() {
    assert_eq!(decode_stored(None, Some(profile_json())), None);
}

#[test]
fn empty_token_reads_as_signed_out() {
    assert_eq!(decode_stored(Some(String::new()), Some(profile_json())), None);
}

#[test]
fn token_without_user_reads_as_signed_out() {
    assert_eq!(decode_stored(Some("tok123".to_owned()), None), None);
}

#[test]
fn corrupt_user_record_reads_as_signed_out() {
    let corrupt = Some("{not json".to_owned());
    assert_eq!(decode_stored(Some("tok123".to_owned()), corrupt), None);
}

#[test]
fn sparse_stored_user_takes_defaults() {
    let stored = decode_stored(Some("tok123".to_owned()), Some(r#"{"id": "u9"}"#.to_owned()));
    let stored = stored.unwrap();
    assert_eq!(stored.user.experience_level, "entry");
    assert!(stored.user.skills.is_empty());
}
