use super::*;

#[test]
fn parse_skills_splits_and_trims() {
    assert_eq!(
        parse_skills("Rust, SQL ,  Docker"),
        vec!["Rust".to_owned(), "SQL".to_owned(), "Docker".to_owned()]
    );
}

#[test]
fn parse_skills_drops_empty_entries() {
    assert_eq!(parse_skills("Rust,,  ,SQL,"), vec!["Rust".to_owned(), "SQL".to_owned()]);
}

#[test]
fn parse_skills_of_blank_input_is_empty() {
    assert_eq!(parse_skills(""), Vec::<String>::new());
    assert_eq!(parse_skills("   "), Vec::<String>::new());
}

#[test]
fn join_skills_renders_comma_separated() {
    assert_eq!(
        join_skills(&["Rust".to_owned(), "SQL".to_owned()]),
        "Rust, SQL"
    );
    assert_eq!(join_skills(&[]), "");
}

#[test]
fn parse_and_join_preserve_entry_order() {
    let skills = parse_skills("C, B, A");
    assert_eq!(join_skills(&skills), "C, B, A");
}
