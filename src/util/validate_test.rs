use super::*;

#[test]
fn validate_credentials_trims_email_and_keeps_password() {
    assert_eq!(
        validate_credentials("  user@example.com  ", "hunter2"),
        Ok(("user@example.com".to_owned(), "hunter2".to_owned()))
    );
}

#[test]
fn validate_credentials_rejects_empty_email() {
    assert_eq!(
        validate_credentials("   ", "hunter2"),
        Err("Enter a valid email address.")
    );
}

#[test]
fn validate_credentials_rejects_email_without_at() {
    assert_eq!(
        validate_credentials("user.example.com", "hunter2"),
        Err("Enter a valid email address.")
    );
}

#[test]
fn validate_credentials_requires_password() {
    assert_eq!(
        validate_credentials("user@example.com", ""),
        Err("Enter your password.")
    );
}

#[test]
fn validate_credentials_does_not_trim_password() {
    // Passwords may legitimately begin or end with spaces.
    assert_eq!(
        validate_credentials("user@example.com", " spaced "),
        Ok(("user@example.com".to_owned(), " spaced ".to_owned()))
    );
}

#[test]
fn validate_registration_accepts_complete_form() {
    let form = validate_registration("  Dev One  ", " dev@example.com ", "hunter2", "hunter2");
    assert_eq!(
        form,
        Ok(Registration {
            full_name: "Dev One".to_owned(),
            email: "dev@example.com".to_owned(),
            password: "hunter2".to_owned(),
        })
    );
}

#[test]
fn validate_registration_requires_full_name() {
    assert_eq!(
        validate_registration("   ", "dev@example.com", "hunter2", "hunter2"),
        Err("Enter your full name.")
    );
}

#[test]
fn validate_registration_requires_valid_email() {
    assert_eq!(
        validate_registration("Dev", "devexample.com", "hunter2", "hunter2"),
        Err("Enter a valid email address.")
    );
}

#[test]
fn validate_registration_enforces_password_length() {
    assert_eq!(
        validate_registration("Dev", "dev@example.com", "five5", "five5"),
        Err("Password must be at least 6 characters.")
    );
    // Six characters is the minimum, counted in characters not bytes.
    assert!(validate_registration("Dev", "dev@example.com", "sixsix", "sixsix").is_ok());
}

#[test]
fn validate_registration_requires_matching_confirmation() {
    assert_eq!(
        validate_registration("Dev", "dev@example.com", "hunter2", "hunter3"),
        Err("Passwords do not match.")
    );
}

#[test]
fn validate_resume_file_accepts_pdf_any_case() {
    assert_eq!(validate_resume_file("resume.pdf", 1024.0), Ok(()));
    assert_eq!(validate_resume_file("Resume.PDF", 1024.0), Ok(()));
}

#[test]
fn validate_resume_file_rejects_other_extensions() {
    assert_eq!(
        validate_resume_file("resume.docx", 1024.0),
        Err("Resume must be a PDF file.")
    );
    assert_eq!(
        validate_resume_file("resume", 1024.0),
        Err("Resume must be a PDF file.")
    );
}

#[test]
fn validate_resume_file_enforces_size_cap() {
    assert_eq!(validate_resume_file("resume.pdf", MAX_RESUME_BYTES), Ok(()));
    assert_eq!(
        validate_resume_file("resume.pdf", MAX_RESUME_BYTES + 1.0),
        Err("Resume must be 5 MB or smaller.")
    );
}
