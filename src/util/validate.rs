//! Client-side form validation, run before anything is sent over the wire.
//!
//! Every check returns a ready-to-display message. The backend validates
//! again; these exist so obvious mistakes never cost a round trip.

#[cfg(test)]
#[path = "validate_test.rs"]
mod validate_test;

/// Largest resume accepted client-side, in bytes.
pub const MAX_RESUME_BYTES: f64 = 5.0 * 1024.0 * 1024.0;

/// Validated registration form values.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Registration {
    pub full_name: String,
    pub email: String,
    pub password: String,
}

/// Check and normalize login form input.
///
/// The email is trimmed; the password is taken as typed.
///
/// # Errors
///
/// Returns the message to show inline when a field is unusable.
pub fn validate_credentials(
    email: &str,
    password: &str,
) -> Result<(String, String), &'static str> {
    let email = email.trim();
    if email.is_empty() || !email.contains('@') {
        return Err("Enter a valid email address.");
    }
    if password.is_empty() {
        return Err("Enter your password.");
    }
    Ok((email.to_owned(), password.to_owned()))
}

/// Check registration form input, including the confirmation field.
///
/// # Errors
///
/// Returns the message for the first failing check, top to bottom.
pub fn validate_registration(
    full_name: &str,
    email: &str,
    password: &str,
    confirm: &str,
) -> Result<Registration, &'static str> {
    let full_name = full_name.trim();
    if full_name.is_empty() {
        return Err("Enter your full name.");
    }
    let email = email.trim();
    if email.is_empty() || !email.contains('@') {
        return Err("Enter a valid email address.");
    }
    if password.chars().count() < 6 {
        return Err("Password must be at least 6 characters.");
    }
    if password != confirm {
        return Err("Passwords do not match.");
    }
    Ok(Registration {
        full_name: full_name.to_owned(),
        email: email.to_owned(),
        password: password.to_owned(),
    })
}

/// Check a chosen resume before anything is sent.
///
/// # Errors
///
/// Rejects anything that is not a `.pdf` or is over the size cap.
pub fn validate_resume_file(name: &str, size_bytes: f64) -> Result<(), &'static str> {
    if !name.to_lowercase().ends_with(".pdf") {
        return Err("Resume must be a PDF file.");
    }
    if size_bytes > MAX_RESUME_BYTES {
        return Err("Resume must be 5 MB or smaller.");
    }
    Ok(())
}
