use lazy_static::lazy_static;
use regex::Regex;

pub(crate) fn is_valid_email(email: &str) -> bool {
    lazy_static! {
        static ref EMAIL_RE: Regex = Regex::new(r"^[^@\s]+@[^@\s]+\.[^@\s]+$").unwrap();
    }
    EMAIL_RE.is_match(email)
}

/// At least 8 characters with one lowercase, one uppercase, one digit.
/// Counts characters, not bytes, so multibyte input is measured correctly.
pub(crate) fn is_strong_password(password: &str) -> bool {
    password.chars().count() >= 8
        && password.chars().any(|c| c.is_ascii_lowercase())
        && password.chars().any(|c| c.is_ascii_uppercase())
        && password.chars().any(|c| c.is_ascii_digit())
}

/// Collects every violated rule, not just the first.
pub fn validate_register_input(email: &str, password: &str, name: Option<&str>) -> Vec<String> {
    let mut errors = Vec::new();

    if email.is_empty() {
        errors.push("Email is required".to_string());
    } else if !is_valid_email(email) {
        errors.push("Please provide a valid email address".to_string());
    }

    if password.is_empty() {
        errors.push("Password is required".to_string());
    } else if !is_strong_password(password) {
        errors.push(
            "Password must be at least 8 characters long and contain at least one \
             uppercase letter, one lowercase letter, and one number"
                .to_string(),
        );
    }

    if let Some(name) = name {
        if name.trim().chars().count() < 2 {
            errors.push("Name must be at least 2 characters long".to_string());
        }
    }

    errors
}

/// Login only checks presence and email shape; no strength check.
pub fn validate_login_input(email: &str, password: &str) -> Vec<String> {
    let mut errors = Vec::new();

    if email.is_empty() {
        errors.push("Email is required".to_string());
    } else if !is_valid_email(email) {
        errors.push("Please provide a valid email address".to_string());
    }

    if password.is_empty() {
        errors.push("Password is required".to_string());
    }

    errors
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_well_formed_emails() {
        for email in ["a@b.co", "user.name@example.com", "x+y@sub.domain.org"] {
            assert!(is_valid_email(email), "{email} should be valid");
        }
    }

    #[test]
    fn rejects_malformed_emails() {
        for email in ["", "plain", "no@tld", "@missing.local", "two@@at.com", "sp ace@x.com"] {
            assert!(!is_valid_email(email), "{email} should be invalid");
        }
    }

    #[test]
    fn password_rule_requires_all_three_classes_and_length() {
        assert!(is_strong_password("Abcdef12"));
        assert!(!is_strong_password("Abcde12")); // 7 chars
        assert!(!is_strong_password("abcdef12")); // no uppercase
        assert!(!is_strong_password("ABCDEF12")); // no lowercase
        assert!(!is_strong_password("Abcdefgh")); // no digit
    }

    #[test]
    fn password_length_counts_characters_not_bytes() {
        // 7 chars, 8 bytes: the multibyte char must not pad the length.
        assert!(!is_strong_password("Pä1aaaA"));
        // 8 chars with a multibyte char still passes.
        assert!(is_strong_password("Pä1aaaAb"));
    }

    #[test]
    fn name_length_counts_characters_not_bytes() {
        // 1 char, 2 bytes: too short regardless of encoding width.
        let errors = validate_register_input("a@b.com", "Abcdef12", Some("é"));
        assert_eq!(errors, vec!["Name must be at least 2 characters long".to_string()]);
        assert!(validate_register_input("a@b.com", "Abcdef12", Some("éé")).is_empty());
    }

    #[test]
    fn register_reports_all_violations_together() {
        let errors = validate_register_input("not-an-email", "weak", Some("x"));
        assert_eq!(errors.len(), 3);
        assert!(errors[0].contains("valid email"));
        assert!(errors[1].contains("at least 8 characters"));
        assert!(errors[2].contains("Name must be"));
    }

    #[test]
    fn register_requires_email_and_password() {
        let errors = validate_register_input("", "", None);
        assert_eq!(
            errors,
            vec!["Email is required".to_string(), "Password is required".to_string()]
        );
    }

    #[test]
    fn register_accepts_valid_input_with_and_without_name() {
        assert!(validate_register_input("a@b.com", "Abcdef12", None).is_empty());
        assert!(validate_register_input("a@b.com", "Abcdef12", Some("Ada")).is_empty());
    }

    #[test]
    fn login_skips_strength_check() {
        assert!(validate_login_input("a@b.com", "weak").is_empty());
        let errors = validate_login_input("bad", "");
        assert_eq!(errors.len(), 2);
    }
}
