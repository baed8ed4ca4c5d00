use std::borrow::Cow;
use std::path::{Component, Path};

use validator::ValidationError;

fn rejected(code: &'static str, message: &'static str) -> ValidationError {
    let mut err = ValidationError::new(code);
    err.message = Some(Cow::from(message));
    err
}

/// Lowercase ASCII letters, digits and single inner hyphens.
pub fn validate_slug(slug: &str) -> Result<(), ValidationError> {
    let well_formed = !slug.is_empty()
        && !slug.starts_with('-')
        && !slug.ends_with('-')
        && !slug.contains("--")
        && slug
            .chars()
            .all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '-');
    if well_formed {
        Ok(())
    } else {
        Err(rejected(
            "slug",
            "Slug must contain lowercase letters, digits and hyphens",
        ))
    }
}

/// Optional leading `+`, then at least seven digits.
pub fn validate_phone(phone: &str) -> Result<(), ValidationError> {
    let digits = phone.strip_prefix('+').unwrap_or(phone);
    if digits.len() >= 7 && digits.chars().all(|c| c.is_ascii_digit()) {
        Ok(())
    } else {
        Err(rejected("phone", "Incorrect phone format"))
    }
}

/// A non-empty relative path without `..`, so joining it to a directory
/// never leaves that directory.
pub fn is_contained_path(path: &str) -> bool {
    !path.is_empty()
        && Path::new(path)
            .components()
            .all(|c| matches!(c, Component::Normal(_) | Component::CurDir))
}

/// Upload paths are relative to the upload directory. Empty means no file.
pub fn validate_upload_path(path: &str) -> Result<(), ValidationError> {
    if path.is_empty() || is_contained_path(path) {
        Ok(())
    } else {
        Err(rejected(
            "upload_path",
            "Upload path must be relative to the upload directory",
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn slugs() {
        assert!(validate_slug("running-shoes-2").is_ok());
        assert!(validate_slug("Running").is_err());
        assert!(validate_slug("-shoes").is_err());
        assert!(validate_slug("shoes--red").is_err());
        assert!(validate_slug("").is_err());
    }

    #[test]
    fn phones() {
        assert!(validate_phone("+6281234567").is_ok());
        assert!(validate_phone("0812345").is_ok());
        assert!(validate_phone("12345").is_err());
        assert!(validate_phone("+62 812").is_err());
    }

    #[test]
    fn upload_paths_stay_below_the_root() {
        assert!(validate_upload_path("sliders/hero.png").is_ok());
        assert!(validate_upload_path("./hero.png").is_ok());
        assert!(validate_upload_path("").is_ok());
        assert!(validate_upload_path("/etc/passwd").is_err());
        assert!(validate_upload_path("../secret.txt").is_err());
        assert!(validate_upload_path("sliders/../../secret.txt").is_err());
        assert!(!is_contained_path(""));
    }
}
