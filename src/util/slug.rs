use crate::error::content::ContentError;

/// Validates a URL-safe slug: non-empty, lowercase ASCII letters, digits and
/// dashes, no leading/trailing/double dash.
pub fn validate(slug: &str) -> Result<(), ContentError> {
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
        Err(ContentError::InvalidSlug(slug.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::validate;

    #[test]
    fn accepts_simple_slugs() {
        for slug in ["welding", "heat-treatment", "iso-9001", "x"] {
            assert!(validate(slug).is_ok(), "rejected {:?}", slug);
        }
    }

    #[test]
    fn rejects_malformed_slugs() {
        for slug in ["", "Welding", "heat treatment", "-edge", "edge-", "a--b", "ümlaut"] {
            assert!(validate(slug).is_err(), "accepted {:?}", slug);
        }
    }
}
