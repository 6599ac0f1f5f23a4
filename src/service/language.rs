use std::sync::Arc;

use crate::{error::content::ContentError, model::content::TranslationDto};

/// The configured set of content languages.
///
/// Loaded once from configuration at startup; the first code is the default
/// language used as the primary fallback. Translation payloads are validated
/// against this set instead of a hard-coded language list.
#[derive(Clone)]
pub struct LanguageRegistry {
    codes: Arc<Vec<String>>,
}

impl LanguageRegistry {
    pub fn new(codes: Vec<String>) -> Self {
        Self {
            codes: Arc::new(codes),
        }
    }

    pub fn codes(&self) -> &[String] {
        &self.codes
    }

    /// The default language, used as the first fallback on reads.
    pub fn default_code(&self) -> &str {
        &self.codes[0]
    }

    pub fn is_supported(&self, code: &str) -> bool {
        self.codes.iter().any(|c| c == code)
    }

    /// Validates a submitted translation set: every language supported, no
    /// duplicates, and one row per configured language.
    pub fn validate_set(&self, translations: &[TranslationDto]) -> Result<(), ContentError> {
        for translation in translations {
            if !self.is_supported(&translation.language) {
                return Err(ContentError::UnsupportedLanguage(
                    translation.language.clone(),
                ));
            }
        }

        for (i, translation) in translations.iter().enumerate() {
            if translations[..i]
                .iter()
                .any(|other| other.language == translation.language)
            {
                return Err(ContentError::DuplicateLanguage(translation.language.clone()));
            }
        }

        for code in self.codes.iter() {
            if !translations.iter().any(|t| &t.language == code) {
                return Err(ContentError::MissingLanguage(code.clone()));
            }
        }

        Ok(())
    }

    /// Validates a single language code.
    pub fn validate_code(&self, code: &str) -> Result<(), ContentError> {
        if self.is_supported(code) {
            Ok(())
        } else {
            Err(ContentError::UnsupportedLanguage(code.to_string()))
        }
    }

    /// Picks one row out of `rows` for a public read.
    ///
    /// Fallback order: the requested language, then the default language,
    /// then the first row whose language appears earliest in the configured
    /// set. Returns `None` only when `rows` is empty; callers then fall back
    /// to slug-derived display values.
    pub fn resolve<'a, T>(
        &self,
        requested: Option<&str>,
        rows: &'a [T],
        language_of: impl Fn(&T) -> &str,
    ) -> Option<&'a T> {
        if let Some(code) = requested {
            if let Some(row) = rows.iter().find(|row| language_of(row) == code) {
                return Some(row);
            }
        }

        if let Some(row) = rows
            .iter()
            .find(|row| language_of(row) == self.default_code())
        {
            return Some(row);
        }

        rows.iter().min_by_key(|row| {
            self.codes
                .iter()
                .position(|c| c == language_of(row))
                .unwrap_or(usize::MAX)
        })
    }
}

impl Default for LanguageRegistry {
    fn default() -> Self {
        Self::new(vec![
            "tr".to_string(),
            "en".to_string(),
            "de".to_string(),
            "fr".to_string(),
        ])
    }
}

#[cfg(test)]
mod tests {
    use super::LanguageRegistry;
    use crate::model::content::TranslationDto;

    fn translation(language: &str) -> TranslationDto {
        TranslationDto {
            language: language.to_string(),
            name: format!("name-{language}"),
            description: None,
            body: None,
        }
    }

    /// Expect Ok for a complete set covering every configured language once
    #[test]
    fn validate_set_accepts_complete_set() {
        let registry = LanguageRegistry::default();
        let set: Vec<_> = ["tr", "en", "de", "fr"].map(translation).into();

        assert!(registry.validate_set(&set).is_ok());
    }

    /// Expect DuplicateLanguage when the same language appears twice
    #[test]
    fn validate_set_rejects_duplicate_language() {
        let registry = LanguageRegistry::default();
        let set: Vec<_> = ["tr", "en", "en", "de"].map(translation).into();

        let result = registry.validate_set(&set);

        assert!(matches!(
            result,
            Err(crate::error::content::ContentError::DuplicateLanguage(code)) if code == "en"
        ));
    }

    /// Expect MissingLanguage when a configured language is absent
    #[test]
    fn validate_set_rejects_incomplete_set() {
        let registry = LanguageRegistry::default();
        let set: Vec<_> = ["tr", "en", "de"].map(translation).into();

        assert!(registry.validate_set(&set).is_err());
    }

    /// Expect UnsupportedLanguage for a code outside the configured set
    #[test]
    fn validate_set_rejects_unknown_language() {
        let registry = LanguageRegistry::default();
        let set: Vec<_> = ["tr", "en", "de", "es"].map(translation).into();

        assert!(matches!(
            registry.validate_set(&set),
            Err(crate::error::content::ContentError::UnsupportedLanguage(code)) if code == "es"
        ));
    }

    /// Requested language wins when present
    #[test]
    fn resolve_prefers_requested_language() {
        let registry = LanguageRegistry::default();
        let rows: Vec<_> = ["tr", "en"].map(translation).into();

        let row = registry.resolve(Some("en"), &rows, |t| &t.language).unwrap();

        assert_eq!(row.language, "en");
    }

    /// Missing requested language falls back to the default language
    #[test]
    fn resolve_falls_back_to_default() {
        let registry = LanguageRegistry::default();
        let rows: Vec<_> = ["tr", "de"].map(translation).into();

        let row = registry.resolve(Some("fr"), &rows, |t| &t.language).unwrap();

        assert_eq!(row.language, "tr");
    }

    /// Without the default language present, the earliest configured code wins
    #[test]
    fn resolve_falls_back_to_first_available() {
        let registry = LanguageRegistry::default();
        let rows: Vec<_> = ["fr", "de"].map(translation).into();

        let row = registry.resolve(Some("en"), &rows, |t| &t.language).unwrap();

        assert_eq!(row.language, "de");
    }

    /// Expect None only for an empty row set
    #[test]
    fn resolve_returns_none_for_empty_rows() {
        let registry = LanguageRegistry::default();
        let rows: Vec<TranslationDto> = Vec::new();

        assert!(registry.resolve(Some("en"), &rows, |t| &t.language).is_none());
    }
}
