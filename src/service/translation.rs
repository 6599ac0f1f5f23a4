use crate::model::content::TranslationDto;

/// The outcome of reconciling an entity's stored translation rows against a
/// submitted set: rows to insert, rows to overwrite, rows to remove.
///
/// Replaces the delete-everything-and-reinsert update strategy: each language
/// keeps its row identity across updates and the three operations are applied
/// inside the caller's transaction.
pub struct TranslationPlan<M> {
    pub insert: Vec<TranslationDto>,
    pub update: Vec<(M, TranslationDto)>,
    pub remove: Vec<M>,
}

/// Matches existing rows and submitted translations by language code.
///
/// A submitted language without a stored row becomes an insert, a matched
/// pair becomes an update, and a stored row whose language is no longer
/// submitted is removed. The submitted set is assumed to be validated
/// against the configured language set beforehand.
pub fn reconcile<M>(
    existing: Vec<M>,
    submitted: &[TranslationDto],
    language_of: impl Fn(&M) -> &str,
) -> TranslationPlan<M> {
    let mut plan = TranslationPlan {
        insert: Vec::new(),
        update: Vec::new(),
        remove: Vec::new(),
    };

    let mut unmatched = existing;

    for translation in submitted {
        match unmatched
            .iter()
            .position(|row| language_of(row) == translation.language)
        {
            Some(index) => {
                let row = unmatched.swap_remove(index);
                plan.update.push((row, translation.clone()));
            }
            None => plan.insert.push(translation.clone()),
        }
    }

    plan.remove = unmatched;

    plan
}

#[cfg(test)]
mod tests {
    use super::reconcile;
    use crate::model::content::TranslationDto;

    #[derive(Debug, PartialEq)]
    struct Row {
        id: i32,
        language: String,
    }

    fn row(id: i32, language: &str) -> Row {
        Row {
            id,
            language: language.to_string(),
        }
    }

    fn submitted(language: &str) -> TranslationDto {
        TranslationDto {
            language: language.to_string(),
            name: format!("name-{language}"),
            description: None,
            body: None,
        }
    }

    /// All submitted languages are new on a create-like reconciliation
    #[test]
    fn all_insert_when_nothing_exists() {
        let plan = reconcile(Vec::<Row>::new(), &[submitted("tr"), submitted("en")], |r| {
            &r.language
        });

        assert_eq!(plan.insert.len(), 2);
        assert!(plan.update.is_empty());
        assert!(plan.remove.is_empty());
    }

    /// Matched languages update in place, keeping row identity
    #[test]
    fn matched_languages_update() {
        let existing = vec![row(1, "tr"), row(2, "en")];

        let plan = reconcile(existing, &[submitted("tr"), submitted("en")], |r| {
            &r.language
        });

        assert!(plan.insert.is_empty());
        assert_eq!(plan.update.len(), 2);
        assert!(plan.remove.is_empty());
    }

    /// Stored rows for languages not submitted are removed
    #[test]
    fn unsubmitted_languages_are_removed() {
        let existing = vec![row(1, "tr"), row(2, "en"), row(3, "de")];

        let plan = reconcile(existing, &[submitted("en")], |r| &r.language);

        assert!(plan.insert.is_empty());
        assert_eq!(plan.update.len(), 1);
        assert_eq!(plan.remove.len(), 2);
    }

    /// Mixed case: one of each operation
    #[test]
    fn mixed_plan() {
        let existing = vec![row(1, "tr"), row(2, "de")];

        let plan = reconcile(existing, &[submitted("tr"), submitted("en")], |r| {
            &r.language
        });

        assert_eq!(plan.insert.len(), 1);
        assert_eq!(plan.insert[0].language, "en");
        assert_eq!(plan.update.len(), 1);
        assert_eq!(plan.update[0].0.id, 1);
        assert_eq!(plan.remove.len(), 1);
        assert_eq!(plan.remove[0].id, 2);
    }
}
