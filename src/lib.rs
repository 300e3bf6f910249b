//! RosterDB: a lightweight, single-writer store for student profiles backed
//! by a human-editable CSV file.
//!
//! The crate is layered bottom-up: [`codec`] encodes and decodes rows
//! (tolerating commas, quotes, and line breaks inside field values),
//! [`store`] owns the backing file and enforces key uniqueness, [`profile`]
//! maps the generic ordered-field records to named attributes, and
//! [`languages`] handles the small sibling file behind the language
//! selection list.

pub mod codec;
pub mod error;
pub mod languages;
pub mod profile;
pub mod store;

pub use error::Error;
pub use languages::LanguageCatalog;
pub use profile::{COLUMNS, FIELD_COUNT, HEADER, StudentProfile};
pub use store::{ProfileStore, normalize_key};

#[cfg(test)]
mod tests {
    // Verify that the public items are accessible at the crate root. Tests
    // use fully-qualified `crate::` paths to confirm the re-exports resolve.

    #[test]
    fn reexport_student_profile() {
        let profile = crate::StudentProfile {
            full_name: "Ada Lovelace".to_string(),
            ..Default::default()
        };
        assert_eq!(profile.full_name, "Ada Lovelace");
    }

    #[test]
    fn reexport_profile_store() {
        let store = crate::ProfileStore::new("Students.csv");
        assert_eq!(store.path(), std::path::Path::new("Students.csv"));
    }

    #[test]
    fn reexport_language_catalog() {
        let catalog = crate::LanguageCatalog::new("ProgrammingLanguage.csv");
        assert_eq!(
            catalog.path(),
            std::path::Path::new("ProgrammingLanguage.csv")
        );
    }

    #[test]
    fn reexport_normalize_key() {
        assert_eq!(crate::normalize_key("  A  B "), "a b");
    }

    #[test]
    fn reexport_field_count_matches_columns() {
        assert_eq!(crate::FIELD_COUNT, crate::COLUMNS.len());
    }

    #[test]
    fn reexport_error() {
        let err = crate::Error::InvalidRecord("test".into());
        assert!(err.to_string().contains("test"));
    }
}
