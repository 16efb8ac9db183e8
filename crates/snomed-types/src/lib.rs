//! # snomed-types
//!
//! Type definitions for SNOMED CT description snapshots.
//!
//! This crate provides the row types shared between the importer that builds
//! the offline description database and the code that reads it:
//! [`Rf2Description`] mirrors a line of an RF2 Description file, and
//! [`DescriptionRow`] is what ends up in the `descriptions` table.
//!
//! ## Features
//!
//! - `serde` (default): Enables serialization/deserialization support via serde.
//!   Disable this feature for zero-dependency usage.
//!
//! ## Usage
//!
//! ```rust
//! use snomed_types::{DescriptionRow, Rf2Description};
//!
//! let desc = Rf2Description {
//!     id: "754786011".to_string(),
//!     effective_time: "20020131".to_string(),
//!     active: true,
//!     module_id: "900000000000207008".to_string(),
//!     concept_id: "73211009".to_string(),
//!     language_code: "en".to_string(),
//!     type_id: "900000000000003001".to_string(),
//!     term: "Diabetes mellitus (disorder)".to_string(),
//!     case_significance_id: "900000000000448009".to_string(),
//! };
//!
//! let row: DescriptionRow = desc.into();
//! assert_eq!(row.active, 1);
//! ```

#![warn(missing_docs)]

mod description;

pub use description::{DescriptionRow, Rf2Description};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_types_are_exported() {
        let _row = DescriptionRow {
            id: "1".to_string(),
            concept_id: "2".to_string(),
            term: "t".to_string(),
            active: DescriptionRow::ACTIVE,
        };
    }

    #[cfg(feature = "serde")]
    #[test]
    fn test_serde_roundtrip() {
        let row = DescriptionRow {
            id: "754786011".to_string(),
            concept_id: "73211009".to_string(),
            term: "Diabetes mellitus (disorder)".to_string(),
            active: 1,
        };

        let json = serde_json::to_string(&row).unwrap();
        let parsed: DescriptionRow = serde_json::from_str(&json).unwrap();
        assert_eq!(row, parsed);
    }
}
