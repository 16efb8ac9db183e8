//! SNOMED CT Description types.
//!
//! This module provides `Rf2Description`, a row of an RF2 Description
//! snapshot file, and `DescriptionRow`, the projection of an active
//! description that is persisted to the offline lookup database.

/// A SNOMED CT description from the RF2 Description file.
///
/// Represents a row from `sct2_Description_*.txt` files in an RF2 release.
/// Identifiers are kept as the text found in the file; only the `active`
/// flag is decoded.
///
/// # Examples
///
/// ```
/// use snomed_types::Rf2Description;
///
/// let description = Rf2Description {
///     id: "754786011".to_string(),
///     effective_time: "20020131".to_string(),
///     active: true,
///     module_id: "900000000000207008".to_string(),
///     concept_id: "73211009".to_string(),
///     language_code: "en".to_string(),
///     type_id: "900000000000003001".to_string(),
///     term: "Diabetes mellitus (disorder)".to_string(),
///     case_significance_id: "900000000000448009".to_string(),
/// };
///
/// let row = description.to_row();
/// assert_eq!(row.concept_id, "73211009");
/// assert_eq!(row.active, 1);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Rf2Description {
    /// Unique identifier for this description.
    pub id: String,
    /// Effective date in YYYYMMDD format.
    pub effective_time: String,
    /// Whether this description is active (`"1"` in the file).
    pub active: bool,
    /// The module containing this description.
    pub module_id: String,
    /// The concept this description belongs to.
    pub concept_id: String,
    /// ISO language code (e.g., "en").
    pub language_code: String,
    /// Type of description (FSN, Synonym, etc.).
    pub type_id: String,
    /// The description text/term.
    pub term: String,
    /// Case significance rules for this term.
    pub case_significance_id: String,
}

impl Rf2Description {
    /// Projects this description onto the persisted row shape.
    ///
    /// The persisted `active` column is always `1`: inactive descriptions
    /// are dropped before they reach the database, never stored as `0`.
    pub fn to_row(&self) -> DescriptionRow {
        DescriptionRow::from(self)
    }
}

/// A description as stored in the `descriptions` table.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct DescriptionRow {
    /// Description identifier (primary key).
    pub id: String,
    /// Concept the description belongs to.
    pub concept_id: String,
    /// Human-readable text.
    pub term: String,
    /// Always `1`.
    pub active: i64,
}

impl DescriptionRow {
    /// Value written to the `active` column.
    pub const ACTIVE: i64 = 1;
}

impl From<&Rf2Description> for DescriptionRow {
    fn from(desc: &Rf2Description) -> Self {
        Self {
            id: desc.id.clone(),
            concept_id: desc.concept_id.clone(),
            term: desc.term.clone(),
            active: Self::ACTIVE,
        }
    }
}

impl From<Rf2Description> for DescriptionRow {
    fn from(desc: Rf2Description) -> Self {
        Self {
            id: desc.id,
            concept_id: desc.concept_id,
            term: desc.term,
            active: Self::ACTIVE,
        }
    }
}
