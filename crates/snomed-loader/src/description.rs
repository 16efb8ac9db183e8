//! SNOMED CT Description file parser.
//!
//! Parses sct2_Description_*.txt RF2 files.
//!
//! Columns are addressed by position:
//! `id effectiveTime active moduleId conceptId languageCode typeId term caseSignificanceId`.

use csv::StringRecord;
use snomed_types::Rf2Description;

use crate::parser::Rf2Record;
use crate::types::Rf2Result;

/// Column positions in a description file.
mod column {
    pub const ID: usize = 0;
    pub const EFFECTIVE_TIME: usize = 1;
    pub const ACTIVE: usize = 2;
    pub const MODULE_ID: usize = 3;
    pub const CONCEPT_ID: usize = 4;
    pub const LANGUAGE_CODE: usize = 5;
    pub const TYPE_ID: usize = 6;
    pub const TERM: usize = 7;
    pub const CASE_SIGNIFICANCE_ID: usize = 8;
}

/// Literal marking an active row.
const ACTIVE_FLAG: &str = "1";

impl Rf2Record for Rf2Description {
    // Everything up to and including `term`.
    const MIN_FIELDS: usize = column::TERM + 1;

    fn from_record(record: &StringRecord) -> Rf2Result<Self> {
        let field = |i: usize| record.get(i).unwrap_or("").to_string();

        Ok(Rf2Description {
            id: field(column::ID),
            effective_time: field(column::EFFECTIVE_TIME),
            active: record.get(column::ACTIVE) == Some(ACTIVE_FLAG),
            module_id: field(column::MODULE_ID),
            concept_id: field(column::CONCEPT_ID),
            language_code: field(column::LANGUAGE_CODE),
            type_id: field(column::TYPE_ID),
            term: field(column::TERM),
            case_significance_id: field(column::CASE_SIGNIFICANCE_ID),
        })
    }

    fn passes_filter(&self) -> bool {
        self.active
    }
}
