//! Schema of the description database.
//!
//! Downstream lookup code opens this file directly, so table, column and
//! index names must not change.

/// SQL to create the descriptions table
pub const CREATE_DESCRIPTIONS_TABLE: &str = r#"
CREATE TABLE descriptions (
    id TEXT PRIMARY KEY,
    conceptId TEXT,
    term TEXT,
    active INTEGER
)
"#;

/// SQL to create indexes
pub const CREATE_INDEXES: &[&str] = &[
    "CREATE INDEX idx_term ON descriptions(term)",
    "CREATE INDEX idx_concept ON descriptions(conceptId)",
];

/// Bulk insert statement, one row per execution.
pub const INSERT_DESCRIPTION: &str =
    "INSERT INTO descriptions (id, conceptId, term, active) VALUES (?1, ?2, ?3, ?4)";

/// All schema creation statements
pub fn all_schema_statements() -> Vec<&'static str> {
    let mut stmts = vec![CREATE_DESCRIPTIONS_TABLE];
    stmts.extend(CREATE_INDEXES.iter().copied());
    stmts
}
