//! SQLite description database.
//!
//! System of record for offline lookup, with one table:
//! - descriptions(id, conceptId, term, active)
//!
//! plus non-unique indexes on `term` and `conceptId`.

pub mod schema;

use std::path::Path;

use rusqlite::{params, Connection};
use snomed_types::DescriptionRow;

use crate::types::{Rf2Error, Rf2Result};

/// Write handle on a freshly created description database.
pub struct DescriptionDb {
    conn: Connection,
}

impl DescriptionDb {
    /// Creates the schema in a new database file.
    ///
    /// The file must not already contain a `descriptions` table; callers
    /// remove any previous database first.
    pub fn create(path: &Path) -> Rf2Result<Self> {
        let conn = Connection::open(path)?;
        let db = Self { conn };
        db.initialize_schema()?;
        Ok(db)
    }

    /// Open an in-memory database (for testing)
    pub fn open_in_memory() -> Rf2Result<Self> {
        let conn = Connection::open_in_memory()?;
        let db = Self { conn };
        db.initialize_schema()?;
        Ok(db)
    }

    fn initialize_schema(&self) -> Rf2Result<()> {
        for stmt in schema::all_schema_statements() {
            self.conn.execute(stmt, [])?;
        }
        Ok(())
    }

    /// Inserts a batch of rows in a single transaction.
    ///
    /// A duplicate `id` aborts the batch and nothing from it is kept;
    /// earlier batches stay committed.
    pub fn insert_batch(&mut self, rows: &[DescriptionRow]) -> Rf2Result<usize> {
        let tx = self.conn.transaction()?;
        {
            let mut stmt = tx.prepare_cached(schema::INSERT_DESCRIPTION)?;
            for row in rows {
                stmt.execute(params![row.id, row.concept_id, row.term, row.active])?;
            }
        }
        tx.commit()?;
        Ok(rows.len())
    }

    /// Number of rows currently in the table.
    pub fn row_count(&self) -> Rf2Result<usize> {
        let count: i64 = self
            .conn
            .query_row("SELECT COUNT(*) FROM descriptions", [], |row| row.get(0))?;
        Ok(count as usize)
    }

    /// Closes the connection, surfacing any error SQLite reports on close.
    pub fn close(self) -> Rf2Result<()> {
        self.conn
            .close()
            .map_err(|(_, e)| Rf2Error::Database(e))
    }

    #[cfg(test)]
    pub(crate) fn connection(&self) -> &Connection {
        &self.conn
    }
}
