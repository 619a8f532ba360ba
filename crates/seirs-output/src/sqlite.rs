//! SQLite output backend (feature `sqlite`).
//!
//! Writes one `daily_counts` table into the database file given to
//! [`SqliteWriter::create`].  An existing table of that name is replaced.

use std::path::Path;

use rusqlite::Connection;

use crate::writer::OutputWriter;
use crate::{DailyRow, OutputResult};

/// Writes daily counts to an SQLite database.
pub struct SqliteWriter {
    conn:     Connection,
    finished: bool,
}

impl SqliteWriter {
    /// Open (or create) the database at `path` and initialise the schema.
    pub fn create(path: &Path) -> OutputResult<Self> {
        let conn = Connection::open(path)?;

        conn.execute_batch(
            "PRAGMA journal_mode = WAL;
             PRAGMA synchronous  = NORMAL;
             DROP TABLE IF EXISTS daily_counts;
             CREATE TABLE daily_counts (
                 t INTEGER PRIMARY KEY,
                 S INTEGER NOT NULL,
                 E INTEGER NOT NULL,
                 I INTEGER NOT NULL,
                 R INTEGER NOT NULL
             );",
        )?;

        Ok(Self { conn, finished: false })
    }
}

impl OutputWriter for SqliteWriter {
    fn write_daily(&mut self, row: &DailyRow) -> OutputResult<()> {
        let mut stmt = self.conn.prepare_cached(
            "INSERT INTO daily_counts (t, S, E, I, R) VALUES (?1, ?2, ?3, ?4, ?5)",
        )?;
        stmt.execute(rusqlite::params![
            row.t,
            row.s as i64,
            row.e as i64,
            row.i as i64,
            row.r as i64,
        ])?;
        Ok(())
    }

    fn finish(&mut self) -> OutputResult<()> {
        if self.finished {
            return Ok(());
        }
        self.finished = true;
        self.conn
            .execute_batch("PRAGMA wal_checkpoint(TRUNCATE);")?;
        Ok(())
    }
}
