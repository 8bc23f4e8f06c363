//! Raw SQL passthrough
//!
//! Executes caller-supplied SQL against the live store with no
//! sanitization. Only meant for a local user poking at their own data;
//! never route untrusted input here.

use std::fmt;
use std::time::{Duration, Instant};
use rusqlite::Batch;
use rusqlite::fallible_iterator::FallibleIterator;
use rusqlite::types::Value;
use tracing::{debug, error, warn};
use crate::error::{Result, TrackerError};
use super::tracker::Tracker;

/// Column names and rows produced by one statement
#[derive(Debug, Clone, PartialEq)]
pub struct QueryResult {
    pub columns: Vec<String>,
    pub rows: Vec<Vec<Value>>,
}

/// Output of a raw query run
#[derive(Debug, Clone)]
pub struct RawQueryReport {
    /// One entry per statement that returned columns
    pub results: Vec<QueryResult>,
    /// Wall time spent in the engine
    pub elapsed: Duration,
}

impl RawQueryReport {
    /// Check whether no statement produced a result set
    pub fn is_empty(&self) -> bool {
        self.results.is_empty()
    }
}

/// Diagnostic handle borrowed from a [`Tracker`]
pub struct Diagnostics<'a> {
    tracker: &'a mut Tracker,
}

impl Tracker {
    /// Access the raw-query diagnostics
    pub fn diagnostics(&mut self) -> Diagnostics<'_> {
        Diagnostics { tracker: self }
    }
}

impl Diagnostics<'_> {
    /// Run one or more SQL statements
    ///
    /// Statements execute in order; the first engine error aborts the run
    /// and is returned. Writes made by earlier statements stay applied,
    /// except inside a transaction the text opened and did not close: that
    /// transaction is rolled back and the run fails, so the store never
    /// stays inside an open transaction.
    pub fn run_raw_query(&mut self, sql: &str) -> Result<RawQueryReport> {
        self.tracker.ensure_initialized()?;
        debug!(sql, "running raw query");

        let db = &self.tracker.db;
        let start = Instant::now();
        let outcome = execute_all(db.connection(), sql);
        let elapsed = start.elapsed();

        if db.rollback_if_open() {
            warn!("raw query left a transaction open, rolled back");
            if outcome.is_ok() {
                return Err(TrackerError::DatabaseError(
                    "Query left a transaction open; it was rolled back".to_string(),
                ));
            }
        }

        let results = outcome.inspect_err(|e| error!(error = %e, "raw query failed"))?;

        debug!(result_sets = results.len(), ?elapsed, "raw query finished");
        Ok(RawQueryReport { results, elapsed })
    }
}

fn execute_all(conn: &rusqlite::Connection, sql: &str) -> Result<Vec<QueryResult>> {
    let mut results = Vec::new();
    let mut batch = Batch::new(conn, sql);

    while let Some(mut stmt) = batch.next()? {
        let columns: Vec<String> = stmt.column_names().into_iter().map(String::from).collect();
        let column_count = columns.len();

        let mut rows = Vec::new();
        let mut cursor = stmt.query([])?;
        while let Some(row) = cursor.next()? {
            let values = (0..column_count)
                .map(|i| row.get_ref(i).map(Value::from))
                .collect::<rusqlite::Result<Vec<_>>>()?;
            rows.push(values);
        }

        if column_count > 0 {
            results.push(QueryResult { columns, rows });
        }
    }

    Ok(results)
}

fn format_value(value: &Value) -> String {
    match value {
        Value::Null => "NULL".to_string(),
        Value::Integer(i) => i.to_string(),
        Value::Real(r) => r.to_string(),
        Value::Text(s) => s.clone(),
        Value::Blob(b) => format!("<{} bytes>", b.len()),
    }
}

impl fmt::Display for QueryResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let header = self.columns.join("\t");
        writeln!(f, "{}", header)?;
        writeln!(f, "{}", "-".repeat(header.chars().count()))?;

        for row in &self.rows {
            let line: Vec<String> = row.iter().map(format_value).collect();
            writeln!(f, "{}", line.join("\t"))?;
        }

        writeln!(f)?;
        writeln!(f, "Rows: {}", self.rows.len())
    }
}

impl fmt::Display for RawQueryReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Query executed in {:.2} ms", self.elapsed.as_secs_f64() * 1000.0)?;
        writeln!(f)?;

        if self.results.is_empty() {
            return writeln!(f, "The query returned no results or was a statement without output.");
        }

        for result in &self.results {
            write!(f, "{}", result)?;
        }
        Ok(())
    }
}
