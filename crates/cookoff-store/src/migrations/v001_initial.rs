//! v001 -- Initial schema creation.
//!
//! Creates the single `collections` table. Each row is one named collection
//! stored as a whole JSON document; the three rows the application uses are
//! `chefs`, `audiences`, and `competitionState`.

use rusqlite::Connection;

/// SQL executed when upgrading from version 0 to version 1.
const UP_SQL: &str = r#"
CREATE TABLE IF NOT EXISTS collections (
    name TEXT PRIMARY KEY NOT NULL,   -- collection name, e.g. 'chefs'
    body TEXT NOT NULL                -- whole collection as JSON
);
"#;

/// Apply the initial migration.
pub fn up(conn: &Connection) -> Result<(), rusqlite::Error> {
    conn.execute_batch(UP_SQL)
}
