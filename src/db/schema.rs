//! SQL DDL for the swimmer table.

/// SQLite schema with:
/// - `id` INTEGER PRIMARY KEY AUTOINCREMENT, so ids are never handed out twice
/// - `is_swimmer` BOOLEAN (stored as INTEGER 0/1)
/// - `name` and `summary` NOT NULL, empty strings allowed
pub const SQLITE_INIT: &str = r#"
CREATE TABLE IF NOT EXISTS swimmer (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    name VARCHAR(255) NOT NULL,
    is_swimmer INTEGER NOT NULL,
    summary TEXT NOT NULL
);
"#;
