//! SQL DDL for initializing the inquiry storage.

/// Status given to every freshly submitted inquiry.
pub const DEFAULT_STATUS: &str = "Active";

/// SQLite schema with:
/// - `id` INTEGER PRIMARY KEY AUTOINCREMENT (never reused after a delete)
/// - `company_name` / `telegram_username` nullable
/// - `status` free-form text, `Active` on insert
/// - `created_at` RFC3339 text
///
/// Only `IF NOT EXISTS` statements live here. Adding a column to an existing
/// database file is a manual migration.
pub const SQLITE_INIT: &str = r#"
CREATE TABLE IF NOT EXISTS contact_messages (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    name TEXT NOT NULL,
    email TEXT NOT NULL,
    phone TEXT NOT NULL,
    company_name TEXT NULL,
    telegram_username TEXT NULL,
    interest TEXT NOT NULL,
    message TEXT NOT NULL,
    status TEXT NOT NULL DEFAULT 'Active',
    created_at TEXT NOT NULL -- RFC3339
);
"#;
