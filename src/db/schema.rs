//! SQL DDL for the `pessoas` table (SQLite).

/// - `id` INTEGER PRIMARY KEY AUTOINCREMENT, never reused
/// - `nome` required; blank names are rejected before reaching the database
/// - `telefone`, `observacao` nullable
pub const SQLITE_INIT: &str = r#"
CREATE TABLE IF NOT EXISTS pessoas (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    nome TEXT NOT NULL,
    telefone TEXT NULL,
    observacao TEXT NULL
);
"#;
