pub const CREATE_TABLES: &str = "
CREATE TABLE IF NOT EXISTS exploits (
    id TEXT PRIMARY KEY,
    title TEXT NOT NULL,
    description TEXT NOT NULL DEFAULT '',
    code TEXT NOT NULL,
    target_contract TEXT NOT NULL DEFAULT '',
    vulnerability_type TEXT NOT NULL,
    severity TEXT NOT NULL,
    author TEXT NOT NULL,
    tags TEXT NOT NULL DEFAULT '[]',
    submitted_at TEXT NOT NULL
);

CREATE INDEX IF NOT EXISTS idx_exploits_severity ON exploits(severity);
CREATE INDEX IF NOT EXISTS idx_exploits_type ON exploits(vulnerability_type);
";
