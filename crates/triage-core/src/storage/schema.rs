pub const DDL: &str = r#"
CREATE TABLE IF NOT EXISTS comparisons (
  id INTEGER PRIMARY KEY AUTOINCREMENT,
  user_id TEXT,
  original_prompt TEXT NOT NULL,
  original_response TEXT NOT NULL,
  original_score REAL NOT NULL,
  optimized_prompt TEXT NOT NULL,
  optimized_response TEXT NOT NULL,
  optimized_score REAL NOT NULL,
  created_at TEXT NOT NULL
);

CREATE TABLE IF NOT EXISTS exchanges (
  id INTEGER PRIMARY KEY AUTOINCREMENT,
  user_id TEXT,
  prompt TEXT NOT NULL,
  response TEXT NOT NULL,
  score REAL NOT NULL,
  created_at TEXT NOT NULL
);

CREATE TABLE IF NOT EXISTS sessions (
  id INTEGER PRIMARY KEY AUTOINCREMENT,
  user_id TEXT NOT NULL,
  seconds INTEGER NOT NULL,
  created_at TEXT NOT NULL
);

CREATE INDEX IF NOT EXISTS idx_comparisons_user ON comparisons(user_id);
CREATE INDEX IF NOT EXISTS idx_exchanges_user ON exchanges(user_id);
CREATE INDEX IF NOT EXISTS idx_sessions_user ON sessions(user_id);
"#;
