use super::ComparisonSink;
use crate::model::{Comparison, ScoredExchange, UserStats};
use anyhow::Context;
use rusqlite::{params, Connection};
use std::path::Path;
use std::sync::{Arc, Mutex};

#[derive(Clone)]
pub struct Store {
    conn: Arc<Mutex<Connection>>,
}

impl Store {
    pub fn open(path: &Path) -> anyhow::Result<Self> {
        let conn = Connection::open(path).context("failed to open sqlite db")?;
        Ok(Self {
            conn: Arc::new(Mutex::new(conn)),
        })
    }

    pub fn memory() -> anyhow::Result<Self> {
        let conn = Connection::open_in_memory().context("failed to open in-memory sqlite db")?;
        Ok(Self {
            conn: Arc::new(Mutex::new(conn)),
        })
    }

    pub fn init_schema(&self) -> anyhow::Result<()> {
        let conn = self.conn.lock().unwrap();
        conn.execute_batch(super::schema::DDL)?;
        Ok(())
    }

    /// Per-user aggregates over everything recorded so far.
    pub fn user_stats(&self) -> anyhow::Result<Vec<UserStats>> {
        let conn = self.conn.lock().unwrap();
        let mut stmt = conn.prepare(
            "SELECT u.user_id,
                    (SELECT COUNT(*) FROM comparisons c WHERE c.user_id = u.user_id),
                    (SELECT AVG(c.original_score) FROM comparisons c WHERE c.user_id = u.user_id),
                    (SELECT AVG(c.optimized_score) FROM comparisons c WHERE c.user_id = u.user_id),
                    (SELECT COUNT(*) FROM exchanges e WHERE e.user_id = u.user_id),
                    (SELECT AVG(e.score) FROM exchanges e WHERE e.user_id = u.user_id),
                    (SELECT COALESCE(SUM(s.seconds), 0) FROM sessions s WHERE s.user_id = u.user_id)
             FROM (
               SELECT user_id FROM comparisons WHERE user_id IS NOT NULL
               UNION SELECT user_id FROM exchanges WHERE user_id IS NOT NULL
               UNION SELECT user_id FROM sessions
             ) u
             ORDER BY u.user_id",
        )?;

        let rows = stmt.query_map([], |row| {
            Ok(UserStats {
                user_id: row.get(0)?,
                comparisons: row.get(1)?,
                avg_original_score: row.get(2)?,
                avg_optimized_score: row.get(3)?,
                chats: row.get(4)?,
                avg_chat_score: row.get(5)?,
                total_session_secs: row.get(6)?,
            })
        })?;

        let mut stats = Vec::new();
        for r in rows {
            stats.push(r?);
        }
        Ok(stats)
    }
}

impl ComparisonSink for Store {
    fn record_comparison(
        &self,
        user_id: Option<&str>,
        comparison: &Comparison,
    ) -> anyhow::Result<()> {
        let conn = self.conn.lock().unwrap();
        conn.execute(
            "INSERT INTO comparisons
               (user_id, original_prompt, original_response, original_score,
                optimized_prompt, optimized_response, optimized_score, created_at)
             VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8)",
            params![
                user_id,
                comparison.original.prompt,
                comparison.original.response,
                comparison.original.score,
                comparison.optimized.prompt,
                comparison.optimized.response,
                comparison.optimized.score,
                chrono::Utc::now().to_rfc3339(),
            ],
        )
        .context("failed to insert comparison")?;
        Ok(())
    }

    fn record_exchange(
        &self,
        user_id: Option<&str>,
        exchange: &ScoredExchange,
    ) -> anyhow::Result<()> {
        let conn = self.conn.lock().unwrap();
        conn.execute(
            "INSERT INTO exchanges (user_id, prompt, response, score, created_at)
             VALUES (?1, ?2, ?3, ?4, ?5)",
            params![
                user_id,
                exchange.prompt,
                exchange.response,
                exchange.score,
                chrono::Utc::now().to_rfc3339(),
            ],
        )
        .context("failed to insert exchange")?;
        Ok(())
    }

    fn record_session(&self, user_id: &str, seconds: i64) -> anyhow::Result<()> {
        if seconds < 0 {
            anyhow::bail!("session seconds must be non-negative, got {}", seconds);
        }
        let conn = self.conn.lock().unwrap();
        conn.execute(
            "INSERT INTO sessions (user_id, seconds, created_at) VALUES (?1, ?2, ?3)",
            params![user_id, seconds, chrono::Utc::now().to_rfc3339()],
        )
        .context("failed to insert session")?;
        Ok(())
    }
}
