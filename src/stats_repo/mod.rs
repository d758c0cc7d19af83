// SQLite stats storage. bots holds the display names; bot_stats holds one row
// per sampling tick with every tracked counter as its own INTEGER column.

pub mod series;

use crate::models::{Bot, Sample};
use chrono::NaiveDateTime;
use sqlx::Row;
use sqlx::sqlite::{SqliteConnectOptions, SqlitePool, SqlitePoolOptions};
use std::path::Path;
use std::str::FromStr;
use tracing::instrument;

/// Stored timestamp layout: "YYYY-MM-DD HH:MM:SS", UTC, second precision.
/// Lexicographic order equals chronological order, so created_at sorts as TEXT.
const CREATED_AT_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

pub struct StatsRepo {
    pool: SqlitePool,
}

impl StatsRepo {
    pub async fn connect(path: &str, max_pool_size: u32) -> anyhow::Result<Self> {
        if let Some(parent) = Path::new(path).parent() {
            std::fs::create_dir_all(parent)?;
        }
        let opts = SqliteConnectOptions::from_str(&format!("sqlite:{}", path))?
            .create_if_missing(true)
            .journal_mode(sqlx::sqlite::SqliteJournalMode::Wal)
            .busy_timeout(std::time::Duration::from_secs(5))
            .synchronous(sqlx::sqlite::SqliteSynchronous::Normal);
        let pool = SqlitePoolOptions::new()
            .max_connections(max_pool_size)
            .connect_with(opts)
            .await?;
        Ok(Self { pool })
    }

    pub async fn init(&self) -> anyhow::Result<()> {
        sqlx::query("CREATE TABLE IF NOT EXISTS bots (id INTEGER PRIMARY KEY, name TEXT NOT NULL)")
            .execute(&self.pool)
            .await?;

        sqlx::query(
            r#"
            CREATE TABLE IF NOT EXISTS bot_stats (
                id INTEGER PRIMARY KEY AUTOINCREMENT,
                bot_id INTEGER NOT NULL,
                created_at TEXT NOT NULL,
                active_members INTEGER NOT NULL,
                total_members INTEGER NOT NULL,
                members_online INTEGER NOT NULL,
                guests_online INTEGER NOT NULL,
                total_online INTEGER NOT NULL,
                total_threads INTEGER NOT NULL,
                total_posts INTEGER NOT NULL
            )
            "#,
        )
        .execute(&self.pool)
        .await?;

        sqlx::query(
            "CREATE INDEX IF NOT EXISTS idx_bot_stats_bot_created_at ON bot_stats(bot_id, created_at)",
        )
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    #[instrument(skip(self, bot), fields(repo = "stats", operation = "upsert_bot", bot_id = bot.id))]
    pub async fn upsert_bot(&self, bot: &Bot) -> anyhow::Result<()> {
        sqlx::query("INSERT OR REPLACE INTO bots (id, name) VALUES ($1, $2)")
            .bind(bot.id)
            .bind(&bot.name)
            .execute(&self.pool)
            .await?;
        Ok(())
    }

    pub async fn get_bot(&self, id: i64) -> anyhow::Result<Option<Bot>> {
        let row = sqlx::query("SELECT id, name FROM bots WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;
        let Some(row) = row else {
            return Ok(None);
        };
        Ok(Some(Bot {
            id: row.try_get("id")?,
            name: row.try_get("name")?,
        }))
    }

    #[instrument(skip(self, samples), fields(repo = "stats", operation = "save_samples", samples_count = samples.len()))]
    pub async fn save_samples(&self, bot_id: i64, samples: &[Sample]) -> anyhow::Result<()> {
        if samples.is_empty() {
            return Ok(());
        }
        let mut tx = self.pool.begin().await?;
        for s in samples {
            sqlx::query(
                "INSERT INTO bot_stats (bot_id, created_at, active_members, total_members, members_online, guests_online, total_online, total_threads, total_posts) VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9)",
            )
            .bind(bot_id)
            .bind(s.created_at.format(CREATED_AT_FORMAT).to_string())
            .bind(s.active_members)
            .bind(s.total_members)
            .bind(s.members_online)
            .bind(s.guests_online)
            .bind(s.total_online)
            .bind(s.total_threads)
            .bind(s.total_posts)
            .execute(&mut *tx)
            .await?;
        }
        tx.commit().await?;
        Ok(())
    }

    /// All samples for one bot, ascending by created_at (the order the series
    /// transform requires).
    #[instrument(skip(self), fields(repo = "stats", operation = "get_samples"))]
    pub async fn get_samples(&self, bot_id: i64) -> anyhow::Result<Vec<Sample>> {
        let rows = sqlx::query(
            "SELECT created_at, active_members, total_members, members_online, guests_online, total_online, total_threads, total_posts
             FROM bot_stats WHERE bot_id = $1 ORDER BY created_at ASC",
        )
        .bind(bot_id)
        .fetch_all(&self.pool)
        .await?;

        let mut out = Vec::with_capacity(rows.len());
        for row in rows {
            out.push(Self::parse_sample_row(&row)?);
        }
        Ok(out)
    }

    fn parse_sample_row(row: &sqlx::sqlite::SqliteRow) -> anyhow::Result<Sample> {
        let created_at: String = row.try_get("created_at")?;
        let created_at = NaiveDateTime::parse_from_str(&created_at, CREATED_AT_FORMAT)
            .map_err(|e| anyhow::anyhow!("malformed created_at {:?}: {}", created_at, e))?;
        Ok(Sample {
            created_at,
            active_members: row.try_get("active_members")?,
            total_members: row.try_get("total_members")?,
            members_online: row.try_get("members_online")?,
            guests_online: row.try_get("guests_online")?,
            total_online: row.try_get("total_online")?,
            total_threads: row.try_get("total_threads")?,
            total_posts: row.try_get("total_posts")?,
        })
    }
}
