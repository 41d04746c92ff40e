//! PostgreSQL webinar repository

use async_trait::async_trait;
use common::error::DatabaseError;
use sqlx::{PgPool, Row, postgres::PgRow};
use tracing::{debug, info};

use super::{RepositoryError, RepositoryResult, WebinarRepository};
use crate::models::{Webinar, WebinarProps};

/// Webinar repository for database operations
#[derive(Clone)]
pub struct PgWebinarRepository {
    pool: PgPool,
}

impl PgWebinarRepository {
    /// Create a new webinar repository
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Store a new webinar
    pub async fn create(&self, webinar: &Webinar) -> RepositoryResult<()> {
        info!("Creating webinar: {}", webinar.id());

        sqlx::query(
            r#"
            INSERT INTO webinars (id, organizer_id, title, start_date, end_date, seats)
            VALUES ($1, $2, $3, $4, $5, $6)
            "#,
        )
        .bind(webinar.id())
        .bind(webinar.organizer_id())
        .bind(webinar.title())
        .bind(webinar.start_date())
        .bind(webinar.end_date())
        .bind(webinar.seats())
        .execute(&self.pool)
        .await
        .map_err(DatabaseError::Query)?;

        Ok(())
    }
}

fn webinar_from_row(row: &PgRow) -> Webinar {
    WebinarProps {
        id: row.get("id"),
        organizer_id: row.get("organizer_id"),
        title: row.get("title"),
        start_date: row.get("start_date"),
        end_date: row.get("end_date"),
        seats: row.get("seats"),
    }
    .into()
}

#[async_trait]
impl WebinarRepository for PgWebinarRepository {
    async fn find_by_id(&self, id: &str) -> RepositoryResult<Option<Webinar>> {
        debug!("Finding webinar by ID: {}", id);

        let row = sqlx::query(
            r#"
            SELECT id, organizer_id, title, start_date, end_date, seats
            FROM webinars
            WHERE id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .map_err(DatabaseError::Query)?;

        Ok(row.as_ref().map(webinar_from_row))
    }

    async fn update(&self, webinar: &Webinar) -> RepositoryResult<()> {
        info!("Updating webinar: {}", webinar.id());

        let result = sqlx::query(
            r#"
            UPDATE webinars
            SET title = $2, start_date = $3, end_date = $4, seats = $5, updated_at = NOW()
            WHERE id = $1
            "#,
        )
        .bind(webinar.id())
        .bind(webinar.title())
        .bind(webinar.start_date())
        .bind(webinar.end_date())
        .bind(webinar.seats())
        .execute(&self.pool)
        .await
        .map_err(DatabaseError::Query)?;

        if result.rows_affected() == 0 {
            return Err(RepositoryError::Missing(webinar.id().to_string()));
        }

        Ok(())
    }
}
