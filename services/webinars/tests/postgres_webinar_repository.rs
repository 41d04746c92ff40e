//! Integration tests for the PostgreSQL webinar repository
//!
//! These tests need a reachable PostgreSQL instance (see `DATABASE_URL`).
//! Run them with `cargo test -- --ignored`.

use std::sync::Arc;

use chrono::{TimeZone, Utc};
use common::database::{DatabaseConfig, init_pool, run_migrations};
use serial_test::serial;
use sqlx::PgPool;
use webinars::{
    MIGRATOR,
    models::{User, Webinar, WebinarProps},
    repositories::{PgWebinarRepository, RepositoryError, WebinarRepository},
    use_cases::{ChangeSeats, ChangeSeatsPayload, ErrorKind},
};

async fn setup() -> Result<(PgPool, PgWebinarRepository), Box<dyn std::error::Error>> {
    let pool = init_pool(&DatabaseConfig::from_env()?).await?;
    run_migrations(&pool, &MIGRATOR).await?;
    sqlx::query("DELETE FROM webinars").execute(&pool).await?;
    Ok((pool.clone(), PgWebinarRepository::new(pool)))
}

fn webinar(id: &str, seats: i32) -> Webinar {
    Webinar::new(WebinarProps {
        id: id.to_string(),
        organizer_id: "test-user".to_string(),
        title: "Webinar Test".to_string(),
        start_date: Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap(),
        end_date: Utc.with_ymd_and_hms(2024, 1, 1, 1, 0, 0).unwrap(),
        seats,
    })
}

#[tokio::test]
#[serial]
#[ignore = "requires a running PostgreSQL instance"]
async fn find_and_update_roundtrip() -> Result<(), Box<dyn std::error::Error>> {
    let (_pool, repository) = setup().await?;
    let original = webinar("test-webinar", 10);
    repository.create(&original).await?;

    assert_eq!(repository.find_by_id("test-webinar").await?, Some(original.clone()));
    assert_eq!(repository.find_by_id("anotherId").await?, None);

    let updated = original.with_seats(30)?;
    repository.update(&updated).await?;
    assert_eq!(repository.find_by_id("test-webinar").await?, Some(updated));

    Ok(())
}

#[tokio::test]
#[serial]
#[ignore = "requires a running PostgreSQL instance"]
async fn update_of_unknown_webinar_fails() -> Result<(), Box<dyn std::error::Error>> {
    let (_pool, repository) = setup().await?;

    let result = repository.update(&webinar("ghost", 10)).await;
    assert!(matches!(result, Err(RepositoryError::Missing(_))));

    Ok(())
}

#[tokio::test]
#[serial]
#[ignore = "requires a running PostgreSQL instance"]
async fn change_seats_against_postgres() -> Result<(), Box<dyn std::error::Error>> {
    let (_pool, repository) = setup().await?;
    repository.create(&webinar("test-webinar", 10)).await?;

    let repository = Arc::new(repository);
    let use_case = ChangeSeats::new(repository.clone());

    use_case
        .execute(ChangeSeatsPayload {
            user: User::new("test-user"),
            webinar_id: "test-webinar".to_string(),
            seats: 30,
        })
        .await?;

    let err = use_case
        .execute(ChangeSeatsPayload {
            user: User::new("organizer-2"),
            webinar_id: "test-webinar".to_string(),
            seats: 40,
        })
        .await
        .unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Forbidden);

    let stored = repository.find_by_id("test-webinar").await?;
    assert_eq!(stored.map(|w| w.seats()), Some(30));

    Ok(())
}
