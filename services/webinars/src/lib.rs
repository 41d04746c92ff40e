//! Webinar service
//!
//! Organizers raise the seat capacity of their webinars through the
//! [`use_cases::ChangeSeats`] use case, exposed over HTTP by [`routes`].

pub mod config;
pub mod error;
pub mod models;
pub mod repositories;
pub mod routes;
pub mod state;
pub mod use_cases;

use sqlx::migrate::Migrator;

/// Migrations creating the webinar schema
pub static MIGRATOR: Migrator = sqlx::migrate!();
