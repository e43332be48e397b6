//! Librarium - Student Library Management Web Application
//!
//! A small server-rendered web application for managing a student library:
//! students, books, and the issue/return ledger, behind a session login.

use std::sync::Arc;

pub mod config;
pub mod error;
pub mod models;
pub mod repository;
pub mod services;
pub mod session;
pub mod views;
pub mod web;

pub use config::AppConfig;
pub use error::{AppError, AppResult};

/// Application state shared across all handlers
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<AppConfig>,
    pub services: Arc<services::Services>,
}
