//! stockroom-api Library
//!
//! Item tracking over a single relation: a REST layer deriving submit-by
//! dates server-side, and the table presentation core that consumes it.
#![forbid(unsafe_code)]
#![deny(rust_2018_idioms)]
#![allow(elided_lifetimes_in_paths)]
#![warn(clippy::all, clippy::perf, clippy::dbg_macro)]

// Core modules
pub mod client;
pub mod config;
pub mod db;
pub mod entities;
pub mod errors;
pub mod handlers;
pub mod migrator;
pub mod models;
pub mod repository;
pub mod schedule;
pub mod services;
pub mod table;

use axum::Router;
use std::sync::Arc;

// App state definition
#[derive(Clone)]
pub struct AppState {
    pub db: Arc<db::DbPool>,
    pub config: config::AppConfig,
    pub services: handlers::AppServices,
}

/// The `/api` routing surface: items and categories.
pub fn api_routes() -> Router<Arc<AppState>> {
    Router::new()
        .nest("/items", handlers::items::item_routes())
        .nest("/categories", handlers::categories::category_routes())
}
