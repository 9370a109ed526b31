//! # Gigboard API Server Library
//!
//! HTTP CRUD endpoints for users, orders and offers.
//!
//! ## Modules
//!
//! - `app`: Application state and router builder
//! - `config`: Configuration management
//! - `error`: Error handling and HTTP response mapping
//! - `extract`: Request extractors with JSON rejections
//! - `routes`: API route handlers
//! - `startup`: Database preparation before serving

pub mod app;
pub mod config;
pub mod error;
pub mod extract;
pub mod routes;
pub mod startup;
