//! # reportdesk-adapter-http-axum
//!
//! HTTP adapter built on [axum](https://docs.rs/axum).
//!
//! ## Responsibilities
//! - Serve the **JSON REST API** for criminal reports (`/reports`, `/reports/{id}`)
//! - Map HTTP requests into application service calls (driving adapter)
//! - Map application results into HTTP responses: JSON on success, the raw
//!   error text on failure (400 for bad input, 500 for everything else)
//!
//! ## Dependency rule
//! Depends on `reportdesk-app` (for port traits and services) and
//! `reportdesk-domain` (for domain types used in request/response mapping).
//! Never leaks axum types into the domain.

pub mod api;
pub mod error;
pub mod extract;
pub mod router;
pub mod state;
