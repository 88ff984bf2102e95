//! Server-side API backend and business logic.
//!
//! The backend uses Axum as the web framework and SeaORM over SQLite for
//! persistence. Images go to a Cloudinary-compatible CDN and address lookups to a
//! Nominatim-compatible geocoder.
//!
//! # Architecture
//!
//! - **Controller Layer** (`controller/`) - HTTP request handlers, role checks, and DTO conversion
//! - **Service Layer** (`service/`) - Business rules: ownership, booking lifecycle, counters
//! - **Data Layer** (`data/`) - Database operations and entity-to-domain model conversion
//! - **Model Layer** (`model/`) - Domain models and operation-specific parameter types
//! - **Error Layer** (`error/`) - Application error types and the JSON error envelope
//! - **Middleware** (`middleware/`) - Authentication guard, session cookie, and rate limiting
//! - **Auth** (`auth/`) - Password hashing and session token signing
//! - **Integration** (`integration/`) - Clients for the image CDN and the geocoder
//!
//! # Infrastructure
//!
//! - **Configuration** (`config`) - Environment-based application configuration
//! - **State** (`state`) - Shared application state (DB, HTTP client, token settings)
//! - **Startup** (`startup`) - Database, HTTP client, admin seeding, and CORS
//! - **Router** (`router`) - Axum routes and the OpenAPI document
//!
//! # Request Flow
//!
//! 1. **Router** matches the request to a controller
//! 2. **Controller** extracts and validates input, authenticates via `AuthGuard`
//! 3. **Service** applies business rules inside a transaction where needed
//! 4. **Data** queries the database and converts entities to domain models
//! 5. **Controller** converts the domain model to a DTO inside `ApiResponse`
//!
//! # Feature Gates
//!
//! This module is only available with the `server` feature flag enabled.

pub mod auth;
pub mod config;
pub mod controller;
pub mod data;
pub mod error;
pub mod integration;
pub mod middleware;
pub mod model;
pub mod router;
pub mod service;
pub mod startup;
pub mod state;
pub mod util;
