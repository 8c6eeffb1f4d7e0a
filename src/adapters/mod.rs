//! Adapters - Implementations of port interfaces.
//!
//! Adapters connect the domain to external systems:
//! - `auth` - Token validators (HS256 JWT, mock)
//! - `http` - REST API over axum
//! - `memory` - In-memory repository for tests and local runs
//! - `postgres` - Durable repository over PostgreSQL

pub mod auth;
pub mod http;
pub mod memory;
pub mod postgres;
