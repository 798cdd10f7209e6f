//! Server-side API backend and business logic.
//!
//! This module contains the backend for the car rental API: HTTP endpoints, business logic,
//! data access and infrastructure. The backend uses Axum as the web framework and SeaORM for
//! database operations.
//!
//! # Architecture
//!
//! The server follows a layered architecture:
//!
//! - **Controller Layer** (`controller/`) - HTTP request handlers and DTO conversion
//! - **Service Layer** (`service/`) - Business rules such as car availability
//! - **Data Layer** (`data/`) - Database operations and the list query builder
//! - **Model Layer** (`model/`) - Domain models and validated operation parameters
//! - **Error Layer** (`error/`) - Application error types and HTTP response mapping
//!
//! # Infrastructure
//!
//! - **Configuration** (`config`) - Environment-based application configuration
//! - **State** (`state`) - Shared application state (database pool)
//! - **Startup** (`startup`) - Tracing, database connection and migrations
//! - **Router** (`router`) - Route table, CORS, tracing and timeout layers
//! - **Extractors** (`extract`) - JSON body and query extractors with uniform rejections
//! - **Utilities** (`util`) - Input parsing and SQL sanitizing helpers
//!
//! # Request Flow
//!
//! 1. **Router** receives the HTTP request and routes it to a controller
//! 2. **Controller** parses path ids, converts DTOs to params and calls the service
//! 3. **Service** enforces business rules and calls repositories
//! 4. **Data** builds and executes SeaORM statements
//! 5. **Service** converts entity models to domain models
//! 6. **Controller** converts domain models to DTOs and returns the response

pub mod config;
pub mod controller;
pub mod data;
pub mod error;
pub mod extract;
pub mod model;
pub mod router;
pub mod service;
pub mod startup;
pub mod state;
pub mod util;
