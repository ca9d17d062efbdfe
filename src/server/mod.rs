//! HTTP API backend and business logic.
//!
//! The backend uses Axum as the web framework and SeaORM for database access.
//!
//! # Architecture
//!
//! - **Controller Layer** (`controller/`) - HTTP handlers, access control, DTO conversion
//! - **Service Layer** (`service/`) - Ownership and workflow rules, transactions
//! - **Data Layer** (`data/`) - Repositories over the entity crate
//! - **Model Layer** (`model/`) - Domain models and operation parameters
//! - **Error Layer** (`error/`) - Application error types and HTTP response mapping
//! - **Middleware** (`middleware/`) - Bearer token guard
//!
//! # Infrastructure
//!
//! - **Configuration** (`config`) - Environment-based configuration
//! - **State** (`state`) - Database pool and token service shared by handlers
//! - **Startup** (`startup`) - Database connection, migrations, admin bootstrap, CORS
//! - **Router** (`router`) - Route table and OpenAPI document
//!
//! # Request Flow
//!
//! 1. **Router** matches the request to a controller
//! 2. **Controller** authenticates through `AuthGuard`, converts the DTO to params
//! 3. **Service** checks ownership, runs the workflow, calls repositories
//! 4. **Data** queries the database and returns entity models
//! 5. **Service** converts entity models to domain models
//! 6. **Controller** converts the domain model to a DTO response

pub mod config;
pub mod controller;
pub mod data;
pub mod error;
pub mod middleware;
pub mod model;
pub mod router;
pub mod service;
pub mod startup;
pub mod state;
pub mod util;
