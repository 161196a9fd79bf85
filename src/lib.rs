//! Trailhead: reservation backend for natural parks.
//!
//! This crate contains the complete backend implementation: API endpoints,
//! business logic, data access, and infrastructure services. The backend uses
//! Axum as the web framework and SeaORM for database operations.
//!
//! # Architecture
//!
//! The server follows a layered architecture with clear separation of concerns:
//!
//! - **Controller Layer** (`controller/`) - HTTP request handlers, access control, and DTO conversion
//! - **Service Layer** (`service/`) - Business logic orchestration between controllers and data layer
//! - **Data Layer** (`data/`) - Database operations over SeaORM entities
//! - **Model Layer** (`model/`) - Domain models and operation-specific parameter types
//! - **DTO Layer** (`dto/`) - Request/response bodies exchanged with API clients
//! - **Error Layer** (`error/`) - Application error types and HTTP response mapping
//! - **Middleware** (`middleware/`) - Authenticated-identity extraction and permission guards
//!
//! # Infrastructure
//!
//! Supporting modules provide application infrastructure:
//!
//! - **Configuration** (`config`) - Environment-based application configuration
//! - **State** (`state`) - Shared application state (database connection pool)
//! - **Startup** (`startup`) - Database connection and migration bootstrap
//! - **Router** (`router`) - Axum route configuration
//!
//! # Request Flow
//!
//! A typical request flows through these layers:
//!
//! 1. **Router** receives HTTP request and routes to appropriate controller
//! 2. **Middleware** extracts the caller identity injected by the upstream auth proxy
//! 3. **Controller** validates access, converts DTOs to params, calls service
//! 4. **Service** executes business logic, orchestrates data operations
//! 5. **Data** queries the database and returns entity models
//! 6. **Service** converts entities to domain models and returns them
//! 7. **Controller** converts domain model to DTO, returns HTTP response

pub mod config;
pub mod controller;
pub mod data;
pub mod dto;
pub mod error;
pub mod middleware;
pub mod model;
pub mod router;
pub mod service;
pub mod startup;
pub mod state;
pub mod util;
