//! Order Desk - order-processing backend.
//!
//! Business operations are written as [`application::UseCase`]s returning a
//! tagged [`domain::foundation::DomainError`] or a success envelope. The
//! generic [`adapters::http::Controller`] turns each one into an axum handler,
//! resolving its dependencies from an [`application::DependencyContext`] when
//! the router is built.

pub mod adapters;
pub mod application;
pub mod config;
pub mod domain;
pub mod ports;
pub mod startup;
pub mod telemetry;
