//! Core library exports for the qiri-sync service.
//!
//! The service ingests product records from the external Qiri catalog API,
//! flattens them into a snake_case schema and persists them, then serves the
//! stored rows back as JSON or rendered HTML tables. This crate exposes the
//! domain types, repositories, routes and service layers used by the web
//! application.

#[cfg(feature = "data")]
pub mod db;
#[cfg(feature = "data")]
pub mod domain;
#[cfg(feature = "data")]
pub mod dto;
#[cfg(feature = "data")]
pub mod forms;
#[cfg(feature = "data")]
pub mod models;
#[cfg(feature = "server")]
pub mod qiri;
#[cfg(feature = "data")]
pub mod repository;
#[cfg(feature = "server")]
pub mod routes;
#[cfg(feature = "data")]
pub mod schema;
#[cfg(feature = "server")]
pub mod services;
