//! Server application core modules.
//!
//! Contains the HTTP routing, the remote directory orchestration with its cache fallback,
//! database access for the employee cache, and startup wiring.

pub mod config;
pub mod controller;
pub mod data;
pub mod error;
pub mod model;
pub mod router;
pub mod service;
pub mod startup;
