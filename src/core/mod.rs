//! Core domain logic for codesift
//!
//! This module contains pure business logic with no I/O dependencies.
//! Transports and the CLI only ever reach it through [`crate::pipeline`].
//!
//! ## Architecture
//!
//! - `models/` - Domain types (Entry, ValidationResult, CountMap, Marker)
//! - `services/` - Normalize, validate, classify, group and format

pub mod models;
pub mod services;
