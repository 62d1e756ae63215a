//! Core types shared across Verdict facilities
//!
//! This crate provides the foundational constants used by both the failure
//! taxonomy and the logging facility:
//!
//! - **Schema constants**: Canonical field keys and event names

pub mod schema;
