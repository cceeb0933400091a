//! Test helpers module
//!
//! This module provides utilities and helpers for testing the portal.
//! It includes test data builders, an in-memory application context and a
//! Postgres database helper.

#![allow(dead_code)]

pub mod database_helper;
pub mod test_context;
pub mod test_data;

pub use database_helper::*;
pub use test_context::*;
pub use test_data::*;
