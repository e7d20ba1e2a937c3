//! Operator integration tests for Arden evaluation
//!
//! These tests verify operator behavior including:
//! - Result values for list and scalar arguments
//! - Primary time derivation for each aggregation family
//! - Null results for irregular data instead of failures
//! - Rejection of structurally invalid aggregations

mod aggregate;
mod fixtures;
mod list;
mod logical;
mod properties;
