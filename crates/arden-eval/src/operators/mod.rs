//! Arden Operator Implementations
//!
//! Operators are pure functions over [`arden_types::TimedValue`]s, organized by category:
//! - Comparison (equal, less, ...) and ordering helpers
//! - Arithmetic (add, subtract, multiply, divide) with list broadcasting
//! - Logical (and, or, not, any, all, no) with three-valued logic
//! - List / sequence (seqto, reverse, extract characters, element)
//! - Aggregate (count, exist, sum, median, minimum, earliest, index, ...)
//!
//! None of them fail: irregular input evaluates to the null value.

pub mod aggregate;
pub mod arithmetic;
pub mod comparison;
pub mod list;
pub mod logical;
