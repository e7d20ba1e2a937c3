//! Arden Evaluation Engine
//!
//! This crate evaluates the Arden Syntax operators that work over timed
//! values:
//!
//! - **Comparison Operators**: Equal, NotEqual, Less, Greater, etc.
//! - **Arithmetic Operators**: Add, Subtract, Multiply, Divide over numbers,
//!   durations and times, broadcasting over lists
//! - **Logical Operators**: And, Or, Not, Any, All, No with three-valued logic
//! - **List Operators**: SEQTO, REVERSE, EXTRACT CHARACTERS, element access
//! - **Aggregate Operators**: Count, Exist, Sum, Average, Median, Variance,
//!   Stddev, Minimum, Maximum, First, Last, Earliest, Latest and INDEX forms
//!
//! # Example
//!
//! ```
//! use arden_eval::{Aggregation, AggregateOp, ArdenEngine};
//! use arden_types::TimedValue;
//!
//! let engine = ArdenEngine::new();
//! let values = TimedValue::list([12, 17, 13].map(TimedValue::number));
//! let median = engine.aggregate(&Aggregation::new(AggregateOp::Median), &values).unwrap();
//! assert_eq!(median.to_string(), "13");
//! ```
//!
//! # Totality
//!
//! Operators never fail on data. Mixed domains, empty input where a value
//! is required, or non-integral bounds all evaluate to NULL. Only
//! structurally invalid expressions, such as `INDEX FIRST` or `ALL IsTrue`,
//! produce an [`EvalError`], and only through [`ArdenEngine`].
//!
//! # Primary Times
//!
//! Each aggregate derives its result time with one of three rules, listed
//! per operator in [`registry::TimeRule`].

pub mod config;
pub mod engine;
pub mod error;
pub mod operators;
pub mod registry;

// Re-export main types
pub use config::{ArdenVersion, EngineConfig};
pub use engine::{Aggregation, ArdenEngine};
pub use error::{EvalError, EvalResult};
pub use registry::{AggregateOp, GrammaticalNumber, OperatorInfo, OperatorRegistry, Qualifier, TimeRule};

// Re-export commonly used operator helpers
pub use operators::aggregate::{Projection, Selector};
pub use operators::comparison::{arden_compare, arden_equal};
pub use operators::logical::to_truth;
