//! Arden Syntax runtime core for Rust
//!
//! This crate bundles the evaluation core of an Arden Syntax runtime:
//! - Timed runtime values with three-valued logic
//! - Operators over lists, including time-aware aggregation
//! - Trigger trees that decide when a module instance runs
//!
//! # Example
//!
//! ```
//! use arden::{AggregateOp, Aggregation, ArdenEngine, ArdenValue, TimedValue};
//!
//! let t = "1990-01-01".parse().unwrap();
//! let values = TimedValue::list([
//!     TimedValue::at(ArdenValue::number(5), t),
//!     TimedValue::at(ArdenValue::number(3), t),
//! ]);
//!
//! let engine = ArdenEngine::new();
//! let sum = engine.aggregate(&Aggregation::new(AggregateOp::Sum), &values).unwrap();
//! assert_eq!(sum.to_string(), "8");
//! assert_eq!(sum.primary_time(), Some(t));
//! ```

// Re-export all public APIs from internal crates
pub use arden_eval as eval;
pub use arden_evoke as evoke;
pub use arden_types as types;

// Convenience re-exports
pub use arden_eval::{
    AggregateOp, Aggregation, ArdenEngine, ArdenVersion, EngineConfig, EvalError, EvalResult, Qualifier,
};
pub use arden_evoke::{ArdenEvent, EvokeError, ExecutionContext, FixedClock, Schedule, Trigger, Triggering};
pub use arden_types::{ArdenDuration, ArdenList, ArdenTime, ArdenValue, TimedValue, Truth};
