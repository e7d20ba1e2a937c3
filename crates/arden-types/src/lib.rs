//! Arden Syntax runtime value model
//!
//! This crate defines the runtime representation of Arden values:
//! - [`ArdenValue`]: the tagged union of all value domains
//! - [`Truth`]: three-valued booleans (true/false/unknown)
//! - [`ArdenTime`] and [`ArdenDuration`]: temporal values
//! - [`TimedValue`]: a value paired with its optional primary time
//! - [`ArdenList`]: ordered lists whose elements carry their own times

pub mod error;
pub mod system_types;
pub mod temporal;
pub mod value;

pub use error::{ParseError, ParseResult};
pub use system_types::ArdenType;
pub use temporal::{ArdenDuration, ArdenTime, SECONDS_PER_MONTH};
pub use value::{ArdenList, ArdenValue, TimedValue, Truth};
