//! Arden Syntax trigger state machine
//!
//! A module instance owns one [`Trigger`] tree, built from the module's
//! evoke slot. The scheduler drives it:
//!
//! - poll [`Trigger::next_run_time`] for schedule-driven eligibility
//! - hand incoming events to [`Trigger::deliver`]
//! - call [`Trigger::take_triggering`] to learn which event fired and how
//!   long to wait before running
//!
//! # Example
//!
//! ```
//! use arden_evoke::{ArdenEvent, FixedClock, Schedule, Trigger};
//! use arden_types::ArdenTime;
//!
//! let t1: ArdenTime = "2024-01-01T08:00:00".parse().unwrap();
//! let mut trigger = Trigger::any([Trigger::timed(Schedule::At(t1)), Trigger::event("A")]);
//!
//! let clock = FixedClock::new("2024-01-01T00:00:00".parse().unwrap());
//! assert_eq!(trigger.next_run_time(&clock), Some(t1));
//!
//! let event = ArdenEvent::new("A", t1);
//! trigger.deliver(&event);
//! assert_eq!(trigger.take_triggering().map(|t| t.event), Some(event));
//! ```

pub mod context;
pub mod error;
pub mod event;
pub mod schedule;
pub mod trigger;

pub use context::{ExecutionContext, FixedClock, SystemClock};
pub use error::{EvokeError, EvokeResult};
pub use event::ArdenEvent;
pub use schedule::Schedule;
pub use trigger::{AnyTrigger, EventTrigger, TimedTrigger, Trigger, Triggering};
