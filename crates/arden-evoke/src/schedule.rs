//! Schedules for time-driven triggers

use crate::error::{EvokeError, EvokeResult};
use arden_types::{ArdenDuration, ArdenTime};
use rust_decimal::Decimal;
use rust_decimal::prelude::ToPrimitive;

/// When a time-driven trigger is due
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Schedule {
    /// Never due
    Never,
    /// Due once, at the given time
    At(ArdenTime),
    /// Due at `start`, then every `interval`, up to and including
    /// `start + length`
    ///
    /// Build it with [`Schedule::every`]. A cycle whose interval is not
    /// positive or whose length is negative is never due.
    Every {
        interval: ArdenDuration,
        length: ArdenDuration,
        start: ArdenTime,
    },
}

impl Schedule {
    /// A cyclic schedule; the interval must be positive and the length
    /// must not be negative
    pub fn every(interval: ArdenDuration, length: ArdenDuration, start: ArdenTime) -> EvokeResult<Self> {
        if interval.is_zero() || interval.is_negative() {
            return Err(EvokeError::NonPositiveInterval { interval });
        }
        if length.is_negative() {
            return Err(EvokeError::NegativeLength { length });
        }
        if start.add_duration(&length).is_none() {
            return Err(EvokeError::invalid_schedule(format!(
                "{} after {} is out of range",
                length, start
            )));
        }
        Ok(Self::Every {
            interval,
            length,
            start,
        })
    }

    /// The first due time at or after `now`
    pub fn next_run_time(&self, now: ArdenTime) -> Option<ArdenTime> {
        match self {
            Self::Never => None,
            Self::At(time) => (*time >= now).then_some(*time),
            Self::Every {
                interval,
                length,
                start,
            } => next_occurrence(*interval, *length, *start, now),
        }
    }
}

fn next_occurrence(
    interval: ArdenDuration,
    length: ArdenDuration,
    start: ArdenTime,
    now: ArdenTime,
) -> Option<ArdenTime> {
    if interval.is_zero() || interval.is_negative() || length.is_negative() {
        return None;
    }
    let end = start.add_duration(&length)?;
    if now <= start {
        return Some(start);
    }
    if now > end {
        return None;
    }

    // Month lengths vary, so the estimate may be off by one; step forward
    // from slightly below it.
    let elapsed = now.duration_since(&start)?.as_seconds()?;
    let estimate = elapsed.checked_div(interval.as_seconds()?)?.floor().to_i64()?;
    let mut n = estimate.saturating_sub(2).max(0);
    loop {
        let time = occurrence(interval, start, n)?;
        if time > end {
            return None;
        }
        if time >= now {
            return Some(time);
        }
        n += 1;
    }
}

fn occurrence(interval: ArdenDuration, start: ArdenTime, n: i64) -> Option<ArdenTime> {
    let amount = interval.amount().checked_mul(Decimal::from(n))?;
    start.add_duration(&interval.map_amount(|_| amount))
}
