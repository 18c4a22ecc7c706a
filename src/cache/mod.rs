//! Cache module for storing the day's raw response to disk
//!
//! This module provides a day-keyed cache that persists the raw bytes of the
//! passage-of-the-day response. One file exists per calendar day and only
//! today's entry is ever read, so entries left behind by previous days are
//! simply ignored rather than cleaned up.

mod manager;

pub use manager::{CacheError, DateKey, DayCache};
