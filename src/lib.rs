// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 Vallés Puig, Ramon

//! Civil date-time ⇄ epoch timestamp conversion
//!
//! This crate converts between zone-naive civil date-times
//! ([`chrono::NaiveDateTime`]) and signed integer timestamps counted from
//! 1970-01-01T00:00:00Z at a chosen [`Precision`].
//!
//! # Core items
//!
//! - [`Precision`]: second, millisecond, microsecond or nanosecond.
//! - [`to_timestamp_in`] / [`from_timestamp_in`]: conversion in an explicit
//!   zone (any [`chrono::TimeZone`]).
//! - [`to_timestamp`] / [`from_timestamp`]: the same in the process-local
//!   zone.
//! - `checked_*` variants returning `None` where the plain functions
//!   saturate.
//! - [`zone`]: IANA zone lookup through `chrono-tz`.
//!
//! # Example
//!
//! ```
//! use chrono::Utc;
//! use civilstamp::{from_timestamp_in, to_timestamp_in, zone, Precision};
//!
//! let helsinki = zone("Europe/Helsinki").unwrap();
//! let wall = from_timestamp_in(946_688_461_118, Precision::Millisecond, &helsinki);
//! assert_eq!(wall.to_string(), "2000-01-01 02:01:01.118");
//!
//! assert_eq!(to_timestamp_in(&wall, Precision::Second, &helsinki), 946_688_461);
//! assert_ne!(wall, from_timestamp_in(946_688_461_118, Precision::Millisecond, &Utc));
//! ```
//!
//! # Features
//!
//! - `serde`: (de)serialize [`Precision`] by name. Unknown names read as
//!   [`Precision::Second`].

mod convert;
mod precision;
mod zone;

// ── Re-exports ────────────────────────────────────────────────────────────

pub use convert::{
    checked_from_timestamp, checked_from_timestamp_in, checked_to_timestamp,
    checked_to_timestamp_in, from_timestamp, from_timestamp_in, to_timestamp, to_timestamp_in,
};
pub use precision::Precision;
pub use zone::{local_zone, zone};
