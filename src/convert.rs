// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 Vallés Puig, Ramon

//! Civil date-time ⇄ integer timestamp conversion.
//!
//! A civil date-time is a [`NaiveDateTime`]: a wall-clock reading with no
//! zone attached. The zone needed to pin it to an instant is passed in
//! separately as any [`chrono::TimeZone`]. The `_in` functions take it
//! explicitly; the plain ones use the process-local zone ([`Local`]).
//!
//! ```text
//! to_timestamp_in:    wall clock ─(zone)→ instant ─(precision)→ i64
//! from_timestamp_in:  i64 ─(precision)→ instant ─(zone)→ wall clock
//! ```
//!
//! # Local-time resolution
//!
//! Not every wall-clock reading maps to exactly one instant:
//!
//! - inside a **fold** (clocks set back) the reading occurs twice and the
//!   earlier instant is used;
//! - inside a **gap** (clocks set forward) the reading never occurs and is
//!   interpreted with the offset in effect before the gap, which moves it
//!   forward by the length of the gap.
//!
//! Callers should not build on either behavior.
//!
//! # Range
//!
//! Nanosecond timestamps only fit an `i64` between 1677-09-21 and
//! 2262-04-11. The plain functions saturate outside the representable
//! range; the `checked_` functions return `None` instead.

use crate::Precision;
use chrono::{
    DateTime, Local, LocalResult, NaiveDateTime, Offset, TimeDelta, TimeZone, Timelike, Utc,
};

// ═══════════════════════════════════════════════════════════════════════════
// Civil date-time → timestamp
// ═══════════════════════════════════════════════════════════════════════════

/// Convert a wall-clock reading in the local zone to a timestamp.
///
/// Saturates at `i64::MIN` / `i64::MAX` when the result does not fit.
#[inline]
pub fn to_timestamp(time: &NaiveDateTime, precision: Precision) -> i64 {
    to_timestamp_in(time, precision, &Local)
}

/// Convert a wall-clock reading in `zone` to a timestamp.
///
/// Sub-second digits finer than `precision` are truncated, not rounded.
/// Saturates at `i64::MIN` / `i64::MAX` when the result does not fit.
///
/// ```
/// use chrono::{NaiveDate, Utc};
/// use civilstamp::{to_timestamp_in, Precision};
///
/// let time = NaiveDate::from_ymd_opt(2000, 1, 1)
///     .unwrap()
///     .and_hms_nano_opt(0, 1, 1, 118_123_456)
///     .unwrap();
/// assert_eq!(to_timestamp_in(&time, Precision::Millisecond, &Utc), 946_688_461_118);
/// ```
pub fn to_timestamp_in<Tz: TimeZone>(
    time: &NaiveDateTime,
    precision: Precision,
    zone: &Tz,
) -> i64 {
    checked_to_timestamp_in(time, precision, zone).unwrap_or_else(|| {
        tracing::debug!(%time, %precision, "civil time out of range, saturating timestamp");
        if time.and_utc().timestamp() < 0 {
            i64::MIN
        } else {
            i64::MAX
        }
    })
}

/// Like [`to_timestamp`], but returns `None` instead of saturating.
#[inline]
pub fn checked_to_timestamp(time: &NaiveDateTime, precision: Precision) -> Option<i64> {
    checked_to_timestamp_in(time, precision, &Local)
}

/// Like [`to_timestamp_in`], but returns `None` instead of saturating.
pub fn checked_to_timestamp_in<Tz: TimeZone>(
    time: &NaiveDateTime,
    precision: Precision,
    zone: &Tz,
) -> Option<i64> {
    let seconds = epoch_seconds(time, zone)?;
    let units = precision.units_per_second();
    let subsec = subsec_units(time.nanosecond(), precision);
    if seconds < 0 && subsec > 0 {
        // Borrow one second so the product stays in range near i64::MIN.
        (seconds + 1)
            .checked_mul(units)?
            .checked_add(subsec - units)
    } else {
        seconds.checked_mul(units)?.checked_add(subsec)
    }
}

/// Whole seconds since the epoch of `time` read in `zone`.
fn epoch_seconds<Tz: TimeZone>(time: &NaiveDateTime, zone: &Tz) -> Option<i64> {
    resolve_local(time, zone).map(|instant| instant.timestamp())
}

/// Nanosecond-of-second expressed in `precision` units, truncated.
#[inline]
fn subsec_units(nanos: u32, precision: Precision) -> i64 {
    i64::from(nanos) / precision.nanos_per_unit()
}

/// Pin a wall-clock reading in `zone` to a single instant.
fn resolve_local<Tz: TimeZone>(time: &NaiveDateTime, zone: &Tz) -> Option<DateTime<Utc>> {
    match zone.from_local_datetime(time) {
        LocalResult::Single(dt) => Some(dt.with_timezone(&Utc)),
        LocalResult::Ambiguous(earliest, latest) => {
            tracing::debug!(
                %time,
                earliest = %earliest.offset().fix(),
                latest = %latest.offset().fix(),
                "ambiguous local time, using the earlier offset"
            );
            Some(earliest.with_timezone(&Utc))
        }
        LocalResult::None => {
            // The reading shifted back a day, taken as UTC, still lands before
            // the transition for any gap and offset under a day.
            let probe = time.checked_sub_signed(TimeDelta::days(1))?;
            let before = zone.offset_from_utc_datetime(&probe).fix();
            tracing::debug!(
                %time,
                offset = %before,
                "local time in a gap, using the offset before it"
            );
            time.checked_sub_signed(TimeDelta::seconds(before.local_minus_utc().into()))
                .map(|utc| utc.and_utc())
        }
    }
}

// ═══════════════════════════════════════════════════════════════════════════
// Timestamp → civil date-time
// ═══════════════════════════════════════════════════════════════════════════

/// Convert a timestamp to a wall-clock reading in the local zone.
///
/// Saturates at [`NaiveDateTime::MIN`] / [`NaiveDateTime::MAX`] when the
/// instant is outside chrono's range.
#[inline]
pub fn from_timestamp(timestamp: i64, precision: Precision) -> NaiveDateTime {
    from_timestamp_in(timestamp, precision, &Local)
}

/// Convert a timestamp to a wall-clock reading in `zone`.
///
/// The offset is the one `zone` has at the resulting instant, so daylight
/// saving transitions between the epoch and that instant are accounted for.
/// Saturates at [`NaiveDateTime::MIN`] / [`NaiveDateTime::MAX`] when the
/// instant is outside chrono's range.
///
/// ```
/// use chrono::{NaiveDate, Utc};
/// use civilstamp::{from_timestamp_in, Precision};
///
/// let time = from_timestamp_in(946_688_461, Precision::Second, &Utc);
/// let expected = NaiveDate::from_ymd_opt(2000, 1, 1)
///     .unwrap()
///     .and_hms_opt(0, 1, 1)
///     .unwrap();
/// assert_eq!(time, expected);
/// ```
pub fn from_timestamp_in<Tz: TimeZone>(
    timestamp: i64,
    precision: Precision,
    zone: &Tz,
) -> NaiveDateTime {
    checked_from_timestamp_in(timestamp, precision, zone).unwrap_or_else(|| {
        tracing::debug!(timestamp, %precision, "timestamp out of range, saturating civil time");
        if timestamp < 0 {
            NaiveDateTime::MIN
        } else {
            NaiveDateTime::MAX
        }
    })
}

/// Like [`from_timestamp`], but returns `None` instead of saturating.
#[inline]
pub fn checked_from_timestamp(timestamp: i64, precision: Precision) -> Option<NaiveDateTime> {
    checked_from_timestamp_in(timestamp, precision, &Local)
}

/// Like [`from_timestamp_in`], but returns `None` instead of saturating.
pub fn checked_from_timestamp_in<Tz: TimeZone>(
    timestamp: i64,
    precision: Precision,
    zone: &Tz,
) -> Option<NaiveDateTime> {
    let units = precision.units_per_second();
    let seconds = timestamp.div_euclid(units);
    let nanos = timestamp.rem_euclid(units) * precision.nanos_per_unit();
    let utc = DateTime::from_timestamp(seconds, u32::try_from(nanos).ok()?)?.naive_utc();
    // The wall clock can leave chrono's range even when the instant does not.
    utc.checked_add_offset(zone.offset_from_utc_datetime(&utc).fix())
}

// ═══════════════════════════════════════════════════════════════════════════
// Tests
// ═══════════════════════════════════════════════════════════════════════════
