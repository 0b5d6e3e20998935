// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 Vallés Puig, Ramon

//! Zone lookup.
//!
//! Zone rules come from `chrono` (`Utc`, `FixedOffset`, `Local`) and
//! `chrono-tz` (the IANA database). Any of them can be handed to the
//! conversion functions; this module only resolves names.

use chrono::Local;
use chrono_tz::{ParseError, Tz};

/// Resolve an IANA zone identifier such as `"Europe/Helsinki"` or `"UTC"`.
///
/// Lookup is exact. The `chrono-tz` error is returned as is.
///
/// ```
/// let helsinki = civilstamp::zone("Europe/Helsinki").unwrap();
/// assert_eq!(helsinki.name(), "Europe/Helsinki");
/// assert!(civilstamp::zone("Mars/Olympus_Mons").is_err());
/// ```
pub fn zone(name: &str) -> Result<Tz, ParseError> {
    name.parse::<Tz>().inspect_err(|err| {
        tracing::debug!(name, %err, "unknown time zone");
    })
}

/// The process-local zone used by [`to_timestamp`](crate::to_timestamp) and
/// [`from_timestamp`](crate::from_timestamp).
#[inline]
pub fn local_zone() -> Local {
    Local
}
