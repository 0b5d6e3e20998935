// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 Vallés Puig, Ramon

//! Timestamp precisions.
//!
//! A [`Precision`] names the unit an integer epoch timestamp is counted in.
//!
//! | Variant | Unit | Units per second |
//! |---------|------|------------------|
//! | [`Precision::Second`] | s | 1 |
//! | [`Precision::Millisecond`] | ms | 1 000 |
//! | [`Precision::Microsecond`] | µs | 1 000 000 |
//! | [`Precision::Nanosecond`] | ns | 1 000 000 000 |
//!
//! Names are parsed permissively: anything that is not one of the four
//! variant names (in any ASCII case) is read as [`Precision::Second`].
//! Configuration code relies on this and never sees a parse error.

use std::convert::Infallible;
use std::fmt;
use std::str::FromStr;

#[cfg(feature = "serde")]
use serde::{de, Deserialize, Deserializer, Serialize, Serializer};

const NANOS_PER_SECOND: i64 = 1_000_000_000;

/// Granularity of an integer epoch timestamp.
#[derive(Debug, Default, Copy, Clone, PartialEq, Eq, Hash)]
pub enum Precision {
    /// Whole seconds since the epoch.
    #[default]
    Second,
    /// Milliseconds since the epoch.
    Millisecond,
    /// Microseconds since the epoch.
    Microsecond,
    /// Nanoseconds since the epoch.
    Nanosecond,
}

impl Precision {
    /// Every precision, coarsest first.
    pub const ALL: [Precision; 4] = [
        Precision::Second,
        Precision::Millisecond,
        Precision::Microsecond,
        Precision::Nanosecond,
    ];

    /// Look up a precision by name, ignoring ASCII case.
    ///
    /// Unrecognized names, including the empty string, fall back to
    /// [`Precision::Second`].
    ///
    /// ```
    /// use civilstamp::Precision;
    ///
    /// assert_eq!(Precision::from_name("MilliSecond"), Precision::Millisecond);
    /// assert_eq!(Precision::from_name("fortnight"), Precision::Second);
    /// ```
    pub fn from_name(name: &str) -> Self {
        Self::ALL
            .into_iter()
            .find(|p| p.name().eq_ignore_ascii_case(name))
            .unwrap_or_else(|| {
                tracing::debug!(name, "unrecognized precision name, using seconds");
                Precision::Second
            })
    }

    /// Lowercase canonical name, accepted back by [`Precision::from_name`].
    #[inline]
    pub const fn name(self) -> &'static str {
        match self {
            Precision::Second => "second",
            Precision::Millisecond => "millisecond",
            Precision::Microsecond => "microsecond",
            Precision::Nanosecond => "nanosecond",
        }
    }

    /// How many units of this precision make up one second.
    #[inline]
    pub const fn units_per_second(self) -> i64 {
        match self {
            Precision::Second => 1,
            Precision::Millisecond => 1_000,
            Precision::Microsecond => 1_000_000,
            Precision::Nanosecond => NANOS_PER_SECOND,
        }
    }

    /// How many nanoseconds make up one unit of this precision.
    #[inline]
    pub const fn nanos_per_unit(self) -> i64 {
        NANOS_PER_SECOND / self.units_per_second()
    }
}

impl fmt::Display for Precision {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.name())
    }
}

impl FromStr for Precision {
    type Err = Infallible;

    #[inline]
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self::from_name(s))
    }
}

// ── Serde ─────────────────────────────────────────────────────────────────

#[cfg(feature = "serde")]
impl Serialize for Precision {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(self.name())
    }
}

#[cfg(feature = "serde")]
impl<'de> Deserialize<'de> for Precision {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        struct NameVisitor;

        impl de::Visitor<'_> for NameVisitor {
            type Value = Precision;

            fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str("a precision name")
            }

            fn visit_str<E>(self, v: &str) -> Result<Self::Value, E>
            where
                E: de::Error,
            {
                Ok(Precision::from_name(v))
            }
        }

        deserializer.deserialize_str(NameVisitor)
    }
}

// ═══════════════════════════════════════════════════════════════════════════
// Tests
// ═══════════════════════════════════════════════════════════════════════════

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_name_matches_lowercase_names() {
        assert_eq!(Precision::from_name("second"), Precision::Second);
        assert_eq!(Precision::from_name("millisecond"), Precision::Millisecond);
        assert_eq!(Precision::from_name("microsecond"), Precision::Microsecond);
        assert_eq!(Precision::from_name("nanosecond"), Precision::Nanosecond);
    }

    #[test]
    fn from_name_ignores_case() {
        assert_eq!(Precision::from_name("NANOSECOND"), Precision::Nanosecond);
        assert_eq!(Precision::from_name("MicroSecond"), Precision::Microsecond);
        assert_eq!(Precision::from_name("mILLISECOND"), Precision::Millisecond);
        assert_eq!(Precision::from_name("Second"), Precision::Second);
    }

    #[test]
    fn from_name_falls_back_to_second() {
        for name in ["", " ", "nanos", "ms", "nanosecond ", "milli-second", "seconds"] {
            assert_eq!(Precision::from_name(name), Precision::Second, "{name:?}");
        }
    }

    #[test]
    fn name_roundtrips_through_from_name() {
        for p in Precision::ALL {
            assert_eq!(Precision::from_name(p.name()), p);
            assert_eq!(p.to_string(), p.name());
        }
    }

    #[test]
    fn from_str_never_fails() {
        let p: Precision = "Microsecond".parse().unwrap();
        assert_eq!(p, Precision::Microsecond);
        let p: Precision = "garbage".parse().unwrap();
        assert_eq!(p, Precision::Second);
    }

    #[test]
    fn unit_factors() {
        assert_eq!(Precision::Second.units_per_second(), 1);
        assert_eq!(Precision::Millisecond.units_per_second(), 1_000);
        assert_eq!(Precision::Microsecond.units_per_second(), 1_000_000);
        assert_eq!(Precision::Nanosecond.units_per_second(), 1_000_000_000);

        assert_eq!(Precision::Second.nanos_per_unit(), 1_000_000_000);
        assert_eq!(Precision::Millisecond.nanos_per_unit(), 1_000_000);
        assert_eq!(Precision::Microsecond.nanos_per_unit(), 1_000);
        assert_eq!(Precision::Nanosecond.nanos_per_unit(), 1);

        for p in Precision::ALL {
            assert_eq!(p.units_per_second() * p.nanos_per_unit(), NANOS_PER_SECOND);
        }
    }

    #[test]
    fn default_is_second() {
        assert_eq!(Precision::default(), Precision::Second);
    }

    #[cfg(feature = "serde")]
    #[test]
    fn serde_uses_lowercase_names() {
        let json = serde_json::to_string(&Precision::Microsecond).unwrap();
        assert_eq!(json, "\"microsecond\"");

        let back: Precision = serde_json::from_str(&json).unwrap();
        assert_eq!(back, Precision::Microsecond);
    }

    #[cfg(feature = "serde")]
    #[test]
    fn serde_deserialize_is_permissive() {
        let p: Precision = serde_json::from_str("\"NanoSecond\"").unwrap();
        assert_eq!(p, Precision::Nanosecond);
        let p: Precision = serde_json::from_str("\"hourly\"").unwrap();
        assert_eq!(p, Precision::Second);
        assert!(serde_json::from_str::<Precision>("42").is_err());
    }
}
