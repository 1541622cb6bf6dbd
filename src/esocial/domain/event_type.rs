//! The closed catalog of eSocial event types.

use super::ParseEventTypeError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// eSocial event type tag.
///
/// The catalog is closed: every schema and rule lookup matches on this enum
/// exhaustively, so adding a variant fails to compile until the new event
/// has a schema and a rule set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum EventType {
    /// S-1000: employer, taxpayer or public body information.
    S1000,
    /// S-1200: worker remuneration (general social security regime).
    S1200,
    /// S-1202: civil servant remuneration (own social security regime).
    S1202,
    /// S-1207: own-regime social security benefits.
    S1207,
    /// S-1210: payments of earned income.
    S1210,
    /// S-2200: worker registration and admission.
    S2200,
    /// S-2205: change of worker registration data.
    S2205,
    /// S-2206: change of employment contract.
    S2206,
    /// S-2210: workplace accident report (CAT).
    S2210,
    /// S-2220: occupational health monitoring (ASO).
    S2220,
    /// S-2230: temporary leave.
    S2230,
    /// S-2240: environmental working conditions and risk agents.
    S2240,
    /// S-2250: advance notice of termination.
    S2250,
    /// S-2299: termination of employment.
    S2299,
    /// S-2300: non-employee worker, start.
    S2300,
    /// S-2399: non-employee worker, end.
    S2399,
    /// S-2400: public-entity beneficiary registration.
    S2400,
    /// S-3000: exclusion of a previously submitted event.
    S3000,
    /// S-5001: social contributions per worker (totalizer).
    S5001,
    /// S-5002: income tax withheld per worker (totalizer).
    S5002,
    /// S-5003: FGTS information per worker (totalizer).
    S5003,
    /// S-5011: consolidated social contributions per employer (totalizer).
    S5011,
    /// S-5012: consolidated income tax per employer (totalizer).
    S5012,
    /// S-5013: consolidated FGTS per employer (totalizer).
    S5013,
}

impl EventType {
    /// Every event type in catalog order.
    pub const ALL: [Self; 24] = [
        Self::S1000,
        Self::S1200,
        Self::S1202,
        Self::S1207,
        Self::S1210,
        Self::S2200,
        Self::S2205,
        Self::S2206,
        Self::S2210,
        Self::S2220,
        Self::S2230,
        Self::S2240,
        Self::S2250,
        Self::S2299,
        Self::S2300,
        Self::S2399,
        Self::S2400,
        Self::S3000,
        Self::S5001,
        Self::S5002,
        Self::S5003,
        Self::S5011,
        Self::S5012,
        Self::S5013,
    ];

    /// Returns the canonical hyphenated code, e.g. `S-2250`.
    #[must_use]
    pub const fn code(self) -> &'static str {
        match self {
            Self::S1000 => "S-1000",
            Self::S1200 => "S-1200",
            Self::S1202 => "S-1202",
            Self::S1207 => "S-1207",
            Self::S1210 => "S-1210",
            Self::S2200 => "S-2200",
            Self::S2205 => "S-2205",
            Self::S2206 => "S-2206",
            Self::S2210 => "S-2210",
            Self::S2220 => "S-2220",
            Self::S2230 => "S-2230",
            Self::S2240 => "S-2240",
            Self::S2250 => "S-2250",
            Self::S2299 => "S-2299",
            Self::S2300 => "S-2300",
            Self::S2399 => "S-2399",
            Self::S2400 => "S-2400",
            Self::S3000 => "S-3000",
            Self::S5001 => "S-5001",
            Self::S5002 => "S-5002",
            Self::S5003 => "S-5003",
            Self::S5011 => "S-5011",
            Self::S5012 => "S-5012",
            Self::S5013 => "S-5013",
        }
    }

    /// Returns a short English description of the event.
    #[must_use]
    pub const fn description(self) -> &'static str {
        match self {
            Self::S1000 => "employer information",
            Self::S1200 => "worker remuneration",
            Self::S1202 => "own-regime remuneration",
            Self::S1207 => "own-regime benefits",
            Self::S1210 => "income payments",
            Self::S2200 => "admission",
            Self::S2205 => "registration data change",
            Self::S2206 => "contract change",
            Self::S2210 => "workplace accident",
            Self::S2220 => "health monitoring",
            Self::S2230 => "temporary leave",
            Self::S2240 => "environmental conditions",
            Self::S2250 => "advance notice",
            Self::S2299 => "termination",
            Self::S2300 => "non-employee start",
            Self::S2399 => "non-employee end",
            Self::S2400 => "public-entity beneficiary",
            Self::S3000 => "event exclusion",
            Self::S5001 => "per-worker contributions",
            Self::S5002 => "per-worker income tax",
            Self::S5003 => "per-worker FGTS",
            Self::S5011 => "employer contributions",
            Self::S5012 => "employer income tax",
            Self::S5013 => "employer FGTS",
        }
    }

    /// Returns `true` for monthly payroll events identified by `perApur`.
    #[must_use]
    pub const fn is_periodic(self) -> bool {
        matches!(
            self,
            Self::S1200 | Self::S1202 | Self::S1207 | Self::S1210
        )
    }

    /// Returns `true` for events that concern a single worker.
    #[must_use]
    pub const fn is_worker_event(self) -> bool {
        matches!(
            self,
            Self::S2200
                | Self::S2205
                | Self::S2206
                | Self::S2210
                | Self::S2220
                | Self::S2230
                | Self::S2240
                | Self::S2250
                | Self::S2299
                | Self::S2300
                | Self::S2399
                | Self::S2400
        )
    }

    /// Returns `true` for totalizer events returned by the government gateway.
    #[must_use]
    pub const fn is_totalizer(self) -> bool {
        matches!(
            self,
            Self::S5001 | Self::S5002 | Self::S5003 | Self::S5011 | Self::S5012 | Self::S5013
        )
    }
}

impl TryFrom<&str> for EventType {
    type Error = ParseEventTypeError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        let normalized: String = value
            .trim()
            .chars()
            .filter(|c| *c != '-')
            .map(|c| c.to_ascii_uppercase())
            .collect();

        Self::ALL
            .into_iter()
            .find(|event_type| {
                event_type
                    .code()
                    .chars()
                    .filter(|c| *c != '-')
                    .eq(normalized.chars())
            })
            .ok_or_else(|| ParseEventTypeError(value.to_owned()))
    }
}

impl FromStr for EventType {
    type Err = ParseEventTypeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::try_from(s)
    }
}

impl fmt::Display for EventType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

impl Serialize for EventType {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(self.code())
    }
}

impl<'de> Deserialize<'de> for EventType {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let raw = String::deserialize(deserializer)?;
        Self::try_from(raw.as_str()).map_err(serde::de::Error::custom)
    }
}
