use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize};

use crate::error::{DashaError, DashaResult};

/// The nine grahas of the Vimshottari system.
///
/// Declared in the canonical cycle order (Ketu first), which is also the
/// order the built-in reference table iterates. Every display mapping below
/// is total; there is no string-keyed fallback path.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Planet {
    Ketu,
    Venus,
    Sun,
    Moon,
    Mars,
    Rahu,
    Jupiter,
    Saturn,
    Mercury,
}

/// Canonical cycle order used by nakshatra-based dasha systems.
pub const PLANET_CYCLE: [Planet; 9] = [
    Planet::Ketu,
    Planet::Venus,
    Planet::Sun,
    Planet::Moon,
    Planet::Mars,
    Planet::Rahu,
    Planet::Jupiter,
    Planet::Saturn,
    Planet::Mercury,
];

impl Planet {
    /// Canonical English name, matching the external chart-data contract.
    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            Self::Sun => "Sun",
            Self::Moon => "Moon",
            Self::Mercury => "Mercury",
            Self::Venus => "Venus",
            Self::Mars => "Mars",
            Self::Jupiter => "Jupiter",
            Self::Saturn => "Saturn",
            Self::Rahu => "Rahu",
            Self::Ketu => "Ketu",
        }
    }

    /// Two-letter abbreviation used in compact period listings.
    #[must_use]
    pub fn abbreviation(self) -> &'static str {
        match self {
            Self::Sun => "Su",
            Self::Moon => "Mo",
            Self::Mercury => "Me",
            Self::Venus => "Ve",
            Self::Mars => "Ma",
            Self::Jupiter => "Ju",
            Self::Saturn => "Sa",
            Self::Rahu => "Ra",
            Self::Ketu => "Ke",
        }
    }

    /// Astrological glyph.
    #[must_use]
    pub fn symbol(self) -> &'static str {
        match self {
            Self::Sun => "\u{2609}",
            Self::Moon => "\u{263D}",
            Self::Mercury => "\u{263F}",
            Self::Venus => "\u{2640}",
            Self::Mars => "\u{2642}",
            Self::Jupiter => "\u{2643}",
            Self::Saturn => "\u{2644}",
            Self::Rahu => "\u{260A}",
            Self::Ketu => "\u{260B}",
        }
    }

    /// Conventional display color as a CSS hex string.
    #[must_use]
    pub fn color(self) -> &'static str {
        match self {
            Self::Sun => "#E25822",
            Self::Moon => "#D3D3D3",
            Self::Mercury => "#00A36C",
            Self::Venus => "#BF40BF",
            Self::Mars => "#FF0000",
            Self::Jupiter => "#FFD700",
            Self::Saturn => "#696969",
            Self::Rahu => "#ADD8E6",
            Self::Ketu => "#CD7F32",
        }
    }

    /// Parses a canonical planet name, ignoring ASCII case.
    ///
    /// Unknown names are a data error at the chart-data boundary, never a
    /// silent default.
    pub fn from_name(name: &str) -> DashaResult<Self> {
        PLANET_CYCLE
            .into_iter()
            .find(|planet| planet.name().eq_ignore_ascii_case(name))
            .ok_or_else(|| DashaError::InvalidData(format!("unknown planet name: {name}")))
    }
}

impl fmt::Display for Planet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Planet {
    type Err = DashaError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_name(s)
    }
}

// The chart-data contract is case-insensitive on planet names, so the derive
// is not enough on the way in.
impl<'de> Deserialize<'de> for Planet {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let name = String::deserialize(deserializer)?;
        Self::from_name(&name).map_err(serde::de::Error::custom)
    }
}
