use crate::prelude::Error;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// [ReferenceFrame] a set of coordinates is expressed in.
/// This is provenance metadata only: coordinates are never
/// transformed from one frame to another.
#[derive(Default, Debug, Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "String", into = "String"))]
pub enum ReferenceFrame {
    #[default]
    Unknown,
    /// WGS84, assumed to be the latest realization
    WGS84,
    /// WGS84, GPS week 730 realization
    WGS84G730,
    /// WGS84, GPS week 873 realization
    WGS84G873,
    /// WGS84, GPS week 1150 realization
    WGS84G1150,
    /// International Terrestrial Reference Frame
    ITRF,
    /// PZ90 (Glonass)
    PZ90,
    /// PZ90, KGS realization
    PZ90KGS,
    /// China Geodetic Coordinate System 2000 (BeiDou)
    CGCS2000,
}

impl ReferenceFrame {
    /// All frames, ordered by integer code.
    pub const ALL: [Self; 9] = [
        Self::Unknown,
        Self::WGS84,
        Self::WGS84G730,
        Self::WGS84G873,
        Self::WGS84G1150,
        Self::ITRF,
        Self::PZ90,
        Self::PZ90KGS,
        Self::CGCS2000,
    ];

    /// Integer code of this frame
    pub fn code(&self) -> u8 {
        *self as u8
    }
}

impl TryFrom<u8> for ReferenceFrame {
    type Error = Error;
    fn try_from(code: u8) -> Result<Self, Self::Error> {
        Self::ALL
            .get(code as usize)
            .copied()
            .ok_or(Error::InvalidReferenceFrameCode(code))
    }
}

impl From<ReferenceFrame> for u8 {
    fn from(frame: ReferenceFrame) -> u8 {
        frame.code()
    }
}

impl TryFrom<String> for ReferenceFrame {
    type Error = Error;
    fn try_from(s: String) -> Result<Self, Self::Error> {
        s.parse()
    }
}

impl From<ReferenceFrame> for String {
    fn from(frame: ReferenceFrame) -> String {
        frame.to_string()
    }
}

impl std::str::FromStr for ReferenceFrame {
    type Err = Error;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        Self::ALL
            .iter()
            .find(|frame| frame.to_string().eq_ignore_ascii_case(trimmed))
            .copied()
            .ok_or(Error::UnknownReferenceFrame(trimmed.to_string()))
    }
}

impl std::fmt::Display for ReferenceFrame {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            Self::Unknown => write!(f, "Unknown"),
            Self::WGS84 => write!(f, "WGS84"),
            Self::WGS84G730 => write!(f, "WGS84(G730)"),
            Self::WGS84G873 => write!(f, "WGS84(G873)"),
            Self::WGS84G1150 => write!(f, "WGS84(G1150)"),
            Self::ITRF => write!(f, "ITRF"),
            Self::PZ90 => write!(f, "PZ90"),
            Self::PZ90KGS => write!(f, "PZ90KGS"),
            Self::CGCS2000 => write!(f, "CGCS2000"),
        }
    }
}
