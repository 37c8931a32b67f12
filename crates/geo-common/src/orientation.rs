//! Map orientation choices consumed by the orientation factory.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::GeoError;

/// Which orientation decorator, if any, should wrap a base projection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Orientation {
    /// Leave the projection as it is.
    None,
    /// North maps to smaller y than south.
    #[default]
    Upright,
    /// Exchange the x and y axes.
    Swapped,
}

impl Orientation {
    /// All orientations in declaration order.
    pub const ALL: [Orientation; 3] = [
        Orientation::None,
        Orientation::Upright,
        Orientation::Swapped,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Orientation::None => "none",
            Orientation::Upright => "upright",
            Orientation::Swapped => "swapped",
        }
    }
}

impl FromStr for Orientation {
    type Err = GeoError;

    /// Case-insensitive parse of "none", "upright" or "swapped".
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "none" => Ok(Orientation::None),
            "upright" => Ok(Orientation::Upright),
            "swapped" => Ok(Orientation::Swapped),
            _ => Err(GeoError::InvalidOrientation(s.to_string())),
        }
    }
}

impl fmt::Display for Orientation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_orientation() {
        assert_eq!("upright".parse::<Orientation>().unwrap(), Orientation::Upright);
        assert_eq!("SWAPPED".parse::<Orientation>().unwrap(), Orientation::Swapped);
        assert_eq!(" none ".parse::<Orientation>().unwrap(), Orientation::None);
        assert!(matches!(
            "sideways".parse::<Orientation>(),
            Err(GeoError::InvalidOrientation(_))
        ));
    }

    #[test]
    fn test_display_roundtrip() {
        for orientation in Orientation::ALL {
            let parsed: Orientation = orientation.to_string().parse().unwrap();
            assert_eq!(parsed, orientation);
        }
    }
}
