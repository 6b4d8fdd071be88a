//! Tectonic-region categories.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::errors::ClassifyError;

/// Tectonic setting of a seismic source, selecting the applicable
/// ground-motion model.
///
/// The set and its order are fixed: `position()` is the index along the
/// last matrix axis.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TectonicRegion {
    ActiveShallow,
    StableShallow,
    SubductionInterface,
    SubductionSlab,
    Volcanic,
}

impl TectonicRegion {
    /// Every category in matrix order.
    pub const ALL: [TectonicRegion; 5] = [
        Self::ActiveShallow,
        Self::StableShallow,
        Self::SubductionInterface,
        Self::SubductionSlab,
        Self::Volcanic,
    ];

    /// Number of categories, i.e. the size of the last matrix axis.
    pub const COUNT: usize = Self::ALL.len();

    /// Ordinal position in `ALL`.
    pub fn position(&self) -> usize {
        *self as usize
    }

    pub fn from_position(position: usize) -> Option<Self> {
        Self::ALL.get(position).copied()
    }

    pub fn name(&self) -> &'static str {
        match self {
            Self::ActiveShallow => "active_shallow",
            Self::StableShallow => "stable_shallow",
            Self::SubductionInterface => "subduction_interface",
            Self::SubductionSlab => "subduction_slab",
            Self::Volcanic => "volcanic",
        }
    }
}

impl fmt::Display for TectonicRegion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for TectonicRegion {
    type Err = ClassifyError;

    /// Accepts the snake_case name in any letter case (`ACTIVE_SHALLOW`).
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_ascii_lowercase();
        Self::ALL
            .iter()
            .copied()
            .find(|region| region.name() == normalized)
            .ok_or_else(|| ClassifyError::UnknownCategory {
                name: s.to_string(),
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_positions_follow_declaration_order() {
        for (i, region) in TectonicRegion::ALL.iter().enumerate() {
            assert_eq!(region.position(), i);
            assert_eq!(TectonicRegion::from_position(i), Some(*region));
        }
        assert_eq!(TectonicRegion::from_position(TectonicRegion::COUNT), None);
    }

    #[test]
    fn test_parse_accepts_upper_case() {
        assert_eq!(
            "SUBDUCTION_SLAB".parse::<TectonicRegion>().unwrap(),
            TectonicRegion::SubductionSlab
        );
    }

    #[test]
    fn test_parse_unknown_category() {
        let err = "oceanic_ridge".parse::<TectonicRegion>().unwrap_err();
        assert_eq!(
            err,
            ClassifyError::UnknownCategory {
                name: "oceanic_ridge".to_string()
            }
        );
    }
}
