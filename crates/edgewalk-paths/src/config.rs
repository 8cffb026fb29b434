use crate::distance::CELL_SPAN;
use crate::error::PathError;

/// Fixed search ceilings and distance cutoffs.
///
/// All limits are counts, so a search is bounded identically on every
/// machine. Distances are in [`CELL_SPAN`] units, matching
/// [`MovePather::distance`](crate::MovePather::distance).
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct PathConfig {
    /// Cells a single edge follow may enter before giving up.
    pub max_edge_follow: usize,
    /// Commands a detour may add on top of the path it branched from.
    pub max_detour_len: usize,
    /// Obstruction edges tried past unreachable islands before giving up.
    pub doughnut_retries: usize,
    /// Beyond this distance from the destination, costly blockers are held
    /// to [`MoveType::MovingBlock`](crate::MoveType::MovingBlock).
    pub far_cutoff: i32,
    /// Within this distance of the destination, threat is ignored.
    pub threat_radius: i32,
    /// Scripted sessions never consult threat.
    pub scripted: bool,
}

impl Default for PathConfig {
    fn default() -> Self {
        Self {
            max_edge_follow: 400,
            max_detour_len: 300,
            doughnut_retries: 5,
            far_cutoff: CELL_SPAN,
            threat_radius: 5 * CELL_SPAN,
            scripted: false,
        }
    }
}

impl PathConfig {
    /// Check that every limit allows at least some search.
    pub fn validate(&self) -> Result<(), PathError> {
        if self.max_edge_follow == 0 {
            return Err(PathError::InvalidConfig("max_edge_follow must be positive"));
        }
        if self.max_detour_len == 0 {
            return Err(PathError::InvalidConfig("max_detour_len must be positive"));
        }
        if self.doughnut_retries == 0 {
            return Err(PathError::InvalidConfig("doughnut_retries must be positive"));
        }
        if self.far_cutoff < 0 || self.threat_radius < 0 {
            return Err(PathError::InvalidConfig("distance cutoffs must not be negative"));
        }
        Ok(())
    }
}
