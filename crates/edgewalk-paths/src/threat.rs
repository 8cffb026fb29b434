//! Staged relaxation of threat tolerance.

/// How much danger a unit currently accepts along its route.
///
/// When no safe route exists the walker advances to the next stage and
/// retries from where it stands, until threat is ignored entirely.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum ThreatStage {
    /// Any threat at all blocks a cell.
    Strict,
    /// Threat up to half the unit's risk is accepted.
    HalfRisk,
    /// Threat up to one and a half times the unit's risk is accepted.
    Extended,
    /// Threat is not consulted.
    Ignore,
}

impl ThreatStage {
    /// Starting stage for a unit: threat-aware units start strict.
    pub fn initial(risk: Option<i32>) -> Self {
        match risk {
            Some(_) => ThreatStage::Strict,
            None => ThreatStage::Ignore,
        }
    }

    /// The following, more permissive stage.
    pub fn next(self) -> Option<Self> {
        match self {
            ThreatStage::Strict => Some(ThreatStage::HalfRisk),
            ThreatStage::HalfRisk => Some(ThreatStage::Extended),
            ThreatStage::Extended => Some(ThreatStage::Ignore),
            ThreatStage::Ignore => None,
        }
    }

    /// Highest acceptable threat for a unit with the given risk, or `None`
    /// when threat is ignored.
    pub fn tolerance(self, risk: i32) -> Option<i32> {
        match self {
            ThreatStage::Strict => Some(0),
            ThreatStage::HalfRisk => Some(risk >> 1),
            ThreatStage::Extended => Some((risk >> 1) + risk),
            ThreatStage::Ignore => None,
        }
    }
}
