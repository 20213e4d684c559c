use anyhow::{anyhow, Result};
use wayfind_core::{AccessMode, Facility};

/// Parse a facility label, listing the accepted ones on failure.
pub fn parse_facility(s: &str) -> Result<Facility> {
    s.parse::<Facility>().map_err(|_| {
        anyhow!("unknown facility '{s}': use 'restroom', 'lift', 'dining', or 'medical'")
    })
}

/// Human-readable name of an access mode.
pub fn mode_label(mode: AccessMode) -> &'static str {
    match mode {
        AccessMode::All => "fastest",
        AccessMode::StepFree => "step-free",
    }
}
