use strum::Display;

use crate::{DriverName, TOP_N};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Display)]
pub enum TipError {
    #[strum(serialize = "race id is missing")]
    MissingRaceId,
    #[strum(serialize = "at least one driver must be picked")]
    EmptyOrder,
    #[strum(serialize = "at most ten drivers are allowed")]
    TooManyDrivers,
    #[strum(serialize = "blank driver names are not allowed")]
    BlankDriver,
}

/// Write-path gate applied before a tip is persisted. Scoring itself stays
/// total and accepts any input.
pub fn validate_tip(race_id: &str, order: &[DriverName]) -> Result<(), TipError> {
    if race_id.trim().is_empty() {
        return Err(TipError::MissingRaceId);
    }
    if order.is_empty() {
        return Err(TipError::EmptyOrder);
    }
    if order.len() > TOP_N {
        return Err(TipError::TooManyDrivers);
    }
    if order.iter().any(|driver| driver.trim().is_empty()) {
        return Err(TipError::BlankDriver);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn order(names: &[&str]) -> Vec<DriverName> {
        names.iter().map(|n| (*n).to_owned()).collect()
    }

    #[test]
    fn accepts_a_plain_top_three() {
        assert_eq!(validate_tip("1", &order(&["a", "b", "c"])), Ok(()));
    }

    #[test]
    fn rejects_degenerate_tips() {
        assert_eq!(validate_tip("", &order(&["a"])), Err(TipError::MissingRaceId));
        assert_eq!(validate_tip("1", &[]), Err(TipError::EmptyOrder));
        assert_eq!(
            validate_tip("1", &order(&["a"; 11])),
            Err(TipError::TooManyDrivers)
        );
        assert_eq!(
            validate_tip("1", &order(&["a", " "])),
            Err(TipError::BlankDriver)
        );
    }
}
