//! Compounding frequency type.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Named compounding frequency for interest calculations.
///
/// Every variant maps to at least one period per year, so converting a
/// `CompoundingFrequency` always yields a count that passes the
/// positive-frequency validation in
/// [`calculate_compound_interest`](crate::interest::calculate_compound_interest).
/// Arbitrary counts can still be passed directly as a `u32`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum CompoundingFrequency {
    /// Annual compounding (1x per year)
    #[default]
    Annual,
    /// Semi-annual compounding (2x per year)
    SemiAnnual,
    /// Quarterly compounding (4x per year)
    Quarterly,
    /// Monthly compounding (12x per year)
    Monthly,
    /// Weekly compounding (52x per year)
    Weekly,
    /// Daily compounding (365x per year)
    Daily,
}

impl CompoundingFrequency {
    /// Returns the number of compounding periods per year.
    #[must_use]
    pub fn periods_per_year(&self) -> u32 {
        match self {
            CompoundingFrequency::Annual => 1,
            CompoundingFrequency::SemiAnnual => 2,
            CompoundingFrequency::Quarterly => 4,
            CompoundingFrequency::Monthly => 12,
            CompoundingFrequency::Weekly => 52,
            CompoundingFrequency::Daily => 365,
        }
    }
}

impl fmt::Display for CompoundingFrequency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            CompoundingFrequency::Annual => "Annual",
            CompoundingFrequency::SemiAnnual => "Semi-Annual",
            CompoundingFrequency::Quarterly => "Quarterly",
            CompoundingFrequency::Monthly => "Monthly",
            CompoundingFrequency::Weekly => "Weekly",
            CompoundingFrequency::Daily => "Daily",
        };
        write!(f, "{name}")
    }
}

impl From<CompoundingFrequency> for u32 {
    fn from(freq: CompoundingFrequency) -> Self {
        freq.periods_per_year()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_periods_per_year() {
        assert_eq!(CompoundingFrequency::Annual.periods_per_year(), 1);
        assert_eq!(CompoundingFrequency::SemiAnnual.periods_per_year(), 2);
        assert_eq!(CompoundingFrequency::Quarterly.periods_per_year(), 4);
        assert_eq!(CompoundingFrequency::Monthly.periods_per_year(), 12);
        assert_eq!(CompoundingFrequency::Weekly.periods_per_year(), 52);
        assert_eq!(CompoundingFrequency::Daily.periods_per_year(), 365);
    }

    #[test]
    fn test_default_is_annual() {
        assert_eq!(CompoundingFrequency::default(), CompoundingFrequency::Annual);
    }

    #[test]
    fn test_into_u32() {
        let n: u32 = CompoundingFrequency::Monthly.into();
        assert_eq!(n, 12);
    }

    #[test]
    fn test_display() {
        assert_eq!(CompoundingFrequency::SemiAnnual.to_string(), "Semi-Annual");
        assert_eq!(CompoundingFrequency::Daily.to_string(), "Daily");
    }
}
