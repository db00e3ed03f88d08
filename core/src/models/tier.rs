//! Demographic tiers
//!
//! Each simulated user belongs to exactly one of three population segments.
//! The tier determines the user's response-vector shape and selection
//! probability; the parameters themselves live in `generator::TierProfile`.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Population segment of a simulated user
///
/// The declaration order is significant: it is the cumulative-weight
/// selection order and the reporting order.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
pub enum Tier {
    /// Primary and secondary education (K-12 equivalent)
    PrimarySecondary,

    /// Undergraduate education
    Undergraduate,

    /// Graduate education
    Graduate,
}

impl Tier {
    /// All tiers in selection order
    pub const ALL: [Tier; 3] = [Tier::PrimarySecondary, Tier::Undergraduate, Tier::Graduate];

    /// Human-readable label used in reports
    pub fn label(&self) -> &'static str {
        match self {
            Tier::PrimarySecondary => "Primary/Secondary",
            Tier::Undergraduate => "Undergraduate",
            Tier::Graduate => "Graduate",
        }
    }
}

impl fmt::Display for Tier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_selection_order() {
        assert_eq!(
            Tier::ALL,
            [Tier::PrimarySecondary, Tier::Undergraduate, Tier::Graduate]
        );
        assert!(Tier::PrimarySecondary < Tier::Undergraduate);
        assert!(Tier::Undergraduate < Tier::Graduate);
    }

    #[test]
    fn test_labels() {
        assert_eq!(Tier::PrimarySecondary.label(), "Primary/Secondary");
        assert_eq!(Tier::Undergraduate.to_string(), "Undergraduate");
        assert_eq!(Tier::Graduate.to_string(), "Graduate");
    }
}
