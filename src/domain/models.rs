use serde::{Deserialize, Serialize};

/// One historical match from the results feed.
///
/// `sequence_index` preserves the feed's row order, which the feed publishes
/// chronologically. The rating engine trusts that order; there is no date
/// field to re-sort by.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MatchRecord {
    pub home_team: String,
    pub away_team: String,
    pub home_goals: u32,
    pub away_goals: u32,
    pub sequence_index: usize,
}

impl MatchRecord {
    /// Home goals with the blowout cap applied.
    ///
    /// A 5-0 does not mean a team is five times stronger; past the cap the
    /// opponent has usually stopped competing, so extra goals carry no
    /// rating signal.
    pub fn adjusted_home_goals(&self, cap: f64) -> f64 {
        (self.home_goals as f64).min(cap)
    }

    /// Away goals with the blowout cap applied.
    pub fn adjusted_away_goals(&self, cap: f64) -> f64 {
        (self.away_goals as f64).min(cap)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(home_goals: u32, away_goals: u32) -> MatchRecord {
        MatchRecord {
            home_team: "Lille".to_string(),
            away_team: "Brest".to_string(),
            home_goals,
            away_goals,
            sequence_index: 0,
        }
    }

    #[test]
    fn goal_cap_applies_above_threshold() {
        assert_eq!(record(5, 0).adjusted_home_goals(3.5), 3.5);
        assert_eq!(record(4, 0).adjusted_home_goals(3.5), 3.5);
        assert_eq!(record(3, 0).adjusted_home_goals(3.5), 3.0);
        assert_eq!(record(0, 6).adjusted_away_goals(3.5), 3.5);
    }
}
