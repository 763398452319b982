use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::models::candidate::CANDIDATE_STATUSES;

/// Flat object: `total` plus one key per candidate status.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DashboardCounts {
    pub total: i64,
    #[serde(flatten)]
    pub by_status: BTreeMap<String, i64>,
}

impl DashboardCounts {
    /// Folds grouped `(status, count)` rows; `total` is their sum so the two
    /// can never disagree.
    pub fn from_grouped(rows: impl IntoIterator<Item = (String, i64)>) -> Self {
        let mut by_status: BTreeMap<String, i64> = CANDIDATE_STATUSES
            .iter()
            .map(|s| (s.to_string(), 0))
            .collect();
        for (status, count) in rows {
            *by_status.entry(status).or_insert(0) += count;
        }
        let total = by_status.values().sum();
        Self { total, by_status }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_statuses_are_zero_filled() {
        let counts = DashboardCounts::from_grouped(Vec::new());
        assert_eq!(counts.total, 0);
        assert_eq!(counts.by_status.len(), CANDIDATE_STATUSES.len());
        assert!(counts.by_status.values().all(|v| *v == 0));
    }

    #[test]
    fn total_is_sum_including_unknown_statuses() {
        let counts = DashboardCounts::from_grouped(vec![
            ("Applied".to_string(), 3),
            ("Hired".to_string(), 2),
            ("Legacy".to_string(), 1),
        ]);
        assert_eq!(counts.total, 6);
        assert_eq!(counts.by_status["Legacy"], 1);
        assert_eq!(counts.by_status.values().sum::<i64>(), counts.total);

        let json = serde_json::to_value(&counts).unwrap();
        assert_eq!(json["total"], 6);
        assert_eq!(json["Interview Scheduled"], 0);
        assert_eq!(json["Applied"], 3);
    }
}
