//! Mock data for the dashboard shell.

use serde::{Deserialize, Serialize};

/// Direction of a stat card's change since last period.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Trend {
    Up,
    Down,
    Flat,
}

/// A single stat card.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DashboardCard {
    pub label: String,
    pub value: String,
    /// Human-readable change, e.g. "+12%"
    pub change: String,
    pub trend: Trend,
}

/// An entry in the recent activity list.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ActivityItem {
    pub actor: String,
    pub action: String,
    pub when: String,
}

/// Everything the dashboard page renders.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DashboardSummary {
    pub cards: Vec<DashboardCard>,
    pub activity: Vec<ActivityItem>,
}

fn card(label: &str, value: &str, change: &str, trend: Trend) -> DashboardCard {
    DashboardCard {
        label: label.to_string(),
        value: value.to_string(),
        change: change.to_string(),
        trend,
    }
}

fn activity(actor: &str, action: &str, when: &str) -> ActivityItem {
    ActivityItem {
        actor: actor.to_string(),
        action: action.to_string(),
        when: when.to_string(),
    }
}

/// Fixed placeholder figures.
pub fn mock_summary() -> DashboardSummary {
    DashboardSummary {
        cards: vec![
            card("Members", "1,284", "+12%", Trend::Up),
            card("Active Mentorships", "86", "+4%", Trend::Up),
            card("Workshops This Month", "9", "0%", Trend::Flat),
            card("Open Projects", "14", "-2", Trend::Down),
        ],
        activity: vec![
            activity("Priya Raman", "published the October workshop schedule", "2 hours ago"),
            activity("Jonas Lindqvist", "matched 6 new mentorship pairs", "yesterday"),
            activity("Mateo García", "opened a project with Harbor Food Bank", "3 days ago"),
            activity("Amara Okafor", "added Tech for Schools as a partner", "last week"),
        ],
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mock_summary_shape() {
        let summary = mock_summary();
        assert_eq!(summary.cards.len(), 4);
        assert!(!summary.activity.is_empty());
        assert!(summary.cards.iter().all(|c| !c.label.is_empty()));
    }

    #[test]
    fn test_trend_serializes_snake_case() {
        let json = serde_json::to_string(&Trend::Up).unwrap();
        assert_eq!(json, "\"up\"");
    }
}
