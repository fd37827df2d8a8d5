use serde::{Deserialize, Serialize};

use super::actions::{Action, AnalyticsAction};
use crate::domain::SpendingInsights;

/// Analytics slice: derived spending insights. Never persisted - the data
/// is cheap to refetch and goes stale immediately.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AnalyticsState {
    pub insights: Option<SpendingInsights>,
    pub is_loading: bool,
    pub error: Option<String>,
}

pub fn reduce(state: &AnalyticsState, action: &Action) -> AnalyticsState {
    let Action::Analytics(action) = action else {
        return state.clone();
    };

    match action {
        AnalyticsAction::FetchStart => AnalyticsState {
            insights: state.insights.clone(),
            is_loading: true,
            error: None,
        },
        AnalyticsAction::FetchSuccess(insights) => AnalyticsState {
            insights: Some(insights.clone()),
            is_loading: false,
            error: None,
        },
        AnalyticsAction::FetchFailure(error) => AnalyticsState {
            insights: state.insights.clone(),
            is_loading: false,
            error: Some(error.clone()),
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::BTreeMap;

    fn insights() -> SpendingInsights {
        SpendingInsights {
            total_spending: 12500.0,
            daily_average: 416.6,
            transaction_count: 42,
            category_breakdown: BTreeMap::from([
                ("dining".to_string(), 4200.0),
                ("travel".to_string(), 8300.0),
            ]),
            top_merchants: vec![],
            monthly: vec![],
            spending_trend: 1.2,
        }
    }

    #[test]
    fn test_fetch_lifecycle() {
        let mut state = AnalyticsState::default();

        state = reduce(&state, &Action::Analytics(AnalyticsAction::FetchStart));
        assert!(state.is_loading);

        state = reduce(
            &state,
            &Action::Analytics(AnalyticsAction::FetchSuccess(insights())),
        );
        assert!(!state.is_loading);
        assert_eq!(state.error, None);
        assert_eq!(state.insights, Some(insights()));

        state = reduce(
            &state,
            &Action::Analytics(AnalyticsAction::FetchFailure("timeout".to_string())),
        );
        assert_eq!(state.error, Some("timeout".to_string()));
        assert_eq!(state.insights, Some(insights()));
    }
}
