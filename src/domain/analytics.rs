use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Spending insight payload as produced by the analytics backend.
/// Derived data: never persisted locally, always refetched.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SpendingInsights {
    pub total_spending: f64,
    pub daily_average: f64,
    pub transaction_count: u32,
    /// Spend per category, stable iteration order for display
    pub category_breakdown: BTreeMap<String, f64>,
    /// Top merchants by spend, descending
    pub top_merchants: Vec<MerchantSpending>,
    /// Month buckets, oldest first
    pub monthly: Vec<MonthlySpending>,
    /// Slope of the recent monthly spend series; positive means rising
    pub spending_trend: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MerchantSpending {
    pub merchant: String,
    pub amount: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MonthlySpending {
    /// "YYYY-MM"
    pub month: String,
    pub spending: f64,
    pub transaction_count: u32,
}
