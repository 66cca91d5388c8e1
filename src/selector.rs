//! Second-lowest Silver rate per rate area

use crate::models::{Plan, RateAreaKey};
use std::collections::HashMap;

/// Ascending distinct rates, one entry per distinct value
fn distinct_ascending(mut rates: Vec<f64>) -> Vec<f64> {
    rates.sort_by(|a, b| a.total_cmp(b));
    rates.dedup();
    rates
}

fn second_lowest(distinct: &[f64]) -> Option<String> {
    distinct.get(1).map(|rate| format!("{:.2}", rate))
}

/// Silver plan rates grouped by rate area, deduplicated and sorted.
#[derive(Debug, Default)]
pub struct PlanCatalog {
    silver_rates: HashMap<RateAreaKey, Vec<f64>>,
}

impl PlanCatalog {
    pub fn new(plans: &[Plan]) -> Self {
        let mut grouped: HashMap<RateAreaKey, Vec<f64>> = HashMap::new();
        for plan in plans.iter().filter(|p| p.is_silver()) {
            grouped.entry(plan.rate_area_key()).or_default().push(plan.rate);
        }

        let silver_rates = grouped
            .into_iter()
            .map(|(key, rates)| (key, distinct_ascending(rates)))
            .collect();
        Self { silver_rates }
    }

    /// Distinct Silver rates of an area in ascending order
    pub fn silver_rates(&self, key: &RateAreaKey) -> &[f64] {
        self.silver_rates.get(key).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Second-lowest distinct Silver rate, formatted to two decimals.
    /// `None` when the area has fewer than two distinct Silver rates.
    pub fn select(&self, key: &RateAreaKey) -> Option<String> {
        second_lowest(self.silver_rates(key))
    }
}

/// Select by scanning the whole plan table.
pub fn select(key: &RateAreaKey, plans: &[Plan]) -> Option<String> {
    let rates = plans
        .iter()
        .filter(|p| p.state == key.state && p.rate_area == key.rate_area && p.is_silver())
        .map(|p| p.rate)
        .collect();
    second_lowest(&distinct_ascending(rates))
}
