// ABOUTME: Portfolio aggregates for the overview and analytics pages
// ABOUTME: Satisfaction averages, vote and feedback totals, status distribution

use producthub_core::{Product, ProductStatus, SatisfactionTier};
use serde::Serialize;
use strum::IntoEnumIterator;

use crate::satisfaction::compute_satisfaction;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StatusCount {
    pub status: ProductStatus,
    pub count: usize,
}

/// One bar of the per-product satisfaction chart
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SatisfactionEntry {
    pub id: String,
    pub name: String,
    pub satisfaction: u8,
    pub tier: SatisfactionTier,
    pub upvotes: u32,
    pub downvotes: u32,
    pub feedback_count: usize,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PortfolioSummary {
    pub total_products: usize,
    /// Mean of per-product satisfaction, rounded
    pub overall_satisfaction: u8,
    pub total_upvotes: u64,
    pub total_downvotes: u64,
    pub total_feedback: usize,
    /// Upvotes plus feedback entries
    pub engagement: u64,
    /// One entry per status, zero counts included
    pub status_distribution: Vec<StatusCount>,
}

impl PortfolioSummary {
    pub fn from_products(products: &[Product]) -> Self {
        let total_products = products.len();
        let total_upvotes: u64 = products.iter().map(|p| u64::from(p.upvotes)).sum();
        let total_downvotes: u64 = products.iter().map(|p| u64::from(p.downvotes)).sum();
        let total_feedback: usize = products.iter().map(|p| p.feedback.len()).sum();

        let satisfaction_sum: u64 = products
            .iter()
            .map(|p| u64::from(compute_satisfaction(p)))
            .sum();
        let overall_satisfaction = if total_products == 0 {
            0
        } else {
            let n = total_products as u64;
            u8::try_from((satisfaction_sum * 2 + n) / (2 * n)).unwrap_or(100)
        };

        let status_distribution = ProductStatus::iter()
            .map(|status| StatusCount {
                status,
                count: products.iter().filter(|p| p.status == status).count(),
            })
            .collect();

        PortfolioSummary {
            total_products,
            overall_satisfaction,
            total_upvotes,
            total_downvotes,
            total_feedback,
            engagement: total_upvotes + total_feedback as u64,
            status_distribution,
        }
    }

    pub fn count_for(&self, status: ProductStatus) -> usize {
        self.status_distribution
            .iter()
            .find(|entry| entry.status == status)
            .map_or(0, |entry| entry.count)
    }
}

/// Per-product satisfaction in collection order
pub fn satisfaction_breakdown(products: &[Product]) -> Vec<SatisfactionEntry> {
    products
        .iter()
        .map(|p| {
            let satisfaction = compute_satisfaction(p);
            SatisfactionEntry {
                id: p.id.clone(),
                name: p.name.clone(),
                satisfaction,
                tier: SatisfactionTier::from_percent(satisfaction),
                upvotes: p.upvotes,
                downvotes: p.downvotes,
                feedback_count: p.feedback.len(),
            }
        })
        .collect()
}

/// Per-product satisfaction, best first; ties keep collection order
pub fn ranked_by_satisfaction(products: &[Product]) -> Vec<SatisfactionEntry> {
    let mut entries = satisfaction_breakdown(products);
    entries.sort_by(|a, b| b.satisfaction.cmp(&a.satisfaction));
    entries
}
