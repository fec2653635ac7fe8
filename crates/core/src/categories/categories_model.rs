//! Category domain models.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::constants::FULL_WEIGHT;

/// A portfolio category that receives a share of each contribution.
///
/// Categories are supplied by the caller on every run; the engine never
/// stores them.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Category {
    pub id: String,
    pub name: String,
    /// Share of the contribution in percent (0-100).
    #[serde(alias = "percentage")]
    pub weight_percent: Decimal,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub sub_categories: Vec<SubCategory>,
}

impl Category {
    pub fn new(id: impl Into<String>, name: impl Into<String>, weight_percent: Decimal) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            weight_percent,
            sub_categories: Vec::new(),
        }
    }

    pub fn with_sub_categories(mut self, sub_categories: Vec<SubCategory>) -> Self {
        self.sub_categories = sub_categories;
        self
    }
}

/// A fund inside a category, holding a fraction (0-1) of the category amount.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct SubCategory {
    pub id: String,
    pub name: String,
    pub share: Decimal,
}

impl SubCategory {
    pub fn new(id: impl Into<String>, name: impl Into<String>, share: Decimal) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            share,
        }
    }
}

/// Amount attributed to a category in one proposal.
///
/// Starts as the proportional split and is then adjusted by the settlement
/// protocol for the gold and stock entries.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct CategoryAllocation {
    pub id: String,
    pub name: String,
    pub percentage: Decimal,
    pub amount: Decimal,
}

/// Breakdown of a category allocation into its sub-categories.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct SubAllocation {
    pub id: String,
    pub name: String,
    pub share: Decimal,
    /// Effective percentage of the whole contribution.
    pub percentage: Decimal,
    pub amount: Decimal,
}

impl CategoryAllocation {
    /// Splits this allocation across the sub-categories of `category`.
    ///
    /// Returns an empty list when the category has no sub-categories.
    pub fn sub_allocations(&self, category: &Category) -> Vec<SubAllocation> {
        category
            .sub_categories
            .iter()
            .map(|sub| SubAllocation {
                id: sub.id.clone(),
                name: sub.name.clone(),
                share: sub.share,
                percentage: self.percentage * sub.share,
                amount: self.amount * sub.share,
            })
            .collect()
    }
}

/// Sum of all category weights. Not required to equal 100.
pub fn total_weight(categories: &[Category]) -> Decimal {
    categories.iter().map(|c| c.weight_percent).sum()
}

/// Whether the weights cover exactly the whole contribution.
pub fn is_fully_weighted(categories: &[Category]) -> bool {
    total_weight(categories) == FULL_WEIGHT
}
