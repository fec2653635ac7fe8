//! Proportional split of a contribution across categories.

use std::collections::HashSet;

use log::{debug, warn};
use rust_decimal::Decimal;

use super::categories_model::{total_weight, Category, CategoryAllocation};
use crate::constants::{FULL_WEIGHT, MAX_CONTRIBUTION};
use crate::errors::{Error, Result, ValidationError};

/// Splits `amount` across `categories` as `amount * weight / 100`, keeping
/// category order.
///
/// Weights are not normalized: a total under 100 under-spends the
/// contribution and a total over 100 over-spends it.
pub fn allocate(amount: Decimal, categories: &[Category]) -> Vec<CategoryAllocation> {
    categories
        .iter()
        .map(|category| CategoryAllocation {
            id: category.id.clone(),
            name: category.name.clone(),
            percentage: category.weight_percent,
            amount: amount * category.weight_percent / FULL_WEIGHT,
        })
        .collect()
}

/// Rejects zero or negative contributions and contributions above
/// [`MAX_CONTRIBUTION`].
pub fn validate_contribution(amount: Decimal) -> Result<()> {
    if amount <= Decimal::ZERO {
        return Err(Error::invalid_input(format!(
            "Contribution amount must be positive, got {}",
            amount
        )));
    }
    if amount > MAX_CONTRIBUTION {
        return Err(Error::invalid_input(format!(
            "Contribution amount {} exceeds the maximum of {}",
            amount, MAX_CONTRIBUTION
        )));
    }
    Ok(())
}

/// Checks the structure of a category list.
///
/// An empty list is valid. Weights that do not total 100 are logged and
/// accepted.
pub fn validate_categories(categories: &[Category]) -> Result<()> {
    let mut seen = HashSet::new();

    for category in categories {
        if category.id.trim().is_empty() {
            return Err(ValidationError::MissingField("id".to_string()).into());
        }
        if !seen.insert(category.id.as_str()) {
            return Err(Error::invalid_input(format!(
                "Duplicate category id '{}'",
                category.id
            )));
        }
        if category.weight_percent < Decimal::ZERO || category.weight_percent > FULL_WEIGHT {
            return Err(Error::invalid_input(format!(
                "Category '{}' weight {} is outside 0-100",
                category.id, category.weight_percent
            )));
        }
        for sub in &category.sub_categories {
            if sub.share < Decimal::ZERO || sub.share > Decimal::ONE {
                return Err(Error::invalid_input(format!(
                    "Sub-category '{}' of '{}' has share {} outside 0-1",
                    sub.id, category.id, sub.share
                )));
            }
        }
    }

    let total = total_weight(categories);
    if !categories.is_empty() && total != FULL_WEIGHT {
        warn!(
            "Category weights total {}% instead of 100%; allocating proportionally anyway",
            total
        );
    } else {
        debug!("Validated {} categories", categories.len());
    }

    Ok(())
}
