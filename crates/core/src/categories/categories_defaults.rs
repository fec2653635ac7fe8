use rust_decimal_macros::dec;

use super::categories_model::{Category, SubCategory};
use crate::constants::{GOLD_CATEGORY_ID, STOCK_CATEGORY_ID};

/// The stock category set offered to a new user.
pub fn default_categories() -> Vec<Category> {
    vec![
        Category::new(STOCK_CATEGORY_ID, "Quỹ cổ phiếu", dec!(25)).with_sub_categories(vec![
            SubCategory::new("vesaf", "VESAF", dec!(0.5)),
            SubCategory::new("ssisca", "SSISCA", dec!(0.5)),
        ]),
        Category::new("bonds", "Quỹ trái phiếu", dec!(15))
            .with_sub_categories(vec![SubCategory::new("vcbf-fif", "VCBF-FIF", dec!(1))]),
        Category::new(GOLD_CATEGORY_ID, "Vàng", dec!(35)),
        Category::new("savings", "Tiết kiệm", dec!(20)),
        Category::new("bitcoin", "Bitcoin", dec!(5)),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::categories::{is_fully_weighted, validate_categories};

    #[test]
    fn test_default_categories_are_valid_and_complete() {
        let categories = default_categories();
        assert!(validate_categories(&categories).is_ok());
        assert!(is_fully_weighted(&categories));
    }

    #[test]
    fn test_default_categories_include_both_funds() {
        let categories = default_categories();
        assert!(categories.iter().any(|c| c.id == GOLD_CATEGORY_ID));
        assert!(categories.iter().any(|c| c.id == STOCK_CATEGORY_ID));
    }
}
