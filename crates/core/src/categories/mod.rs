//! Categories module - category models and the contribution allocator.

mod allocator;
mod categories_defaults;
mod categories_model;

pub use allocator::{allocate, validate_categories, validate_contribution};
pub use categories_defaults::default_categories;
pub use categories_model::{
    is_fully_weighted, total_weight, Category, CategoryAllocation, SubAllocation, SubCategory,
};
