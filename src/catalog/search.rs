use serde::Serialize;

use super::{Category, Product};

pub const DEFAULT_PAGE_SIZE: usize = 12;

/// Storefront search: every set criterion must match.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SearchQuery {
    /// Case-insensitive substring of the product name.
    pub term: Option<String>,
    pub category: Option<Category>,
    /// Inclusive price bounds.
    pub price_range: Option<(u64, u64)>,
    pub min_rating: Option<f32>,
}

impl SearchQuery {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn term(mut self, term: impl Into<String>) -> Self {
        self.term = Some(term.into());
        self
    }

    pub fn category(mut self, category: Category) -> Self {
        self.category = Some(category);
        self
    }

    pub fn price_range(mut self, min: u64, max: u64) -> Self {
        self.price_range = Some((min, max));
        self
    }

    pub fn min_rating(mut self, rating: f32) -> Self {
        self.min_rating = Some(rating);
        self
    }

    pub fn matches(&self, product: &Product) -> bool {
        if let Some(term) = self.term.as_deref().filter(|t| !t.is_empty()) {
            if !product
                .name
                .to_lowercase()
                .contains(&term.to_lowercase())
            {
                return false;
            }
        }
        if self.category.is_some_and(|category| product.category != category) {
            return false;
        }
        if let Some((min, max)) = self.price_range {
            if product.price < min || product.price > max {
                return false;
            }
        }
        if self
            .min_rating
            .is_some_and(|rating| rating > 0.0 && product.average_rating < rating)
        {
            return false;
        }
        true
    }
}

/// One page of a result list.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Page<T> {
    pub items: Vec<T>,
    pub total_pages: usize,
    pub current_page: usize,
    pub total_items: usize,
    pub has_next_page: bool,
    pub has_prev_page: bool,
}

/// Slice `items` into 1-based pages of `limit` entries. Page 0 reads as page 1 and a
/// zero limit falls back to [`DEFAULT_PAGE_SIZE`].
pub fn paginate<T: Clone>(items: &[T], page: usize, limit: usize) -> Page<T> {
    let page = page.max(1);
    let limit = if limit == 0 { DEFAULT_PAGE_SIZE } else { limit };
    let start = (page - 1).saturating_mul(limit);
    let end = start.saturating_add(limit);

    let slice: &[T] = if start < items.len() {
        &items[start..end.min(items.len())]
    } else {
        &[]
    };

    Page {
        items: slice.to_vec(),
        total_pages: items.len().div_ceil(limit),
        current_page: page,
        total_items: items.len(),
        has_next_page: end < items.len(),
        has_prev_page: page > 1,
    }
}
