// File: attire-core/src/services/shop.rs
//
// Shop page filtering. The pipeline always runs over the full catalog in a
// fixed order: text search, then region, then category, then price. Nothing
// is incremental; any input change recomputes the whole result.

use attire_common::models::{ClothingCategory, ClothingItem, Region};

pub const DEFAULT_PRICE_MIN: f64 = 0.0;
pub const DEFAULT_PRICE_MAX: f64 = 500.0;

#[derive(Debug, Clone)]
pub struct ShopFilter {
    /// Case-insensitive substring match over name, description and origin.
    pub search: Option<String>,
    pub region: Option<Region>,
    pub category: Option<ClothingCategory>,
    /// Inclusive price bounds.
    pub price_min: f64,
    pub price_max: f64,
}

impl Default for ShopFilter {
    fn default() -> Self {
        Self {
            search: None,
            region: None,
            category: None,
            price_min: DEFAULT_PRICE_MIN,
            price_max: DEFAULT_PRICE_MAX,
        }
    }
}

impl ShopFilter {
    /// Filter seeded from a `region` query parameter, as when the shop page
    /// is entered through a region link.
    pub fn for_region(region: Region) -> Self {
        Self {
            region: Some(region),
            ..Self::default()
        }
    }

    pub fn is_unconstrained(&self) -> bool {
        self.search.is_none()
            && self.region.is_none()
            && self.category.is_none()
            && self.price_min <= DEFAULT_PRICE_MIN
            && self.price_max >= DEFAULT_PRICE_MAX
    }

    pub fn apply<'a>(&self, items: &'a [ClothingItem]) -> Vec<&'a ClothingItem> {
        let needle = self
            .search
            .as_deref()
            .map(|s| s.to_lowercase())
            .filter(|s| !s.is_empty());

        items
            .iter()
            .filter(|item| match &needle {
                Some(needle) => {
                    item.name.to_lowercase().contains(needle)
                        || item.description.to_lowercase().contains(needle)
                        || item.origin.as_str().to_lowercase().contains(needle)
                }
                None => true,
            })
            .filter(|item| self.region.is_none_or(|r| item.origin == r))
            .filter(|item| self.category.is_none_or(|c| item.category == c))
            .filter(|item| item.price >= self.price_min && item.price <= self.price_max)
            .collect()
    }
}
