use bigdecimal::BigDecimal;
use serde::Deserialize;

use crate::domain::bar::BarItem;
use crate::domain::gift::Gift;

/// What a catalog listing exposes to filtering.
pub trait Listed {
    fn name(&self) -> &str;
    fn category(&self) -> &str;
    fn price(&self) -> &BigDecimal;
}

impl Listed for BarItem {
    fn name(&self) -> &str {
        &self.name
    }

    fn category(&self) -> &str {
        &self.category
    }

    fn price(&self) -> &BigDecimal {
        &self.price
    }
}

impl Listed for Gift {
    fn name(&self) -> &str {
        &self.name
    }

    fn category(&self) -> &str {
        &self.category
    }

    fn price(&self) -> &BigDecimal {
        &self.price
    }
}

/// Search box, category tab and price range of a shop page.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct CatalogFilter {
    /// Case-insensitive substring of the name.
    pub search: Option<String>,
    pub category: Option<String>,
    pub min_price: Option<BigDecimal>,
    pub max_price: Option<BigDecimal>,
}

impl CatalogFilter {
    pub fn matches<L: Listed + ?Sized>(&self, item: &L) -> bool {
        if let Some(search) = self.search.as_deref().map(str::trim) {
            if !search.is_empty()
                && !item.name().to_lowercase().contains(&search.to_lowercase())
            {
                return false;
            }
        }
        if let Some(category) = &self.category {
            if item.category() != category {
                return false;
            }
        }
        if self.min_price.as_ref().is_some_and(|min| item.price() < min) {
            return false;
        }
        if self.max_price.as_ref().is_some_and(|max| item.price() > max) {
            return false;
        }
        true
    }

    pub fn apply<'a, L: Listed>(&self, items: impl IntoIterator<Item = &'a L>) -> Vec<&'a L>
    where
        L: 'a,
    {
        items.into_iter().filter(|item| self.matches(*item)).collect()
    }
}
