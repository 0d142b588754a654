//! Line and basket arithmetic shared by bills, gift orders and the cart.

use bigdecimal::{BigDecimal, RoundingMode, Zero};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;
use validator::Validate;

use super::validation::{non_negative, not_blank};

/// An optional add-on of an item, e.g. an extra ingredient.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ItemOption {
    #[validate(custom(function = "not_blank"))]
    pub name: String,
    #[validate(custom(function = "non_negative"))]
    #[schema(value_type = String, example = "1.50")]
    pub price: BigDecimal,
}

/// One purchased line of a bill or order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct PricedLine {
    pub item_id: Uuid,
    #[validate(custom(function = "not_blank"))]
    pub name: String,
    #[validate(custom(function = "non_negative"))]
    #[schema(value_type = String, example = "10.00")]
    pub unit_price: BigDecimal,
    #[validate(range(min = 1))]
    pub quantity: u32,
    #[serde(default)]
    #[validate(nested)]
    pub selected_options: Vec<ItemOption>,
}

impl PricedLine {
    pub fn total(&self) -> BigDecimal {
        line_total(&self.unit_price, &self.selected_options, self.quantity)
    }
}

/// `(base + Σ option prices) × quantity`.
pub fn line_total(base: &BigDecimal, options: &[ItemOption], quantity: u32) -> BigDecimal {
    let unit = options
        .iter()
        .fold(base.clone(), |acc, option| acc + &option.price);
    unit * BigDecimal::from(quantity)
}

pub fn subtotal<'a>(lines: impl IntoIterator<Item = &'a PricedLine>) -> BigDecimal {
    lines
        .into_iter()
        .fold(BigDecimal::zero(), |acc, line| acc + line.total())
}

/// Money columns derived from the lines; missing keys read as zero.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(default, rename_all = "camelCase")]
pub struct Totals {
    #[schema(value_type = String)]
    pub subtotal: BigDecimal,
    #[schema(value_type = String)]
    pub tax: BigDecimal,
    #[schema(value_type = String)]
    pub total: BigDecimal,
}

impl Default for Totals {
    fn default() -> Self {
        Self {
            subtotal: BigDecimal::zero(),
            tax: BigDecimal::zero(),
            total: BigDecimal::zero(),
        }
    }
}

/// A flat tax expressed as a whole percentage of the subtotal.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TaxPolicy {
    rate_percent: u32,
}

impl TaxPolicy {
    pub const BAR: TaxPolicy = TaxPolicy { rate_percent: 5 };
    pub const GIFT_SHOP: TaxPolicy = TaxPolicy { rate_percent: 10 };

    pub const fn new(rate_percent: u32) -> Self {
        Self { rate_percent }
    }

    pub fn rate_percent(&self) -> u32 {
        self.rate_percent
    }

    /// Tax is rounded half-up to cents.
    pub fn totals(&self, subtotal: BigDecimal) -> Totals {
        let tax = (&subtotal * BigDecimal::from(self.rate_percent) / BigDecimal::from(100))
            .with_scale_round(2, RoundingMode::HalfUp);
        let total = &subtotal + &tax;
        Totals {
            subtotal,
            tax,
            total,
        }
    }

    pub fn price_lines<'a>(&self, lines: impl IntoIterator<Item = &'a PricedLine>) -> Totals {
        self.totals(subtotal(lines))
    }
}
