use bigdecimal::BigDecimal;
use serde::{Deserialize, Serialize};
use validator::Validate;

use super::pricing::{ItemOption, PricedLine, TaxPolicy, Totals};
use super::resource::Resource;
use super::validation::{non_negative, not_blank};

/// A drink or bar snack with its optional add-ons.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct BarItem {
    #[validate(custom(function = "not_blank"))]
    pub name: String,
    #[validate(custom(function = "not_blank"))]
    pub category: String,
    #[validate(custom(function = "non_negative"))]
    pub price: BigDecimal,
    #[serde(default)]
    pub description: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
    #[serde(default)]
    #[validate(nested)]
    pub options: Vec<ItemOption>,
}

#[derive(Debug, Default, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct BarItemPatch {
    #[serde(skip_serializing_if = "Option::is_none")]
    #[validate(custom(function = "not_blank"))]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    #[validate(custom(function = "not_blank"))]
    pub category: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    #[validate(custom(function = "non_negative"))]
    pub price: Option<BigDecimal>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    #[validate(nested)]
    pub options: Option<Vec<ItemOption>>,
}

impl Resource for BarItem {
    const COLLECTION: &'static str = "bar_items";
    const NAME: &'static str = "Item";
    type Patch = BarItemPatch;
}

/// A settled bar tab. Totals are always recomputed from the lines.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct Bill {
    #[validate(length(min = 1, message = "a bill needs at least one line"), nested)]
    pub lines: Vec<PricedLine>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub payment_method: Option<String>,
    #[serde(flatten)]
    pub totals: Totals,
}

#[derive(Debug, Default, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct BillPatch {
    #[serde(skip_serializing_if = "Option::is_none")]
    #[validate(length(min = 1), nested)]
    pub lines: Option<Vec<PricedLine>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub payment_method: Option<String>,
}

impl Resource for Bill {
    const COLLECTION: &'static str = "bills";
    const NAME: &'static str = "Bill";
    type Patch = BillPatch;

    fn normalize(&mut self) {
        self.totals = TaxPolicy::BAR.price_lines(&self.lines);
    }
}
