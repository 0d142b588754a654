use serde::{Deserialize, Serialize};
use validator::Validate;

use super::pricing::{PricedLine, TaxPolicy, Totals};
use super::resource::Resource;
use super::validation::{not_blank, person_name};

/// A gift shop checkout.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct GiftOrder {
    #[validate(custom(function = "person_name"))]
    pub customer_name: String,
    #[validate(email)]
    pub email: String,
    #[validate(custom(function = "not_blank"))]
    pub address: String,
    #[validate(length(min = 1, message = "an order needs at least one line"), nested)]
    pub lines: Vec<PricedLine>,
    #[serde(flatten)]
    pub totals: Totals,
}

#[derive(Debug, Default, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct GiftOrderPatch {
    #[serde(skip_serializing_if = "Option::is_none")]
    #[validate(custom(function = "person_name"))]
    pub customer_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    #[validate(email)]
    pub email: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    #[validate(custom(function = "not_blank"))]
    pub address: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    #[validate(length(min = 1), nested)]
    pub lines: Option<Vec<PricedLine>>,
}

impl Resource for GiftOrder {
    const COLLECTION: &'static str = "gift_orders";
    const NAME: &'static str = "Order";
    type Patch = GiftOrderPatch;

    fn normalize(&mut self) {
        self.totals = TaxPolicy::GIFT_SHOP.price_lines(&self.lines);
    }
}
