use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::{Validate, ValidationError};

use super::resource::Resource;
use super::validation::{not_blank, person_name, phone_number};

/// A hotel guest and the room they occupy.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
#[validate(schema(function = "stay_period"))]
pub struct Customer {
    #[validate(custom(function = "person_name"))]
    pub name: String,
    #[validate(email)]
    pub email: String,
    #[validate(custom(function = "phone_number"))]
    pub phone: String,
    pub check_in: NaiveDate,
    pub check_out: NaiveDate,
    #[validate(range(min = 1))]
    pub guests: u32,
    #[validate(custom(function = "not_blank"))]
    pub room_type: String,
    #[validate(custom(function = "not_blank"))]
    pub room_number: String,
}

impl Customer {
    /// Whether this stay shares at least one night with `[check_in, check_out)`.
    pub fn overlaps(&self, check_in: NaiveDate, check_out: NaiveDate) -> bool {
        self.check_in < check_out && check_in < self.check_out
    }
}

fn stay_period(customer: &Customer) -> Result<(), ValidationError> {
    if customer.check_out <= customer.check_in {
        return Err(ValidationError::new("stay").with_message("checkOut must be after checkIn".into()));
    }
    Ok(())
}

#[derive(Debug, Default, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CustomerPatch {
    #[serde(skip_serializing_if = "Option::is_none")]
    #[validate(custom(function = "person_name"))]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    #[validate(email)]
    pub email: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    #[validate(custom(function = "phone_number"))]
    pub phone: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub check_in: Option<NaiveDate>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub check_out: Option<NaiveDate>,
    #[serde(skip_serializing_if = "Option::is_none")]
    #[validate(range(min = 1))]
    pub guests: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    #[validate(custom(function = "not_blank"))]
    pub room_type: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    #[validate(custom(function = "not_blank"))]
    pub room_number: Option<String>,
}

impl Resource for Customer {
    const COLLECTION: &'static str = "customers";
    const NAME: &'static str = "Customer";
    type Patch = CustomerPatch;
}
