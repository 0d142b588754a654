use bigdecimal::BigDecimal;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

use super::resource::Resource;
use super::validation::{non_negative, not_blank, person_name, phone_number};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Employee {
    #[validate(custom(function = "person_name"))]
    pub name: String,
    #[validate(email)]
    pub email: String,
    #[validate(custom(function = "phone_number"))]
    pub phone: String,
    #[validate(custom(function = "not_blank"))]
    pub position: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[validate(custom(function = "non_negative"))]
    #[schema(value_type = Option<String>)]
    pub salary: Option<BigDecimal>,
}

#[derive(Debug, Default, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct EmployeePatch {
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
    #[validate(custom(function = "not_blank"))]
    pub position: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    #[validate(custom(function = "non_negative"))]
    pub salary: Option<BigDecimal>,
}

impl Resource for Employee {
    const COLLECTION: &'static str = "employees";
    const NAME: &'static str = "Employee";
    type Patch = EmployeePatch;
}
