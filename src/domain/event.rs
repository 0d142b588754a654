use bigdecimal::BigDecimal;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use validator::Validate;

use super::resource::Resource;
use super::validation::{non_negative, not_blank, person_name, phone_number};

/// A function hosted at the hotel: wedding, conference, party.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct Event {
    #[validate(custom(function = "not_blank"))]
    pub name: String,
    #[validate(custom(function = "not_blank"))]
    pub event_type: String,
    pub date: NaiveDate,
    #[validate(custom(function = "not_blank"))]
    pub venue: String,
    #[validate(range(min = 1))]
    pub guests: u32,
    #[serde(default)]
    pub description: String,
    /// Identifier of the assigned event planner, if any.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub planner_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[validate(custom(function = "non_negative"))]
    pub budget: Option<BigDecimal>,
}

#[derive(Debug, Default, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct EventPatch {
    #[serde(skip_serializing_if = "Option::is_none")]
    #[validate(custom(function = "not_blank"))]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    #[validate(custom(function = "not_blank"))]
    pub event_type: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub date: Option<NaiveDate>,
    #[serde(skip_serializing_if = "Option::is_none")]
    #[validate(custom(function = "not_blank"))]
    pub venue: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    #[validate(range(min = 1))]
    pub guests: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub planner_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    #[validate(custom(function = "non_negative"))]
    pub budget: Option<BigDecimal>,
}

impl Resource for Event {
    const COLLECTION: &'static str = "events";
    const NAME: &'static str = "Event";
    type Patch = EventPatch;
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct EventPlanner {
    #[validate(custom(function = "person_name"))]
    pub name: String,
    #[validate(email)]
    pub email: String,
    #[validate(custom(function = "phone_number"))]
    pub phone: String,
    #[validate(custom(function = "not_blank"))]
    pub specialization: String,
    #[serde(default)]
    pub experience_years: u32,
}

#[derive(Debug, Default, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct EventPlannerPatch {
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
    pub specialization: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub experience_years: Option<u32>,
}

impl Resource for EventPlanner {
    const COLLECTION: &'static str = "event_planners";
    const NAME: &'static str = "Event planner";
    type Patch = EventPlannerPatch;
}
