use std::fmt;
use std::str::FromStr;

use bigdecimal::BigDecimal;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

use super::errors::DomainError;
use super::resource::Resource;
use super::validation::{non_negative, not_blank};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub enum RoomStatus {
    #[default]
    Available,
    Reserved,
    Booked,
}

impl RoomStatus {
    pub const ALL: [RoomStatus; 3] = [RoomStatus::Available, RoomStatus::Reserved, RoomStatus::Booked];

    pub fn as_str(&self) -> &'static str {
        match self {
            RoomStatus::Available => "Available",
            RoomStatus::Reserved => "Reserved",
            RoomStatus::Booked => "Booked",
        }
    }
}

impl fmt::Display for RoomStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for RoomStatus {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        RoomStatus::ALL
            .into_iter()
            .find(|status| status.as_str() == s)
            .ok_or_else(|| {
                DomainError::InvalidInput(format!(
                    "status must be one of Available, Reserved, Booked (got '{s}')"
                ))
            })
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Room {
    #[validate(custom(function = "not_blank"))]
    pub room_number: String,
    /// Free-form category such as "Single", "Double" or "VIP"; matched case-sensitively.
    #[validate(custom(function = "not_blank"))]
    pub room_type: String,
    #[validate(custom(function = "non_negative"))]
    #[schema(value_type = String, example = "85.00")]
    pub price: BigDecimal,
    #[validate(range(min = 1))]
    pub capacity: u32,
    #[serde(default)]
    pub description: String,
    /// Path relative to the uploads directory.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
    #[serde(default)]
    pub status: RoomStatus,
}

#[derive(Debug, Default, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct RoomPatch {
    #[serde(skip_serializing_if = "Option::is_none")]
    #[validate(custom(function = "not_blank"))]
    pub room_number: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    #[validate(custom(function = "not_blank"))]
    pub room_type: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    #[validate(custom(function = "non_negative"))]
    pub price: Option<BigDecimal>,
    #[serde(skip_serializing_if = "Option::is_none")]
    #[validate(range(min = 1))]
    pub capacity: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<RoomStatus>,
}

impl Resource for Room {
    const COLLECTION: &'static str = "rooms";
    const NAME: &'static str = "Room";
    type Patch = RoomPatch;

    fn unique_key(&self) -> Option<(&'static str, String)> {
        Some((ROOM_NUMBER_FIELD, self.room_number.clone()))
    }
}

/// JSON keys used for store-side lookups.
pub const ROOM_NUMBER_FIELD: &str = "roomNumber";
pub const ROOM_TYPE_FIELD: &str = "roomType";

#[derive(Debug, Deserialize, ToSchema)]
pub struct RoomStatusUpdate {
    pub status: String,
}
