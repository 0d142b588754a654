use chrono::NaiveDate;
use serde::Deserialize;
use utoipa::IntoParams;

use super::customer::Customer;
use super::errors::DomainError;
use super::resource::Record;
use super::room::{Room, RoomStatus};

/// Dates, party size and optional room type picked by a guest.
#[derive(Debug, Clone, Deserialize, IntoParams)]
#[serde(rename_all = "camelCase")]
#[into_params(parameter_in = Query)]
pub struct AvailabilityQuery {
    pub check_in: NaiveDate,
    pub check_out: NaiveDate,
    #[serde(default = "default_guests")]
    pub guests: u32,
    pub room_type: Option<String>,
}

fn default_guests() -> u32 {
    1
}

impl AvailabilityQuery {
    pub fn check(&self, today: NaiveDate) -> Result<(), DomainError> {
        if self.check_in < today {
            return Err(DomainError::InvalidInput(
                "checkIn must not be in the past".to_string(),
            ));
        }
        if self.check_out <= self.check_in {
            return Err(DomainError::InvalidInput(
                "checkOut must be after checkIn".to_string(),
            ));
        }
        Ok(())
    }

    fn admits(&self, room: &Room, bookings: &[Record<Customer>]) -> bool {
        room.status == RoomStatus::Available
            && room.capacity >= self.guests
            && self
                .room_type
                .as_deref()
                .is_none_or(|wanted| room.room_type == wanted)
            && !bookings.iter().any(|b| {
                b.data.room_number == room.room_number && b.data.overlaps(self.check_in, self.check_out)
            })
    }
}

/// Rooms that can host the query's stay, in the order given.
pub fn available_rooms<'a>(
    rooms: &'a [Record<Room>],
    bookings: &[Record<Customer>],
    query: &AvailabilityQuery,
    today: NaiveDate,
) -> Result<Vec<&'a Record<Room>>, DomainError> {
    query.check(today)?;
    Ok(rooms
        .iter()
        .filter(|room| query.admits(&room.data, bookings))
        .collect())
}

/// Case-sensitive equality filter on the room type.
pub fn rooms_of_type<'a>(rooms: &'a [Record<Room>], room_type: &str) -> Vec<&'a Record<Room>> {
    rooms
        .iter()
        .filter(|room| room.data.room_type == room_type)
        .collect()
}
