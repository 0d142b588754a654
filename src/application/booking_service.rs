use chrono::NaiveDate;

use crate::domain::customer::Customer;
use crate::domain::errors::DomainError;
use crate::domain::ports::SharedStore;
use crate::domain::resource::Record;
use crate::domain::room::RoomStatus;

use super::resource_service::ResourceService;
use super::room_service::RoomService;

/// Books a room for a new customer as one server-side operation.
///
/// The room is claimed (Available to Booked) first; if the customer cannot
/// be stored afterwards, the claim is released again.
pub struct BookingService {
    rooms: RoomService,
    customers: ResourceService<Customer>,
}

impl BookingService {
    pub fn new(store: SharedStore) -> Self {
        Self {
            rooms: RoomService::new(store.clone()),
            customers: ResourceService::new(store),
        }
    }

    pub fn book(&self, customer: Customer, today: NaiveDate) -> Result<Record<Customer>, DomainError> {
        if customer.check_in < today {
            return Err(DomainError::InvalidInput(
                "checkIn must not be in the past".to_string(),
            ));
        }
        validator::Validate::validate(&customer)?;

        let room_number = customer.room_number.clone();
        let claimed = self.rooms.claim(&room_number)?;

        match self.customers.create(customer) {
            Ok(created) => {
                log::info!("Customer {} booked room {}", created.id, room_number);
                Ok(created)
            }
            Err(e) => {
                log::warn!(
                    "Booking of room {} failed ({}), releasing it",
                    room_number,
                    e
                );
                match self.rooms.release(claimed.id, RoomStatus::Available) {
                    Ok(true) => {}
                    Ok(false) => log::warn!(
                        "Room {} changed status during the failed booking, left as is",
                        room_number
                    ),
                    Err(undo) => log::error!(
                        "Room {} left Booked without a customer: {}",
                        room_number,
                        undo
                    ),
                }
                Err(e)
            }
        }
    }
}
