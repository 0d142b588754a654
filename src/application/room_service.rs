use chrono::NaiveDate;
use uuid::Uuid;

use crate::domain::availability::{available_rooms, AvailabilityQuery};
use crate::domain::customer::Customer;
use crate::domain::errors::DomainError;
use crate::domain::ports::SharedStore;
use crate::domain::resource::{Acknowledgement, Record};
use crate::domain::room::{Room, RoomStatus, ROOM_NUMBER_FIELD, ROOM_TYPE_FIELD};

use super::resource_service::ResourceService;

pub struct RoomService {
    rooms: ResourceService<Room>,
    customers: ResourceService<Customer>,
}

impl RoomService {
    pub fn new(store: SharedStore) -> Self {
        Self {
            rooms: ResourceService::new(store.clone()),
            customers: ResourceService::new(store),
        }
    }

    pub fn by_number(&self, room_number: &str) -> Result<Option<Record<Room>>, DomainError> {
        Ok(self
            .rooms
            .find_by(ROOM_NUMBER_FIELD, room_number)?
            .into_iter()
            .next())
    }

    pub fn by_type(&self, room_type: &str) -> Result<Vec<Record<Room>>, DomainError> {
        self.rooms.find_by(ROOM_TYPE_FIELD, room_type)
    }

    /// Sets the status of the room with `room_number`, returning the record as it was before.
    pub fn set_status(
        &self,
        room_number: &str,
        status: RoomStatus,
    ) -> Result<Record<Room>, DomainError> {
        let room = self
            .by_number(room_number)?
            .ok_or_else(|| DomainError::NotFound(format!("Room {room_number}")))?;
        self.rooms
            .modify_with(room.id, |r| r.status = status)?
            .ok_or_else(|| DomainError::NotFound(format!("Room {room_number}")))?;
        log::info!(
            "Room {} status {} -> {}",
            room_number,
            room.data.status,
            status
        );
        Ok(room)
    }

    /// Marks an Available room Booked. The availability check and the write
    /// are one store mutation, so two claims on the same room cannot both win.
    pub fn claim(&self, room_number: &str) -> Result<Record<Room>, DomainError> {
        let room = self
            .by_number(room_number)?
            .ok_or_else(|| DomainError::NotFound(format!("Room {room_number}")))?;
        let claimed = self
            .rooms
            .try_modify_with(room.id, |r| {
                if r.status != RoomStatus::Available {
                    return Err(DomainError::Conflict(format!(
                        "room {room_number} is {}",
                        r.status
                    )));
                }
                r.status = RoomStatus::Booked;
                Ok(())
            })?
            .ok_or_else(|| DomainError::NotFound(format!("Room {room_number}")))?;
        log::info!("Room {} claimed for booking", room_number);
        Ok(claimed)
    }

    /// Undoes [`claim`](Self::claim): puts `status` back, but only while the
    /// room is still Booked. Returns whether anything changed.
    pub fn release(&self, room_id: Uuid, status: RoomStatus) -> Result<bool, DomainError> {
        let mut restored = false;
        self.rooms.modify_with(room_id, |r| {
            if r.status == RoomStatus::Booked {
                r.status = status;
                restored = true;
            }
        })?;
        Ok(restored)
    }

    pub fn update_status(
        &self,
        room_number: &str,
        status: RoomStatus,
    ) -> Result<Acknowledgement, DomainError> {
        let previous = self.set_status(room_number, status)?;
        Ok(Acknowledgement::new(
            previous.id,
            format!("Room status updated to {status}"),
        ))
    }

    pub fn available(
        &self,
        query: &AvailabilityQuery,
        today: NaiveDate,
    ) -> Result<Vec<Record<Room>>, DomainError> {
        let rooms = self.rooms.list()?;
        let bookings = self.customers.list()?;
        Ok(available_rooms(&rooms, &bookings, query, today)?
            .into_iter()
            .cloned()
            .collect())
    }
}
