use uuid::Uuid;

use crate::domain::errors::DomainError;
use crate::domain::leave::{Approval, Leave};
use crate::domain::ports::SharedStore;
use crate::domain::resource::Acknowledgement;

use super::resource_service::ResourceService;

pub struct LeaveService {
    leaves: ResourceService<Leave>,
}

impl LeaveService {
    pub fn new(store: SharedStore) -> Self {
        Self {
            leaves: ResourceService::new(store),
        }
    }

    /// Records the manager decision. `approval` must name an [`Approval`] variant.
    pub fn set_approval(&self, id: Uuid, approval: &str) -> Result<Acknowledgement, DomainError> {
        let approval: Approval = approval.parse()?;
        self.leaves
            .modify_with(id, |leave| leave.approval = approval)?
            .ok_or_else(|| DomainError::NotFound("Leave".to_string()))?;
        log::info!("Leave {} approval set to {}", id, approval);
        Ok(Acknowledgement::new(id, format!("Leave approval set to {approval}")))
    }
}
