use crate::domain::entities::service::Service;
use crate::domain::error::DomainError;

pub trait ServiceRepository: Send + Sync {
    fn list_services(&self, active_only: bool) -> Result<Vec<Service>, DomainError>;
}
