use crate::domain::entities::client::Client;
use crate::domain::error::DomainError;

pub trait ClientRepository: Send + Sync {
    fn list_clients(&self, active_only: bool) -> Result<Vec<Client>, DomainError>;
}
