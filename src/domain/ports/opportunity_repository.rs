use crate::domain::entities::opportunity::Opportunity;
use crate::domain::error::DomainError;

pub trait OpportunityRepository: Send + Sync {
    fn list_opportunities(&self) -> Result<Vec<Opportunity>, DomainError>;
}
