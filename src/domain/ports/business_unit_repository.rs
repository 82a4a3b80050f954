use crate::domain::entities::business_unit::BusinessUnit;
use crate::domain::error::DomainError;

pub trait BusinessUnitRepository: Send + Sync {
    fn list_business_units(&self, active_only: bool) -> Result<Vec<BusinessUnit>, DomainError>;
}
