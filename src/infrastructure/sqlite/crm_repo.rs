use crate::domain::entities::business_unit::BusinessUnit;
use crate::domain::entities::client::Client;
use crate::domain::entities::opportunity::Opportunity;
use crate::domain::entities::service::Service;
use crate::domain::error::DomainError;
use crate::domain::ports::business_unit_repository::BusinessUnitRepository;
use crate::domain::ports::client_repository::ClientRepository;
use crate::domain::ports::opportunity_repository::OpportunityRepository;
use crate::domain::ports::service_repository::ServiceRepository;
use crate::infrastructure::dataset::{CrmDataset, ImportCounts};
use crate::infrastructure::sqlite::migrations::run_migrations;
use chrono::{DateTime, Utc};
use rusqlite::types::Type;
use rusqlite::{params, Connection, Row};
use std::sync::{Mutex, MutexGuard};

const CLIENT_COLS: &str = "id, name, industry, region, primary_business_unit_id, annual_revenue, active, created_at, updated_at";
const BUSINESS_UNIT_COLS: &str = "id, name, description, active, created_at, updated_at";
const SERVICE_COLS: &str = "id, name, category, description, business_unit_id, active, created_at, updated_at";
const OPPORTUNITY_COLS: &str = "id, client_id, service_id, title, created_at, updated_at";

/// Read side of the CRM tables, plus a bulk loader for datasets.
pub struct SqliteCrmRepo {
    conn: Mutex<Connection>,
}

impl SqliteCrmRepo {
    pub fn new(conn: Connection) -> Self {
        Self {
            conn: Mutex::new(conn),
        }
    }

    /// Open (or create) a database file and run migrations. `:memory:` works too.
    pub fn open(db_path: &str) -> Result<Self, DomainError> {
        let conn = Connection::open(db_path)
            .map_err(|e| DomainError::Database(format!("DB error: {e}")))?;
        conn.pragma_update(None, "journal_mode", "WAL")
            .map_err(|e| DomainError::Database(format!("WAL error: {e}")))?;
        run_migrations(&conn)?;
        Ok(Self::new(conn))
    }

    fn lock(&self) -> Result<MutexGuard<'_, Connection>, DomainError> {
        self.conn
            .lock()
            .map_err(|e| DomainError::Database(e.to_string()))
    }

    /// Insert or replace every record of the dataset in one transaction.
    pub fn import(&self, dataset: &CrmDataset) -> Result<ImportCounts, DomainError> {
        let mut conn = self.lock()?;
        let tx = conn
            .transaction()
            .map_err(|e| DomainError::Database(format!("Failed to begin import: {e}")))?;

        for bu in &dataset.business_units {
            tx.execute(
                "INSERT OR REPLACE INTO business_units (id, name, description, active, created_at, updated_at)
                 VALUES (?1, ?2, ?3, ?4, ?5, ?6)",
                params![
                    bu.id,
                    bu.name,
                    bu.description,
                    bu.active,
                    bu.created_at.to_rfc3339(),
                    bu.updated_at.to_rfc3339(),
                ],
            )
            .map_err(|e| DomainError::Database(format!("Failed to import business unit {}: {e}", bu.id)))?;
        }

        for client in &dataset.clients {
            tx.execute(
                "INSERT OR REPLACE INTO clients (id, name, industry, region, primary_business_unit_id, annual_revenue, active, created_at, updated_at)
                 VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9)",
                params![
                    client.id,
                    client.name,
                    client.industry,
                    client.region,
                    client.primary_business_unit_id,
                    client.annual_revenue,
                    client.active,
                    client.created_at.to_rfc3339(),
                    client.updated_at.to_rfc3339(),
                ],
            )
            .map_err(|e| DomainError::Database(format!("Failed to import client {}: {e}", client.id)))?;
        }

        for service in &dataset.services {
            tx.execute(
                "INSERT OR REPLACE INTO services (id, name, category, description, business_unit_id, active, created_at, updated_at)
                 VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8)",
                params![
                    service.id,
                    service.name,
                    service.category,
                    service.description,
                    service.business_unit_id,
                    service.active,
                    service.created_at.to_rfc3339(),
                    service.updated_at.to_rfc3339(),
                ],
            )
            .map_err(|e| DomainError::Database(format!("Failed to import service {}: {e}", service.id)))?;
        }

        for opp in &dataset.opportunities {
            tx.execute(
                "INSERT OR REPLACE INTO opportunities (id, client_id, service_id, title, created_at, updated_at)
                 VALUES (?1, ?2, ?3, ?4, ?5, ?6)",
                params![
                    opp.id,
                    opp.client_id,
                    opp.service_id,
                    opp.title,
                    opp.created_at.to_rfc3339(),
                    opp.updated_at.to_rfc3339(),
                ],
            )
            .map_err(|e| DomainError::Database(format!("Failed to import opportunity {}: {e}", opp.id)))?;
        }

        tx.commit()
            .map_err(|e| DomainError::Database(format!("Failed to commit import: {e}")))?;

        let counts = ImportCounts {
            business_units: dataset.business_units.len(),
            clients: dataset.clients.len(),
            services: dataset.services.len(),
            opportunities: dataset.opportunities.len(),
        };
        tracing::info!(
            business_units = counts.business_units,
            clients = counts.clients,
            services = counts.services,
            opportunities = counts.opportunities,
            "dataset imported"
        );
        Ok(counts)
    }

    fn list<T>(
        &self,
        table: &str,
        cols: &str,
        active_only: bool,
        map: fn(&Row) -> Result<T, rusqlite::Error>,
    ) -> Result<Vec<T>, DomainError> {
        let conn = self.lock()?;
        let mut sql = format!("SELECT {cols} FROM {table}");
        if active_only {
            sql.push_str(" WHERE active = 1");
        }
        sql.push_str(" ORDER BY created_at, id");

        let mut stmt = conn
            .prepare(&sql)
            .map_err(|e| DomainError::Database(format!("Failed to list {table}: {e}")))?;
        let rows = stmt
            .query_map([], map)
            .map_err(|e| DomainError::Database(format!("Failed to list {table}: {e}")))?
            .collect::<Result<Vec<T>, _>>()
            .map_err(|e| DomainError::Database(format!("Failed to decode {table} row: {e}")))?;
        Ok(rows)
    }

    fn row_to_client(row: &Row) -> Result<Client, rusqlite::Error> {
        Ok(Client {
            id: row.get(0)?,
            name: row.get(1)?,
            industry: row.get(2)?,
            region: row.get(3)?,
            primary_business_unit_id: row.get(4)?,
            annual_revenue: row.get(5)?,
            active: row.get(6)?,
            created_at: timestamp(row, 7)?,
            updated_at: timestamp(row, 8)?,
        })
    }

    fn row_to_business_unit(row: &Row) -> Result<BusinessUnit, rusqlite::Error> {
        Ok(BusinessUnit {
            id: row.get(0)?,
            name: row.get(1)?,
            description: row.get(2)?,
            active: row.get(3)?,
            created_at: timestamp(row, 4)?,
            updated_at: timestamp(row, 5)?,
        })
    }

    fn row_to_service(row: &Row) -> Result<Service, rusqlite::Error> {
        Ok(Service {
            id: row.get(0)?,
            name: row.get(1)?,
            category: row.get(2)?,
            description: row.get(3)?,
            business_unit_id: row.get(4)?,
            active: row.get(5)?,
            created_at: timestamp(row, 6)?,
            updated_at: timestamp(row, 7)?,
        })
    }

    fn row_to_opportunity(row: &Row) -> Result<Opportunity, rusqlite::Error> {
        Ok(Opportunity {
            id: row.get(0)?,
            client_id: row.get(1)?,
            service_id: row.get(2)?,
            title: row.get(3)?,
            created_at: timestamp(row, 4)?,
            updated_at: timestamp(row, 5)?,
        })
    }
}

fn timestamp(row: &Row, idx: usize) -> Result<DateTime<Utc>, rusqlite::Error> {
    let raw: String = row.get(idx)?;
    DateTime::parse_from_rfc3339(&raw)
        .map(|dt| dt.with_timezone(&Utc))
        .map_err(|e| rusqlite::Error::FromSqlConversionFailure(idx, Type::Text, Box::new(e)))
}

impl ClientRepository for SqliteCrmRepo {
    fn list_clients(&self, active_only: bool) -> Result<Vec<Client>, DomainError> {
        self.list("clients", CLIENT_COLS, active_only, Self::row_to_client)
    }
}

impl BusinessUnitRepository for SqliteCrmRepo {
    fn list_business_units(&self, active_only: bool) -> Result<Vec<BusinessUnit>, DomainError> {
        self.list(
            "business_units",
            BUSINESS_UNIT_COLS,
            active_only,
            Self::row_to_business_unit,
        )
    }
}

impl ServiceRepository for SqliteCrmRepo {
    fn list_services(&self, active_only: bool) -> Result<Vec<Service>, DomainError> {
        self.list("services", SERVICE_COLS, active_only, Self::row_to_service)
    }
}

impl OpportunityRepository for SqliteCrmRepo {
    fn list_opportunities(&self) -> Result<Vec<Opportunity>, DomainError> {
        self.list(
            "opportunities",
            OPPORTUNITY_COLS,
            false,
            Self::row_to_opportunity,
        )
    }
}
