pub mod application;
pub mod cli;
pub mod config;
pub mod domain;
pub mod infrastructure;

use crate::application::cross_sell_matrix::{CrossSellMatrixUseCase, ScoredItem};
use crate::application::matrix_filter::MatrixFilter;
use crate::application::relationship::signal_for;
use crate::application::scoring::OpportunityScorer;
use crate::application::snapshot::SnapshotReader;
use crate::application::summary::MatrixSummary;
use crate::config::EngineConfig;
use crate::domain::entities::matrix_item::MatrixItem;
use crate::domain::error::DomainError;
use crate::domain::ports::business_unit_repository::BusinessUnitRepository;
use crate::domain::ports::client_repository::ClientRepository;
use crate::domain::ports::opportunity_repository::OpportunityRepository;
use crate::domain::ports::relationship_signal::RelationshipSignal;
use crate::domain::ports::service_repository::ServiceRepository;
use crate::domain::values::scoring::ScoringConfig;
use crate::infrastructure::sqlite::crm_repo::SqliteCrmRepo;
use std::sync::Arc;
use std::time::Duration;

/// Async facade over the cross-sell matrix engine.
///
/// Each query runs on the blocking pool against a fresh snapshot and is
/// abandoned with [`DomainError::Timeout`] once the query timeout expires.
pub struct CrossSell {
    matrix_uc: Arc<CrossSellMatrixUseCase>,
    query_timeout: Duration,
}

impl CrossSell {
    /// Open the sqlite store named in `config` and wire the configured signal.
    pub fn new(config: &EngineConfig) -> Result<Self, DomainError> {
        let store = Arc::new(SqliteCrmRepo::open(&config.db_path)?);
        Ok(Self::with_store(store, config))
    }

    pub fn with_store(store: Arc<SqliteCrmRepo>, config: &EngineConfig) -> Self {
        Self::with_repositories(
            store.clone(),
            store.clone(),
            store.clone(),
            store,
            signal_for(config.relationship, config.relationship_points),
            config,
        )
    }

    pub fn with_repositories(
        clients: Arc<dyn ClientRepository>,
        business_units: Arc<dyn BusinessUnitRepository>,
        services: Arc<dyn ServiceRepository>,
        opportunities: Arc<dyn OpportunityRepository>,
        relationship: Arc<dyn RelationshipSignal>,
        config: &EngineConfig,
    ) -> Self {
        let reader = SnapshotReader::new(clients, business_units, services, opportunities);
        let scorer = OpportunityScorer::new(ScoringConfig::default(), relationship);

        Self {
            matrix_uc: Arc::new(CrossSellMatrixUseCase::new(
                reader,
                scorer,
                config.high_opportunity_threshold,
            )),
            query_timeout: config.query_timeout,
        }
    }

    /// Synchronous access to the underlying use case.
    pub fn use_case(&self) -> &CrossSellMatrixUseCase {
        &self.matrix_uc
    }

    async fn run<T, F>(&self, query: F) -> Result<T, DomainError>
    where
        T: Send + 'static,
        F: FnOnce(&CrossSellMatrixUseCase) -> Result<T, DomainError> + Send + 'static,
    {
        let uc = self.matrix_uc.clone();
        let handle = tokio::task::spawn_blocking(move || query(uc.as_ref()));

        match tokio::time::timeout(self.query_timeout, handle).await {
            Ok(Ok(result)) => result,
            Ok(Err(join_err)) => Err(DomainError::Internal(format!(
                "matrix query task failed: {join_err}"
            ))),
            Err(_) => {
                let ms = self.query_timeout.as_millis() as u64;
                tracing::warn!(timeout_ms = ms, "cross-sell matrix query timed out");
                Err(DomainError::Timeout(ms))
            }
        }
    }

    pub async fn matrix(&self, filter: MatrixFilter) -> Result<Vec<MatrixItem>, DomainError> {
        self.run(move |uc| uc.execute(&filter)).await
    }

    pub async fn matrix_for_client(&self, client_id: &str) -> Result<Vec<MatrixItem>, DomainError> {
        self.matrix(MatrixFilter::for_client(client_id)).await
    }

    pub async fn matrix_for_source_business_unit(
        &self,
        business_unit_id: &str,
    ) -> Result<Vec<MatrixItem>, DomainError> {
        self.matrix(MatrixFilter::for_source_business_unit(business_unit_id))
            .await
    }

    pub async fn matrix_for_target_business_unit(
        &self,
        business_unit_id: &str,
    ) -> Result<Vec<MatrixItem>, DomainError> {
        self.matrix(MatrixFilter::for_target_business_unit(business_unit_id))
            .await
    }

    pub async fn matrix_for_industry(&self, industry: &str) -> Result<Vec<MatrixItem>, DomainError> {
        self.matrix(MatrixFilter::for_industry(industry)).await
    }

    pub async fn matrix_for_region(&self, region: &str) -> Result<Vec<MatrixItem>, DomainError> {
        self.matrix(MatrixFilter::for_region(region)).await
    }

    /// Items scoring at least `min_score` (configured default: 70).
    pub async fn high_opportunity_matrix(
        &self,
        min_score: Option<i64>,
    ) -> Result<Vec<MatrixItem>, DomainError> {
        self.run(move |uc| uc.high_opportunity(min_score)).await
    }

    pub async fn summary(&self, filter: MatrixFilter) -> Result<MatrixSummary, DomainError> {
        self.run(move |uc| uc.summary(&filter)).await
    }

    pub async fn explain(
        &self,
        client_id: &str,
        target_business_unit_id: &str,
    ) -> Result<Option<ScoredItem>, DomainError> {
        let client_id = client_id.to_string();
        let target = target_business_unit_id.to_string();
        self.run(move |uc| uc.explain(&client_id, &target)).await
    }
}
