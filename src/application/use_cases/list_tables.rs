use std::sync::Arc;

use crate::application::errors::QueryUseCaseError;
use crate::application::ports::SqlGateway;

/// Use case: list all tables in the public schema.
pub struct ListTablesUseCase {
    gateway: Arc<dyn SqlGateway>,
}

impl ListTablesUseCase {
    pub fn new(gateway: Arc<dyn SqlGateway>) -> Self {
        Self { gateway }
    }

    pub async fn execute(&self) -> Result<Vec<String>, QueryUseCaseError> {
        Ok(self.gateway.list_tables().await?)
    }
}
