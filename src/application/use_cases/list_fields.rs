use std::sync::Arc;

use crate::application::errors::QueryUseCaseError;
use crate::application::ports::SqlGateway;
use crate::domain::catalog::ColumnDef;

/// Use case: list the (name, type) pairs of one table. An unknown table
/// yields an empty list; the HTTP layer turns that into a 404.
pub struct ListTableFieldsUseCase {
    gateway: Arc<dyn SqlGateway>,
}

impl ListTableFieldsUseCase {
    pub fn new(gateway: Arc<dyn SqlGateway>) -> Self {
        Self { gateway }
    }

    pub async fn execute(&self, table: &str) -> Result<Vec<ColumnDef>, QueryUseCaseError> {
        Ok(self.gateway.list_table_fields(table).await?)
    }
}
