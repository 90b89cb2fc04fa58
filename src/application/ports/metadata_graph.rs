use async_trait::async_trait;
use thiserror::Error;

use crate::application::dto::{DatasetCore, Distribution, License};
#[cfg(test)]
use mockall::automock;

#[derive(Debug, Error)]
pub enum GraphError {
    #[error("Graph driver error: {0}")]
    Driver(String),

    #[error("Malformed graph record: {0}")]
    Malformed(String),
}

/// Port for the dataset-metadata graph. Every operation maps to one fixed
/// Cypher template; user input only ever travels as a bound parameter.
#[cfg_attr(test, automock)]
#[async_trait]
pub trait MetadataGraph: Send + Sync {
    /// Names of all `dataset` nodes.
    async fn dataset_names(&self) -> Result<Vec<String>, GraphError>;

    /// Names of all `Category` (species) nodes.
    async fn species_names(&self) -> Result<Vec<String>, GraphError>;

    async fn dataset_core(&self, name: &str) -> Result<Option<DatasetCore>, GraphError>;

    async fn dataset_distribution(&self, name: &str) -> Result<Option<Distribution>, GraphError>;

    async fn dataset_publisher(&self, name: &str) -> Result<Option<String>, GraphError>;

    async fn dataset_license(&self, name: &str) -> Result<Option<License>, GraphError>;

    async fn dataset_provider(&self, name: &str) -> Result<Option<String>, GraphError>;

    async fn dataset_contact_point(&self, name: &str) -> Result<Option<String>, GraphError>;

    /// Datasets linked to a species category, case-insensitive substring
    /// match on the category name.
    async fn datasets_for_species(&self, category: &str) -> Result<Vec<DatasetCore>, GraphError>;

    /// Datasets linked to a country (`Area` node), case-insensitive
    /// substring match on the area name.
    async fn datasets_for_country(&self, country: &str) -> Result<Vec<DatasetCore>, GraphError>;
}
