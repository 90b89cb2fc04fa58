use std::sync::Arc;

use crate::application::dto::{DatasetCore, DatasetMetadata};
use crate::application::errors::MetadataUseCaseError;
use crate::application::ports::MetadataGraph;

/// Use case: dataset-metadata lookups against the graph. Each method maps to
/// one or more fixed Cypher templates behind the port.
pub struct MetadataQueries {
    graph: Arc<dyn MetadataGraph>,
}

impl MetadataQueries {
    pub fn new(graph: Arc<dyn MetadataGraph>) -> Self {
        Self { graph }
    }

    pub async fn dataset_names(&self) -> Result<Vec<String>, MetadataUseCaseError> {
        Ok(self.graph.dataset_names().await?)
    }

    pub async fn species_names(&self) -> Result<Vec<String>, MetadataUseCaseError> {
        Ok(self.graph.species_names().await?)
    }

    /// Assemble the combined metadata document for one dataset. The core
    /// node must exist; the other aspects are optional and serialise as
    /// `null` when the graph has no matching node.
    pub async fn dataset_metadata(&self, name: &str) -> Result<DatasetMetadata, MetadataUseCaseError> {
        let dataset = self
            .graph
            .dataset_core(name)
            .await?
            .ok_or_else(|| MetadataUseCaseError::NotFound(name.to_string()))?;

        Ok(DatasetMetadata {
            dataset,
            distribution: self.graph.dataset_distribution(name).await?,
            publisher: self.graph.dataset_publisher(name).await?,
            license: self.graph.dataset_license(name).await?,
            provider: self.graph.dataset_provider(name).await?,
            contact_point: self.graph.dataset_contact_point(name).await?,
        })
    }

    pub async fn search_species(
        &self,
        category: &str,
    ) -> Result<Vec<DatasetCore>, MetadataUseCaseError> {
        Ok(self.graph.datasets_for_species(category).await?)
    }

    pub async fn search_country(
        &self,
        country: &str,
    ) -> Result<Vec<DatasetCore>, MetadataUseCaseError> {
        Ok(self.graph.datasets_for_country(country).await?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::dto::License;
    use crate::application::ports::MockMetadataGraph;

    fn core(name: &str) -> DatasetCore {
        DatasetCore {
            id: "d1".to_string(),
            name: name.to_string(),
            date_published: "2020-01-01".to_string(),
            dataset_time_interval: "2000/2020".to_string(),
            citation: String::new(),
            description: String::new(),
        }
    }

    #[tokio::test]
    async fn combined_document_tolerates_missing_aspects() {
        let mut graph = MockMetadataGraph::new();
        graph
            .expect_dataset_core()
            .returning(|name| Ok(Some(core(name))));
        graph.expect_dataset_distribution().returning(|_| Ok(None));
        graph
            .expect_dataset_publisher()
            .returning(|_| Ok(Some("WOAH".to_string())));
        graph.expect_dataset_license().returning(|_| {
            Ok(Some(License {
                name: "CC BY 4.0".to_string(),
                url: "https://creativecommons.org/licenses/by/4.0/".to_string(),
            }))
        });
        graph.expect_dataset_provider().returning(|_| Ok(None));
        graph.expect_dataset_contact_point().returning(|_| Ok(None));

        let queries = MetadataQueries::new(Arc::new(graph));
        let doc = queries.dataset_metadata("faostat_population").await.unwrap();

        assert_eq!(doc.dataset.name, "faostat_population");
        assert!(doc.distribution.is_none());
        assert_eq!(doc.publisher.as_deref(), Some("WOAH"));
    }

    #[tokio::test]
    async fn missing_core_node_is_not_found() {
        let mut graph = MockMetadataGraph::new();
        graph.expect_dataset_core().returning(|_| Ok(None));

        let queries = MetadataQueries::new(Arc::new(graph));
        assert!(matches!(
            queries.dataset_metadata("nope").await,
            Err(MetadataUseCaseError::NotFound(n)) if n == "nope"
        ));
    }
}
