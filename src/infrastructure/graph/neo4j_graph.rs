use async_trait::async_trait;
use neo4rs::{query, Graph, Node, Query, Row};

use crate::application::dto::{DatasetCore, Distribution, License};
use crate::application::ports::{GraphError, MetadataGraph};

/// Neo4j-backed implementation of the metadata port. Every operation is a
/// fixed Cypher template; caller input only ever travels as a bound
/// parameter.
pub struct Neo4jMetadataGraph {
    graph: Graph,
}

const DATASET_NAMES: &str = "MATCH (n:dataset) RETURN n.name AS name";
const SPECIES_NAMES: &str = "MATCH (n:Category) RETURN n.name AS name";
const DATASET_CORE: &str = "MATCH (n:dataset {name: $name}) RETURN n AS data";
const DATASET_DISTRIBUTION: &str =
    "MATCH (n:dataset {name: $name})-[]-(d:distribution) RETURN d AS node";
const DATASET_PUBLISHER: &str =
    "MATCH (n:dataset {name: $name})-[]-(p:publisher) RETURN p AS node";
const DATASET_LICENSE: &str = "MATCH (n:dataset {name: $name})-[]-(l:license) RETURN l AS node";
const DATASET_PROVIDER: &str = "MATCH (n:dataset {name: $name})-[]-(p:provider) RETURN p AS node";
const DATASET_CONTACT_POINT: &str =
    "MATCH (n:dataset {name: $name})-[]-(cp:contactPoint) RETURN cp AS node";
const SPECIES_DATASETS: &str = "MATCH (n:Category)-[]-()-[]-(d:dataset) \
     WHERE toLower(n.name) CONTAINS toLower($term) RETURN DISTINCT(d) AS data";
const COUNTRY_DATASETS: &str = "MATCH (n:Area)-[]-()-[]-()-[]-(d:dataset) \
     WHERE toLower(n.name) CONTAINS toLower($term) RETURN d AS data";

impl Neo4jMetadataGraph {
    /// Connect to the graph at startup; the handle is cheap to clone and
    /// shared for the process lifetime.
    pub async fn connect(uri: &str, user: &str, password: &str) -> Result<Self, GraphError> {
        let graph = Graph::new(uri, user, password)
            .await
            .map_err(driver_error)?;
        Ok(Self { graph })
    }

    async fn run(&self, q: Query) -> Result<Vec<Row>, GraphError> {
        let mut stream = self.graph.execute(q).await.map_err(driver_error)?;
        let mut rows = Vec::new();
        while let Some(row) = stream.next().await.map_err(driver_error)? {
            rows.push(row);
        }
        Ok(rows)
    }

    async fn names(&self, cypher: &'static str) -> Result<Vec<String>, GraphError> {
        let rows = self.run(query(cypher)).await?;
        rows.iter()
            .map(|row| row.get::<String>("name").map_err(malformed))
            .collect()
    }

    /// Run a single-node lookup and extract the `name` property.
    async fn named_node(
        &self,
        cypher: &'static str,
        dataset: &str,
    ) -> Result<Option<String>, GraphError> {
        let rows = self.run(query(cypher).param("name", dataset)).await?;
        match rows.first() {
            Some(row) => {
                let node: Node = row.get("node").map_err(malformed)?;
                Ok(Some(node.get::<String>("name").map_err(malformed)?))
            }
            None => Ok(None),
        }
    }

    fn dataset_from(row: &Row) -> Result<DatasetCore, GraphError> {
        let node: Node = row.get("data").map_err(malformed)?;
        node.to::<DatasetCore>().map_err(malformed)
    }
}

#[async_trait]
impl MetadataGraph for Neo4jMetadataGraph {
    async fn dataset_names(&self) -> Result<Vec<String>, GraphError> {
        self.names(DATASET_NAMES).await
    }

    async fn species_names(&self) -> Result<Vec<String>, GraphError> {
        self.names(SPECIES_NAMES).await
    }

    async fn dataset_core(&self, name: &str) -> Result<Option<DatasetCore>, GraphError> {
        let rows = self.run(query(DATASET_CORE).param("name", name)).await?;
        rows.first().map(Self::dataset_from).transpose()
    }

    async fn dataset_distribution(&self, name: &str) -> Result<Option<Distribution>, GraphError> {
        let rows = self
            .run(query(DATASET_DISTRIBUTION).param("name", name))
            .await?;
        match rows.first() {
            Some(row) => {
                let node: Node = row.get("node").map_err(malformed)?;
                Ok(Some(node.to::<Distribution>().map_err(malformed)?))
            }
            None => Ok(None),
        }
    }

    async fn dataset_publisher(&self, name: &str) -> Result<Option<String>, GraphError> {
        self.named_node(DATASET_PUBLISHER, name).await
    }

    async fn dataset_license(&self, name: &str) -> Result<Option<License>, GraphError> {
        let rows = self.run(query(DATASET_LICENSE).param("name", name)).await?;
        match rows.first() {
            Some(row) => {
                let node: Node = row.get("node").map_err(malformed)?;
                Ok(Some(node.to::<License>().map_err(malformed)?))
            }
            None => Ok(None),
        }
    }

    async fn dataset_provider(&self, name: &str) -> Result<Option<String>, GraphError> {
        self.named_node(DATASET_PROVIDER, name).await
    }

    async fn dataset_contact_point(&self, name: &str) -> Result<Option<String>, GraphError> {
        self.named_node(DATASET_CONTACT_POINT, name).await
    }

    async fn datasets_for_species(&self, category: &str) -> Result<Vec<DatasetCore>, GraphError> {
        let rows = self
            .run(query(SPECIES_DATASETS).param("term", category))
            .await?;
        rows.iter().map(Self::dataset_from).collect()
    }

    async fn datasets_for_country(&self, country: &str) -> Result<Vec<DatasetCore>, GraphError> {
        let rows = self
            .run(query(COUNTRY_DATASETS).param("term", country))
            .await?;
        rows.iter().map(Self::dataset_from).collect()
    }
}

fn driver_error(e: neo4rs::Error) -> GraphError {
    GraphError::Driver(e.to_string())
}

fn malformed(e: neo4rs::DeError) -> GraphError {
    GraphError::Malformed(e.to_string())
}
