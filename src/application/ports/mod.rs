pub mod metadata_graph;
pub mod object_store;
pub mod sql_gateway;

pub use metadata_graph::{GraphError, MetadataGraph};
pub use object_store::{ObjectStore, StoreError};
pub use sql_gateway::{DatabaseError, ResultSet, SqlGateway};

#[cfg(test)]
pub use metadata_graph::MockMetadataGraph;
#[cfg(test)]
pub use object_store::MockObjectStore;
#[cfg(test)]
pub use sql_gateway::MockSqlGateway;
