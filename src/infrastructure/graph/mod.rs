mod neo4j_graph;

pub use neo4j_graph::Neo4jMetadataGraph;
