pub mod graph;
pub mod object_store;
pub mod persistence;
