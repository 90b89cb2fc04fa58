mod postgres_gateway;

pub use postgres_gateway::PostgresSqlGateway;
