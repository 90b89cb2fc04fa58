mod comments;
mod files;
mod health;
mod metadata;
mod population;
mod query;
mod tables;

pub use comments::{approve_comment_handler, deny_comment_handler};
pub use files::{delete_file_handler, download_file_handler, upload_file_handler};
pub use health::{health_handler, readiness_handler, root_handler};
pub use metadata::{
    dataset_metadata_handler, datasets_handler, search_country_handler, search_species_handler,
    species_handler,
};
pub use population::population_handler;
pub use query::query_handler;
pub use tables::{list_fields_handler, list_tables_handler};
