mod comments;
mod files;
mod list_fields;
mod list_tables;
mod metadata;
mod population;
mod run_query;

pub use comments::{ApproveCommentUseCase, DenyCommentUseCase};
pub use files::{DeleteFileUseCase, DownloadFileUseCase, UploadFileUseCase};
pub use list_fields::ListTableFieldsUseCase;
pub use list_tables::ListTablesUseCase;
pub use metadata::MetadataQueries;
pub use population::{PopulationFilter, PopulationQueryUseCase};
pub use run_query::{SelectQueryUseCase, SelectRequest};
