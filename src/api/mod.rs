pub mod errors;
pub mod format;
pub mod handlers;
pub mod middleware;
pub mod router;

pub use router::{create_router, AppState};
