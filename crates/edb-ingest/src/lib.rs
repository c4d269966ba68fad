pub mod discovery;
pub mod error;
pub mod loader;

pub use discovery::list_db_files;
pub use error::{IngestError, Result};
pub use loader::{DEFAULT_EXTENSIONS, DbLoader};
