pub mod error;
pub mod history_codec;
pub mod memory;
pub mod schema;
pub mod sqlite;
pub mod traits;

pub use error::StorageError;
pub use history_codec::{HISTORY_KEY, load_history, save_history, try_load_history};
pub use memory::MemoryBlobStore;
pub use sqlite::SqliteBlobStore;
pub use traits::BlobStore;
