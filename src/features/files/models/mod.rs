mod file;

pub use file::{File, FileContent, FileMetadata, FileMetadataUpdate, NewFile};
