pub mod assets;
pub mod manifest_filesystem;
pub mod memory_manifest_store;
