#[path = "../harness/mod.rs"]
mod harness;

mod manifest_public_api_contract;
mod lifecycle_public_api_contract;
