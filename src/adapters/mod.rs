// Adapters layer: concrete offer stores.

pub mod memory_store;
pub mod rest_store;

pub use memory_store::MemoryStore;
pub use rest_store::RestOfferStore;
