pub mod adapters;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

pub use crate::adapters::{MemoryStore, RestOfferStore};
pub use crate::config::{EnvConfig, StoreConfig, TomlConfig};
pub use crate::core::pricing::derive_quote;
pub use crate::core::session::{AfterSave, QuoteSession, Submitter};
pub use crate::domain::model::{
    ContentLevel, DesignLevel, Feature, MaintenancePlan, NewOffer, OfferRecord, PageCount, Quote,
    RecordId, Selection, SiteType,
};
pub use crate::domain::ports::{OfferStore, StoreConfigProvider};
pub use crate::utils::error::{OfferError, Result};
