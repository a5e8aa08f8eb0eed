pub mod format;
pub mod pricing;
pub mod session;

pub use crate::domain::model::{Quote, Selection};
pub use crate::domain::ports::{OfferStore, StoreConfigProvider};
pub use crate::utils::error::Result;
