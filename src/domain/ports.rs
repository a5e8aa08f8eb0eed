use crate::domain::model::{NewOffer, OfferRecord};
use crate::utils::error::Result;
use async_trait::async_trait;

/// Write-only access to the offers table.
#[async_trait]
pub trait OfferStore: Send + Sync {
    /// Appends one row and returns it with the store-assigned identifier.
    async fn insert_offer(&self, offer: &NewOffer) -> Result<OfferRecord>;
}

pub trait StoreConfigProvider: Send + Sync {
    fn store_url(&self) -> &str;
    fn api_key(&self) -> &str;
    fn table(&self) -> &str;
}
