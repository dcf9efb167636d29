//! External collaborator seams
//!
//! The engine consumes a remote merchant fetch and an order transport; the
//! concrete backend lives outside this crate. Both calls are
//! fire-and-forget from the engine's perspective: no cancellation token is
//! threaded through, and an abandoned call still runs to completion.

use async_trait::async_trait;
use shared::error::{FetchError, SubmitError};
use shared::menu::{MenuDocument, MerchantConfig, MerchantRecord};
use shared::order::Order;

/// Remote merchant data source
///
/// The `config` and `cardapio` sub-trees are retrievable independently;
/// [`fetch_record`](Self::fetch_record) runs both concurrently.
#[async_trait]
pub trait MerchantFetcher: Send + Sync {
    /// Merchant configuration sub-tree; `None` when the merchant has no
    /// config record
    async fn fetch_config(&self, merchant_id: &str)
    -> Result<Option<MerchantConfig>, FetchError>;

    /// Menu document sub-tree; `None` while the menu is not authored yet
    async fn fetch_menu(&self, merchant_id: &str) -> Result<Option<MenuDocument>, FetchError>;

    /// Full record, both sub-trees fetched concurrently
    ///
    /// A missing config means the merchant does not exist; a missing menu
    /// is a valid record without a catalog.
    async fn fetch_record(&self, merchant_id: &str) -> Result<MerchantRecord, FetchError> {
        let (config, menu) = tokio::join!(
            self.fetch_config(merchant_id),
            self.fetch_menu(merchant_id)
        );
        let Some(config) = config? else {
            return Err(FetchError::NotFound(merchant_id.to_string()));
        };
        Ok(MerchantRecord {
            config,
            menu: menu?,
        })
    }
}

/// Durable order sink
///
/// Appends the order under the merchant's collection and generates its own
/// unique record key.
#[async_trait]
pub trait OrderTransport: Send + Sync {
    async fn submit_order(&self, merchant_id: &str, order: &Order) -> Result<(), SubmitError>;
}
