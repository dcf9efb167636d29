//! Session state and controller
//!
//! One explicit state struct owns the cache, the cart, the opening-hours
//! monitor and the remote seams; subordinate components receive it by
//! reference. No ambient globals.

use crate::cache::{DataCache, KvStorage};
use crate::cart::{CartManager, CartResult};
use crate::catalog;
use crate::checkout::{self, ValidationReport};
use crate::client::{MerchantFetcher, OrderTransport};
use crate::core::Config;
use crate::hours::{HoursMonitor, OpeningWindow, StatusWatcher, StoreStatus};
use crate::orders::{self, OrderSubmitter};
use crate::pricing;
use parking_lot::{Mutex, RwLock};
use shared::error::FetchError;
use shared::menu::{MenuCatalog, MenuItem, MerchantRecord};
use shared::order::{CartLine, CheckoutForm, Selection};
use std::sync::Arc;

/// Application state for one ordering session
///
/// The UI layer drives the engine exclusively through this controller;
/// loading replaces the whole merchant/catalog view atomically, and
/// validation/submission errors never touch the cart.
pub struct AppState {
    config: Config,
    cache: DataCache,
    fetcher: Arc<dyn MerchantFetcher>,
    hours: Arc<HoursMonitor>,
    cart: CartManager,
    submitter: OrderSubmitter,
    merchant: RwLock<Option<MerchantRecord>>,
    catalog: RwLock<MenuCatalog>,
    watcher: Mutex<Option<StatusWatcher>>,
}

impl AppState {
    /// Wire the engine against its external collaborators
    pub fn new(
        config: Config,
        storage: Arc<dyn KvStorage>,
        fetcher: Arc<dyn MerchantFetcher>,
        transport: Arc<dyn OrderTransport>,
    ) -> Self {
        let hours = Arc::new(HoursMonitor::new());
        Self {
            cache: DataCache::new(storage, config.cache_ttl()),
            cart: CartManager::new(hours.clone()),
            submitter: OrderSubmitter::new(transport),
            hours,
            fetcher,
            merchant: RwLock::new(None),
            catalog: RwLock::new(MenuCatalog::default()),
            watcher: Mutex::new(None),
            config,
        }
    }

    /// Load the merchant record (cache first), normalize its menu and
    /// start tracking the opening window
    pub async fn load_merchant(&self) -> Result<MerchantRecord, FetchError> {
        let record = self
            .cache
            .get_or_fetch(&self.config.merchant_id, self.fetcher.as_ref())
            .await?;

        let catalog = record.menu.as_ref().map(catalog::normalize).unwrap_or_default();
        tracing::info!(
            merchant_id = %self.config.merchant_id,
            sections = catalog.sections.len(),
            groups = catalog.groups.len(),
            "merchant loaded"
        );
        *self.catalog.write() = catalog;
        self.hours.set_window(OpeningWindow::from_config(&record.config));

        let mut watcher = self.watcher.lock();
        if watcher.is_none() {
            *watcher = Some(StatusWatcher::spawn(
                self.hours.clone(),
                self.config.status_poll_interval(),
            ));
        }
        drop(watcher);

        *self.merchant.write() = Some(record.clone());
        Ok(record)
    }

    /// Loaded merchant record, if any
    pub fn merchant(&self) -> Option<MerchantRecord> {
        self.merchant.read().clone()
    }

    /// Normalized catalog of the loaded merchant (empty before load)
    pub fn catalog(&self) -> MenuCatalog {
        self.catalog.read().clone()
    }

    /// Whether the item requires the customization flow before adding
    pub fn needs_customization(&self, item: &MenuItem) -> bool {
        pricing::needs_customization(item)
    }

    /// Per-unit price of an item under the given selection
    pub fn item_total(&self, item: &MenuItem, selections: &Selection) -> f64 {
        pricing::item_total(item, selections, &self.catalog.read())
    }

    /// Price and add an item; rejected while the store is closed
    pub fn add_to_cart(&self, item: MenuItem, selections: Selection) -> CartResult<String> {
        let price = self.item_total(&item, &selections);
        self.cart.add(item, selections, price)
    }

    pub fn remove_from_cart(&self, id: &str) {
        self.cart.remove(id);
    }

    /// Empty the cart and allow a new submission
    pub fn clear_cart(&self) {
        self.cart.clear();
        self.submitter.reset();
    }

    pub fn cart_lines(&self) -> Vec<CartLine> {
        self.cart.lines()
    }

    pub fn cart_total(&self) -> f64 {
        self.cart.total()
    }

    /// Validate checkout input against the current cart total
    pub fn validate(&self, form: &CheckoutForm) -> ValidationReport {
        checkout::validate(form, self.cart.total())
    }

    /// Whether the submit action must stay disabled
    pub fn is_submitting(&self) -> bool {
        self.submitter.is_submitting()
    }

    /// Build and submit the order
    ///
    /// Returns false when the form is invalid, a submission is already in
    /// flight, or the transport fails; the cart is never touched here.
    pub async fn submit_order(&self, form: &CheckoutForm) -> bool {
        let report = self.validate(form);
        if !report.is_valid() {
            tracing::warn!(errors = report.errors.len(), "submit rejected: form invalid");
            return false;
        }

        let order = orders::build_order(&self.cart.lines(), form, self.cart.total());
        self.submitter.submit(&self.config.merchant_id, &order).await
    }

    /// Live open/closed status (freshly evaluated)
    pub fn open_status(&self) -> StoreStatus {
        self.hours.evaluate_now()
    }

    /// Stop background work (the status watcher)
    pub fn shutdown(&self) {
        if let Some(watcher) = self.watcher.lock().take() {
            watcher.stop();
        }
    }
}

impl Drop for AppState {
    fn drop(&mut self) {
        self.shutdown();
    }
}
