//! Catalog state and request sequencing
//!
//! [`CatalogState`] holds everything a menu screen needs (language, filter,
//! fetched products, category index). [`CatalogStore`] owns it behind a
//! lock and refreshes it from the server.
//!
//! Every fetch takes a ticket from a [`RequestSequencer`]. A response is
//! applied only if its ticket is newer than the one already applied, so a
//! slow older response can never overwrite a newer one.

use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};

use parking_lot::RwLock;
use shared::models::{CategoryIndex, Product};

use crate::auth::SessionStorage;
use crate::filter::{MenuFilter, Selection};
use crate::language::Language;
use crate::{ClientConfig, ClientResult, HttpClient};

/// File name of the persisted language choice inside the session directory
pub const LANGUAGE_FILE: &str = "language.json";

/// Issues monotonically increasing tickets, starting at 1
#[derive(Debug, Default)]
pub struct RequestSequencer {
    last_issued: AtomicU64,
}

impl RequestSequencer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn issue(&self) -> u64 {
        self.last_issued.fetch_add(1, Ordering::SeqCst) + 1
    }

    pub fn last_issued(&self) -> u64 {
        self.last_issued.load(Ordering::SeqCst)
    }
}

/// A value plus the ticket of the response that produced it
#[derive(Debug, Clone, Default)]
pub struct Sequenced<T> {
    ticket: u64,
    value: T,
}

impl<T> Sequenced<T> {
    pub fn new(value: T) -> Self {
        Self { ticket: 0, value }
    }

    /// Store `value` if `ticket` is newer than the applied one.
    /// Returns whether it was applied.
    pub fn offer(&mut self, ticket: u64, value: T) -> bool {
        if ticket <= self.ticket {
            return false;
        }
        self.ticket = ticket;
        self.value = value;
        true
    }

    pub fn ticket(&self) -> u64 {
        self.ticket
    }

    pub fn get(&self) -> &T {
        &self.value
    }
}

/// Client-side menu state
#[derive(Debug, Clone, Default)]
pub struct CatalogState {
    language: Language,
    filter: MenuFilter,
    products: Sequenced<Vec<Product>>,
    categories: Sequenced<CategoryIndex>,
}

impl CatalogState {
    pub fn new(language: Language) -> Self {
        Self {
            language,
            ..Self::default()
        }
    }

    pub fn language(&self) -> Language {
        self.language
    }

    pub fn set_language(&mut self, language: Language) {
        self.language = language;
    }

    pub fn toggle_language(&mut self) -> Language {
        self.language = self.language.toggle();
        self.language
    }

    pub fn filter(&self) -> &MenuFilter {
        &self.filter
    }

    pub fn filter_mut(&mut self) -> &mut MenuFilter {
        &mut self.filter
    }

    /// Select a category; the subcategory resets to `all`
    pub fn select_category(&mut self, category: impl Into<Selection>) {
        self.filter.select_category(category);
    }

    pub fn select_subcategory(&mut self, subcategory: impl Into<Selection>) {
        self.filter.select_subcategory(subcategory);
    }

    pub fn set_query(&mut self, query: impl Into<String>) {
        self.filter.set_query(query);
    }

    pub fn set_popular_only(&mut self, popular_only: bool) {
        self.filter.set_popular_only(popular_only);
    }

    /// Last applied product list, unfiltered
    pub fn products(&self) -> &[Product] {
        self.products.get()
    }

    pub fn categories(&self) -> &CategoryIndex {
        self.categories.get()
    }

    /// Subcategories offered for the selected category (none for `all`)
    pub fn subcategory_options(&self) -> Vec<String> {
        match self.filter.category() {
            Selection::All => Vec::new(),
            Selection::Exact(category) => self
                .categories
                .get()
                .get(category)
                .map(|subs| subs.iter().cloned().collect())
                .unwrap_or_default(),
        }
    }

    /// Products after applying the current filter
    pub fn visible_products(&self) -> Vec<Product> {
        self.filter.apply(self.products.get())
    }

    pub fn apply_products(&mut self, ticket: u64, products: Vec<Product>) -> bool {
        self.products.offer(ticket, products)
    }

    pub fn apply_categories(&mut self, ticket: u64, categories: CategoryIndex) -> bool {
        self.categories.offer(ticket, categories)
    }
}

/// Shared handle to the catalog state plus the client that refreshes it
#[derive(Debug, Clone)]
pub struct CatalogStore {
    client: HttpClient,
    state: Arc<RwLock<CatalogState>>,
    products_seq: Arc<RequestSequencer>,
    categories_seq: Arc<RequestSequencer>,
    language_storage: Option<SessionStorage>,
}

impl CatalogStore {
    /// In-memory store; the language choice is not persisted
    pub fn new(client: HttpClient, language: Language) -> Self {
        Self {
            client,
            state: Arc::new(RwLock::new(CatalogState::new(language))),
            products_seq: Arc::new(RequestSequencer::new()),
            categories_seq: Arc::new(RequestSequencer::new()),
            language_storage: None,
        }
    }

    /// Store whose language choice survives restarts.
    ///
    /// Starts in the saved language, or `default_language` when nothing
    /// (readable) was saved.
    pub fn with_storage(
        client: HttpClient,
        default_language: Language,
        storage: SessionStorage,
    ) -> Self {
        let language = storage.load::<Language>().unwrap_or(default_language);
        tracing::debug!(language = %language, "Catalog language restored");
        Self {
            language_storage: Some(storage),
            ..Self::new(client, language)
        }
    }

    /// Persistent store configured from [`ClientConfig`]
    pub fn from_config(config: &ClientConfig) -> ClientResult<Self> {
        Ok(Self::with_storage(
            config.build_http_client()?,
            config.default_language,
            SessionStorage::new(&config.session_dir, LANGUAGE_FILE),
        ))
    }

    pub fn language(&self) -> Language {
        self.state.read().language()
    }

    /// Switch language and remember the choice
    pub fn set_language(&self, language: Language) {
        self.state.write().set_language(language);
        self.persist_language(language);
    }

    /// Flip between Arabic and English and remember the choice
    pub fn toggle_language(&self) -> Language {
        let language = self.state.write().toggle_language();
        self.persist_language(language);
        language
    }

    fn persist_language(&self, language: Language) {
        let Some(storage) = &self.language_storage else {
            return;
        };
        if let Err(e) = storage.save(&language) {
            tracing::warn!(error = %e, path = %storage.path().display(), "Failed to persist language");
        }
    }

    /// Snapshot of the current state
    pub fn snapshot(&self) -> CatalogState {
        self.state.read().clone()
    }

    /// Read the state without cloning it
    pub fn read<R>(&self, f: impl FnOnce(&CatalogState) -> R) -> R {
        f(&self.state.read())
    }

    /// Mutate the state (selection, query).
    ///
    /// Language changes made here are not persisted; use
    /// [`CatalogStore::set_language`].
    pub fn update<R>(&self, f: impl FnOnce(&mut CatalogState) -> R) -> R {
        f(&mut self.state.write())
    }

    /// Fetch products. A failed fetch applies an empty list.
    ///
    /// Returns whether this response was applied (false when a newer fetch
    /// already landed).
    pub async fn refresh_products(&self) -> bool {
        let ticket = self.products_seq.issue();
        let result = self.client.list_products().await;
        let products = or_empty(result, "products");
        self.state.write().apply_products(ticket, products)
    }

    /// Fetch the category index. A failed fetch applies an empty index.
    pub async fn refresh_categories(&self) -> bool {
        let ticket = self.categories_seq.issue();
        let result = self.client.categories().await;
        let categories = or_empty(result, "categories");
        self.state.write().apply_categories(ticket, categories)
    }

    /// Refresh products and categories concurrently
    pub async fn refresh(&self) {
        tokio::join!(self.refresh_products(), self.refresh_categories());
    }
}

fn or_empty<T: Default>(result: ClientResult<T>, what: &str) -> T {
    result.unwrap_or_else(|e| {
        tracing::warn!(error = %e, resource = what, "Fetch failed, showing empty state");
        T::default()
    })
}
