//! The article store: single source of truth for the collection.
//!
//! Every mutation follows the same protocol:
//! 1. Build the next collection from the current snapshot
//! 2. Persist the whole collection under the store key
//! 3. Swap the in-memory snapshot
//! 4. Notify listeners
//!
//! A failed write stops at step 2, so memory and storage both keep the
//! previous snapshot.

use std::sync::Arc;

use desk_core::entities::{Article, ArticleFields};
use desk_core::ids::new_article_id;
use desk_core::seed::sample_articles;
use desk_core::updates::ArticleUpdate;

use crate::error::StoreError;
use crate::keyed::{KeyedStore, load_or, save};
use crate::ops::ArticleOps;

/// Called with the new snapshot after each applied mutation.
pub type Listener = Box<dyn FnMut(&[Article])>;

/// Receives navigation requests for the live-site preview.
pub type Navigator = Box<dyn FnMut(&str)>;

/// Handle returned by [`ArticleStore::subscribe`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubscriptionId(u64);

pub struct ArticleStore<S: KeyedStore> {
    backend: S,
    key: String,
    articles: Arc<Vec<Article>>,
    listeners: Vec<(SubscriptionId, Listener)>,
    next_subscription: u64,
    navigator: Option<Navigator>,
}

impl<S: KeyedStore> ArticleStore<S> {
    /// Load the collection stored under `key`.
    ///
    /// An absent or unreadable value seeds the store with the sample articles;
    /// nothing is written until the first mutation.
    pub fn open(backend: S, key: impl Into<String>) -> Self {
        let key = key.into();
        let articles: Vec<Article> = load_or(&backend, &key, || {
            tracing::info!(key = %key, "seeding article store with sample articles");
            sample_articles()
        });
        tracing::debug!(key = %key, count = articles.len(), "article store opened");

        Self {
            backend,
            key,
            articles: Arc::new(articles),
            listeners: Vec::new(),
            next_subscription: 0,
            navigator: None,
        }
    }

    /// A cheap shared handle to the current collection.
    ///
    /// The snapshot never changes after it is taken; later mutations replace
    /// the store's snapshot rather than editing it.
    #[must_use]
    pub fn snapshot(&self) -> Arc<Vec<Article>> {
        Arc::clone(&self.articles)
    }

    /// Register a listener for applied mutations.
    pub fn subscribe(&mut self, listener: impl FnMut(&[Article]) + 'static) -> SubscriptionId {
        let id = SubscriptionId(self.next_subscription);
        self.next_subscription += 1;
        self.listeners.push((id, Box::new(listener)));
        id
    }

    /// Remove a listener. Returns whether it was registered.
    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        let before = self.listeners.len();
        self.listeners.retain(|(sid, _)| *sid != id);
        self.listeners.len() != before
    }

    /// Install the callback that receives [`ArticleOps::goto_article`] requests.
    pub fn set_navigator(&mut self, navigator: impl FnMut(&str) + 'static) {
        self.navigator = Some(Box::new(navigator));
    }

    #[must_use]
    pub fn key(&self) -> &str {
        &self.key
    }

    #[must_use]
    pub const fn backend(&self) -> &S {
        &self.backend
    }

    pub const fn backend_mut(&mut self) -> &mut S {
        &mut self.backend
    }

    fn position(&self, id: &str) -> Option<usize> {
        self.articles.iter().position(|a| a.id == id)
    }

    fn commit(&mut self, next: Vec<Article>, op: &'static str, id: &str) -> Result<(), StoreError> {
        save(&mut self.backend, &self.key, &next)?;
        self.articles = Arc::new(next);
        tracing::debug!(op, id, count = self.articles.len(), "article mutation applied");

        let snapshot = Arc::clone(&self.articles);
        for (_, listener) in &mut self.listeners {
            listener(&snapshot);
        }
        Ok(())
    }

    fn modify(
        &mut self,
        id: &str,
        op: &'static str,
        change: impl FnOnce(&mut Article),
    ) -> Result<bool, StoreError> {
        let Some(idx) = self.position(id) else {
            tracing::debug!(op, id, "ignoring mutation on unknown article");
            return Ok(false);
        };
        let mut next = self.articles.as_ref().clone();
        change(&mut next[idx]);
        self.commit(next, op, id)?;
        Ok(true)
    }
}

impl<S: KeyedStore> ArticleOps for ArticleStore<S> {
    fn articles(&self) -> &[Article] {
        &self.articles
    }

    fn add(&mut self, fields: ArticleFields) -> Result<Article, StoreError> {
        let article = Article::from_fields(new_article_id(), fields);

        let mut next = Vec::with_capacity(self.articles.len() + 1);
        next.push(article.clone());
        next.extend(self.articles.iter().cloned());

        self.commit(next, "add", &article.id)?;
        Ok(article)
    }

    fn update(&mut self, id: &str, update: &ArticleUpdate) -> Result<bool, StoreError> {
        self.modify(id, "update", |article| update.apply_to(article))
    }

    fn delete(&mut self, id: &str) -> Result<bool, StoreError> {
        let Some(idx) = self.position(id) else {
            tracing::debug!(op = "delete", id, "ignoring mutation on unknown article");
            return Ok(false);
        };
        let mut next = self.articles.as_ref().clone();
        next.remove(idx);
        self.commit(next, "delete", id)?;
        Ok(true)
    }

    fn toggle_publish(&mut self, id: &str) -> Result<bool, StoreError> {
        self.modify(id, "toggle_publish", |article| {
            article.published = !article.published;
        })
    }

    fn goto_article(&mut self, id: &str) {
        match self.navigator.as_mut() {
            Some(navigate) => navigate(id),
            None => tracing::debug!(id, "no navigator installed, dropping goto request"),
        }
    }
}
