//! The host shell: owns the article store and switches between the
//! dashboard and the live-site preview.
//!
//! The store is injected once with [`App::mount`]. Reaching for it before
//! that is an integration bug, so [`App::store`] and friends panic instead of
//! returning an `Option`.

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use desk_store::{ArticleStore, KeyedStore};

use crate::dashboard::Dashboard;
use crate::live_site::LiveSite;

/// Which page the shell is showing.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum Route {
    #[default]
    Dashboard,
    LiveSite(LiveSite),
}

pub struct App<S: KeyedStore> {
    store: Option<ArticleStore<S>>,
    dashboard: Dashboard,
    route: Rc<RefCell<Route>>,
    revision: Rc<Cell<u64>>,
}

impl<S: KeyedStore> App<S> {
    #[must_use]
    pub fn new(dashboard: Dashboard) -> Self {
        Self {
            store: None,
            dashboard,
            route: Rc::new(RefCell::new(Route::Dashboard)),
            revision: Rc::new(Cell::new(0)),
        }
    }

    /// Hand the store to the shell and wire its navigation signal and change
    /// notifications.
    pub fn mount(&mut self, mut store: ArticleStore<S>) {
        let route = Rc::clone(&self.route);
        store.set_navigator(move |id| {
            tracing::debug!(id, "navigating to live site");
            *route.borrow_mut() = Route::LiveSite(LiveSite::new(id));
        });

        let revision = Rc::clone(&self.revision);
        store.subscribe(move |_| revision.set(revision.get() + 1));

        self.store = Some(store);
    }

    #[must_use]
    pub const fn is_mounted(&self) -> bool {
        self.store.is_some()
    }

    /// # Panics
    ///
    /// Panics if called before [`App::mount`].
    #[must_use]
    #[track_caller]
    pub fn store(&self) -> &ArticleStore<S> {
        match &self.store {
            Some(store) => store,
            None => not_mounted(),
        }
    }

    /// # Panics
    ///
    /// Panics if called before [`App::mount`].
    #[track_caller]
    pub fn store_mut(&mut self) -> &mut ArticleStore<S> {
        match &mut self.store {
            Some(store) => store,
            None => not_mounted(),
        }
    }

    /// Dashboard and store together, for dashboard operations that write.
    ///
    /// # Panics
    ///
    /// Panics if called before [`App::mount`].
    #[track_caller]
    pub fn dashboard_and_store(&mut self) -> (&mut Dashboard, &mut ArticleStore<S>) {
        match &mut self.store {
            Some(store) => (&mut self.dashboard, store),
            None => not_mounted(),
        }
    }

    #[must_use]
    pub const fn dashboard(&self) -> &Dashboard {
        &self.dashboard
    }

    pub const fn dashboard_mut(&mut self) -> &mut Dashboard {
        &mut self.dashboard
    }

    #[must_use]
    pub fn route(&self) -> Route {
        self.route.borrow().clone()
    }

    /// Mutate the live-site state in place, if it is the current route.
    pub fn with_live_site<R>(&self, f: impl FnOnce(&mut LiveSite) -> R) -> Option<R> {
        match &mut *self.route.borrow_mut() {
            Route::LiveSite(site) => Some(f(site)),
            Route::Dashboard => None,
        }
    }

    /// Leave the preview for the dashboard.
    pub fn go_back(&self) {
        *self.route.borrow_mut() = Route::Dashboard;
    }

    /// Bumped after every applied store mutation. Views re-derive when it moves.
    #[must_use]
    pub fn revision(&self) -> u64 {
        self.revision.get()
    }
}

#[track_caller]
fn not_mounted() -> ! {
    panic!("article store used before App::mount; the shell must be mounted with a store first")
}
