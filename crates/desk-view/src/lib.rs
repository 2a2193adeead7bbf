//! # desk-view
//!
//! Everything between the article store and a rendering surface.
//!
//! - [`derive_view`]: the pure search → status → page derivation
//! - [`pagination`]: range label and previous/next enablement
//! - [`Dashboard`]: list controls, page-reset policy, and editor drawer routing
//! - [`LiveSite`]: the single-article preview with its image carousel
//! - [`App`]: the host shell that owns the store and switches routes
//!
//! Nothing here reaches the store through global state: controllers take the
//! store as an explicit `&mut impl ArticleOps` argument, and [`App`] owns it.

pub mod app;
pub mod dashboard;
pub mod live_site;
pub mod pagination;
pub mod pipeline;

pub use app::{App, Route};
pub use dashboard::Dashboard;
pub use live_site::{ArticlePreview, LiveSite, Preview};
pub use pipeline::{ViewPage, ViewQuery, derive_view};
