//! Unify Core Library
//!
//! This crate provides the core functionality for Unify, a single-page
//! front-end for tracking television shows backed by a REST API.
//!
//! # Features
//! - Typed client for the Unify API (show list, show detail, search, add)
//! - Per-page view state with an explicit `Idle → Loading → Loaded | Failed`
//!   lifecycle
//! - Last-request-wins sequencing for search-as-you-type
//! - Guarded add-show action with redirect-after-add
//! - Explicit display ordering for shows, seasons, and episodes

pub mod client;
pub mod error;
pub mod ordering;
pub mod pages;
pub mod route;
pub mod tracker;
pub mod types;

// Re-export main types for convenience
pub use client::{ApiConfig, UnifyClient};
pub use error::{Result, UnifyError};
pub use pages::{AddShowAction, PageState, SearchPage, SearchTicket, ShowDetailPage, ShowListPage};
pub use route::Route;
pub use tracker::UnifyTracker;
pub use types::{AddedShow, Episode, SearchResult, Season, Show};
