//! Routes of the single-page front-end
//!
//! The front-end has three declarative routes: home, search/add, and
//! per-show detail.

use std::fmt;

/// A front-end route.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Route {
    /// `/` — the tracked-shows list
    Home,
    /// `/shows/add` — the search/add page
    AddShow,
    /// `/show/{id}` — detail page of one show
    ShowDetail(u32),
}

impl Route {
    /// Render the route as a path.
    pub fn path(&self) -> String {
        match self {
            Route::Home => "/".to_string(),
            Route::AddShow => "/shows/add".to_string(),
            Route::ShowDetail(id) => format!("/show/{id}"),
        }
    }

    /// Parse a path into a route.
    ///
    /// Returns `None` for unknown paths and for detail paths without a
    /// positive numeric id.
    pub fn parse(path: &str) -> Option<Route> {
        match path {
            "/" => Some(Route::Home),
            "/shows/add" => Some(Route::AddShow),
            _ => {
                let id: u32 = path.strip_prefix("/show/")?.parse().ok()?;
                (id > 0).then_some(Route::ShowDetail(id))
            }
        }
    }
}

impl fmt::Display for Route {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.path())
    }
}
