//! Data types for Unify
//!
//! This module contains the entities served by the Unify REST API.
//! All types implement Serialize and Deserialize for JSON compatibility with Tauri.
//! Entities are created server-side; the front-end only reads them.

use serde::{Deserialize, Serialize};

/// A tracked television show with its nested seasons.
///
/// `seasons` is `None` for shows that arrive without season data
/// (search results, some list payloads); rendering code must tolerate
/// the absence.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Show {
    /// Unify identifier of the show
    pub id: u32,
    /// Display name of the show
    pub name: String,
    /// Summary text, possibly HTML-stripped server-side
    #[serde(default)]
    pub summary: Option<String>,
    /// Cover image URL
    #[serde(default)]
    pub cover_img: Option<String>,
    /// Metadata provider that sourced this show (e.g. "tvmaze")
    #[serde(default)]
    pub provider: Option<String>,
    /// Provider-specific identifier of the show
    #[serde(default)]
    pub provider_id: Option<String>,
    /// Provider page URL for the show
    #[serde(default)]
    pub provider_url: Option<String>,
    /// Seasons with their episodes, when the payload includes them
    #[serde(default)]
    pub seasons: Option<Vec<Season>>,
}

impl Show {
    /// Number of seasons, treating absent season data as zero.
    pub fn season_count(&self) -> usize {
        self.seasons.as_ref().map_or(0, Vec::len)
    }

    /// Total number of episodes across all seasons, treating absent
    /// season data as zero.
    pub fn episode_count(&self) -> usize {
        self.seasons
            .as_ref()
            .map_or(0, |seasons| seasons.iter().map(|s| s.episodes.len()).sum())
    }
}

/// A season within a show.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Season {
    /// Unify identifier of the season
    pub id: u32,
    /// Season number, `None` for specials/unnumbered seasons
    #[serde(default)]
    pub num: Option<u32>,
    /// Season name, where the provider supplies one
    #[serde(default)]
    pub name: Option<String>,
    /// Summary text
    #[serde(default)]
    pub summary: Option<String>,
    /// Cover image URL
    #[serde(default)]
    pub cover_img: Option<String>,
    /// Episodes of this season; empty when the payload omits them
    #[serde(default)]
    pub episodes: Vec<Episode>,
}

/// An episode within a season.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Episode {
    /// Unify identifier of the episode
    pub id: u32,
    /// Episode number within the season, `None` for specials
    #[serde(default)]
    pub num: Option<u32>,
    /// Number of the season this episode belongs to
    #[serde(default)]
    pub season_num: Option<u32>,
    /// Display name of the episode
    pub name: String,
    /// Summary text
    #[serde(default)]
    pub summary: Option<String>,
    /// Runtime in minutes
    #[serde(default)]
    pub runtime: Option<u32>,
}

impl Episode {
    /// Display label for the episode number column: the number, or "SP"
    /// for specials without one.
    pub fn display_num(&self) -> String {
        match self.num {
            Some(num) => num.to_string(),
            None => "SP".to_string(),
        }
    }
}

/// A single result from `/api/search`.
///
/// Show-shaped subset: search results come straight from the metadata
/// provider, so they carry no Unify id until the show is added.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SearchResult {
    /// Unify identifier, present only when the show is already tracked
    #[serde(default)]
    pub id: Option<u32>,
    /// Display name of the show
    pub name: String,
    /// Summary text
    #[serde(default)]
    pub summary: Option<String>,
    /// Cover image URL
    #[serde(default)]
    pub cover_img: Option<String>,
    /// Metadata provider that produced this result
    #[serde(default)]
    pub provider: Option<String>,
    /// Provider-specific identifier, used to add the show
    pub provider_id: String,
    /// Provider page URL
    #[serde(default)]
    pub provider_url: Option<String>,
}

/// Response of the add-show POST: the created show's identity.
///
/// The server replies with the full show record; the add flow only needs
/// the id for the redirect, so unknown fields are ignored.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AddedShow {
    /// Unify identifier of the newly created show
    pub id: u32,
}
