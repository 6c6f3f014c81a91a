//! Problem catalog state: list, search results, stats and pending actions.
//!
//! DESIGN
//! ======
//! Every tab re-fetches on entry, so nothing here is authoritative. The
//! slots are [`Loadable`]s so a stale response cannot overwrite a newer one.
//! Deletion is a two-step request/confirm so a cancelled dialog can never
//! reach the network.

#[cfg(test)]
#[path = "catalog_test.rs"]
mod catalog_test;

use crate::net::types::{Problem, RepoStats};

use super::loadable::{LoadStatus, Loadable, RequestToken};

pub const EMPTY_LIST_TEXT: &str = "No hay problemas";
pub const EMPTY_SEARCH_TEXT: &str = "No se encontraron resultados";
pub const LIST_ERROR_TEXT: &str = "Error al cargar problemas";
pub const SEARCH_ERROR_TEXT: &str = "Error en búsqueda";
pub const STATS_ERROR_TEXT: &str = "Error al cargar estadísticas";
pub const EMPTY_QUERY_WARNING: &str = "Ingresa una búsqueda";
pub const DELETE_PROMPT: &str = "¿Eliminar este problema?";

/// Server-side filters for `GET /problems`.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ProblemFilter {
    pub problem_type: Option<String>,
    pub difficulty: Option<u8>,
}

impl ProblemFilter {
    /// Query pairs understood by the backend's list and export endpoints.
    #[must_use]
    pub fn query_pairs(&self) -> Vec<(&'static str, String)> {
        let mut pairs = Vec::new();
        if let Some(kind) = &self.problem_type {
            pairs.push(("problem_type", kind.clone()));
        }
        if let Some(difficulty) = self.difficulty {
            pairs.push(("difficulty", difficulty.to_string()));
        }
        pairs
    }
}

/// Parse a `<select>` value into a problem-type filter; empty means "all".
#[must_use]
pub fn parse_type_filter(raw: &str) -> Option<String> {
    let raw = raw.trim();
    (!raw.is_empty()).then(|| raw.to_owned())
}

/// Parse a `<select>` value into a difficulty filter (1 through 5).
#[must_use]
pub fn parse_difficulty_filter(raw: &str) -> Option<u8> {
    raw.trim().parse::<u8>().ok().filter(|d| (1..=5).contains(d))
}

/// Validate the search box before any request is sent.
///
/// # Errors
///
/// Returns the warning text when the query is blank.
pub fn validate_search_query(raw: &str) -> Result<String, &'static str> {
    let query = raw.trim();
    if query.is_empty() {
        return Err(EMPTY_QUERY_WARNING);
    }
    Ok(query.to_owned())
}

/// Shared catalog state provided through context.
#[derive(Clone, Debug, Default)]
pub struct CatalogState {
    pub list: Loadable<Vec<Problem>>,
    pub filter: ProblemFilter,
    pub search_query: String,
    pub search: Loadable<Vec<Problem>>,
    pub stats: Loadable<RepoStats>,
    /// Problem awaiting delete confirmation.
    pub pending_delete: Option<String>,
    /// Problem shown in the detail dialog.
    pub detail: Option<Problem>,
}

impl CatalogState {
    pub fn request_delete(&mut self, id: impl Into<String>) {
        self.pending_delete = Some(id.into());
    }

    pub fn cancel_delete(&mut self) {
        self.pending_delete = None;
    }

    /// Consume the pending delete. Only the returned id may be sent to the
    /// backend.
    pub fn confirm_delete(&mut self) -> Option<String> {
        self.pending_delete.take()
    }

    /// A delete went through: close its detail dialog if open and start a
    /// fresh list load. The returned token settles the reload.
    pub fn after_delete(&mut self, id: &str) -> RequestToken {
        if self.detail.as_ref().is_some_and(|p| p.id == id) {
            self.detail = None;
        }
        self.list.begin()
    }

    /// An import went through: start a fresh list load.
    pub fn after_import(&mut self) -> RequestToken {
        self.list.begin()
    }
}

/// What a problem grid should render for a slot.
#[derive(Clone, Debug, PartialEq)]
pub enum GridView {
    Idle,
    Spinner,
    Empty(&'static str),
    Error(&'static str),
    Cards(Vec<Problem>),
}

/// Map a slot to its rendering. Failures use the fixed inline text; the
/// detailed message already went out as a toast.
#[must_use]
pub fn grid_view(slot: &Loadable<Vec<Problem>>, empty_text: &'static str, error_text: &'static str) -> GridView {
    match &slot.status {
        LoadStatus::Idle => GridView::Idle,
        LoadStatus::Loading => GridView::Spinner,
        LoadStatus::Failed(_) => GridView::Error(error_text),
        LoadStatus::Loaded(items) if items.is_empty() => GridView::Empty(empty_text),
        LoadStatus::Loaded(items) => GridView::Cards(items.clone()),
    }
}
