//! District selector: search text + region filter.
//!
//! Search input is debounced: each keystroke returns a token, and the
//! event loop applies the pending term only if no newer keystroke arrived
//! within [`SEARCH_DEBOUNCE`].

use std::time::Duration;

use tempo_districts::{find_region, District};

/// How long a typed search term must sit unchanged before it is applied.
pub const SEARCH_DEBOUNCE: Duration = Duration::from_millis(300);

#[derive(Debug, Clone, Default)]
pub struct SelectorState {
    /// Applied search term (already debounced).
    search: String,
    /// Typed but not yet applied term.
    pending: Option<String>,
    /// Monotonic keystroke counter backing the debounce gate.
    epoch: u64,
    /// Region filter; `None` shows all regions.
    region: Option<String>,
}

impl SelectorState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a keystroke. The returned token is valid until the next one.
    pub fn type_search(&mut self, term: impl Into<String>) -> u64 {
        self.pending = Some(term.into());
        self.epoch += 1;
        self.epoch
    }

    /// Apply the pending term if `token` is still the latest keystroke.
    /// The event loop calls this after sleeping [`SEARCH_DEBOUNCE`].
    /// Returns whether the term was applied.
    pub fn apply_search(&mut self, token: u64) -> bool {
        if token != self.epoch {
            return false;
        }
        if let Some(pending) = self.pending.take() {
            self.search = pending;
        }
        true
    }

    /// Currently applied search term.
    pub fn search(&self) -> &str {
        &self.search
    }

    /// Set or clear the region filter.
    pub fn set_region(&mut self, region: Option<&str>) {
        self.region = region.map(str::to_string);
    }

    pub fn region(&self) -> Option<&str> {
        self.region.as_deref()
    }

    /// Filter the catalog by region, then by the applied search term
    /// (case-insensitive substring on local name, English name, or region).
    pub fn filtered<'a>(&self, districts: &'a [District]) -> Vec<&'a District> {
        let mut filtered: Vec<&District> = districts.iter().collect();

        if let Some(region) = self.region.as_deref().and_then(find_region) {
            filtered.retain(|d| region.districts.contains(&d.id.as_str()));
        }

        if !self.search.is_empty() {
            let needle = self.search.to_lowercase();
            filtered.retain(|d| {
                d.name.to_lowercase().contains(&needle)
                    || d.name_en.to_lowercase().contains(&needle)
                    || d.region.to_lowercase().contains(&needle)
            });
        }

        filtered
    }
}
