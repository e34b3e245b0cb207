use lifebook_types::SortOrder;

/// Global session controls: the sort-order toggle and the search-term
/// holder. Modeled as explicit state handed to the projection rather than
/// ambient globals. The sort order is a persisted preference (the caller
/// writes it to the preference slot on toggle); the search term is
/// session-only and never touches persistent storage.
#[derive(Debug, Clone, Default)]
pub struct SessionControls {
    sort_order: SortOrder,
    search_term: String,
}

impl SessionControls {
    pub fn new(sort_order: SortOrder) -> Self {
        Self {
            sort_order,
            search_term: String::new(),
        }
    }

    pub fn sort_order(&self) -> SortOrder {
        self.sort_order
    }

    pub fn search_term(&self) -> &str {
        &self.search_term
    }

    /// Flip the sort order and return the new value for the caller to
    /// persist and re-project with.
    pub fn toggle_sort_order(&mut self) -> SortOrder {
        self.sort_order = self.sort_order.toggled();
        self.sort_order
    }

    /// Update the search term; only re-filters, never persists.
    pub fn set_search_term(&mut self, term: impl Into<String>) {
        self.search_term = term.into();
    }
}
