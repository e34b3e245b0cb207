use lifebook_engine::{
    project, projection, DeletionFlow, Effect, PageView, PendingDeletion, SessionControls,
};
use lifebook_store::{destiny, prefs, KeyValueStore, StoryStore};
use lifebook_types::{DestinyContent, SortOrder, Story, StoryId};

/// The journal session: store, session controls, deletion flow, and the
/// live page state machines, wired together.
///
/// Single-threaded and event-driven: every method is a direct reaction to a
/// discrete user interaction. Committing transitions snapshot the state of
/// *all* pages and overwrite the store, so a reload reproduces exactly the
/// last rendered view. Load, sort toggle, create, and delete rebuild the
/// page list, binding each record to a fresh state machine; the search term
/// only changes which pages are visible, never which exist.
pub struct Journal<S: KeyValueStore> {
    kv: S,
    store: StoryStore,
    controls: SessionControls,
    deletion: DeletionFlow,
    pages: Vec<PageView>,
}

impl<S: KeyValueStore> Journal<S> {
    /// Open a session over the given key-value store, loading records and
    /// the persisted sort-order preference.
    pub fn open(kv: S) -> Self {
        let store = StoryStore::load(&kv);
        let controls = SessionControls::new(prefs::sort_order(&kv));
        let mut journal = Self {
            kv,
            store,
            controls,
            deletion: DeletionFlow::new(),
            pages: Vec::new(),
        };
        journal.rebuild_pages();
        journal
    }

    /// All pages in the current sort order, regardless of the search term.
    pub fn pages(&self) -> &[PageView] {
        &self.pages
    }

    /// Pages matching the current search term, in sort order. Filtering
    /// hides pages; it never reorders them.
    pub fn visible_pages(&self) -> Vec<&PageView> {
        self.pages
            .iter()
            .filter(|p| projection::name_matches(&p.story().name, self.controls.search_term()))
            .collect()
    }

    pub fn page(&self, id: &StoryId) -> Option<&PageView> {
        self.pages.iter().find(|p| &p.story().id == id)
    }

    /// The canonical persisted record list (storage order, unprojected).
    pub fn records(&self) -> &[Story] {
        self.store.list()
    }

    pub fn sort_order(&self) -> SortOrder {
        self.controls.sort_order()
    }

    pub fn search_term(&self) -> &str {
        self.controls.search_term()
    }

    // --- Session controls ---

    /// Flip the sort order, persist the preference, and re-project.
    pub fn toggle_sort_order(&mut self) -> SortOrder {
        let order = self.controls.toggle_sort_order();
        prefs::set_sort_order(&mut self.kv, order);
        self.rebuild_pages();
        order
    }

    /// Update the search term; re-filters only, never writes to storage.
    pub fn set_search_term(&mut self, term: impl Into<String>) {
        self.controls.set_search_term(term);
    }

    // --- Page lifecycle ---

    /// Create a page from a user-submitted name and re-project. Rejects
    /// empty names before any mutation.
    pub fn create_page(&mut self, name: &str) -> lifebook_store::Result<Story> {
        let story = self.store.create(&mut self.kv, name)?;
        self.rebuild_pages();
        Ok(story)
    }

    // --- Per-page transitions ---
    //
    // Each forwards to the page's state machine and, when the transition
    // commits, captures the full current state of all pages and overwrites
    // the store.

    pub fn toggle_expansion(&mut self, id: &StoryId) {
        self.transition(id, |p| p.toggle_expansion());
    }

    pub fn begin_title_edit(&mut self, id: &StoryId) {
        self.transition(id, |p| p.begin_title_edit());
    }

    pub fn set_title_draft(&mut self, id: &StoryId, text: &str) {
        self.transition(id, |p| p.set_title_draft(text));
    }

    pub fn commit_title(&mut self, id: &StoryId) {
        self.transition(id, |p| p.commit_title());
    }

    pub fn cancel_title_edit(&mut self, id: &StoryId) {
        self.transition(id, |p| p.cancel_title_edit());
    }

    pub fn begin_content_edit(&mut self, id: &StoryId) {
        self.transition(id, |p| p.begin_content_edit());
    }

    pub fn set_content_draft(&mut self, id: &StoryId, markup: &str) {
        self.transition(id, |p| p.set_content_draft(markup));
    }

    pub fn save_content(&mut self, id: &StoryId) {
        self.transition(id, |p| p.save_content());
    }

    pub fn cancel_content_edit(&mut self, id: &StoryId) {
        self.transition(id, |p| p.cancel_content_edit());
    }

    pub fn toggle_menu(&mut self, id: &StoryId) {
        self.transition(id, |p| p.toggle_menu());
    }

    pub fn shrink_font(&mut self, id: &StoryId) {
        self.transition(id, |p| p.shrink_font());
    }

    pub fn grow_font(&mut self, id: &StoryId) {
        self.transition(id, |p| p.grow_font());
    }

    // --- Deletion flow ---

    /// Phase one: record the pending target and return it so the caller can
    /// show the confirmation prompt. `None` when the id is unknown.
    pub fn request_delete(&mut self, id: &StoryId) -> Option<&PendingDeletion> {
        let name = self.page(id)?.story().name.clone();
        Some(self.deletion.request(id.clone(), name))
    }

    pub fn pending_deletion(&self) -> Option<&PendingDeletion> {
        self.deletion.pending()
    }

    /// Phase two, confirmed: remove the record, re-project, and return the
    /// removed id.
    pub fn confirm_delete(&mut self) -> Option<StoryId> {
        let id = self.deletion.confirm()?;
        self.store.delete(&mut self.kv, &id);
        self.rebuild_pages();
        Some(id)
    }

    /// Phase two, cancelled: clear the pending target, no mutation.
    pub fn cancel_delete(&mut self) {
        self.deletion.cancel();
    }

    /// Degraded fallback when no confirmation surface is available: delete
    /// without the two-phase handshake.
    pub fn delete_directly(&mut self, id: &StoryId) {
        self.store.delete(&mut self.kv, id);
        self.rebuild_pages();
    }

    // --- Destiny record (single-record collaborator) ---

    pub fn destiny(&self) -> DestinyContent {
        destiny::load(&self.kv).unwrap_or_default()
    }

    pub fn save_destiny(&mut self, content: &DestinyContent) {
        destiny::save(&mut self.kv, content);
    }

    // --- Maintenance ---

    /// Remove every lifebook key from the store and reload, restoring the
    /// out-of-box state.
    pub fn reset(&mut self) {
        self.kv.remove(lifebook_types::keys::STORIES_KEY);
        self.kv.remove(lifebook_types::keys::SORT_ORDER_KEY);
        self.kv.remove(lifebook_types::keys::DESTINY_KEY);
        self.store = StoryStore::load(&self.kv);
        self.controls = SessionControls::new(prefs::sort_order(&self.kv));
        self.deletion = DeletionFlow::new();
        self.rebuild_pages();
    }

    /// Tear down the session and hand the backing store back.
    pub fn into_store(self) -> S {
        self.kv
    }

    fn transition(&mut self, id: &StoryId, f: impl FnOnce(&mut PageView) -> Effect) {
        let Some(page) = self.pages.iter_mut().find(|p| &p.story().id == id) else {
            tracing::debug!(%id, "transition on unknown page ignored");
            return;
        };
        let effect = f(page);
        if effect.persists() {
            self.persist_all();
        }
    }

    /// Capture the full current state of all pages and overwrite the store.
    fn persist_all(&mut self) {
        let snapshot: Vec<Story> = self.pages.iter().map(|p| p.snapshot()).collect();
        self.store.replace_all(&mut self.kv, snapshot);
    }

    /// Re-derive the page list from the canonical records: sort, then bind
    /// each record to a fresh state machine.
    fn rebuild_pages(&mut self) {
        let ordered = project(self.store.list(), self.controls.sort_order(), "");
        self.pages = ordered.into_iter().map(PageView::new).collect();
    }
}
