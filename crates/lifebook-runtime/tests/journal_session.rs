use lifebook_runtime::Journal;
use lifebook_store::MemoryStore;
use lifebook_testing::{journal_with, story_at};
use lifebook_types::SortOrder;

fn visible_names(journal: &Journal<MemoryStore>) -> Vec<String> {
    journal
        .visible_pages()
        .iter()
        .map(|p| p.story().name.clone())
        .collect()
}

#[test]
fn sorting_and_searching_the_projected_list() {
    let mut journal = journal_with(&[story_at("Trip", 1000), story_at("Work", 2000)]);

    assert_eq!(journal.sort_order(), SortOrder::NewestFirst);
    assert_eq!(visible_names(&journal), ["Work", "Trip"]);

    assert_eq!(journal.toggle_sort_order(), SortOrder::OldestFirst);
    assert_eq!(visible_names(&journal), ["Trip", "Work"]);

    journal.set_search_term("tri");
    assert_eq!(visible_names(&journal), ["Trip"]);

    journal.toggle_sort_order();
    assert_eq!(visible_names(&journal), ["Trip"]);

    // Clearing the term shows everything again, still sorted.
    journal.set_search_term("");
    assert_eq!(visible_names(&journal), ["Work", "Trip"]);
}

#[test]
fn sort_preference_survives_reload() {
    let mut journal = journal_with(&[story_at("Trip", 1000)]);
    journal.toggle_sort_order();

    let journal = Journal::open(journal.into_store());
    assert_eq!(journal.sort_order(), SortOrder::OldestFirst);
}

#[test]
fn created_page_round_trips_through_a_reload() {
    let mut journal = Journal::open(MemoryStore::new());
    journal.create_page("  Trip  ").unwrap();

    let journal = Journal::open(journal.into_store());
    let records = journal.records();
    assert_eq!(records.len(), 1);
    assert_eq!(records[0].name, "Trip");
    assert_eq!(records[0].content, "");
    assert_eq!(records[0].font_size, lifebook_types::FontSize::default());
    assert!(!records[0].is_expanded);
}

#[test]
fn empty_page_name_is_rejected() {
    let mut journal = Journal::open(MemoryStore::new());
    assert!(journal.create_page("   ").is_err());
    assert!(journal.records().is_empty());
}

#[test]
fn deletion_flow_confirm_and_cancel() {
    let mut journal = journal_with(&[story_at("Trip", 1000), story_at("Work", 2000)]);
    let trip_id = journal
        .records()
        .iter()
        .find(|s| s.name == "Trip")
        .unwrap()
        .id
        .clone();

    // Request opens a confirmation naming the page.
    let pending = journal.request_delete(&trip_id).unwrap();
    assert!(pending.prompt().contains("Trip"));

    // Cancel leaves the store and the projected list unchanged.
    journal.cancel_delete();
    assert!(journal.pending_deletion().is_none());
    assert_eq!(journal.records().len(), 2);
    assert_eq!(visible_names(&journal), ["Work", "Trip"]);

    // Confirm removes it from both.
    let _ = journal.request_delete(&trip_id);
    assert_eq!(journal.confirm_delete(), Some(trip_id.clone()));
    assert_eq!(journal.records().len(), 1);
    assert_eq!(visible_names(&journal), ["Work"]);

    // And it is gone after a reload too.
    let journal = Journal::open(journal.into_store());
    assert!(journal.page(&trip_id).is_none());
}

#[test]
fn direct_deletion_fallback_skips_the_handshake() {
    let mut journal = journal_with(&[story_at("Trip", 1000)]);
    let id = journal.records()[0].id.clone();
    journal.delete_directly(&id);
    assert!(journal.records().is_empty());
}

#[test]
fn committing_transitions_persist_the_full_page_state() {
    let mut journal = journal_with(&[story_at("Trip", 1000), story_at("Work", 2000)]);
    let trip_id = journal
        .records()
        .iter()
        .find(|s| s.name == "Trip")
        .unwrap()
        .id
        .clone();

    journal.toggle_expansion(&trip_id);
    journal.begin_content_edit(&trip_id);
    journal.set_content_draft(&trip_id, "<p>wrote something</p>");
    journal.save_content(&trip_id);
    journal.grow_font(&trip_id);

    let journal = Journal::open(journal.into_store());
    let trip = journal.page(&trip_id).unwrap().story();
    assert!(trip.is_expanded);
    assert_eq!(trip.content, "<p>wrote something</p>");
    assert_eq!(trip.font_size.px(), 17);

    // The untouched page is still there, unchanged.
    let work = journal.records().iter().find(|s| s.name == "Work").unwrap();
    assert_eq!(work.content, "");
}

#[test]
fn cancelled_content_edit_is_never_persisted() {
    let mut journal = journal_with(&[story_at("Trip", 1000)]);
    let id = journal.records()[0].id.clone();

    journal.begin_content_edit(&id);
    journal.set_content_draft(&id, "<p>discard me</p>");
    journal.cancel_content_edit(&id);

    assert_eq!(journal.page(&id).unwrap().story().content, "");
    let journal = Journal::open(journal.into_store());
    assert_eq!(journal.page(&id).unwrap().story().content, "");
}

#[test]
fn title_commit_persists_and_projection_tracks_the_new_name() {
    let mut journal = journal_with(&[story_at("Trip", 1000)]);
    let id = journal.records()[0].id.clone();

    journal.begin_title_edit(&id);
    journal.set_title_draft(&id, "Journey");
    journal.commit_title(&id);

    journal.set_search_term("journey");
    assert_eq!(visible_names(&journal), ["Journey"]);

    let journal = Journal::open(journal.into_store());
    assert_eq!(journal.page(&id).unwrap().story().name, "Journey");
    // The id (and with it the sort key) never changes on rename.
    assert_eq!(journal.records()[0].id, id);
}

#[test]
fn quota_failure_degrades_to_session_only_changes() {
    // Store too small for any story payload: persists fail, session works.
    let mut journal = Journal::open(MemoryStore::with_capacity_bytes(4));
    let story = journal.create_page("Trip").unwrap();
    assert_eq!(visible_names(&journal), ["Trip"]);

    // The change was never written, so a reload loses it.
    let journal = Journal::open(journal.into_store());
    assert!(journal.page(&story.id).is_none());
}

#[test]
fn reset_restores_the_out_of_box_state() {
    let mut journal = journal_with(&[story_at("Trip", 1000)]);
    journal.toggle_sort_order();
    journal.reset();

    assert!(journal.records().is_empty());
    assert_eq!(journal.sort_order(), SortOrder::NewestFirst);

    let journal = Journal::open(journal.into_store());
    assert!(journal.records().is_empty());
}
