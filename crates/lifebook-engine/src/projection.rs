use lifebook_types::{SortOrder, Story};

/// Derive the ordered, search-filtered view list from the record list.
///
/// Pure function of (records, sort order, search term); recomputed on sort
/// toggle, search change, create, delete, and load. Sorting is stable, so
/// records sharing a `created_at` keep their relative storage order; the
/// filter only hides records and never reorders the survivors.
pub fn project(records: &[Story], order: SortOrder, search_term: &str) -> Vec<Story> {
    let mut view: Vec<Story> = records.to_vec();
    match order {
        SortOrder::NewestFirst => view.sort_by(|a, b| b.created_at.cmp(&a.created_at)),
        SortOrder::OldestFirst => view.sort_by(|a, b| a.created_at.cmp(&b.created_at)),
    }

    view.retain(|s| name_matches(&s.name, search_term));
    view
}

/// Case-insensitive substring match of the search term against a page name;
/// an empty term matches everything. Whitespace in the term is significant:
/// `" tri"` only matches names containing `" tri"`.
pub fn name_matches(name: &str, search_term: &str) -> bool {
    name.to_lowercase()
        .contains(&search_term.to_lowercase())
}
