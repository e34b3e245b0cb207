use lifebook_types::StoryId;

/// The recorded target of a delete request, held until the user decides.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PendingDeletion {
    pub id: StoryId,
    pub name: String,
}

impl PendingDeletion {
    /// The confirmation prompt shown to the user, naming the page.
    pub fn prompt(&self) -> String {
        format!(
            "Are you sure you want to delete the page \"{}\"? This action cannot be undone.",
            self.name
        )
    }
}

/// Two-phase deletion coordinator shared across all page instances.
///
/// Phase one records the pending target and yields the confirmation prompt;
/// phase two either confirms (yielding the id to remove) or cancels (no
/// mutation). A new request replaces any previous pending target.
#[derive(Debug, Default)]
pub struct DeletionFlow {
    pending: Option<PendingDeletion>,
}

impl DeletionFlow {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a delete request and return the pending target (whose
    /// `prompt()` the confirmation surface should display).
    pub fn request(&mut self, id: StoryId, name: impl Into<String>) -> &PendingDeletion {
        self.pending.insert(PendingDeletion {
            id,
            name: name.into(),
        })
    }

    pub fn pending(&self) -> Option<&PendingDeletion> {
        self.pending.as_ref()
    }

    /// Confirm: clear the pending state and hand the target id to the
    /// caller for removal. `None` when nothing was pending.
    pub fn confirm(&mut self) -> Option<StoryId> {
        self.pending.take().map(|p| p.id)
    }

    /// Cancel: clear the pending target without any mutation.
    pub fn cancel(&mut self) {
        self.pending = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn prompt_contains_the_page_name() {
        let mut flow = DeletionFlow::new();
        let pending = flow.request(StoryId::new("story-trip-1000"), "Trip");
        assert!(pending.prompt().contains("Trip"));
    }

    #[test]
    fn confirm_yields_the_target_once() {
        let mut flow = DeletionFlow::new();
        flow.request(StoryId::new("story-trip-1000"), "Trip");
        assert_eq!(flow.confirm(), Some(StoryId::new("story-trip-1000")));
        assert_eq!(flow.confirm(), None);
        assert!(flow.pending().is_none());
    }

    #[test]
    fn cancel_clears_without_yielding() {
        let mut flow = DeletionFlow::new();
        flow.request(StoryId::new("story-trip-1000"), "Trip");
        flow.cancel();
        assert!(flow.pending().is_none());
        assert_eq!(flow.confirm(), None);
    }

    #[test]
    fn a_new_request_replaces_the_pending_target() {
        let mut flow = DeletionFlow::new();
        flow.request(StoryId::new("story-trip-1000"), "Trip");
        flow.request(StoryId::new("story-work-2000"), "Work");
        assert_eq!(flow.confirm(), Some(StoryId::new("story-work-2000")));
    }
}
