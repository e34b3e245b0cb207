use lifebook_types::Story;

/// What the caller must do after a transition. `Persist` means the full
/// record list has to be snapshotted and written back to the store;
/// transient transitions (menu, edit entry, mid-edit keystrokes) report
/// `None`.
#[must_use]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Effect {
    None,
    Persist,
}

impl Effect {
    pub fn persists(self) -> bool {
        self == Effect::Persist
    }
}

/// The one editing mode a page can be in at a time. Title and content
/// editing are mutually exclusive by construction; the rollback snapshot for
/// content editing lives in the variant itself and is discarded on exit.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EditMode {
    Viewing,
    EditingTitle { draft: String },
    EditingContent { snapshot: String },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Expansion {
    Collapsed,
    Expanded,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Menu {
    Closed,
    Open,
}

/// The control set a renderer should show for a page, derived purely from
/// its state. Content editing swaps the whole set: edit/menu/expand-toggle
/// disappear and save/cancel appear; the overflow menu reveals the
/// secondary controls.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageControls {
    pub show_edit: bool,
    pub show_menu_trigger: bool,
    pub menu_open: bool,
    pub show_save: bool,
    pub show_cancel: bool,
    pub show_delete: bool,
    pub show_font_buttons: bool,
    pub show_expand_indicator: bool,
    pub expanded: bool,
}

impl PageControls {
    /// Indicator glyph next to the page header.
    pub fn expand_glyph(&self) -> char {
        if self.expanded {
            '\u{25B2}' // ▲
        } else {
            '\u{25BC}' // ▼
        }
    }

    /// Accessible label describing what activating the header will do.
    pub fn expand_label(&self) -> &'static str {
        if self.expanded {
            "Collapse section"
        } else {
            "Expand section"
        }
    }
}

/// Per-page interaction state machine.
///
/// One instance per rendered story page, created from a `Story` snapshot at
/// render time. The instance owns the authoritative snapshot from then on:
/// the rendered view is a projection of this state and is never read back as
/// a data source. Committing transitions return [`Effect::Persist`] so the
/// session can capture every page and overwrite the store.
#[derive(Debug, Clone)]
pub struct PageView {
    story: Story,
    mode: EditMode,
    expansion: Expansion,
    menu: Menu,
}

impl PageView {
    pub fn new(story: Story) -> Self {
        let expansion = if story.is_expanded {
            Expansion::Expanded
        } else {
            Expansion::Collapsed
        };
        Self {
            story,
            mode: EditMode::Viewing,
            expansion,
            menu: Menu::Closed,
        }
    }

    pub fn story(&self) -> &Story {
        &self.story
    }

    /// The record this page would persist as right now. While content
    /// editing is active this includes the live draft, mirroring what a
    /// full-store save observes mid-edit.
    pub fn snapshot(&self) -> Story {
        self.story.clone()
    }

    pub fn mode(&self) -> &EditMode {
        &self.mode
    }

    pub fn expansion(&self) -> Expansion {
        self.expansion
    }

    pub fn menu(&self) -> Menu {
        self.menu
    }

    // --- Expansion ---

    /// Header activation outside any control: flip expanded/collapsed and
    /// persist so the view survives reload.
    pub fn toggle_expansion(&mut self) -> Effect {
        self.expansion = match self.expansion {
            Expansion::Collapsed => Expansion::Expanded,
            Expansion::Expanded => Expansion::Collapsed,
        };
        self.story.is_expanded = self.expansion == Expansion::Expanded;
        Effect::Persist
    }

    // --- Title editing ---

    /// Double-activation on the title. A no-op while content editing is
    /// active (the two edit modes are mutually exclusive) or when already
    /// editing the title.
    pub fn begin_title_edit(&mut self) -> Effect {
        if self.mode == EditMode::Viewing {
            self.mode = EditMode::EditingTitle {
                draft: self.story.name.clone(),
            };
        }
        Effect::None
    }

    /// Mid-edit keystroke; transient, never persists.
    pub fn set_title_draft(&mut self, text: impl Into<String>) -> Effect {
        if let EditMode::EditingTitle { draft } = &mut self.mode {
            *draft = text.into();
        }
        Effect::None
    }

    /// Commit-on-blur / commit-on-Enter. An empty or unchanged draft reverts
    /// to the prior title without persisting.
    pub fn commit_title(&mut self) -> Effect {
        let EditMode::EditingTitle { draft } = std::mem::replace(&mut self.mode, EditMode::Viewing)
        else {
            return Effect::None;
        };
        let trimmed = draft.trim();
        if trimmed.is_empty() || trimmed == self.story.name {
            return Effect::None;
        }
        self.story.name = trimmed.to_string();
        Effect::Persist
    }

    /// Revert-on-Escape.
    pub fn cancel_title_edit(&mut self) -> Effect {
        if matches!(self.mode, EditMode::EditingTitle { .. }) {
            self.mode = EditMode::Viewing;
        }
        Effect::None
    }

    // --- Content editing ---

    /// Explicit "edit" action: snapshot the content for rollback, force the
    /// overflow menu closed, swap the control set. A no-op while the title
    /// is being edited.
    pub fn begin_content_edit(&mut self) -> Effect {
        if self.mode == EditMode::Viewing {
            self.mode = EditMode::EditingContent {
                snapshot: self.story.content.clone(),
            };
            self.menu = Menu::Closed;
        }
        Effect::None
    }

    /// Live edit of the content body; transient until saved.
    pub fn set_content_draft(&mut self, markup: impl Into<String>) -> Effect {
        if matches!(self.mode, EditMode::EditingContent { .. }) {
            self.story.content = markup.into();
        }
        Effect::None
    }

    /// Save: keep the edited content, restore the normal control set.
    pub fn save_content(&mut self) -> Effect {
        if !matches!(self.mode, EditMode::EditingContent { .. }) {
            return Effect::None;
        }
        self.mode = EditMode::Viewing;
        self.menu = Menu::Closed;
        Effect::Persist
    }

    /// Cancel: restore the snapshot byte-for-byte, discard changes, restore
    /// the normal control set. No persist.
    pub fn cancel_content_edit(&mut self) -> Effect {
        let EditMode::EditingContent { snapshot } =
            std::mem::replace(&mut self.mode, EditMode::Viewing)
        else {
            return Effect::None;
        };
        self.story.content = snapshot;
        self.menu = Menu::Closed;
        Effect::None
    }

    // --- Overflow menu ---

    /// Toggle the overflow menu. Forced closed (and not reopenable) while
    /// content editing is active.
    pub fn toggle_menu(&mut self) -> Effect {
        if matches!(self.mode, EditMode::EditingContent { .. }) {
            return Effect::None;
        }
        self.menu = match self.menu {
            Menu::Closed => Menu::Open,
            Menu::Open => Menu::Closed,
        };
        Effect::None
    }

    // --- Font size ---

    pub fn shrink_font(&mut self) -> Effect {
        let next = self.story.font_size.shrunk();
        if next == self.story.font_size {
            return Effect::None;
        }
        self.story.font_size = next;
        Effect::Persist
    }

    pub fn grow_font(&mut self) -> Effect {
        let next = self.story.font_size.grown();
        if next == self.story.font_size {
            return Effect::None;
        }
        self.story.font_size = next;
        Effect::Persist
    }

    // --- Derived view ---

    pub fn controls(&self) -> PageControls {
        let editing_content = matches!(self.mode, EditMode::EditingContent { .. });
        let menu_open = self.menu == Menu::Open;
        PageControls {
            show_edit: !editing_content,
            show_menu_trigger: !editing_content,
            menu_open,
            show_save: editing_content,
            show_cancel: editing_content,
            show_delete: menu_open && !editing_content,
            show_font_buttons: menu_open && !editing_content,
            show_expand_indicator: !editing_content,
            expanded: self.expansion == Expansion::Expanded,
        }
    }
}
