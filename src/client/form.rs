//! The shared input form and its edit-mode state machine.
//!
//! Two states: idle (submit creates) and editing (a pending note id is set and
//! submit updates it). Entering edit mode is only exited by a successful
//! submit, which calls [`NoteForm::clear`].

#[derive(Debug, PartialEq)]
pub enum Submission {
    Create {
        title: String,
        content: String,
    },
    Update {
        id: String,
        title: String,
        content: String,
    },
}

#[derive(Debug, Default)]
pub struct NoteForm {
    title: String,
    content: String,
    pending_edit: Option<String>,
}

impl NoteForm {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn content(&self) -> &str {
        &self.content
    }

    pub fn is_editing(&self) -> bool {
        self.pending_edit.is_some()
    }

    pub fn set_fields(&mut self, title: impl Into<String>, content: impl Into<String>) {
        self.title = title.into();
        self.content = content.into();
    }

    /// Populate the form with a note's current values and mark its id as the
    /// target of the next submit.
    pub fn begin_edit(
        &mut self,
        id: impl Into<String>,
        title: impl Into<String>,
        content: impl Into<String>,
    ) {
        self.pending_edit = Some(id.into());
        self.set_fields(title, content);
    }

    pub fn submit_label(&self) -> &'static str {
        if self.is_editing() {
            "Update note"
        } else {
            "Add note"
        }
    }

    /// Resolve the form into an action, or `None` when either field is empty
    /// so no request should be made.
    pub fn submission(&self) -> Option<Submission> {
        if self.title.is_empty() || self.content.is_empty() {
            return None;
        }

        Some(match &self.pending_edit {
            Some(id) => Submission::Update {
                id: id.clone(),
                title: self.title.clone(),
                content: self.content.clone(),
            },
            None => Submission::Create {
                title: self.title.clone(),
                content: self.content.clone(),
            },
        })
    }

    /// Empty the fields and return to idle. Called after a successful submit.
    pub fn clear(&mut self) {
        self.title.clear();
        self.content.clear();
        self.pending_edit = None;
    }
}
