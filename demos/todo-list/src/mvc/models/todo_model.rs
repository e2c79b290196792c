// Copyright © SixtyFPS GmbH <info@slint.dev>
// SPDX-License-Identifier: MIT

use super::{TaskId, TaskListModel, TaskModel};

/// Everything the todo view shows: the task list and the not yet submitted draft.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct TodoModel {
    pub tasks: TaskListModel,

    // kept verbatim, trimming happens on submit
    pub draft: String,
}

impl TodoModel {
    /// The text a submit would turn into a task, `None` if the draft is blank.
    pub fn pending_text(&self) -> Option<&str> {
        Some(self.draft.trim()).filter(|text| !text.is_empty())
    }

    pub fn with_draft(&self, draft: &str) -> Self {
        Self { tasks: self.tasks.clone(), draft: draft.into() }
    }

    /// Commits the draft as a new task with the given id and clears the draft.
    ///
    /// Returns `None` when the draft is blank.
    pub fn with_submitted_draft(&self, id: TaskId) -> Option<Self> {
        let text = self.pending_text()?;

        Some(Self { tasks: self.tasks.with_task(TaskModel::new(id, text)), draft: String::new() })
    }

    pub fn with_toggled(&self, id: TaskId) -> Self {
        Self { tasks: self.tasks.with_toggled(id), draft: self.draft.clone() }
    }

    pub fn without(&self, id: TaskId) -> Self {
        Self { tasks: self.tasks.without(id), draft: self.draft.clone() }
    }
}
