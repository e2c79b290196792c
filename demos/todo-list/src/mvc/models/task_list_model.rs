// Copyright © SixtyFPS GmbH <info@slint.dev>
// SPDX-License-Identifier: MIT

use std::rc::Rc;

use slint::{Model, ModelTracker};

use super::{TaskId, TaskModel};

/// An immutable, ordered list of tasks.
///
/// Every operation returns a new list and leaves `self` untouched. Operations that do not
/// change anything hand back a list sharing the same storage, so comparing the result with
/// the original is cheap.
#[derive(Clone, Debug, Default)]
pub struct TaskListModel {
    tasks: Rc<[TaskModel]>,
}

impl TaskListModel {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.tasks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &TaskModel> {
        self.tasks.iter()
    }

    pub fn get(&self, id: TaskId) -> Option<&TaskModel> {
        self.tasks.iter().find(|task| task.id == id)
    }

    pub fn contains(&self, id: TaskId) -> bool {
        self.get(id).is_some()
    }

    /// Number of tasks that are not completed yet.
    pub fn remaining_count(&self) -> usize {
        self.tasks.iter().filter(|task| !task.completed).count()
    }

    /// Appends `task` at the tail.
    pub fn with_task(&self, task: TaskModel) -> Self {
        debug_assert!(!self.contains(task.id), "duplicate task id {}", task.id);

        self.tasks.iter().cloned().chain(std::iter::once(task)).collect()
    }

    /// Flips the completion flag of the task with the given id.
    pub fn with_toggled(&self, id: TaskId) -> Self {
        if !self.contains(id) {
            return self.clone();
        }

        self.tasks
            .iter()
            .map(|task| if task.id == id { task.toggled() } else { task.clone() })
            .collect()
    }

    /// Drops the task with the given id, keeping the order of the others.
    pub fn without(&self, id: TaskId) -> Self {
        if !self.contains(id) {
            return self.clone();
        }

        self.tasks.iter().filter(|task| task.id != id).cloned().collect()
    }
}

impl FromIterator<TaskModel> for TaskListModel {
    fn from_iter<I: IntoIterator<Item = TaskModel>>(iter: I) -> Self {
        Self { tasks: iter.into_iter().collect() }
    }
}

impl From<Vec<TaskModel>> for TaskListModel {
    fn from(tasks: Vec<TaskModel>) -> Self {
        Self { tasks: tasks.into() }
    }
}

impl PartialEq for TaskListModel {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.tasks, &other.tasks) || self.tasks == other.tasks
    }
}

impl Eq for TaskListModel {}

// Read-only: a changed list is published as a new model, so there is nothing to track.
impl Model for TaskListModel {
    type Data = TaskModel;

    fn row_count(&self) -> usize {
        self.tasks.len()
    }

    fn row_data(&self, row: usize) -> Option<Self::Data> {
        self.tasks.get(row).cloned()
    }

    fn model_tracker(&self) -> &dyn ModelTracker {
        &()
    }
}
