// Copyright © SixtyFPS GmbH <info@slint.dev>
// SPDX-License-Identifier: MIT

use std::{cell::RefCell, rc::Rc};

use crate::{
    Observers,
    mvc::{TaskId, TaskListModel, TodoModel, traits::IdRepository},
};

/// Owns the todo state and tells its subscribers about every change.
///
/// Each operation derives a new [`TodoModel`] from the current one. Subscribers only hear
/// about it when the new model differs from the old one.
pub struct TaskStore {
    ids: Rc<dyn IdRepository>,
    model: RefCell<TodoModel>,
    observers: Observers<TodoModel>,
}

impl TaskStore {
    pub fn new(ids: impl IdRepository + 'static) -> Rc<Self> {
        Rc::new(Self {
            ids: Rc::new(ids),
            model: Default::default(),
            observers: Default::default(),
        })
    }

    pub fn model(&self) -> TodoModel {
        self.model.borrow().clone()
    }

    pub fn tasks(&self) -> TaskListModel {
        self.model.borrow().tasks.clone()
    }

    pub fn draft(&self) -> String {
        self.model.borrow().draft.clone()
    }

    pub fn remaining_count(&self) -> usize {
        self.model.borrow().tasks.remaining_count()
    }

    pub fn subscribe(&self, observer: impl Fn(&TodoModel) + 'static) {
        self.observers.subscribe(observer);
    }

    pub fn set_draft(&self, text: &str) {
        log::trace!("draft: {text:?}");

        let next = self.model.borrow().with_draft(text);
        self.commit(next);
    }

    /// Turns the draft into a new task. A blank draft is left as it is.
    pub fn add_task(&self) -> Option<TaskId> {
        if self.model.borrow().pending_text().is_none() {
            return None;
        }

        let id = self.ids.next_id();
        let next = self.model.borrow().with_submitted_draft(id)?;

        log::debug!("added task {id}");
        self.commit(next);

        Some(id)
    }

    pub fn toggle_task(&self, id: TaskId) {
        let next = self.model.borrow().with_toggled(id);

        if self.commit(next) {
            log::debug!("toggled task {id}");
        }
    }

    pub fn remove_task(&self, id: TaskId) {
        let next = self.model.borrow().without(id);

        if self.commit(next) {
            log::debug!("removed task {id}");
        }
    }

    // Returns whether the model changed.
    fn commit(&self, next: TodoModel) -> bool {
        if *self.model.borrow() == next {
            return false;
        }

        self.model.replace(next.clone());
        self.observers.notify(&next);

        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mvc::CounterIdRepository;
    use std::cell::Cell;

    fn test_store() -> Rc<TaskStore> {
        TaskStore::new(CounterIdRepository::default())
    }

    fn add(store: &TaskStore, text: &str) -> TaskId {
        store.set_draft(text);
        store.add_task().unwrap()
    }

    #[test]
    fn test_starts_empty() {
        let store = test_store();

        assert!(store.tasks().is_empty());
        assert_eq!(store.draft(), "");
        assert_eq!(store.remaining_count(), 0);
    }

    #[test]
    fn test_set_draft_is_verbatim() {
        let store = test_store();

        store.set_draft("  Buy");
        assert_eq!(store.draft(), "  Buy");
        assert!(store.tasks().is_empty());
    }

    #[test]
    fn test_add_task() {
        let store = test_store();
        store.set_draft("  Buy milk  ");

        let id = store.add_task().unwrap();
        let tasks = store.tasks();

        assert_eq!(tasks.len(), 1);
        assert_eq!(tasks.get(id).unwrap().text, "Buy milk");
        assert!(!tasks.get(id).unwrap().completed);
        assert_eq!(store.draft(), "");
    }

    #[test]
    fn test_add_blank_task() {
        let store = test_store();
        store.set_draft("   ");

        assert_eq!(store.add_task(), None);
        assert!(store.tasks().is_empty());
        assert_eq!(store.draft(), "   ");
    }

    #[test]
    fn test_ids_are_unique() {
        let store = test_store();

        let first = add(&store, "Item 1");
        store.remove_task(first);
        let second = add(&store, "Item 1");

        assert_ne!(first, second);
    }

    #[test]
    fn test_toggle_and_remove() {
        let store = test_store();
        let first = add(&store, "Item 1");
        let second = add(&store, "Item 2");

        store.toggle_task(first);
        assert!(store.tasks().get(first).unwrap().completed);
        assert_eq!(store.remaining_count(), 1);

        store.remove_task(second);
        assert_eq!(store.tasks().len(), 1);
        assert_eq!(store.remaining_count(), 0);
    }

    #[test]
    fn test_subscribers_see_changes_only() {
        let store = test_store();
        let notified = Rc::new(Cell::new(0));

        store.subscribe({
            let notified = notified.clone();
            move |_| notified.set(notified.get() + 1)
        });

        store.set_draft("Item 1");
        assert_eq!(notified.get(), 1);

        store.set_draft("Item 1");
        assert_eq!(notified.get(), 1);

        let id = store.add_task().unwrap();
        assert_eq!(notified.get(), 2);

        store.add_task();
        store.toggle_task(TaskId::new(99));
        store.remove_task(TaskId::new(99));
        assert_eq!(notified.get(), 2);

        store.toggle_task(id);
        store.remove_task(id);
        assert_eq!(notified.get(), 4);
    }

    #[test]
    fn test_subscriber_receives_new_model() {
        let store = test_store();
        let seen = Rc::new(RefCell::new(TodoModel::default()));

        store.subscribe({
            let seen = seen.clone();
            move |model| *seen.borrow_mut() = model.clone()
        });

        add(&store, "Item 1");

        assert_eq!(*seen.borrow(), store.model());
    }
}
