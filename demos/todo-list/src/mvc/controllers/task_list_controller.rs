// Copyright © SixtyFPS GmbH <info@slint.dev>
// SPDX-License-Identifier: MIT

use std::rc::Rc;

use crate::mvc::{TaskId, TaskListModel, TaskStore};

pub struct TaskListControllerCallbacks {
    pub on_refresh: Box<dyn Fn(TaskListModel)>,
}

/// Drives the task rows and the remaining counter.
pub struct TaskListController {
    store: Rc<TaskStore>,
    callbacks: TaskListControllerCallbacks,
}

impl TaskListController {
    pub fn new(store: Rc<TaskStore>, callbacks: TaskListControllerCallbacks) -> Rc<Self> {
        let controller = Rc::new(Self { store, callbacks });

        controller.store.subscribe({
            let controller = Rc::downgrade(&controller);

            move |_| {
                if let Some(controller) = controller.upgrade() {
                    controller.refresh();
                }
            }
        });

        controller.refresh();
        controller
    }

    pub fn toggle_task(&self, id: TaskId) {
        self.store.toggle_task(id)
    }

    pub fn remove_task(&self, id: TaskId) {
        self.store.remove_task(id)
    }

    pub fn tasks(&self) -> TaskListModel {
        self.store.tasks()
    }

    pub fn remaining_count(&self) -> usize {
        self.store.remaining_count()
    }

    pub fn remaining_label(&self) -> String {
        remaining_label(self.remaining_count())
    }

    fn refresh(&self) {
        (self.callbacks.on_refresh)(self.store.tasks());
    }
}

/// `"1 task remaining"`, `"3 tasks remaining"`.
pub fn remaining_label(remaining: usize) -> String {
    let noun = if remaining == 1 { "task" } else { "tasks" };
    format!("{remaining} {noun} remaining")
}

#[cfg(test)]
mod tests {
    use std::cell::Cell;

    use super::*;
    use crate::mvc::{CounterIdRepository, TaskModel};
    use ::slint::Model;

    fn test_store() -> Rc<TaskStore> {
        let store = TaskStore::new(CounterIdRepository::default());

        for text in ["Item 1", "Item 2", "Item 3"] {
            store.set_draft(text);
            store.add_task();
        }

        store
    }

    fn test_controller(store: Rc<TaskStore>) -> Rc<TaskListController> {
        TaskListController::new(store, TaskListControllerCallbacks { on_refresh: Box::new(|_| {}) })
    }

    #[test]
    fn test_toggle_task() {
        let controller = test_controller(test_store());
        let id = TaskId::new(1);

        assert!(!controller.tasks().get(id).unwrap().completed);
        controller.toggle_task(id);
        assert!(controller.tasks().get(id).unwrap().completed);
        controller.toggle_task(id);
        assert!(!controller.tasks().get(id).unwrap().completed);
    }

    #[test]
    fn test_remove_task() {
        let controller = test_controller(test_store());
        let tasks = controller.tasks();

        controller.remove_task(TaskId::new(2));
        let remaining = controller.tasks();

        assert_eq!(remaining.row_count(), 2);
        assert_eq!(remaining.row_data(0), tasks.row_data(0));
        assert_eq!(remaining.row_data(1), tasks.row_data(2));

        controller.remove_task(TaskId::new(2));
        assert_eq!(controller.tasks(), remaining);
    }

    #[test]
    fn test_remaining_count() {
        let controller = test_controller(test_store());
        controller.toggle_task(TaskId::new(2));
        assert_eq!(controller.remaining_count(), 2);

        controller.toggle_task(TaskId::new(1));
        assert_eq!(controller.remaining_count(), 1);

        controller.remove_task(TaskId::new(2));
        assert_eq!(controller.remaining_count(), 1);
    }

    #[test]
    fn test_remaining_label() {
        assert_eq!(remaining_label(0), "0 tasks remaining");
        assert_eq!(remaining_label(1), "1 task remaining");
        assert_eq!(remaining_label(2), "2 tasks remaining");

        let controller = test_controller(test_store());
        assert_eq!(controller.remaining_label(), "3 tasks remaining");
    }

    #[test]
    fn test_refresh() {
        let refresh_count = Rc::new(Cell::new(0));
        let last_rows = Rc::new(Cell::new(0));

        let controller = TaskListController::new(
            test_store(),
            TaskListControllerCallbacks {
                on_refresh: Box::new({
                    let refresh_count = refresh_count.clone();
                    let last_rows = last_rows.clone();

                    move |tasks| {
                        refresh_count.set(refresh_count.get() + 1);
                        last_rows.set(tasks.row_count());
                    }
                }),
            },
        );

        assert_eq!(refresh_count.get(), 1);
        assert_eq!(last_rows.get(), 3);

        controller.remove_task(TaskId::new(1));
        assert_eq!(refresh_count.get(), 2);
        assert_eq!(last_rows.get(), 2);

        controller.remove_task(TaskId::new(99));
        assert_eq!(refresh_count.get(), 2);

        assert_eq!(
            controller.tasks().row_data(0),
            Some(TaskModel { id: TaskId::new(2), text: "Item 2".into(), completed: false })
        );
    }
}
