// Copyright © SixtyFPS GmbH <info@slint.dev>
// SPDX-License-Identifier: MIT

use std::rc::Rc;

use crate::mvc::{TaskId, TaskStore};

pub struct CreateTaskControllerCallbacks {
    pub on_refresh: Box<dyn Fn(String)>,
}

/// Drives the input form: keeps the draft and submits it.
pub struct CreateTaskController {
    store: Rc<TaskStore>,
    callbacks: CreateTaskControllerCallbacks,
}

impl CreateTaskController {
    pub fn new(store: Rc<TaskStore>, callbacks: CreateTaskControllerCallbacks) -> Rc<Self> {
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

    pub fn draft(&self) -> String {
        self.store.draft()
    }

    pub fn set_draft(&self, text: &str) {
        self.store.set_draft(text)
    }

    pub fn submit(&self) -> Option<TaskId> {
        self.store.add_task()
    }

    fn refresh(&self) {
        (self.callbacks.on_refresh)(self.store.draft());
    }
}
