// Copyright © SixtyFPS GmbH <info@slint.dev>
// SPDX-License-Identifier: MIT

use slint::*;
use std::rc::Rc;

use crate::{
    mvc::{TaskId, TaskListController, TaskListControllerCallbacks, TaskModel, remaining_label},
    ui,
};

pub fn create_controller_callbacks(view_handle: &ui::MainWindow) -> TaskListControllerCallbacks {
    TaskListControllerCallbacks {
        on_refresh: Box::new({
            let view_handle = view_handle.as_weak();

            move |task_list| {
                let Some(view) = view_handle.upgrade() else {
                    return;
                };

                let adapter = view.global::<ui::TaskListAdapter>();
                adapter.set_remaining_label(remaining_label(task_list.remaining_count()).into());
                adapter.set_tasks(Rc::new(MapModel::new(task_list, map_task_to_item)).into());
            }
        }),
    }
}

pub fn initialize_adapter(view_handle: &ui::MainWindow, controller: Rc<TaskListController>) {
    view_handle.global::<ui::TaskListAdapter>().on_toggle_task({
        let controller = controller.clone();

        move |id| {
            if let Some(id) = map_item_id(&id) {
                controller.toggle_task(id);
            }
        }
    });

    view_handle.global::<ui::TaskListAdapter>().on_remove_task({
        let controller = controller.clone();

        move |id| {
            if let Some(id) = map_item_id(&id) {
                controller.remove_task(id);
            }
        }
    });
}

// maps a TaskModel (data) to a TaskItem (ui)
fn map_task_to_item(task: TaskModel) -> ui::TaskItem {
    ui::TaskItem {
        id: task.id.to_string().into(),
        text: task.text.into(),
        completed: task.completed,
    }
}

// ids that do not parse cannot belong to any task
fn map_item_id(id: &SharedString) -> Option<TaskId> {
    id.parse().ok()
}
