// Copyright © SixtyFPS GmbH <info@slint.dev>
// SPDX-License-Identifier: MIT

use slint::*;
use std::rc::Rc;

use crate::{
    mvc::{CreateTaskController, CreateTaskControllerCallbacks},
    ui,
};

pub fn create_controller_callbacks(view_handle: &ui::MainWindow) -> CreateTaskControllerCallbacks {
    CreateTaskControllerCallbacks {
        on_refresh: Box::new({
            let view_handle = view_handle.as_weak();

            move |draft| {
                let Some(view) = view_handle.upgrade() else {
                    return;
                };

                // the line edit already shows what the user typed
                let adapter = view.global::<ui::CreateTaskAdapter>();
                if adapter.get_draft() != draft.as_str() {
                    adapter.set_draft(draft.into());
                }
            }
        }),
    }
}

pub fn initialize_adapter(view_handle: &ui::MainWindow, controller: Rc<CreateTaskController>) {
    view_handle.global::<ui::CreateTaskAdapter>().on_draft_edited({
        let controller = controller.clone();

        move |text| {
            controller.set_draft(text.as_str());
        }
    });

    view_handle.global::<ui::CreateTaskAdapter>().on_submit({
        let controller = controller.clone();

        move || {
            controller.submit();
        }
    });
}
