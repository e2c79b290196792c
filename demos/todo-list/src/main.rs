// Copyright © SixtyFPS GmbH <info@slint.dev>
// SPDX-License-Identifier: MIT

use todo_list::AppConfig;

fn main() -> todo_list::Result<()> {
    todo_list::run(&AppConfig::default())
}
