// Copyright © SixtyFPS GmbH <info@slint.dev>
// SPDX-License-Identifier: MIT

mod counter_id_repository;
pub use counter_id_repository::*;

pub mod traits;

pub fn id_repo() -> impl traits::IdRepository + Clone {
    CounterIdRepository::default()
}
