// Copyright © SixtyFPS GmbH <info@slint.dev>
// SPDX-License-Identifier: MIT

use std::{cell::Cell, rc::Rc};

use super::traits;
use crate::mvc::TaskId;

/// Hands out ids from a monotonic counter, starting at 1.
///
/// Clones share the counter.
#[derive(Clone)]
pub struct CounterIdRepository {
    last: Rc<Cell<u64>>,
}

impl CounterIdRepository {
    /// Continues after `last`, the next id is `last + 1`.
    pub fn starting_after(last: u64) -> Self {
        Self { last: Rc::new(Cell::new(last)) }
    }
}

impl Default for CounterIdRepository {
    fn default() -> Self {
        Self::starting_after(0)
    }
}

impl traits::IdRepository for CounterIdRepository {
    fn next_id(&self) -> TaskId {
        let next = self.last.get().checked_add(1).expect("task id space exhausted");
        self.last.set(next);
        TaskId::new(next)
    }
}
