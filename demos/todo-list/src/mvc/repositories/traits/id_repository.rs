// Copyright © SixtyFPS GmbH <info@slint.dev>
// SPDX-License-Identifier: MIT

use crate::mvc::TaskId;

/// Source of task ids.
///
/// Implementations must never hand out the same id twice.
pub trait IdRepository {
    fn next_id(&self) -> TaskId;
}
