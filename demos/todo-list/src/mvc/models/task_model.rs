// Copyright © SixtyFPS GmbH <info@slint.dev>
// SPDX-License-Identifier: MIT

use std::{fmt, num::ParseIntError, str::FromStr};

/// Identifies a task for the lifetime of the store that created it.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TaskId(u64);

impl TaskId {
    pub const fn new(value: u64) -> Self {
        Self(value)
    }

    pub const fn get(self) -> u64 {
        self.0
    }
}

impl fmt::Display for TaskId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for TaskId {
    type Err = ParseIntError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.parse().map(Self)
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TaskModel {
    pub id: TaskId,

    // trimmed, never empty
    pub text: String,
    pub completed: bool,
}

impl TaskModel {
    pub fn new(id: TaskId, text: impl Into<String>) -> Self {
        Self { id, text: text.into(), completed: false }
    }

    pub fn toggled(&self) -> Self {
        Self { completed: !self.completed, ..self.clone() }
    }
}
