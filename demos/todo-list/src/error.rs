// Copyright © SixtyFPS GmbH <info@slint.dev>
// SPDX-License-Identifier: MIT

#[derive(thiserror::Error, Debug)]
#[non_exhaustive]
pub enum Error {
    /// The window could not be created or the event loop failed.
    #[error("platform error: {0}")]
    Platform(#[from] slint::PlatformError),
    /// Logging was already set up by someone else.
    #[error("cannot install logger: {0}")]
    Logger(#[from] log::SetLoggerError),
}

pub type Result<T, E = Error> = std::result::Result<T, E>;
