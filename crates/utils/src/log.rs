// This file is part of Feecast.
//
// Feecast is free software: you can redistribute it and/or modify it under the
// terms of the GNU Lesser General Public License as published by the Free Software
// Foundation, either version 3 of the License, or (at your option) any later version.
//
// Feecast is distributed in the hope that it will be useful, but WITHOUT ANY WARRANTY;
// without even the implied warranty of MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE.
// See the GNU General Public License for more details.
//
// You should have received a copy of the GNU General Public License along with Feecast.
// If not, see https://www.gnu.org/licenses/.

//! Helpers for logging errors that are otherwise dropped

use std::fmt::{Debug, Display};

use tracing::Level;

/// Trait for logging an error if there is one on a result-like object
pub trait LogOnError {
    /// This will log an error if there is one, but will preserve the original error type
    fn log_on_error<C>(self, context: C) -> Self
    where
        C: Display + Send + Sync + 'static;

    /// This will log at the given level if there is an error, but will preserve the original error type
    fn log_on_error_level<C>(self, level: Level, context: C) -> Self
    where
        C: Display + Send + Sync + 'static;
}

impl<T, E> LogOnError for Result<T, E>
where
    E: Debug,
{
    fn log_on_error<C>(self, context: C) -> Result<T, E>
    where
        C: Display + Send + Sync + 'static,
    {
        self.log_on_error_level(Level::ERROR, context)
    }

    fn log_on_error_level<C>(self, level: Level, context: C) -> Result<T, E>
    where
        C: Display + Send + Sync + 'static,
    {
        match self {
            Err(error) => {
                log_at_level(level, &format!("{context}: {error:?}"));
                Err(error)
            }
            _ => self,
        }
    }
}

fn log_at_level(level: Level, s: &str) {
    match level {
        Level::TRACE => tracing::trace!(s),
        Level::DEBUG => tracing::debug!(s),
        Level::INFO => tracing::info!(s),
        Level::WARN => tracing::warn!(s),
        Level::ERROR => tracing::error!(s),
    }
}
