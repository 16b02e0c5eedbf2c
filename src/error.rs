//
// Copyright 2022-Present (c) Raja Lehtihet & Wael El Oraiby
//
// Redistribution and use in source and binary forms, with or without
// modification, are permitted provided that the following conditions are met:
//
// 1. Redistributions of source code must retain the above copyright notice,
// this list of conditions and the following disclaimer.
//
// 2. Redistributions in binary form must reproduce the above copyright notice,
// this list of conditions and the following disclaimer in the documentation
// and/or other materials provided with the distribution.
//
// 3. Neither the name of the copyright holder nor the names of its contributors
// may be used to endorse or promote products derived from this software without
// specific prior written permission.
//
// THIS SOFTWARE IS PROVIDED BY THE COPYRIGHT HOLDERS AND CONTRIBUTORS "AS IS"
// AND ANY EXPRESS OR IMPLIED WARRANTIES, INCLUDING, BUT NOT LIMITED TO, THE
// IMPLIED WARRANTIES OF MERCHANTABILITY AND FITNESS FOR A PARTICULAR PURPOSE
// ARE DISCLAIMED. IN NO EVENT SHALL THE COPYRIGHT HOLDER OR CONTRIBUTORS BE
// LIABLE FOR ANY DIRECT, INDIRECT, INCIDENTAL, SPECIAL, EXEMPLARY, OR
// CONSEQUENTIAL DAMAGES (INCLUDING, BUT NOT LIMITED TO, PROCUREMENT OF
// SUBSTITUTE GOODS OR SERVICES; LOSS OF USE, DATA, OR PROFITS; OR BUSINESS
// INTERRUPTION) HOWEVER CAUSED AND ON ANY THEORY OF LIABILITY, WHETHER IN
// CONTRACT, STRICT LIABILITY, OR TORT (INCLUDING NEGLIGENCE OR OTHERWISE)
// ARISING IN ANY WAY OUT OF THE USE OF THIS SOFTWARE, EVEN IF ADVISED OF THE
// POSSIBILITY OF SUCH DAMAGE.
//
use crate::StockIcon;
use thiserror::Error;

/// Recoverable failures reported by containers, widgets and the window stack.
///
/// None of these leave the widget tree in an inconsistent state; callers are free to ignore
/// them and carry on.
#[derive(Debug, Error)]
pub enum UiError {
    /// An index, state or parameter is outside its legal range.
    #[error("invalid parameter: {0}")]
    InvalidParameter(String),
    /// A search by text, id or index found nothing.
    #[error("item not found: {0}")]
    ItemNotFound(String),
    /// A stock icon could not be resolved to an asset.
    #[error("missing resource for stock icon {0:?}")]
    MissingResource(StockIcon),
    /// The window id is stale or was never issued by this stack.
    #[error("unknown or freed window")]
    UnknownWindow,
    /// The style configuration could not be parsed.
    #[error("invalid style configuration: {0}")]
    Config(#[from] toml::de::Error),
    /// A font could not be loaded for text measurement.
    #[error("font error: {0}")]
    Font(String),
}

impl UiError {
    /// Sentinel value hosts used to receive in place of this error.
    pub fn code(&self) -> i32 {
        match self {
            UiError::MissingResource(_) => -2,
            UiError::ItemNotFound(_) => -3,
            _ => -1,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn codes_match_legacy_sentinels() {
        assert_eq!(UiError::InvalidParameter("row".into()).code(), -1);
        assert_eq!(UiError::MissingResource(StockIcon::Cross).code(), -2);
        assert_eq!(UiError::ItemNotFound("Quit".into()).code(), -3);
        assert_eq!(UiError::UnknownWindow.code(), -1);
    }

    #[test]
    fn messages_name_the_offending_value() {
        let err = UiError::ItemNotFound("Quit".into());
        assert_eq!(err.to_string(), "item not found: Quit");
    }
}
