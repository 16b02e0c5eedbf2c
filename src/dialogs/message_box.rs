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
use super::*;
use std::time::Duration;

/// Lines of text in a window, optionally dismissed after a delay.
///
/// Only the close glyph reacts to clicks; closing the box early cancels the pending dismissal.
pub struct MessageBox {
    window: ModalWindow,
}

implement_modal!(MessageBox);

impl MessageBox {
    pub fn new(title: &str, texts: &[&str], delay: Option<Duration>, theme: &Theme) -> Self {
        let mut window = ModalWindow::new(title, LayoutKind::Stacked, None, theme);
        for text in texts {
            window.add(&ElementHandle::label(text, theme.style.item_size), None, None);
        }
        window.set_auto_dismiss(delay.filter(|d| !d.is_zero()));
        Self { window }
    }

    /// A single line box.
    pub fn single(title: &str, text: &str, delay: Option<Duration>, theme: &Theme) -> Self { Self::new(title, &[text], delay, theme) }
}
