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

/// Header strip of a window: a title and an optional close glyph.
pub struct TitleBar {
    panel: ElementHandle,
    title: ElementHandle,
    close: Option<ElementHandle>,
    min_width: i32,
    height: i32,
    padding: i32,
    button: i32,
}

impl TitleBar {
    pub fn new(title: &str, closable: bool, theme: &Theme) -> Self {
        let style = &theme.style;
        let panel = ElementHandle::panel();
        panel.set_color(style.title_bar_color);

        let label = ElementHandle::label(title, style.title_size);
        label.set_font_color(style.title_color);
        label.fit_text(theme.metrics.as_ref());
        label.set_parent(Some(&panel));
        label.set_position(vec2(style.padding, style.padding));

        let close = closable.then(|| {
            let glyph = ElementHandle::image(StockIcon::Cross, style.button_size);
            glyph.set_clickable(true);
            glyph.set_parent(Some(&panel));
            glyph
        });

        let min_width = theme.text_width(title, style.title_size) + if closable { style.button_size + 3 * style.padding } else { style.padding };
        let height = style.title_bar_height();
        panel.set_size(min_width, height);
        Self { panel, title: label, close, min_width, height, padding: style.padding, button: style.button_size }
    }

    /// Narrowest width showing the whole title and the close glyph.
    pub fn min_width(&self) -> i32 { self.min_width }

    /// Height the window reserves for the bar.
    pub fn height(&self) -> i32 { self.height }

    pub fn panel(&self) -> ElementHandle { self.panel.clone() }

    pub fn title(&self) -> String { self.title.text() }

    pub fn is_close_glyph(&self, element: &ElementHandle) -> bool { self.close.as_ref().map(|c| c.ptr_eq(element)).unwrap_or(false) }

    pub fn close_glyph(&self) -> Option<ElementHandle> { self.close.clone() }

    /// Places the bar at `origin` inside `parent` and right-aligns the close glyph.
    pub fn relayout(&self, parent: &ElementHandle, origin: Vec2i, width: i32, height: i32) {
        self.panel.set_parent(Some(parent));
        self.panel.set_position(origin);
        self.panel.set_size(width, height);
        if let Some(close) = &self.close {
            close.set_position(vec2(width - self.padding - self.button, (height - self.button) / 2));
        }
    }

    pub fn show(&self, viewer: &mut dyn Viewer) {
        viewer.attach(&self.panel);
        viewer.attach(&self.title);
        if let Some(close) = &self.close {
            viewer.attach(close);
        }
    }

    pub fn hide(&self, viewer: &mut dyn Viewer) {
        if let Some(close) = &self.close {
            viewer.detach(close);
        }
        viewer.detach(&self.title);
        viewer.detach(&self.panel);
    }

    pub(crate) fn free(&self) {
        self.title.set_parent(None);
        if let Some(close) = &self.close {
            close.set_parent(None);
        }
        self.panel.set_parent(None);
    }
}
