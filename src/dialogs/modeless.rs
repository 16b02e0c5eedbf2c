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

/// A non-interactive note anchored near the lower-left corner of the screen.
///
/// It never takes part in a window stack: the host shows and hides it directly and it ignores
/// clicks.
pub struct ModelessWindow {
    panel: ElementHandle,
    title_bar: TitleBar,
    labels: Vec<ElementHandle>,
    theme: Theme,
}

impl ModelessWindow {
    pub fn new(title: &str, texts: &[&str], theme: &Theme) -> Self {
        let style = &theme.style;
        let panel = ElementHandle::panel();
        panel.set_pivot(Pivot::BottomLeft);
        panel.set_anchored_position(0.0, 1.0, vec2(20, -70));
        panel.set_color(style.modeless_color);
        panel.set_border(style.border, style.modeless_text_color);
        let mut window = Self { panel, title_bar: TitleBar::new(title, false, theme), labels: Vec::new(), theme: theme.clone() };
        window.set_texts(texts);
        window
    }

    pub fn panel(&self) -> ElementHandle { self.panel.clone() }

    pub fn title_bar(&self) -> &TitleBar { &self.title_bar }

    pub fn labels(&self) -> &[ElementHandle] { &self.labels }

    /// Replaces the text lines and resizes the panel to fit them under the title.
    pub fn set_texts(&mut self, texts: &[&str]) {
        let style = self.theme.style.clone();
        let (pad, item) = (style.padding, style.item_size);
        let n = texts.len() as i32;
        let height = style.title_size + item * n + pad * (n + 3);
        let widest = texts.iter().map(|t| self.theme.text_width(t, item)).max().unwrap_or(0);
        let width = widest.max(self.theme.text_width(&self.title_bar.title(), style.title_size)) + 2 * pad;
        self.panel.set_size(width, height);
        self.title_bar.relayout(&self.panel, vec2(0, 0), width, style.title_bar_height());

        self.release_texts();
        let top = style.title_bar_height() + pad;
        self.labels = texts
            .iter()
            .enumerate()
            .map(|(i, text)| {
                let label = ElementHandle::label(text, item);
                label.set_font_color(style.modeless_text_color);
                label.fit_text(self.theme.metrics.as_ref());
                label.set_parent(Some(&self.panel));
                label.set_position(vec2(pad, top + i as i32 * (item + pad)));
                label
            })
            .collect();
    }

    /// Replaces the texts of a window already shown to `viewer`.
    pub fn update_texts(&mut self, viewer: &mut dyn Viewer, texts: &[&str]) {
        for label in &self.labels {
            viewer.detach(label);
        }
        self.set_texts(texts);
        for label in &self.labels {
            viewer.attach(label);
        }
    }

    pub fn show(&self, viewer: &mut dyn Viewer) {
        viewer.attach(&self.panel);
        self.title_bar.show(viewer);
        for label in &self.labels {
            viewer.attach(label);
        }
    }

    pub fn hide(&self, viewer: &mut dyn Viewer) {
        for label in &self.labels {
            viewer.detach(label);
        }
        self.title_bar.hide(viewer);
        viewer.detach(&self.panel);
    }

    /// Hides the window from `viewer` and drops its elements.
    pub fn free(mut self, viewer: &mut dyn Viewer) {
        self.hide(viewer);
        self.release_texts();
        self.title_bar.free();
    }

    fn release_texts(&mut self) {
        for label in self.labels.drain(..) {
            label.set_parent(None);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn panel_fits_title_and_lines() {
        let theme = Theme::default();
        let w = ModelessWindow::new("Status", &["speed 12", "a much longer status line"], &theme);
        let size = w.panel().size();
        // 25 chars at 7.5 px, wider than the 6 char title at 9 px
        assert_eq!(size.width, 187 + 12);
        assert_eq!(size.height, 18 + 30 + 6 * 5);
        let ys: Vec<i32> = w.labels().iter().map(|l| l.frame().y).collect();
        assert_eq!(ys, vec![36, 57]);
        assert!(w.labels().iter().all(|l| !l.is_clickable()));
        assert!(w.title_bar().close_glyph().is_none());
        assert_eq!(w.panel().pivot(), Pivot::BottomLeft);
    }

    #[test]
    fn updating_texts_swaps_the_attached_labels() {
        let theme = Theme::default();
        let mut viewer = HeadlessViewer::new(1);
        let mut w = ModelessWindow::new("Status", &["one"], &theme);
        w.show(&mut viewer);
        let old = w.labels()[0].clone();
        assert_eq!(viewer.attached().len(), 4);
        w.update_texts(&mut viewer, &["two", "three"]);
        assert!(!viewer.is_attached(&old));
        assert_eq!(viewer.attached().len(), 5);
        w.free(&mut viewer);
        assert!(viewer.attached().is_empty());
    }
}
