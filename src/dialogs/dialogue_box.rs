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

/// A modal window whose content is built from nested containers.
pub struct DialogueBox {
    window: ModalWindow,
}

implement_modal!(DialogueBox);

impl DialogueBox {
    pub fn new(title: &str, kind: LayoutKind, callback: Option<Callback>, theme: &Theme) -> Self { Self { window: ModalWindow::new(title, kind, callback, theme) } }

    /// Appends a side-by-side or stacked container to the root and returns it.
    pub fn add_container(&self, kind: LayoutKind, flags: LayoutFlags) -> ContainerHandle { self.window.root().add_new_container(kind, flags) }

    /// Appends a `cols` x `rows` grid to the root and returns it.
    pub fn add_grid(&self, cols: usize, rows: usize, flags: LayoutFlags) -> ContainerHandle {
        let root = self.window.root();
        let grid = ContainerHandle::new(LayoutKind::Grid { cols, rows }, flags, &root.theme());
        root.add_container(&grid, None, None);
        grid
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn nested_rows_route_to_the_dialog() {
        let theme = Theme::default();
        let dlg = DialogueBox::new("Trade", LayoutKind::Stacked, None, &theme);
        let row = dlg.add_container(LayoutKind::SideBySide, LayoutFlags::H_SPREAD);
        let grid = dlg.add_grid(2, 2, LayoutFlags::default());
        let ok = ElementHandle::label("OK", 15);
        let qty = ElementHandle::text_field("1", 40, 23);
        row.add(&ok, Some(OK_ID), None);
        grid.add(&ElementHandle::label("Qty", 15), None, None);
        grid.add(&qty, Some(12), None);
        assert!(matches!(grid.with(|c| c.kind()), LayoutKind::Grid { cols: 2, rows: 2 }));
        assert_eq!(dlg.find_id(&ok), Some(OK_ID));
        assert_eq!(dlg.find_id(&qty), Some(12));

        let size = dlg.layout();
        assert!(size.width >= dlg.title_bar().min_width());
        assert_eq!(dlg.root().len(), 2);
    }
}
