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
use crate::error::UiError;

/// A paged list of text items. Selecting an item closes the menu unless auto-close is turned off.
pub struct Menu {
    window: ModalWindow,
}

implement_modal!(Menu);

impl Menu {
    pub fn new(title: &str, callback: Option<Callback>, theme: &Theme) -> Self { Self::with_auto_close(title, callback, true, theme) }

    pub fn with_auto_close(title: &str, callback: Option<Callback>, auto_close: bool, theme: &Theme) -> Self {
        let mut window = ModalWindow::new(title, LayoutKind::Stacked, callback, theme);
        window.root().set_max_visible_rows(theme.style.menu_page_rows as i32);
        window.set_auto_close(auto_close);
        Self { window }
    }

    /// Appends an item and returns its index.
    pub fn add_item(&self, text: &str, id: Option<i32>, data: Option<ItemData>) -> usize {
        let root = self.window.root();
        root.add(&ElementHandle::label(text, root.theme().style.item_size), id, data);
        root.with(|c| c.entries().len()).saturating_sub(1)
    }

    /// Removes the item at `index`.
    pub fn remove_item(&self, index: usize) -> Result<usize, UiError> { self.window.root().remove_at(index) }

    /// Removes the first item showing `text` and returns its former index.
    pub fn remove_item_by_text(&self, text: &str) -> Result<usize, UiError> {
        let root = self.window.root();
        let index = root.with(|c| c.entries().iter().position(|e| e.as_ref().map(|e| e.child.element().text() == text).unwrap_or(false)));
        match index {
            Some(index) => root.remove_at(index),
            None => Err(UiError::ItemNotFound(text.to_string())),
        }
    }

    pub fn len(&self) -> usize { self.window.root().len() }

    pub fn is_empty(&self) -> bool { self.len() == 0 }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn menu(n: usize) -> Menu {
        let m = Menu::new("Go to", None, &Theme::default());
        for i in 0..n {
            assert_eq!(m.add_item(&format!("place {}", i), Some(i as i32 + 1), None), i);
        }
        m
    }

    #[test]
    fn pages_after_twelve_rows() {
        let m = menu(15);
        assert!(m.auto_close());
        assert_eq!(m.root().max_visible_rows(), Some(12));
        let hidden = m.root().with(|c| c.entries().iter().flatten().filter(|e| !e.child.element().is_visible()).count());
        assert_eq!(hidden, 3);
    }

    #[test]
    fn remove_by_index_and_text() {
        let m = menu(4);
        assert_eq!(m.remove_item_by_text("place 2").ok(), Some(2));
        assert_eq!(m.len(), 3);
        assert!(matches!(m.remove_item_by_text("place 2"), Err(UiError::ItemNotFound(t)) if t == "place 2"));
        assert!(matches!(m.remove_item(9), Err(UiError::InvalidParameter(_))));
        assert_eq!(m.remove_item(0).ok(), Some(0));
        assert_eq!(m.len(), 2);
    }

    #[test]
    fn selection_closes_the_menu() {
        let picked = Rc::new(RefCell::new(None));
        let sink = picked.clone();
        let m = Menu::new("Go to", Some(callback(move |_ctx, id, _| *sink.borrow_mut() = Some(id))), &Theme::default());
        let item = ElementHandle::label("home", 15);
        m.add(&item, Some(5), None);
        let mut stack = WindowStack::new();
        let mut viewer = HeadlessViewer::new(1);
        let id = stack.insert(m.into_window());
        stack.show(id, &mut viewer).unwrap();
        assert!(stack.handle_click(&mut viewer, &item));
        assert_eq!(*picked.borrow(), Some(5));
        assert_eq!(stack.state(id), WindowState::Freed);
    }
}
