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
use tracing::warn;

/// A caption above a single-line text field.
///
/// Committing text pops the box and reports `(id, EventData::Text)` to the callback. Clicks on the
/// field only focus it.
pub struct InputBox {
    window: ModalWindow,
    field: ElementHandle,
}

implement_modal!(InputBox);

impl InputBox {
    pub fn new(title: &str, caption: &str, default_text: Option<&str>, id: i32, handler: Callback, theme: &Theme) -> Self {
        let style = &theme.style;
        let forward = callback(move |ctx, event, data| {
            let Some(EventData::Text(text)) = data.filter(|_| event == INPUT_ID) else { return };
            if let Err(e) = ctx.pop() {
                warn!("input box: {}", e);
            }
            match handler.try_borrow_mut() {
                Ok(mut h) => h.on_event(ctx, id, Some(EventData::Text(text))),
                Err(_) => warn!(id, "input box callback busy, text dropped"),
            };
        });
        let window = ModalWindow::new(title, LayoutKind::Stacked, Some(forward), theme);
        window.add(&ElementHandle::label(caption, style.item_size), None, None);
        let field = ElementHandle::text_field(default_text.unwrap_or(""), style.text_entry_width, style.text_entry_height);
        window.add(&field, Some(INPUT_ID), None);
        Self { window, field }
    }

    /// The text field the viewer types into.
    pub fn field(&self) -> ElementHandle { self.field.clone() }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn commit_pops_and_reports_the_dialog_id() {
        let theme = Theme::default();
        let seen = Rc::new(RefCell::new(Vec::new()));
        let sink = seen.clone();
        let cb = callback(move |ctx, id, data| sink.borrow_mut().push((id, data.and_then(|d| d.as_text().map(String::from)), ctx.stack.state(ctx.window))));
        let dlg = InputBox::new("Rename", "New name:", Some("old"), 77, cb, &theme);
        let field = dlg.field();
        assert_eq!(field.text(), "old");
        assert_eq!(field.width(), 300);
        assert!(field.with(|e| e.editable));

        let mut stack = WindowStack::new();
        let mut viewer = HeadlessViewer::new(1);
        let id = stack.insert(dlg.into_window());
        stack.show(id, &mut viewer).unwrap();

        assert!(stack.handle_click(&mut viewer, &field));
        assert!(seen.borrow().is_empty());
        assert_eq!(stack.state(id), WindowState::Shown);

        assert!(stack.handle_text_entry(&mut viewer, &field, "new"));
        assert_eq!(stack.state(id), WindowState::Freed);
        assert_eq!(*seen.borrow(), vec![(77, Some("new".to_string()), WindowState::Freed)]);
    }
}
