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
use std::time::Duration;

/// Payload of a window notification.
#[derive(Clone)]
pub enum EventData {
    /// Data stored with the clicked entry.
    Item(ItemData),
    /// Text committed in a text field.
    Text(String),
}

impl EventData {
    pub fn as_text(&self) -> Option<&str> {
        match self {
            EventData::Text(t) => Some(t),
            EventData::Item(_) => None,
        }
    }

    pub fn as_item(&self) -> Option<&ItemData> {
        match self {
            EventData::Item(d) => Some(d),
            EventData::Text(_) => None,
        }
    }
}

/// What a callback can reach while it handles a notification.
pub struct EventCtx<'a> {
    /// The stack the window lives in.
    pub stack: &'a mut WindowStack,
    /// The viewer that caused the event.
    pub viewer: &'a mut dyn Viewer,
    /// The window that raised the event. It may already be freed.
    pub window: WindowId,
}

impl<'a> EventCtx<'a> {
    /// Pops the window that raised the event.
    pub fn pop(&mut self) -> Result<(), UiError> { self.stack.pop(self.window, self.viewer) }

    /// Opens `next` over the window that raised the event.
    pub fn push(&mut self, next: ModalWindow) -> Result<WindowId, UiError> {
        let id = self.stack.insert(next);
        self.stack.push(self.window, self.viewer, id)?;
        Ok(id)
    }

    /// Replaces the window that raised the event with `next`.
    pub fn poppush(&mut self, next: ModalWindow) -> Result<WindowId, UiError> {
        let id = self.stack.insert(next);
        self.stack.poppush(self.window, self.viewer, id)?;
        Ok(id)
    }

    /// Shows a new, unlinked window to the same viewer.
    pub fn open(&mut self, window: ModalWindow) -> Result<WindowId, UiError> {
        let id = self.stack.insert(window);
        self.stack.show(id, self.viewer)?;
        Ok(id)
    }
}

/// Receives click and text notifications of a window.
pub trait EventHandler {
    /// `id` is the entry id, [`OK_ID`] or [`ABORT_ID`]; `data` is `None` for clicks on text fields.
    fn on_event(&mut self, ctx: &mut EventCtx<'_>, id: i32, data: Option<EventData>);
}

impl<F> EventHandler for F
where
    F: FnMut(&mut EventCtx<'_>, i32, Option<EventData>),
{
    fn on_event(&mut self, ctx: &mut EventCtx<'_>, id: i32, data: Option<EventData>) { self(ctx, id, data) }
}

/// Shared, mutable event handler.
pub type Callback = Rc<RefCell<dyn EventHandler>>;

/// Wraps a closure into a [`Callback`].
pub fn callback<F>(f: F) -> Callback
where
    F: FnMut(&mut EventCtx<'_>, i32, Option<EventData>) + 'static,
{
    Rc::new(RefCell::new(f))
}

/// A framed overlay: a title bar above a root container.
///
/// The window itself only knows its geometry and content; showing, stacking and event routing
/// go through [`WindowStack`].
pub struct ModalWindow {
    frame: ElementHandle,
    title_bar: TitleBar,
    root: ContainerHandle,
    callback: Option<Callback>,
    auto_close: bool,
    auto_dismiss: Option<Duration>,
    border: i32,
}

impl ModalWindow {
    /// Creates a closable window with an empty root container.
    pub fn new(title: &str, kind: LayoutKind, callback: Option<Callback>, theme: &Theme) -> Self {
        let style = &theme.style;
        let frame = ElementHandle::panel();
        frame.set_color(style.panel_color);
        frame.set_border(style.border, style.border_color);
        frame.set_pivot(Pivot::Center);
        frame.set_relative_position(0.5, 0.5);

        let root = ContainerHandle::new(kind, LayoutFlags::H_LEFT | LayoutFlags::V_TOP, theme);
        root.set_margin(style.padding);
        root.panel().set_parent(Some(&frame));

        Self {
            frame,
            title_bar: TitleBar::new(title, true, theme),
            root,
            callback,
            auto_close: false,
            auto_dismiss: None,
            border: style.border,
        }
    }

    /// The outer panel, centred on the viewer's screen.
    pub fn frame(&self) -> ElementHandle { self.frame.clone() }

    pub fn title_bar(&self) -> &TitleBar { &self.title_bar }

    /// The container holding the window content.
    pub fn root(&self) -> ContainerHandle { self.root.clone() }

    /// Appends an element to the root container.
    pub fn add(&self, element: &ElementHandle, id: Option<i32>, data: Option<ItemData>) { self.root.add(element, id, data) }

    pub fn remove(&self, element: &ElementHandle) { self.root.remove(element) }

    /// Id of the entry holding `element`, anywhere below the root.
    pub fn find_id(&self, element: &ElementHandle) -> Option<i32> { self.root.find_id(element) }

    pub fn callback(&self) -> Option<Callback> { self.callback.clone() }

    pub fn set_callback(&mut self, callback: Option<Callback>) { self.callback = callback }

    /// Whether selecting any entry closes the window.
    pub fn auto_close(&self) -> bool { self.auto_close }

    pub fn set_auto_close(&mut self, auto_close: bool) { self.auto_close = auto_close }

    /// Delay after which a shown window pops itself.
    pub fn auto_dismiss(&self) -> Option<Duration> { self.auto_dismiss }

    pub fn set_auto_dismiss(&mut self, delay: Option<Duration>) { self.auto_dismiss = delay }

    pub fn set_margin(&self, margin: i32) { self.root.set_margin(margin) }

    pub fn set_padding(&self, padding: i32) { self.root.set_padding(padding) }

    /// Sizes the root at least as wide as the title, then wraps the frame around both.
    pub fn layout(&self) -> Dimensioni {
        let b = self.border;
        let title_h = self.title_bar.height();
        self.root.layout(self.title_bar.min_width(), 0);
        let inner = self.root.size();
        let size = Dimensioni::new(inner.width + 2 * b, title_h + inner.height + b);
        self.frame.set_size(size.width, size.height);
        self.root.panel().set_position(vec2(b, title_h));
        self.title_bar.relayout(&self.frame, vec2(b, b), size.width - 2 * b, title_h - b);
        size
    }

    pub(crate) fn show_to(&self, viewer: &mut dyn Viewer) {
        self.layout();
        viewer.attach(&self.frame);
        self.title_bar.show(viewer);
        self.root.show(viewer);
    }

    pub(crate) fn hide_from(&self, viewer: &mut dyn Viewer) {
        self.title_bar.hide(viewer);
        self.root.hide(viewer);
        viewer.detach(&self.frame);
    }

    pub(crate) fn free(&self) {
        self.title_bar.free();
        self.root.free();
        self.root.panel().set_parent(None);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn frame_wraps_title_and_root() {
        let theme = Theme::default();
        let win = ModalWindow::new("Settings", LayoutKind::Stacked, None, &theme);
        win.add(&ElementHandle::text_field("", 300, 23), Some(1), None);
        let size = win.layout();
        // root: 300 wide field with a margin of 6 on both sides
        assert_eq!(win.root().size().width, 312);
        assert_eq!(win.root().size().height, 35);
        assert_eq!((size.width, size.height), (316, 30 + 35 + 2));
        let bar = win.title_bar().panel().frame();
        assert_eq!((bar.x, bar.y, bar.width, bar.height), (2, 2, 312, 28));
        let root = win.root().panel().frame();
        assert_eq!((root.x, root.y), (2, 30));
    }

    #[test]
    fn narrow_content_grows_to_the_title() {
        let theme = Theme::default();
        let win = ModalWindow::new("A rather long title", LayoutKind::Stacked, None, &theme);
        win.add(&ElementHandle::label("ok", 15), Some(OK_ID), None);
        win.layout();
        assert_eq!(win.root().size().width, win.title_bar().min_width());
    }

    #[test]
    fn closures_are_handlers() {
        let seen = Rc::new(RefCell::new(Vec::new()));
        let sink = seen.clone();
        let cb = callback(move |_ctx, id, data| sink.borrow_mut().push((id, data.is_some())));
        let mut stack = WindowStack::new();
        let mut viewer = HeadlessViewer::new(3);
        let window = stack.insert(ModalWindow::new("t", LayoutKind::Stacked, None, &Theme::default()));
        let mut ctx = EventCtx { stack: &mut stack, viewer: &mut viewer, window };
        cb.borrow_mut().on_event(&mut ctx, 5, Some(EventData::Text("x".into())));
        assert_eq!(*seen.borrow(), vec![(5, true)]);
    }
}
