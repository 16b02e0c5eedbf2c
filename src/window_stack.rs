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
use crate::timer::{DismissRequest, DismissTimer};
use std::collections::HashSet;
use std::sync::mpsc::{self, Receiver, RecvTimeoutError, Sender};
use std::time::Duration;
use tracing::{debug, warn};

#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
/// Generational index of a window in a [`WindowStack`].
pub struct WindowId {
    index: u32,
    generation: u32,
}

impl WindowId {
    #[cfg(test)]
    pub(crate) fn dangling() -> Self { Self { index: u32::MAX, generation: 0 } }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
/// Lifecycle of a window.
pub enum WindowState {
    /// Not shown to any viewer.
    Hidden,
    /// Shown to at least one viewer.
    Shown,
    /// Popped or freed; the id is dead.
    Freed,
}

/// Host hook told when a window starts and stops needing input events.
///
/// `register` runs when the first viewer is shown the window, `unregister` when the last one
/// stops seeing it.
pub trait EventRegistry {
    fn register(&mut self, window: WindowId);
    fn unregister(&mut self, window: WindowId);
}

struct Record {
    window: ModalWindow,
    previous: Option<WindowId>,
    // viewers showing the window; it listens while this is non-empty
    shown_to: HashSet<ViewerKey>,
    timer: Option<DismissTimer>,
}

struct Slot {
    generation: u32,
    record: Option<Record>,
}

/// Owns modal windows and links them into per-viewer display stacks.
///
/// `push` hides a window under a new one, `pop` frees the top window and shows the one it covered.
/// Clicks and text commits reach a window's callback only while the window listens, that is
/// while at least one viewer is shown it.
pub struct WindowStack {
    slots: Vec<Slot>,
    vacant: Vec<u32>,
    dismiss_tx: Sender<DismissRequest>,
    dismiss_rx: Receiver<DismissRequest>,
    pending: Vec<DismissRequest>,
    next_token: u64,
    registry: Option<Box<dyn EventRegistry>>,
}

impl Default for WindowStack {
    fn default() -> Self { Self::new() }
}

impl WindowStack {
    pub fn new() -> Self {
        let (dismiss_tx, dismiss_rx) = mpsc::channel();
        Self { slots: Vec::new(), vacant: Vec::new(), dismiss_tx, dismiss_rx, pending: Vec::new(), next_token: 0, registry: None }
    }

    /// Installs the hook told about listening windows.
    pub fn set_registry(&mut self, registry: impl EventRegistry + 'static) { self.registry = Some(Box::new(registry)); }

    /// Takes ownership of `window`; it starts hidden.
    pub fn insert(&mut self, window: ModalWindow) -> WindowId {
        let record = Record { window, previous: None, shown_to: HashSet::new(), timer: None };
        match self.vacant.pop() {
            Some(index) => {
                let slot = &mut self.slots[index as usize];
                slot.record = Some(record);
                WindowId { index, generation: slot.generation }
            }
            None => {
                self.slots.push(Slot { generation: 0, record: Some(record) });
                WindowId { index: (self.slots.len() - 1) as u32, generation: 0 }
            }
        }
    }

    fn record(&self, id: WindowId) -> Option<&Record> {
        self.slots.get(id.index as usize).filter(|s| s.generation == id.generation).and_then(|s| s.record.as_ref())
    }

    fn record_mut(&mut self, id: WindowId) -> Result<&mut Record, UiError> {
        self.slots
            .get_mut(id.index as usize)
            .filter(|s| s.generation == id.generation)
            .and_then(|s| s.record.as_mut())
            .ok_or(UiError::UnknownWindow)
    }

    pub fn get(&self, id: WindowId) -> Option<&ModalWindow> { self.record(id).map(|r| &r.window) }

    pub fn get_mut(&mut self, id: WindowId) -> Option<&mut ModalWindow> { self.record_mut(id).ok().map(|r| &mut r.window) }

    pub fn state(&self, id: WindowId) -> WindowState {
        match self.record(id) {
            None => WindowState::Freed,
            Some(r) if r.shown_to.is_empty() => WindowState::Hidden,
            Some(_) => WindowState::Shown,
        }
    }

    pub fn is_shown_to(&self, id: WindowId, viewer: ViewerKey) -> bool { self.record(id).map(|r| r.shown_to.contains(&viewer)).unwrap_or(false) }

    /// Whether the window currently receives events.
    pub fn is_listening(&self, id: WindowId) -> bool { self.record(id).map(|r| !r.shown_to.is_empty()).unwrap_or(false) }

    /// The window shown again when `id` pops.
    pub fn previous(&self, id: WindowId) -> Option<WindowId> { self.record(id).and_then(|r| r.previous) }

    /// Lays the window out and attaches it to `viewer`; showing twice to the same viewer is a no-op.
    pub fn show(&mut self, id: WindowId, viewer: &mut dyn Viewer) -> Result<(), UiError> {
        let key = viewer.key();
        let token = self.next_token;
        let queue = self.dismiss_tx.clone();
        let record = self.record_mut(id).inspect_err(|_| warn!(?id, "show of an unknown window"))?;
        if !record.shown_to.insert(key) {
            return Ok(());
        }
        record.window.show_to(viewer);
        let first = record.shown_to.len() == 1;
        viewer.set_pointer_visible(true);
        let mut armed = false;
        let delay = record.window.auto_dismiss().filter(|_| record.timer.is_none());
        if let Some(delay) = delay {
            record.timer = Some(DismissTimer::arm(delay, DismissRequest { window: id, viewer: key, token }, queue));
            armed = true;
            debug!(?id, ?delay, "auto-dismiss armed");
        }
        if armed {
            self.next_token += 1;
        }
        if first {
            debug!(?id, "window listening");
            if let Some(registry) = self.registry.as_mut() {
                registry.register(id);
            }
        }
        debug!(?id, viewer = key.0, "window shown");
        Ok(())
    }

    /// Detaches the window from `viewer`; a no-op for viewers it is not shown to.
    pub fn close(&mut self, id: WindowId, viewer: &mut dyn Viewer) -> Result<(), UiError> {
        let key = viewer.key();
        let record = self.record_mut(id)?;
        if !record.shown_to.remove(&key) {
            return Ok(());
        }
        record.window.hide_from(viewer);
        let last = record.shown_to.is_empty();
        if record.timer.as_ref().map(|t| t.viewer == key).unwrap_or(false) {
            record.timer = None;
            debug!(?id, "auto-dismiss cancelled");
        }
        viewer.set_pointer_visible(false);
        if last {
            debug!(?id, "window no longer listening");
            if let Some(registry) = self.registry.as_mut() {
                registry.unregister(id);
            }
        }
        debug!(?id, viewer = key.0, "window closed");
        Ok(())
    }

    /// Covers `id` with `next`; popping `next` later shows `id` again.
    pub fn push(&mut self, id: WindowId, viewer: &mut dyn Viewer, next: WindowId) -> Result<(), UiError> {
        self.record_mut(next)?;
        self.record_mut(id)?;
        let mut cursor = Some(id);
        while let Some(at) = cursor {
            if at == next {
                warn!(?id, ?next, "push would link a window below itself");
                return Err(UiError::InvalidParameter("window already in the display stack".into()));
            }
            cursor = self.previous(at);
        }
        self.close(id, viewer)?;
        self.record_mut(next)?.previous = Some(id);
        debug!(?id, ?next, "push");
        self.show(next, viewer)
    }

    /// Closes and frees `id`, then shows the window it covered, if any.
    ///
    /// A window other viewers still see stays alive for them and is freed by the last pop.
    pub fn pop(&mut self, id: WindowId, viewer: &mut dyn Viewer) -> Result<(), UiError> {
        let previous = self.record_mut(id)?.previous;
        self.close(id, viewer)?;
        self.release(id)?;
        debug!(?id, ?previous, "pop");
        match previous {
            Some(prev) if self.record(prev).is_some() => self.show(prev, viewer),
            _ => {
                viewer.set_pointer_visible(false);
                Ok(())
            }
        }
    }

    /// Closes and frees `id` and shows `next` in its place, below it whatever `id` covered.
    pub fn poppush(&mut self, id: WindowId, viewer: &mut dyn Viewer, next: WindowId) -> Result<(), UiError> {
        if id == next {
            return Err(UiError::InvalidParameter("window cannot replace itself".into()));
        }
        self.record_mut(next)?;
        let previous = self.record_mut(id)?.previous;
        self.close(id, viewer)?;
        self.release(id)?;
        self.record_mut(next)?.previous = previous.filter(|p| *p != next);
        debug!(?id, ?next, "poppush");
        self.show(next, viewer)
    }

    // Frees `id` unless another viewer still sees it.
    fn release(&mut self, id: WindowId) -> Result<(), UiError> {
        let viewers = self.record_mut(id)?.shown_to.len();
        if viewers > 0 {
            debug!(?id, viewers, "window kept for other viewers");
            return Ok(());
        }
        self.free(id)
    }

    /// Releases a hidden window. Its id, and every link to it, becomes stale.
    ///
    /// A window still shown to some viewer is refused, since its elements could never be
    /// detached again.
    pub fn free(&mut self, id: WindowId) -> Result<(), UiError> {
        let slot = self
            .slots
            .get_mut(id.index as usize)
            .filter(|s| s.generation == id.generation && s.record.is_some())
            .ok_or(UiError::UnknownWindow)?;
        if let Some(shown) = slot.record.as_ref().map(|r| r.shown_to.len()).filter(|n| *n > 0) {
            warn!(?id, viewers = shown, "refusing to free a window still shown");
            return Err(UiError::InvalidParameter(format!("window still shown to {} viewers", shown)));
        }
        let Some(record) = slot.record.take() else { return Err(UiError::UnknownWindow) };
        slot.generation = slot.generation.wrapping_add(1);
        record.window.free();
        self.vacant.push(id.index);
        Ok(())
    }

    fn windows_shown_to(&self, key: ViewerKey) -> Vec<WindowId> {
        self.slots
            .iter()
            .enumerate()
            .filter_map(|(i, s)| {
                s.record.as_ref().filter(|r| r.shown_to.contains(&key)).map(|_| WindowId { index: i as u32, generation: s.generation })
            })
            .collect()
    }

    fn notify(&mut self, viewer: &mut dyn Viewer, window: WindowId, handler: Option<Callback>, id: i32, data: Option<EventData>) {
        let Some(handler) = handler else { return };
        let mut ctx = EventCtx { stack: self, viewer, window };
        match handler.try_borrow_mut() {
            Ok(mut h) => h.on_event(&mut ctx, id, data),
            Err(_) => warn!(?window, id, "callback already running, event dropped"),
        };
    }

    /// Routes a click a viewer made on `element`. Returns `true` if a window consumed it.
    pub fn handle_click(&mut self, viewer: &mut dyn Viewer, element: &ElementHandle) -> bool {
        for window in self.windows_shown_to(viewer.key()) {
            let Some(record) = self.record(window) else { continue };
            let handler = record.window.callback();
            if record.window.title_bar().is_close_glyph(element) {
                if let Err(e) = self.pop(window, viewer) {
                    warn!("close glyph: {}", e);
                }
                self.notify(viewer, window, handler, ABORT_ID, None);
                return true;
            }

            let root = record.window.root();
            let auto_close = record.window.auto_close();
            let Some((id, data)) = root.route_click(element) else { continue };
            if !is_public_id(id) {
                return true;
            }
            if id == OK_ID || id == ABORT_ID || auto_close {
                if let Err(e) = self.pop(window, viewer) {
                    warn!("click: {}", e);
                }
            }
            let data = match element.kind() {
                ElementKind::TextField => None,
                _ => data.map(EventData::Item),
            };
            self.notify(viewer, window, handler, id, data);
            return true;
        }
        false
    }

    /// Routes text a viewer committed in `element`. Returns `true` if a window consumed it.
    pub fn handle_text_entry(&mut self, viewer: &mut dyn Viewer, element: &ElementHandle, text: &str) -> bool {
        for window in self.windows_shown_to(viewer.key()) {
            let Some(record) = self.record(window) else { continue };
            let Some(id) = record.window.find_id(element) else { continue };
            let handler = record.window.callback();
            self.notify(viewer, window, handler, id, Some(EventData::Text(text.to_string())));
            return true;
        }
        false
    }

    /// Blocks until an auto-dismiss timer fires or `timeout` elapses. Returns `true` if one fired.
    pub fn wait_for_timer(&mut self, timeout: Duration) -> bool {
        match self.dismiss_rx.recv_timeout(timeout) {
            Ok(request) => {
                self.pending.push(request);
                true
            }
            Err(RecvTimeoutError::Timeout) | Err(RecvTimeoutError::Disconnected) => false,
        }
    }

    /// Pops the windows whose auto-dismiss timer fired for `viewer`. Returns how many were popped.
    pub fn process_timers(&mut self, viewer: &mut dyn Viewer) -> usize {
        self.pending.extend(self.dismiss_rx.try_iter());
        let key = viewer.key();
        let (live, stale): (Vec<_>, Vec<_>) = std::mem::take(&mut self.pending).into_iter().partition(|r| self.is_armed(r));
        for request in stale {
            debug!(token = request.token, "stale auto-dismiss dropped");
        }
        let (mine, others): (Vec<_>, Vec<_>) = live.into_iter().partition(|r| r.viewer == key);
        self.pending = others;
        let mut popped = 0;
        for request in mine {
            // an earlier pop in this batch may have freed it
            if !self.is_armed(&request) {
                continue;
            }
            if self.pop(request.window, viewer).is_ok() {
                popped += 1;
            }
        }
        popped
    }

    fn is_armed(&self, request: &DismissRequest) -> bool {
        self.record(request.window).and_then(|r| r.timer.as_ref()).map(|t| t.token == request.token).unwrap_or(false)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    type Log = Rc<RefCell<Vec<(i32, Option<String>)>>>;

    fn recorder() -> (Log, Callback) {
        let log: Log = Rc::new(RefCell::new(Vec::new()));
        let sink = log.clone();
        let cb = callback(move |_ctx, id, data| {
            let text = data.map(|d| match d {
                EventData::Text(t) => t,
                EventData::Item(i) => i.downcast_ref::<String>().cloned().unwrap_or_default(),
            });
            sink.borrow_mut().push((id, text));
        });
        (log, cb)
    }

    fn window(title: &str, callback: Option<Callback>) -> ModalWindow {
        let w = ModalWindow::new(title, LayoutKind::Stacked, callback, &Theme::default());
        w.add(&ElementHandle::label(title, 15), None, None);
        w
    }

    fn geometry(stack: &WindowStack, id: WindowId) -> Vec<(i32, i32, i32, i32)> {
        let w = stack.get(id).unwrap();
        [w.frame(), w.root().panel(), w.title_bar().panel()]
            .iter()
            .map(|e| {
                let r = e.frame();
                (r.x, r.y, r.width, r.height)
            })
            .collect()
    }

    #[test]
    fn push_pop_round_trip() {
        let mut stack = WindowStack::new();
        let mut viewer = HeadlessViewer::new(1);
        let a = stack.insert(window("Alpha", None));
        let b = stack.insert(window("Bravo window", None));
        stack.show(a, &mut viewer).unwrap();
        let before = geometry(&stack, a);
        let attached = viewer.attached().len();

        stack.push(a, &mut viewer, b).unwrap();
        assert_eq!(stack.state(a), WindowState::Hidden);
        assert_eq!(stack.state(b), WindowState::Shown);
        assert_eq!(stack.previous(b), Some(a));
        assert!(!viewer.is_attached(&stack.get(a).unwrap().frame()));

        stack.pop(b, &mut viewer).unwrap();
        assert_eq!(stack.state(b), WindowState::Freed);
        assert_eq!(stack.state(a), WindowState::Shown);
        assert_eq!(geometry(&stack, a), before);
        assert_eq!(viewer.attached().len(), attached);
        assert!(viewer.pointer_visible());

        stack.pop(a, &mut viewer).unwrap();
        assert!(viewer.attached().is_empty());
        assert!(!viewer.pointer_visible());
        assert!(stack.pop(a, &mut viewer).is_err());
    }

    #[test]
    fn poppush_skips_the_replaced_window() {
        let mut stack = WindowStack::new();
        let mut viewer = HeadlessViewer::new(1);
        let a = stack.insert(window("A", None));
        let b = stack.insert(window("B", None));
        let c = stack.insert(window("C", None));
        stack.show(a, &mut viewer).unwrap();
        stack.push(a, &mut viewer, b).unwrap();
        stack.poppush(b, &mut viewer, c).unwrap();
        assert_eq!(stack.state(b), WindowState::Freed);
        assert_eq!(stack.previous(c), Some(a));
        stack.pop(c, &mut viewer).unwrap();
        assert_eq!(stack.state(a), WindowState::Shown);
    }

    #[test]
    fn stale_ids_do_not_alias_new_windows() {
        let mut stack = WindowStack::new();
        let mut viewer = HeadlessViewer::new(1);
        let a = stack.insert(window("A", None));
        stack.free(a).unwrap();
        let b = stack.insert(window("B", None));
        assert_ne!(a, b);
        assert_eq!(stack.state(a), WindowState::Freed);
        assert!(matches!(stack.show(a, &mut viewer), Err(UiError::UnknownWindow)));
        assert_eq!(stack.state(b), WindowState::Hidden);
    }

    #[test]
    fn push_refuses_cycles() {
        let mut stack = WindowStack::new();
        let mut viewer = HeadlessViewer::new(1);
        let a = stack.insert(window("A", None));
        let b = stack.insert(window("B", None));
        stack.show(a, &mut viewer).unwrap();
        stack.push(a, &mut viewer, b).unwrap();
        assert!(stack.push(b, &mut viewer, a).is_err());
        assert!(stack.push(b, &mut viewer, b).is_err());
        assert_eq!(stack.state(b), WindowState::Shown);
    }

    #[test]
    fn listener_count_follows_viewers() {
        let mut stack = WindowStack::new();
        let mut one = HeadlessViewer::new(1);
        let mut two = HeadlessViewer::new(2);
        let a = stack.insert(window("A", None));
        stack.show(a, &mut one).unwrap();
        stack.show(a, &mut one).unwrap();
        stack.show(a, &mut two).unwrap();
        assert!(stack.is_listening(a));
        stack.close(a, &mut one).unwrap();
        stack.close(a, &mut one).unwrap();
        assert!(stack.is_listening(a));
        assert!(stack.is_shown_to(a, ViewerKey(2)));
        stack.close(a, &mut two).unwrap();
        assert!(!stack.is_listening(a));
        assert_eq!(stack.state(a), WindowState::Hidden);
    }

    #[test]
    fn close_glyph_pops_and_aborts() {
        let (log, cb) = recorder();
        let mut stack = WindowStack::new();
        let mut viewer = HeadlessViewer::new(1);
        let a = stack.insert(window("A", Some(cb)));
        stack.show(a, &mut viewer).unwrap();
        let glyph = stack.get(a).and_then(|w| w.title_bar().close_glyph()).unwrap();
        assert!(stack.handle_click(&mut viewer, &glyph));
        assert_eq!(stack.state(a), WindowState::Freed);
        assert_eq!(*log.borrow(), vec![(ABORT_ID, None)]);
    }

    #[test]
    fn clicks_are_filtered_and_forwarded() {
        let (log, cb) = recorder();
        let mut stack = WindowStack::new();
        let mut viewer = HeadlessViewer::new(1);
        let win = ModalWindow::new("Pick", LayoutKind::Stacked, Some(cb), &Theme::default());
        let root = win.root();
        let items: Vec<ElementHandle> = (0..5).map(|i| ElementHandle::label(&format!("item {}", i), 15)).collect();
        for (i, item) in items.iter().enumerate() {
            win.add(item, Some(10 + i as i32), Some(Rc::new(format!("data {}", i))));
        }
        let field = ElementHandle::text_field("", 200, 23);
        win.add(&field, Some(42), Some(Rc::new(String::from("hidden"))));
        let inert = ElementHandle::label("inert", 15);
        win.add(&inert, None, None);
        root.set_max_visible_rows(3);
        let ok = ElementHandle::label("OK", 15);
        win.add(&ok, Some(OK_ID), None);
        let a = stack.insert(win);
        stack.show(a, &mut viewer).unwrap();

        let down = root.with(|c| c.entries().len());
        assert_eq!(down, 8);
        let glyphs: Vec<ElementHandle> = viewer.attached().iter().filter(|e| e.with(|e| e.image == Some(StockIcon::ArrowDown))).cloned().collect();
        assert_eq!(glyphs.len(), 1);
        assert!(stack.handle_click(&mut viewer, &glyphs[0]));
        assert!(log.borrow().is_empty());
        assert_eq!(root.first_visible(), 2);

        assert!(!stack.handle_click(&mut viewer, &inert));
        assert!(stack.handle_click(&mut viewer, &items[1]));
        assert!(stack.handle_click(&mut viewer, &field));
        assert!(stack.handle_text_entry(&mut viewer, &field, "hello"));
        assert_eq!(stack.state(a), WindowState::Shown);
        assert_eq!(
            *log.borrow(),
            vec![(11, Some("data 1".to_string())), (42, None), (42, Some("hello".to_string()))]
        );

        assert!(stack.handle_click(&mut viewer, &ok));
        assert_eq!(stack.state(a), WindowState::Freed);
        assert_eq!(log.borrow().last().cloned(), Some((OK_ID, None)));
        assert!(!stack.handle_click(&mut viewer, &items[0]));
    }

    #[test]
    fn auto_close_pops_before_notifying() {
        let mut stack = WindowStack::new();
        let mut viewer = HeadlessViewer::new(1);
        let states = Rc::new(RefCell::new(Vec::new()));
        let sink = states.clone();
        let cb = callback(move |ctx, id, _| sink.borrow_mut().push((id, ctx.stack.state(ctx.window))));
        let mut win = window("Menu", Some(cb));
        win.set_auto_close(true);
        let item = ElementHandle::label("go", 15);
        win.add(&item, Some(3), None);
        let a = stack.insert(win);
        stack.show(a, &mut viewer).unwrap();
        stack.handle_click(&mut viewer, &item);
        assert_eq!(*states.borrow(), vec![(3, WindowState::Freed)]);
    }

    #[test]
    fn callbacks_can_open_nested_windows() {
        let mut stack = WindowStack::new();
        let mut viewer = HeadlessViewer::new(1);
        let opened = Rc::new(RefCell::new(None));
        let sink = opened.clone();
        let cb = callback(move |ctx, id, _| {
            if id == 5 {
                *sink.borrow_mut() = ctx.push(window("Nested", None)).ok();
            }
        });
        let win = window("Top", Some(cb));
        let more = ElementHandle::label("more", 15);
        win.add(&more, Some(5), None);
        let top = stack.insert(win);
        stack.show(top, &mut viewer).unwrap();
        stack.handle_click(&mut viewer, &more);
        let nested = opened.borrow().unwrap();
        assert_eq!(stack.state(top), WindowState::Hidden);
        assert_eq!(stack.previous(nested), Some(top));
        stack.pop(nested, &mut viewer).unwrap();
        assert_eq!(stack.state(top), WindowState::Shown);
    }

    #[test]
    fn auto_dismiss_pops_through_the_queue() {
        let mut stack = WindowStack::new();
        let mut viewer = HeadlessViewer::new(9);
        let mut note = window("Saved", None);
        note.set_auto_dismiss(Some(Duration::from_millis(10)));
        let a = stack.insert(note);
        stack.show(a, &mut viewer).unwrap();
        assert!(stack.wait_for_timer(Duration::from_secs(5)));
        assert_eq!(stack.process_timers(&mut HeadlessViewer::new(1)), 0);
        assert_eq!(stack.state(a), WindowState::Shown);
        assert_eq!(stack.process_timers(&mut viewer), 1);
        assert_eq!(stack.state(a), WindowState::Freed);
    }

    #[test]
    fn closing_cancels_auto_dismiss() {
        let mut stack = WindowStack::new();
        let mut viewer = HeadlessViewer::new(9);
        let mut note = window("Saved", None);
        note.set_auto_dismiss(Some(Duration::from_millis(50)));
        let a = stack.insert(note);
        stack.show(a, &mut viewer).unwrap();
        stack.close(a, &mut viewer).unwrap();
        assert!(!stack.wait_for_timer(Duration::from_millis(200)));
        assert_eq!(stack.process_timers(&mut viewer), 0);
        assert_eq!(stack.state(a), WindowState::Hidden);
    }

    #[derive(Clone, Default)]
    struct Edges(Rc<RefCell<Vec<(bool, WindowId)>>>);

    impl EventRegistry for Edges {
        fn register(&mut self, window: WindowId) { self.0.borrow_mut().push((true, window)) }

        fn unregister(&mut self, window: WindowId) { self.0.borrow_mut().push((false, window)) }
    }

    #[test]
    fn registry_sees_only_the_listening_edges() {
        let edges = Edges::default();
        let mut stack = WindowStack::new();
        stack.set_registry(edges.clone());
        let mut one = HeadlessViewer::new(1);
        let mut two = HeadlessViewer::new(2);
        let a = stack.insert(window("A", None));
        stack.show(a, &mut one).unwrap();
        stack.show(a, &mut two).unwrap();
        stack.show(a, &mut one).unwrap();
        assert_eq!(*edges.0.borrow(), vec![(true, a)]);
        stack.close(a, &mut one).unwrap();
        stack.close(a, &mut one).unwrap();
        assert_eq!(edges.0.borrow().len(), 1);
        stack.close(a, &mut two).unwrap();
        assert_eq!(*edges.0.borrow(), vec![(true, a), (false, a)]);

        stack.show(a, &mut two).unwrap();
        stack.pop(a, &mut two).unwrap();
        assert_eq!(*edges.0.borrow(), vec![(true, a), (false, a), (true, a), (false, a)]);
    }

    #[test]
    fn popping_a_shared_window_keeps_it_for_other_viewers() {
        let mut stack = WindowStack::new();
        let mut one = HeadlessViewer::new(1);
        let mut two = HeadlessViewer::new(2);
        let a = stack.insert(window("A", None));
        stack.show(a, &mut one).unwrap();
        stack.show(a, &mut two).unwrap();
        assert!(matches!(stack.free(a), Err(UiError::InvalidParameter(_))));

        stack.pop(a, &mut one).unwrap();
        assert!(one.attached().is_empty());
        assert_eq!(stack.state(a), WindowState::Shown);
        assert!(stack.is_shown_to(a, ViewerKey(2)));
        assert!(!two.attached().is_empty());

        stack.pop(a, &mut two).unwrap();
        assert!(two.attached().is_empty());
        assert_eq!(stack.state(a), WindowState::Freed);
    }

    #[test]
    fn stale_requests_of_other_viewers_are_pruned() {
        let mut stack = WindowStack::new();
        let mut gone = HeadlessViewer::new(2);
        let mut note = window("Saved", None);
        note.set_auto_dismiss(Some(Duration::from_millis(10)));
        let a = stack.insert(note);
        stack.show(a, &mut gone).unwrap();
        assert!(stack.wait_for_timer(Duration::from_secs(5)));
        assert_eq!(stack.process_timers(&mut HeadlessViewer::new(1)), 0);
        assert_eq!(stack.pending.len(), 1);

        stack.close(a, &mut gone).unwrap();
        assert_eq!(stack.process_timers(&mut HeadlessViewer::new(1)), 0);
        assert!(stack.pending.is_empty());
    }
}
