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
use crate::layout::{Arrangement, Spacing};
use std::any::Any;
use tracing::{trace, warn};

pub use crate::layout::LayoutKind;

/// Auxiliary data attached to an entry and handed back on clicks.
pub type ItemData = Rc<dyn Any>;

#[derive(Clone)]
/// Something a container can hold.
pub enum Child {
    /// A primitive element.
    Element(ElementHandle),
    /// A nested container.
    Container(ContainerHandle),
    /// A check box or radio button.
    CheckBox(CheckBoxHandle),
}

impl Child {
    /// The element the container positions for this child.
    pub fn element(&self) -> ElementHandle {
        match self {
            Child::Element(e) => e.clone(),
            Child::Container(c) => c.panel(),
            Child::CheckBox(cb) => cb.panel(),
        }
    }

    fn container(&self) -> Option<ContainerHandle> {
        match self {
            Child::Element(_) => None,
            Child::Container(c) => Some(c.clone()),
            Child::CheckBox(cb) => Some(cb.container()),
        }
    }

    pub(crate) fn size(&self) -> Dimensioni { self.element().size() }

    /// Lays out a nested container, or refreshes the size of a label.
    pub(crate) fn measure(&self, min_w: i32, min_h: i32, reset: bool, metrics: &dyn TextMetrics) {
        match self.container() {
            Some(c) => c.layout_pass(min_w, min_h, reset),
            None => {
                let e = self.element();
                if reset && e.kind() == ElementKind::Label {
                    e.fit_text(metrics);
                }
            }
        }
    }

    /// Moves the child so its top-left corner lands on `top_left`, whatever its pivot.
    pub(crate) fn place(&self, top_left: Vec2i) {
        let e = self.element();
        let offset = e.pivot().offset(e.size());
        e.set_position(vec2(top_left.x + offset.x, top_left.y + offset.y));
    }

    pub(crate) fn set_visible(&self, visible: bool) { self.element().set_visible(visible) }

    fn show(&self, viewer: &mut dyn Viewer) {
        match self.container() {
            Some(c) => c.show(viewer),
            None => viewer.attach(&self.element()),
        }
    }

    fn hide(&self, viewer: &mut dyn Viewer) {
        match self.container() {
            Some(c) => c.hide(viewer),
            None => viewer.detach(&self.element()),
        }
    }
}

#[derive(Clone)]
/// One child registration.
pub struct Entry {
    /// The registered child.
    pub child: Child,
    /// Id reported on clicks; `None` makes the entry inert.
    pub id: Option<i32>,
    /// Data handed back with the id.
    pub data: Option<ItemData>,
}

/// A panel arranging its children with one of the [`LayoutKind`] strategies.
pub struct Container {
    panel: ElementHandle,
    arrangement: Arrangement,
    margin: i32,
    padding: i32,
    entries: Vec<Option<Entry>>,
    parent: Option<Weak<RefCell<Container>>>,
    theme: Theme,
    freed: bool,
}

impl Container {
    /// Entries in insertion order; `None` marks an empty grid cell.
    pub fn entries(&self) -> &[Option<Entry>] { &self.entries }

    pub fn kind(&self) -> LayoutKind { self.arrangement.kind() }

    pub fn margin(&self) -> i32 { self.margin }

    pub fn padding(&self) -> i32 { self.padding }

    pub fn is_freed(&self) -> bool { self.freed }

    fn children(&self) -> Vec<Option<Child>> { self.entries.iter().map(|e| e.as_ref().map(|e| e.child.clone())).collect() }

    fn child_count(&self) -> usize { self.entries.iter().flatten().count() }
}

#[derive(Clone)]
/// Shared handle to a [`Container`]; equality is identity.
pub struct ContainerHandle(Rc<RefCell<Container>>);

impl ContainerHandle {
    /// Creates an empty container.
    pub fn new(kind: LayoutKind, flags: LayoutFlags, theme: &Theme) -> Self {
        let panel = ElementHandle::panel();
        let arrangement = Arrangement::new(kind, flags, &panel, theme.style.button_size);
        Self(Rc::new(RefCell::new(Container {
            panel,
            arrangement,
            margin: 0,
            padding: theme.style.padding,
            entries: Vec::new(),
            parent: None,
            theme: theme.clone(),
            freed: false,
        })))
    }

    /// Runs `f` with a shared borrow of the container.
    pub fn with<R>(&self, f: impl FnOnce(&Container) -> R) -> R { f(&self.0.borrow()) }

    pub fn ptr_eq(&self, other: &ContainerHandle) -> bool { Rc::ptr_eq(&self.0, &other.0) }

    /// The backing panel children are drawn inside.
    pub fn panel(&self) -> ElementHandle { self.0.borrow().panel.clone() }

    pub fn size(&self) -> Dimensioni { self.panel().size() }

    pub fn theme(&self) -> Theme { self.0.borrow().theme.clone() }

    /// Container this one was added to, if it is still alive.
    pub fn parent(&self) -> Option<ContainerHandle> { self.0.borrow().parent.as_ref().and_then(|p| p.upgrade()).map(ContainerHandle) }

    pub fn set_margin(&self, margin: i32) { self.0.borrow_mut().margin = margin }

    pub fn set_padding(&self, padding: i32) { self.0.borrow_mut().padding = padding }

    /// Number of occupied entries.
    pub fn len(&self) -> usize { self.0.borrow().child_count() }

    pub fn is_empty(&self) -> bool { self.len() == 0 }

    /// Appends a primitive element.
    ///
    /// The element becomes clickable when `id` is set; labels switch to the item font size and
    /// text fields become editable and report committed text under the same condition.
    pub fn add(&self, element: &ElementHandle, id: Option<i32>, data: Option<ItemData>) {
        if !self.accepts_more() {
            return;
        }
        let theme = self.theme();
        let interactive = id.is_some();
        element.with_mut(|e| match e.kind() {
            ElementKind::Label => {
                e.font_size = theme.style.item_size;
                e.font_color = theme.style.text_color;
            }
            ElementKind::TextField => {
                e.editable = interactive;
                e.listen_for_input = interactive;
                e.border = 1;
                e.border_color = theme.style.border_color;
            }
            ElementKind::Panel | ElementKind::Image => {}
        });
        if element.kind() == ElementKind::Label {
            element.fit_text(theme.metrics.as_ref());
        }
        element.set_clickable(interactive);
        self.push_entry(Child::Element(element.clone()), id, data);
    }

    /// Leaves the next grid cell empty.
    pub fn add_empty(&self) {
        let mut c = self.0.borrow_mut();
        if matches!(c.kind(), LayoutKind::Grid { .. }) && c.arrangement.has_room(c.entries.len()) {
            c.entries.push(None);
        }
    }

    /// Appends a nested container; clicks on its own panel report `id`.
    pub fn add_container(&self, child: &ContainerHandle, id: Option<i32>, data: Option<ItemData>) {
        if self.ptr_eq(child) {
            warn!("container cannot contain itself");
            return;
        }
        if !self.accepts_more() {
            return;
        }
        child.panel().set_clickable(id.is_some());
        child.0.borrow_mut().parent = Some(Rc::downgrade(&self.0));
        self.push_entry(Child::Container(child.clone()), id, data);
    }

    /// Creates a nested side-by-side or stacked container and appends it.
    pub fn add_new_container(&self, kind: LayoutKind, flags: LayoutFlags) -> ContainerHandle {
        let child = ContainerHandle::new(kind, flags, &self.theme());
        self.add_container(&child, None, None);
        child
    }

    /// Creates a nested grid and appends it.
    pub fn add_new_grid(&self, cols: usize, rows: usize) -> ContainerHandle { self.add_new_container(LayoutKind::Grid { cols, rows }, LayoutFlags::default()) }

    /// Appends a check box; the box reports its own id and data.
    pub fn add_check_box(&self, check_box: &CheckBoxHandle) {
        if !self.accepts_more() {
            return;
        }
        check_box.container().0.borrow_mut().parent = Some(Rc::downgrade(&self.0));
        self.push_entry(Child::CheckBox(check_box.clone()), None, None);
        if check_box.is_radio() && check_box.state() == CheckState::Checked {
            check_box.uncheck_siblings();
        }
    }

    fn accepts_more(&self) -> bool {
        let c = self.0.borrow();
        if c.freed {
            warn!("add on a freed container ignored");
            return false;
        }
        if !c.arrangement.has_room(c.entries.len()) {
            trace!(len = c.entries.len(), "grid full, child dropped");
            return false;
        }
        true
    }

    fn push_entry(&self, child: Child, id: Option<i32>, data: Option<ItemData>) {
        {
            let mut c = self.0.borrow_mut();
            let element = child.element();
            element.set_pivot(c.arrangement.pivot_at(c.entries.len()));
            element.set_parent(Some(&c.panel));
            c.entries.push(Some(Entry { child, id, data }));
        }
        self.page(None);
    }

    /// Removes the first entry whose positioned element is `element`; later grid cells shift back.
    pub fn remove(&self, element: &ElementHandle) {
        let index = self.0.borrow().entries.iter().position(|e| e.as_ref().map(|e| e.child.element().ptr_eq(element)).unwrap_or(false));
        if let Some(index) = index {
            self.remove_entry(index);
        }
    }

    /// Removes the entry at `index` of a stacked container, returning the index.
    pub fn remove_at(&self, index: usize) -> Result<usize, UiError> {
        let len = self.0.borrow().entries.len();
        if index >= len {
            return Err(UiError::InvalidParameter(format!("item index {} of {}", index, len)));
        }
        self.remove_entry(index);
        Ok(index)
    }

    fn remove_entry(&self, index: usize) {
        let removed = self.0.borrow_mut().entries.remove(index);
        self.page(None);
        if let Some(entry) = removed {
            entry.child.element().set_parent(None);
            if let Some(c) = entry.child.container() {
                c.0.borrow_mut().parent = None;
            }
        }
    }

    /// Id of the entry holding `element`, searching nested containers depth first.
    pub fn find_id(&self, element: &ElementHandle) -> Option<i32> { self.lookup(element, false).map(|(id, _)| id) }

    /// Id and data of the entry holding `element`, searching nested containers depth first.
    pub fn find_data(&self, element: &ElementHandle) -> Option<(i32, Option<ItemData>)> { self.lookup(element, false) }

    /// Resolves a click on `element`: paging glyphs scroll and check boxes toggle.
    pub fn route_click(&self, element: &ElementHandle) -> Option<(i32, Option<ItemData>)> { self.lookup(element, true) }

    fn lookup(&self, element: &ElementHandle, click: bool) -> Option<(i32, Option<ItemData>)> {
        let glyph = self.0.borrow().arrangement.glyph_id(element);
        if let Some(id) = glyph {
            if click {
                match id {
                    PAGE_UP_ID => self.scroll_up(),
                    _ => self.scroll_down(),
                }
            }
            return Some((id, None));
        }

        let entries: Vec<Entry> = self.0.borrow().entries.iter().flatten().cloned().collect();
        for entry in entries {
            let hit = || entry.id.map(|id| (id, entry.data.clone()));
            match &entry.child {
                Child::Element(e) => {
                    if e.ptr_eq(element) {
                        return hit();
                    }
                }
                Child::Container(c) => {
                    if let Some(found) = c.lookup(element, click) {
                        return Some(found);
                    }
                    if c.panel().ptr_eq(element) {
                        return hit();
                    }
                }
                Child::CheckBox(cb) => {
                    if cb.owns(element) {
                        return if click { cb.click() } else { cb.peek() };
                    }
                }
            }
        }
        None
    }

    /// First direct child element registered with `id`.
    pub fn child_from_id(&self, id: i32) -> Option<ElementHandle> {
        self.0.borrow().entries.iter().flatten().find(|e| e.id == Some(id)).map(|e| e.child.element())
    }

    /// Sizes the container and places every descendant.
    ///
    /// A measure pass finds the natural size, then an arrange pass grows the container to at
    /// least `min_w` by `min_h` and distributes the excess according to the layout flags.
    pub fn layout(&self, min_w: i32, min_h: i32) {
        self.layout_pass(min_w, min_h, true);
        self.layout_pass(min_w, min_h, false);
    }

    pub(crate) fn layout_pass(&self, min_w: i32, min_h: i32, reset: bool) {
        let (children, panel, sp, theme) = {
            let c = self.0.borrow();
            if c.freed {
                warn!("layout of a freed container ignored");
                return;
            }
            let sp = Spacing { margin: c.margin, padding: c.padding, button: c.theme.style.button_size };
            (c.children(), c.panel.clone(), sp, c.theme.clone())
        };
        let size = self.0.borrow_mut().arrangement.arrange(&children, sp, theme.metrics.as_ref(), min_w, min_h, reset);
        panel.set_size(size.width, size.height);
    }

    /// Caps the rows a stacked container shows at once; values below 1 remove the cap.
    pub fn set_max_visible_rows(&self, rows: i32) {
        {
            let mut c = self.0.borrow_mut();
            let count = c.child_count();
            if let Arrangement::Stacked(s) = &mut c.arrangement {
                s.set_max_rows(rows, count);
            }
        }
        self.page(None);
    }

    pub fn max_visible_rows(&self) -> Option<usize> {
        match &self.0.borrow().arrangement {
            Arrangement::Stacked(s) => s.max_rows(),
            _ => None,
        }
    }

    /// Index of the first shown row of a stacked container.
    pub fn first_visible(&self) -> usize {
        match &self.0.borrow().arrangement {
            Arrangement::Stacked(s) => s.first(),
            _ => 0,
        }
    }

    /// Shows the next page of a stacked container.
    pub fn scroll_down(&self) { self.page(Some(true)) }

    /// Shows the previous page of a stacked container.
    pub fn scroll_up(&self) { self.page(Some(false)) }

    // Moves the shown window of a stacked container, then refreshes row visibility.
    fn page(&self, down: Option<bool>) {
        let children = self.0.borrow().children();
        let items: Vec<&Child> = children.iter().flatten().collect();
        let mut c = self.0.borrow_mut();
        if let Arrangement::Stacked(s) = &mut c.arrangement {
            match down {
                Some(true) => s.scroll_down(items.len()),
                Some(false) => s.scroll_up(items.len()),
                None => s.clamp(items.len()),
            }
            trace!(first = s.first(), "page");
            s.update_rows(&items);
        }
    }

    /// Sets the horizontal alignment of a grid column.
    pub fn set_col_flag(&self, col: usize, flags: LayoutFlags) -> Result<(), UiError> {
        let children = self.0.borrow().children();
        match &mut self.0.borrow_mut().arrangement {
            Arrangement::Grid(g) => g.set_col_flag(col, flags, &children),
            _ => Err(UiError::InvalidParameter("column flags need a grid".into())),
        }
    }

    /// Sets the vertical alignment of a grid row.
    pub fn set_row_flag(&self, row: usize, flags: LayoutFlags) -> Result<(), UiError> {
        match &mut self.0.borrow_mut().arrangement {
            Arrangement::Grid(g) => g.set_row_flag(row, flags),
            _ => Err(UiError::InvalidParameter("row flags need a grid".into())),
        }
    }

    /// Attaches the panel and every descendant to `viewer`.
    pub fn show(&self, viewer: &mut dyn Viewer) {
        let (panel, glyphs, children) = {
            let c = self.0.borrow();
            (c.panel.clone(), c.arrangement.glyphs(), c.children())
        };
        viewer.attach(&panel);
        for g in &glyphs {
            viewer.attach(g);
        }
        for child in children.iter().flatten() {
            child.show(viewer);
        }
    }

    /// Detaches the panel and every descendant from `viewer`.
    pub fn hide(&self, viewer: &mut dyn Viewer) {
        let (panel, glyphs, children) = {
            let c = self.0.borrow();
            (c.panel.clone(), c.arrangement.glyphs(), c.children())
        };
        for child in children.iter().flatten() {
            child.hide(viewer);
        }
        for g in &glyphs {
            viewer.detach(g);
        }
        viewer.detach(&panel);
    }

    /// Frees nested containers first, then releases every entry. The container is unusable afterwards.
    pub fn free(&self) {
        let (entries, glyphs) = {
            let mut c = self.0.borrow_mut();
            if c.freed {
                return;
            }
            c.freed = true;
            (std::mem::take(&mut c.entries), c.arrangement.glyphs())
        };
        for entry in entries.into_iter().flatten() {
            match &entry.child {
                Child::Container(c) => c.free(),
                Child::CheckBox(cb) => cb.free(),
                Child::Element(_) => {}
            }
            entry.child.element().set_parent(None);
        }
        for g in glyphs {
            g.set_parent(None);
        }
    }
}

impl std::fmt::Debug for ContainerHandle {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let c = self.0.borrow();
        f.debug_struct("ContainerHandle").field("kind", &c.kind()).field("entries", &c.entries.len()).finish()
    }
}
