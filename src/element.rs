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

#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
/// Stock glyphs shared by every window.
pub enum StockIcon {
    /// Scroll or page down.
    ArrowDown,
    /// Previous.
    ArrowLeft,
    /// Next.
    ArrowRight,
    /// Scroll or page up.
    ArrowUp,
    /// Checked check box.
    Check,
    /// Close glyph of title bars.
    Cross,
    /// Unchecked check box.
    Uncheck,
    /// Add.
    Plus,
    /// Remove.
    Minus,
    /// Checked radio button.
    RadioCheck,
    /// Unchecked radio button.
    RadioUncheck,
}

impl StockIcon {
    /// Every stock icon, in legacy index order.
    pub const ALL: [StockIcon; 11] = [
        StockIcon::ArrowDown,
        StockIcon::ArrowLeft,
        StockIcon::ArrowRight,
        StockIcon::ArrowUp,
        StockIcon::Check,
        StockIcon::Cross,
        StockIcon::Uncheck,
        StockIcon::Plus,
        StockIcon::Minus,
        StockIcon::RadioCheck,
        StockIcon::RadioUncheck,
    ];

    /// Resolves a legacy numeric icon index.
    pub fn from_index(index: i32) -> Result<Self, UiError> {
        usize::try_from(index)
            .ok()
            .and_then(|i| Self::ALL.get(i).copied())
            .ok_or_else(|| UiError::InvalidParameter(format!("stock icon index {}", index)))
    }

    /// Legacy numeric index of the icon.
    pub fn index(self) -> usize { self as usize }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
/// The primitive kinds a host knows how to draw.
pub enum ElementKind {
    /// Plain rectangle, used as a background for containers and windows.
    Panel,
    /// Static text.
    Label,
    /// Stock glyph.
    Image,
    /// Text input box.
    TextField,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, Default)]
/// The corner of an element its position refers to.
pub enum Pivot {
    #[default]
    /// Position is the top-left corner.
    TopLeft,
    /// Position is the top-right corner.
    TopRight,
    /// Position is the centre of the element.
    Center,
    /// Position is the bottom-left corner.
    BottomLeft,
}

impl Pivot {
    /// Offset of the pivot from the top-left corner of an element of the given size.
    pub fn offset(self, size: Dimensioni) -> Vec2i {
        match self {
            Pivot::TopLeft => vec2(0, 0),
            Pivot::TopRight => vec2(size.width, 0),
            Pivot::Center => vec2(size.width / 2, size.height / 2),
            Pivot::BottomLeft => vec2(0, size.height),
        }
    }
}

#[derive(Copy, Clone, Debug)]
/// Location of an element's pivot inside its parent, y growing downwards.
pub enum Position {
    /// Absolute pixels from the parent's top-left corner.
    Pixels(Vec2i),
    /// Fraction of the parent's size, shifted by a pixel offset.
    Relative {
        /// Horizontal fraction.
        x: f32,
        /// Vertical fraction.
        y: f32,
        /// Pixels added after scaling.
        offset: Vec2i,
    },
}

impl Position {
    /// Resolves the position to pixels inside a parent of the given size.
    pub fn resolve(&self, parent: Dimensioni) -> Vec2i {
        match *self {
            Position::Pixels(p) => p,
            Position::Relative { x, y, offset } => vec2((parent.width as f32 * x) as i32 + offset.x, (parent.height as f32 * y) as i32 + offset.y),
        }
    }
}

/// Retained state of one host element.
///
/// The core only writes geometry, visibility and interaction flags; hosts read the record when
/// they mirror it on a viewer's screen.
pub struct Element {
    kind: ElementKind,
    /// Pivot location inside the parent.
    pub position: Position,
    /// Size in pixels.
    pub size: Dimensioni,
    /// Corner `position` refers to.
    pub pivot: Pivot,
    /// Visibility flag.
    pub visible: bool,
    /// Whether clicks on the element are reported.
    pub clickable: bool,
    /// Text of labels and text fields.
    pub text: String,
    /// Font size of labels and text fields.
    pub font_size: i32,
    /// Font colour of labels and text fields.
    pub font_color: Color,
    /// Whether a text field accepts typing.
    pub editable: bool,
    /// Whether a text field reports committed text.
    pub listen_for_input: bool,
    /// Border thickness in pixels.
    pub border: i32,
    /// Border colour.
    pub border_color: Color,
    /// Glyph shown by an image element.
    pub image: Option<StockIcon>,
    /// Background colour.
    pub color: Color,
    parent: Option<Weak<RefCell<Element>>>,
}

impl Element {
    fn new(kind: ElementKind) -> Self {
        Self {
            kind,
            position: Position::Pixels(vec2(0, 0)),
            size: Dimensioni::new(0, 0),
            pivot: Pivot::TopLeft,
            visible: true,
            clickable: false,
            text: String::new(),
            font_size: 0,
            font_color: Color::default(),
            editable: false,
            listen_for_input: false,
            border: 0,
            border_color: Color::default(),
            image: None,
            color: Color::default(),
            parent: None,
        }
    }

    /// Kind of the element.
    pub fn kind(&self) -> ElementKind { self.kind }

    /// Host element this one is drawn relative to, if any.
    pub fn parent(&self) -> Option<ElementHandle> { self.parent.as_ref().and_then(|p| p.upgrade()).map(ElementHandle) }

    /// Top-left rectangle inside the parent implied by position, size and pivot.
    pub fn frame(&self) -> Recti {
        let parent_size = self.parent().map(|p| p.size()).unwrap_or(Dimensioni::new(0, 0));
        let anchor = self.position.resolve(parent_size);
        let offset = self.pivot.offset(self.size);
        rect(anchor.x - offset.x, anchor.y - offset.y, self.size.width, self.size.height)
    }
}

#[derive(Clone)]
/// Shared handle to an element record; equality is identity.
pub struct ElementHandle(Rc<RefCell<Element>>);

impl ElementHandle {
    fn new(element: Element) -> Self { Self(Rc::new(RefCell::new(element))) }

    /// Creates an empty panel.
    pub fn panel() -> Self { Self::new(Element::new(ElementKind::Panel)) }

    /// Creates a label with the given text and font size.
    pub fn label(text: &str, font_size: i32) -> Self {
        let mut e = Element::new(ElementKind::Label);
        e.text = text.to_string();
        e.font_size = font_size;
        Self::new(e)
    }

    /// Creates a square glyph.
    pub fn image(icon: StockIcon, size: i32) -> Self {
        let mut e = Element::new(ElementKind::Image);
        e.image = Some(icon);
        e.size = Dimensioni::new(size, size);
        Self::new(e)
    }

    /// Creates a text field of the given size.
    pub fn text_field(text: &str, width: i32, height: i32) -> Self {
        let mut e = Element::new(ElementKind::TextField);
        e.text = text.to_string();
        e.size = Dimensioni::new(width, height);
        Self::new(e)
    }

    pub(crate) fn inner(&self) -> Ref<'_, Element> { self.0.borrow() }

    /// Runs `f` with a shared borrow of the element.
    pub fn with<R>(&self, f: impl FnOnce(&Element) -> R) -> R { f(&self.0.borrow()) }

    /// Runs `f` with an exclusive borrow of the element.
    pub fn with_mut<R>(&self, f: impl FnOnce(&mut Element) -> R) -> R { f(&mut self.0.borrow_mut()) }

    /// Identity comparison.
    pub fn ptr_eq(&self, other: &ElementHandle) -> bool { Rc::ptr_eq(&self.0, &other.0) }

    pub fn kind(&self) -> ElementKind { self.0.borrow().kind }
    pub fn size(&self) -> Dimensioni { self.0.borrow().size }
    pub fn width(&self) -> i32 { self.0.borrow().size.width }
    pub fn height(&self) -> i32 { self.0.borrow().size.height }
    pub fn is_visible(&self) -> bool { self.0.borrow().visible }
    pub fn is_clickable(&self) -> bool { self.0.borrow().clickable }
    pub fn pivot(&self) -> Pivot { self.0.borrow().pivot }
    pub fn text(&self) -> String { self.0.borrow().text.clone() }
    pub fn frame(&self) -> Recti { self.0.borrow().frame() }

    /// Pixel position of the pivot inside the parent.
    pub fn position(&self) -> Vec2i {
        let e = self.0.borrow();
        let parent = e.parent().map(|p| p.size()).unwrap_or(Dimensioni::new(0, 0));
        e.position.resolve(parent)
    }

    pub fn set_position(&self, pos: Vec2i) { self.0.borrow_mut().position = Position::Pixels(pos) }

    /// Places the pivot at a fraction of the parent's size.
    pub fn set_relative_position(&self, x: f32, y: f32) { self.set_anchored_position(x, y, vec2(0, 0)) }

    /// Places the pivot at a fraction of the parent's size plus a pixel offset.
    pub fn set_anchored_position(&self, x: f32, y: f32, offset: Vec2i) { self.0.borrow_mut().position = Position::Relative { x, y, offset } }

    pub fn set_size(&self, width: i32, height: i32) { self.0.borrow_mut().size = Dimensioni::new(width, height) }
    pub fn set_pivot(&self, pivot: Pivot) { self.0.borrow_mut().pivot = pivot }
    pub fn set_visible(&self, visible: bool) { self.0.borrow_mut().visible = visible }
    pub fn set_clickable(&self, clickable: bool) { self.0.borrow_mut().clickable = clickable }
    pub fn set_color(&self, color: Color) { self.0.borrow_mut().color = color }
    pub fn set_font_color(&self, color: Color) { self.0.borrow_mut().font_color = color }
    pub fn set_image(&self, icon: StockIcon) { self.0.borrow_mut().image = Some(icon) }

    pub fn set_border(&self, thickness: i32, color: Color) {
        let mut e = self.0.borrow_mut();
        e.border = thickness;
        e.border_color = color;
    }

    /// Replaces the text, keeping the element's size untouched.
    pub fn set_text(&self, text: &str) { self.0.borrow_mut().text = text.to_string() }

    /// Records `parent` as the host element this one is drawn inside.
    pub fn set_parent(&self, parent: Option<&ElementHandle>) { self.0.borrow_mut().parent = parent.map(|p| Rc::downgrade(&p.0)) }

    /// Returns `true` if this element is drawn inside `parent`.
    pub fn is_child_of(&self, parent: &ElementHandle) -> bool { self.inner().parent().map(|p| p.ptr_eq(parent)).unwrap_or(false) }

    /// Resizes a label to its text: widest line by `metrics`, one `font_size` per line.
    pub fn fit_text(&self, metrics: &dyn TextMetrics) {
        let mut e = self.0.borrow_mut();
        let lines = e.text.split('\n').count().max(1) as i32;
        let width = e.text.split('\n').map(|l| metrics.text_width(l, e.font_size)).max().unwrap_or(0);
        e.size = Dimensioni::new(width, e.font_size * lines);
    }
}

impl std::fmt::Debug for ElementHandle {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let e = self.0.borrow();
        f.debug_struct("ElementHandle").field("kind", &e.kind).field("text", &e.text).finish()
    }
}
