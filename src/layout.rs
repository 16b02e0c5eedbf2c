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
use std::cmp::max;
use tracing::trace;

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
/// How a container arranges its children.
pub enum LayoutKind {
    /// Left to right.
    SideBySide,
    /// Top to bottom, optionally paged.
    Stacked,
    /// Fixed grid filled row by row.
    Grid {
        /// Number of columns.
        cols: usize,
        /// Number of rows.
        rows: usize,
    },
}

#[derive(Copy, Clone)]
pub(crate) struct Spacing {
    pub margin: i32,
    pub padding: i32,
    pub button: i32,
}

/// Pivot children get in a column aligned with `flags`.
pub(crate) fn pivot_for(flags: LayoutFlags) -> Pivot {
    if flags.is_right() {
        Pivot::TopRight
    } else if flags.is_centre() {
        Pivot::Center
    } else {
        Pivot::TopLeft
    }
}

pub(crate) struct StackState {
    flags: LayoutFlags,
    max_rows: Option<usize>,
    first: usize,
    up: ElementHandle,
    down: ElementHandle,
    // geometry of the last arrange pass, reused when paging
    margin: i32,
    top: i32,
    spacing: i32,
    // leading gaps that take one extra pixel of spread
    spare: i32,
    col_w: i32,
    height: i32,
    pager_x: i32,
    button: i32,
}

impl StackState {
    fn new(flags: LayoutFlags, panel: &ElementHandle, button: i32) -> Self {
        let glyph = |icon| {
            let g = ElementHandle::image(icon, button);
            g.set_clickable(true);
            g.set_visible(false);
            g.set_parent(Some(panel));
            g
        };
        Self {
            flags,
            max_rows: None,
            first: 0,
            up: glyph(StockIcon::ArrowUp),
            down: glyph(StockIcon::ArrowDown),
            margin: 0,
            top: 0,
            spacing: 0,
            spare: 0,
            col_w: 0,
            height: 0,
            pager_x: 0,
            button,
        }
    }

    pub fn max_rows(&self) -> Option<usize> { self.max_rows }

    pub fn first(&self) -> usize { self.first }

    pub fn set_max_rows(&mut self, rows: i32, count: usize) {
        self.max_rows = usize::try_from(rows).ok().filter(|r| *r >= 1);
        self.clamp(count);
    }

    fn is_limited(&self, count: usize) -> bool { self.max_rows.map(|m| count > m).unwrap_or(false) }

    /// Half-open range of the rows currently shown.
    fn window(&self, count: usize) -> (usize, usize) {
        match self.max_rows {
            Some(max) if count > max => (self.first, self.first + max),
            _ => (0, count),
        }
    }

    pub fn clamp(&mut self, count: usize) {
        self.first = match self.max_rows {
            Some(max) if count > max => self.first.min(count - max),
            _ => 0,
        };
    }

    fn step(&self) -> usize { self.max_rows.map(|m| max(m, 2) - 1).unwrap_or(0) }

    pub fn scroll_down(&mut self, count: usize) {
        if let Some(max) = self.max_rows.filter(|m| count > *m) {
            self.first = (self.first + self.step()).min(count - max);
        }
    }

    pub fn scroll_up(&mut self, _count: usize) { self.first = self.first.saturating_sub(self.step()); }

    /// Repositions the shown rows and the paging glyphs without resizing the container.
    pub fn update_rows(&self, items: &[&Child]) {
        let count = items.len();
        let (first, last) = self.window(count);
        let mut y = self.top;
        let mut gaps = 0;
        for (i, child) in items.iter().enumerate() {
            if i < first || i >= last {
                child.set_visible(false);
                continue;
            }
            let size = child.size();
            let dx = if self.flags.is_centre() {
                (self.col_w - size.width) / 2
            } else if self.flags.is_right() {
                self.col_w - size.width
            } else {
                0
            };
            child.place(vec2(self.margin + dx, y));
            child.set_visible(true);
            y += size.height + self.spacing + i32::from(gaps < self.spare);
            gaps += 1;
        }
        let limited = self.is_limited(count);
        self.up.set_position(vec2(self.pager_x, self.margin));
        self.up.set_visible(limited && first > 0);
        self.down.set_position(vec2(self.pager_x, self.height - self.margin - self.button));
        self.down.set_visible(limited && last < count);
    }
}

pub(crate) struct GridState {
    cols: usize,
    rows: usize,
    col_flags: Vec<LayoutFlags>,
    row_flags: Vec<LayoutFlags>,
}

impl GridState {
    fn new(cols: usize, rows: usize) -> Self {
        Self { cols, rows, col_flags: vec![LayoutFlags::H_LEFT; cols], row_flags: vec![LayoutFlags::V_MIDDLE; rows] }
    }

    pub fn capacity(&self) -> usize { self.cols * self.rows }

    fn cell_pivot(&self, index: usize) -> Pivot {
        match self.cols {
            0 => Pivot::TopLeft,
            cols if self.col_flags[index % cols].is_right() => Pivot::TopRight,
            _ => Pivot::TopLeft,
        }
    }

    pub fn set_col_flag(&mut self, col: usize, flags: LayoutFlags, cells: &[Option<Child>]) -> Result<(), UiError> {
        if col >= self.cols {
            return Err(UiError::InvalidParameter(format!("column {} of {}", col, self.cols)));
        }
        self.col_flags[col] = flags;
        for cell in cells.iter().skip(col).step_by(self.cols).flatten() {
            cell.element().set_pivot(self.cell_pivot(col));
        }
        Ok(())
    }

    pub fn set_row_flag(&mut self, row: usize, flags: LayoutFlags) -> Result<(), UiError> {
        if row >= self.rows {
            return Err(UiError::InvalidParameter(format!("row {} of {}", row, self.rows)));
        }
        self.row_flags[row] = flags;
        Ok(())
    }
}

/// Placement strategy of a container, with the state it keeps between passes.
pub(crate) enum Arrangement {
    SideBySide(LayoutFlags),
    Stacked(StackState),
    Grid(GridState),
}

impl Arrangement {
    pub fn new(kind: LayoutKind, flags: LayoutFlags, panel: &ElementHandle, button: i32) -> Self {
        match kind {
            LayoutKind::SideBySide => Arrangement::SideBySide(flags),
            LayoutKind::Stacked => Arrangement::Stacked(StackState::new(flags, panel, button)),
            LayoutKind::Grid { cols, rows } => Arrangement::Grid(GridState::new(cols, rows)),
        }
    }

    pub fn kind(&self) -> LayoutKind {
        match self {
            Arrangement::SideBySide(_) => LayoutKind::SideBySide,
            Arrangement::Stacked(_) => LayoutKind::Stacked,
            Arrangement::Grid(g) => LayoutKind::Grid { cols: g.cols, rows: g.rows },
        }
    }

    /// Whether an entry may be appended after `len` existing ones.
    pub fn has_room(&self, len: usize) -> bool {
        match self {
            Arrangement::Grid(g) => len < g.capacity(),
            _ => true,
        }
    }

    /// Pivot of the child that will land at `index`.
    pub fn pivot_at(&self, index: usize) -> Pivot {
        match self {
            Arrangement::SideBySide(_) => Pivot::TopLeft,
            Arrangement::Stacked(s) => pivot_for(s.flags),
            Arrangement::Grid(g) => g.cell_pivot(index),
        }
    }

    /// The paging glyphs, if any.
    pub fn glyphs(&self) -> Vec<ElementHandle> {
        match self {
            Arrangement::Stacked(s) => vec![s.up.clone(), s.down.clone()],
            _ => Vec::new(),
        }
    }

    /// Private id of a paging glyph.
    pub fn glyph_id(&self, element: &ElementHandle) -> Option<i32> {
        match self {
            Arrangement::Stacked(s) if s.up.ptr_eq(element) => Some(PAGE_UP_ID),
            Arrangement::Stacked(s) if s.down.ptr_eq(element) => Some(PAGE_DOWN_ID),
            _ => None,
        }
    }

    /// Measures and places `children`, returning the container's new size.
    ///
    /// With `reset` set, nested containers are measured from scratch and `min_w`/`min_h` are
    /// ignored; otherwise the container grows to the minimum and hands the extra space down.
    pub fn arrange(&mut self, children: &[Option<Child>], sp: Spacing, metrics: &dyn TextMetrics, min_w: i32, min_h: i32, reset: bool) -> Dimensioni {
        if reset {
            for child in children.iter().flatten() {
                child.measure(0, 0, true, metrics);
            }
        }
        let (min_w, min_h) = if reset { (0, 0) } else { (min_w, min_h) };
        match self {
            Arrangement::SideBySide(flags) => side_by_side(*flags, children, sp, metrics, min_w, min_h, reset),
            Arrangement::Stacked(state) => stacked(state, children, sp, metrics, min_w, min_h, reset),
            Arrangement::Grid(grid) => grid_cells(grid, children, sp, metrics, min_w, min_h, reset),
        }
    }
}

fn side_by_side(flags: LayoutFlags, children: &[Option<Child>], sp: Spacing, metrics: &dyn TextMetrics, min_w: i32, min_h: i32, reset: bool) -> Dimensioni {
    let items: Vec<&Child> = children.iter().flatten().collect();
    let n = items.len() as i32;
    let m = sp.margin;

    let mut nat_w = 2 * m + if n > 0 { sp.padding * (n - 1) } else { 0 };
    let mut nat_h = 0;
    for child in &items {
        let size = child.size();
        nat_w += size.width;
        nat_h = max(nat_h, size.height);
    }
    nat_h += 2 * m;

    let width = max(nat_w, min_w);
    let height = max(nat_h, min_h);
    let inner_h = height - 2 * m;
    if !reset {
        for child in &items {
            child.measure(0, inner_h, false, metrics);
        }
    }

    let excess = width - nat_w;
    let mut x = m;
    let mut gap = sp.padding;
    let mut spare = 0;
    if excess > 0 {
        if flags.is_right() {
            x += excess;
        } else if flags.is_centre() {
            x += excess / 2;
        } else if flags.is_h_spread() && n >= 2 {
            gap += excess / (n - 1);
            spare = excess % (n - 1);
        }
    }

    for (i, child) in items.iter().enumerate() {
        let size = child.size();
        let y = if flags.is_bottom() {
            m + inner_h - size.height
        } else if flags.is_middle() {
            m + (inner_h - size.height) / 2
        } else {
            m
        };
        child.place(vec2(x, y));
        x += size.width + gap + i32::from((i as i32) < spare);
    }
    trace!(width, height, children = n, "side-by-side pass");
    Dimensioni::new(width, height)
}

fn stacked(state: &mut StackState, children: &[Option<Child>], sp: Spacing, metrics: &dyn TextMetrics, min_w: i32, min_h: i32, reset: bool) -> Dimensioni {
    let items: Vec<&Child> = children.iter().flatten().collect();
    let count = items.len();
    let m = sp.margin;
    state.clamp(count);
    let (first, last) = state.window(count);

    let mut col_w = 0;
    let mut rows_h = 0;
    let mut shown = 0;
    for (i, child) in items.iter().enumerate() {
        let size = child.size();
        col_w = max(col_w, size.width);
        if i >= first && i < last {
            rows_h += size.height;
            shown += 1;
        }
    }
    if shown > 0 {
        rows_h += sp.padding * (shown - 1);
    }

    let pager_w = if state.is_limited(count) { sp.padding + sp.button } else { 0 };
    let nat_w = 2 * m + col_w + pager_w;
    let nat_h = 2 * m + rows_h;
    let width = max(nat_w, min_w);
    let height = max(nat_h, min_h);
    let col_w = width - 2 * m - pager_w;
    if !reset {
        for child in &items {
            child.measure(col_w, 0, false, metrics);
        }
    }

    let excess = height - nat_h;
    let mut top = m;
    let mut spacing = sp.padding;
    let mut spare = 0;
    if excess > 0 {
        if state.flags.is_bottom() {
            top += excess;
        } else if state.flags.is_middle() {
            top += excess / 2;
        } else if state.flags.is_v_spread() && shown >= 2 {
            spacing += excess / (shown - 1);
            spare = excess % (shown - 1);
        }
    }

    state.margin = m;
    state.top = top;
    state.spacing = spacing;
    state.spare = spare;
    state.col_w = col_w;
    state.height = height;
    state.pager_x = m + col_w + sp.padding;
    state.button = sp.button;
    state.update_rows(&items);
    trace!(width, height, count, first = state.first, "stacked pass");
    Dimensioni::new(width, height)
}

fn grid_cells(grid: &GridState, children: &[Option<Child>], sp: Spacing, metrics: &dyn TextMetrics, min_w: i32, min_h: i32, reset: bool) -> Dimensioni {
    let m = sp.margin;
    let cells = &children[..children.len().min(grid.capacity())];
    let mut col_w = vec![0; grid.cols];
    let mut row_h = vec![0; grid.rows];
    let measure = |col_w: &mut Vec<i32>, row_h: &mut Vec<i32>| {
        for (i, cell) in cells.iter().enumerate() {
            if let Some(child) = cell {
                let size = child.size();
                let (c, r) = (i % grid.cols, i / grid.cols);
                col_w[c] = max(col_w[c], size.width);
                row_h[r] = max(row_h[r], size.height);
            }
        }
    };
    measure(&mut col_w, &mut row_h);
    if !reset {
        // nested containers may fill their cell
        for (i, cell) in cells.iter().enumerate() {
            if let Some(child) = cell {
                child.measure(col_w[i % grid.cols], row_h[i / grid.cols], false, metrics);
            }
        }
        measure(&mut col_w, &mut row_h);
    }

    let sum = |v: &[i32]| v.iter().sum::<i32>() + sp.padding * (max(v.len() as i32, 1) - 1) + 2 * m;
    let width = max(sum(&col_w), min_w);
    let height = max(sum(&row_h), min_h);

    let mut x = m;
    let mut y = m;
    for (i, cell) in cells.iter().enumerate() {
        let (c, r) = (i % grid.cols, i / grid.cols);
        if let Some(child) = cell {
            let size = child.size();
            let col_flags = grid.col_flags[c];
            let row_flags = grid.row_flags[r];
            let dx = if col_flags.is_right() {
                col_w[c] - size.width
            } else if col_flags.is_centre() {
                (col_w[c] - size.width) / 2
            } else {
                0
            };
            let dy = if row_flags.is_bottom() {
                row_h[r] - size.height
            } else if row_flags.is_middle() {
                (row_h[r] - size.height) / 2
            } else {
                0
            };
            child.place(vec2(x + dx, y + dy));
        }
        x += col_w[c] + sp.padding;
        if c == grid.cols - 1 {
            x = m;
            y += row_h[r] + sp.padding;
        }
    }
    trace!(width, height, cells = cells.len(), "grid pass");
    Dimensioni::new(width, height)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn spacing() -> Spacing { Spacing { margin: 5, padding: 6, button: 18 } }

    fn boxes(sizes: &[(i32, i32)]) -> Vec<Option<Child>> {
        sizes
            .iter()
            .map(|&(w, h)| {
                let e = ElementHandle::image(StockIcon::Plus, 0);
                e.set_size(w, h);
                Some(Child::Element(e))
            })
            .collect()
    }

    fn frame(child: &Option<Child>) -> (i32, i32, i32, i32) {
        let r = child.as_ref().map(|c| c.element().frame()).unwrap_or(rect(0, 0, 0, 0));
        (r.x, r.y, r.width, r.height)
    }

    #[test]
    fn side_by_side_spread_reaches_both_margins() {
        let metrics = AverageCharMetrics::new(0.5);
        let kids = boxes(&[(20, 10), (20, 10), (20, 10)]);
        let mut arr = Arrangement::SideBySide(LayoutFlags::H_SPREAD);
        let size = arr.arrange(&kids, spacing(), &metrics, 200, 0, false);
        assert_eq!((size.width, size.height), (200, 20));
        assert_eq!(frame(&kids[0]).0, 5);
        assert_eq!(frame(&kids[1]).0, 90);
        assert_eq!(frame(&kids[2]).0, 175);
        assert_eq!(frame(&kids[2]).0 + frame(&kids[2]).2, 200 - 5);
    }

    #[test]
    fn side_by_side_spread_hands_out_the_remainder() {
        let metrics = AverageCharMetrics::new(0.5);
        let kids = boxes(&[(20, 10), (20, 10), (20, 10)]);
        let mut arr = Arrangement::SideBySide(LayoutFlags::H_SPREAD);
        arr.arrange(&kids, spacing(), &metrics, 201, 0, false);
        // excess 119 over two gaps, the first one takes the odd pixel
        let xs: Vec<i32> = kids.iter().map(|k| frame(k).0).collect();
        assert_eq!(xs, vec![5, 91, 176]);
        assert_eq!(frame(&kids[2]).0 + frame(&kids[2]).2, 201 - 5);
    }

    #[test]
    fn alignment_wins_over_spread() {
        let metrics = AverageCharMetrics::new(0.5);
        let kids = boxes(&[(20, 10), (20, 10), (20, 10)]);
        let mut arr = Arrangement::SideBySide(LayoutFlags::H_RIGHT | LayoutFlags::H_SPREAD);
        arr.arrange(&kids, spacing(), &metrics, 200, 0, false);
        let xs: Vec<i32> = kids.iter().map(|k| frame(k).0).collect();
        assert_eq!(xs, vec![123, 149, 175]);
    }

    #[test]
    fn side_by_side_alignment() {
        let metrics = AverageCharMetrics::new(0.5);
        let kids = boxes(&[(20, 10), (20, 30)]);
        let mut arr = Arrangement::SideBySide(LayoutFlags::H_RIGHT | LayoutFlags::V_BOTTOM);
        let size = arr.arrange(&kids, spacing(), &metrics, 100, 0, false);
        assert_eq!(size.width, 100);
        // natural width 56, excess 44
        assert_eq!(frame(&kids[0]), (49, 25, 20, 10));
        assert_eq!(frame(&kids[1]), (75, 5, 20, 30));

        let mut arr = Arrangement::SideBySide(LayoutFlags::H_CENTRE | LayoutFlags::V_MIDDLE);
        arr.arrange(&kids, spacing(), &metrics, 100, 0, false);
        assert_eq!(frame(&kids[0]), (27, 15, 20, 10));
    }

    #[test]
    fn measure_pass_ignores_minimum() {
        let metrics = AverageCharMetrics::new(0.5);
        let kids = boxes(&[(20, 10)]);
        let mut arr = Arrangement::SideBySide(LayoutFlags::default());
        let size = arr.arrange(&kids, spacing(), &metrics, 300, 300, true);
        assert_eq!((size.width, size.height), (30, 20));
    }

    #[test]
    fn stacked_pages_and_clamps() {
        let metrics = AverageCharMetrics::new(0.5);
        let panel = ElementHandle::panel();
        let kids = boxes(&[(40, 15); 7]);
        let mut state = StackState::new(LayoutFlags::default(), &panel, 18);
        state.set_max_rows(3, kids.len());
        let mut arr = Arrangement::Stacked(state);
        let size = arr.arrange(&kids, spacing(), &metrics, 0, 0, false);
        // 3 rows of 15 with 2 gaps, pager column on the right
        assert_eq!((size.width, size.height), (5 + 40 + 6 + 18 + 5, 5 + 57 + 5));
        let visible: Vec<bool> = kids.iter().flatten().map(|c| c.element().is_visible()).collect();
        assert_eq!(visible, vec![true, true, true, false, false, false, false]);

        let Arrangement::Stacked(state) = &mut arr else { unreachable!() };
        assert!(!state.up.is_visible());
        assert!(state.down.is_visible());
        assert_eq!(state.down.frame().y, 67 - 5 - 18);

        let mut seen = Vec::new();
        for _ in 0..4 {
            state.scroll_down(7);
            seen.push(state.first());
        }
        assert_eq!(seen, vec![2, 4, 4, 4]);
        state.scroll_up(7);
        assert_eq!(state.first(), 2);
        state.scroll_up(7);
        state.scroll_up(7);
        assert_eq!(state.first(), 0);
    }

    #[test]
    fn stacked_right_alignment_uses_column_width() {
        let metrics = AverageCharMetrics::new(0.5);
        let panel = ElementHandle::panel();
        let kids = boxes(&[(40, 15), (10, 15)]);
        let mut arr = Arrangement::Stacked(StackState::new(LayoutFlags::H_RIGHT | LayoutFlags::V_BOTTOM, &panel, 18));
        let size = arr.arrange(&kids, spacing(), &metrics, 0, 100, false);
        assert_eq!(size.height, 100);
        // natural height 46, everything pushed down by 54
        assert_eq!(frame(&kids[0]), (5, 59, 40, 15));
        assert_eq!(frame(&kids[1]), (35, 80, 10, 15));
    }

    #[test]
    fn stacked_centres_both_ways() {
        let metrics = AverageCharMetrics::new(0.5);
        let panel = ElementHandle::panel();
        let kids = boxes(&[(40, 15), (10, 15)]);
        let mut arr = Arrangement::Stacked(StackState::new(LayoutFlags::H_CENTRE | LayoutFlags::V_MIDDLE, &panel, 18));
        let size = arr.arrange(&kids, spacing(), &metrics, 0, 100, false);
        assert_eq!((size.width, size.height), (50, 100));
        // natural height 46, half of the 54 left above
        assert_eq!(frame(&kids[0]), (5, 32, 40, 15));
        assert_eq!(frame(&kids[1]), (20, 53, 10, 15));
    }

    #[test]
    fn stacked_spread_reaches_the_bottom_margin() {
        let metrics = AverageCharMetrics::new(0.5);
        let panel = ElementHandle::panel();
        let kids = boxes(&[(40, 15); 3]);
        let mut arr = Arrangement::Stacked(StackState::new(LayoutFlags::V_SPREAD, &panel, 18));
        arr.arrange(&kids, spacing(), &metrics, 0, 102, false);
        // natural height 67, 35 spread over two gaps
        let ys: Vec<i32> = kids.iter().map(|k| frame(k).1).collect();
        assert_eq!(ys, vec![5, 44, 82]);
        assert_eq!(frame(&kids[2]).1 + frame(&kids[2]).3, 102 - 5);
    }

    #[test]
    fn grid_rows_and_columns_align_inside_cells() {
        let metrics = AverageCharMetrics::new(0.5);
        let kids = boxes(&[(30, 10), (10, 20), (10, 10), (20, 30)]);
        let mut grid = GridState::new(2, 2);
        grid.set_col_flag(0, LayoutFlags::H_CENTRE, &kids).unwrap();
        grid.set_row_flag(0, LayoutFlags::V_TOP).unwrap();
        grid.set_row_flag(1, LayoutFlags::V_BOTTOM).unwrap();
        let mut arr = Arrangement::Grid(grid);
        let size = arr.arrange(&kids, spacing(), &metrics, 0, 0, false);
        // columns 30 and 20, rows 20 and 30
        assert_eq!((size.width, size.height), (5 + 30 + 6 + 20 + 5, 5 + 20 + 6 + 30 + 5));
        assert_eq!(frame(&kids[0]), (5, 5, 30, 10));
        assert_eq!(frame(&kids[1]), (41, 5, 10, 20));
        // centred in the 30 wide column, bottom of the row starting at 31
        assert_eq!(frame(&kids[2]), (15, 51, 10, 10));
        assert_eq!(frame(&kids[3]), (41, 31, 20, 30));
    }

    #[test]
    fn grid_skips_empty_cells() {
        let metrics = AverageCharMetrics::new(0.5);
        let mut kids = boxes(&[(30, 10), (10, 10), (10, 20)]);
        kids.insert(1, None);
        let mut arr = Arrangement::Grid(GridState::new(2, 2));
        let size = arr.arrange(&kids, spacing(), &metrics, 0, 0, false);
        // columns 30 and 10, rows 10 and 20
        assert_eq!((size.width, size.height), (5 + 30 + 6 + 10 + 5, 5 + 10 + 6 + 20 + 5));
        assert_eq!(frame(&kids[0]), (5, 5, 30, 10));
        // row 1 is middle aligned by default
        assert_eq!(frame(&kids[2]), (5, 26, 10, 10));
        assert_eq!(frame(&kids[3]), (41, 21, 10, 20));
    }

    #[test]
    fn grid_flags_are_range_checked() {
        let mut grid = GridState::new(2, 3);
        assert!(grid.set_col_flag(1, LayoutFlags::H_RIGHT, &[]).is_ok());
        assert!(matches!(grid.set_col_flag(2, LayoutFlags::H_RIGHT, &[]), Err(UiError::InvalidParameter(_))));
        assert!(grid.set_row_flag(2, LayoutFlags::V_BOTTOM).is_ok());
        assert!(grid.set_row_flag(3, LayoutFlags::V_BOTTOM).is_err());
    }

    #[test]
    fn right_column_repivots_cells() {
        let metrics = AverageCharMetrics::new(0.5);
        let kids = boxes(&[(10, 10), (20, 10), (30, 10), (40, 10)]);
        let mut grid = GridState::new(2, 2);
        grid.set_col_flag(1, LayoutFlags::H_RIGHT, &kids).unwrap();
        assert_eq!(kids[1].as_ref().map(|c| c.element().pivot()), Some(Pivot::TopRight));
        assert_eq!(kids[2].as_ref().map(|c| c.element().pivot()), Some(Pivot::TopLeft));
        let mut arr = Arrangement::Grid(grid);
        arr.arrange(&kids, spacing(), &metrics, 0, 0, false);
        // column 1 is 40 wide and starts at 5 + 30 + 6
        assert_eq!(frame(&kids[1]).0 + frame(&kids[1]).2, 41 + 40);
    }
}
