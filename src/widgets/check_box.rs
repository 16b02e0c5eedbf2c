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

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
/// Value of a check box or radio button.
pub enum CheckState {
    /// Greyed out, ignores clicks.
    Disabled = -1,
    Unchecked = 0,
    Checked = 1,
}

impl From<i32> for CheckState {
    /// Unknown values become `Unchecked`.
    fn from(value: i32) -> Self {
        match value {
            -1 => CheckState::Disabled,
            1 => CheckState::Checked,
            _ => CheckState::Unchecked,
        }
    }
}

/// A glyph followed by a label, laid out side by side.
///
/// Radio buttons sharing the same parent container form a group: checking one unchecks the
/// others. Plain check boxes never touch their siblings.
pub struct CheckBox {
    container: ContainerHandle,
    glyph: ElementHandle,
    label: ElementHandle,
    state: CheckState,
    radio: bool,
    id: Option<i32>,
    data: Option<ItemData>,
    theme: Theme,
}

impl CheckBox {
    fn apply(&self) {
        let icon = match (self.state == CheckState::Checked, self.radio) {
            (true, true) => StockIcon::RadioCheck,
            (true, false) => StockIcon::Check,
            (false, true) => StockIcon::RadioUncheck,
            (false, false) => StockIcon::Uncheck,
        };
        let enabled = self.state != CheckState::Disabled;
        self.glyph.set_image(icon);
        self.label.set_font_color(if enabled { self.theme.style.text_color } else { self.theme.style.text_dim_color });
        self.glyph.set_clickable(enabled);
        self.label.set_clickable(enabled);
        self.container.panel().set_clickable(enabled);
    }
}

#[derive(Clone)]
/// Shared handle to a [`CheckBox`]; equality is identity.
pub struct CheckBoxHandle(Rc<RefCell<CheckBox>>);

impl CheckBoxHandle {
    /// Creates a check box, or a radio button when `radio` is set.
    pub fn new(text: &str, state: CheckState, radio: bool, id: Option<i32>, data: Option<ItemData>, theme: &Theme) -> Self {
        let container = ContainerHandle::new(LayoutKind::SideBySide, LayoutFlags::H_LEFT | LayoutFlags::V_MIDDLE, theme);
        let glyph = ElementHandle::image(StockIcon::Uncheck, theme.style.button_size);
        let label = ElementHandle::label(text, theme.style.item_size);
        container.add(&glyph, None, None);
        container.add(&label, None, None);
        let cb = CheckBox { container, glyph, label, state, radio, id, data, theme: theme.clone() };
        cb.apply();
        Self(Rc::new(RefCell::new(cb)))
    }

    pub fn ptr_eq(&self, other: &CheckBoxHandle) -> bool { Rc::ptr_eq(&self.0, &other.0) }

    pub fn state(&self) -> CheckState { self.0.borrow().state }

    pub fn is_radio(&self) -> bool { self.0.borrow().radio }

    pub fn id(&self) -> Option<i32> { self.0.borrow().id }

    pub fn label(&self) -> ElementHandle { self.0.borrow().label.clone() }

    pub fn glyph(&self) -> ElementHandle { self.0.borrow().glyph.clone() }

    pub fn panel(&self) -> ElementHandle { self.container().panel() }

    pub(crate) fn container(&self) -> ContainerHandle { self.0.borrow().container.clone() }

    /// Container the box was added to.
    pub fn parent(&self) -> Option<ContainerHandle> { self.container().parent() }

    pub fn set_text(&self, text: &str) { self.label().set_text(text) }

    /// Changes the state; a radio button entering `Checked` unchecks its checked radio siblings.
    pub fn set_state(&self, state: CheckState) {
        let radio = {
            let mut cb = self.0.borrow_mut();
            if cb.state == state {
                return;
            }
            cb.state = state;
            cb.apply();
            cb.radio
        };
        if radio && state == CheckState::Checked {
            self.uncheck_siblings();
        }
    }

    pub(crate) fn uncheck_siblings(&self) {
        let Some(parent) = self.parent() else { return };
        let siblings: Vec<CheckBoxHandle> = parent.with(|c| {
            c.entries()
                .iter()
                .flatten()
                .filter_map(|e| match &e.child {
                    Child::CheckBox(cb) => Some(cb.clone()),
                    _ => None,
                })
                .collect()
        });
        for sibling in siblings {
            if !sibling.ptr_eq(self) && sibling.is_radio() && sibling.state() == CheckState::Checked {
                sibling.set_state(CheckState::Unchecked);
            }
        }
    }

    pub(crate) fn owns(&self, element: &ElementHandle) -> bool {
        let cb = self.0.borrow();
        cb.glyph.ptr_eq(element) || cb.label.ptr_eq(element) || cb.container.panel().ptr_eq(element)
    }

    /// Id and data reported for a click, without toggling.
    pub(crate) fn peek(&self) -> Option<(i32, Option<ItemData>)> {
        let cb = self.0.borrow();
        match cb.state {
            CheckState::Disabled => None,
            _ => cb.id.map(|id| (id, cb.data.clone())),
        }
    }

    /// Toggles the box the way a click does and reports its id and data.
    pub(crate) fn click(&self) -> Option<(i32, Option<ItemData>)> {
        let next = match (self.state(), self.is_radio()) {
            (CheckState::Disabled, _) => return None,
            (_, true) => CheckState::Checked,
            (CheckState::Checked, false) => CheckState::Unchecked,
            (CheckState::Unchecked, false) => CheckState::Checked,
        };
        self.set_state(next);
        self.peek()
    }

    pub(crate) fn free(&self) { self.container().free() }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::{Rng, SeedableRng, rngs::StdRng};

    fn group(theme: &Theme, radios: usize, boxes: usize) -> (ContainerHandle, Vec<CheckBoxHandle>) {
        let parent = ContainerHandle::new(LayoutKind::Stacked, LayoutFlags::default(), theme);
        let mut all = Vec::new();
        for i in 0..radios + boxes {
            let cb = CheckBoxHandle::new(&format!("option {}", i), CheckState::Unchecked, i < radios, Some(i as i32 + 10), None, theme);
            parent.add_check_box(&cb);
            all.push(cb);
        }
        (parent, all)
    }

    fn checked_radios(all: &[CheckBoxHandle]) -> usize { all.iter().filter(|cb| cb.is_radio() && cb.state() == CheckState::Checked).count() }

    #[test]
    fn out_of_range_values_become_unchecked() {
        assert_eq!(CheckState::from(-1), CheckState::Disabled);
        assert_eq!(CheckState::from(1), CheckState::Checked);
        assert_eq!(CheckState::from(7), CheckState::Unchecked);
        assert_eq!(CheckState::from(-9), CheckState::Unchecked);
    }

    #[test]
    fn state_drives_glyph_and_clickability() {
        let theme = Theme::default();
        let cb = CheckBoxHandle::new("Sound", CheckState::Unchecked, false, Some(3), None, &theme);
        assert_eq!(cb.glyph().with(|e| e.image), Some(StockIcon::Uncheck));
        assert!(cb.glyph().is_clickable() && cb.label().is_clickable());
        cb.set_state(CheckState::Checked);
        assert_eq!(cb.glyph().with(|e| e.image), Some(StockIcon::Check));
        cb.set_state(CheckState::Disabled);
        assert!(!cb.glyph().is_clickable() && !cb.label().is_clickable());
        assert_eq!(cb.label().with(|e| e.font_color), theme.style.text_dim_color);
        assert_eq!(cb.click().map(|(id, _)| id), None);
        assert_eq!(cb.state(), CheckState::Disabled);
    }

    #[test]
    fn glyph_sits_left_of_a_centred_label() {
        let theme = Theme::default();
        let cb = CheckBoxHandle::new("Fog", CheckState::Unchecked, false, None, None, &theme);
        cb.container().layout(0, 0);
        let (g, l) = (cb.glyph().frame(), cb.label().frame());
        assert_eq!((g.x, g.y), (0, 0));
        assert_eq!((l.x, l.y, l.height), (24, 1, 15));
        assert_eq!(cb.panel().size().height, 18);
    }

    #[test]
    fn clicks_toggle_and_report_own_id() {
        let theme = Theme::default();
        let (parent, all) = group(&theme, 2, 1);
        let plain = &all[2];
        assert_eq!(parent.route_click(&plain.label()).map(|(id, _)| id), Some(12));
        assert_eq!(plain.state(), CheckState::Checked);
        parent.route_click(&plain.glyph());
        assert_eq!(plain.state(), CheckState::Unchecked);

        parent.route_click(&all[0].glyph());
        parent.route_click(&all[0].glyph());
        assert_eq!(all[0].state(), CheckState::Checked);
        parent.route_click(&all[1].label());
        assert_eq!((all[0].state(), all[1].state()), (CheckState::Unchecked, CheckState::Checked));
        assert_eq!(parent.find_id(&all[1].glyph()), Some(11));
    }

    #[test]
    fn radio_groups_stay_exclusive() {
        let theme = Theme::default();
        let (_parent, all) = group(&theme, 5, 3);
        let mut rng = StdRng::seed_from_u64(0x5eed);
        for _ in 0..500 {
            let pick = &all[rng.random_range(0..all.len())];
            let boxes_before: Vec<CheckState> = all.iter().filter(|cb| !cb.is_radio()).map(|cb| cb.state()).collect();
            let state = CheckState::from(rng.random_range(-1..=1));
            if rng.random::<bool>() {
                pick.set_state(state);
            } else {
                pick.click();
            }
            assert!(checked_radios(&all) <= 1);
            if pick.is_radio() {
                let boxes_after: Vec<CheckState> = all.iter().filter(|cb| !cb.is_radio()).map(|cb| cb.state()).collect();
                assert_eq!(boxes_before, boxes_after);
            }
        }
    }

    #[test]
    fn groups_do_not_reach_nested_containers() {
        let theme = Theme::default();
        let (parent, all) = group(&theme, 1, 0);
        let nested = parent.add_new_container(LayoutKind::Stacked, LayoutFlags::default());
        let inner = CheckBoxHandle::new("inner", CheckState::Checked, true, Some(99), None, &theme);
        nested.add_check_box(&inner);
        all[0].set_state(CheckState::Checked);
        assert_eq!(inner.state(), CheckState::Checked);
    }

    #[test]
    fn adding_a_checked_radio_keeps_the_group_exclusive() {
        let theme = Theme::default();
        let (parent, all) = group(&theme, 2, 0);
        all[0].set_state(CheckState::Checked);
        let late = CheckBoxHandle::new("late", CheckState::Checked, true, None, None, &theme);
        parent.add_check_box(&late);
        assert_eq!(all[0].state(), CheckState::Unchecked);
        assert_eq!(late.state(), CheckState::Checked);
    }
}
