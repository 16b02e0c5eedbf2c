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
//! Retained-mode overlay panels for remote viewers.
//!
//! The crate composes primitive host elements (panels, labels, images and text fields) into
//! automatically laid out containers, wraps them into modal windows and keeps those windows on a
//! per-viewer display stack. Rendering, transport and persistence stay on the host side: the core
//! only mutates element geometry and visibility and reacts to click and text-commit events.

use std::{
    cell::{Ref, RefCell},
    rc::{Rc, Weak},
};

mod container;
mod dialogs;
mod element;
mod error;
mod layout;
mod style;
mod timer;
mod viewer;
mod widgets;
mod window;
mod window_stack;

pub use container::*;
pub use dialogs::*;
pub use element::*;
pub use error::UiError;
pub use rs_math3d::*;
pub use style::*;
pub use viewer::*;
pub use widgets::*;
pub use window::*;
pub use window_stack::*;

use bitflags::*;

/// The id reported when the default button of a window is clicked.
pub const OK_ID: i32 = 0;
/// The id reported when a window is closed or cancelled.
pub const ABORT_ID: i32 = -1;
// Ids below `ABORT_ID` are consumed by the containers and never reach a callback as a click.
pub(crate) const PAGE_UP_ID: i32 = -2;
pub(crate) const PAGE_DOWN_ID: i32 = -3;
pub(crate) const INPUT_ID: i32 = -4;

/// Returns `true` when `id` may be forwarded to a window callback as a click notification.
pub fn is_public_id(id: i32) -> bool { id >= ABORT_ID }

bitflags! {
    #[derive(Copy, Clone, Debug, PartialEq, Eq)]
    /// Alignment and distribution options of a container.
    ///
    /// Horizontal and vertical options can be combined; their exact meaning depends on the
    /// arrangement of the container (see [`LayoutKind`]).
    pub struct LayoutFlags : u32 {
        /// Distributes excess vertical space evenly between the children.
        const V_SPREAD = 0x20;
        /// Aligns children to the bottom.
        const V_BOTTOM = 0x10;
        /// Centres children vertically.
        const V_MIDDLE = 0x08;
        /// Aligns children to the top (default).
        const V_TOP = 0x00;
        /// Distributes excess horizontal space evenly between the children.
        const H_SPREAD = 0x04;
        /// Aligns children to the right.
        const H_RIGHT = 0x02;
        /// Centres children horizontally.
        const H_CENTRE = 0x01;
        /// Aligns children to the left (default).
        const H_LEFT = 0x00;
    }
}

impl LayoutFlags {
    /// Returns `true` if children are right aligned.
    pub fn is_right(&self) -> bool { self.intersects(Self::H_RIGHT) }
    /// Returns `true` if children are horizontally centred.
    pub fn is_centre(&self) -> bool { self.intersects(Self::H_CENTRE) }
    /// Returns `true` if excess horizontal space is spread between children.
    pub fn is_h_spread(&self) -> bool { self.intersects(Self::H_SPREAD) }
    /// Returns `true` if children are bottom aligned.
    pub fn is_bottom(&self) -> bool { self.intersects(Self::V_BOTTOM) }
    /// Returns `true` if children are vertically centred.
    pub fn is_middle(&self) -> bool { self.intersects(Self::V_MIDDLE) }
    /// Returns `true` if excess vertical space is spread between children.
    pub fn is_v_spread(&self) -> bool { self.intersects(Self::V_SPREAD) }
}

impl Default for LayoutFlags {
    fn default() -> Self { Self::H_LEFT | Self::V_TOP }
}

#[derive(Default, Copy, Clone, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
/// Simple RGBA color stored with 8-bit components.
pub struct Color {
    /// Red channel.
    pub r: u8,
    /// Green channel.
    pub g: u8,
    /// Blue channel.
    pub b: u8,
    /// Alpha channel.
    pub a: u8,
}

impl Color {
    /// Builds a color from a packed `0xRRGGBBAA` value.
    pub const fn from_rgba(value: u32) -> Self {
        Self {
            r: (value >> 24) as u8,
            g: (value >> 16) as u8,
            b: (value >> 8) as u8,
            a: value as u8,
        }
    }
}

/// Convenience constructor for [`Vec2i`].
pub fn vec2(x: i32, y: i32) -> Vec2i { Vec2i { x, y } }

/// Convenience constructor for [`Recti`].
pub fn rect(x: i32, y: i32, w: i32, h: i32) -> Recti { Recti { x, y, width: w, height: h } }

/// Convenience constructor for [`Color`].
pub fn color(r: u8, g: u8, b: u8, a: u8) -> Color { Color { r, g, b, a } }

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn packed_color_unpacks_channels() {
        let c = Color::from_rgba(0x0060D0FF);
        assert_eq!((c.r, c.g, c.b, c.a), (0x00, 0x60, 0xD0, 0xFF));
    }

    #[test]
    fn internal_ids_are_not_public() {
        assert!(is_public_id(OK_ID));
        assert!(is_public_id(ABORT_ID));
        assert!(is_public_id(42));
        assert!(!is_public_id(PAGE_UP_ID));
        assert!(!is_public_id(PAGE_DOWN_ID));
        assert!(!is_public_id(INPUT_ID));
    }
}
