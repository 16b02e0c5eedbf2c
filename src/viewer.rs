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

#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
/// Stable identity of a viewer session.
pub struct ViewerKey(pub u64);

/// A remote screen elements are mirrored to.
///
/// Attaching an element that is already attached, or detaching one that is not, must be
/// harmless.
pub trait Viewer {
    /// Identity of the session.
    fn key(&self) -> ViewerKey;
    /// Starts mirroring `element`.
    fn attach(&mut self, element: &ElementHandle);
    /// Stops mirroring `element`.
    fn detach(&mut self, element: &ElementHandle);
    /// Shows or hides the pointer so the viewer can interact with windows.
    fn set_pointer_visible(&mut self, visible: bool);
}

/// In-memory viewer keeping the attached set, for hosts without a screen and for tests.
pub struct HeadlessViewer {
    key: ViewerKey,
    attached: Vec<ElementHandle>,
    pointer_visible: bool,
}

impl HeadlessViewer {
    pub fn new(key: u64) -> Self { Self { key: ViewerKey(key), attached: Vec::new(), pointer_visible: false } }

    pub fn is_attached(&self, element: &ElementHandle) -> bool { self.attached.iter().any(|e| e.ptr_eq(element)) }

    pub fn attached(&self) -> &[ElementHandle] { &self.attached }

    pub fn pointer_visible(&self) -> bool { self.pointer_visible }
}

impl Viewer for HeadlessViewer {
    fn key(&self) -> ViewerKey { self.key }

    fn attach(&mut self, element: &ElementHandle) {
        if !self.is_attached(element) {
            self.attached.push(element.clone());
        }
    }

    fn detach(&mut self, element: &ElementHandle) { self.attached.retain(|e| !e.ptr_eq(element)) }

    fn set_pointer_visible(&mut self, visible: bool) { self.pointer_visible = visible }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn attach_is_a_set() {
        let mut v = HeadlessViewer::new(1);
        let e = ElementHandle::panel();
        v.attach(&e);
        v.attach(&e);
        assert_eq!(v.attached().len(), 1);
        v.detach(&e);
        v.detach(&e);
        assert!(v.attached().is_empty());
    }
}
