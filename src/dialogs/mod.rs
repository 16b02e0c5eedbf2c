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
// Forwards a dialog wrapper to the modal window it builds.
macro_rules! implement_modal {
    ($ty:ident) => {
        impl std::ops::Deref for $ty {
            type Target = ModalWindow;
            fn deref(&self) -> &ModalWindow { &self.window }
        }

        impl std::ops::DerefMut for $ty {
            fn deref_mut(&mut self) -> &mut ModalWindow { &mut self.window }
        }

        impl From<$ty> for ModalWindow {
            fn from(dialog: $ty) -> ModalWindow { dialog.window }
        }

        impl $ty {
            /// Releases the window so it can be inserted in a [`WindowStack`].
            pub fn into_window(self) -> ModalWindow { self.window }
        }
    };
}

mod dialogue_box;
mod input_box;
mod menu;
mod message_box;
mod modeless;
mod users_menu;

pub use dialogue_box::*;
pub use input_box::*;
pub use menu::*;
pub use message_box::*;
pub use modeless::*;
pub use users_menu::*;

use super::*;
