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
use std::fmt::Display;
use tracing::warn;

/// Source of the known users, as `(database id, name)` pairs.
pub trait UserRoster {
    type Error: Display;

    fn users(&self) -> Result<Vec<(i32, String)>, Self::Error>;
}

/// A menu listing every known user but one. Items report the user id with the name as data.
pub struct UsersMenu {
    menu: Menu,
}

impl UsersMenu {
    /// A roster that fails leaves the menu empty.
    pub fn new<R: UserRoster>(title: &str, callback: Option<Callback>, exclude_id: i32, roster: &R, theme: &Theme) -> Self {
        let menu = Menu::new(title, callback, theme);
        let users = roster.users().unwrap_or_else(|e| {
            warn!("user roster unavailable: {}", e);
            Vec::new()
        });
        for (id, name) in users.into_iter().filter(|(id, _)| *id != exclude_id) {
            menu.add_item(&name, Some(id), Some(Rc::new(name.clone())));
        }
        Self { menu }
    }

    pub fn menu(&self) -> &Menu { &self.menu }

    pub fn into_window(self) -> ModalWindow { self.menu.into_window() }
}

impl std::ops::Deref for UsersMenu {
    type Target = Menu;
    fn deref(&self) -> &Menu { &self.menu }
}

impl From<UsersMenu> for ModalWindow {
    fn from(menu: UsersMenu) -> ModalWindow { menu.into_window() }
}

/// Cached view of a roster, sorted by name.
pub struct UserDirectory<R: UserRoster> {
    roster: R,
    users: Option<Vec<(i32, String)>>,
}

impl<R: UserRoster> UserDirectory<R> {
    pub fn new(roster: R) -> Self { Self { roster, users: None } }

    /// Reloads the cache from the roster.
    pub fn refresh(&mut self) -> Result<(), R::Error> {
        let mut users = self.roster.users()?;
        users.sort_by(|a, b| a.1.cmp(&b.1));
        self.users = Some(users);
        Ok(())
    }

    /// The cached users, loading them on first use.
    pub fn users(&mut self) -> &[(i32, String)] {
        if self.users.is_none() {
            if let Err(e) = self.refresh() {
                warn!("user roster unavailable: {}", e);
            }
        }
        self.users.as_deref().unwrap_or(&[])
    }

    pub fn name_of(&mut self, id: i32) -> Option<String> { self.users().iter().find(|(uid, _)| *uid == id).map(|(_, name)| name.clone()) }

    pub fn id_of(&mut self, name: &str) -> Option<i32> { self.users().iter().find(|(_, n)| n == name).map(|(id, _)| *id) }
}
