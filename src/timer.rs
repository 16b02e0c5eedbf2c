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
use crate::{ViewerKey, WindowId};
use std::sync::mpsc::{self, RecvTimeoutError, Sender};
use std::time::Duration;
use tracing::{debug, warn};

/// Posted by an expired timer; the stack pops the window when it drains the queue.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub(crate) struct DismissRequest {
    pub window: WindowId,
    pub viewer: ViewerKey,
    pub token: u64,
}

/// A pending auto-dismiss. Dropping it cancels the timer.
pub(crate) struct DismissTimer {
    pub token: u64,
    pub viewer: ViewerKey,
    _cancel: Sender<()>,
}

impl DismissTimer {
    pub fn arm(delay: Duration, request: DismissRequest, queue: Sender<DismissRequest>) -> Self {
        let (cancel, cancelled) = mpsc::channel::<()>();
        let spawned = std::thread::Builder::new().name("panelui-dismiss".into()).spawn(move || {
            // a dropped sender wakes the thread early with `Disconnected`
            if let Err(RecvTimeoutError::Timeout) = cancelled.recv_timeout(delay) {
                debug!(token = request.token, "auto-dismiss fired");
                let _ = queue.send(request);
            }
        });
        if let Err(e) = spawned {
            warn!("auto-dismiss timer not started: {}", e);
        }
        Self { token: request.token, viewer: request.viewer, _cancel: cancel }
    }
}
