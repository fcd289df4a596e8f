// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Sticky-immersive reassertion state.
//
// Present: a visibility-change listener is installed and the captured flag
// set is re-applied on every change. Absent: no listener. The slot is only
// ever replaced whole, so at most one reassertion policy exists at a time.

use std::sync::{Mutex, PoisonError};

use fullscreen_core::SystemUiFlags;

#[derive(Debug, Default)]
pub struct ReassertionSlot {
    flags: Mutex<Option<SystemUiFlags>>,
}

impl ReassertionSlot {
    pub fn new() -> Self {
        Self::default()
    }

    /// Swap in a new registration, returning the one it replaced.
    pub fn replace(&self, flags: Option<SystemUiFlags>) -> Option<SystemUiFlags> {
        let mut slot = self.flags.lock().unwrap_or_else(PoisonError::into_inner);
        std::mem::replace(&mut *slot, flags)
    }

    /// The flag set a visibility change would re-apply, if any.
    pub fn current(&self) -> Option<SystemUiFlags> {
        *self.flags.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_inactive() {
        assert_eq!(ReassertionSlot::new().current(), None);
    }

    #[test]
    fn replace_returns_previous_registration() {
        let slot = ReassertionSlot::new();
        let sticky = SystemUiFlags::immersive(true);

        assert_eq!(slot.replace(Some(sticky)), None);
        assert_eq!(slot.current(), Some(sticky));
        assert_eq!(slot.replace(None), Some(sticky));
        assert_eq!(slot.current(), None);
    }
}
