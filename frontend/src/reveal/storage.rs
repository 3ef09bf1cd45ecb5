use web_sys::{window, Storage};

pub const REVEALED_KEY: &str = "siteRevealed";

/// Where the "intro already played" flag lives.
pub trait RevealStore {
    fn is_revealed(&self) -> bool;
    fn mark_revealed(&self);
}

/// Browser session storage. Any failure reads as "not revealed yet" and writes are dropped.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct SessionRevealStore;

// A blank stored value counts as unset
fn flag_is_set(stored: Option<&str>) -> bool {
    stored.map_or(false, |value| !value.is_empty())
}

fn session_storage() -> Option<Storage> {
    match window()?.session_storage() {
        Ok(storage) => storage,
        Err(e) => {
            log::warn!("Session storage unavailable: {:?}", e);
            None
        }
    }
}

impl RevealStore for SessionRevealStore {
    fn is_revealed(&self) -> bool {
        let stored = session_storage().and_then(|storage| storage.get_item(REVEALED_KEY).ok().flatten());
        flag_is_set(stored.as_deref())
    }

    fn mark_revealed(&self) {
        let Some(storage) = session_storage() else {
            return;
        };
        if let Err(e) = storage.set_item(REVEALED_KEY, "true") {
            log::warn!("Failed to persist reveal flag: {:?}", e);
        }
    }
}

#[cfg(test)]
pub mod memory {
    use super::RevealStore;
    use std::cell::Cell;
    use std::rc::Rc;

    /// Shared in-memory flag that also counts writes.
    #[derive(Clone, Default)]
    pub struct MemoryRevealStore {
        revealed: Rc<Cell<bool>>,
        writes: Rc<Cell<u32>>,
    }

    impl MemoryRevealStore {
        pub fn revealed() -> Self {
            let store = Self::default();
            store.revealed.set(true);
            store
        }

        pub fn writes(&self) -> u32 {
            self.writes.get()
        }
    }

    impl RevealStore for MemoryRevealStore {
        fn is_revealed(&self) -> bool {
            self.revealed.get()
        }

        fn mark_revealed(&self) {
            self.revealed.set(true);
            self.writes.set(self.writes.get() + 1);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::flag_is_set;

    #[test]
    fn only_non_empty_values_mark_the_intro_as_played() {
        assert!(flag_is_set(Some("true")));
        assert!(!flag_is_set(Some("")));
        assert!(!flag_is_set(None));
    }
}
