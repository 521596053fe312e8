//! Visibility flags on addressable page elements.

use ahash::{AHashMap, AHashSet};

/// Flag that marks an element as shown.
pub const SHOW: &str = "show";

/// Set, clear, toggle or query a flag on an element by id.
pub trait Visibility {
    fn set(&mut self, id: &str, flag: &str);
    fn clear(&mut self, id: &str, flag: &str);
    fn has(&self, id: &str, flag: &str) -> bool;

    /// Flip `flag`; returns whether it is set afterwards.
    fn toggle(&mut self, id: &str, flag: &str) -> bool {
        if self.has(id, flag) {
            self.clear(id, flag);
            false
        } else {
            self.set(id, flag);
            true
        }
    }
}

/// In-memory flag store keyed by element id.
#[derive(Debug, Clone, Default)]
pub struct FlagBoard {
    flags: AHashMap<String, AHashSet<String>>,
}

impl FlagBoard {
    pub fn new() -> Self {
        Self::default()
    }

    /// Ids of elements currently carrying `flag`, sorted.
    pub fn flagged(&self, flag: &str) -> Vec<&str> {
        let mut ids: Vec<&str> = self
            .flags
            .iter()
            .filter(|(_, set)| set.contains(flag))
            .map(|(id, _)| id.as_str())
            .collect();
        ids.sort_unstable();
        ids
    }
}

impl Visibility for FlagBoard {
    fn set(&mut self, id: &str, flag: &str) {
        self.flags
            .entry(id.to_string())
            .or_default()
            .insert(flag.to_string());
    }

    fn clear(&mut self, id: &str, flag: &str) {
        if let Some(set) = self.flags.get_mut(id) {
            set.remove(flag);
        }
    }

    fn has(&self, id: &str, flag: &str) -> bool {
        self.flags.get(id).is_some_and(|set| set.contains(flag))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn toggle_flips() {
        let mut b = FlagBoard::new();
        assert!(b.toggle("sidebar", "open"));
        assert!(b.has("sidebar", "open"));
        assert!(!b.toggle("sidebar", "open"));
        assert!(!b.has("sidebar", "open"));
        // clearing an unknown element is fine
        b.clear("missing", SHOW);
    }
}
