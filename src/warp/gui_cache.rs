use crate::host::IconRefresher;
use crate::warp::record::Warp;
use lru::LruCache;
use std::num::NonZeroUsize;

/// One rendered selection-GUI slot.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GuiEntry {
    pub title: String,
    pub material: String,
    pub lines: Vec<String>,
}

/// LRU cache of rendered GUI entries, keyed by warp name. Mutations that
/// change a warp's appearance go through [`IconRefresher::refresh`] so stale
/// entries never outlive the change.
pub struct GuiCache {
    entries: LruCache<String, GuiEntry>,
}

impl GuiCache {
    pub fn new(capacity: usize) -> Self {
        let capacity = NonZeroUsize::new(capacity.max(1)).unwrap_or(NonZeroUsize::MIN);
        Self {
            entries: LruCache::new(capacity),
        }
    }

    /// Cached entry for a warp, rendering on miss.
    pub fn entry(&mut self, warp: &Warp) -> &GuiEntry {
        let key = warp.name().to_string();
        if !self.entries.contains(&key) {
            self.entries.put(key.clone(), render(warp));
        }
        self.entries.get(&key).unwrap_or_else(|| {
            // Unreachable with capacity >= 1: the key was inserted above.
            panic!("gui cache lost entry for '{}'", key)
        })
    }

    pub fn peek(&self, name: &str) -> Option<&GuiEntry> {
        self.entries.peek(&name.to_lowercase())
    }

    pub fn evict(&mut self, name: &str) -> Option<GuiEntry> {
        self.entries.pop(&name.to_lowercase())
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl IconRefresher for GuiCache {
    fn refresh(&mut self, warp: &Warp) {
        self.entries.put(warp.name().to_string(), render(warp));
    }
}

fn render(warp: &Warp) -> GuiEntry {
    let icon = warp.icon();
    let mut lines: Vec<String> = icon
        .lore
        .iter()
        .filter(|line| !line.is_empty())
        .cloned()
        .collect();
    lines.push(format!("Visitors: {}", warp.visitors()));
    GuiEntry {
        title: icon.display_name.clone(),
        material: icon.material.as_str().to_string(),
        lines,
    }
}
