use crate::config::WarpConfig;
use crate::entities::icon::Material;
use crate::host::{PlayerHandle, PlayerId};
use crate::warp::record::Warp;
use std::collections::BTreeMap;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CreateError {
    NameInUse,
    QuotaExceeded { limit: usize },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RenameError {
    UnknownWarp,
    NameInUse,
}

/// The set of all warps, keyed by lowercase name. Enforces name uniqueness
/// (case-insensitive) and the per-owner quota at creation.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct WarpList {
    warps: BTreeMap<String, Warp>,
}

impl WarpList {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn contains(&self, name: &str) -> bool {
        self.warps.contains_key(&name.to_lowercase())
    }

    pub fn get(&self, name: &str) -> Option<&Warp> {
        self.warps.get(&name.to_lowercase())
    }

    pub fn get_mut(&mut self, name: &str) -> Option<&mut Warp> {
        self.warps.get_mut(&name.to_lowercase())
    }

    pub fn owned_count(&self, owner: &PlayerId) -> usize {
        self.warps.values().filter(|warp| warp.owner() == owner).count()
    }

    /// Inserts an already-built warp (used by the loader). Replaces and
    /// returns any warp previously stored under the same name.
    pub fn insert(&mut self, warp: Warp) -> Option<Warp> {
        self.warps.insert(warp.name().to_string(), warp)
    }

    pub fn remove(&mut self, name: &str) -> Option<Warp> {
        self.warps.remove(&name.to_lowercase())
    }

    /// Creates and registers a warp at the player's current position.
    /// Name uniqueness is case-insensitive; the quota comes from config.
    pub fn create(
        &mut self,
        player: &dyn PlayerHandle,
        name: &str,
        config: &WarpConfig,
    ) -> Result<&Warp, CreateError> {
        if self.contains(name) {
            return Err(CreateError::NameInUse);
        }
        let limit = config.limit_for(player.id());
        if self.owned_count(player.id()) >= limit {
            return Err(CreateError::QuotaExceeded { limit });
        }

        let mut warp = Warp::new(name, player.location(), player.id().clone());
        let icon_material = Material::new(&config.default_icon);
        if icon_material != warp.icon().material {
            warp.set_icon_material(icon_material);
        }
        let key = warp.name().to_string();
        self.warps.insert(key.clone(), warp);
        Ok(&self.warps[&key])
    }

    /// Renames a warp, re-checking uniqueness against the registry before
    /// delegating to the record.
    pub fn rename(&mut self, old_name: &str, new_name: &str) -> Result<(), RenameError> {
        let old_key = old_name.to_lowercase();
        let new_key = new_name.to_lowercase();
        if !self.warps.contains_key(&old_key) {
            return Err(RenameError::UnknownWarp);
        }
        if new_key != old_key && self.warps.contains_key(&new_key) {
            return Err(RenameError::NameInUse);
        }
        let mut warp = match self.warps.remove(&old_key) {
            Some(warp) => warp,
            None => return Err(RenameError::UnknownWarp),
        };
        warp.rename(new_name);
        self.warps.insert(new_key, warp);
        Ok(())
    }

    pub fn iter(&self) -> impl Iterator<Item = &Warp> {
        self.warps.values()
    }

    pub fn len(&self) -> usize {
        self.warps.len()
    }

    pub fn is_empty(&self) -> bool {
        self.warps.is_empty()
    }
}
