use crate::entities::icon::{capitalize, ItemIcon, Material, LORE_ROWS};
use crate::host::{PlayerHandle, PlayerId, MANAGE_PERMISSION};
use crate::world::location::Location;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PrivacyState {
    Public,
    Private,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TrustError {
    AlreadyTrusted,
    NotTrusted,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VisitError {
    NotTrusted,
}

/// One named teleport destination. The name is stored lowercase and shown
/// capitalized; the owner is fixed at creation.
///
/// All operations here are pure state transitions returning tagged results.
/// Authorization gating and chat notification belong to the service layer.
#[derive(Debug, Clone, PartialEq)]
pub struct Warp {
    name: String,
    location: Location,
    is_private: bool,
    trusted: Vec<PlayerId>,
    icon: ItemIcon,
    owner: PlayerId,
    visitors: u64,
}

impl Warp {
    /// Fresh warp with the creation defaults: public, nobody trusted, zero
    /// visitors, default icon named after the warp.
    pub fn new(name: &str, location: Location, owner: PlayerId) -> Self {
        let name = name.to_lowercase();
        let icon = ItemIcon::for_warp(&name);
        Self {
            name,
            location,
            is_private: false,
            trusted: Vec::new(),
            icon,
            owner,
            visitors: 0,
        }
    }

    /// Rebuilds a warp from its stored fields. Trust membership is
    /// de-duplicated, preserving first occurrence.
    pub fn from_parts(
        name: String,
        location: Location,
        is_private: bool,
        trusted: Vec<PlayerId>,
        icon: ItemIcon,
        owner: PlayerId,
        lore: [String; LORE_ROWS],
        visitors: u64,
    ) -> Self {
        let mut deduped: Vec<PlayerId> = Vec::with_capacity(trusted.len());
        for id in trusted {
            if !deduped.contains(&id) {
                deduped.push(id);
            }
        }
        let mut icon = icon;
        icon.lore = lore;
        Self {
            name: name.to_lowercase(),
            location,
            is_private,
            trusted: deduped,
            icon,
            owner,
            visitors,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Capitalized form of the name, as shown in chat and on the icon.
    pub fn display_name(&self) -> String {
        capitalize(&self.name)
    }

    pub fn location(&self) -> &Location {
        &self.location
    }

    pub fn is_private(&self) -> bool {
        self.is_private
    }

    pub fn trusted(&self) -> &[PlayerId] {
        &self.trusted
    }

    pub fn icon(&self) -> &ItemIcon {
        &self.icon
    }

    pub fn owner(&self) -> &PlayerId {
        &self.owner
    }

    pub fn visitors(&self) -> u64 {
        self.visitors
    }

    /// Owner, or a holder of the platform management override.
    pub fn is_authorized(&self, player: &dyn PlayerHandle) -> bool {
        self.owner == *player.id() || player.has_permission(MANAGE_PERMISSION)
    }

    fn is_trust_member(&self, id: &PlayerId) -> bool {
        self.trusted.contains(id)
    }

    /// Whether `player` may pass the visit gate: public warps admit anyone,
    /// private warps admit the owner, override holders, and trust members.
    pub fn may_visit(&self, player: &dyn PlayerHandle) -> bool {
        !self.is_private || self.is_authorized(player) || self.is_trust_member(player.id())
    }

    /// Reassigns the name (lowercased for storage) and re-syncs the icon's
    /// display name. Uniqueness against the registry is the registry's job.
    pub fn rename(&mut self, new_name: &str) {
        self.name = new_name.to_lowercase();
        self.icon.sync_display_name(&self.name);
    }

    pub fn set_location(&mut self, location: Location) {
        self.location = location;
    }

    pub fn set_privacy(&mut self, is_private: bool) -> PrivacyState {
        self.is_private = is_private;
        if is_private {
            PrivacyState::Private
        } else {
            PrivacyState::Public
        }
    }

    pub fn trust(&mut self, player: PlayerId) -> Result<(), TrustError> {
        if self.is_trust_member(&player) {
            return Err(TrustError::AlreadyTrusted);
        }
        self.trusted.push(player);
        Ok(())
    }

    pub fn untrust(&mut self, player: &PlayerId) -> Result<(), TrustError> {
        let Some(index) = self.trusted.iter().position(|id| id == player) else {
            return Err(TrustError::NotTrusted);
        };
        self.trusted.remove(index);
        Ok(())
    }

    /// See [`ItemIcon::set_lore_row`]; `row` outside `[1, 3]` panics.
    pub fn set_lore_row(&mut self, row: usize, line: impl Into<String>) {
        self.icon.set_lore_row(row, line);
    }

    pub fn set_icon_material(&mut self, material: Material) {
        self.icon.set_material(material);
    }

    /// Visit gate plus counter. Counts the visit when the visitor is not the
    /// owner, then hands back the destination for the host to apply.
    pub fn visit(&mut self, player: &dyn PlayerHandle) -> Result<&Location, VisitError> {
        if !self.may_visit(player) {
            return Err(VisitError::NotTrusted);
        }
        if self.owner != *player.id() {
            self.visitors += 1;
        }
        Ok(&self.location)
    }
}
