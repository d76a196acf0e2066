use crate::config::WarpConfig;
use crate::host::{IconRefresher, Messenger, PlayerHandle, PlayerId};
use crate::messages::{Message, GREEN, RED};
use crate::telemetry::logging;
use crate::warp::record::{PrivacyState, TrustError, VisitError};
use crate::warp::registry::{CreateError, RenameError, WarpList};
use crate::world::location::Location;

const NAME_PLACEHOLDER: &str = "PWARPNAMEP";
const LIMIT_PLACEHOLDER: &str = "PLIMITP";

/// Command glue over the pure warp core: every operation checks
/// authorization, applies the mutation, and tells the requester what
/// happened via the message catalog. Hosts apply the returned outcome
/// (a `bool`, or the destination on teleport).
pub struct WarpService<'a> {
    warps: &'a mut WarpList,
    config: &'a WarpConfig,
    messenger: &'a mut dyn Messenger,
    icons: &'a mut dyn IconRefresher,
}

impl<'a> WarpService<'a> {
    pub fn new(
        warps: &'a mut WarpList,
        config: &'a WarpConfig,
        messenger: &'a mut dyn Messenger,
        icons: &'a mut dyn IconRefresher,
    ) -> Self {
        Self {
            warps,
            config,
            messenger,
            icons,
        }
    }

    fn notify_ok(&mut self, player: &PlayerId, message: Message, subs: &[(&str, &str)]) {
        self.messenger
            .send(player, &format!("{}{}", GREEN, message.render(subs)));
    }

    fn notify_fail(&mut self, player: &PlayerId, message: Message, subs: &[(&str, &str)]) {
        self.messenger
            .send(player, &format!("{}{}", RED, message.render(subs)));
    }

    /// Owner-or-override gate shared by every mutation. Sends the matching
    /// failure message when the gate doesn't pass.
    fn is_authorized_or_notify(&mut self, name: &str, player: &dyn PlayerHandle) -> bool {
        let authorized = self.warps.get(name).map(|warp| warp.is_authorized(player));
        match authorized {
            Some(true) => true,
            Some(false) => {
                self.notify_fail(player.id(), Message::NotAnOwner, &[]);
                false
            }
            None => {
                self.notify_fail(
                    player.id(),
                    Message::WarpDoesNotExist,
                    &[(NAME_PLACEHOLDER, &name.to_lowercase())],
                );
                false
            }
        }
    }

    pub fn create(&mut self, player: &dyn PlayerHandle, name: &str) -> bool {
        let result = self
            .warps
            .create(player, name, self.config)
            .map(|warp| warp.name().to_string());
        match result {
            Ok(created) => {
                logging::log_warp(&format!("{} created warp '{}'", player.name(), created));
                self.notify_ok(player.id(), Message::CreatedWarp, &[]);
                true
            }
            Err(CreateError::NameInUse) => {
                self.notify_fail(
                    player.id(),
                    Message::NameInUse,
                    &[(NAME_PLACEHOLDER, &name.to_lowercase())],
                );
                false
            }
            Err(CreateError::QuotaExceeded { limit }) => {
                self.notify_fail(
                    player.id(),
                    Message::LimitReached,
                    &[(LIMIT_PLACEHOLDER, &limit.to_string())],
                );
                false
            }
        }
    }

    pub fn rename(&mut self, player: &dyn PlayerHandle, old_name: &str, new_name: &str) -> bool {
        if !self.is_authorized_or_notify(old_name, player) {
            return false;
        }
        match self.warps.rename(old_name, new_name) {
            Ok(()) => {
                logging::log_warp(&format!(
                    "{} renamed warp '{}' to '{}'",
                    player.name(),
                    old_name.to_lowercase(),
                    new_name.to_lowercase()
                ));
                self.notify_ok(
                    player.id(),
                    Message::RenamedWarp,
                    &[(NAME_PLACEHOLDER, &new_name.to_lowercase())],
                );
                true
            }
            Err(RenameError::NameInUse) => {
                self.notify_fail(
                    player.id(),
                    Message::NameInUse,
                    &[(NAME_PLACEHOLDER, &new_name.to_lowercase())],
                );
                false
            }
            Err(RenameError::UnknownWarp) => {
                self.notify_fail(
                    player.id(),
                    Message::WarpDoesNotExist,
                    &[(NAME_PLACEHOLDER, &old_name.to_lowercase())],
                );
                false
            }
        }
    }

    pub fn move_warp(&mut self, player: &dyn PlayerHandle, name: &str) -> bool {
        if !self.is_authorized_or_notify(name, player) {
            return false;
        }
        let Some(warp) = self.warps.get_mut(name) else {
            return false;
        };
        warp.set_location(player.location());
        self.notify_ok(player.id(), Message::MovedWarp, &[]);
        true
    }

    pub fn set_privacy(&mut self, player: &dyn PlayerHandle, name: &str, is_private: bool) -> bool {
        if !self.is_authorized_or_notify(name, player) {
            return false;
        }
        let Some(warp) = self.warps.get_mut(name) else {
            return false;
        };
        let applied = warp.set_privacy(is_private);
        let message = match applied {
            PrivacyState::Private => Message::MadePrivate,
            PrivacyState::Public => Message::MadePublic,
        };
        self.notify_ok(player.id(), message, &[]);
        true
    }

    pub fn trust(&mut self, player: &dyn PlayerHandle, name: &str, target: &PlayerId) -> bool {
        if !self.is_authorized_or_notify(name, player) {
            return false;
        }
        let Some(warp) = self.warps.get_mut(name) else {
            return false;
        };
        match warp.trust(target.clone()) {
            Ok(()) => {
                self.notify_ok(player.id(), Message::PlayerTrusted, &[]);
                true
            }
            Err(TrustError::AlreadyTrusted) => {
                self.notify_fail(player.id(), Message::PlayerAlreadyTrusted, &[]);
                false
            }
            Err(TrustError::NotTrusted) => false,
        }
    }

    /// Gated exactly like [`WarpService::trust`]: only the owner (or an
    /// override holder) may untrust.
    pub fn untrust(&mut self, player: &dyn PlayerHandle, name: &str, target: &PlayerId) -> bool {
        if !self.is_authorized_or_notify(name, player) {
            return false;
        }
        let Some(warp) = self.warps.get_mut(name) else {
            return false;
        };
        match warp.untrust(target) {
            Ok(()) => {
                self.notify_ok(player.id(), Message::PlayerUntrusted, &[]);
                true
            }
            Err(TrustError::NotTrusted) => {
                self.notify_fail(player.id(), Message::PlayerNotTrusted, &[]);
                false
            }
            Err(TrustError::AlreadyTrusted) => false,
        }
    }

    pub fn set_lore_row(
        &mut self,
        player: &dyn PlayerHandle,
        name: &str,
        row: usize,
        line: &str,
    ) -> bool {
        if !self.is_authorized_or_notify(name, player) {
            return false;
        }
        let Some(warp) = self.warps.get_mut(name) else {
            return false;
        };
        warp.set_lore_row(row, line);
        self.icons.refresh(warp);
        self.notify_ok(player.id(), Message::ChangedLore, &[]);
        true
    }

    /// Copies the material of the requester's held item onto the warp icon
    /// and refreshes the GUI cache entry.
    pub fn set_icon(&mut self, player: &dyn PlayerHandle, name: &str) -> bool {
        if !self.is_authorized_or_notify(name, player) {
            return false;
        }
        let held = player.held_item();
        if held.material.is_air() {
            self.notify_fail(player.id(), Message::HoldItem, &[]);
            return false;
        }
        let Some(warp) = self.warps.get_mut(name) else {
            return false;
        };
        warp.set_icon_material(held.material);
        self.icons.refresh(warp);
        self.notify_ok(player.id(), Message::ChangedWarpIcon, &[]);
        true
    }

    /// Visit gate plus counter; hands back the destination for the host to
    /// apply the actual teleport.
    pub fn teleport(&mut self, player: &dyn PlayerHandle, name: &str) -> Option<Location> {
        if !self.warps.contains(name) {
            self.notify_fail(
                player.id(),
                Message::WarpDoesNotExist,
                &[(NAME_PLACEHOLDER, &name.to_lowercase())],
            );
            return None;
        }
        let Some(warp) = self.warps.get_mut(name) else {
            return None;
        };
        let shown_name = warp.display_name();
        match warp.visit(player) {
            Ok(location) => {
                let location = location.clone();
                logging::log_warp(&format!(
                    "{} teleported to warp '{}'",
                    player.name(),
                    name.to_lowercase()
                ));
                self.notify_ok(
                    player.id(),
                    Message::Teleported,
                    &[(NAME_PLACEHOLDER, &shown_name)],
                );
                Some(location)
            }
            Err(VisitError::NotTrusted) => {
                self.notify_fail(player.id(), Message::NotTrusted, &[]);
                None
            }
        }
    }
}
