use crate::entities::icon::Material;
use crate::warp::record::Warp;
use crate::world::location::Location;

/// Platform permission node granting management access to every warp.
pub const MANAGE_PERMISSION: &str = "pwarp.manage";

/// The host's stable identifier for a player (its UUID string). Used for
/// ownership and trust membership; never a display name.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct PlayerId(pub String);

impl PlayerId {
    pub fn new(id: impl Into<String>) -> Self {
        PlayerId(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for PlayerId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// Snapshot of the item in a player's main hand. An empty hand reads as air.
#[derive(Debug, Clone, PartialEq)]
pub struct HeldItem {
    pub material: Material,
    pub count: u16,
}

impl HeldItem {
    pub fn empty() -> Self {
        Self {
            material: Material::air(),
            count: 0,
        }
    }
}

/// An online player, as seen through the host platform.
pub trait PlayerHandle {
    fn id(&self) -> &PlayerId;
    fn name(&self) -> &str;
    fn location(&self) -> Location;
    fn held_item(&self) -> HeldItem;
    fn has_permission(&self, node: &str) -> bool;
}

/// Chat delivery seam. The pure warp operations never touch this; only the
/// service layer turns outcomes into messages.
pub trait Messenger {
    fn send(&mut self, player: &PlayerId, text: &str);
}

/// Selection-GUI cache seam, injected into icon mutations instead of being a
/// process-wide singleton.
pub trait IconRefresher {
    fn refresh(&mut self, warp: &Warp);
}

#[cfg(test)]
pub(crate) mod testutil {
    use super::*;

    /// Minimal in-memory player for exercising the core without a host.
    pub struct FakePlayer {
        pub id: PlayerId,
        pub name: String,
        pub location: Location,
        pub held: HeldItem,
        pub permissions: Vec<String>,
    }

    impl FakePlayer {
        pub fn new(id: &str, name: &str) -> Self {
            Self {
                id: PlayerId::new(id),
                name: name.to_string(),
                location: Location::new("world", 0.0, 64.0, 0.0),
                held: HeldItem::empty(),
                permissions: Vec::new(),
            }
        }

        pub fn at(mut self, location: Location) -> Self {
            self.location = location;
            self
        }

        pub fn holding(mut self, material: &str, count: u16) -> Self {
            self.held = HeldItem {
                material: Material::new(material),
                count,
            };
            self
        }

        pub fn with_permission(mut self, node: &str) -> Self {
            self.permissions.push(node.to_string());
            self
        }
    }

    impl PlayerHandle for FakePlayer {
        fn id(&self) -> &PlayerId {
            &self.id
        }

        fn name(&self) -> &str {
            &self.name
        }

        fn location(&self) -> Location {
            self.location.clone()
        }

        fn held_item(&self) -> HeldItem {
            self.held.clone()
        }

        fn has_permission(&self, node: &str) -> bool {
            self.permissions.iter().any(|held| held == node)
        }
    }

    /// Messenger that records everything sent, per recipient.
    #[derive(Default)]
    pub struct RecordingMessenger {
        pub sent: Vec<(PlayerId, String)>,
    }

    impl RecordingMessenger {
        pub fn last_for(&self, player: &PlayerId) -> Option<&str> {
            self.sent
                .iter()
                .rev()
                .find(|(id, _)| id == player)
                .map(|(_, text)| text.as_str())
        }
    }

    impl Messenger for RecordingMessenger {
        fn send(&mut self, player: &PlayerId, text: &str) {
            self.sent.push((player.clone(), text.to_string()));
        }
    }

    /// IconRefresher that counts refreshes by warp name.
    #[derive(Default)]
    pub struct CountingRefresher {
        pub refreshed: Vec<String>,
    }

    impl IconRefresher for CountingRefresher {
        fn refresh(&mut self, warp: &Warp) {
            self.refreshed.push(warp.name().to_string());
        }
    }
}
