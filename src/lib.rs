pub mod config;
pub mod entities;
pub mod host;
pub mod messages;
pub mod persistence;
pub mod telemetry;
pub mod warp;
pub mod world;

pub use config::WarpConfig;
pub use host::{HeldItem, IconRefresher, Messenger, PlayerHandle, PlayerId, MANAGE_PERMISSION};
pub use persistence::store::{LoadReport, WarpStore};
pub use warp::codec::{decode, encode, CodecError};
pub use warp::gui_cache::{GuiCache, GuiEntry};
pub use warp::record::{PrivacyState, TrustError, VisitError, Warp};
pub use warp::registry::{CreateError, RenameError, WarpList};
pub use warp::service::WarpService;
pub use world::location::Location;
