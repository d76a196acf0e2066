pub mod codec;
pub mod gui_cache;
pub mod record;
pub mod registry;
pub mod service;
