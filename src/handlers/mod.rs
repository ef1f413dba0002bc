// Gateway module - controls public API for handlers
// Modules are private, only exported symbols are public

mod health;
mod items;
mod metrics;
mod root;

// Core handlers
pub use health::health_check;
pub use metrics::metrics_handler;
pub use root::root_handler;

// Demo catalogue handlers
pub use items::{add_item, archive_item, delete_item, fail, get_item, list_items, private_resource};
