//! HTTP API handlers for plx-ui

pub mod buildinfo;
pub mod health;
pub mod recommendations;
pub mod ui;

pub use buildinfo::get_build_info;
pub use health::health_routes;
pub use recommendations::get_recommendations;
pub use ui::ui_routes;
