//! Shared application service layer for welllog.
//!
//! This crate gives front ends (the CLI today) one place for session state,
//! batch loading, configuration save/load, rendering and queries.

pub mod config_service;
pub mod error;
pub mod load_service;
pub mod query;
pub mod render_service;
pub mod session;

// Re-export key types for convenience
pub use config_service::{
    config_from_session, load_configuration, save_configuration, session_parts_from_config,
};
pub use error::{AppError, AppResult};
pub use load_service::{
    LoadFailure, LoadReport, collect_las_paths, load_folder, load_inputs, load_paths,
};
pub use query::{WellSummary, available_curves, get_well_summary, list_wells};
pub use render_service::render_session;
pub use session::{Selection, Session};
