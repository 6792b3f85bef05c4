//! Rendering entry points for front ends.

use tracing::debug;
use wl_render::Figure;

use crate::session::Session;

/// Figures for every selected, loaded well.
pub fn render_session(session: &Session) -> Vec<Figure> {
    let wells = session.selected_wells();
    debug!(
        wells = wells.len(),
        tracks = session.tracks.len(),
        "rendering selection"
    );
    wl_render::render(&wells, session.tracks.as_slice())
}
