//! Pure scoring functions.
//!
//! Videos score in [0, 6], playlists in [0, 6.8]. Cross-kind selection
//! compares both normalized onto a 10-point scale. Scorers take the
//! current year as a parameter so tests stay deterministic.

pub mod playlist;
pub mod video;

pub use playlist::{score_playlist, PlaylistRating};
pub use video::score_video;
