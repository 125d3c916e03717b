mod fragment;
mod overlay;

use fragment::Fragment;
pub use overlay::{OverlayMode, overlay, overlay_with};
