//! Ore texture compositor.
//!
//! Reads an ore color table from CSV, then for every
//! (template mask, ore color, stone texture) combination tints the
//! template's alpha mask with the ore color and composites it over the
//! stone texture, writing one PNG per combination.

pub mod compositor;
pub mod error;
pub mod palette;

pub use compositor::{composite_all, CompositorConfig};
pub use error::{TexGenError, TexGenResult};
pub use palette::{load_ore_colors, parse_hex_color};
