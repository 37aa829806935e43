//! Style rules and stylesheets.

mod media;
mod rule;
mod stylesheet;

pub use media::MediaBlock;
pub use rule::{Declaration, StyleRule};
pub use stylesheet::{SheetItem, StyleSheet};
