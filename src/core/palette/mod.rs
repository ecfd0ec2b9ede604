#[allow(clippy::module_inception)]
pub mod palette;

pub use palette::Palette;
