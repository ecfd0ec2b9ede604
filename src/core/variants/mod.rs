pub mod errors;
pub mod presets;

pub use errors::VariantConfigError;
pub use presets::{DemoVariant, DisplayMode, VariantConfig};
