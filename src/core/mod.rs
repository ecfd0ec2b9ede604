pub mod actions;
pub mod animation;
pub mod data;
pub mod fractals;
pub mod palette;
pub mod scene;
pub mod variants;
