pub mod ppm;

pub use ppm::{PpmFilePresenter, write_ppm};
