pub mod model;

pub use model::{Category, Measurement};
