pub mod render;

pub use render::{generate, Query};
