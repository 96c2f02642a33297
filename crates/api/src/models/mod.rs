pub mod refs;

pub use refs::*;
