pub mod orders;
pub mod validate;

pub use orders::*;
pub use validate::*;
