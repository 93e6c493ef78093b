pub mod distribution;
pub mod filter;
pub mod selection;

pub use distribution::*;
pub use filter::*;
pub use selection::*;
