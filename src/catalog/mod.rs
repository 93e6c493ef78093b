pub mod artifact;
pub mod conversion;
pub mod options;
pub mod record;

pub use artifact::*;
pub use conversion::*;
pub use options::*;
pub use record::*;
