pub mod generate;
pub mod listing;
pub mod template;
pub mod tiered;

pub use generate::*;
pub use listing::*;
pub use template::*;
pub use tiered::*;
