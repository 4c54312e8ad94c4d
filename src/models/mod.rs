mod filter;
mod product;
mod sheet;

pub use filter::*;
pub use product::*;
pub use sheet::*;
