mod descriptor;
mod error;
mod overrides;
mod shape;

pub use descriptor::*;
pub use error::*;
pub use overrides::*;
pub use shape::*;
