mod fixture;

pub use fixture::*;
