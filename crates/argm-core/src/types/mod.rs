mod float64;

pub use float64::{Float64, Float64DecodeError};
