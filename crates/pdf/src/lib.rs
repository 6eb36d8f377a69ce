pub mod assemble;

pub use assemble::{assemble, AssembleError};
