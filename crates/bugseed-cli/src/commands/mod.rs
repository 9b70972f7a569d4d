//! Command implementations.

pub mod extract;
pub mod seeds;

pub use self::extract::execute_extract;
pub use self::seeds::execute_seeds;
