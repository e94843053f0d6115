pub mod open_commitment;
pub mod resolve_commitment;

pub use open_commitment::*;
pub use resolve_commitment::*;
