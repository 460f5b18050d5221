pub mod assembler;
pub mod encode;
pub mod error;
pub mod listing;
pub mod msg;
pub mod normalize;
pub mod parser;
pub mod symbol;

pub use assembler::{assemble, assemble_text, Assembled};
pub use error::{Error, LineError};
pub use normalize::{normalize, Line};
