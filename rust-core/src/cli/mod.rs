//! Interactive command surface

pub mod command;
pub mod parse;
pub mod session;

pub use command::Command;
pub use parse::{parse_frequencies, parse_pairs, InputError};
pub use session::Session;
