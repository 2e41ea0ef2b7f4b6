pub mod input;
pub mod limit;
pub mod parse;
pub mod session;
