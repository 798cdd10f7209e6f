pub mod parse;
pub mod sanitize;
