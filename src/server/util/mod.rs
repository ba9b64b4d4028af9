pub mod nanoid;
pub mod parse;
