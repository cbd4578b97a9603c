pub mod author;
pub mod quote;
