pub mod author_repo;
pub mod quote_repo;

pub use author_repo::AuthorRepo;
pub use quote_repo::QuoteRepo;
