mod address_matcher;
mod answer_cache;
mod token_cache;

pub use address_matcher::AddressMatcher;
pub use answer_cache::AnswerCache;
pub use token_cache::TokenCache;
