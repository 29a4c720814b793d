pub mod wiki_api;

pub use wiki_api::{NO_SWIMMERS_FOUND, WikiApi};
