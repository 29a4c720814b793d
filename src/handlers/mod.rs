pub mod index;
pub mod search;
pub mod swimmer;
