pub mod swimmer_service;

pub use swimmer_service::{DeleteOutcome, SwimmerService};
