pub mod client;
pub mod csv;

pub use client::FeedClient;
pub use csv::parse_matches;
