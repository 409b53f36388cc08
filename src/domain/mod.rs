pub mod models;

pub use models::MatchRecord;
