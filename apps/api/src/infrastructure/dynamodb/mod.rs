// DynamoDB plumbing shared by the item repository
// Client construction and the item <-> attribute map codec

pub mod attributes;
pub mod client;

pub use client::build_client;
