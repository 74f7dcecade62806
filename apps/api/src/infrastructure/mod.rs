// Infrastructure layer module
// Contains the DynamoDB adapter and the in-memory stand-in

pub mod dynamodb;
pub mod repositories;
