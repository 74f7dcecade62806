// Domain layer module exports
// Domain is independent of infrastructure concerns

pub mod errors;
pub mod item;
pub mod repositories;
