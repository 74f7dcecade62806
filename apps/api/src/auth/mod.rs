// Bearer token support for the item routes

pub mod jwt;
