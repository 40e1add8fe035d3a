// canlog API Library
//
// This crate provides the REST API layer for canlog,
// including HTTP handlers, routes, and response models.

pub mod handlers;
pub mod models;
pub mod routes;
