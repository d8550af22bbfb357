// workmon API Library
//
// This crate provides the REST API layer for workmon,
// including HTTP handlers, routes, and request/response models.

pub mod handlers;
pub mod models;
pub mod routes;
