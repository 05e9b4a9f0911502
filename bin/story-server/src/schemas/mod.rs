//! Request / response DTO types.
//!
//! Annotated with [`utoipa`] attributes to generate the OpenAPI schema.

pub mod story;
