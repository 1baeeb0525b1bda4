//! Geometric helpers used to describe computed routes.

pub mod haversine;
