//! Route planning for riders: the cheapest exposure-aware route through a
//! city network, its drawable polyline and health advisories for the
//! pollution level along the way.

pub mod planner;
pub mod request;

pub use planner::RoutePlanner;
pub use request::{RoutePlan, RouteRequest};

pub use cleanroute_core::prelude;
