pub mod catalog;
pub mod error;
pub mod models;
pub mod planner;

pub use catalog::{DestinationEntry, ReferenceCatalog};
pub use error::{CatalogError, PlannerError};
pub use models::*;
pub use planner::{compose_itinerary_text, generate_itinerary, generate_itinerary_with_rng};
