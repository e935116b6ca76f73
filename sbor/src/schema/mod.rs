mod custom_traits;
#[allow(clippy::module_inception)]
mod schema;
mod schema_path;
mod schema_validation;
mod type_aggregator;
mod type_data;
mod type_link;
mod well_known_types;

pub use custom_traits::*;
pub use schema::*;
pub use schema_path::*;
pub use schema_validation::*;
pub use type_aggregator::*;
pub use type_data::*;
pub use type_link::*;
pub use well_known_types::*;
