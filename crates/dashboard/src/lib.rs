mod dataset;
mod routes;
mod ser;
mod startup;
mod utils;

pub use dataset::*;
pub use routes::*;
pub use startup::*;
pub use utils::*;
