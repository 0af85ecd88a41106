mod archive;
mod cities;
mod csv_handler;
mod dataset;
mod pipeline;
mod ser;
mod utils;

pub use archive::*;
pub use cities::*;
pub use csv_handler::*;
pub use dataset::*;
pub use pipeline::*;
pub use utils::*;
