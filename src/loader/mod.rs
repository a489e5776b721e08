//! File loading: map configuration, caller datasets, and the canton
//! reference data (CSV + TopoJSON).

mod cantons;
mod config_loader;
mod dataset;
mod geometry;

pub use cantons::load_cantons;
pub use config_loader::{ConfigLoader, DEFAULT_CONFIG_FILE};
pub use dataset::load_dataset;
pub use geometry::{Geometry, load_geometry};
