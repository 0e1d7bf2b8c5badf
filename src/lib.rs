pub mod colormap;
pub mod config;
pub mod error;
pub mod fsutil;
pub mod logging;
pub mod parallel;
pub mod partition;
pub mod plot;
pub mod sim;

pub use error::{Result, VphysError};
pub use fsutil::mkdir_p;
pub use partition::{generate_indices, Assignment, Partitioner, RemainderPolicy};
