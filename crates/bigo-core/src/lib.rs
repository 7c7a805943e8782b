pub mod config_manager;
pub mod error;
pub mod profile;
pub mod traits;
pub mod types;
pub mod watch;

pub use config_manager::*;
pub use error::*;
pub use profile::*;
pub use traits::*;
pub use types::*;
pub use watch::*;
