//! MLB Homerun Tracker Service Library
//!
//! This library wires the tracker's components together: configuration
//! management, logging, the monitoring loop, and the fatal-error surface the
//! process supervisor in `main` restarts on.

pub mod config;
pub mod logging;
pub mod monitor;

pub use config::{load_config, validate_config, MonitorConfig};
pub use logging::initialize_logging;
pub use monitor::{FatalError, HomerunMonitor};
