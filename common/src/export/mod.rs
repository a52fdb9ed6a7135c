//! Export core modules shared across the CLI and the desktop kiosk.

#[cfg(feature = "excel")]
pub mod excel_core;
