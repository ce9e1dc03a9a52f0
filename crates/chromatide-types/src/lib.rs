// ABOUTME: Pure data types with no cross-crate dependencies
// ABOUTME: Foundation layer for all other chromatide crates

pub mod color;
pub mod mode;

// Re-export commonly used types
pub use color::{Color, Hsl, hex_to_hsl, hsl_to_hex};
pub use mode::ThemeMode;
