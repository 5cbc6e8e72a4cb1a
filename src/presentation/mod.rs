// Presentation layer - Terminal rendering
pub mod term;
