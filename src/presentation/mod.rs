// Presentation layer - Script delivery
pub mod script_output;
