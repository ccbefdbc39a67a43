// Domain layer - Decoded dashboard model and panel classification
pub mod dashboard;
pub mod panel_type;
