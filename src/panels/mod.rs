pub mod chart_panel;
pub mod selection;
