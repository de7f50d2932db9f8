pub mod actor;
pub mod chart_point;
pub mod charts_response;
pub mod movie;
