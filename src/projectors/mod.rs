pub mod chart_data_projector;
