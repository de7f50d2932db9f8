pub mod csv_writer;
pub mod html_writer;
