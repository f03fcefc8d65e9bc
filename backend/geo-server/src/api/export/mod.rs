pub mod csv_point;
pub mod csv_writer;
pub mod save_csv;
pub mod save_csv_request;
