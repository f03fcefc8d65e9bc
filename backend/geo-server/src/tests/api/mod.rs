mod csv_writer;
mod error;
