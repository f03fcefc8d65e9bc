pub mod error;
pub mod export;

pub use export::save_csv::save_csv;
