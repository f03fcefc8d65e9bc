pub mod api;
pub mod config;
pub mod error;
pub mod health;
pub mod logger;
pub mod routes;

#[cfg(test)]
mod tests;

pub use api::{
    error::ApiError,
    error::Result as ApiResult,
    export::{
        csv_point::CsvPoint,
        csv_writer::{CSV_HEADER, escape_field, points_to_csv, render_value},
        save_csv::save_csv,
        save_csv_request::SaveCsvRequest,
    },
};

pub use crate::routes::build_router;
