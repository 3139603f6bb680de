//! CSV Data Loader Module
//! Downloads the launch records CSV and parses it into a LaunchDataset using Polars.

use crate::data::{LaunchDataset, LaunchRecord};
use polars::prelude::*;
use std::path::Path;
use thiserror::Error;

/// Remote location of the launch records CSV.
pub const DATA_URL: &str = "https://cf-courses-data.s3.us.cloud-object-storage.appdomain.cloud/IBM-DS0321EN-SkillsNetwork/datasets/spacex_launch_geo.csv";

const COL_SITE: &str = "Launch Site";
const COL_PAYLOAD: &str = "Payload Mass (kg)";
const COL_CLASS: &str = "class";
const COL_BOOSTER: &str = "Booster Version";

#[derive(Error, Debug)]
pub enum LoaderError {
    #[error("Failed to fetch {url}: {source}")]
    Fetch {
        url: String,
        source: reqwest::Error,
    },
    #[error("Failed to write local copy: {0}")]
    Io(#[from] std::io::Error),
    #[error("Failed to parse CSV: {0}")]
    Csv(#[from] PolarsError),
    #[error("Missing required column '{0}'")]
    MissingColumn(&'static str),
    #[error("Dataset contains no usable rows")]
    Empty,
}

/// Handles the one-time download and parse of the launch records CSV.
pub struct DataLoader;

impl DataLoader {
    /// Fetch the CSV from `url`, keep a local copy named after the last
    /// path segment, and parse it into a dataset. Runs once at startup,
    /// before the event loop; any failure here is fatal.
    pub fn fetch(url: &str) -> Result<LaunchDataset, LoaderError> {
        let response = reqwest::blocking::get(url)
            .and_then(|r| r.error_for_status())
            .map_err(|source| LoaderError::Fetch {
                url: url.to_string(),
                source,
            })?;
        let bytes = response.bytes().map_err(|source| LoaderError::Fetch {
            url: url.to_string(),
            source,
        })?;

        let local_copy = url.rsplit('/').next().unwrap_or("launch_records.csv");
        std::fs::write(local_copy, &bytes)?;

        Self::from_path(Path::new(local_copy))
    }

    /// Parse a CSV file with a header row into a dataset.
    pub fn from_path(path: &Path) -> Result<LaunchDataset, LoaderError> {
        // Use lazy evaluation for memory efficiency, then collect
        let df = LazyCsvReader::new(path)
            .with_infer_schema_length(Some(10000))
            .with_ignore_errors(true)
            .finish()?
            .collect()?;

        let records = Self::extract_records(&df)?;
        if records.is_empty() {
            return Err(LoaderError::Empty);
        }
        Ok(LaunchDataset::new(records))
    }

    fn required_column<'a>(
        df: &'a DataFrame,
        name: &'static str,
    ) -> Result<&'a Column, LoaderError> {
        df.column(name).map_err(|_| LoaderError::MissingColumn(name))
    }

    /// Extract typed records row by row. Rows with a null site or booster
    /// are skipped, as are rows whose class is not 0 or 1; a null or
    /// negative payload mass becomes None.
    fn extract_records(df: &DataFrame) -> Result<Vec<LaunchRecord>, LoaderError> {
        let site_col = Self::required_column(df, COL_SITE)?;
        let booster_col = Self::required_column(df, COL_BOOSTER)?;

        let payload_f64 = Self::required_column(df, COL_PAYLOAD)?.cast(&DataType::Float64)?;
        let payload_ca = payload_f64.f64()?;

        let class_i64 = Self::required_column(df, COL_CLASS)?.cast(&DataType::Int64)?;
        let class_ca = class_i64.i64()?;

        let mut records = Vec::with_capacity(df.height());
        for i in 0..df.height() {
            let (Ok(site), Ok(booster)) = (site_col.get(i), booster_col.get(i)) else {
                continue;
            };
            if site.is_null() || booster.is_null() {
                continue;
            }
            // Outcome class is a 0/1 indicator; anything else is malformed
            let Some(class @ (0 | 1)) = class_ca.get(i) else {
                continue;
            };
            let payload_mass = payload_ca.get(i).filter(|m| m.is_finite() && *m >= 0.0);

            records.push(LaunchRecord {
                site: site.to_string().trim_matches('"').to_string(),
                payload_mass,
                outcome: class as u8,
                booster: booster.to_string().trim_matches('"').to_string(),
            });
        }

        Ok(records)
    }
}
