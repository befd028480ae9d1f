//! # OIS Forward Ext File
//!
//! CSV files around the forward job:
//! - ticker and update-window configuration readers
//! - [`CsvMarketDataSource`], a `Date,Ticker,Value` market data source
//! - [`CsvForwardStore`], the latest and dated forward outputs
//!
//! Vendor market data connections plug in through the same
//! [`MarketDataSource`](oisfwd_engine::MarketDataSource) trait.

#![warn(missing_docs)]
#![warn(clippy::all)]

mod config;
mod error;
mod forwards;
mod market_data;

pub use config::{read_ticker_config, read_update_windows};
pub use error::{FileError, FileResult};
pub use forwards::{
    dated_file_name, read_forwards, write_forwards, CsvForwardStore, LATEST_FILE,
};
pub use market_data::CsvMarketDataSource;
