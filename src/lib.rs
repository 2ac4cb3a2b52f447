//! onair_va
//!
//! A lightweight Rust library for retrieving and storing OnAir virtual-airline
//! company data. Pairs with the `onair-va` CLI.
//!
//! ### Features
//! - Fetch a company's notifications, flights, and cash-flow report
//! - Typed models that mirror the service's JSON wire format
//! - Save results as CSV or JSON
//!
//! ### Example
//! ```no_run
//! use onair_va::Client;
//!
//! let client = Client::new("my-api-key")?;
//! let flights = client.flights("my-company-id")?;
//! onair_va::storage::save_json(&flights, "flights.json")?;
//! for flight in &flights {
//!     println!("{} -> {}", flight.departure_airport.icao, flight.arrival_actual_airport.icao);
//! }
//! # Ok::<(), anyhow::Error>(())
//! ```

pub mod api;
pub mod config;
pub mod error;
pub mod models;
pub mod storage;

pub use api::Client;
pub use config::Settings;
pub use error::Error;
pub use models::{CashFlow, CashFlowEntry, Flight, Notification};
