//! # Reference Data Module
//!
//! Experimental reference data consumed by the element generator: symbols,
//! names and Pauling electronegativities of observed elements.
//!
//! ## Key Components
//!
//! - [`periodic_table`] - Static table bundled with the library
//! - [`database`] - `ElementDatabase`, loadable from a TOML file or built from
//!   the bundled table
//!
//! ```ignore
//! use elementa::core::reference::database::ElementDatabase;
//!
//! let database = ElementDatabase::load(Path::new("element_names.toml"))?;
//! let carbon = database.get(6).unwrap();
//! ```

pub mod database;
pub mod periodic_table;
