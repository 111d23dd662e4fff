//! Region code validation.
//!
//! Holds the compiled-in table of countries and their first-level
//! subdivisions, and the [`RegionDirectory`] that address records are
//! validated against.
//!
//! ## Endpoints
//!
//! | Method | Endpoint | Description |
//! |--------|----------|-------------|
//! | GET | `/regions/countries` | List supported countries |
//! | GET | `/regions/countries/{country}/states` | List region codes of a country |
//! | GET | `/regions/validate` | Check a state code against a country |

pub mod dtos;
pub mod handlers;
pub mod models;
pub mod routes;
pub mod services;
pub mod table;

pub use services::RegionDirectory;
