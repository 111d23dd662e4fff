//! Address records keyed by a person's name.
//!
//! Records are held in memory by [`AddressRecordService`]; every state code is
//! checked against the [`crate::features::regions::RegionDirectory`] before it
//! is stored. Responses use the `{status, data}` envelope, and rejected
//! operations (duplicate name, invalid state, unknown name) come back as a
//! `fail` envelope with HTTP 200.
//!
//! ## Endpoints
//!
//! | Method | Endpoint | Description |
//! |--------|----------|-------------|
//! | GET/POST | `/address_records/create` | Create a record, returns its id |
//! | GET/POST | `/address_records/find` | Records in a state and country |
//! | GET/POST | `/address_records/get` | One record by name |
//! | GET/POST | `/address_records/update` | Partial update by name |
//! | GET/POST | `/address_records/delete` | Delete by name |

pub mod dtos;
pub mod errors;
pub mod handlers;
pub mod models;
pub mod routes;
pub mod services;


pub use errors::RecordError;
pub use services::AddressRecordService;
