mod country;

pub use country::{Country, Subdivision};
