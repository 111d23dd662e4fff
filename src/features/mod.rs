pub mod address_records;
pub mod regions;
