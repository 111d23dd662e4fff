mod address_record;

pub use address_record::{AddressRecord, NewAddressRecord, RecordPatch};
