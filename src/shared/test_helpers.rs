use std::sync::Arc;

use axum::Router;

use crate::core::app;
use crate::features::address_records::models::NewAddressRecord;
use crate::features::address_records::AddressRecordService;
use crate::features::regions::RegionDirectory;

pub const USA: &str = "United States of America";

/// The fourteen sample records exercised by the black-box client suite
pub const SAMPLE_DATA: [[&str; 5]; 14] = [
    ["Mattie Poquette", "73 State Road 434 E", "Phoenix", "AZ", USA],
    ["Meaghan Garufi", "69734 E Carrillo St", "McMinnville", "TN", USA],
    ["Gladys Rim", "322 New Horizon Blvd", "Milwaukee", "WI", USA],
    ["Francine, Vocelka", "366 South Dr", "Las Cruces", "NM", USA],
    ["Ernie Stenseth", "45 E Liberty St", "Ridgefield Park", "NJ", USA],
    ["Albina Glick", "4 Ralph Ct", "Dunellen", "NJ", USA],
    ["Alishia Sergi", "2742 Distribution Way", "New York", "NY", USA],
    ["Derick Dhamer", "87163 N Main Ave", "New York", "NY", USA],
    ["Jerry Dallen", "393 Lafayette Ave", "Richmond", "VA", USA],
    ["Leota Ragel", "99 5th Ave", "Trion", "GA", USA],
    ["Jutta Amyot", "49 N Mays St", "Broussard", "LA", USA],
    ["Aja Gehrett", "993 Washington Ave", "Nutley", "NJ", USA],
    ["Kirk Herritt", "88 15th Ave Ne", "Vestal", "NY", USA],
    ["Leonora Mauson", "3381 E 40th Ave", "Passaic", "NJ", USA],
];

/// Records whose state belongs to Canada, not the United States
pub const INVALID_STATE_SAMPLES: [[&str; 5]; 3] = [
    ["Josphine Villanueva", "63 Smith Ln", "Moss", "QC", USA],
    ["Daniel Perruzza", "11360 S Halsted St", "Santa Ana", "BC", USA],
    ["Cassi Wildfong", "26849 Jefferson Hwy", "Rolling Meadows", "NB", USA],
];

pub fn new_record(
    name: &str,
    street: &str,
    city: &str,
    state: &str,
    country: &str,
) -> NewAddressRecord {
    NewAddressRecord {
        name: name.to_string(),
        street: street.to_string(),
        city: city.to_string(),
        state: state.to_string(),
        country: country.to_string(),
    }
}

pub fn record_service() -> AddressRecordService {
    AddressRecordService::new(Arc::new(RegionDirectory::new()))
}

/// A service holding every record of [`SAMPLE_DATA`]
pub async fn seeded_record_service() -> AddressRecordService {
    let service = record_service();
    for [name, street, city, state, country] in SAMPLE_DATA {
        service
            .create(new_record(name, street, city, state, country))
            .await
            .expect("sample record is valid");
    }
    service
}

/// Application router over an empty store
pub fn test_router() -> Router {
    let regions = Arc::new(RegionDirectory::new());
    let records = Arc::new(AddressRecordService::new(Arc::clone(&regions)));
    app::router(records, regions)
}
