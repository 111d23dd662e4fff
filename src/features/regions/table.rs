//! Compiled-in region table.
//!
//! Codes follow ISO 3166-2 with the country prefix stripped.

use crate::features::regions::models::{Country, Subdivision};

macro_rules! subdivisions {
    ($($code:literal => $name:literal),* $(,)?) => {
        &[$(Subdivision { code: $code, name: $name }),*]
    };
}

pub static COUNTRIES: &[Country] = &[
    Country {
        name: "United States of America",
        alpha2: "US",
        alpha3: "USA",
        aliases: &["United States", "United States of America (the)", "America"],
        subdivisions: subdivisions![
            "AL" => "Alabama",
            "AK" => "Alaska",
            "AZ" => "Arizona",
            "AR" => "Arkansas",
            "CA" => "California",
            "CO" => "Colorado",
            "CT" => "Connecticut",
            "DE" => "Delaware",
            "FL" => "Florida",
            "GA" => "Georgia",
            "HI" => "Hawaii",
            "ID" => "Idaho",
            "IL" => "Illinois",
            "IN" => "Indiana",
            "IA" => "Iowa",
            "KS" => "Kansas",
            "KY" => "Kentucky",
            "LA" => "Louisiana",
            "ME" => "Maine",
            "MD" => "Maryland",
            "MA" => "Massachusetts",
            "MI" => "Michigan",
            "MN" => "Minnesota",
            "MS" => "Mississippi",
            "MO" => "Missouri",
            "MT" => "Montana",
            "NE" => "Nebraska",
            "NV" => "Nevada",
            "NH" => "New Hampshire",
            "NJ" => "New Jersey",
            "NM" => "New Mexico",
            "NY" => "New York",
            "NC" => "North Carolina",
            "ND" => "North Dakota",
            "OH" => "Ohio",
            "OK" => "Oklahoma",
            "OR" => "Oregon",
            "PA" => "Pennsylvania",
            "RI" => "Rhode Island",
            "SC" => "South Carolina",
            "SD" => "South Dakota",
            "TN" => "Tennessee",
            "TX" => "Texas",
            "UT" => "Utah",
            "VT" => "Vermont",
            "VA" => "Virginia",
            "WA" => "Washington",
            "WV" => "West Virginia",
            "WI" => "Wisconsin",
            "WY" => "Wyoming",
            "DC" => "District of Columbia",
            "AS" => "American Samoa",
            "GU" => "Guam",
            "MP" => "Northern Mariana Islands",
            "PR" => "Puerto Rico",
            "VI" => "United States Virgin Islands",
        ],
    },
    Country {
        name: "Canada",
        alpha2: "CA",
        alpha3: "CAN",
        aliases: &[],
        subdivisions: subdivisions![
            "AB" => "Alberta",
            "BC" => "British Columbia",
            "MB" => "Manitoba",
            "NB" => "New Brunswick",
            "NL" => "Newfoundland and Labrador",
            "NS" => "Nova Scotia",
            "NT" => "Northwest Territories",
            "NU" => "Nunavut",
            "ON" => "Ontario",
            "PE" => "Prince Edward Island",
            "QC" => "Quebec",
            "SK" => "Saskatchewan",
            "YT" => "Yukon",
        ],
    },
    Country {
        name: "Mexico",
        alpha2: "MX",
        alpha3: "MEX",
        aliases: &["United Mexican States"],
        subdivisions: subdivisions![
            "AGU" => "Aguascalientes",
            "BCN" => "Baja California",
            "BCS" => "Baja California Sur",
            "CAM" => "Campeche",
            "CHP" => "Chiapas",
            "CHH" => "Chihuahua",
            "CMX" => "Ciudad de México",
            "COA" => "Coahuila de Zaragoza",
            "COL" => "Colima",
            "DUR" => "Durango",
            "GUA" => "Guanajuato",
            "GRO" => "Guerrero",
            "HID" => "Hidalgo",
            "JAL" => "Jalisco",
            "MEX" => "México",
            "MIC" => "Michoacán de Ocampo",
            "MOR" => "Morelos",
            "NAY" => "Nayarit",
            "NLE" => "Nuevo León",
            "OAX" => "Oaxaca",
            "PUE" => "Puebla",
            "QUE" => "Querétaro",
            "ROO" => "Quintana Roo",
            "SLP" => "San Luis Potosí",
            "SIN" => "Sinaloa",
            "SON" => "Sonora",
            "TAB" => "Tabasco",
            "TAM" => "Tamaulipas",
            "TLA" => "Tlaxcala",
            "VER" => "Veracruz de Ignacio de la Llave",
            "YUC" => "Yucatán",
            "ZAC" => "Zacatecas",
        ],
    },
    Country {
        name: "Australia",
        alpha2: "AU",
        alpha3: "AUS",
        aliases: &["Commonwealth of Australia"],
        subdivisions: subdivisions![
            "ACT" => "Australian Capital Territory",
            "NSW" => "New South Wales",
            "NT" => "Northern Territory",
            "QLD" => "Queensland",
            "SA" => "South Australia",
            "TAS" => "Tasmania",
            "VIC" => "Victoria",
            "WA" => "Western Australia",
        ],
    },
];
