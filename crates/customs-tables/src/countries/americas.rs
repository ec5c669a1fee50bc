//! # Americas
//!
//! Import policy for the United States and Canada.

use super::CountryRow;

pub(super) const ROWS: &[CountryRow] = &[
    CountryRow {
        code: "US",
        name: "United States",
        prohibited_categories: &["Narcotics", "Wildlife Products", "Explosives", "Currency"],
        restricted_categories: &[
            "Pharmaceuticals",
            "Ayurvedic Products",
            "Food Products",
            "Dairy Products",
            "Plant Products",
            "Alcohol",
            "Tobacco",
            "Batteries",
        ],
        prohibited_hsn_codes: &["85434000"],
        restricted_hsn_codes: &["88062100", "93040000"],
        special_notes: &[
            "FDA prior notice is required for all food shipments",
            "Personal-use medicines are limited to a 90-day supply",
        ],
    },
    CountryRow {
        code: "CA",
        name: "Canada",
        prohibited_categories: &["Narcotics", "Wildlife Products", "Explosives"],
        restricted_categories: &[
            "Pharmaceuticals",
            "Food Products",
            "Dairy Products",
            "Plant Products",
            "Weapons",
            "Alcohol",
            "Tobacco",
        ],
        prohibited_hsn_codes: &["93040000"],
        restricted_hsn_codes: &["33030090"],
        special_notes: &["CFIA inspection applies to food, plant and animal products"],
    },
];
