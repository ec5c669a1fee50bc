//! # Europe
//!
//! Import policy for the United Kingdom, Germany and France. EU members
//! share the Union Customs Code baseline; national notes differ.

use super::CountryRow;

pub(super) const ROWS: &[CountryRow] = &[
    CountryRow {
        code: "GB",
        name: "United Kingdom",
        prohibited_categories: &["Narcotics", "Wildlife Products", "Explosives"],
        restricted_categories: &[
            "Pharmaceuticals",
            "Food Products",
            "Dairy Products",
            "Plant Products",
            "Weapons",
            "Bladed Articles",
            "Alcohol",
            "Tobacco",
        ],
        prohibited_hsn_codes: &["82119200"],
        restricted_hsn_codes: &["30049011"],
        special_notes: &[
            "Meat and dairy products from outside the EU are not allowed in personal parcels",
            "Gifts valued above GBP 39 attract import VAT",
        ],
    },
    CountryRow {
        code: "DE",
        name: "Germany",
        prohibited_categories: &["Narcotics", "Wildlife Products", "Explosives", "Weapons"],
        restricted_categories: &[
            "Pharmaceuticals",
            "Ayurvedic Products",
            "Food Products",
            "Dairy Products",
            "Plant Products",
            "Alcohol",
            "Tobacco",
        ],
        prohibited_hsn_codes: &[],
        restricted_hsn_codes: &["85076000"],
        special_notes: &["Parcels above EUR 150 need a full customs declaration"],
    },
    CountryRow {
        code: "FR",
        name: "France",
        prohibited_categories: &["Narcotics", "Wildlife Products", "Explosives", "Weapons"],
        restricted_categories: &[
            "Pharmaceuticals",
            "Food Products",
            "Dairy Products",
            "Plant Products",
            "Alcohol",
            "Tobacco",
            "Cosmetics",
        ],
        prohibited_hsn_codes: &[],
        restricted_hsn_codes: &[],
        special_notes: &[],
    },
];
