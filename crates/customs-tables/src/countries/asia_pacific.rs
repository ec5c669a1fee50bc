//! # Asia-Pacific
//!
//! Import policy for Singapore, Australia, Japan and China.

use super::CountryRow;

pub(super) const ROWS: &[CountryRow] = &[
    CountryRow {
        code: "SG",
        name: "Singapore",
        prohibited_categories: &["Narcotics", "E-Cigarettes", "Explosives", "Wildlife Products"],
        restricted_categories: &["Pharmaceuticals", "Tobacco", "Alcohol", "Weapons", "Drones"],
        prohibited_hsn_codes: &["17041000"],
        restricted_hsn_codes: &[],
        special_notes: &["Chewing gum imports are banned except for approved therapeutic gum"],
    },
    CountryRow {
        code: "AU",
        name: "Australia",
        prohibited_categories: &["Narcotics", "Wildlife Products", "Explosives"],
        restricted_categories: &[
            "Pharmaceuticals",
            "Ayurvedic Products",
            "Food Products",
            "Dairy Products",
            "Spices",
            "Plant Products",
            "Weapons",
            "Tobacco",
        ],
        prohibited_hsn_codes: &["06029090", "04059020"],
        restricted_hsn_codes: &["44201900"],
        special_notes: &[
            "All food, plant material and wooden articles must be declared for biosecurity inspection",
            "Tobacco imports require a permit from the Australian Border Force",
        ],
    },
    CountryRow {
        code: "JP",
        name: "Japan",
        prohibited_categories: &["Narcotics", "Weapons", "Explosives", "Wildlife Products"],
        restricted_categories: &[
            "Pharmaceuticals",
            "Ayurvedic Products",
            "Cosmetics",
            "Food Products",
            "Plant Products",
        ],
        prohibited_hsn_codes: &[],
        restricted_hsn_codes: &["30049069"],
        special_notes: &["Medicines containing stimulant ingredients are prohibited"],
    },
    CountryRow {
        code: "CN",
        name: "China",
        prohibited_categories: &["Narcotics", "Weapons", "Explosives", "Currency", "Wildlife Products"],
        restricted_categories: &["Pharmaceuticals", "Food Products", "Plant Products", "Drones"],
        prohibited_hsn_codes: &[],
        restricted_hsn_codes: &["49011010"],
        special_notes: &["Printed matter is subject to content review"],
    },
];
