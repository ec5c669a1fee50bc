//! # Middle East
//!
//! Import policy for the United Arab Emirates, Saudi Arabia and Qatar.
//! Sources: UAE Federal Law No. 14 of 1995 (narcotics), MOHAP controlled
//! medicines list, SFDA import requirements, Qatar General Authority of
//! Customs prohibited goods list.

use super::CountryRow;

pub(super) const ROWS: &[CountryRow] = &[
    CountryRow {
        code: "AE",
        name: "United Arab Emirates",
        prohibited_categories: &[
            "Weapons",
            "Narcotics",
            "Explosives",
            "E-Cigarettes",
            "Wildlife Products",
        ],
        restricted_categories: &[
            "Pharmaceuticals",
            "Ayurvedic Products",
            "Alcohol",
            "Drones",
            "Jewelry",
        ],
        prohibited_hsn_codes: &["08028010"],
        restricted_hsn_codes: &["88062100", "30049069"],
        special_notes: &[
            "Medicines require prior approval from the Ministry of Health and Prevention",
            "Publications offending public morals are confiscated",
        ],
    },
    CountryRow {
        code: "SA",
        name: "Saudi Arabia",
        prohibited_categories: &[
            "Weapons",
            "Narcotics",
            "Alcohol",
            "Explosives",
            "Wildlife Products",
            "E-Cigarettes",
        ],
        restricted_categories: &[
            "Pharmaceuticals",
            "Ayurvedic Products",
            "Cosmetics",
            "Perfumes",
            "Drones",
        ],
        prohibited_hsn_codes: &[],
        restricted_hsn_codes: &["30049099", "33030090"],
        special_notes: &[
            "Pork products and alcohol are strictly prohibited",
            "Medicines require SFDA clearance",
        ],
    },
    CountryRow {
        code: "QA",
        name: "Qatar",
        prohibited_categories: &["Weapons", "Narcotics", "Alcohol", "Explosives"],
        restricted_categories: &["Pharmaceuticals", "Ayurvedic Products", "Drones"],
        prohibited_hsn_codes: &["08028010"],
        restricted_hsn_codes: &[],
        special_notes: &["Medicines must be accompanied by a prescription attested by the sender"],
    },
];
