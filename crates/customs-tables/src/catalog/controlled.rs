//! # Controlled Goods
//!
//! Medicines, arms, narcotics, wildlife products and other goods whose
//! movement is controlled regardless of destination.
//!
//! Sources: Schedule 1 of ITC(HS) export policy, the NDPS Act 1985, the
//! Arms Act 1959, CITES appendices, and the Prohibition of Electronic
//! Cigarettes Act 2019.

use super::HsnRow;

pub(super) const ROWS: &[HsnRow] = &[
    // -- Pharmaceuticals ------------------------------------------------------
    HsnRow::open(
        "30049099",
        "Other medicaments put up in measured doses",
        "Pharmaceuticals",
        &["medicine", "tablets", "capsules", "antibiotics", "prescription drugs"],
    )
    .restricted("Prescription medicines need a valid prescription and clear destination health-authority checks"),
    HsnRow::open(
        "30049069",
        "Other analgesic and antipyretic medicaments",
        "Pharmaceuticals",
        &["painkiller", "paracetamol", "fever medicine"],
    )
    .restricted("Over-the-counter medicines are limited to personal-use quantities"),
    HsnRow::open(
        "30039000",
        "Medicaments not put up in measured doses",
        "Pharmaceuticals",
        &["syrup", "bulk medicine", "tonic"],
    )
    .restricted("Bulk medicaments require a drug import licence at destination"),
    HsnRow::open(
        "30021200",
        "Antisera and other blood fractions",
        "Pharmaceuticals",
        &["antiserum", "plasma", "blood product"],
    )
    .restricted("Biological products need cold-chain handling and a biological material permit")
    .licensed(),
    HsnRow::open(
        "30049011",
        "Ayurvedic medicaments",
        "Ayurvedic Products",
        &["ayurvedic medicine", "herbal medicine", "churna", "chyawanprash"],
    )
    .restricted("Herbal formulations may contain heavy metals or botanicals controlled at destination"),
    // -- Arms & ammunition ----------------------------------------------------
    HsnRow::open(
        "93011000",
        "Artillery weapons (for example, guns, howitzers and mortars)",
        "Weapons",
        &["artillery", "howitzer", "mortar"],
    )
    .prohibited("Military weapons cannot be carried by courier under the Arms Act and SCOMET controls")
    .licensed(),
    HsnRow::open(
        "93040000",
        "Other arms, such as spring, air or gas guns and pistols",
        "Weapons",
        &["air gun", "air rifle", "pellet gun", "bb gun"],
    )
    .restricted("Air weapons need an arms licence and destination import permit")
    .licensed(),
    HsnRow::open(
        "93062100",
        "Cartridges for shotguns",
        "Weapons",
        &["cartridges", "shotgun shells", "ammunition"],
    )
    .prohibited("Ammunition is an explosive article and cannot be carried by courier")
    .licensed(),
    HsnRow::open(
        "82119200",
        "Other knives having fixed blades",
        "Bladed Articles",
        &["knife", "hunting knife", "dagger", "khukri"],
    ),
    // -- Explosives & hazardous goods -----------------------------------------
    HsnRow::open(
        "36041000",
        "Fireworks",
        "Explosives",
        &["fireworks", "firecrackers", "crackers", "sparklers"],
    )
    .prohibited("Pyrotechnics are Class 1 dangerous goods and forbidden in courier networks"),
    // -- Narcotics ------------------------------------------------------------
    HsnRow::open(
        "13021100",
        "Opium extracts",
        "Narcotics",
        &["opium", "poppy extract"],
    )
    .prohibited("Narcotic drugs controlled under the NDPS Act and the 1961 Single Convention"),
    HsnRow::open(
        "13021990",
        "Other vegetable saps and extracts, including cannabis resin",
        "Narcotics",
        &["cannabis", "hashish", "charas", "bhang"],
    )
    .prohibited("Narcotic drugs controlled under the NDPS Act and the 1961 Single Convention"),
    // -- Tobacco, nicotine & alcohol ------------------------------------------
    HsnRow::open(
        "24022090",
        "Cigarettes containing tobacco",
        "Tobacco",
        &["cigarettes", "tobacco", "smokes"],
    )
    .restricted("Tobacco products are excisable and limited to duty-free allowances"),
    HsnRow::open(
        "85434000",
        "Electronic cigarettes and personal electric vaporising devices",
        "E-Cigarettes",
        &["vape", "e-cigarette", "e-cig", "vaporizer"],
    )
    .prohibited("Export of electronic nicotine delivery systems is banned under the Prohibition of Electronic Cigarettes Act, 2019"),
    HsnRow::open(
        "22083011",
        "Whisky in bottles",
        "Alcohol",
        &["whisky", "whiskey", "liquor", "alcohol"],
    )
    .restricted("Alcoholic beverages are excisable and many carriers accept them only under a licence")
    .licensed(),
    // -- Plants, wildlife & heritage ------------------------------------------
    HsnRow::open(
        "06029090",
        "Other live plants",
        "Plant Products",
        &["plants", "saplings", "bonsai", "tulsi plant"],
    )
    .restricted("Live plants need a phytosanitary certificate"),
    HsnRow::open(
        "12099190",
        "Vegetable seeds for sowing",
        "Plant Products",
        &["seeds", "vegetable seeds", "beej"],
    )
    .restricted("Seeds for sowing need a phytosanitary certificate and an import permit at most destinations"),
    HsnRow::open(
        "05079010",
        "Ivory and ivory powder",
        "Wildlife Products",
        &["ivory", "elephant tusk"],
    )
    .prohibited("Trade in ivory is banned under CITES Appendix I and the Wild Life (Protection) Act"),
    HsnRow::open(
        "97060000",
        "Antiques of an age exceeding one hundred years",
        "Antiques",
        &["antique", "heritage artefact", "old coins"],
    )
    .restricted("Antiquities need an export permit under the Antiquities and Art Treasures Act, 1972")
    .licensed(),
    HsnRow::open(
        "49070030",
        "Banknotes being legal tender",
        "Currency",
        &["banknotes", "currency notes", "cash", "money"],
    )
    .prohibited("Currency and negotiable instruments cannot be sent through courier"),
];
