//! # Consumer Goods
//!
//! Everyday parcel contents: apparel, food and spices, cosmetics,
//! household electronics, printed matter, jewellery and handicrafts.
//! Most rows here are unrestricted; the exceptions are goods that carry
//! dangerous-goods or declared-value obligations wherever they travel.

use super::HsnRow;

pub(super) const ROWS: &[HsnRow] = &[
    // -- Textiles & footwear --------------------------------------------------
    HsnRow::open(
        "61091000",
        "T-shirts, singlets and other vests of cotton, knitted or crocheted",
        "Textiles",
        &["t-shirt", "tshirt", "tee", "vest", "banian"],
    ),
    HsnRow::open(
        "62044200",
        "Women's dresses of cotton",
        "Textiles",
        &["dress", "frock", "cotton dress"],
    ),
    HsnRow::open(
        "62063000",
        "Women's blouses, shirts and shirt-blouses of cotton",
        "Textiles",
        &["blouse", "kurti", "ladies shirt", "top"],
    ),
    HsnRow::open(
        "50072010",
        "Woven fabrics of silk, saree fabric",
        "Textiles",
        &["saree", "sari", "silk fabric", "dupatta"],
    ),
    HsnRow::open(
        "63014000",
        "Blankets and travelling rugs of synthetic fibres",
        "Textiles",
        &["blanket", "quilt", "rug"],
    ),
    HsnRow::open(
        "64039990",
        "Footwear with outer soles of rubber or leather and uppers of leather",
        "Footwear",
        &["shoes", "sandals", "chappal", "juttis", "boots"],
    ),
    // -- Food & spices --------------------------------------------------------
    HsnRow::open(
        "09041100",
        "Pepper of the genus Piper, neither crushed nor ground",
        "Spices",
        &["black pepper", "kali mirch", "peppercorns"],
    ),
    HsnRow::open(
        "09103030",
        "Turmeric powder",
        "Spices",
        &["haldi", "turmeric"],
    ),
    HsnRow::open(
        "09023010",
        "Black tea in immediate packings not exceeding 3 kg",
        "Food Products",
        &["tea", "chai", "tea leaves"],
    ),
    HsnRow::open(
        "10063020",
        "Basmati rice, semi-milled or wholly milled",
        "Food Products",
        &["rice", "basmati"],
    ),
    HsnRow::open(
        "17041000",
        "Chewing gum, whether or not sugar-coated",
        "Food Products",
        &["chewing gum", "bubble gum"],
    ),
    HsnRow::open(
        "17049090",
        "Sugar confectionery not containing cocoa",
        "Food Products",
        &["sweets", "mithai", "candy", "toffee", "laddoo"],
    ),
    HsnRow::open(
        "19059090",
        "Bread, pastry, biscuits and other bakers' wares",
        "Food Products",
        &["biscuits", "cookies", "namkeen", "snacks", "rusk"],
    ),
    HsnRow::open(
        "08028010",
        "Areca nuts, in shell",
        "Food Products",
        &["betel nut", "supari", "areca nut"],
    ),
    HsnRow::open(
        "04059020",
        "Ghee",
        "Dairy Products",
        &["ghee", "clarified butter", "desi ghee"],
    ),
    // -- Cosmetics & fragrance ------------------------------------------------
    HsnRow::open(
        "33049990",
        "Beauty or make-up preparations and skin-care preparations",
        "Cosmetics",
        &["makeup", "cosmetics", "face cream", "lipstick", "kajal"],
    ),
    HsnRow::open(
        "33059011",
        "Hair oil",
        "Cosmetics",
        &["hair oil", "coconut hair oil", "amla oil"],
    ),
    HsnRow::open(
        "33030090",
        "Perfumes and toilet waters",
        "Perfumes",
        &["perfume", "attar", "fragrance", "deodorant spray"],
    )
    .restricted("Alcohol-based perfumes are flammable liquids (UN1266) and ship only in limited quantities"),
    // -- Electronics ----------------------------------------------------------
    HsnRow::open(
        "85171300",
        "Smartphones",
        "Electronics",
        &["mobile phone", "smartphone", "cell phone", "iphone"],
    ),
    HsnRow::open(
        "84713010",
        "Portable automatic data processing machines weighing not more than 10 kg",
        "Electronics",
        &["laptop", "notebook computer", "macbook"],
    ),
    HsnRow::open(
        "85183000",
        "Headphones and earphones, whether or not combined with a microphone",
        "Electronics",
        &["headphones", "earphones", "earbuds", "headset"],
    ),
    HsnRow::open(
        "85258900",
        "Television cameras, digital cameras and video camera recorders",
        "Electronics",
        &["camera", "digital camera", "camcorder"],
    ),
    HsnRow::open(
        "85076000",
        "Lithium-ion accumulators",
        "Batteries",
        &["lithium battery", "power bank", "battery pack", "li-ion"],
    )
    .restricted("Lithium-ion batteries are dangerous goods in air transport and need a UN38.3 test summary"),
    HsnRow::open(
        "88062100",
        "Unmanned aircraft with maximum take-off weight not more than 250 g",
        "Drones",
        &["drone", "quadcopter", "uav", "mini drone"],
    )
    .restricted("Drones are dual-use items subject to export authorisation and destination registration")
    .licensed(),
    // -- Printed matter -------------------------------------------------------
    HsnRow::open(
        "49011010",
        "Printed books",
        "Books & Documents",
        &["book", "novel", "textbook", "magazine"],
    ),
    HsnRow::open(
        "49119990",
        "Other printed matter, including documents and certificates",
        "Books & Documents",
        &["documents", "papers", "certificates", "letters"],
    ),
    // -- Jewellery, toys, handicrafts -----------------------------------------
    HsnRow::open(
        "71131910",
        "Articles of jewellery of gold, set with gems",
        "Jewelry",
        &["gold jewellery", "gold ring", "necklace", "mangalsutra"],
    )
    .restricted("Precious-metal jewellery needs a declared value and may attract duty on arrival"),
    HsnRow::open(
        "71171910",
        "Imitation jewellery of base metal",
        "Jewelry",
        &["imitation jewellery", "artificial jewellery", "bangles", "earrings"],
    ),
    HsnRow::open(
        "95030030",
        "Dolls, puzzles and other toys",
        "Toys",
        &["toys", "dolls", "puzzle", "soft toy"],
    ),
    HsnRow::open(
        "44201900",
        "Statuettes and other ornaments of wood",
        "Handicrafts",
        &["wooden handicraft", "statue", "idol", "wood carving"],
    ),
    HsnRow::open(
        "90189099",
        "Other instruments and appliances used in medical sciences",
        "Medical Devices",
        &["medical device", "bp monitor", "glucometer", "nebulizer"],
    ),
];
