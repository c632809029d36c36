//! Fixed medicine catalog.
//!
//! Eight generics with composition, list price (INR), onset and an
//! effectiveness rating, plus the brand names they are sold under.
//! Order matters: lookups return the first hit.

/// Base price used when a medicine is not in the catalog
pub const DEFAULT_BASE_PRICE: f64 = 50.0;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CatalogEntry {
    pub name: &'static str,
    pub composition: &'static str,
    pub price: f64,
    pub relief_time: &'static str,
    pub effectiveness: u32,
    pub aliases: &'static [&'static str],
}

pub static CATALOG: &[CatalogEntry] = &[
    CatalogEntry {
        name: "Paracetamol",
        composition: "Paracetamol 500mg/650mg",
        price: 25.0,
        relief_time: "30-45 minutes",
        effectiveness: 85,
        aliases: &["Acetaminophen", "Calpol", "Crocin", "Dolo"],
    },
    CatalogEntry {
        name: "Ibuprofen",
        composition: "Ibuprofen 400mg/600mg",
        price: 35.0,
        relief_time: "20-30 minutes",
        effectiveness: 88,
        aliases: &["Brufen", "Advil", "Motrin", "Nurofen"],
    },
    CatalogEntry {
        name: "Aspirin",
        composition: "Acetylsalicylic acid 325mg/500mg",
        price: 20.0,
        relief_time: "15-30 minutes",
        effectiveness: 82,
        aliases: &["Disprin", "Ecosprin", "Aspirin"],
    },
    CatalogEntry {
        name: "Omeprazole",
        composition: "Omeprazole 20mg/40mg",
        price: 45.0,
        relief_time: "1-2 hours",
        effectiveness: 90,
        aliases: &["Losec", "Prilosec", "Omez"],
    },
    CatalogEntry {
        name: "Cetirizine",
        composition: "Cetirizine 10mg",
        price: 30.0,
        relief_time: "1-2 hours",
        effectiveness: 85,
        aliases: &["Zyrtec", "Reactine", "Alerid"],
    },
    CatalogEntry {
        name: "Metformin",
        composition: "Metformin 500mg/1000mg",
        price: 55.0,
        relief_time: "2-3 hours",
        effectiveness: 92,
        aliases: &["Glucophage", "Fortamet", "Riomet"],
    },
    CatalogEntry {
        name: "Amlodipine",
        composition: "Amlodipine 5mg/10mg",
        price: 40.0,
        relief_time: "4-6 hours",
        effectiveness: 88,
        aliases: &["Norvasc", "Amcard", "Amlong"],
    },
    CatalogEntry {
        name: "Atorvastatin",
        composition: "Atorvastatin 10mg/20mg/40mg",
        price: 65.0,
        relief_time: "2-4 weeks",
        effectiveness: 90,
        aliases: &["Lipitor", "Atorva", "Torvast"],
    },
];

impl CatalogEntry {
    /// True when `text` mentions this medicine by name or any brand
    pub fn mentioned_in(&self, text: &str) -> bool {
        let text = text.to_lowercase();
        text.contains(&self.name.to_lowercase())
            || self
                .aliases
                .iter()
                .any(|alias| text.contains(&alias.to_lowercase()))
    }

    /// First word of the composition, lowercased ("acetylsalicylic" for Aspirin)
    fn active_ingredient(&self) -> String {
        self.composition
            .split_whitespace()
            .next()
            .unwrap_or(self.name)
            .to_lowercase()
    }
}

/// First catalog entry mentioned in a free-text medication name
pub fn lookup_mention(text: &str) -> Option<&'static CatalogEntry> {
    CATALOG.iter().find(|entry| entry.mentioned_in(text))
}

/// Catalog entry by exact name, ignoring case
pub fn get(name: &str) -> Option<&'static CatalogEntry> {
    CATALOG
        .iter()
        .find(|entry| entry.name.eq_ignore_ascii_case(name.trim()))
}

/// Price the purchase options are derived from
pub fn base_price(medicine: &str) -> f64 {
    let lowered = medicine.to_lowercase();
    CATALOG
        .iter()
        .find(|entry| {
            entry.aliases.iter().any(|alias| *alias == medicine)
                || lowered.contains(&entry.active_ingredient())
        })
        .map(|entry| entry.price)
        .unwrap_or(DEFAULT_BASE_PRICE)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_catalog_shape() {
        assert_eq!(CATALOG.len(), 8);
        assert_eq!(CATALOG[0].name, "Paracetamol");
        assert_eq!(CATALOG[7].name, "Atorvastatin");
    }

    #[test]
    fn test_lookup_by_name_and_brand() {
        assert_eq!(lookup_mention("Metformin").map(|e| e.name), Some("Metformin"));
        assert_eq!(lookup_mention("Dolo 650").map(|e| e.name), Some("Paracetamol"));
        assert_eq!(lookup_mention("Proton pump (Losec)").map(|e| e.name), Some("Omeprazole"));
        assert!(lookup_mention("Antihistamines").is_none());
    }

    #[test]
    fn test_get_is_exact() {
        assert_eq!(get("ibuprofen").map(|e| e.price), Some(35.0));
        assert!(get("Ibu").is_none());
    }

    #[test]
    fn test_base_price() {
        assert_eq!(base_price("Paracetamol"), 25.0);
        // Aspirin's composition starts with acetylsalicylic; the brand list saves it
        assert_eq!(base_price("Aspirin"), 20.0);
        assert_eq!(base_price("Crocin"), 25.0);
        assert_eq!(base_price("Combiflam Plus"), DEFAULT_BASE_PRICE);
    }
}
