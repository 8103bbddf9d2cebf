// Default event catalog
//
// The fixed 12-entry set inserted by the idempotent startup seed and the
// destructive admin reset. Three events per category.

use crate::event::EventCategory;

/// One entry of the fixed default catalog.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CatalogEntry {
    pub name: &'static str,
    pub category: EventCategory,
}

/// The default catalog seeded into an empty events collection.
pub fn default_catalog() -> Vec<CatalogEntry> {
    use EventCategory::*;

    vec![
        // Cultural
        CatalogEntry { name: "Dance", category: Cultural },
        CatalogEntry { name: "Singing", category: Cultural },
        CatalogEntry { name: "Nukkad", category: Cultural },
        // Technical
        CatalogEntry { name: "Imagix", category: Technical },
        CatalogEntry { name: "Hackathon", category: Technical },
        CatalogEntry { name: "Invictus", category: Technical },
        // Sports
        CatalogEntry { name: "Badminton", category: Sports },
        CatalogEntry { name: "Cricket", category: Sports },
        CatalogEntry { name: "Football", category: Sports },
        // Others
        CatalogEntry { name: "Master and Miss", category: Others },
        CatalogEntry { name: "Treasure Hunt", category: Others },
        CatalogEntry { name: "Fashion Show", category: Others },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_catalog_has_twelve_entries() {
        assert_eq!(default_catalog().len(), 12);
    }

    #[test]
    fn test_catalog_has_three_entries_per_category() {
        let catalog = default_catalog();
        for category in [
            EventCategory::Technical,
            EventCategory::Cultural,
            EventCategory::Sports,
            EventCategory::Others,
        ] {
            let count = catalog.iter().filter(|e| e.category == category).count();
            assert_eq!(count, 3, "category {category} should have 3 entries");
        }
    }

    #[test]
    fn test_catalog_names_are_unique() {
        let names: HashSet<_> = default_catalog().iter().map(|e| e.name).collect();
        assert_eq!(names.len(), 12);
    }
}
