//! Storefront Catalog
//!
//! The fixed, ordered list of plants shown on the home page.

use super::plant::Plant;

const CONIFERS_IMAGE: &str = "https://cdn.poehali.dev/projects/4315a037-1f24-48b2-973a-0ab6393585b8/files/3323152c-490d-403e-bb3d-2e6977b74d71.jpg";
const SHRUBS_IMAGE: &str = "https://cdn.poehali.dev/projects/4315a037-1f24-48b2-973a-0ab6393585b8/files/72999392-ef59-4ed4-ae21-871b351ac944.jpg";
const PERENNIALS_IMAGE: &str = "https://cdn.poehali.dev/projects/4315a037-1f24-48b2-973a-0ab6393585b8/files/8aa576e0-951e-4cb5-ace8-d6506e14ce71.jpg";

/// (id, name, category, price, image, description)
const STOCK: &[(i64, &str, &str, f64, &str, &str)] = &[
    (1, "Scots pine", "Conifers", 1200.0, CONIFERS_IMAGE, "Height 40-60 cm, 3 l container"),
    (2, "Blue spruce", "Conifers", 2500.0, CONIFERS_IMAGE, "Height 60-80 cm, 5 l container"),
    (3, "Thuja occidentalis 'Smaragd'", "Conifers", 1800.0, CONIFERS_IMAGE, "Height 50-70 cm, 4 l container"),
    (4, "Japanese spirea", "Shrubs", 800.0, SHRUBS_IMAGE, "Height 30-40 cm, 2 l container"),
    (5, "Panicle hydrangea", "Shrubs", 1500.0, SHRUBS_IMAGE, "Height 40-50 cm, 3 l container"),
    (6, "Thunberg barberry", "Shrubs", 900.0, SHRUBS_IMAGE, "Height 30-40 cm, 2 l container"),
    (7, "Hosta 'Sum and Substance'", "Perennials", 600.0, PERENNIALS_IMAGE, "1.5 l container"),
    (8, "Hybrid daylily", "Perennials", 500.0, PERENNIALS_IMAGE, "1.5 l container"),
];

/// Read-only catalog, in display order
#[derive(Debug, Clone, PartialEq)]
pub struct Catalog {
    plants: Vec<Plant>,
}

impl Catalog {
    pub fn new(plants: Vec<Plant>) -> Self {
        Self { plants }
    }

    /// The nursery's storefront stock
    pub fn nursery() -> Self {
        let plants = STOCK
            .iter()
            .map(|&(id, name, category, price, image, description)| Plant {
                id,
                name: name.to_string(),
                category: category.to_string(),
                price,
                image_url: image.to_string(),
                description: description.to_string(),
                in_stock: true,
            })
            .collect();
        Self::new(plants)
    }

    pub fn plants(&self) -> &[Plant] {
        &self.plants
    }

    pub fn get(&self, id: i64) -> Option<&Plant> {
        self.plants.iter().find(|p| p.id == id)
    }

    /// Distinct categories in first-seen order
    pub fn categories(&self) -> Vec<&str> {
        let mut seen: Vec<&str> = Vec::new();
        for plant in &self.plants {
            if !seen.contains(&plant.category.as_str()) {
                seen.push(&plant.category);
            }
        }
        seen
    }
}

impl Default for Catalog {
    fn default() -> Self {
        Self::nursery()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_nursery_catalog_order_and_ids() {
        let catalog = Catalog::nursery();
        let ids: Vec<i64> = catalog.plants().iter().map(|p| p.id).collect();
        assert_eq!(ids, vec![1, 2, 3, 4, 5, 6, 7, 8]);
        assert!(catalog.plants().iter().all(|p| p.price >= 0.0 && p.in_stock));
    }

    #[test]
    fn test_categories_first_seen() {
        let catalog = Catalog::nursery();
        assert_eq!(catalog.categories(), vec!["Conifers", "Shrubs", "Perennials"]);
    }

    #[test]
    fn test_get_by_id() {
        let catalog = Catalog::nursery();
        assert_eq!(catalog.get(4).map(|p| p.price), Some(800.0));
        assert!(catalog.get(42).is_none());
    }
}
