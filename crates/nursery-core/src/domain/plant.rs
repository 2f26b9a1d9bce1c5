//! Plant Entity
//!
//! A catalog record, plus the editable field set used by the admin form.

use serde::{Deserialize, Deserializer, Serialize};

use crate::error::{Error, Result};

/// A plant offered by the nursery
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Plant {
    /// Unique identifier (assigned by the catalog service)
    pub id: i64,
    pub name: String,
    pub category: String,
    /// Price in rubles, never negative
    #[serde(deserialize_with = "price_from_number_or_string")]
    pub price: f64,
    #[serde(default)]
    pub image_url: String,
    #[serde(default)]
    pub description: String,
    #[serde(default = "default_true")]
    pub in_stock: bool,
}

impl Plant {
    pub fn new(id: i64, draft: PlantDraft) -> Self {
        Self {
            id,
            name: draft.name,
            category: draft.category,
            price: draft.price,
            image_url: draft.image_url,
            description: draft.description,
            in_stock: draft.in_stock,
        }
    }
}

/// Plant fields without the id, as entered in the admin form
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlantDraft {
    pub name: String,
    pub category: String,
    pub price: f64,
    pub image_url: String,
    pub description: String,
    pub in_stock: bool,
}

impl Default for PlantDraft {
    fn default() -> Self {
        Self {
            name: String::new(),
            category: String::new(),
            price: 0.0,
            image_url: String::new(),
            description: String::new(),
            in_stock: true,
        }
    }
}

impl From<&Plant> for PlantDraft {
    fn from(plant: &Plant) -> Self {
        Self {
            name: plant.name.clone(),
            category: plant.category.clone(),
            price: plant.price,
            image_url: plant.image_url.clone(),
            description: plant.description.clone(),
            in_stock: plant.in_stock,
        }
    }
}

impl PlantDraft {
    /// Check the fields the catalog service requires
    pub fn validate(&self) -> Result<()> {
        if self.name.trim().is_empty() {
            return Err(Error::validation("Name is required"));
        }
        if self.category.trim().is_empty() {
            return Err(Error::validation("Category is required"));
        }
        if !self.price.is_finite() || self.price < 0.0 {
            return Err(Error::validation("Price must be a non-negative number"));
        }
        Ok(())
    }
}

fn default_true() -> bool {
    true
}

/// The catalog service stores prices as decimals and sends them back as strings.
fn price_from_number_or_string<'de, D>(deserializer: D) -> std::result::Result<f64, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Price {
        Number(f64),
        Text(String),
    }

    let price = match Price::deserialize(deserializer)? {
        Price::Number(n) => n,
        Price::Text(s) => s.trim().parse::<f64>().map_err(serde::de::Error::custom)?,
    };
    if !price.is_finite() || price < 0.0 {
        return Err(serde::de::Error::custom(format!("invalid price {}", price)));
    }
    Ok(price)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_price_from_decimal_string() {
        let json = r#"{
            "id": 3, "name": "Thuja", "category": "Conifers", "price": "1800.00",
            "image_url": "", "description": "", "in_stock": true,
            "created_at": "2025-01-01 10:00:00", "updated_at": "2025-01-01 10:00:00"
        }"#;
        let plant: Plant = serde_json::from_str(json).unwrap();
        assert_eq!(plant.price, 1800.0);
        assert_eq!(plant.id, 3);
    }

    #[test]
    fn test_price_from_number_and_missing_optionals() {
        let json = r#"{"id": 1, "name": "Pine", "category": "Conifers", "price": 1200}"#;
        let plant: Plant = serde_json::from_str(json).unwrap();
        assert_eq!(plant.price, 1200.0);
        assert!(plant.in_stock);
        assert!(plant.image_url.is_empty());
    }

    #[test]
    fn test_bad_price_string_is_rejected() {
        let json = r#"{"id": 1, "name": "Pine", "category": "Conifers", "price": "cheap"}"#;
        assert!(serde_json::from_str::<Plant>(json).is_err());
    }

    #[test]
    fn test_non_finite_or_negative_price_is_rejected() {
        for price in [r#""NaN""#, r#""inf""#, r#""-50.00""#, "-50"] {
            let json = format!(r#"{{"id": 1, "name": "Pine", "category": "Conifers", "price": {}}}"#, price);
            assert!(serde_json::from_str::<Plant>(&json).is_err(), "price {} accepted", price);
        }
    }

    #[test]
    fn test_draft_validation() {
        let mut draft = PlantDraft {
            name: "Hosta".to_string(),
            category: "Perennials".to_string(),
            price: 600.0,
            ..Default::default()
        };
        assert!(draft.validate().is_ok());

        draft.category = "  ".to_string();
        assert!(matches!(draft.validate(), Err(Error::Validation(_))));

        draft.category = "Perennials".to_string();
        draft.price = -1.0;
        assert!(matches!(draft.validate(), Err(Error::Validation(_))));
    }

    #[test]
    fn test_draft_from_plant_keeps_fields() {
        let plant = Plant {
            id: 9,
            name: "Barberry".to_string(),
            category: "Shrubs".to_string(),
            price: 900.0,
            image_url: "img.jpg".to_string(),
            description: "2 l pot".to_string(),
            in_stock: false,
        };
        let draft = PlantDraft::from(&plant);
        assert_eq!(Plant::new(9, draft), plant);
    }
}
