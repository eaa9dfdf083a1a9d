//! Catalog extraction from the JSON items export.
//!
//! The export groups items under top-level `guns`, `knives`, and `gloves`
//! maps keyed by weapon name. Field names drifted across export versions,
//! so each card field is read through a list of accepted key aliases.

use serde_json::Value;
use std::collections::HashSet;

/// Top-level category keys in the export.
const CATEGORY_KEYS: [&str; 3] = ["guns", "knives", "gloves"];

const NAME_KEYS: [&str; 3] = ["skin_name", "name", "title"];
const BASE_KEYS: [&str; 3] = ["base_value", "value", "market_value"];
const DG_KEYS: [&str; 3] = ["dg", "dg_value", "dgValue"];
const STATUS_KEYS: [&str; 3] = ["status", "state", "availability"];
const IMAGE_KEYS: [&str; 4] = ["image_url", "image", "img", "url"];

/// One renderable card extracted from the export.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CatalogCard {
    /// Skin name, display casing
    pub skin_name: String,
    /// Base value rendered as text
    pub base_value: Option<String>,
    /// DG value rendered as text
    pub dg_value: Option<String>,
    /// Status text
    pub status: Option<String>,
    /// Thumbnail URL
    pub image_url: Option<String>,
    /// Weapon the card belongs to (the map key it was found under)
    pub weapon: String,
}

/// Extracts cards from the export, walking all known categories.
///
/// Anything that is not shaped like an item map is skipped silently; the
/// export regularly carries extra top-level keys.
#[must_use]
pub fn extract_cards(data: &Value) -> Vec<CatalogCard> {
    let mut cards = Vec::new();
    let Some(root) = data.as_object() else {
        return cards;
    };

    for category in CATEGORY_KEYS {
        let Some(weapons) = root.get(category).and_then(Value::as_object) else {
            continue;
        };
        for (weapon_name, weapon_items) in weapons {
            let Some(items) = weapon_items.as_array() else {
                continue;
            };
            for item in items.iter().filter_map(Value::as_object) {
                let skin_name = first_text(item, &NAME_KEYS).unwrap_or_default();
                cards.push(CatalogCard {
                    skin_name,
                    base_value: first_text(item, &BASE_KEYS),
                    dg_value: first_text(item, &DG_KEYS),
                    status: first_text(item, &STATUS_KEYS),
                    image_url: first_text(item, &IMAGE_KEYS),
                    weapon: weapon_name.clone(),
                });
            }
        }
    }

    cards
}

/// Drops duplicate (weapon, skin name) cards, keeping the first occurrence.
#[must_use]
pub fn dedup_cards(cards: Vec<CatalogCard>) -> Vec<CatalogCard> {
    let mut seen = HashSet::new();
    cards
        .into_iter()
        .filter(|card| seen.insert((card.weapon.clone(), card.skin_name.clone())))
        .collect()
}

/// Returns the first present alias, rendered as text. Null, missing, and
/// non-scalar values all count as absent.
fn first_text(item: &serde_json::Map<String, Value>, keys: &[&str]) -> Option<String> {
    keys.iter().find_map(|key| match item.get(*key) {
        Some(Value::String(text)) => Some(text.clone()),
        Some(Value::Number(number)) => Some(number.to_string()),
        _ => None,
    })
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]
    use super::*;
    use serde_json::json;

    #[test]
    fn test_extract_cards_from_all_categories() {
        let data = json!({
            "guns": {
                "ak47": [
                    {"skin_name": "Glo", "base_value": 1500, "dg": "1.6k", "status": "rising",
                     "image_url": "https://img.test/glo.png"},
                ],
            },
            "knives": {
                "karambit": [{"name": "Fade", "value": "9k"}],
            },
            "gloves": {},
            "version": 3,
        });

        let cards = extract_cards(&data);
        assert_eq!(cards.len(), 2);

        assert_eq!(cards[0].skin_name, "Glo");
        assert_eq!(cards[0].weapon, "ak47");
        assert_eq!(cards[0].base_value.as_deref(), Some("1500"));
        assert_eq!(cards[0].dg_value.as_deref(), Some("1.6k"));
        assert_eq!(cards[0].status.as_deref(), Some("rising"));
        assert_eq!(cards[0].image_url.as_deref(), Some("https://img.test/glo.png"));

        // Alias keys from the older export format
        assert_eq!(cards[1].skin_name, "Fade");
        assert_eq!(cards[1].weapon, "karambit");
        assert_eq!(cards[1].base_value.as_deref(), Some("9k"));
    }

    #[test]
    fn test_alias_priority_order() {
        let data = json!({
            "guns": {"awp": [{"skin_name": "Dragon", "title": "ignored", "base_value": 5, "value": 6}]},
        });
        let cards = extract_cards(&data);
        assert_eq!(cards[0].skin_name, "Dragon");
        assert_eq!(cards[0].base_value.as_deref(), Some("5"));
    }

    #[test]
    fn test_extract_tolerates_malformed_nodes() {
        let data = json!({
            "guns": {
                "ak47": [{"skin_name": "Glo"}, "not-an-item", 17],
                "awp": "not-a-list",
            },
            "knives": [],
        });
        let cards = extract_cards(&data);
        assert_eq!(cards.len(), 1);
        assert_eq!(cards[0].status, None);
        assert_eq!(cards[0].image_url, None);
    }

    #[test]
    fn test_extract_non_object_root() {
        assert!(extract_cards(&json!([1, 2, 3])).is_empty());
        assert!(extract_cards(&json!(null)).is_empty());
    }

    #[test]
    fn test_dedup_keeps_first_occurrence() {
        let data = json!({
            "guns": {
                "ak47": [
                    {"skin_name": "Glo", "base_value": 1500},
                    {"skin_name": "Glo", "base_value": 9999},
                    {"skin_name": "Ace"},
                ],
                "awp": [{"skin_name": "Glo"}],
            },
        });
        let cards = dedup_cards(extract_cards(&data));
        assert_eq!(cards.len(), 3);
        assert_eq!(cards[0].base_value.as_deref(), Some("1500"));
        // Same skin under a different weapon is a different card
        assert_eq!(cards[2].weapon, "awp");
    }
}
