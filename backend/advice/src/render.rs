//! Projection of parsed advice into renderable blocks and shop cards.

use serde::{Deserialize, Serialize};

use crate::sections::{ParsedSections, SectionKey};

/// Call-to-action label carried by every shop card.
pub const SHOP_NOW_CTA: &str = "Shop Now";

/// A labeled list of recommendation lines.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RecommendationBlock {
    pub label: String,
    pub items: Vec<String>,
}

/// One purchasable item with its call-to-action.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ShopCard {
    pub item: String,
    pub cta: String,
}

/// Deterministic plan for rendering one analysis result.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RenderPlan {
    pub recommendation_blocks: Vec<RecommendationBlock>,
    pub shop_cards: Vec<ShopCard>,
}

/// Project parsed sections into a render plan.
///
/// Every section except `shopping_key` becomes one recommendation block, in
/// section order, labeled with the key's first underscore turned back into a
/// space. Items under `shopping_key` become shop cards; a missing shopping
/// section yields an empty card list, not an error.
pub fn render(parsed: &ParsedSections, shopping_key: &SectionKey) -> RenderPlan {
    let mut plan = RenderPlan::default();
    for (key, items) in parsed.iter() {
        if key == shopping_key {
            plan.shop_cards.extend(items.iter().map(|item| ShopCard {
                item: item.clone(),
                cta: SHOP_NOW_CTA.to_string(),
            }));
        } else {
            plan.recommendation_blocks.push(RecommendationBlock {
                label: key.label(),
                items: items.to_vec(),
            });
        }
    }
    plan
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parser::parse;
    use crate::sections::SHOPPING_ITEMS;

    fn shopping_key() -> SectionKey {
        SectionKey::new(SHOPPING_ITEMS)
    }

    #[test]
    fn shopping_section_becomes_cards_only() {
        let parsed = parse("Outfit:\n- blazer\nShopping Items:\n- Royal Blue Shirt\n- Black Chelsea Boots");
        let plan = render(&parsed, &shopping_key());

        assert_eq!(plan.recommendation_blocks.len(), 1);
        assert_eq!(plan.recommendation_blocks[0].label, "OUTFIT");
        assert_eq!(plan.shop_cards.len(), 2);
        assert_eq!(plan.shop_cards[0].item, "Royal Blue Shirt");
        assert_eq!(plan.shop_cards[0].cta, SHOP_NOW_CTA);
    }

    #[test]
    fn missing_shopping_section_is_not_an_error() {
        let parsed = parse("Outfit:\n- blazer\nColors:\n- navy");
        let plan = render(&parsed, &shopping_key());

        assert!(plan.shop_cards.is_empty());
        let labels: Vec<&str> = plan
            .recommendation_blocks
            .iter()
            .map(|b| b.label.as_str())
            .collect();
        assert_eq!(labels, vec!["OUTFIT", "COLORS"]);
    }

    #[test]
    fn block_labels_restore_first_space_only() {
        let parsed = parse("Dress Code:\n- formal\nBest Color Picks:\n- emerald");
        let plan = render(&parsed, &shopping_key());

        let labels: Vec<&str> = plan
            .recommendation_blocks
            .iter()
            .map(|b| b.label.as_str())
            .collect();
        assert_eq!(labels, vec!["DRESS CODE", "BEST COLOR PICKS"]);
    }

    #[test]
    fn block_items_preserve_order() {
        let parsed = parse("Accessories:\n- watch\n- belt\n- scarf");
        let plan = render(&parsed, &shopping_key());
        assert_eq!(plan.recommendation_blocks[0].items, vec!["watch", "belt", "scarf"]);
    }

    #[test]
    fn rendering_is_idempotent() {
        let text = "Outfit:\n- blazer\nShopping Items:\n- loafers";
        let key = shopping_key();
        let first = render(&parse(text), &key);
        let second = render(&parse(text), &key);
        assert_eq!(first, second);
    }

    #[test]
    fn empty_sections_yield_empty_plan() {
        let plan = render(&ParsedSections::default(), &shopping_key());
        assert_eq!(plan, RenderPlan::default());
    }

    #[test]
    fn plan_serializes_to_stable_json() {
        let parsed = parse("Shoes:\n- loafers\nShopping Items:\n- loafers");
        let plan = render(&parsed, &shopping_key());
        let json = serde_json::to_value(&plan).unwrap();
        assert_eq!(json["recommendation_blocks"][0]["label"], "SHOES");
        assert_eq!(json["shop_cards"][0]["cta"], "Shop Now");
    }
}
