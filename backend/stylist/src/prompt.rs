//! The sectioned stylist prompt.
//!
//! The template pins the model to bullet items under fixed `NAME:` headers so
//! the reply stays machine-parseable. The section parser downstream depends
//! on this shape; header names here and keys there must stay in sync.

/// System prompt sent with every advice request.
pub const STYLIST_SYSTEM_PROMPT: &str = "You are a fashion stylist AI.";

/// Placeholder until a real skin-tone classifier is wired in.
pub const DEFAULT_SKIN_TONE: &str = "medium";

/// Build the user prompt for one advice request.
pub fn advice_prompt(skin_tone: &str) -> String {
    format!(
        "\
You are a fashion stylist AI.
Respond ONLY using this exact template.
Do NOT write paragraphs.
Do NOT explain anything.

DRESS_CODE:
- item
- item

OUTFIT:
- item
- item

SHIRT:
- item

PANT:
- item

SHOES:
- item

HAIRSTYLE:
- item

ACCESSORIES:
- item
- item

COLORS:
- item
- item

SHOPPING_ITEMS:
- Royal Blue Shirt
- Deep Purple Formal
- Emerald Green Shirt
- Black Chelsea Boots
- Burgundy Loafers

Skin tone: {skin_tone}
"
    )
}
