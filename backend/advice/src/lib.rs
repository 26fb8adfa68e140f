//! Stylist Advice Parser and Render Projection
//!
//! Converts sectioned free-text advice originating from LLMs into an ordered
//! section map, and projects that map into renderable recommendation blocks
//! and shop cards.

pub mod parser;
pub mod render;
pub mod sections;

pub use parser::parse;
pub use render::{RecommendationBlock, RenderPlan, SHOP_NOW_CTA, ShopCard, render};
pub use sections::{ParsedSections, SHOPPING_ITEMS, SectionKey};
