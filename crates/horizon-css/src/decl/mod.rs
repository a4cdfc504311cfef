//! The CSS object model.
//!
//! A [`CascadingStyleSheet`] owns its rules, rules own their selectors and
//! declarations, and declarations own their expressions. Every node renders
//! itself through [`CssWriteable`](crate::writer::CssWriteable) and can carry
//! the [`SourceLocation`](crate::source_location::SourceLocation) it was
//! read from.

mod color;
mod declaration;
mod expression;
mod font_face;
mod import;
mod keyframes;
mod layer;
mod math;
mod media;
mod namespace;
mod page;
mod selector;
mod style_rule;
mod stylesheet;
mod supports;
mod term_optimizer;
mod unknown;
mod uri;
mod viewport;
pub mod visit;

pub use color::{Hsl, Hsla, Rgb, Rgba};
pub use declaration::{Declaration, DeclarationList, HasDeclarations};
pub use expression::{
    Expression, ExpressionFunction, ExpressionMember, ExpressionOperator, LineNames, TermSimple,
};
pub use font_face::FontFaceRule;
pub use import::ImportRule;
pub use keyframes::{KeyframesBlock, KeyframesRule};
pub use layer::LayerRule;
pub use math::{ExpressionMath, MathMember, MathOperator, MathProduct};
pub use media::{MediaExpression, MediaModifier, MediaQuery, MediaRule};
pub use namespace::NamespaceRule;
pub use page::{PageMarginBlock, PageMember, PageRule};
pub use selector::{
    AttributeCase, AttributeOperator, Selector, SelectorAttribute, SelectorCombinator,
    SelectorMember,
};
pub use style_rule::StyleRule;
pub use stylesheet::{CascadingStyleSheet, RuleContainer, TopLevelRule};
pub use supports::{SupportsConditionMember, SupportsOperator, SupportsRule};
pub use term_optimizer::optimized_value;
pub use unknown::UnknownRule;
pub use uri::CssUri;
pub use viewport::ViewportRule;
pub use visit::{CssUrlVisitor, CssVisitor, visit_stylesheet, visit_urls, visit_urls_mut};
