//! Walking the object model.
//!
//! [`visit_stylesheet`] drives a [`CssVisitor`] over every rule in document
//! order. [`visit_urls`] and [`visit_urls_mut`] focus on the URLs referenced
//! by imports and declarations.

use super::declaration::{Declaration, DeclarationList, HasDeclarations};
use super::expression::{Expression, ExpressionMember};
use super::font_face::FontFaceRule;
use super::import::ImportRule;
use super::keyframes::{KeyframesBlock, KeyframesRule};
use super::layer::LayerRule;
use super::media::MediaRule;
use super::namespace::NamespaceRule;
use super::page::{PageMarginBlock, PageMember, PageRule};
use super::selector::Selector;
use super::style_rule::StyleRule;
use super::stylesheet::{CascadingStyleSheet, RuleContainer, TopLevelRule};
use super::supports::SupportsRule;
use super::unknown::UnknownRule;
use super::uri::CssUri;
use super::viewport::ViewportRule;

/// Callbacks invoked while walking a stylesheet. All default to no-ops.
#[allow(unused_variables)]
pub trait CssVisitor {
    fn begin(&mut self) {}

    fn on_import(&mut self, rule: &ImportRule) {}

    fn on_namespace(&mut self, rule: &NamespaceRule) {}

    /// Called for every declaration, wherever it appears.
    fn on_declaration(&mut self, declaration: &Declaration) {}

    fn on_begin_style_rule(&mut self, rule: &StyleRule) {}

    fn on_style_rule_selector(&mut self, selector: &Selector) {}

    fn on_end_style_rule(&mut self, rule: &StyleRule) {}

    fn on_begin_page_rule(&mut self, rule: &PageRule) {}

    fn on_begin_page_margin_block(&mut self, block: &PageMarginBlock) {}

    fn on_end_page_margin_block(&mut self, block: &PageMarginBlock) {}

    fn on_end_page_rule(&mut self, rule: &PageRule) {}

    fn on_begin_font_face_rule(&mut self, rule: &FontFaceRule) {}

    fn on_end_font_face_rule(&mut self, rule: &FontFaceRule) {}

    fn on_begin_media_rule(&mut self, rule: &MediaRule) {}

    fn on_end_media_rule(&mut self, rule: &MediaRule) {}

    fn on_begin_keyframes_rule(&mut self, rule: &KeyframesRule) {}

    fn on_begin_keyframes_block(&mut self, block: &KeyframesBlock) {}

    fn on_end_keyframes_block(&mut self, block: &KeyframesBlock) {}

    fn on_end_keyframes_rule(&mut self, rule: &KeyframesRule) {}

    fn on_begin_viewport_rule(&mut self, rule: &ViewportRule) {}

    fn on_end_viewport_rule(&mut self, rule: &ViewportRule) {}

    fn on_begin_supports_rule(&mut self, rule: &SupportsRule) {}

    fn on_end_supports_rule(&mut self, rule: &SupportsRule) {}

    fn on_begin_layer_rule(&mut self, rule: &LayerRule) {}

    fn on_end_layer_rule(&mut self, rule: &LayerRule) {}

    fn on_unknown_rule(&mut self, rule: &UnknownRule) {}

    fn end(&mut self) {}
}

fn visit_declarations<V: CssVisitor + ?Sized>(declarations: &[Declaration], visitor: &mut V) {
    for declaration in declarations {
        visitor.on_declaration(declaration);
    }
}

/// Visit a single rule and, for grouping rules, everything nested in it.
pub fn visit_rule<V: CssVisitor + ?Sized>(rule: &TopLevelRule, visitor: &mut V) {
    match rule {
        TopLevelRule::Style(rule) => {
            visitor.on_begin_style_rule(rule);
            for selector in rule.selectors() {
                visitor.on_style_rule_selector(selector);
            }
            visit_declarations(rule.declarations(), visitor);
            visitor.on_end_style_rule(rule);
        }
        TopLevelRule::Page(rule) => {
            visitor.on_begin_page_rule(rule);
            for member in rule.members() {
                match member {
                    PageMember::Declaration(declaration) => visitor.on_declaration(declaration),
                    PageMember::MarginBlock(block) => {
                        visitor.on_begin_page_margin_block(block);
                        visit_declarations(block.declarations(), visitor);
                        visitor.on_end_page_margin_block(block);
                    }
                }
            }
            visitor.on_end_page_rule(rule);
        }
        TopLevelRule::FontFace(rule) => {
            visitor.on_begin_font_face_rule(rule);
            visit_declarations(rule.declarations(), visitor);
            visitor.on_end_font_face_rule(rule);
        }
        TopLevelRule::Media(rule) => {
            visitor.on_begin_media_rule(rule);
            for nested in rule.rules() {
                visit_rule(nested, visitor);
            }
            visitor.on_end_media_rule(rule);
        }
        TopLevelRule::Keyframes(rule) => {
            visitor.on_begin_keyframes_rule(rule);
            for block in rule.blocks() {
                visitor.on_begin_keyframes_block(block);
                visit_declarations(block.declarations(), visitor);
                visitor.on_end_keyframes_block(block);
            }
            visitor.on_end_keyframes_rule(rule);
        }
        TopLevelRule::Viewport(rule) => {
            visitor.on_begin_viewport_rule(rule);
            visit_declarations(rule.declarations(), visitor);
            visitor.on_end_viewport_rule(rule);
        }
        TopLevelRule::Supports(rule) => {
            visitor.on_begin_supports_rule(rule);
            for nested in rule.rules() {
                visit_rule(nested, visitor);
            }
            visitor.on_end_supports_rule(rule);
        }
        TopLevelRule::Layer(rule) => {
            visitor.on_begin_layer_rule(rule);
            for nested in rule.rules() {
                visit_rule(nested, visitor);
            }
            visitor.on_end_layer_rule(rule);
        }
        TopLevelRule::Unknown(rule) => visitor.on_unknown_rule(rule),
    }
}

/// Visit a whole stylesheet: imports, namespaces, then all rules in order.
pub fn visit_stylesheet<V: CssVisitor + ?Sized>(sheet: &CascadingStyleSheet, visitor: &mut V) {
    visitor.begin();
    for rule in sheet.import_rules() {
        visitor.on_import(rule);
    }
    for rule in sheet.namespace_rules() {
        visitor.on_namespace(rule);
    }
    for rule in sheet.rules() {
        visit_rule(rule, visitor);
    }
    visitor.end();
}

/// Visit the declarations of a free-standing declaration list.
pub fn visit_declaration_list<V: CssVisitor + ?Sized>(list: &DeclarationList, visitor: &mut V) {
    visitor.begin();
    visit_declarations(list.declarations(), visitor);
    visitor.end();
}

/// Callbacks for the URLs of a stylesheet.
#[allow(unused_variables)]
pub trait CssUrlVisitor {
    fn on_import(&mut self, rule: &ImportRule) {}

    /// A URL used in the value of `declaration`, including URLs nested in
    /// function arguments.
    fn on_url_declaration(&mut self, declaration: &Declaration, uri: &CssUri) {}
}

fn expression_uris<'a>(expression: &'a Expression, out: &mut Vec<&'a CssUri>) {
    for member in expression.members() {
        match member {
            ExpressionMember::Uri(uri) => out.push(uri),
            ExpressionMember::Function(function) => {
                if let Some(inner) = function.expression() {
                    expression_uris(inner, out);
                }
            }
            _ => {}
        }
    }
}

struct UrlCollector<'v, U: CssUrlVisitor + ?Sized> {
    inner: &'v mut U,
}

impl<U: CssUrlVisitor + ?Sized> CssVisitor for UrlCollector<'_, U> {
    fn on_import(&mut self, rule: &ImportRule) {
        self.inner.on_import(rule);
    }

    fn on_declaration(&mut self, declaration: &Declaration) {
        let mut uris = Vec::new();
        expression_uris(declaration.expression(), &mut uris);
        for uri in uris {
            self.inner.on_url_declaration(declaration, uri);
        }
    }
}

/// Report every import and every URL used in a declaration.
pub fn visit_urls<U: CssUrlVisitor + ?Sized>(sheet: &CascadingStyleSheet, visitor: &mut U) {
    visit_stylesheet(sheet, &mut UrlCollector { inner: visitor });
}

fn expression_uris_mut<F: FnMut(&mut CssUri)>(expression: &mut Expression, f: &mut F) {
    for member in expression.members_mut() {
        match member {
            ExpressionMember::Uri(uri) => f(uri),
            ExpressionMember::Function(function) => {
                if let Some(inner) = function.expression_mut() {
                    expression_uris_mut(inner, f);
                }
            }
            _ => {}
        }
    }
}

fn declarations_uris_mut<F: FnMut(&mut CssUri)>(declarations: &mut [Declaration], f: &mut F) {
    for declaration in declarations {
        expression_uris_mut(declaration.expression_mut(), f);
    }
}

fn rule_uris_mut<F: FnMut(&mut CssUri)>(rule: &mut TopLevelRule, f: &mut F) {
    match rule {
        TopLevelRule::Style(rule) => declarations_uris_mut(rule.declarations_mut(), f),
        TopLevelRule::FontFace(rule) => declarations_uris_mut(rule.declarations_mut(), f),
        TopLevelRule::Viewport(rule) => declarations_uris_mut(rule.declarations_mut(), f),
        TopLevelRule::Page(rule) => {
            for member in rule.members_mut() {
                match member {
                    PageMember::Declaration(declaration) => {
                        expression_uris_mut(declaration.expression_mut(), f)
                    }
                    PageMember::MarginBlock(block) => {
                        declarations_uris_mut(block.declarations_mut(), f)
                    }
                }
            }
        }
        TopLevelRule::Keyframes(rule) => {
            for block in rule.blocks_mut() {
                declarations_uris_mut(block.declarations_mut(), f);
            }
        }
        TopLevelRule::Media(rule) => rules_uris_mut(rule.rules_mut(), f),
        TopLevelRule::Supports(rule) => rules_uris_mut(rule.rules_mut(), f),
        TopLevelRule::Layer(rule) => rules_uris_mut(rule.rules_mut(), f),
        TopLevelRule::Unknown(_) => {}
    }
}

fn rules_uris_mut<F: FnMut(&mut CssUri)>(rules: &mut [TopLevelRule], f: &mut F) {
    for rule in rules {
        rule_uris_mut(rule, f);
    }
}

/// Call `f` for every URL of the stylesheet, allowing it to be rewritten in
/// place. Import locations come first, then declaration URLs in document order.
pub fn visit_urls_mut<F: FnMut(&mut CssUri)>(sheet: &mut CascadingStyleSheet, mut f: F) {
    for rule in sheet.import_rules_mut() {
        f(rule.location_mut());
    }
    rules_uris_mut(sheet.rules_mut(), &mut f);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::decl::{ExpressionFunction, MediaQuery, SelectorMember};

    fn sheet() -> CascadingStyleSheet {
        let mut sheet = CascadingStyleSheet::new();
        sheet.add_import_rule(ImportRule::new(CssUri::new("base.css")));

        let mut expression = Expression::uri("a.png");
        expression.add_term_simple("no-repeat");
        let style = StyleRule::new()
            .with_selector(Selector::from(SelectorMember::simple("div")))
            .with_declaration(Declaration::new("background", expression, false).unwrap());

        let mut image_set = Expression::uri("b.png");
        image_set.add_term_simple("1x");
        let mut function = Expression::new();
        function.add_member(ExpressionFunction::new("image-set", Some(image_set)));
        let nested = StyleRule::new()
            .with_selector(Selector::from(SelectorMember::simple("p")))
            .with_declaration(Declaration::new("background-image", function, false).unwrap());
        let mut media = MediaRule::new().with_media_query(MediaQuery::with_medium("print"));
        media.add_rule(nested);

        sheet.add_rule(style);
        sheet.add_rule(media);
        sheet
    }

    #[derive(Default)]
    struct Counter {
        events: Vec<String>,
    }

    impl CssVisitor for Counter {
        fn begin(&mut self) {
            self.events.push("begin".into());
        }

        fn on_import(&mut self, _rule: &ImportRule) {
            self.events.push("import".into());
        }

        fn on_begin_style_rule(&mut self, _rule: &StyleRule) {
            self.events.push("style".into());
        }

        fn on_declaration(&mut self, declaration: &Declaration) {
            self.events.push(declaration.property().to_string());
        }

        fn on_begin_media_rule(&mut self, _rule: &MediaRule) {
            self.events.push("media".into());
        }

        fn on_end_media_rule(&mut self, _rule: &MediaRule) {
            self.events.push("/media".into());
        }

        fn end(&mut self) {
            self.events.push("end".into());
        }
    }

    #[test]
    fn test_visit_order() {
        let mut counter = Counter::default();
        visit_stylesheet(&sheet(), &mut counter);
        assert_eq!(
            counter.events,
            [
                "begin",
                "import",
                "style",
                "background",
                "media",
                "style",
                "background-image",
                "/media",
                "end"
            ]
        );
    }

    #[test]
    fn test_visit_urls() {
        #[derive(Default)]
        struct Urls(Vec<String>);

        impl CssUrlVisitor for Urls {
            fn on_import(&mut self, rule: &ImportRule) {
                self.0.push(rule.location().uri().to_string());
            }

            fn on_url_declaration(&mut self, _declaration: &Declaration, uri: &CssUri) {
                self.0.push(uri.uri().to_string());
            }
        }

        let mut urls = Urls::default();
        visit_urls(&sheet(), &mut urls);
        assert_eq!(urls.0, ["base.css", "a.png", "b.png"]);
    }

    #[test]
    fn test_visit_urls_mut() {
        let mut sheet = sheet();
        visit_urls_mut(&mut sheet, |uri| {
            let rewritten = format!("/static/{}", uri.uri());
            uri.set_uri(rewritten);
        });

        let mut urls = Vec::new();
        visit_urls_mut(&mut sheet, |uri| urls.push(uri.uri().to_string()));
        assert_eq!(urls, ["/static/base.css", "/static/a.png", "/static/b.png"]);
    }
}
