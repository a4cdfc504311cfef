//! Conversion of the concrete syntax tree into the object model.
//!
//! Every syntax tree node becomes exactly one object model node, in
//! document order. Suspicious but valid input is reported to an
//! [`InterpretErrorHandler`]; the only effect on the tree is that a
//! declaration without value or a style rule without selector is left out.

mod builder;
mod values;

use builder::AstBuilder;

use crate::decl::{CascadingStyleSheet, DeclarationList};
use crate::parser::CssNode;
use crate::reader::InterpretErrorHandler;
use crate::Result;

/// Build a stylesheet from a `Root` node.
pub fn create_stylesheet(
    root: &CssNode,
    interpret: &dyn InterpretErrorHandler,
    use_source_location: bool,
) -> Result<CascadingStyleSheet> {
    AstBuilder::new(interpret, use_source_location).stylesheet(root)
}

/// Build a declaration list from a `StyleDeclarationList` node.
pub fn create_declaration_list(
    node: &CssNode,
    interpret: &dyn InterpretErrorHandler,
    use_source_location: bool,
) -> Result<DeclarationList> {
    AstBuilder::new(interpret, use_source_location).declaration_list(node)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::decl::{
        ExpressionMember, HasDeclarations, MathMember, MediaModifier, RuleContainer,
        SelectorMember, SupportsConditionMember, TopLevelRule,
    };
    use crate::parser::{CharStream, parse_declaration_list, parse_stylesheet};
    use crate::reader::{CollectingInterpretErrorHandler, ThrowingParseErrorHandler};
    use crate::source_location::SourceLocationAware;

    fn build(css: &str) -> (CascadingStyleSheet, CollectingInterpretErrorHandler) {
        let root = parse_stylesheet(&CharStream::new(css, 8), &ThrowingParseErrorHandler, false)
            .unwrap();
        let interpret = CollectingInterpretErrorHandler::new();
        let sheet = create_stylesheet(&root, &interpret, true).unwrap();
        (sheet, interpret)
    }

    #[test]
    fn test_source_locations() {
        let (sheet, _) = build("div { color:red; width: 100%; }");
        let rule = sheet.rules()[0].as_style().unwrap();
        assert_eq!(rule.declaration_count(), 2);

        let location = rule.declarations()[0].source_location().unwrap();
        assert_eq!(location.first_token_begin_line(), Some(1));
        assert_eq!(location.first_token_begin_column(), Some(7));
        assert_eq!(location.first_token_end_column(), Some(11));
        assert!(rule.source_location().is_some());
    }

    #[test]
    fn test_without_source_locations() {
        let root = parse_stylesheet(
            &CharStream::new("a{color:red}", 8),
            &ThrowingParseErrorHandler,
            false,
        )
        .unwrap();
        let interpret = CollectingInterpretErrorHandler::new();
        let sheet = create_stylesheet(&root, &interpret, false).unwrap();
        assert!(sheet.rules()[0].source_location().is_none());
    }

    #[test]
    fn test_selectors() {
        let (sheet, _) = build(
            "svg|a[ns|href^='x' i] > b:not(.c, #d) ~ li:nth-child(2n+1)::before, :has(> img) {}",
        );
        let rule = sheet.rules()[0].as_style().unwrap();
        assert_eq!(rule.selector_count(), 2);

        let members = rule.selectors()[0].members();
        assert_eq!(members[0], SelectorMember::simple("svg|"));
        assert_eq!(members[1], SelectorMember::simple("a"));
        let SelectorMember::Attribute(attribute) = &members[2] else {
            panic!("expected attribute, got {:?}", members[2]);
        };
        assert_eq!(attribute.namespace_prefix(), Some("ns|"));
        assert_eq!(attribute.name(), "href");
        assert!(matches!(&members[5], SelectorMember::Not(inner) if inner.len() == 2));
        assert!(members.iter().any(|m| matches!(
            m,
            SelectorMember::FunctionLike { name, .. } if name == ":nth-child("
        )));
        assert!(matches!(
            &rule.selectors()[1].members()[0],
            SelectorMember::Has { combinator: Some(_), .. }
        ));
    }

    #[test]
    fn test_unknown_case_flag_is_dropped() {
        let (sheet, interpret) = build("[a='b' x] {}");
        let rule = sheet.rules()[0].as_style().unwrap();
        let SelectorMember::Attribute(attribute) = &rule.selectors()[0].members()[0] else {
            panic!("expected attribute");
        };
        assert!(attribute.case_flag().is_none());
        assert_eq!(interpret.warning_count(), 1);
    }

    #[test]
    fn test_expressions() {
        let (sheet, _) = build(
            "a { background: url(a.gif) no-repeat, rgb(1,2,3); width: calc(100% - (2*10px)); \
             grid-template-columns: [first] 1fr [second] }",
        );
        let decls = sheet.rules()[0].as_style().unwrap().declarations();
        let members = decls[0].expression().members();
        assert!(matches!(&members[0], ExpressionMember::Uri(uri) if uri.uri() == "a.gif"));
        assert!(matches!(&members[2], ExpressionMember::Operator(_)));
        assert!(matches!(&members[3], ExpressionMember::Function(f) if f.name() == "rgb"));

        let ExpressionMember::Math(math) = &decls[1].expression().members()[0] else {
            panic!("expected calc");
        };
        assert_eq!(math.function_name(), "calc");
        assert!(matches!(math.members()[2], MathMember::Nested(_)));

        assert!(matches!(
            &decls[2].expression().members()[0],
            ExpressionMember::LineNames(names) if names.names() == ["first"]
        ));
    }

    #[test]
    fn test_media_warnings() {
        let (sheet, interpret) =
            build("@media only paper and (max-wobble: 3px), print { a { b: c } }");
        let media = sheet.rules()[0].as_media().unwrap();
        assert_eq!(media.media_queries().len(), 2);
        assert_eq!(media.media_queries()[0].modifier(), MediaModifier::Only);
        assert_eq!(media.rule_count(), 1);
        assert_eq!(interpret.warning_count(), 2);
    }

    #[test]
    fn test_supports() {
        let (sheet, _) =
            build("@supports (display: flex) and (not (display: grid)) { a { b: c } }");
        let TopLevelRule::Supports(rule) = &sheet.rules()[0] else {
            panic!("expected @supports");
        };
        let members = rule.condition_members();
        assert_eq!(members.len(), 3);
        assert!(matches!(members[0], SupportsConditionMember::Declaration(_)));
        assert!(matches!(members[1], SupportsConditionMember::Operator(_)));
        assert!(matches!(members[2], SupportsConditionMember::Nested(_)));
        assert_eq!(rule.rule_count(), 1);
    }

    #[test]
    fn test_other_rules() {
        let (sheet, _) = build(
            "@import url(a.css) screen; @namespace svg url(http://www.w3.org/2000/svg); \
             @font-face { font-family: x } @keyframes spin { from { top: 0 } 50%, to { top: 1px } } \
             @page :first { margin: 1in; @top-left { content: 'x' } } @layer a.b, c; \
             @-moz-document url-prefix() { a{} }",
        );
        assert_eq!(sheet.import_rules().len(), 1);
        assert_eq!(sheet.namespace_rules().len(), 1);
        assert_eq!(sheet.rule_count(), 5);

        let TopLevelRule::Keyframes(keyframes) = &sheet.rules()[1] else {
            panic!("expected @keyframes");
        };
        assert_eq!(keyframes.animation_name(), "spin");
        assert_eq!(keyframes.blocks()[1].selectors(), ["50%", "to"]);

        let TopLevelRule::Page(page) = &sheet.rules()[2] else {
            panic!("expected @page");
        };
        assert_eq!(page.selectors(), [":first"]);
        assert_eq!(page.member_count(), 2);

        let TopLevelRule::Layer(layer) = &sheet.rules()[3] else {
            panic!("expected @layer");
        };
        assert_eq!(layer.names(), ["a.b", "c"]);

        let TopLevelRule::Unknown(unknown) = &sheet.rules()[4] else {
            panic!("expected unknown rule");
        };
        assert_eq!(unknown.parameters(), "url-prefix()");
        assert_eq!(unknown.body(), Some("a{}"));
    }

    #[test]
    fn test_declaration_list() {
        let node = parse_declaration_list(
            &CharStream::new("color: red; --Main: 1px; margin: 0 !important", 8),
            &ThrowingParseErrorHandler,
            false,
        )
        .unwrap();
        let interpret = CollectingInterpretErrorHandler::new();
        let list = create_declaration_list(&node, &interpret, true).unwrap();
        assert_eq!(list.declaration_count(), 3);
        assert_eq!(list.declarations()[1].property(), "--Main");
        assert!(list.declarations()[2].is_important());
    }
}
