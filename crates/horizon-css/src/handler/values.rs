//! Conversion of selectors, declarations, expressions and media queries.

use super::builder::AstBuilder;
use crate::decl::{
    AttributeCase, AttributeOperator, CssUri, Declaration, Expression, ExpressionFunction,
    ExpressionMath, ExpressionMember, ExpressionOperator, LineNames, MathMember, MathOperator,
    MathProduct, MediaExpression, MediaModifier, MediaQuery, Selector, SelectorAttribute,
    SelectorCombinator, SelectorMember, TermSimple,
};
use crate::media::{MediaFeature, Medium};
use crate::parser::{CssNode, NodeType};
use crate::Result;

impl AstBuilder<'_> {
    pub(super) fn selector(&self, node: &CssNode) -> Result<Selector> {
        let mut selector = Selector::new();
        for child in node.children() {
            let member = match child.node_type() {
                NodeType::NamespacePrefix
                | NodeType::ElementName
                | NodeType::Hash
                | NodeType::Class => SelectorMember::simple(child.text()),
                NodeType::Pseudo => self.pseudo(child)?,
                NodeType::Attrib => SelectorMember::Attribute(self.attribute(child)?),
                NodeType::SelectorCombinator => SelectorMember::Combinator(
                    SelectorCombinator::from_name(child.text())
                        .ok_or_else(|| malformed(child, "selector combinator"))?,
                ),
                NodeType::Negation => SelectorMember::Not(self.selectors(child)?),
                NodeType::PseudoIs => SelectorMember::Is(self.selectors(child)?),
                NodeType::PseudoWhere => SelectorMember::Where(self.selectors(child)?),
                NodeType::PseudoHas => SelectorMember::Has {
                    combinator: child
                        .find_child(NodeType::SelectorCombinator)
                        .and_then(|c| SelectorCombinator::from_name(c.text())),
                    selectors: self.selectors(child)?,
                },
                NodeType::Host => SelectorMember::Host(Box::new(self.inner_selector(child)?)),
                NodeType::HostContext => {
                    SelectorMember::HostContext(Box::new(self.inner_selector(child)?))
                }
                NodeType::Slotted => SelectorMember::Slotted(Box::new(self.inner_selector(child)?)),
                _ => return Err(malformed(child, "selector member")),
            };
            selector.add_member(member);
        }
        self.locate(&mut selector, node);
        Ok(selector)
    }

    /// All direct `Selector` children.
    fn selectors(&self, node: &CssNode) -> Result<Vec<Selector>> {
        node.children()
            .iter()
            .filter(|c| c.is(NodeType::Selector))
            .map(|c| self.selector(c))
            .collect()
    }

    fn inner_selector(&self, node: &CssNode) -> Result<Selector> {
        let inner = node
            .find_child(NodeType::Selector)
            .ok_or_else(|| malformed(node, "selector argument"))?;
        self.selector(inner)
    }

    fn pseudo(&self, node: &CssNode) -> Result<SelectorMember> {
        let name = node.text();
        if !name.ends_with('(') {
            return Ok(SelectorMember::simple(name));
        }
        let argument = match node.child(0) {
            Some(nth) if nth.is(NodeType::Nth) => {
                let mut expression = Expression::simple(nth.text());
                self.locate(&mut expression, nth);
                expression
            }
            Some(expr) if expr.is(NodeType::Expr) => self.expression(expr)?,
            Some(other) => return Err(malformed(other, "pseudo class argument")),
            None => Expression::new(),
        };
        Ok(SelectorMember::FunctionLike {
            name: name.to_string(),
            argument,
        })
    }

    fn attribute(&self, node: &CssNode) -> Result<SelectorAttribute> {
        let prefix = node.find_child(NodeType::NamespacePrefix).map(CssNode::text);
        let name = node.text();

        let mut attribute = match node.find_child(NodeType::AttribOperator) {
            None => SelectorAttribute::new(prefix, name)?,
            Some(operator_node) => {
                let operator = AttributeOperator::from_name(operator_node.text())
                    .ok_or_else(|| malformed(operator_node, "attribute operator"))?;
                let value = node
                    .find_child(NodeType::AttribValue)
                    .ok_or_else(|| malformed(node, "attribute value"))?;
                let case_flag = node.find_child(NodeType::AttribCaseFlag).and_then(|flag| {
                    let case = AttributeCase::from_name(flag.text());
                    if case.is_none() {
                        self.warn(format!(
                            "Ignoring unknown attribute case flag '{}' of [{name}]",
                            flag.text()
                        ));
                    }
                    case
                });
                SelectorAttribute::with_value(prefix, name, operator, value.text(), case_flag)?
            }
        };
        self.locate(&mut attribute, node);
        Ok(attribute)
    }

    /// The declarations of a `StyleDeclarationList` node.
    pub(super) fn declarations(&self, node: &CssNode) -> Result<Vec<Declaration>> {
        let mut declarations = Vec::with_capacity(node.child_count());
        for child in node.children() {
            match child.node_type() {
                NodeType::StyleDeclaration => {
                    if let Some(declaration) = self.declaration(child)? {
                        declarations.push(declaration);
                    }
                }
                _ => return Err(malformed(child, "declaration")),
            }
        }
        Ok(declarations)
    }

    /// A declaration, or `None` if it has no value.
    pub(super) fn declaration(&self, node: &CssNode) -> Result<Option<Declaration>> {
        let property = node
            .find_child(NodeType::Property)
            .ok_or_else(|| malformed(node, "declaration"))?;
        let Some(expr) = node.find_child(NodeType::Expr) else {
            self.warn(format!(
                "Skipping declaration '{}' without expression{}",
                property.text(),
                location_suffix(node)
            ));
            return Ok(None);
        };
        let important = node.find_child(NodeType::Important).is_some();
        let mut declaration = Declaration::new(property.text(), self.expression(expr)?, important)?;
        self.locate(&mut declaration, node);
        Ok(Some(declaration))
    }

    pub(super) fn expression(&self, node: &CssNode) -> Result<Expression> {
        let mut expression = Expression::new();
        for child in node.children() {
            let member: ExpressionMember = match child.node_type() {
                NodeType::ExprTerm => {
                    let mut term = TermSimple::new(child.text());
                    self.locate(&mut term, child);
                    term.into()
                }
                NodeType::ExprOperator => ExpressionOperator::from_name(child.text())
                    .ok_or_else(|| malformed(child, "expression operator"))?
                    .into(),
                NodeType::Url => {
                    let mut uri = CssUri::new(child.text());
                    self.locate(&mut uri, child);
                    uri.into()
                }
                NodeType::Function => {
                    let argument = child
                        .find_child(NodeType::Expr)
                        .map(|e| self.expression(e))
                        .transpose()?;
                    let mut function = ExpressionFunction::new(child.text(), argument);
                    self.locate(&mut function, child);
                    function.into()
                }
                NodeType::Calc => {
                    let mut math = ExpressionMath::new(self.math_members(child)?)
                        .with_function_name(child.text());
                    self.locate(&mut math, child);
                    math.into()
                }
                NodeType::LineNames => {
                    let mut names =
                        LineNames::new(child.children().iter().map(|n| n.text().to_string()).collect());
                    self.locate(&mut names, child);
                    ExpressionMember::LineNames(names)
                }
                _ => return Err(malformed(child, "expression member")),
            };
            expression.add_member(member);
        }
        self.locate(&mut expression, node);
        Ok(expression)
    }

    fn math_members(&self, node: &CssNode) -> Result<Vec<MathMember>> {
        node.children()
            .iter()
            .map(|child| {
                Ok(match child.node_type() {
                    NodeType::CalcUnit => MathMember::Unit(child.text().to_string()),
                    NodeType::CalcSumOperator | NodeType::CalcProductOperator => {
                        MathMember::Operator(
                            MathOperator::from_name(child.text())
                                .ok_or_else(|| malformed(child, "calc operator"))?,
                        )
                    }
                    NodeType::CalcProduct => {
                        MathMember::Product(MathProduct::with_members(self.math_members(child)?))
                    }
                    NodeType::CalcNested => {
                        MathMember::Nested(MathProduct::with_members(self.math_members(child)?))
                    }
                    _ => return Err(malformed(child, "calc member")),
                })
            })
            .collect()
    }

    /// The queries of a `MediaList` node.
    pub(super) fn media_queries(&self, node: &CssNode) -> Result<Vec<MediaQuery>> {
        node.children().iter().map(|q| self.media_query(q)).collect()
    }

    fn media_query(&self, node: &CssNode) -> Result<MediaQuery> {
        let modifier = node
            .find_child(NodeType::MediaModifier)
            .and_then(|m| MediaModifier::from_name(m.text()))
            .unwrap_or_default();
        let medium = node.find_child(NodeType::Medium).map(CssNode::text);
        if let Some(medium) = medium
            && Medium::from_name(medium).is_none()
        {
            self.warn(format!("Unknown medium '{medium}'{}", location_suffix(node)));
        }

        let mut query = MediaQuery::new(modifier, medium);
        for child in node.children().iter().filter(|c| c.is(NodeType::MediaExpr)) {
            query.add_expression(self.media_expression(child)?);
        }
        self.locate(&mut query, node);
        Ok(query)
    }

    fn media_expression(&self, node: &CssNode) -> Result<MediaExpression> {
        let feature = node
            .find_child(NodeType::MediaFeature)
            .ok_or_else(|| malformed(node, "media expression"))?
            .text();
        if MediaFeature::from_name(feature).is_none() {
            self.warn(format!("Unknown media feature '{feature}'{}", location_suffix(node)));
        }
        let value = node
            .find_child(NodeType::Expr)
            .map(|e| self.expression(e))
            .transpose()?;
        let mut expression = MediaExpression::new(feature, value);
        self.locate(&mut expression, node);
        Ok(expression)
    }
}

/// An error for a syntax tree node that does not have the expected shape.
pub(super) fn malformed(node: &CssNode, what: &str) -> crate::Error {
    let (line, column) = node
        .first_token_area()
        .map_or((0, 0), |a| (a.begin_line, a.begin_column));
    crate::Error::parse(
        format!("Malformed {what}: unexpected {:?} node", node.node_type()),
        line,
        column,
    )
}

pub(super) fn location_suffix(node: &CssNode) -> String {
    node.source_location()
        .map(|l| format!(" @ {l}"))
        .unwrap_or_default()
}
