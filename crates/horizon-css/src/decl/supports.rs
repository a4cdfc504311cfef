//! `@supports` rules and their conditions.

use super::declaration::Declaration;
use super::stylesheet::{RuleContainer, TopLevelRule, write_rule_block};
use crate::Result;
use crate::source_location::{SourceMeta, impl_source_location_aware};
use crate::version::CssVersion;
use crate::writer::{CssVersionAware, CssWriteable, WriterSettings, join_css};

/// The logical operator between supports conditions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SupportsOperator {
    And,
    Or,
}

impl SupportsOperator {
    pub const fn name(&self) -> &'static str {
        match self {
            SupportsOperator::And => "and",
            SupportsOperator::Or => "or",
        }
    }

    /// Case-insensitive lookup.
    pub fn from_name(name: &str) -> Option<SupportsOperator> {
        if name.eq_ignore_ascii_case("and") {
            Some(SupportsOperator::And)
        } else if name.eq_ignore_ascii_case("or") {
            Some(SupportsOperator::Or)
        } else {
            None
        }
    }
}

/// A member of a supports condition.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum SupportsConditionMember {
    /// `(property: value)`
    Declaration(Declaration),
    /// `not <member>`
    Negation(Box<SupportsConditionMember>),
    /// A parenthesised group of members.
    Nested(Vec<SupportsConditionMember>),
    Operator(SupportsOperator),
}

impl SupportsConditionMember {
    pub fn negation(member: SupportsConditionMember) -> Self {
        SupportsConditionMember::Negation(Box::new(member))
    }
}

impl CssVersionAware for SupportsConditionMember {
    fn min_version(&self) -> CssVersion {
        CssVersion::Css30
    }
}

impl CssWriteable for SupportsConditionMember {
    fn as_css_string(&self, settings: &WriterSettings, indent_level: usize) -> Result<String> {
        settings.check_version_requirements("@supports condition", self.min_version())?;
        match self {
            SupportsConditionMember::Declaration(declaration) => Ok(format!(
                "({})",
                declaration.as_css_string(settings, indent_level)?
            )),
            SupportsConditionMember::Negation(member) => Ok(format!(
                "not {}",
                member.as_css_string(settings, indent_level)?
            )),
            SupportsConditionMember::Nested(members) => Ok(format!(
                "({})",
                join_css(members, " ", settings, indent_level)?
            )),
            SupportsConditionMember::Operator(operator) => Ok(operator.name().to_string()),
        }
    }
}

impl From<Declaration> for SupportsConditionMember {
    fn from(declaration: Declaration) -> Self {
        SupportsConditionMember::Declaration(declaration)
    }
}

impl From<SupportsOperator> for SupportsConditionMember {
    fn from(operator: SupportsOperator) -> Self {
        SupportsConditionMember::Operator(operator)
    }
}

/// `@supports condition { rules }`
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct SupportsRule {
    condition: Vec<SupportsConditionMember>,
    rules: Vec<TopLevelRule>,
    source: SourceMeta,
}

impl SupportsRule {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_condition_member(mut self, member: impl Into<SupportsConditionMember>) -> Self {
        self.condition.push(member.into());
        self
    }

    pub fn condition_members(&self) -> &[SupportsConditionMember] {
        &self.condition
    }

    pub fn condition_members_mut(&mut self) -> &mut Vec<SupportsConditionMember> {
        &mut self.condition
    }

    pub fn add_condition_member(&mut self, member: impl Into<SupportsConditionMember>) -> &mut Self {
        self.condition.push(member.into());
        self
    }
}

impl RuleContainer for SupportsRule {
    fn rules(&self) -> &[TopLevelRule] {
        &self.rules
    }

    fn rules_mut(&mut self) -> &mut Vec<TopLevelRule> {
        &mut self.rules
    }
}

impl CssVersionAware for SupportsRule {
    fn min_version(&self) -> CssVersion {
        CssVersion::Css30
    }
}

impl CssWriteable for SupportsRule {
    fn as_css_string(&self, settings: &WriterSettings, indent_level: usize) -> Result<String> {
        settings.check_version_requirements("@supports", self.min_version())?;
        if !settings.is_write_supports_rules()
            || (settings.is_remove_unnecessary_code() && self.rules.is_empty())
        {
            return Ok(String::new());
        }
        let mut out = String::from("@supports ");
        out.push_str(&join_css(&self.condition, " ", settings, indent_level)?);
        out.push_str(&write_rule_block(&self.rules, settings, indent_level)?);
        if !settings.is_optimized_output() {
            out.push_str(settings.new_line());
        }
        Ok(out)
    }
}

impl_source_location_aware!(SupportsRule);

#[cfg(test)]
mod tests {
    use super::*;
    use crate::decl::{Expression, Selector, SelectorMember, StyleRule};

    fn decl(property: &str, value: &str) -> Declaration {
        Declaration::new(property, Expression::simple(value), false).unwrap()
    }

    #[test]
    fn test_write_condition() {
        let settings = WriterSettings::default();
        let members = vec![
            SupportsConditionMember::from(decl("display", "grid")),
            SupportsOperator::And.into(),
            SupportsConditionMember::negation(SupportsConditionMember::Nested(vec![
                decl("display", "inline-grid").into(),
                SupportsOperator::Or.into(),
                decl("float", "left").into(),
            ])),
        ];
        assert_eq!(
            join_css(&members, " ", &settings, 0).unwrap(),
            "(display:grid) and not ((display:inline-grid) or (float:left))"
        );
    }

    #[test]
    fn test_write_supports_rule() {
        let mut rule = SupportsRule::new().with_condition_member(decl("display", "flex"));
        rule.add_rule(
            StyleRule::new()
                .with_selector(Selector::from(SelectorMember::simple("div")))
                .with_declaration(decl("display", "flex")),
        );
        assert_eq!(
            rule.as_css_string(&WriterSettings::default(), 0).unwrap(),
            "@supports (display:flex) {\n  div { display:flex; }\n}\n"
        );
        assert_eq!(
            rule.as_css_string(&WriterSettings::default().with_optimized_output(true), 0)
                .unwrap(),
            "@supports (display:flex){div{display:flex}}"
        );
        assert!(
            rule.as_css_string(&WriterSettings::new(CssVersion::Css21), 0)
                .is_err()
        );
    }
}
