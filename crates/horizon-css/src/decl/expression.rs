//! Property values: expressions and their members.

use std::fmt;

use super::math::ExpressionMath;
use super::term_optimizer::optimized_value;
use super::uri::CssUri;
use crate::Result;
use crate::source_location::{SourceMeta, impl_source_location_aware};
use crate::version::CssVersion;
use crate::writer::{CssVersionAware, CssWriteable, WriterSettings};

/// An operator between expression terms.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ExpressionOperator {
    Slash,
    Comma,
    Equals,
}

impl ExpressionOperator {
    pub const fn name(&self) -> &'static str {
        match self {
            ExpressionOperator::Slash => "/",
            ExpressionOperator::Comma => ",",
            ExpressionOperator::Equals => "=",
        }
    }

    pub fn from_name(name: &str) -> Option<ExpressionOperator> {
        match name {
            "/" => Some(ExpressionOperator::Slash),
            "," => Some(ExpressionOperator::Comma),
            "=" => Some(ExpressionOperator::Equals),
            _ => None,
        }
    }
}

/// A plain term: identifier, number, dimension, string, hash or unicode range.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct TermSimple {
    value: String,
    source: SourceMeta,
}

impl TermSimple {
    pub fn new(value: impl Into<String>) -> Self {
        Self {
            value: value.into(),
            source: SourceMeta::default(),
        }
    }

    pub fn value(&self) -> &str {
        &self.value
    }

    pub fn set_value(&mut self, value: impl Into<String>) {
        self.value = value.into();
    }

    /// The value as written in optimized output.
    pub fn optimized_value(&self) -> String {
        optimized_value(&self.value)
    }

    /// Returns true if the value is a quoted string.
    pub fn is_string_literal(&self) -> bool {
        self.value.len() >= 2
            && (self.value.starts_with('"') || self.value.starts_with('\''))
            && self.value.ends_with(&self.value[..1])
    }
}

impl CssWriteable for TermSimple {
    fn as_css_string(&self, settings: &WriterSettings, _indent_level: usize) -> Result<String> {
        Ok(if settings.is_optimized_output() {
            self.optimized_value()
        } else {
            self.value.clone()
        })
    }
}

/// A function call such as `rgba(0,0,0,.5)` or `attr(title)`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ExpressionFunction {
    name: String,
    expression: Option<Expression>,
    source: SourceMeta,
}

impl ExpressionFunction {
    pub fn new(name: impl Into<String>, expression: Option<Expression>) -> Self {
        Self {
            name: name.into(),
            expression,
            source: SourceMeta::default(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn expression(&self) -> Option<&Expression> {
        self.expression.as_ref()
    }

    pub fn expression_mut(&mut self) -> Option<&mut Expression> {
        self.expression.as_mut()
    }

    pub fn set_expression(&mut self, expression: Option<Expression>) {
        self.expression = expression;
    }
}

impl CssWriteable for ExpressionFunction {
    fn as_css_string(&self, settings: &WriterSettings, indent_level: usize) -> Result<String> {
        match &self.expression {
            Some(expression) => Ok(format!(
                "{}({})",
                self.name,
                expression.as_css_string(settings, indent_level)?
            )),
            None if self.name.ends_with(')') => Ok(self.name.clone()),
            None => Ok(format!("{}()", self.name)),
        }
    }
}

/// Grid line names, e.g. `[header-start main]`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct LineNames {
    names: Vec<String>,
    source: SourceMeta,
}

impl LineNames {
    pub fn new(names: Vec<String>) -> Self {
        Self {
            names,
            source: SourceMeta::default(),
        }
    }

    pub fn names(&self) -> &[String] {
        &self.names
    }

    pub fn add_name(&mut self, name: impl Into<String>) {
        self.names.push(name.into());
    }
}

impl CssVersionAware for LineNames {
    fn min_version(&self) -> CssVersion {
        CssVersion::Css30
    }
}

impl CssWriteable for LineNames {
    fn as_css_string(&self, settings: &WriterSettings, _indent_level: usize) -> Result<String> {
        settings.check_version_requirements("grid line names", self.min_version())?;
        Ok(format!("[{}]", self.names.join(" ")))
    }
}

/// A member of an [`Expression`].
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum ExpressionMember {
    Simple(TermSimple),
    Uri(CssUri),
    Function(ExpressionFunction),
    Math(ExpressionMath),
    LineNames(LineNames),
    Operator(ExpressionOperator),
}

impl ExpressionMember {
    pub fn is_operator(&self) -> bool {
        matches!(self, ExpressionMember::Operator(_))
    }
}

impl CssWriteable for ExpressionMember {
    fn as_css_string(&self, settings: &WriterSettings, indent_level: usize) -> Result<String> {
        match self {
            ExpressionMember::Simple(term) => term.as_css_string(settings, indent_level),
            ExpressionMember::Uri(uri) => uri.as_css_string(settings, indent_level),
            ExpressionMember::Function(function) => function.as_css_string(settings, indent_level),
            ExpressionMember::Math(math) => math.as_css_string(settings, indent_level),
            ExpressionMember::LineNames(names) => names.as_css_string(settings, indent_level),
            ExpressionMember::Operator(op) => Ok(op.name().to_string()),
        }
    }
}

impl From<TermSimple> for ExpressionMember {
    fn from(term: TermSimple) -> Self {
        ExpressionMember::Simple(term)
    }
}

impl From<CssUri> for ExpressionMember {
    fn from(uri: CssUri) -> Self {
        ExpressionMember::Uri(uri)
    }
}

impl From<ExpressionFunction> for ExpressionMember {
    fn from(function: ExpressionFunction) -> Self {
        ExpressionMember::Function(function)
    }
}

impl From<ExpressionMath> for ExpressionMember {
    fn from(math: ExpressionMath) -> Self {
        ExpressionMember::Math(math)
    }
}

impl From<ExpressionOperator> for ExpressionMember {
    fn from(op: ExpressionOperator) -> Self {
        ExpressionMember::Operator(op)
    }
}

/// The value of a declaration: terms, optionally separated by operators.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct Expression {
    members: Vec<ExpressionMember>,
    source: SourceMeta,
}

impl Expression {
    pub fn new() -> Self {
        Self::default()
    }

    /// An expression with a single simple term.
    pub fn simple(value: impl Into<String>) -> Self {
        let mut expression = Self::new();
        expression.add_term_simple(value);
        expression
    }

    /// An expression with a single `url(...)` term.
    pub fn uri(uri: impl Into<String>) -> Self {
        let mut expression = Self::new();
        expression.add_uri(uri);
        expression
    }

    pub fn add_member(&mut self, member: impl Into<ExpressionMember>) -> &mut Self {
        self.members.push(member.into());
        self
    }

    pub fn add_term_simple(&mut self, value: impl Into<String>) -> &mut Self {
        self.add_member(TermSimple::new(value))
    }

    pub fn add_uri(&mut self, uri: impl Into<String>) -> &mut Self {
        self.add_member(CssUri::new(uri))
    }

    pub fn add_operator(&mut self, op: ExpressionOperator) -> &mut Self {
        self.add_member(op)
    }

    /// Insert a member before `index`.
    pub fn insert_member(
        &mut self,
        index: usize,
        member: impl Into<ExpressionMember>,
    ) -> Result<&mut Self> {
        if index > self.members.len() {
            return Err(crate::Error::invalid_argument(format!(
                "Index {index} is out of bounds for {} expression members",
                self.members.len()
            )));
        }
        self.members.insert(index, member.into());
        Ok(self)
    }

    pub fn remove_member(&mut self, index: usize) -> Option<ExpressionMember> {
        (index < self.members.len()).then(|| self.members.remove(index))
    }

    pub fn remove_all_members(&mut self) {
        self.members.clear();
    }

    pub fn members(&self) -> &[ExpressionMember] {
        &self.members
    }

    pub fn members_mut(&mut self) -> &mut [ExpressionMember] {
        &mut self.members
    }

    pub fn member_count(&self) -> usize {
        self.members.len()
    }

    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }

    /// All simple terms, in order.
    pub fn simple_members(&self) -> impl Iterator<Item = &TermSimple> {
        self.members.iter().filter_map(|m| match m {
            ExpressionMember::Simple(term) => Some(term),
            _ => None,
        })
    }
}

impl CssWriteable for Expression {
    fn as_css_string(&self, settings: &WriterSettings, indent_level: usize) -> Result<String> {
        let mut out = String::new();
        let mut previous_was_operator = false;
        for member in &self.members {
            let is_operator = member.is_operator();
            // Terms are separated by a space, as in "solid 1px black".
            if !is_operator && !previous_was_operator && !out.is_empty() {
                out.push(' ');
            }
            out.push_str(&member.as_css_string(settings, indent_level)?);
            previous_was_operator = is_operator;
        }
        Ok(out)
    }
}

impl fmt::Display for Expression {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let css = self
            .as_css_string(&WriterSettings::default(), 0)
            .map_err(|_| fmt::Error)?;
        f.write_str(&css)
    }
}

impl_source_location_aware!(TermSimple, ExpressionFunction, LineNames, Expression);
