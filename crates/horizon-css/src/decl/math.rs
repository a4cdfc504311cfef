//! `calc()` expressions.

use crate::Result;
use crate::source_location::{SourceMeta, impl_source_location_aware};
use crate::version::CssVersion;
use crate::writer::{CssVersionAware, CssWriteable, WriterSettings};

/// An arithmetic operator inside `calc()`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MathOperator {
    Plus,
    Minus,
    Multiply,
    Divide,
}

impl MathOperator {
    pub const fn name(&self) -> &'static str {
        match self {
            MathOperator::Plus => "+",
            MathOperator::Minus => "-",
            MathOperator::Multiply => "*",
            MathOperator::Divide => "/",
        }
    }

    /// The written form. `+` and `-` must be surrounded by whitespace.
    pub const fn css_text(&self) -> &'static str {
        match self {
            MathOperator::Plus => " + ",
            MathOperator::Minus => " - ",
            MathOperator::Multiply => "*",
            MathOperator::Divide => "/",
        }
    }

    pub fn from_name(name: &str) -> Option<MathOperator> {
        match name {
            "+" => Some(MathOperator::Plus),
            "-" => Some(MathOperator::Minus),
            "*" => Some(MathOperator::Multiply),
            "/" => Some(MathOperator::Divide),
            _ => None,
        }
    }
}

/// A member of a `calc()` expression.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum MathMember {
    /// A number, dimension, percentage or nested function such as `var(--x)`.
    Unit(String),
    Operator(MathOperator),
    /// Operands joined by `*` or `/`.
    Product(MathProduct),
    /// A parenthesised sub-expression.
    Nested(MathProduct),
}

impl CssWriteable for MathMember {
    fn as_css_string(&self, settings: &WriterSettings, indent_level: usize) -> Result<String> {
        Ok(match self {
            MathMember::Unit(text) => text.clone(),
            MathMember::Operator(op) => op.css_text().to_string(),
            MathMember::Product(product) => product.as_css_string(settings, indent_level)?,
            MathMember::Nested(product) => {
                format!("({})", product.as_css_string(settings, indent_level)?)
            }
        })
    }
}

/// An ordered sequence of math members.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct MathProduct {
    members: Vec<MathMember>,
}

impl MathProduct {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_members(members: Vec<MathMember>) -> Self {
        Self { members }
    }

    pub fn members(&self) -> &[MathMember] {
        &self.members
    }

    pub fn add_member(&mut self, member: MathMember) -> &mut Self {
        self.members.push(member);
        self
    }
}

impl CssWriteable for MathProduct {
    fn as_css_string(&self, settings: &WriterSettings, indent_level: usize) -> Result<String> {
        let mut out = String::new();
        for member in &self.members {
            out.push_str(&member.as_css_string(settings, indent_level)?);
        }
        Ok(out)
    }
}

/// `calc(...)` and its vendor-prefixed forms.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ExpressionMath {
    function_name: String,
    members: Vec<MathMember>,
    source: SourceMeta,
}

impl ExpressionMath {
    /// A `calc()` expression. Use [`ExpressionMath::with_function_name`] for
    /// `-moz-calc` or `-webkit-calc`.
    pub fn new(members: Vec<MathMember>) -> Self {
        Self {
            function_name: "calc".to_string(),
            members,
            source: SourceMeta::default(),
        }
    }

    pub fn with_function_name(mut self, name: impl Into<String>) -> Self {
        self.function_name = name.into();
        self
    }

    pub fn function_name(&self) -> &str {
        &self.function_name
    }

    pub fn members(&self) -> &[MathMember] {
        &self.members
    }

    pub fn members_mut(&mut self) -> &mut Vec<MathMember> {
        &mut self.members
    }
}

impl CssVersionAware for ExpressionMath {
    fn min_version(&self) -> CssVersion {
        CssVersion::Css30
    }
}

impl CssWriteable for ExpressionMath {
    fn as_css_string(&self, settings: &WriterSettings, indent_level: usize) -> Result<String> {
        settings.check_version_requirements("calc()", self.min_version())?;
        let mut out = format!("{}(", self.function_name);
        for member in &self.members {
            out.push_str(&member.as_css_string(settings, indent_level)?);
        }
        out.push(')');
        Ok(out)
    }
}

impl_source_location_aware!(ExpressionMath);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_write_calc() {
        let math = ExpressionMath::new(vec![
            MathMember::Unit("100%".into()),
            MathMember::Operator(MathOperator::Minus),
            MathMember::Product(MathProduct::with_members(vec![
                MathMember::Unit("2".into()),
                MathMember::Operator(MathOperator::Multiply),
                MathMember::Nested(MathProduct::with_members(vec![
                    MathMember::Unit("1em".into()),
                    MathMember::Operator(MathOperator::Plus),
                    MathMember::Unit("2px".into()),
                ])),
            ])),
        ]);
        assert_eq!(
            math.as_css_string(&WriterSettings::default(), 0).unwrap(),
            "calc(100% - 2*(1em + 2px))"
        );
        assert!(
            math.as_css_string(&WriterSettings::new(CssVersion::Css21), 0)
                .is_err()
        );
    }
}
