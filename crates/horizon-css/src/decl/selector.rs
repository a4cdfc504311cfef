//! Selectors and their members.

use std::fmt;

use super::expression::Expression;
use crate::source_location::{SourceMeta, impl_source_location_aware};
use crate::version::CssVersion;
use crate::writer::{CssVersionAware, CssWriteable, WriterSettings};
use crate::{Error, Result};

/// A combinator between two compound selectors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SelectorCombinator {
    /// `+`
    Plus,
    /// `>`
    Greater,
    /// `~`
    Tilde,
    /// Descendant, written as a single space.
    Blank,
}

impl SelectorCombinator {
    pub const fn name(&self) -> &'static str {
        match self {
            SelectorCombinator::Plus => "+",
            SelectorCombinator::Greater => ">",
            SelectorCombinator::Tilde => "~",
            SelectorCombinator::Blank => " ",
        }
    }

    pub fn from_name(name: &str) -> Option<SelectorCombinator> {
        match name {
            "+" => Some(SelectorCombinator::Plus),
            ">" => Some(SelectorCombinator::Greater),
            "~" => Some(SelectorCombinator::Tilde),
            " " => Some(SelectorCombinator::Blank),
            _ => None,
        }
    }
}

/// The comparison of an attribute selector.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AttributeOperator {
    /// `=`
    Equals,
    /// `~=`
    Includes,
    /// `|=`
    DashMatch,
    /// `^=`
    BeginMatch,
    /// `$=`
    EndMatch,
    /// `*=`
    ContainsMatch,
}

impl AttributeOperator {
    pub const fn name(&self) -> &'static str {
        match self {
            AttributeOperator::Equals => "=",
            AttributeOperator::Includes => "~=",
            AttributeOperator::DashMatch => "|=",
            AttributeOperator::BeginMatch => "^=",
            AttributeOperator::EndMatch => "$=",
            AttributeOperator::ContainsMatch => "*=",
        }
    }

    pub fn from_name(name: &str) -> Option<AttributeOperator> {
        match name {
            "=" => Some(AttributeOperator::Equals),
            "~=" => Some(AttributeOperator::Includes),
            "|=" => Some(AttributeOperator::DashMatch),
            "^=" => Some(AttributeOperator::BeginMatch),
            "$=" => Some(AttributeOperator::EndMatch),
            "*=" => Some(AttributeOperator::ContainsMatch),
            _ => None,
        }
    }
}

/// The case flag of an attribute selector (`[a=b i]`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AttributeCase {
    Sensitive,
    Insensitive,
}

impl AttributeCase {
    pub const fn name(&self) -> &'static str {
        match self {
            AttributeCase::Sensitive => "s",
            AttributeCase::Insensitive => "i",
        }
    }

    /// Case-insensitive lookup.
    pub fn from_name(name: &str) -> Option<AttributeCase> {
        if name.eq_ignore_ascii_case("s") {
            Some(AttributeCase::Sensitive)
        } else if name.eq_ignore_ascii_case("i") {
            Some(AttributeCase::Insensitive)
        } else {
            None
        }
    }
}

/// An attribute selector such as `[lang|=en]` or `[svg|href]`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct SelectorAttribute {
    namespace_prefix: Option<String>,
    name: String,
    matcher: Option<(AttributeOperator, String)>,
    case_flag: Option<AttributeCase>,
    source: SourceMeta,
}

impl SelectorAttribute {
    fn check_prefix(prefix: Option<&str>) -> Result<()> {
        match prefix {
            Some(p) if !p.is_empty() && !p.ends_with('|') => Err(Error::invalid_argument(
                format!("Namespace prefix '{p}' must end with '|'"),
            )),
            _ => Ok(()),
        }
    }

    /// `[name]` or `[prefix|name]`, checking for presence only.
    pub fn new(namespace_prefix: Option<&str>, name: impl Into<String>) -> Result<Self> {
        Self::check_prefix(namespace_prefix)?;
        Ok(Self {
            namespace_prefix: namespace_prefix.filter(|p| !p.is_empty()).map(str::to_string),
            name: name.into(),
            matcher: None,
            case_flag: None,
            source: SourceMeta::default(),
        })
    }

    /// `[name op value]`, optionally with a case flag.
    pub fn with_value(
        namespace_prefix: Option<&str>,
        name: impl Into<String>,
        operator: AttributeOperator,
        value: impl Into<String>,
        case_flag: Option<AttributeCase>,
    ) -> Result<Self> {
        let mut attribute = Self::new(namespace_prefix, name)?;
        attribute.matcher = Some((operator, value.into()));
        attribute.case_flag = case_flag;
        Ok(attribute)
    }

    pub fn namespace_prefix(&self) -> Option<&str> {
        self.namespace_prefix.as_deref()
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn operator(&self) -> Option<AttributeOperator> {
        self.matcher.as_ref().map(|(op, _)| *op)
    }

    /// The value as written, including quotes.
    pub fn value(&self) -> Option<&str> {
        self.matcher.as_ref().map(|(_, v)| v.as_str())
    }

    pub fn case_flag(&self) -> Option<AttributeCase> {
        self.case_flag
    }
}

impl CssVersionAware for SelectorAttribute {
    fn min_version(&self) -> CssVersion {
        CssVersion::Css21
    }
}

impl CssWriteable for SelectorAttribute {
    fn as_css_string(&self, _settings: &WriterSettings, _indent_level: usize) -> Result<String> {
        let mut out = String::from("[");
        if let Some(prefix) = &self.namespace_prefix {
            out.push_str(prefix);
        }
        out.push_str(&self.name);
        if let Some((op, value)) = &self.matcher {
            out.push_str(op.name());
            out.push_str(value);
            if let Some(flag) = self.case_flag {
                out.push(' ');
                out.push_str(flag.name());
            }
        }
        out.push(']');
        Ok(out)
    }
}

/// A member of a [`Selector`].
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum SelectorMember {
    /// Element name, `*`, `ns|`, `#id`, `.class`, `:pseudo` or `::pseudo`,
    /// stored as written.
    Simple(String),
    Attribute(SelectorAttribute),
    Combinator(SelectorCombinator),
    /// A functional pseudo class such as `:nth-child(2n+1)` or `:lang(de)`.
    /// The name includes the leading colon(s) and the opening parenthesis.
    FunctionLike { name: String, argument: Expression },
    /// `:not(...)`
    Not(Vec<Selector>),
    /// `:is(...)`
    Is(Vec<Selector>),
    /// `:where(...)`
    Where(Vec<Selector>),
    /// `:has(...)` with an optional leading combinator.
    Has {
        combinator: Option<SelectorCombinator>,
        selectors: Vec<Selector>,
    },
    /// `:host(...)`
    Host(Box<Selector>),
    /// `:host-context(...)`
    HostContext(Box<Selector>),
    /// `::slotted(...)`
    Slotted(Box<Selector>),
}

impl SelectorMember {
    pub fn simple(value: impl Into<String>) -> Self {
        SelectorMember::Simple(value.into())
    }

    /// The text used in version errors.
    fn construct_name(&self) -> &'static str {
        match self {
            SelectorMember::Simple(_) => "selector",
            SelectorMember::Attribute(_) => "attribute selector",
            SelectorMember::Combinator(_) => "combinator",
            SelectorMember::FunctionLike { .. } => "functional pseudo class",
            SelectorMember::Not(_) => ":not()",
            SelectorMember::Is(_) => ":is()",
            SelectorMember::Where(_) => ":where()",
            SelectorMember::Has { .. } => ":has()",
            SelectorMember::Host(_) => ":host()",
            SelectorMember::HostContext(_) => ":host-context()",
            SelectorMember::Slotted(_) => "::slotted()",
        }
    }
}

impl CssVersionAware for SelectorMember {
    fn min_version(&self) -> CssVersion {
        match self {
            SelectorMember::Simple(_)
            | SelectorMember::Combinator(_)
            | SelectorMember::FunctionLike { .. } => CssVersion::Css10,
            SelectorMember::Attribute(attribute) => attribute.min_version(),
            _ => CssVersion::Css30,
        }
    }
}

fn write_selector_list(
    prefix: &str,
    selectors: &[Selector],
    settings: &WriterSettings,
) -> Result<String> {
    let separator = if settings.is_optimized_output() { "," } else { ", " };
    let mut out = String::from(prefix);
    for (i, selector) in selectors.iter().enumerate() {
        if i > 0 {
            out.push_str(separator);
        }
        out.push_str(&selector.as_css_string(settings, 0)?);
    }
    out.push(')');
    Ok(out)
}

impl CssWriteable for SelectorMember {
    fn as_css_string(&self, settings: &WriterSettings, indent_level: usize) -> Result<String> {
        settings.check_version_requirements(self.construct_name(), self.min_version())?;
        match self {
            SelectorMember::Simple(value) => Ok(value.clone()),
            SelectorMember::Attribute(attribute) => attribute.as_css_string(settings, indent_level),
            SelectorMember::Combinator(combinator) => Ok(combinator.name().to_string()),
            SelectorMember::FunctionLike { name, argument } => Ok(format!(
                "{}{})",
                name,
                argument.as_css_string(settings, indent_level)?
            )),
            SelectorMember::Not(selectors) => write_selector_list(":not(", selectors, settings),
            SelectorMember::Is(selectors) => write_selector_list(":is(", selectors, settings),
            SelectorMember::Where(selectors) => write_selector_list(":where(", selectors, settings),
            SelectorMember::Has {
                combinator,
                selectors,
            } => {
                let prefix = match combinator {
                    Some(c) => format!(":has({}", c.name()),
                    None => ":has(".to_string(),
                };
                write_selector_list(&prefix, selectors, settings)
            }
            SelectorMember::Host(selector) => {
                Ok(format!(":host({})", selector.as_css_string(settings, 0)?))
            }
            SelectorMember::HostContext(selector) => Ok(format!(
                ":host-context({})",
                selector.as_css_string(settings, 0)?
            )),
            SelectorMember::Slotted(selector) => {
                Ok(format!("::slotted({})", selector.as_css_string(settings, 0)?))
            }
        }
    }
}

impl From<SelectorAttribute> for SelectorMember {
    fn from(attribute: SelectorAttribute) -> Self {
        SelectorMember::Attribute(attribute)
    }
}

impl From<SelectorCombinator> for SelectorMember {
    fn from(combinator: SelectorCombinator) -> Self {
        SelectorMember::Combinator(combinator)
    }
}

/// A complex selector: an ordered list of members written back to back.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct Selector {
    members: Vec<SelectorMember>,
    source: SourceMeta,
}

impl Selector {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_members(members: Vec<SelectorMember>) -> Self {
        Self {
            members,
            source: SourceMeta::default(),
        }
    }

    pub fn add_member(&mut self, member: impl Into<SelectorMember>) -> &mut Self {
        self.members.push(member.into());
        self
    }

    pub fn insert_member(&mut self, index: usize, member: impl Into<SelectorMember>) -> Result<()> {
        if index > self.members.len() {
            return Err(Error::invalid_argument(format!(
                "Index {index} is out of bounds for {} selector members",
                self.members.len()
            )));
        }
        self.members.insert(index, member.into());
        Ok(())
    }

    pub fn remove_member(&mut self, index: usize) -> Option<SelectorMember> {
        (index < self.members.len()).then(|| self.members.remove(index))
    }

    pub fn members(&self) -> &[SelectorMember] {
        &self.members
    }

    pub fn members_mut(&mut self) -> &mut Vec<SelectorMember> {
        &mut self.members
    }

    pub fn member_count(&self) -> usize {
        self.members.len()
    }

    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }
}

impl CssWriteable for Selector {
    fn as_css_string(&self, settings: &WriterSettings, indent_level: usize) -> Result<String> {
        let mut out = String::new();
        for member in &self.members {
            out.push_str(&member.as_css_string(settings, indent_level)?);
        }
        Ok(out)
    }
}

impl fmt::Display for Selector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let css = self
            .as_css_string(&WriterSettings::default(), 0)
            .map_err(|_| fmt::Error)?;
        f.write_str(&css)
    }
}

impl From<SelectorMember> for Selector {
    fn from(member: SelectorMember) -> Self {
        Self::with_members(vec![member])
    }
}

impl_source_location_aware!(SelectorAttribute, Selector);

#[cfg(test)]
mod tests {
    use super::*;

    fn simple(values: &[&str]) -> Selector {
        Selector::with_members(values.iter().map(|v| SelectorMember::simple(*v)).collect())
    }

    #[test]
    fn test_write_selector() {
        let mut selector = simple(&["div", ".a"]);
        selector
            .add_member(SelectorCombinator::Greater)
            .add_member(SelectorMember::simple("p"))
            .add_member(SelectorCombinator::Blank)
            .add_member(SelectorMember::simple("a"));
        assert_eq!(selector.to_string(), "div.a>p a");
    }

    #[test]
    fn test_attribute_prefix_check() {
        assert!(SelectorAttribute::new(Some("svg|"), "href").is_ok());
        assert!(SelectorAttribute::new(Some(""), "href").is_ok());
        assert!(SelectorAttribute::new(Some("svg"), "href").is_err());

        let attribute = SelectorAttribute::with_value(
            Some("*|"),
            "lang",
            AttributeOperator::DashMatch,
            "\"en\"",
            Some(AttributeCase::Insensitive),
        )
        .unwrap();
        let selector = Selector::from(SelectorMember::from(attribute));
        assert_eq!(selector.to_string(), "[*|lang|=\"en\" i]");
    }

    #[test]
    fn test_nested_selectors() {
        let not = SelectorMember::Not(vec![simple(&[".a"]), simple(&["#b"])]);
        let normal = WriterSettings::default();
        let optimized = WriterSettings::default().with_optimized_output(true);
        assert_eq!(not.as_css_string(&normal, 0).unwrap(), ":not(.a, #b)");
        assert_eq!(not.as_css_string(&optimized, 0).unwrap(), ":not(.a,#b)");

        let has = SelectorMember::Has {
            combinator: Some(SelectorCombinator::Greater),
            selectors: vec![simple(&["img"])],
        };
        assert_eq!(has.as_css_string(&normal, 0).unwrap(), ":has(>img)");

        let slotted = SelectorMember::Slotted(Box::new(simple(&["span"])));
        assert_eq!(slotted.as_css_string(&normal, 0).unwrap(), "::slotted(span)");
    }

    #[test]
    fn test_version_gating() {
        let css21 = WriterSettings::new(CssVersion::Css21);
        let not = SelectorMember::Not(vec![simple(&[".a"])]);
        assert!(matches!(
            not.as_css_string(&css21, 0),
            Err(Error::VersionRequirement { .. })
        ));
        let attribute = SelectorMember::from(SelectorAttribute::new(None, "href").unwrap());
        assert!(attribute.as_css_string(&css21, 0).is_ok());
        assert!(
            attribute
                .as_css_string(&WriterSettings::new(CssVersion::Css10), 0)
                .is_err()
        );
    }

    #[test]
    fn test_function_like() {
        let member = SelectorMember::FunctionLike {
            name: ":nth-child(".into(),
            argument: Expression::simple("2n+1"),
        };
        assert_eq!(
            member.as_css_string(&WriterSettings::default(), 0).unwrap(),
            ":nth-child(2n+1)"
        );
    }
}
