//! Declarations (`property: value !important`) and lists of them.

use super::expression::Expression;
use crate::source_location::{SourceMeta, impl_source_location_aware};
use crate::writer::{CssWriteable, WriterSettings};
use crate::{Error, Result};

/// Custom properties keep their case, everything else is lowercased.
fn unify_property(property: &str) -> String {
    if property.starts_with("--") {
        property.to_string()
    } else {
        property.to_ascii_lowercase()
    }
}

/// A single `property: expression` pair.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Declaration {
    property: String,
    expression: Expression,
    important: bool,
    source: SourceMeta,
}

impl Declaration {
    /// Create a declaration. Fails if the property name is empty.
    pub fn new(property: &str, expression: Expression, important: bool) -> Result<Self> {
        if property.trim().is_empty() {
            return Err(Error::invalid_argument("Property name may not be empty"));
        }
        Ok(Self {
            property: unify_property(property),
            expression,
            important,
            source: SourceMeta::default(),
        })
    }

    pub fn property(&self) -> &str {
        &self.property
    }

    pub fn set_property(&mut self, property: &str) -> Result<()> {
        if property.trim().is_empty() {
            return Err(Error::invalid_argument("Property name may not be empty"));
        }
        self.property = unify_property(property);
        Ok(())
    }

    /// Compare the property name the same way it is stored.
    pub fn has_property(&self, property: &str) -> bool {
        self.property == unify_property(property)
    }

    /// Returns true for custom properties (`--name`).
    pub fn is_custom_property(&self) -> bool {
        self.property.starts_with("--")
    }

    pub fn expression(&self) -> &Expression {
        &self.expression
    }

    pub fn expression_mut(&mut self) -> &mut Expression {
        &mut self.expression
    }

    pub fn set_expression(&mut self, expression: Expression) {
        self.expression = expression;
    }

    pub fn is_important(&self) -> bool {
        self.important
    }

    pub fn set_important(&mut self, important: bool) {
        self.important = important;
    }
}

impl CssWriteable for Declaration {
    fn as_css_string(&self, settings: &WriterSettings, indent_level: usize) -> Result<String> {
        let mut out = format!(
            "{}:{}",
            self.property,
            self.expression.as_css_string(settings, indent_level)?
        );
        if self.important {
            out.push_str(" !important");
        }
        Ok(out)
    }
}

/// Render a `;`-separated list of items.
///
/// One item is written without indentation, and the `;` is dropped in
/// optimized mode. Several items are written one per line, indented one
/// level deeper than `indent_level`, and only the last `;` is dropped in
/// optimized mode.
pub(crate) fn write_definition_list<T: CssWriteable>(
    items: &[T],
    settings: &WriterSettings,
    indent_level: usize,
) -> Result<String> {
    let optimized = settings.is_optimized_output();
    let mut out = String::new();
    match items {
        [] => {}
        [single] => {
            out.push_str(&single.as_css_string(settings, indent_level)?);
            if !optimized {
                out.push(';');
            }
        }
        _ => {
            let last = items.len() - 1;
            for (i, item) in items.iter().enumerate() {
                if !optimized {
                    out.push_str(&settings.indent(indent_level + 1));
                }
                out.push_str(&item.as_css_string(settings, indent_level + 1)?);
                if !optimized || i < last {
                    out.push(';');
                }
                if !optimized {
                    out.push_str(settings.new_line());
                }
            }
        }
    }
    Ok(out)
}

/// Render a definition list wrapped in braces, as used by rule bodies.
pub(crate) fn write_definition_block<T: CssWriteable>(
    items: &[T],
    settings: &WriterSettings,
    indent_level: usize,
) -> Result<String> {
    let optimized = settings.is_optimized_output();
    let body = write_definition_list(items, settings, indent_level)?;
    Ok(match items.len() {
        0 if optimized => "{}".to_string(),
        0 => " {}".to_string(),
        1 if optimized => format!("{{{body}}}"),
        1 => format!(" {{ {body} }}"),
        _ if optimized => format!("{{{body}}}"),
        _ => format!(
            " {{{}{}{}}}",
            settings.new_line(),
            body,
            settings.indent(indent_level)
        ),
    })
}

/// Shared access to the declarations of a rule.
pub trait HasDeclarations {
    fn declarations(&self) -> &[Declaration];

    fn declarations_mut(&mut self) -> &mut Vec<Declaration>;

    fn add_declaration(&mut self, declaration: Declaration) {
        self.declarations_mut().push(declaration);
    }

    /// Insert a declaration before `index`.
    fn insert_declaration(&mut self, index: usize, declaration: Declaration) -> Result<()> {
        let declarations = self.declarations_mut();
        if index > declarations.len() {
            return Err(Error::invalid_argument(format!(
                "Index {index} is out of bounds for {} declarations",
                declarations.len()
            )));
        }
        declarations.insert(index, declaration);
        Ok(())
    }

    fn remove_declaration(&mut self, index: usize) -> Option<Declaration> {
        let declarations = self.declarations_mut();
        (index < declarations.len()).then(|| declarations.remove(index))
    }

    fn remove_all_declarations(&mut self) {
        self.declarations_mut().clear();
    }

    fn declaration_count(&self) -> usize {
        self.declarations().len()
    }

    fn has_declarations(&self) -> bool {
        !self.declarations().is_empty()
    }

    /// The first declaration of the given property.
    fn declaration_of_property(&self, property: &str) -> Option<&Declaration> {
        self.declarations().iter().find(|d| d.has_property(property))
    }

    /// All declarations of the given property, in order.
    fn declarations_of_property<'a>(&'a self, property: &str) -> Vec<&'a Declaration> {
        self.declarations()
            .iter()
            .filter(|d| d.has_property(property))
            .collect()
    }
}

/// A free-standing list of declarations, as found in a `style` attribute.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct DeclarationList {
    declarations: Vec<Declaration>,
    source: SourceMeta,
}

impl DeclarationList {
    pub fn new() -> Self {
        Self::default()
    }
}

impl HasDeclarations for DeclarationList {
    fn declarations(&self) -> &[Declaration] {
        &self.declarations
    }

    fn declarations_mut(&mut self) -> &mut Vec<Declaration> {
        &mut self.declarations
    }
}

impl CssWriteable for DeclarationList {
    fn as_css_string(&self, settings: &WriterSettings, indent_level: usize) -> Result<String> {
        write_definition_list(&self.declarations, settings, indent_level)
    }
}

impl_source_location_aware!(Declaration, DeclarationList);
