//! Conversion of rules.

use super::values::{location_suffix, malformed};
use crate::decl::{
    CascadingStyleSheet, CssUri, DeclarationList, FontFaceRule, HasDeclarations, ImportRule,
    KeyframesBlock, KeyframesRule, LayerRule, MediaRule, NamespaceRule, PageMarginBlock,
    PageRule, RuleContainer, StyleRule, SupportsConditionMember, SupportsOperator,
    SupportsRule, TopLevelRule, UnknownRule, ViewportRule,
};
use crate::parser::{CssNode, NodeType};
use crate::reader::InterpretErrorHandler;
use crate::source_location::SourceLocationAware;
use crate::Result;

/// Walks a syntax tree and builds the object model.
pub(crate) struct AstBuilder<'a> {
    interpret: &'a dyn InterpretErrorHandler,
    use_source_location: bool,
}

impl<'a> AstBuilder<'a> {
    pub(crate) fn new(interpret: &'a dyn InterpretErrorHandler, use_source_location: bool) -> Self {
        Self {
            interpret,
            use_source_location,
        }
    }

    pub(super) fn warn(&self, message: String) {
        self.interpret.on_warning(&message);
    }

    pub(super) fn locate<T: SourceLocationAware>(&self, target: &mut T, node: &CssNode) {
        if self.use_source_location {
            target.set_source_location(node.source_location());
        }
    }

    pub(crate) fn stylesheet(&self, root: &CssNode) -> Result<CascadingStyleSheet> {
        if !root.is(NodeType::Root) {
            return Err(malformed(root, "stylesheet"));
        }
        let mut sheet = CascadingStyleSheet::new();
        for child in root.children() {
            match child.node_type() {
                // The reader evaluates the charset before parsing.
                NodeType::Charset => {}
                NodeType::ImportRule => {
                    sheet.add_import_rule(self.import_rule(child)?);
                }
                NodeType::NamespaceRule => {
                    sheet.add_namespace_rule(self.namespace_rule(child)?);
                }
                _ => {
                    if let Some(rule) = self.rule(child)? {
                        sheet.add_rule(rule);
                    }
                }
            }
        }
        self.locate(&mut sheet, root);
        tracing::trace!(
            imports = sheet.import_rules().len(),
            rules = sheet.rule_count(),
            "built stylesheet"
        );
        Ok(sheet)
    }

    pub(crate) fn declaration_list(&self, node: &CssNode) -> Result<DeclarationList> {
        if !node.is(NodeType::StyleDeclarationList) {
            return Err(malformed(node, "declaration list"));
        }
        let mut list = DeclarationList::new();
        for declaration in self.declarations(node)? {
            list.add_declaration(declaration);
        }
        self.locate(&mut list, node);
        Ok(list)
    }

    /// A rule that may appear at the top level or inside a grouping rule.
    fn rule(&self, node: &CssNode) -> Result<Option<TopLevelRule>> {
        let mut rule: TopLevelRule = match node.node_type() {
            NodeType::StyleRule => match self.style_rule(node)? {
                Some(rule) => rule.into(),
                None => return Ok(None),
            },
            NodeType::MediaRule => self.media_rule(node)?.into(),
            NodeType::PageRule => self.page_rule(node)?.into(),
            NodeType::FontFaceRule => {
                let mut rule = FontFaceRule::new(node.text());
                self.fill_declarations(&mut rule, node)?;
                rule.into()
            }
            NodeType::ViewportRule => {
                let mut rule = ViewportRule::new(node.text());
                self.fill_declarations(&mut rule, node)?;
                rule.into()
            }
            NodeType::KeyframesRule => self.keyframes_rule(node)?.into(),
            NodeType::SupportsRule => self.supports_rule(node)?.into(),
            NodeType::LayerRule => self.layer_rule(node)?.into(),
            NodeType::UnknownRule => self.unknown_rule(node).into(),
            _ => {
                self.interpret.on_error(&format!(
                    "Ignoring unsupported {:?} node{}",
                    node.node_type(),
                    location_suffix(node)
                ));
                return Ok(None);
            }
        };
        self.locate(&mut rule, node);
        Ok(Some(rule))
    }

    fn nested_rules<'n>(&self, nodes: impl Iterator<Item = &'n CssNode>) -> Result<Vec<TopLevelRule>> {
        let mut rules = Vec::new();
        for node in nodes {
            if let Some(rule) = self.rule(node)? {
                rules.push(rule);
            }
        }
        Ok(rules)
    }

    /// Add the declarations of the `StyleDeclarationList` child of `node`.
    fn fill_declarations<T: HasDeclarations>(&self, target: &mut T, node: &CssNode) -> Result<()> {
        if let Some(list) = node.find_child(NodeType::StyleDeclarationList) {
            for declaration in self.declarations(list)? {
                target.add_declaration(declaration);
            }
        }
        Ok(())
    }

    fn import_rule(&self, node: &CssNode) -> Result<ImportRule> {
        let url = node
            .find_child(NodeType::Url)
            .ok_or_else(|| malformed(node, "@import rule"))?;
        let mut location = CssUri::new(url.text());
        self.locate(&mut location, url);

        let mut rule = ImportRule::new(location);
        if let Some(media) = node.find_child(NodeType::MediaList) {
            for query in self.media_queries(media)? {
                rule.add_media_query(query);
            }
        }
        self.locate(&mut rule, node);
        Ok(rule)
    }

    fn namespace_rule(&self, node: &CssNode) -> Result<NamespaceRule> {
        let prefix = node.find_child(NodeType::NamespaceRulePrefix).map(CssNode::text);
        let url = node
            .find_child(NodeType::NamespaceRuleUrl)
            .ok_or_else(|| malformed(node, "@namespace rule"))?;
        let mut rule = NamespaceRule::new(prefix, url.text());
        self.locate(&mut rule, node);
        Ok(rule)
    }

    fn style_rule(&self, node: &CssNode) -> Result<Option<StyleRule>> {
        let mut rule = StyleRule::new();
        for child in node.children().iter().filter(|c| c.is(NodeType::Selector)) {
            rule.add_selector(self.selector(child)?);
        }
        if !rule.has_selectors() {
            self.warn(format!(
                "Skipping style rule without selectors{}",
                location_suffix(node)
            ));
            return Ok(None);
        }
        self.fill_declarations(&mut rule, node)?;
        self.locate(&mut rule, node);
        Ok(Some(rule))
    }

    fn media_rule(&self, node: &CssNode) -> Result<MediaRule> {
        let mut rule = MediaRule::new();
        if let Some(media) = node.find_child(NodeType::MediaList) {
            for query in self.media_queries(media)? {
                rule.add_media_query(query);
            }
        }
        let nested = node.children().iter().filter(|c| !c.is(NodeType::MediaList));
        *rule.rules_mut() = self.nested_rules(nested)?;
        Ok(rule)
    }

    fn page_rule(&self, node: &CssNode) -> Result<PageRule> {
        let mut rule = PageRule::new();
        for selector in node.children().iter().filter(|c| c.is(NodeType::PageSelector)) {
            rule.selectors_mut().push(selector.text().to_string());
        }
        let Some(body) = node.find_child(NodeType::StyleDeclarationList) else {
            return Ok(rule);
        };
        for child in body.children() {
            match child.node_type() {
                NodeType::StyleDeclaration => {
                    if let Some(declaration) = self.declaration(child)? {
                        rule.add_member(declaration);
                    }
                }
                NodeType::PageMarginBlock => {
                    let mut block = PageMarginBlock::new(child.text());
                    self.fill_declarations(&mut block, child)?;
                    self.locate(&mut block, child);
                    rule.add_member(block);
                }
                _ => return Err(malformed(child, "@page member")),
            }
        }
        Ok(rule)
    }

    fn keyframes_rule(&self, node: &CssNode) -> Result<KeyframesRule> {
        let name = node
            .find_child(NodeType::KeyframesIdentifier)
            .ok_or_else(|| malformed(node, "@keyframes rule"))?;
        let mut rule = KeyframesRule::new(node.text(), name.text());
        for child in node.children().iter().filter(|c| c.is(NodeType::KeyframesBlock)) {
            let selectors = child
                .children()
                .iter()
                .filter(|c| c.is(NodeType::KeyframesSelector))
                .map(|c| c.text().to_string());
            let mut block = KeyframesBlock::new(selectors);
            self.fill_declarations(&mut block, child)?;
            self.locate(&mut block, child);
            rule.add_block(block);
        }
        Ok(rule)
    }

    fn supports_rule(&self, node: &CssNode) -> Result<SupportsRule> {
        let mut rule = SupportsRule::new();
        if let Some(condition) = node.find_child(NodeType::SupportsCondition) {
            for member in self.supports_members(condition)? {
                rule.add_condition_member(member);
            }
        }
        let nested = node.children().iter().filter(|c| !c.is(NodeType::SupportsCondition));
        *rule.rules_mut() = self.nested_rules(nested)?;
        Ok(rule)
    }

    fn supports_members(&self, node: &CssNode) -> Result<Vec<SupportsConditionMember>> {
        let mut members = Vec::with_capacity(node.child_count());
        for child in node.children() {
            match child.node_type() {
                NodeType::StyleDeclaration => {
                    if let Some(declaration) = self.declaration(child)? {
                        members.push(declaration.into());
                    }
                }
                NodeType::SupportsNegation => {
                    if let Some(inner) = self.supports_negated(child)? {
                        members.push(SupportsConditionMember::negation(inner));
                    }
                }
                NodeType::SupportsCondition => {
                    members.push(SupportsConditionMember::Nested(self.supports_members(child)?));
                }
                NodeType::SupportsConditionOperator => {
                    match SupportsOperator::from_name(child.text()) {
                        Some(operator) => members.push(operator.into()),
                        None => self.warn(format!(
                            "Ignoring unknown @supports operator '{}'{}",
                            child.text(),
                            location_suffix(child)
                        )),
                    }
                }
                _ => return Err(malformed(child, "@supports condition")),
            }
        }
        Ok(members)
    }

    fn supports_negated(&self, node: &CssNode) -> Result<Option<SupportsConditionMember>> {
        let inner = node
            .child(0)
            .ok_or_else(|| malformed(node, "@supports negation"))?;
        match inner.node_type() {
            NodeType::StyleDeclaration => Ok(self.declaration(inner)?.map(Into::into)),
            NodeType::SupportsCondition => Ok(Some(SupportsConditionMember::Nested(
                self.supports_members(inner)?,
            ))),
            _ => Err(malformed(inner, "@supports negation")),
        }
    }

    fn layer_rule(&self, node: &CssNode) -> Result<LayerRule> {
        let names = node
            .children()
            .iter()
            .filter(|c| c.is(NodeType::LayerName))
            .map(|c| c.text().to_string());
        let mut rule = LayerRule::new(names);
        if let Some(block) = node.find_child(NodeType::LayerBlock) {
            *rule.rules_mut() = self.nested_rules(block.children().iter())?;
        }
        Ok(rule)
    }

    fn unknown_rule(&self, node: &CssNode) -> UnknownRule {
        let mut rule = UnknownRule::new(node.text());
        if let Some(parameters) = node.find_child(NodeType::UnknownRuleParameterList) {
            rule.set_parameters(parameters.text());
        }
        rule.set_body(
            node.find_child(NodeType::UnknownRuleBody)
                .map(|b| b.text().to_string()),
        );
        rule
    }
}
