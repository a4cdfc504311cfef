//! The concrete syntax tree produced by the grammar.

use crate::source_location::{SourceArea, SourceLocation};

/// The type of a [`CssNode`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NodeType {
    Root,
    Charset,
    ImportRule,
    NamespaceRule,
    NamespaceRulePrefix,
    NamespaceRuleUrl,
    StyleRule,
    Selector,
    NamespacePrefix,
    ElementName,
    Hash,
    Class,
    Pseudo,
    Nth,
    Negation,
    PseudoIs,
    PseudoWhere,
    PseudoHas,
    Host,
    HostContext,
    Slotted,
    Attrib,
    AttribOperator,
    AttribValue,
    AttribCaseFlag,
    SelectorCombinator,
    StyleDeclarationList,
    StyleDeclaration,
    Property,
    Important,
    Expr,
    ExprTerm,
    ExprOperator,
    Url,
    Function,
    Calc,
    CalcUnit,
    CalcProduct,
    CalcNested,
    CalcSumOperator,
    CalcProductOperator,
    LineNames,
    LineName,
    MediaRule,
    MediaList,
    MediaQuery,
    MediaModifier,
    Medium,
    MediaExpr,
    MediaFeature,
    PageRule,
    PageSelector,
    PageMarginBlock,
    FontFaceRule,
    KeyframesRule,
    KeyframesIdentifier,
    KeyframesBlock,
    KeyframesSelector,
    ViewportRule,
    SupportsRule,
    SupportsCondition,
    SupportsConditionOperator,
    SupportsNegation,
    LayerRule,
    LayerName,
    LayerBlock,
    UnknownRule,
    UnknownRuleParameterList,
    UnknownRuleBody,
}

/// A node of the concrete syntax tree.
///
/// Every node has a type, an optional text (the token image for leaves,
/// the rule keyword or function name for inner nodes) and ordered children.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CssNode {
    node_type: NodeType,
    text: String,
    children: Vec<CssNode>,
    first_token: Option<SourceArea>,
    last_token: Option<SourceArea>,
}

impl CssNode {
    pub fn new(node_type: NodeType) -> Self {
        Self {
            node_type,
            text: String::new(),
            children: Vec::new(),
            first_token: None,
            last_token: None,
        }
    }

    pub fn with_text(node_type: NodeType, text: impl Into<String>) -> Self {
        let mut node = Self::new(node_type);
        node.text = text.into();
        node
    }

    /// A leaf node spanning a single token.
    pub fn leaf(node_type: NodeType, text: impl Into<String>, area: SourceArea) -> Self {
        let mut node = Self::with_text(node_type, text);
        node.first_token = Some(area);
        node.last_token = Some(area);
        node
    }

    pub fn node_type(&self) -> NodeType {
        self.node_type
    }

    #[inline]
    pub fn is(&self, node_type: NodeType) -> bool {
        self.node_type == node_type
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn set_text(&mut self, text: impl Into<String>) {
        self.text = text.into();
    }

    pub fn children(&self) -> &[CssNode] {
        &self.children
    }

    pub fn child(&self, index: usize) -> Option<&CssNode> {
        self.children.get(index)
    }

    pub fn child_count(&self) -> usize {
        self.children.len()
    }

    /// The first child of the given type.
    pub fn find_child(&self, node_type: NodeType) -> Option<&CssNode> {
        self.children.iter().find(|c| c.is(node_type))
    }

    pub fn push(&mut self, child: CssNode) {
        self.children.push(child);
    }

    /// Set the areas of the first and last token of this node.
    pub fn set_span(&mut self, first: Option<SourceArea>, last: Option<SourceArea>) {
        self.first_token = first;
        self.last_token = last;
    }

    pub fn first_token_area(&self) -> Option<SourceArea> {
        self.first_token
    }

    pub fn last_token_area(&self) -> Option<SourceArea> {
        self.last_token
    }

    /// The location of this node, if any token area was recorded.
    pub fn source_location(&self) -> Option<SourceLocation> {
        SourceLocation::new(self.first_token, self.last_token)
    }

    /// Render the tree for debugging, one node per line.
    pub fn dump(&self) -> String {
        let mut out = String::new();
        self.dump_into(&mut out, 0);
        out
    }

    fn dump_into(&self, out: &mut String, depth: usize) {
        out.push_str(&"  ".repeat(depth));
        out.push_str(&format!("{:?}", self.node_type));
        if !self.text.is_empty() {
            out.push_str(&format!(" '{}'", self.text));
        }
        out.push('\n');
        for child in &self.children {
            child.dump_into(out, depth + 1);
        }
    }
}
