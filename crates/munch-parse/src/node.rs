use std::ops::Range;

use munch_lexer::Token;

use crate::TemplateId;

/// A `[begin, end)` range of token indices.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct TokenRange {
    pub begin: usize,
    pub end: usize,
}

impl TokenRange {
    pub fn new(begin: usize, end: usize) -> Self {
        debug_assert!(begin <= end, "inverted token range {begin}..{end}");
        Self { begin, end }
    }

    pub fn len(self) -> usize {
        self.end - self.begin
    }

    pub fn is_empty(self) -> bool {
        self.begin == self.end
    }

    pub fn as_range(self) -> Range<usize> {
        self.begin..self.end
    }
}

/// A node of the concrete syntax tree.
///
/// Children lie inside the node's range in order; tokens between them are
/// delimiters consumed by the rules that built them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Node<N> {
    kind: N,
    template: TemplateId,
    range: TokenRange,
    children: Vec<Node<N>>,
    pending: bool,
}

impl<N: Copy> Node<N> {
    pub(crate) fn pending(kind: N, template: TemplateId, range: TokenRange) -> Self {
        Self { kind, template, range, children: Vec::new(), pending: true }
    }

    pub(crate) fn with_children(
        kind: N,
        template: TemplateId,
        range: TokenRange,
        children: Vec<Self>,
    ) -> Self {
        Self { kind, template, range, children, pending: false }
    }

    pub fn kind(&self) -> N {
        self.kind
    }

    pub fn template(&self) -> TemplateId {
        self.template
    }

    pub fn range(&self) -> TokenRange {
        self.range
    }

    pub fn children(&self) -> &[Self] {
        &self.children
    }

    /// Whether the node still waits for its children to be detected.
    pub fn is_pending(&self) -> bool {
        self.pending
    }

    pub(crate) fn children_mut(&mut self) -> &mut Vec<Self> {
        &mut self.children
    }

    pub(crate) fn settle(&mut self) {
        self.pending = false;
    }

    pub fn tokens<'t, 'src, K>(&self, tokens: &'t [Token<'src, K>]) -> &'t [Token<'src, K>] {
        &tokens[self.range.as_range()]
    }

    /// The token texts of the node's range, separated by single spaces.
    pub fn text<K>(&self, tokens: &[Token<'_, K>]) -> String {
        self.tokens(tokens).iter().map(|token| token.text).collect::<Vec<_>>().join(" ")
    }

    /// The node and all of its descendants in pre-order.
    pub fn descendants(&self) -> impl Iterator<Item = &Self> {
        let mut stack = vec![self];
        std::iter::from_fn(move || {
            let node = stack.pop()?;
            stack.extend(node.children.iter().rev());
            Some(node)
        })
    }
}
