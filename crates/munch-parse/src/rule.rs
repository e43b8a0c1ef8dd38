use crate::TemplateId;

/// One element of a [`Rule::Sequence`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Item<K> {
    /// A token of this kind, consumed without producing a child.
    Token(K),
    /// A match of one of the template's detectors, kept as a child.
    Node(TemplateId),
}

pub fn token<K>(kind: K) -> Item<K> {
    Item::Token(kind)
}

pub fn node<K>(template: TemplateId) -> Item<K> {
    Item::Node(template)
}

/// A detector: matches a prefix of a token range and builds one node.
///
/// `Sequence` and `BinaryOperator` build their children right away. The other
/// rules build a pending node whose children are found later by running its
/// template's detectors over the node's range. A sequence of literal tokens
/// only is pending too when its template has detectors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Rule<K> {
    /// `open ... close` with nesting; the node covers the tokens in between.
    Bracket { open: K, inner: TemplateId, close: K },
    /// Literal tokens and sub-templates in order.
    Sequence { template: TemplateId, items: Vec<Item<K>> },
    /// `left op right` over the whole range, split at the rightmost `op` that works.
    BinaryOperator { template: TemplateId, left: TemplateId, op: K, right: TemplateId },
    /// Exactly these kinds, and nothing else, in the range.
    Terminal { template: TemplateId, kinds: Vec<K> },
    /// Everything up to a required `delimiter`, which is consumed.
    Until { template: TemplateId, delimiter: K },
    /// Like `Until`, but the last piece may run to the end of the range.
    Slice { template: TemplateId, delimiter: K },
}

impl<K> Rule<K> {
    pub fn bracket(open: K, inner: TemplateId, close: K) -> Self {
        Self::Bracket { open, inner, close }
    }

    pub fn sequence(template: TemplateId, items: impl IntoIterator<Item = Item<K>>) -> Self {
        Self::Sequence { template, items: items.into_iter().collect() }
    }

    pub fn binary_operator(
        template: TemplateId,
        left: TemplateId,
        op: K,
        right: TemplateId,
    ) -> Self {
        Self::BinaryOperator { template, left, op, right }
    }

    pub fn terminal(template: TemplateId, kinds: impl IntoIterator<Item = K>) -> Self {
        Self::Terminal { template, kinds: kinds.into_iter().collect() }
    }

    pub fn until(template: TemplateId, delimiter: K) -> Self {
        Self::Until { template, delimiter }
    }

    pub fn slice(template: TemplateId, delimiter: K) -> Self {
        Self::Slice { template, delimiter }
    }

    /// The template of the node this rule builds.
    pub fn template(&self) -> TemplateId {
        match *self {
            Self::Bracket { inner, .. } => inner,
            Self::Sequence { template, .. }
            | Self::BinaryOperator { template, .. }
            | Self::Terminal { template, .. }
            | Self::Until { template, .. }
            | Self::Slice { template, .. } => template,
        }
    }
}
