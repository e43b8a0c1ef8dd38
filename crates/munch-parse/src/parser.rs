use std::fmt::Debug;

use munch_errors::{Diagnostic, TextRange, TextSize};
use munch_lexer::{Kind, Token};

use crate::{Grammar, Item, Node, Rule, TemplateId, TokenRange};

/// How many pending nodes may enclose each other, which is how deeply the
/// input itself nests (brackets, delimited pieces).
pub const DEFAULT_DEPTH_LIMIT: usize = 100;

/// How many detector and completion calls may be active at once.
///
/// Flat operator chains recurse once per operand, so this is much larger
/// than [`DEFAULT_DEPTH_LIMIT`].
pub const DEFAULT_RECURSION_LIMIT: usize = 512;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ParseError<N: Debug> {
    #[error("nesting exceeded {limit} levels while matching `{kind:?}`")]
    DepthLimit { limit: usize, kind: N },
    #[error("rule recursion exceeded {limit} levels while matching `{kind:?}`")]
    RecursionLimit { limit: usize, kind: N },
    #[error("{} token range(s) matched no rule", .0.len())]
    Unmatched(Vec<Unmatched<N>>),
}

/// A range no detector of the enclosing node could match.
///
/// The node keeps the children found before this range and nothing after it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Unmatched<N> {
    pub kind: N,
    pub template: TemplateId,
    pub range: TokenRange,
}

impl<N: Debug> Unmatched<N> {
    pub fn to_diagnostic<K>(&self, tokens: &[Token<'_, K>]) -> Diagnostic {
        let unmatched = &tokens[self.range.as_range()];
        let text = unmatched.iter().map(|token| token.text).collect::<Vec<_>>().join(" ");
        let range = match (unmatched.first(), unmatched.last()) {
            (Some(first), Some(last)) => first.range.cover(last.range),
            _ => TextRange::empty(TextSize::new(0)),
        };

        Diagnostic::error(format!("no rule of `{:?}` matches `{text}`", self.kind), range)
    }
}

/// A finished tree together with the ranges that could not be matched.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Parse<N> {
    tree: Node<N>,
    errors: Vec<Unmatched<N>>,
}

impl<N: Debug> Parse<N> {
    pub fn tree(&self) -> &Node<N> {
        &self.tree
    }

    pub fn errors(&self) -> &[Unmatched<N>] {
        &self.errors
    }

    pub fn is_ok(&self) -> bool {
        self.errors.is_empty()
    }

    /// The tree, or every unmatched range if there was any.
    pub fn into_result(self) -> Result<Node<N>, ParseError<N>> {
        if self.errors.is_empty() { Ok(self.tree) } else { Err(ParseError::Unmatched(self.errors)) }
    }
}

/// Runs a [`Grammar`] over a token sequence.
#[derive(Debug)]
pub struct Parser<'g, K, N> {
    grammar: &'g Grammar<K, N>,
    depth_limit: usize,
    recursion_limit: usize,
}

impl<'g, K: Kind, N: Kind> Parser<'g, K, N> {
    pub fn new(grammar: &'g Grammar<K, N>) -> Self {
        Self {
            grammar,
            depth_limit: DEFAULT_DEPTH_LIMIT,
            recursion_limit: DEFAULT_RECURSION_LIMIT,
        }
    }

    pub fn with_depth_limit(mut self, depth_limit: usize) -> Self {
        self.depth_limit = depth_limit;
        self
    }

    pub fn with_recursion_limit(mut self, recursion_limit: usize) -> Self {
        self.recursion_limit = recursion_limit;
        self
    }

    /// Binds `root` to the whole token sequence and completes the tree below it.
    pub fn parse(
        &self,
        root: TemplateId,
        tokens: &[Token<'_, K>],
    ) -> Result<Parse<N>, ParseError<N>> {
        let mut tree =
            Node::pending(self.grammar.kind(root), root, TokenRange::new(0, tokens.len()));
        let errors = self.complete(&mut tree, tokens)?;
        Ok(Parse { tree, errors })
    }

    /// Runs a single rule against `range`.
    ///
    /// On a match `range.begin` moves past the consumed tokens; otherwise
    /// `range` is left as it was. Pending nodes are returned uncompleted.
    pub fn apply(
        &self,
        rule: &Rule<K>,
        tokens: &[Token<'_, K>],
        range: &mut TokenRange,
    ) -> Result<Option<Node<N>>, ParseError<N>> {
        self.engine(tokens).apply(rule, range)
    }

    /// Tries the detectors of `template` in order and returns the first match.
    pub fn detect(
        &self,
        template: TemplateId,
        tokens: &[Token<'_, K>],
        range: &mut TokenRange,
    ) -> Result<Option<Node<N>>, ParseError<N>> {
        self.engine(tokens).detect(template, range)
    }

    /// Fills in the children of `node` and of every pending node below it.
    pub fn complete(
        &self,
        node: &mut Node<N>,
        tokens: &[Token<'_, K>],
    ) -> Result<Vec<Unmatched<N>>, ParseError<N>> {
        let mut engine = self.engine(tokens);
        engine.complete(node)?;
        Ok(engine.errors)
    }

    fn engine<'a, 'src>(&'a self, tokens: &'a [Token<'src, K>]) -> Engine<'a, 'src, K, N> {
        Engine {
            grammar: self.grammar,
            tokens,
            depth: 0,
            depth_limit: self.depth_limit,
            recursion: 0,
            recursion_limit: self.recursion_limit,
            errors: Vec::new(),
        }
    }
}

type Detected<N> = Result<Option<Node<N>>, ParseError<N>>;

struct Engine<'a, 'src, K, N> {
    grammar: &'a Grammar<K, N>,
    tokens: &'a [Token<'src, K>],
    depth: usize,
    depth_limit: usize,
    recursion: usize,
    recursion_limit: usize,
    errors: Vec<Unmatched<N>>,
}

impl<K: Kind, N: Kind> Engine<'_, '_, K, N> {
    fn kind_at(&self, index: usize) -> K {
        self.tokens[index].kind
    }

    fn enter(&mut self, template: TemplateId) -> Result<(), ParseError<N>> {
        self.recursion += 1;
        if self.recursion > self.recursion_limit {
            return Err(ParseError::RecursionLimit {
                limit: self.recursion_limit,
                kind: self.grammar.kind(template),
            });
        }
        Ok(())
    }

    fn leave(&mut self) {
        self.recursion -= 1;
    }

    fn detect(&mut self, template: TemplateId, range: &mut TokenRange) -> Detected<N> {
        self.enter(template)?;
        let grammar = self.grammar;

        for rule in grammar.detectors(template) {
            if let Some(node) = self.apply(rule, range)? {
                self.leave();
                return Ok(Some(node));
            }
        }

        self.leave();
        Ok(None)
    }

    /// Like `detect`, but only accepts a detector that consumes all of `range`.
    fn detect_whole(&mut self, template: TemplateId, range: TokenRange) -> Detected<N> {
        self.enter(template)?;
        let grammar = self.grammar;

        for rule in grammar.detectors(template) {
            let mut rest = range;
            if let Some(node) = self.apply(rule, &mut rest)? {
                if rest.is_empty() {
                    self.leave();
                    return Ok(Some(node));
                }
            }
        }

        self.leave();
        Ok(None)
    }

    fn apply(&mut self, rule: &Rule<K>, range: &mut TokenRange) -> Detected<N> {
        if range.is_empty() {
            return Ok(None);
        }

        tracing::trace!(
            template = ?self.grammar.kind(rule.template()),
            begin = range.begin,
            end = range.end,
            "trying rule"
        );

        match *rule {
            Rule::Bracket { open, inner, close } => Ok(self.bracket(open, inner, close, range)),
            Rule::Sequence { template, ref items } => self.sequence(template, items, range),
            Rule::BinaryOperator { template, left, op, right } => {
                self.binary_operator(template, left, op, right, range)
            }
            Rule::Terminal { template, ref kinds } => Ok(self.terminal(template, kinds, range)),
            Rule::Until { template, delimiter } => {
                Ok(self.until(template, delimiter, range, false))
            }
            Rule::Slice { template, delimiter } => Ok(self.until(template, delimiter, range, true)),
        }
    }

    fn bracket(
        &self,
        open: K,
        inner: TemplateId,
        close: K,
        range: &mut TokenRange,
    ) -> Option<Node<N>> {
        if self.kind_at(range.begin) != open {
            return None;
        }

        // Checking `close` first lets a delimiter that opens and closes
        // (`|a|`) close at its next occurrence.
        let mut depth = 1usize;
        for index in range.begin + 1..range.end {
            let kind = self.kind_at(index);
            if kind == close {
                depth -= 1;
                if depth == 0 {
                    let node = Node::pending(
                        self.grammar.kind(inner),
                        inner,
                        TokenRange::new(range.begin + 1, index),
                    );
                    range.begin = index + 1;
                    return Some(node);
                }
            } else if kind == open {
                depth += 1;
            }
        }

        None
    }

    fn sequence(
        &mut self,
        template: TemplateId,
        items: &[Item<K>],
        range: &mut TokenRange,
    ) -> Detected<N> {
        if items.is_empty() || range.len() < items.len() {
            return Ok(None);
        }

        let mut rest = *range;
        let mut children = Vec::new();

        for (index, item) in items.iter().enumerate() {
            // Every later item needs at least one token of its own.
            let reserved = items.len() - index - 1;
            if rest.len() <= reserved {
                return Ok(None);
            }

            match *item {
                Item::Token(kind) => {
                    if self.kind_at(rest.begin) != kind {
                        return Ok(None);
                    }
                    rest.begin += 1;
                }
                Item::Node(sub) => {
                    let mut bounded = TokenRange::new(rest.begin, rest.end - reserved);
                    let Some(child) = self.detect(sub, &mut bounded)? else {
                        return Ok(None);
                    };
                    rest.begin = bounded.begin;
                    children.push(child);
                }
            }
        }

        let kind = self.grammar.kind(template);
        let matched = TokenRange::new(range.begin, rest.begin);
        // Only literal tokens matched: the template's own detectors fill it in later.
        let node = if children.is_empty() && !self.grammar.detectors(template).is_empty() {
            Node::pending(kind, template, matched)
        } else {
            Node::with_children(kind, template, matched, children)
        };
        range.begin = rest.begin;
        Ok(Some(node))
    }

    fn binary_operator(
        &mut self,
        template: TemplateId,
        left: TemplateId,
        op: K,
        right: TemplateId,
        range: &mut TokenRange,
    ) -> Detected<N> {
        if range.len() < 3 {
            return Ok(None);
        }

        for split in (range.begin + 1..range.end).rev() {
            if self.kind_at(split) != op {
                continue;
            }

            let Some(lhs) = self.detect_whole(left, TokenRange::new(range.begin, split))? else {
                continue;
            };
            let Some(rhs) = self.detect_whole(right, TokenRange::new(split + 1, range.end))? else {
                continue;
            };

            let node = Node::with_children(
                self.grammar.kind(template),
                template,
                *range,
                vec![lhs, rhs],
            );
            range.begin = range.end;
            return Ok(Some(node));
        }

        Ok(None)
    }

    fn terminal(&self, template: TemplateId, kinds: &[K], range: &mut TokenRange) -> Option<Node<N>> {
        let matches = range.len() == kinds.len()
            && self.tokens[range.as_range()].iter().zip(kinds).all(|(token, &kind)| token.kind == kind);
        if !matches {
            return None;
        }

        let node = Node::pending(self.grammar.kind(template), template, *range);
        range.begin = range.end;
        Some(node)
    }

    fn until(
        &self,
        template: TemplateId,
        delimiter: K,
        range: &mut TokenRange,
        optional: bool,
    ) -> Option<Node<N>> {
        let found = (range.begin..range.end).find(|&index| self.kind_at(index) == delimiter);
        let (end, next) = match found {
            Some(index) => (index, index + 1),
            None if optional => (range.end, range.end),
            None => return None,
        };

        let node = Node::pending(self.grammar.kind(template), template, TokenRange::new(range.begin, end));
        range.begin = next;
        Some(node)
    }

    fn complete(&mut self, node: &mut Node<N>) -> Result<(), ParseError<N>> {
        self.enter(node.template())?;

        let pending = node.is_pending();
        if pending {
            self.depth += 1;
            if self.depth > self.depth_limit {
                return Err(ParseError::DepthLimit { limit: self.depth_limit, kind: node.kind() });
            }

            let grammar = self.grammar;
            let detectors = grammar.detectors(node.template());
            let mut rest = node.range();

            'scan: while !detectors.is_empty() && !rest.is_empty() {
                for rule in detectors {
                    if let Some(child) = self.apply(rule, &mut rest)? {
                        node.children_mut().push(child);
                        continue 'scan;
                    }
                }

                tracing::debug!(
                    kind = ?node.kind(),
                    begin = rest.begin,
                    end = rest.end,
                    "no rule matches"
                );
                self.errors.push(Unmatched { kind: node.kind(), template: node.template(), range: rest });
                break;
            }

            node.settle();
        }

        for child in node.children_mut() {
            self.complete(child)?;
        }

        if pending {
            self.depth -= 1;
        }
        self.leave();
        Ok(())
    }
}
