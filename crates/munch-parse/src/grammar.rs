use std::ops::Index;

use munch_lexer::Kind;

use crate::Rule;

/// Handle to a template registered in a [`Grammar`].
///
/// Only meaningful for the grammar that issued it; indexing another grammar
/// with it panics or yields an unrelated template.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TemplateId(u32);

/// A named node prototype with its ordered detector rules.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Template<K, N> {
    kind: N,
    detectors: Vec<Rule<K>>,
}

impl<K, N: Copy> Template<K, N> {
    pub fn kind(&self) -> N {
        self.kind
    }

    pub fn detectors(&self) -> &[Rule<K>] {
        &self.detectors
    }
}

/// The set of templates making up a grammar.
///
/// Rules refer to templates by [`TemplateId`], so productions may refer to
/// themselves directly or through cycles.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grammar<K, N> {
    templates: Vec<Template<K, N>>,
}

impl<K, N> Default for Grammar<K, N> {
    fn default() -> Self {
        Self { templates: Vec::new() }
    }
}

impl<K: Kind, N: Kind> Grammar<K, N> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a template without detectors; a node built from it is a leaf.
    pub fn template(&mut self, kind: N) -> TemplateId {
        let id = TemplateId(self.templates.len() as u32);
        self.templates.push(Template { kind, detectors: Vec::new() });
        id
    }

    /// Appends `rule` to the detectors of `template`.
    ///
    /// Detectors are tried in the order they were added and the first match wins.
    pub fn alternative(&mut self, template: TemplateId, rule: Rule<K>) -> &mut Self {
        self.templates[template.0 as usize].detectors.push(rule);
        self
    }

    pub fn kind(&self, template: TemplateId) -> N {
        self[template].kind()
    }

    pub fn detectors(&self, template: TemplateId) -> &[Rule<K>] {
        self[template].detectors()
    }
}

impl<K, N> Index<TemplateId> for Grammar<K, N> {
    type Output = Template<K, N>;

    fn index(&self, index: TemplateId) -> &Self::Output {
        &self.templates[index.0 as usize]
    }
}
