//! Plain-text dump of a tree, one node per line.
//!
//! ```text
//! -PAGE : func main ( ) { }
//! |-FUNC_IMPL : func main ( ) { }
//! ||-FUNC_ARGS :
//! ```

use std::fmt;

use munch_lexer::Token;

use crate::Node;

pub fn tree<'a, 'src, K, N>(node: &'a Node<N>, tokens: &'a [Token<'src, K>]) -> Tree<'a, 'src, K, N> {
    Tree { node, tokens }
}

pub struct Tree<'a, 'src, K, N> {
    node: &'a Node<N>,
    tokens: &'a [Token<'src, K>],
}

impl<K, N: Copy + fmt::Debug> fmt::Display for Tree<'_, '_, K, N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_node(f, self.node, self.tokens, 0)
    }
}

fn write_node<K, N: Copy + fmt::Debug>(
    f: &mut fmt::Formatter<'_>,
    node: &Node<N>,
    tokens: &[Token<'_, K>],
    depth: usize,
) -> fmt::Result {
    write!(f, "{}-{:?} : ", "|".repeat(depth), node.kind())?;
    for token in node.tokens(tokens) {
        write!(f, "{} ", token.text)?;
    }
    writeln!(f)?;

    for child in node.children() {
        write_node(f, child, tokens, depth + 1)?;
    }
    Ok(())
}
