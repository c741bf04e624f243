use crate::style::StyledText;

use super::types::{Block, Container, ListKind};

/// An in-progress block living on the assembler's stack.
#[derive(Debug)]
pub(crate) enum Node {
    BlockQuote { children: Vec<Block> },
    List { kind: ListKind, items: Vec<Vec<Block>> },
    ListItem { children: Vec<Block> },
    Paragraph { buffer: StyledText },
    Header { level: u8, buffer: StyledText },
    CodeBlock { buffer: StyledText },
}

impl Node {
    /// The empty node a container opens, if it opens one at all.
    pub(crate) fn open(container: &Container) -> Option<Node> {
        let node = match container {
            Container::BlockQuote => Node::BlockQuote { children: vec![] },
            Container::OrderedList => Node::List {
                kind: ListKind::Ordered,
                items: vec![],
            },
            Container::UnorderedList => Node::List {
                kind: ListKind::Unordered,
                items: vec![],
            },
            Container::ListItem { .. } => Node::ListItem { children: vec![] },
            Container::Paragraph => Node::Paragraph {
                buffer: StyledText::new(),
            },
            Container::Header { level } => Node::Header {
                level: *level,
                buffer: StyledText::new(),
            },
            Container::CodeBlock => Node::CodeBlock {
                buffer: StyledText::new(),
            },
            Container::ThematicBreak => return None,
        };
        Some(node)
    }

    /// Whether closing `container` should pop this node.
    pub(crate) fn is_closed_by(&self, container: &Container) -> bool {
        matches!(
            (self, container),
            (Node::BlockQuote { .. }, Container::BlockQuote)
                | (
                    Node::List {
                        kind: ListKind::Ordered,
                        ..
                    },
                    Container::OrderedList
                )
                | (
                    Node::List {
                        kind: ListKind::Unordered,
                        ..
                    },
                    Container::UnorderedList
                )
                | (Node::ListItem { .. }, Container::ListItem { .. })
                | (Node::Paragraph { .. }, Container::Paragraph)
                | (Node::Header { .. }, Container::Header { .. })
                | (Node::CodeBlock { .. }, Container::CodeBlock)
        )
    }

    /// Text buffer of a text-bearing node.
    pub(crate) fn buffer_mut(&mut self) -> Option<&mut StyledText> {
        match self {
            Node::Paragraph { buffer }
            | Node::Header { buffer, .. }
            | Node::CodeBlock { buffer } => Some(buffer),
            _ => None,
        }
    }

    /// Children of a node that finished blocks are routed into.
    pub(crate) fn children_mut(&mut self) -> Option<&mut Vec<Block>> {
        match self {
            Node::ListItem { children } | Node::BlockQuote { children } => Some(children),
            _ => None,
        }
    }

    pub(crate) fn is_leaf(&self) -> bool {
        matches!(
            self,
            Node::Paragraph { .. } | Node::Header { .. } | Node::CodeBlock { .. }
        )
    }

    pub(crate) fn is_list_part(&self) -> bool {
        matches!(self, Node::List { .. } | Node::ListItem { .. })
    }
}
