use crate::style::StyledText;

/// One level of document structure attached to a run.
///
/// Equality compares payloads too: two `ListItem`s with different ordinals
/// are different containers.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Container {
    BlockQuote,
    OrderedList,
    UnorderedList,
    /// An item of the enclosing list.
    ListItem {
        /// 1-based position of the item within its list.
        ordinal: u64,
    },
    Paragraph,
    Header {
        /// Heading level, 1 through 6.
        level: u8,
    },
    CodeBlock,
    ThematicBreak,
}

impl Container {
    /// Leaf containers hold text (or, for a thematic break, nothing) and are
    /// always the innermost entry of a container list.
    #[must_use]
    pub fn is_leaf(&self) -> bool {
        matches!(
            self,
            Container::Paragraph
                | Container::Header { .. }
                | Container::CodeBlock
                | Container::ThematicBreak
        )
    }
}

/// Whether a list is numbered.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ListKind {
    Ordered,
    Unordered,
}

/// A finished unit of the output document tree.
#[derive(Debug, Clone, PartialEq)]
pub enum Block {
    /// Paragraph or header text, already styled.
    Text(StyledText),
    /// A horizontal rule.
    Divider,
    List {
        kind: ListKind,
        /// One entry per list item, each an ordered sequence of blocks.
        items: Vec<Vec<Block>>,
    },
    BlockQuote {
        children: Vec<Block>,
    },
    /// A code block drawn in a fixed-width font.
    Code(StyledText),
}
