use crate::{
    options::BuildOptions,
    style::{Color, Font, normalize},
};

use super::{
    events::Event,
    node::Node,
    types::{Block, Container},
};

const LINE_ENDINGS: &[char] = &['\n', '\r'];

/// Assembles an [`Event`] stream into a tree of [`Block`]s.
///
/// Keeps a stack of in-progress [`Node`]s. Closing a node finalizes it into at
/// most one block, which is routed to the nearest open list item or block
/// quote, or to the document root when there is none.
pub struct BlockBuilder<'a> {
    options: &'a BuildOptions,
    stack: Vec<Node>,
    out: Vec<Block>,
}

impl<'a> BlockBuilder<'a> {
    pub fn new(options: &'a BuildOptions) -> Self {
        Self {
            options,
            stack: vec![],
            out: vec![],
        }
    }

    pub fn push(&mut self, event: Event) {
        match event {
            Event::Open(container) => {
                if let Some(node) = Node::open(&container) {
                    self.stack.push(node);
                }
            }
            Event::Close(container) => self.close(&container),
            Event::Text(text) => match self.stack.last_mut().and_then(Node::buffer_mut) {
                Some(buffer) => buffer.append(&text),
                None => log::debug!("dropping text outside a text block: {:?}", text.as_str()),
            },
            Event::Divider => self.divider(),
        }
    }

    pub fn finish(mut self) -> Vec<Block> {
        // EOF drain
        while let Some(node) = self.stack.pop() {
            log::debug!("closing unbalanced node at end of input: {node:?}");
            self.finalize(node);
        }
        self.out
    }

    fn close(&mut self, container: &Container) {
        if matches!(container, Container::ThematicBreak) {
            return;
        }
        let Some(index) = self.stack.iter().rposition(|n| n.is_closed_by(container)) else {
            log::debug!("ignoring close of {container:?} with no open node");
            return;
        };
        while self.stack.len() > index {
            if let Some(node) = self.stack.pop() {
                self.finalize(node);
            }
        }
    }

    fn divider(&mut self) {
        while self.stack.last().is_some_and(Node::is_leaf) {
            if let Some(node) = self.stack.pop() {
                self.finalize(node);
            }
        }
        while self.stack.last().is_some_and(Node::is_list_part) {
            if let Some(node) = self.stack.pop() {
                self.finalize(node);
            }
        }
        self.append_block(Block::Divider);
    }

    /// Turns a popped node into its block and routes it.
    fn finalize(&mut self, node: Node) {
        match node {
            Node::Paragraph { buffer } => {
                if !buffer.is_empty() {
                    let text = normalize(
                        buffer,
                        &self.options.base_font,
                        self.options.override_color,
                    );
                    self.append_block(Block::Text(text));
                }
            }
            Node::Header { level, mut buffer } => {
                if !buffer.is_empty() {
                    buffer.set_font(&Font::header(&self.options.base_font, level));
                    buffer.set_color(Color::DEFAULT_FOREGROUND);
                    self.append_block(Block::Text(buffer));
                }
            }
            Node::CodeBlock { mut buffer } => {
                buffer.trim_end_matches(LINE_ENDINGS);
                if !buffer.is_empty() {
                    buffer.set_font(&Font::monospaced(self.options.base_font.size));
                    self.append_block(Block::Code(buffer));
                }
            }
            Node::BlockQuote { children } => self.append_block(Block::BlockQuote { children }),
            Node::List { kind, items } => self.append_block(Block::List { kind, items }),
            Node::ListItem { children } => self.attach_list_item(children),
        }
    }

    fn attach_list_item(&mut self, children: Vec<Block>) {
        let list = self.stack.iter_mut().rev().find_map(|n| match n {
            Node::List { items, .. } => Some(items),
            _ => None,
        });
        match list {
            Some(items) => items.push(children),
            None => {
                log::warn!(
                    "list item closed outside any list; flattening {} blocks",
                    children.len()
                );
                for child in children {
                    self.append_block(child);
                }
            }
        }
    }

    fn append_block(&mut self, block: Block) {
        match self.stack.iter_mut().rev().find_map(Node::children_mut) {
            Some(children) => children.push(block),
            None => self.out.push(block),
        }
    }
}

/// Replays `events` into a fresh builder.
#[must_use]
pub fn assemble(events: impl IntoIterator<Item = Event>, options: &BuildOptions) -> Vec<Block> {
    let mut builder = BlockBuilder::new(options);
    for event in events {
        builder.push(event);
    }
    builder.finish()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        blocks::types::ListKind,
        style::{FontWeight, StyledText},
    };
    use pretty_assertions::assert_eq;

    use Container::*;
    use Event::{Close, Divider, Open};

    fn text(s: &str) -> Event {
        Event::Text(StyledText::plain(s))
    }

    fn build(events: Vec<Event>) -> Vec<Block> {
        assemble(events, &BuildOptions::default())
    }

    /// Plain text of every top-level text or code block, for shape checks.
    fn texts(blocks: &[Block]) -> Vec<&str> {
        blocks
            .iter()
            .filter_map(|b| match b {
                Block::Text(t) | Block::Code(t) => Some(t.as_str()),
                _ => None,
            })
            .collect()
    }

    #[test]
    fn paragraph_is_normalized_to_base_font() {
        let blocks = build(vec![Open(Paragraph), text("hi"), Close(Paragraph)]);
        let Block::Text(t) = &blocks[0] else {
            panic!("expected text block, got {blocks:?}");
        };
        assert_eq!(t.as_str(), "hi");
        assert_eq!(t.runs()[0].style.font, Some(Font::default()));
    }

    #[test]
    fn empty_paragraph_produces_no_block() {
        let blocks = build(vec![Open(Paragraph), Close(Paragraph)]);
        assert!(blocks.is_empty());
    }

    #[test]
    fn header_gets_level_font_and_colour() {
        let blocks = build(vec![
            Open(Header { level: 2 }),
            text("Title"),
            Close(Header { level: 2 }),
        ]);
        let Block::Text(t) = &blocks[0] else {
            panic!("expected text block, got {blocks:?}");
        };
        let style = &t.runs()[0].style;
        let font = style.font.as_ref().unwrap();
        assert_eq!(font.size, 20.0);
        assert_eq!(font.weight, FontWeight::Semibold);
        assert_eq!(style.color, Some(Color::DEFAULT_FOREGROUND));
    }

    #[test]
    fn header_ignores_override_colour() {
        let red = Color::rgb(0xff, 0, 0);
        let options = BuildOptions {
            override_color: Some(red),
            ..BuildOptions::default()
        };
        let blocks = assemble(
            vec![Open(Header { level: 1 }), text("T"), Close(Header { level: 1 })],
            &options,
        );
        let Block::Text(t) = &blocks[0] else {
            panic!("expected text block, got {blocks:?}");
        };
        assert_eq!(t.runs()[0].style.color, Some(Color::DEFAULT_FOREGROUND));
    }

    #[test]
    fn code_block_strips_trailing_newlines() {
        let blocks = build(vec![Open(CodeBlock), text("print(1)\n\n"), Close(CodeBlock)]);
        let Block::Code(t) = &blocks[0] else {
            panic!("expected code block, got {blocks:?}");
        };
        assert_eq!(t.as_str(), "print(1)");
        assert!(t.runs()[0].style.font.as_ref().unwrap().is_fixed_width());
    }

    #[test]
    fn newline_only_code_block_produces_nothing() {
        let blocks = build(vec![Open(CodeBlock), text("\r\n"), Close(CodeBlock)]);
        assert!(blocks.is_empty());
    }

    #[test]
    fn empty_quote_is_kept() {
        let blocks = build(vec![Open(BlockQuote), Close(BlockQuote)]);
        assert_eq!(blocks, vec![Block::BlockQuote { children: vec![] }]);
    }

    #[test]
    fn text_in_structural_node_is_dropped() {
        let blocks = build(vec![
            Open(UnorderedList),
            text("stray"),
            Open(ListItem { ordinal: 1 }),
            text("also stray"),
            Close(ListItem { ordinal: 1 }),
            Close(UnorderedList),
        ]);
        assert_eq!(
            blocks,
            vec![Block::List {
                kind: ListKind::Unordered,
                items: vec![vec![]],
            }]
        );
    }

    #[test]
    fn orphan_list_item_flattens_children() {
        let blocks = build(vec![
            Open(ListItem { ordinal: 1 }),
            Open(Paragraph),
            text("a"),
            Close(Paragraph),
            Open(Paragraph),
            text("b"),
            Close(Paragraph),
            Close(ListItem { ordinal: 1 }),
        ]);
        assert_eq!(texts(&blocks), vec!["a", "b"]);
        assert_eq!(blocks.len(), 2);
    }

    #[test]
    fn divider_closes_open_list() {
        let blocks = build(vec![
            Open(UnorderedList),
            Open(ListItem { ordinal: 1 }),
            Open(Paragraph),
            text("a"),
            Open(ThematicBreak),
            Divider,
            Close(ThematicBreak),
            Close(Paragraph),
            Close(ListItem { ordinal: 1 }),
            Close(UnorderedList),
        ]);
        assert_eq!(blocks.len(), 2);
        assert!(matches!(&blocks[0], Block::List { items, .. } if items.len() == 1));
        assert_eq!(blocks[1], Block::Divider);
    }

    #[test]
    fn divider_inside_quote_stays_in_quote() {
        let blocks = build(vec![
            Open(BlockQuote),
            Open(ThematicBreak),
            Divider,
            Close(ThematicBreak),
            Close(BlockQuote),
        ]);
        assert_eq!(
            blocks,
            vec![Block::BlockQuote {
                children: vec![Block::Divider],
            }]
        );
    }

    #[test]
    fn mismatched_close_unwinds_to_matching_node() {
        let blocks = build(vec![
            Open(BlockQuote),
            Open(Paragraph),
            text("q"),
            Close(BlockQuote),
        ]);
        let [Block::BlockQuote { children }] = blocks.as_slice() else {
            panic!("expected one quote, got {blocks:?}");
        };
        assert_eq!(texts(children), vec!["q"]);
    }

    #[test]
    fn unbalanced_input_is_drained() {
        let blocks = build(vec![
            Open(OrderedList),
            Open(ListItem { ordinal: 1 }),
            Open(Paragraph),
            text("open"),
        ]);
        let [Block::List { kind, items }] = blocks.as_slice() else {
            panic!("expected one list, got {blocks:?}");
        };
        assert_eq!(*kind, ListKind::Ordered);
        assert_eq!(items.len(), 1);
        assert_eq!(texts(&items[0]), vec!["open"]);
    }

    #[test]
    fn stray_close_is_ignored() {
        let blocks = build(vec![
            Close(UnorderedList),
            Open(Paragraph),
            text("x"),
            Close(Paragraph),
        ]);
        assert_eq!(texts(&blocks), vec!["x"]);
    }
}
