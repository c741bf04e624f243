use crate::blocks::{Block, ListKind};

/// Renders a block tree as an indented outline, one block per line.
///
/// Styles are left out; only structure and text are shown.
#[must_use]
pub fn outline(blocks: &[Block]) -> String {
    let mut lines = vec![];
    write_blocks(&mut lines, blocks, 0);
    lines.join("\n")
}

fn write_blocks(lines: &mut Vec<String>, blocks: &[Block], depth: usize) {
    for block in blocks {
        let mut line = "  ".repeat(depth);
        match block {
            Block::Text(text) => {
                line.push_str(&format!("Text {:?}", text.as_str()));
                lines.push(line);
            }
            Block::Code(text) => {
                line.push_str(&format!("Code {:?}", text.as_str()));
                lines.push(line);
            }
            Block::Divider => {
                line.push_str("Divider");
                lines.push(line);
            }
            Block::BlockQuote { children } => {
                line.push_str("Quote");
                lines.push(line);
                write_blocks(lines, children, depth + 1);
            }
            Block::List { kind, items } => {
                line.push_str(match kind {
                    ListKind::Ordered => "List ordered",
                    ListKind::Unordered => "List unordered",
                });
                lines.push(line);
                for item in items {
                    lines.push(format!("{}Item", "  ".repeat(depth + 1)));
                    write_blocks(lines, item, depth + 2);
                }
            }
        }
    }
}
