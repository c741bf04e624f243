use crate::blocks::{Container, Event};

/// Asserts that an event stream is balanced and well nested.
///
/// Every `Close` must match the most recent unclosed `Open`, text may only
/// appear inside a text-bearing leaf, dividers only inside a thematic break,
/// and nothing may be left open at the end.
pub fn check_balanced(events: &[Event]) {
    let mut open: Vec<&Container> = vec![];
    for (i, event) in events.iter().enumerate() {
        match event {
            Event::Open(container) => open.push(container),
            Event::Close(container) => {
                let top = open.pop();
                assert_eq!(
                    top,
                    Some(container),
                    "event {i}: close of {container:?} does not match open {top:?}"
                );
            }
            Event::Text(text) => assert!(
                matches!(
                    open.last(),
                    Some(Container::Paragraph | Container::Header { .. } | Container::CodeBlock)
                ),
                "event {i}: text {:?} outside a text leaf (open: {open:?})",
                text.as_str()
            ),
            Event::Divider => assert!(
                matches!(open.last(), Some(Container::ThematicBreak)),
                "event {i}: divider outside a thematic break (open: {open:?})"
            ),
        }
    }
    assert!(open.is_empty(), "unclosed containers at end: {open:?}");
}
