use crate::style::StyledText;

use super::{containers::ContainerPath, run::Run, types::Container};

/// One instruction for the tree assembler, in document order.
#[derive(Debug, Clone, PartialEq)]
pub enum Event {
    Open(Container),
    Close(Container),
    Text(StyledText),
    Divider,
}

/// Diffs consecutive runs' container paths into a balanced event stream.
///
/// Feed runs in document order with [`push`](Self::push), then call
/// [`finish`](Self::finish) to close whatever the last run left open.
pub struct EventProducer {
    prev: ContainerPath,
    prev_had_inline_styling: bool,
    out: Vec<Event>,
}

impl EventProducer {
    pub fn new() -> Self {
        Self {
            prev: ContainerPath::default(),
            prev_had_inline_styling: false,
            out: vec![],
        }
    }

    pub fn push(&mut self, run: &Run) {
        let current = run.container_path();
        let has_inline_styling = run.has_inline_styling();
        let common = self.prev.common_prefix_len(&current);

        if common == self.prev.len() && common == current.len() {
            self.force_boundary(&current, has_inline_styling);
        }

        for container in self.prev.below(common).iter().rev() {
            self.out.push(Event::Close(container.clone()));
        }
        for container in current.below(common) {
            self.out.push(Event::Open(container.clone()));
        }

        if matches!(current.innermost(), Some(Container::ThematicBreak)) {
            self.out.push(Event::Divider);
        } else if !run.text.is_empty() {
            self.out.push(Event::Text(run.text.clone()));
        }

        log::trace!(
            "run {:?}: shared {common} of {} containers",
            run.text.as_str(),
            current.len()
        );

        self.prev = current;
        self.prev_had_inline_styling = has_inline_styling;
    }

    pub fn finish(mut self) -> Vec<Event> {
        for container in self.prev.0.iter().rev() {
            self.out.push(Event::Close(container.clone()));
        }
        self.out
    }

    /// Splits runs whose container paths are identical but which still belong
    /// to separate leaf blocks.
    ///
    /// Consecutive unstyled paragraph runs are distinct paragraphs. Each code
    /// block run is a whole fenced block.
    fn force_boundary(&mut self, current: &ContainerPath, has_inline_styling: bool) {
        let leaf = match (self.prev.innermost(), current.innermost()) {
            (Some(prev), Some(cur)) if prev == cur => cur,
            _ => return,
        };
        let split = match leaf {
            Container::Paragraph => !self.prev_had_inline_styling && !has_inline_styling,
            Container::CodeBlock => true,
            _ => false,
        };
        if split {
            self.out.push(Event::Close(leaf.clone()));
            self.out.push(Event::Open(leaf.clone()));
        }
    }
}

impl Default for EventProducer {
    fn default() -> Self {
        Self::new()
    }
}

/// Converts a whole run sequence into events.
#[must_use]
pub fn produce_events(runs: &[Run]) -> Vec<Event> {
    let mut producer = EventProducer::new();
    for run in runs {
        producer.push(run);
    }
    producer.finish()
}
