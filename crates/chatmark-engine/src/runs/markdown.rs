use pulldown_cmark::{Event, Options, Parser, Tag, TagEnd};

use crate::{
    blocks::{Container, Run},
    style::{Font, FontWeight, StyledText, TextStyle},
};

/// Parses markdown into container-annotated runs.
///
/// Block structure becomes each run's container path; inline markup resolves
/// to fonts relative to `base_font`.
#[must_use]
pub fn parse_runs(markdown: &str, base_font: &Font) -> Vec<Run> {
    let parser = Parser::new_ext(markdown, Options::ENABLE_STRIKETHROUGH);
    let mut collector = RunCollector::new(base_font);

    for event in parser {
        collector.process_event(event);
    }

    collector.finish()
}

/// Tracks the open block containers and inline markup while walking
/// pulldown-cmark events.
///
/// Text is coalesced into the pending run as long as both its container path
/// and its style are unchanged. Leaving any block flushes the pending run, so a
/// code block always ends up as a single run. Paragraphs are bracketed by
/// empty runs.
struct RunCollector<'a> {
    base_font: &'a Font,
    /// Open block containers, outermost first.
    containers: Vec<Container>,
    /// Item count of each open list.
    ordinals: Vec<u64>,
    strong: usize,
    emphasis: usize,
    strikethrough: usize,
    /// Destinations of the open links; the innermost wins.
    links: Vec<String>,
    pending: Option<Run>,
    runs: Vec<Run>,
}

impl<'a> RunCollector<'a> {
    fn new(base_font: &'a Font) -> Self {
        Self {
            base_font,
            containers: vec![],
            ordinals: vec![],
            strong: 0,
            emphasis: 0,
            strikethrough: 0,
            links: vec![],
            pending: None,
            runs: vec![],
        }
    }

    fn process_event(&mut self, event: Event) {
        match event {
            Event::Start(tag) => self.start(tag),
            Event::End(tag) => self.end(tag),
            Event::Text(text) | Event::Html(text) | Event::InlineHtml(text) => {
                self.push_text(&text, self.inline_style());
            }
            Event::Code(code) => {
                let style = TextStyle {
                    font: Some(Font::monospaced(self.base_font.size)),
                    ..self.inline_style()
                };
                self.push_text(&code, style);
            }
            Event::SoftBreak => self.push_text(" ", self.inline_style()),
            Event::HardBreak => self.push_text("\n", self.inline_style()),
            Event::Rule => self.push_rule(),
            _ => {}
        }
    }

    fn start(&mut self, tag: Tag) {
        match tag {
            Tag::Paragraph => {
                self.open(Container::Paragraph);
                self.push_paragraph_boundary();
            }
            Tag::Heading { level, .. } => self.open(Container::Header {
                level: level as u8,
            }),
            Tag::BlockQuote { .. } => self.open(Container::BlockQuote),
            Tag::CodeBlock(_) => self.open(Container::CodeBlock),
            Tag::List(first_number) => {
                self.open(if first_number.is_some() {
                    Container::OrderedList
                } else {
                    Container::UnorderedList
                });
                self.ordinals.push(0);
            }
            Tag::Item => {
                let ordinal = match self.ordinals.last_mut() {
                    Some(count) => {
                        *count += 1;
                        *count
                    }
                    None => 1,
                };
                self.open(Container::ListItem { ordinal });
            }
            Tag::Strong => self.strong += 1,
            Tag::Emphasis => self.emphasis += 1,
            Tag::Strikethrough => self.strikethrough += 1,
            Tag::Link { dest_url, .. } => self.links.push(dest_url.to_string()),
            _ => {}
        }
    }

    fn end(&mut self, tag: TagEnd) {
        match tag {
            TagEnd::Paragraph => {
                self.push_paragraph_boundary();
                self.close();
            }
            TagEnd::Heading(_)
            | TagEnd::BlockQuote { .. }
            | TagEnd::CodeBlock
            | TagEnd::Item => self.close(),
            TagEnd::List(_) => {
                self.close();
                self.ordinals.pop();
            }
            TagEnd::Strong => self.strong = self.strong.saturating_sub(1),
            TagEnd::Emphasis => self.emphasis = self.emphasis.saturating_sub(1),
            TagEnd::Strikethrough => self.strikethrough = self.strikethrough.saturating_sub(1),
            TagEnd::Link => {
                self.links.pop();
            }
            _ => {}
        }
    }

    fn finish(mut self) -> Vec<Run> {
        self.flush();
        self.runs
    }

    fn open(&mut self, container: Container) {
        self.flush();
        self.containers.push(container);
    }

    fn close(&mut self) {
        self.flush();
        self.containers.pop();
    }

    fn flush(&mut self) {
        if let Some(run) = self.pending.take() {
            self.runs.push(run);
        }
    }

    /// The current container path, with an implicit paragraph for text that
    /// sits directly in a tight list item, a quote or at the root.
    fn path(&self) -> Vec<Container> {
        let mut path = self.containers.clone();
        if !path.last().is_some_and(Container::is_leaf) {
            path.push(Container::Paragraph);
        }
        path
    }

    fn inline_style(&self) -> TextStyle {
        let font = (self.strong > 0 || self.emphasis > 0).then(|| {
            let weight = if self.strong > 0 {
                FontWeight::Bold
            } else {
                self.base_font.weight
            };
            self.base_font
                .clone()
                .with_weight(weight)
                .with_italic(self.emphasis > 0 || self.base_font.italic)
        });
        TextStyle {
            font,
            color: None,
            link: self.links.last().cloned(),
            underline: false,
            strikethrough: self.strikethrough > 0,
        }
    }

    fn push_text(&mut self, text: &str, style: TextStyle) {
        if text.is_empty() {
            return;
        }
        let path = self.path();
        if let Some(pending) = self.pending.as_mut() {
            let same_style = pending.text.runs().last().map(|r| &r.style) == Some(&style);
            if pending.containers == path && same_style {
                pending.text.push_str(text, style);
                return;
            }
        }
        self.flush();
        self.pending = Some(Run::new(StyledText::styled(text, style), path));
    }

    /// Emits an empty unstyled run at a paragraph edge, so neighbouring
    /// paragraphs split whatever styling meets at the boundary. The empty
    /// paragraphs this opens produce no blocks.
    fn push_paragraph_boundary(&mut self) {
        self.flush();
        self.runs.push(Run::new(StyledText::new(), self.path()));
    }

    fn push_rule(&mut self) {
        self.flush();
        let mut path = self.containers.clone();
        path.push(Container::ThematicBreak);
        self.runs.push(Run::new(StyledText::new(), path));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    use Container::*;

    /// Runs that carry text or a divider, without the empty paragraph edges.
    fn runs(md: &str) -> Vec<Run> {
        parse_runs(md, &Font::default())
            .into_iter()
            .filter(|r| {
                !r.text.is_empty() || r.containers.last() == Some(&Container::ThematicBreak)
            })
            .collect()
    }

    fn shape(runs: &[Run]) -> Vec<(&str, Vec<Container>)> {
        runs.iter()
            .map(|r| (r.text.as_str(), r.containers.clone()))
            .collect()
    }

    #[test]
    fn empty_markdown_has_no_runs() {
        assert!(runs("").is_empty());
    }

    #[test]
    fn paragraphs_flush_separately() {
        let runs = runs("one\n\ntwo\n");
        assert_eq!(
            shape(&runs),
            vec![("one", vec![Paragraph]), ("two", vec![Paragraph])]
        );
    }

    #[test]
    fn paragraphs_are_bracketed_by_empty_runs() {
        let runs = parse_runs("one **two**\n\nthree\n", &Font::default());
        assert_eq!(
            shape(&runs),
            vec![
                ("", vec![Paragraph]),
                ("one ", vec![Paragraph]),
                ("two", vec![Paragraph]),
                ("", vec![Paragraph]),
                ("", vec![Paragraph]),
                ("three", vec![Paragraph]),
                ("", vec![Paragraph]),
            ]
        );
        assert!(runs.iter().filter(|r| r.text.is_empty()).all(|r| !r.has_inline_styling()));
    }

    #[test]
    fn tight_list_items_have_no_edges() {
        let all = parse_runs("- a\n- b\n", &Font::default());
        assert!(all.iter().all(|r| !r.text.is_empty()));
    }

    #[test]
    fn soft_breaks_coalesce_into_one_run() {
        let runs = runs("line one\nline two\n");
        assert_eq!(shape(&runs), vec![("line one line two", vec![Paragraph])]);
    }

    #[test]
    fn inline_markup_splits_runs_by_style() {
        let runs = runs("a **b** *c* `d`\n");
        let texts: Vec<_> = runs.iter().map(|r| r.text.as_str()).collect();
        assert_eq!(texts, vec!["a ", "b", " ", "c", " ", "d"]);

        let bold = runs[1].text.runs()[0].style.font.as_ref().unwrap();
        assert_eq!(bold.weight, FontWeight::Bold);
        let italic = runs[3].text.runs()[0].style.font.as_ref().unwrap();
        assert!(italic.italic);
        let code = runs[5].text.runs()[0].style.font.as_ref().unwrap();
        assert!(code.is_fixed_width());

        assert!(!runs[0].has_inline_styling());
        assert!(runs[1].has_inline_styling());
    }

    #[test]
    fn links_and_strikethrough_count_as_styling() {
        let runs = runs("[x](https://example.com) ~~y~~\n");
        assert_eq!(
            runs[0].text.runs()[0].style.link.as_deref(),
            Some("https://example.com")
        );
        assert!(runs[2].text.runs()[0].style.strikethrough);
        assert!(runs[0].has_inline_styling());
        assert!(runs[2].has_inline_styling());
    }

    #[test]
    fn tight_list_items_get_implicit_paragraphs() {
        let runs = runs("- a\n- b\n");
        assert_eq!(
            shape(&runs),
            vec![
                ("a", vec![UnorderedList, ListItem { ordinal: 1 }, Paragraph]),
                ("b", vec![UnorderedList, ListItem { ordinal: 2 }, Paragraph]),
            ]
        );
    }

    #[test]
    fn ordinals_restart_in_nested_lists() {
        let runs = runs("1. a\n   - b\n2. c\n");
        assert_eq!(
            shape(&runs),
            vec![
                ("a", vec![OrderedList, ListItem { ordinal: 1 }, Paragraph]),
                (
                    "b",
                    vec![
                        OrderedList,
                        ListItem { ordinal: 1 },
                        UnorderedList,
                        ListItem { ordinal: 1 },
                        Paragraph,
                    ]
                ),
                ("c", vec![OrderedList, ListItem { ordinal: 2 }, Paragraph]),
            ]
        );
    }

    #[test]
    fn fenced_code_is_a_single_run() {
        let runs = runs("```\nfirst\nsecond\n```\n");
        assert_eq!(shape(&runs), vec![("first\nsecond\n", vec![CodeBlock])]);
        assert!(!runs[0].has_inline_styling());
    }

    #[test]
    fn headings_carry_their_level() {
        let runs = runs("### Deep\n");
        assert_eq!(shape(&runs), vec![("Deep", vec![Header { level: 3 }])]);
    }

    #[test]
    fn rule_is_a_textless_thematic_break() {
        let runs = runs("> ---\n");
        assert_eq!(shape(&runs), vec![("", vec![BlockQuote, ThematicBreak])]);
    }

    #[test]
    fn quoted_text_is_nested() {
        let runs = runs("> hi\n");
        assert_eq!(shape(&runs), vec![("hi", vec![BlockQuote, Paragraph])]);
    }
}
