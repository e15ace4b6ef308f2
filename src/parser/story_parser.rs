//! Story XML parser using quick-xml.
//!
//! A story is a tree of `ParagraphStyleRange` containers holding
//! `CharacterStyleRange` runs, whose direct `Content` children carry text
//! and whose `Br` children are explicit line breaks.

use std::borrow::Cow;
use std::path::Path;

use quick_xml::events::{BytesStart, Event};
use quick_xml::Reader;

use crate::error::{Error, Result};
use crate::model::{
    ContentElement, ParagraphLayout, ParsedStory, RunLayout, StoryLayout, DEFAULT_FONT_SIZE,
    DEFAULT_FONT_STYLE,
};

/// Parser for a single story document.
pub struct StoryParser<'a> {
    filename: String,
    data: Cow<'a, [u8]>,
}

impl<'a> StoryParser<'a> {
    /// Create a parser over in-memory story bytes.
    pub fn from_bytes(filename: impl Into<String>, data: &'a [u8]) -> Self {
        Self {
            filename: filename.into(),
            data: Cow::Borrowed(data),
        }
    }

    /// Open a story file from disk.
    pub fn open<P: AsRef<Path>>(path: P) -> Result<StoryParser<'static>> {
        let path = path.as_ref();
        let data = std::fs::read(path)?;
        let filename = path
            .file_name()
            .unwrap_or(path.as_os_str())
            .to_string_lossy()
            .into_owned();
        Ok(StoryParser {
            filename,
            data: Cow::Owned(data),
        })
    }

    /// Source filename.
    pub fn filename(&self) -> &str {
        &self.filename
    }

    /// Parse the story.
    ///
    /// Returns `Ok(None)` when the story holds no text, and an error when the
    /// bytes are not well-formed story markup.
    pub fn parse(&self) -> Result<Option<ParsedStory>> {
        let mut reader = Reader::from_reader(self.data.as_ref());
        // Keep whitespace: Content text is trimmed per node, not per event
        reader.config_mut().trim_text(false);

        let mut state = ParseState::default();
        let mut buf = Vec::new();

        loop {
            match reader.read_event_into(&mut buf)? {
                Event::Start(_) | Event::Empty(_) if state.root_closed() => {
                    return Err(Error::StoryParse(format!(
                        "{}: element after root element",
                        self.filename
                    )));
                }
                Event::Start(ref e) => state.open(e)?,
                Event::Empty(ref e) => state.empty(e)?,
                Event::End(_) => state.close(),
                Event::Text(ref e) => {
                    if state.in_content() {
                        let text = e.unescape()?;
                        state.push_text(&text);
                    } else if state.nodes.is_empty() && !e.iter().all(u8::is_ascii_whitespace) {
                        return Err(Error::StoryParse(format!(
                            "{}: text outside of root element",
                            self.filename
                        )));
                    }
                }
                Event::CData(ref e) => {
                    if state.in_content() {
                        state.push_text(&String::from_utf8_lossy(e.as_ref()));
                    }
                }
                Event::Eof => break,
                _ => {}
            }
            buf.clear();
        }

        if !state.nodes.is_empty() {
            return Err(Error::StoryParse(format!(
                "{}: unexpected end of document",
                self.filename
            )));
        }
        if !state.seen_root {
            return Err(Error::StoryParse(format!(
                "{}: no root element",
                self.filename
            )));
        }

        state.finish(&self.filename)
    }
}

/// Kind of an open element.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Node {
    Paragraph,
    Run,
    Content,
    Other,
}

struct ParagraphFrame {
    index: usize,
    style: String,
    layout: ParagraphLayout,
}

struct RunFrame {
    font_size: f64,
    font_style: String,
    character_style: String,
    layout: RunLayout,
}

#[derive(Default)]
struct ParseState {
    seen_root: bool,
    story_id: Option<String>,
    nodes: Vec<Node>,
    paragraph_frames: Vec<ParagraphFrame>,
    run_frames: Vec<RunFrame>,
    content_text: Option<String>,
    paragraph_count: usize,
    elements: Vec<ContentElement>,
    paragraphs: Vec<String>,
    buffer: Vec<String>,
    layout: StoryLayout,
}

impl ParseState {
    fn in_content(&self) -> bool {
        self.nodes.last() == Some(&Node::Content)
    }

    fn root_closed(&self) -> bool {
        self.seen_root && self.nodes.is_empty()
    }

    fn in_run(&self) -> bool {
        self.nodes.last() == Some(&Node::Run)
    }

    fn open(&mut self, e: &BytesStart) -> Result<()> {
        self.seen_root = true;
        self.note_story(e)?;

        let node = match e.local_name().as_ref() {
            b"ParagraphStyleRange" => {
                let frame = self.new_paragraph(e)?;
                self.paragraph_frames.push(frame);
                Node::Paragraph
            }
            b"CharacterStyleRange" if !self.paragraph_frames.is_empty() => {
                self.run_frames.push(new_run(e)?);
                Node::Run
            }
            b"Content" if self.in_run() => {
                self.content_text = Some(String::new());
                Node::Content
            }
            b"Br" if self.in_run() => {
                self.flush_buffer();
                Node::Other
            }
            _ => Node::Other,
        };
        self.nodes.push(node);
        Ok(())
    }

    fn empty(&mut self, e: &BytesStart) -> Result<()> {
        self.seen_root = true;
        self.note_story(e)?;

        match e.local_name().as_ref() {
            b"ParagraphStyleRange" => {
                let frame = self.new_paragraph(e)?;
                self.layout.paragraphs.push(frame.layout);
            }
            b"CharacterStyleRange" => {
                if let Some(paragraph) = self.paragraph_frames.last_mut() {
                    paragraph.layout.runs.push(RunLayout::default());
                }
            }
            b"Content" if self.in_run() => {
                if let Some(run) = self.run_frames.last_mut() {
                    run.layout.contents.push(String::new());
                }
            }
            b"Br" if self.in_run() => self.flush_buffer(),
            _ => {}
        }
        Ok(())
    }

    fn close(&mut self) {
        match self.nodes.pop() {
            Some(Node::Content) => self.finish_content(),
            Some(Node::Run) => {
                if let Some(run) = self.run_frames.pop() {
                    if let Some(paragraph) = self.paragraph_frames.last_mut() {
                        paragraph.layout.runs.push(run.layout);
                    }
                }
            }
            Some(Node::Paragraph) => {
                self.flush_buffer();
                if let Some(paragraph) = self.paragraph_frames.pop() {
                    self.layout.paragraphs.push(paragraph.layout);
                }
            }
            Some(Node::Other) | None => {}
        }
    }

    fn push_text(&mut self, text: &str) {
        if let Some(content) = self.content_text.as_mut() {
            content.push_str(text);
        }
    }

    fn note_story(&mut self, e: &BytesStart) -> Result<()> {
        if self.story_id.is_none() && e.name().as_ref() == b"Story" {
            self.story_id = Some(get_attr(e, b"Self")?.unwrap_or_default());
        }
        Ok(())
    }

    fn new_paragraph(&mut self, e: &BytesStart) -> Result<ParagraphFrame> {
        self.paragraph_count += 1;
        Ok(ParagraphFrame {
            index: self.paragraph_count,
            style: get_attr(e, b"AppliedParagraphStyle")?.unwrap_or_default(),
            layout: ParagraphLayout::default(),
        })
    }

    fn finish_content(&mut self) {
        let text = self.content_text.take().unwrap_or_default();
        let (Some(run), Some(paragraph)) =
            (self.run_frames.last_mut(), self.paragraph_frames.last())
        else {
            return;
        };

        let trimmed = text.trim();
        if !trimmed.is_empty() {
            let element = ContentElement::new(
                trimmed,
                run.font_size,
                run.font_style.clone(),
                paragraph.index,
            )
            .with_styles(run.character_style.clone(), paragraph.style.clone());
            self.elements.push(element);
            self.buffer.push(trimmed.to_string());
        }
        run.layout.contents.push(text);
    }

    fn flush_buffer(&mut self) {
        if !self.buffer.is_empty() {
            self.paragraphs.push(self.buffer.join(" "));
            self.buffer.clear();
        }
    }

    fn finish(mut self, filename: &str) -> Result<Option<ParsedStory>> {
        self.flush_buffer();

        if self.elements.is_empty() {
            log::debug!("{}: no text content", filename);
            return Ok(None);
        }

        let story_id = self
            .story_id
            .ok_or_else(|| Error::StoryParse(format!("{}: missing Story element", filename)))?;

        log::debug!(
            "{}: story {} with {} elements in {} paragraphs",
            filename,
            story_id,
            self.elements.len(),
            self.paragraphs.len()
        );

        Ok(Some(
            ParsedStory::new(story_id, filename, self.elements, self.paragraphs)
                .with_layout(self.layout),
        ))
    }
}

fn new_run(e: &BytesStart) -> Result<RunFrame> {
    let font_size = get_attr(e, b"PointSize")?
        .and_then(|s| s.trim().parse::<f64>().ok())
        .unwrap_or(DEFAULT_FONT_SIZE);
    Ok(RunFrame {
        font_size,
        font_style: get_attr(e, b"FontStyle")?.unwrap_or_else(|| DEFAULT_FONT_STYLE.to_string()),
        character_style: get_attr(e, b"AppliedCharacterStyle")?.unwrap_or_default(),
        layout: RunLayout::default(),
    })
}

fn get_attr(e: &BytesStart, name: &[u8]) -> Result<Option<String>> {
    for attr in e.attributes() {
        let attr = attr?;
        if attr.key.as_ref() == name {
            return Ok(Some(attr.unescape_value()?.into_owned()));
        }
    }
    Ok(None)
}
