//! Serializing letter-order documents

use std::io::{self, Write};

use quick_xml::events::{BytesDecl, BytesEnd, BytesStart, BytesText, Event};
use quick_xml::Writer;

use crate::letter_order::{
    Head, LetterOrder, Page, FORMAT_VERSION, GENERATOR_NAME, GENERATOR_VERSION,
};

const DOCTYPE: &str = r#"letter-order SYSTEM "letter-order.dtd""#;
const INDENT: usize = 2;

/// Write `doc` as XML.
///
/// The glyph grid is written as mixed content: each slot token is followed
/// by a space, each row by a newline, and each page by a blank line, so
/// the rows line up in the output the way the cells do on the sheet.
pub fn write_letter_order<W: Write>(doc: &LetterOrder, out: W) -> io::Result<()> {
    let mut writer = XlorWriter {
        writer: Writer::new(out),
    };
    writer.event(Event::Decl(BytesDecl::new("1.0", Some("utf-8"), None)))?;
    writer.raw("\n")?;
    writer.event(Event::DocType(BytesText::from_escaped(DOCTYPE)))?;
    writer.raw("\n")?;

    writer.start(
        0,
        BytesStart::new("letter-order").with_attributes([("version", FORMAT_VERSION)]),
    )?;
    writer.head(1, &doc.head)?;

    writer.start(1, BytesStart::new("body"))?;
    let width = doc.area.width.to_string();
    let height = doc.area.height.to_string();
    writer.empty(
        2,
        BytesStart::new("area")
            .with_attributes([("width", width.as_str()), ("height", height.as_str())]),
    )?;
    writer.start(2, BytesStart::new("order"))?;
    for (i, page) in doc.pages.iter().enumerate() {
        writer.page(3, i + 1, page)?;
    }
    writer.end(2, "order")?;
    writer.end(1, "body")?;
    writer.end(0, "letter-order")
}

struct XlorWriter<W: Write> {
    writer: Writer<W>,
}

impl<W: Write> XlorWriter<W> {
    fn event(&mut self, event: Event<'_>) -> io::Result<()> {
        self.writer.write_event(event)
    }

    /// Write text that is already escaped.
    fn raw(&mut self, text: &str) -> io::Result<()> {
        self.event(Event::Text(BytesText::from_escaped(text)))
    }

    fn indent(&mut self, depth: usize) -> io::Result<()> {
        if depth > 0 {
            self.raw(&format!("{:1$}", "", depth * INDENT))?;
        }
        Ok(())
    }

    fn start(&mut self, depth: usize, tag: BytesStart) -> io::Result<()> {
        self.indent(depth)?;
        self.event(Event::Start(tag))?;
        self.raw("\n")
    }

    fn end(&mut self, depth: usize, name: &str) -> io::Result<()> {
        self.indent(depth)?;
        self.event(Event::End(BytesEnd::new(name)))?;
        self.raw("\n")
    }

    fn empty(&mut self, depth: usize, tag: BytesStart) -> io::Result<()> {
        self.indent(depth)?;
        self.event(Event::Empty(tag))?;
        self.raw("\n")
    }

    fn head(&mut self, depth: usize, head: &Head) -> io::Result<()> {
        self.start(depth, BytesStart::new("head"))?;
        let create = &head.create;
        self.empty(
            depth + 1,
            BytesStart::new("create").with_attributes([
                ("user", create.user.as_str()),
                ("host", create.host.as_str()),
                ("date", create.date.as_str()),
            ]),
        )?;

        self.indent(depth + 1)?;
        self.event(Event::Start(BytesStart::new("title")))?;
        self.event(Event::Text(BytesText::new(&head.title)))?;
        self.event(Event::End(BytesEnd::new("title")))?;
        self.raw("\n")?;

        self.empty(
            depth + 1,
            BytesStart::new("generator")
                .with_attributes([("name", GENERATOR_NAME), ("version", GENERATOR_VERSION)]),
        )?;
        self.end(depth, "head")
    }

    fn page(&mut self, depth: usize, number: usize, page: &Page) -> io::Result<()> {
        self.indent(depth)?;
        self.event(Event::Comment(BytesText::from_escaped(format!(
            "Image #{number}"
        ))))?;
        self.raw("\n")?;
        for row in &page.rows {
            for slot in row {
                self.raw(slot.token())?;
                self.raw(" ")?;
            }
            self.raw("\n")?;
        }
        self.raw("\n")
    }
}
