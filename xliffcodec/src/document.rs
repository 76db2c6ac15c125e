//! A small owned XML tree used on both sides of the codec.
//!
//! Decoding parses a file into a [`TranslationDocument`] before the version is
//! known; encoding builds one from scratch and serialises it. Only elements,
//! attributes and text are kept. Comments, processing instructions and the
//! doctype are dropped.

use std::io::{BufRead, Read, Write};

use quick_xml::{
    Reader, Writer,
    events::{BytesDecl, BytesEnd, BytesStart, BytesText, Event},
};

use crate::{error::Error, traits::Parser, version::XliffVersion};

/// A parsed or freshly built XML document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TranslationDocument {
    root: XmlElement,
}

/// Child node of an [`XmlElement`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum XmlNode {
    Element(XmlElement),
    Text(String),
}

/// One element: qualified name as written, attributes in source order, children.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct XmlElement {
    name: String,
    attributes: Vec<(String, String)>,
    children: Vec<XmlNode>,
}

impl TranslationDocument {
    pub fn new(root: XmlElement) -> Self {
        Self { root }
    }

    pub fn root(&self) -> &XmlElement {
        &self.root
    }

    pub fn into_root(self) -> XmlElement {
        self.root
    }

    /// Shorthand for [`crate::version::detect_version`].
    pub fn version(&self) -> Option<XliffVersion> {
        crate::version::detect_version(self)
    }

    /// Serialises the document as an indented UTF-8 string.
    pub fn to_xml_string(&self) -> Result<String, Error> {
        let mut out = Vec::new();
        self.to_writer(&mut out)?;
        String::from_utf8(out).map_err(|e| Error::malformed(e.to_string()))
    }

    fn parse_str(content: &str) -> Result<Self, Error> {
        let mut reader = Reader::from_str(content);
        reader.config_mut().trim_text(false);

        let mut stack: Vec<XmlElement> = Vec::new();
        let mut root: Option<XmlElement> = None;

        loop {
            match reader.read_event()? {
                Event::Start(ref e) => {
                    if stack.is_empty() && root.is_some() {
                        return Err(Error::malformed("document has more than one root element"));
                    }
                    stack.push(XmlElement::from_start(e)?);
                }
                Event::Empty(ref e) => {
                    let element = XmlElement::from_start(e)?;
                    attach(&mut stack, &mut root, element)?;
                }
                Event::End(_) => {
                    let element = stack
                        .pop()
                        .ok_or_else(|| Error::malformed("unexpected closing tag"))?;
                    attach(&mut stack, &mut root, element)?;
                }
                Event::Text(ref t) => {
                    let text = t.unescape()?;
                    match stack.last_mut() {
                        Some(parent) => parent.push_text(text.as_ref()),
                        None if text.trim().is_empty() => {}
                        None => {
                            return Err(Error::malformed("text content outside the root element"));
                        }
                    }
                }
                Event::CData(c) => {
                    let text = String::from_utf8(c.into_inner().into_owned())
                        .map_err(|e| Error::malformed(e.to_string()))?;
                    match stack.last_mut() {
                        Some(parent) => parent.push_text(text),
                        None => return Err(Error::malformed("CDATA outside the root element")),
                    }
                }
                Event::Eof => break,
                _ => {}
            }
        }

        if let Some(open) = stack.last() {
            return Err(Error::malformed(format!("element <{}> is not closed", open.name)));
        }
        root.map(TranslationDocument::new)
            .ok_or_else(|| Error::malformed("document has no root element"))
    }
}

fn attach(
    stack: &mut [XmlElement],
    root: &mut Option<XmlElement>,
    element: XmlElement,
) -> Result<(), Error> {
    match stack.last_mut() {
        Some(parent) => {
            parent.children.push(XmlNode::Element(element));
            Ok(())
        }
        None if root.is_none() => {
            *root = Some(element);
            Ok(())
        }
        None => Err(Error::malformed("document has more than one root element")),
    }
}

impl Parser for TranslationDocument {
    /// A byte-order mark selects UTF-8 or UTF-16; otherwise a non-UTF-8
    /// `encoding` declaration is honoured. The content is transcoded to UTF-8
    /// before parsing.
    fn from_reader<R: BufRead>(mut reader: R) -> Result<Self, Error> {
        let mut bytes = Vec::new();
        reader.read_to_end(&mut bytes)?;
        let content = decode_text(&bytes)?;
        Self::parse_str(&content)
    }

    /// Writes a UTF-8 declaration followed by the indented element tree.
    fn to_writer<W: Write>(&self, mut writer: W) -> Result<(), Error> {
        let mut xml_writer = Writer::new_with_indent(&mut writer, b' ', 2);
        xml_writer.write_event(Event::Decl(BytesDecl::new("1.0", Some("UTF-8"), None)))?;
        write_element(&mut xml_writer, &self.root)?;
        writer.write_all(b"\n")?;
        Ok(())
    }
}

fn write_element<W: Write>(writer: &mut Writer<W>, element: &XmlElement) -> Result<(), Error> {
    let mut start = BytesStart::new(element.name.as_str());
    for (key, value) in &element.attributes {
        start.push_attribute((key.as_str(), value.as_str()));
    }

    if element.children.is_empty() {
        writer.write_event(Event::Empty(start))?;
        return Ok(());
    }

    writer.write_event(Event::Start(start))?;
    for child in &element.children {
        match child {
            XmlNode::Element(child) => write_element(writer, child)?,
            XmlNode::Text(text) => writer.write_event(Event::Text(BytesText::new(text)))?,
        }
    }
    writer.write_event(Event::End(BytesEnd::new(element.name.as_str())))?;
    Ok(())
}

fn decode_text(bytes: &[u8]) -> Result<String, Error> {
    let mut decoder = encoding_rs_io::DecodeReaderBytesBuilder::new()
        .encoding(declared_encoding(bytes))
        .bom_override(true)
        .build(bytes);

    let mut decoded = String::new();
    decoder.read_to_string(&mut decoded).map_err(|e| {
        if e.kind() == std::io::ErrorKind::InvalidData {
            Error::malformed(format!("input is not valid UTF-8: {e}"))
        } else {
            Error::Io(e)
        }
    })?;
    match decoded.strip_prefix('\u{FEFF}') {
        Some(rest) => Ok(rest.to_string()),
        None => Ok(decoded),
    }
}

// Encoding named by `<?xml ... encoding="..."?>`, when it is not UTF-8.
fn declared_encoding(bytes: &[u8]) -> Option<&'static encoding_rs::Encoding> {
    let head = bytes.strip_prefix(b"<?xml")?;
    let end = head.windows(2).position(|w| w == b"?>")?;
    let decl = std::str::from_utf8(&head[..end]).ok()?;

    let rest = &decl[decl.find("encoding")? + "encoding".len()..];
    let rest = rest.trim_start().strip_prefix('=')?.trim_start();
    let quote = rest.chars().next().filter(|c| *c == '"' || *c == '\'')?;
    let label = &rest[1..];
    let label = &label[..label.find(quote)?];

    encoding_rs::Encoding::for_label(label.as_bytes())
        .filter(|encoding| *encoding != encoding_rs::UTF_8)
}

impl XmlElement {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            attributes: Vec::new(),
            children: Vec::new(),
        }
    }

    fn from_start(start: &BytesStart) -> Result<Self, Error> {
        let name = std::str::from_utf8(start.name().as_ref())
            .map_err(|e| Error::malformed(e.to_string()))?
            .to_string();
        let mut element = XmlElement::new(name);
        for attr in start.attributes() {
            let attr = attr?;
            let key = std::str::from_utf8(attr.key.as_ref())
                .map_err(|e| Error::malformed(e.to_string()))?
                .to_string();
            let value = attr.unescape_value()?.into_owned();
            element.attributes.push((key, value));
        }
        Ok(element)
    }

    /// Builder form of [`XmlElement::set_attribute`].
    pub fn with_attribute(mut self, key: &str, value: impl Into<String>) -> Self {
        self.set_attribute(key, value);
        self
    }

    /// Builder form of [`XmlElement::push_child`].
    pub fn with_child(mut self, child: XmlElement) -> Self {
        self.push_child(child);
        self
    }

    /// Builder form of [`XmlElement::push_text`].
    pub fn with_text(mut self, text: impl Into<String>) -> Self {
        self.push_text(text);
        self
    }

    /// Sets or replaces an attribute, keeping its original position.
    pub fn set_attribute(&mut self, key: &str, value: impl Into<String>) {
        let value = value.into();
        match self.attributes.iter_mut().find(|(k, _)| k == key) {
            Some((_, existing)) => *existing = value,
            None => self.attributes.push((key.to_string(), value)),
        }
    }

    pub fn push_child(&mut self, child: XmlElement) {
        self.children.push(XmlNode::Element(child));
    }

    /// Appends text; empty strings add nothing so the element stays self-closing.
    pub fn push_text(&mut self, text: impl Into<String>) {
        let text = text.into();
        if text.is_empty() {
            return;
        }
        match self.children.last_mut() {
            Some(XmlNode::Text(existing)) => existing.push_str(&text),
            _ => self.children.push(XmlNode::Text(text)),
        }
    }

    /// Qualified name, prefix included.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Name without its namespace prefix.
    pub fn local_name(&self) -> &str {
        self.name
            .split_once(':')
            .map_or(self.name.as_str(), |(_, local)| local)
    }

    pub fn prefix(&self) -> Option<&str> {
        self.name.split_once(':').map(|(prefix, _)| prefix)
    }

    pub fn attribute(&self, key: &str) -> Option<&str> {
        self.attributes
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }

    pub fn attributes(&self) -> &[(String, String)] {
        &self.attributes
    }

    pub fn children(&self) -> &[XmlNode] {
        &self.children
    }

    /// The namespace URI declared on this element for its own prefix.
    pub fn declared_namespace(&self) -> Option<&str> {
        match self.prefix() {
            Some(prefix) => self.attribute(&format!("xmlns:{prefix}")),
            None => self.attribute("xmlns"),
        }
    }

    /// Direct child elements.
    pub fn elements(&self) -> impl Iterator<Item = &XmlElement> {
        self.children.iter().filter_map(|node| match node {
            XmlNode::Element(element) => Some(element),
            XmlNode::Text(_) => None,
        })
    }

    /// Direct child elements with the given local name.
    pub fn elements_named<'a>(&'a self, local: &'a str) -> impl Iterator<Item = &'a XmlElement> {
        self.elements().filter(move |e| e.local_name() == local)
    }

    /// First direct child element with the given local name.
    pub fn child(&self, local: &str) -> Option<&XmlElement> {
        self.elements().find(|e| e.local_name() == local)
    }

    /// All descendants with the given local name, in document order.
    /// Matched elements are not searched further.
    pub fn descendants_named<'a>(&'a self, local: &str) -> Vec<&'a XmlElement> {
        let mut found = Vec::new();
        collect_descendants(self, local, &mut found);
        found
    }

    /// Concatenated text of this element and all of its descendants.
    pub fn text(&self) -> String {
        let mut out = String::new();
        collect_text(self, &mut out);
        out
    }
}

fn collect_descendants<'a>(element: &'a XmlElement, local: &str, found: &mut Vec<&'a XmlElement>) {
    for child in element.elements() {
        if child.local_name() == local {
            found.push(child);
        } else {
            collect_descendants(child, local, found);
        }
    }
}

fn collect_text(element: &XmlElement, out: &mut String) {
    for child in &element.children {
        match child {
            XmlNode::Text(text) => out.push_str(text),
            XmlNode::Element(child) => collect_text(child, out),
        }
    }
}
