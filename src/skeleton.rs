//! Page skeleton: the fixed HTML document whose containers receive rendered
//! fragments.
//!
//! Containers are found by `id` in a tag stream of the skeleton source. The
//! same stream answers [`Skeleton::require`] and locates the bytes that
//! insertion rewrites, so a container that passes the check is the one that
//! gets filled. Comments, doctype/processing declarations and raw-text
//! elements (`script`, `style`, `textarea`, `title`) are skipped; attribute
//! names match case-insensitively and values may be double-quoted,
//! single-quoted or unquoted.

use scraper::{Html, Selector};

use crate::render::escape;
use crate::{Error, Result};

const BUILTIN: &str = include_str!("../assets/index.html");

/// Elements that cannot hold content
const VOID_ELEMENTS: &[&str] = &[
    "area", "base", "br", "col", "embed", "hr", "img", "input", "link", "meta", "source", "track",
    "wbr",
];

/// Elements whose content is not markup
const RAW_TEXT_ELEMENTS: &[&str] = &["script", "style", "textarea", "title"];

/// An HTML page skeleton being filled in
#[derive(Debug, Clone)]
pub struct Skeleton {
    html: String,
}

impl Skeleton {
    pub fn new(html: impl Into<String>) -> Self {
        Self { html: html.into() }
    }

    /// The skeleton shipped with the crate
    pub fn builtin() -> Self {
        Self::new(BUILTIN)
    }

    pub fn load(path: impl AsRef<std::path::Path>) -> Result<Self> {
        let path = path.as_ref();
        let html = std::fs::read_to_string(path).map_err(|e| {
            Error::ConfigError(format!("failed to read skeleton {}: {}", path.display(), e))
        })?;
        Ok(Self::new(html))
    }

    pub fn as_str(&self) -> &str {
        &self.html
    }

    pub fn into_html(self) -> String {
        self.html
    }

    /// Fail with [`Error::MissingContainer`] on the first id not present in
    /// the document.
    pub fn require(&self, ids: &[&str]) -> Result<()> {
        let tags = tokenize(&self.html);
        for id in ids {
            if find_by_id(&tags, id).is_none() {
                return Err(Error::MissingContainer(id.to_string()));
            }
        }
        Ok(())
    }

    /// Values of the project filter controls (`.projects__filter[data-filter]`)
    pub fn filter_values(&self) -> Result<Vec<String>> {
        let document = Html::parse_document(&self.html);
        let sel = selector(".projects__filter[data-filter]")?;
        Ok(document
            .select(&sel)
            .filter_map(|b| b.value().attr("data-filter"))
            .map(str::to_string)
            .collect())
    }

    /// Replace the content of the element with the given id.
    pub fn set_inner_html(&mut self, id: &str, markup: &str) -> Result<()> {
        let tags = tokenize(&self.html);
        let index = find_by_id(&tags, id).ok_or_else(|| Error::MissingContainer(id.to_string()))?;
        let open = &tags[index];
        if open.self_closing || VOID_ELEMENTS.contains(&open.name.as_str()) {
            return Err(Error::RenderError(format!(
                "container `{}` is a <{}> element and cannot hold content",
                id, open.name
            )));
        }
        let close = find_matching_close(&tags, index).ok_or_else(|| {
            Error::RenderError(format!("container `{}` has no closing </{}>", id, open.name))
        })?;
        self.html.replace_range(open.end..close, markup);
        log::debug!("filled #{} with {} bytes", id, markup.len());
        Ok(())
    }

    /// Replace the content of an element with escaped text.
    pub fn set_text(&mut self, id: &str, text: &str) -> Result<()> {
        self.set_inner_html(id, &escape(text))
    }

    /// Set (or add) an attribute on the element with the given id.
    pub fn set_attr(&mut self, id: &str, name: &str, value: &str) -> Result<()> {
        let tags = tokenize(&self.html);
        let index = find_by_id(&tags, id).ok_or_else(|| Error::MissingContainer(id.to_string()))?;
        let open = &tags[index];
        let attr = format!(r#"{}="{}""#, name, escape(value));

        match open.attrs.iter().find(|a| a.name.eq_ignore_ascii_case(name)) {
            Some(existing) => self.html.replace_range(existing.start..existing.end, &attr),
            None => {
                let insert_at = open.attrs_end;
                self.html.insert_str(insert_at, &format!(" {}", attr));
            }
        }
        Ok(())
    }
}

impl Default for Skeleton {
    fn default() -> Self {
        Self::builtin()
    }
}

#[derive(Debug, Clone)]
struct Attr {
    /// Lowercased name
    name: String,
    value: Option<String>,
    /// Byte span of the whole `name=value` text
    start: usize,
    end: usize,
}

#[derive(Debug, Clone)]
enum TagKind {
    Open,
    Close,
}

#[derive(Debug, Clone)]
struct Tag {
    kind: TagKind,
    /// Lowercased element name
    name: String,
    start: usize,
    end: usize,
    attrs: Vec<Attr>,
    /// Offset just past the last attribute, before any `/` or `>`
    attrs_end: usize,
    self_closing: bool,
}

impl Tag {
    fn id(&self) -> Option<&str> {
        self.attrs
            .iter()
            .find(|a| a.name == "id")
            .and_then(|a| a.value.as_deref())
    }
}

fn find_by_id(tags: &[Tag], id: &str) -> Option<usize> {
    tags.iter()
        .position(|t| matches!(t.kind, TagKind::Open) && t.id() == Some(id))
}

/// Byte offset of the close tag matching the open tag at `open`, accounting
/// for nested elements of the same name.
fn find_matching_close(tags: &[Tag], open: usize) -> Option<usize> {
    let name = &tags[open].name;
    let mut depth = 1usize;
    for tag in &tags[open + 1..] {
        if &tag.name != name {
            continue;
        }
        match tag.kind {
            TagKind::Open if !tag.self_closing => depth += 1,
            TagKind::Open => {}
            TagKind::Close => {
                depth -= 1;
                if depth == 0 {
                    return Some(tag.start);
                }
            }
        }
    }
    None
}

/// Split `html` into its element tags, skipping comments, declarations and
/// the content of raw-text elements.
fn tokenize(html: &str) -> Vec<Tag> {
    let bytes = html.as_bytes();
    let mut tags = Vec::new();
    let mut pos = 0;

    while let Some(offset) = html[pos..].find('<') {
        let start = pos + offset;
        let rest = &html[start..];

        if rest.starts_with("<!--") {
            pos = match rest[4..].find("-->") {
                Some(end) => start + 4 + end + 3,
                None => html.len(),
            };
            continue;
        }
        if rest.starts_with("<!") || rest.starts_with("<?") {
            pos = rest.find('>').map_or(html.len(), |end| start + end + 1);
            continue;
        }

        let (kind, name_start) = if rest.starts_with("</") {
            (TagKind::Close, start + 2)
        } else {
            (TagKind::Open, start + 1)
        };
        if !bytes.get(name_start).is_some_and(|b| b.is_ascii_alphabetic()) {
            pos = start + 1;
            continue;
        }

        let mut i = name_start;
        while i < bytes.len() && !is_tag_name_end(bytes[i]) {
            i += 1;
        }
        let name = html[name_start..i].to_ascii_lowercase();

        let (attrs, attrs_end, end, self_closing) = parse_attrs(html, i);
        let is_raw = matches!(kind, TagKind::Open) && RAW_TEXT_ELEMENTS.contains(&name.as_str());
        tags.push(Tag {
            kind,
            name: name.clone(),
            start,
            end,
            attrs,
            attrs_end,
            self_closing,
        });
        pos = end;

        if is_raw && !self_closing {
            let lower = html[pos..].to_ascii_lowercase();
            match lower.find(&format!("</{}", name)) {
                Some(close) => pos += close,
                None => break,
            }
        }
    }
    tags
}

fn is_tag_name_end(b: u8) -> bool {
    b.is_ascii_whitespace() || b == b'>' || b == b'/'
}

/// Parse attributes from `from` up to the closing `>`. Returns the
/// attributes, the end of the last attribute, the offset past `>` and whether
/// the tag was written self-closing.
fn parse_attrs(html: &str, from: usize) -> (Vec<Attr>, usize, usize, bool) {
    let bytes = html.as_bytes();
    let mut attrs = Vec::new();
    let mut i = from;
    let mut attrs_end = from;

    loop {
        while i < bytes.len() && bytes[i].is_ascii_whitespace() {
            i += 1;
        }
        match bytes.get(i) {
            None => return (attrs, attrs_end, html.len(), false),
            Some(b'>') => return (attrs, attrs_end, i + 1, false),
            Some(b'/') if bytes.get(i + 1) == Some(&b'>') => {
                return (attrs, attrs_end, i + 2, true)
            }
            Some(b'/') => {
                i += 1;
                continue;
            }
            Some(_) => {}
        }

        let start = i;
        while i < bytes.len() && !bytes[i].is_ascii_whitespace() && !matches!(bytes[i], b'=' | b'>' | b'/') {
            i += 1;
        }
        let name = html[start..i].to_ascii_lowercase();

        let mut j = i;
        while j < bytes.len() && bytes[j].is_ascii_whitespace() {
            j += 1;
        }
        let mut value = None;
        if bytes.get(j) == Some(&b'=') {
            j += 1;
            while j < bytes.len() && bytes[j].is_ascii_whitespace() {
                j += 1;
            }
            match bytes.get(j) {
                Some(&q) if q == b'"' || q == b'\'' => {
                    let close = html[j + 1..].find(q as char).map_or(html.len(), |e| j + 1 + e);
                    value = Some(html[j + 1..close].to_string());
                    i = (close + 1).min(html.len());
                }
                _ => {
                    let vstart = j;
                    while j < bytes.len() && !bytes[j].is_ascii_whitespace() && bytes[j] != b'>' {
                        j += 1;
                    }
                    value = Some(html[vstart..j].to_string());
                    i = j;
                }
            }
        }
        attrs.push(Attr {
            name,
            value,
            start,
            end: i,
        });
        attrs_end = i;
    }
}

pub(crate) fn selector(css: &str) -> Result<Selector> {
    Selector::parse(css).map_err(|e| Error::RenderError(format!("bad selector `{}`: {:?}", css, e)))
}
