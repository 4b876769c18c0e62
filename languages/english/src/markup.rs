//! Scanner for the COCA dictionary page dialect.
//!
//! Pages are loose HTML fragments: a `<pre>` wrapper, an audio `<span>`, the
//! headword as bare text and a run of `<div>` containers, sometimes nested
//! and sometimes unterminated. Only the pieces the parser needs are
//! recognized; this is not a general HTML tokenizer.

const BLOCK_TAG: &str = "div";

/// One `<div>` container, borrowed from the page
#[derive(Debug, Clone, Copy)]
pub struct BlockNode<'a> {
    attrs: &'a str,
    inner: &'a str,
}

impl<'a> BlockNode<'a> {
    /// Raw attribute text of the start tag
    pub fn attrs(&self) -> &'a str {
        self.attrs
    }

    /// Raw markup between the start tag and its matching end tag
    pub fn inner_html(&self) -> &'a str {
        self.inner
    }

    /// Text content with tags removed and entities decoded, trimmed
    pub fn text(&self) -> String {
        text_content(self.inner).trim().to_string()
    }

    /// Whether the inline style sets `color` to `color`, case-insensitive
    pub fn has_color(&self, color: &str) -> bool {
        attribute(self.attrs, "style")
            .map(|style| style_color_is(&style, color))
            .unwrap_or(false)
    }

    /// An empty container or one holding a single line break: the block separator
    pub fn is_line_break(&self) -> bool {
        let inner = self.inner.trim();
        if inner.is_empty() {
            return true;
        }
        if !inner.starts_with('<') || !inner.ends_with('>') {
            return false;
        }

        let tag = inner[1..inner.len() - 1]
            .trim_end_matches('/')
            .trim()
            .to_ascii_lowercase();
        tag == "br"
    }
}

/// Lazily yields every `<div>` of a page in document order, outer before inner
pub struct BlockNodes<'a> {
    html: &'a str,
    lower: String,
    pos: usize,
}

impl<'a> BlockNodes<'a> {
    pub fn new(html: &'a str) -> Self {
        Self {
            html,
            lower: html.to_ascii_lowercase(),
            pos: 0,
        }
    }

    /// Byte offset of the next `<div` start tag at or after `from`
    fn find_open(&self, from: usize) -> Option<usize> {
        let needle = format!("<{BLOCK_TAG}");
        let mut cursor = from;

        while let Some(offset) = self.lower.get(cursor..)?.find(&needle) {
            let at = cursor + offset;
            let after = self.lower.as_bytes().get(at + needle.len()).copied();
            match after {
                Some(b'>' | b'/') => return Some(at),
                Some(c) if c.is_ascii_whitespace() => return Some(at),
                None => return None,
                _ => cursor = at + needle.len(),
            }
        }

        None
    }

    /// Byte offset of the end tag matching a container whose content starts
    /// at `content_start`; `None` when the container is never closed
    fn find_close(&self, content_start: usize) -> Option<usize> {
        let close = format!("</{BLOCK_TAG}");
        let mut depth = 1usize;
        let mut cursor = content_start;

        loop {
            let next_close = cursor + self.lower.get(cursor..)?.find(&close)?;
            match self.find_open(cursor) {
                Some(open) if open < next_close => {
                    depth += 1;
                    cursor = open + 1;
                }
                _ => {
                    depth -= 1;
                    if depth == 0 {
                        return Some(next_close);
                    }
                    cursor = next_close + close.len();
                }
            }
        }
    }
}

impl<'a> Iterator for BlockNodes<'a> {
    type Item = BlockNode<'a>;

    fn next(&mut self) -> Option<Self::Item> {
        let open = self.find_open(self.pos)?;
        let attrs_start = open + 1 + BLOCK_TAG.len();
        let Some(tag_end) = start_tag_end(self.html, attrs_start) else {
            self.pos = self.html.len();
            return None;
        };

        let content_start = tag_end + 1;
        let content_end = self.find_close(content_start).unwrap_or(self.html.len());

        // Continue inside this container so nested blocks follow their parent
        self.pos = content_start;

        Some(BlockNode {
            attrs: self.html[attrs_start..tag_end].trim_end_matches('/'),
            inner: &self.html[content_start..content_end],
        })
    }
}

/// Offset of the `>` closing a start tag, skipping quoted attribute values
fn start_tag_end(html: &str, from: usize) -> Option<usize> {
    let mut quote: Option<u8> = None;

    for (offset, byte) in html.as_bytes().get(from..)?.iter().enumerate() {
        match (quote, *byte) {
            (Some(q), b) if b == q => quote = None,
            (Some(_), _) => {}
            (None, b'\'' | b'"') => quote = Some(*byte),
            (None, b'>') => return Some(from + offset),
            (None, _) => {}
        }
    }

    None
}

/// Value of the first attribute called `name` in raw start-tag attribute text
pub fn attribute(attrs: &str, name: &str) -> Option<String> {
    let bytes = attrs.as_bytes();
    let mut i = 0;

    while i < bytes.len() {
        while i < bytes.len() && (bytes[i].is_ascii_whitespace() || bytes[i] == b'/') {
            i += 1;
        }

        let name_start = i;
        while i < bytes.len() && !matches!(bytes[i], b'=' | b'>' | b'/') && !bytes[i].is_ascii_whitespace()
        {
            i += 1;
        }
        let attr_name = &attrs[name_start..i];

        while i < bytes.len() && bytes[i].is_ascii_whitespace() {
            i += 1;
        }

        let mut value = None;
        if i < bytes.len() && bytes[i] == b'=' {
            i += 1;
            while i < bytes.len() && bytes[i].is_ascii_whitespace() {
                i += 1;
            }

            if i < bytes.len() && matches!(bytes[i], b'\'' | b'"') {
                let q = bytes[i];
                let value_start = i + 1;
                i = value_start;
                while i < bytes.len() && bytes[i] != q {
                    i += 1;
                }
                value = Some(&attrs[value_start..i]);
                i = (i + 1).min(bytes.len());
            } else {
                let value_start = i;
                while i < bytes.len() && !bytes[i].is_ascii_whitespace() {
                    i += 1;
                }
                value = Some(&attrs[value_start..i]);
            }
        }

        if attr_name.is_empty() {
            if value.is_none() {
                i += 1;
            }
            continue;
        }

        if attr_name.eq_ignore_ascii_case(name) {
            return Some(decode_entities(value.unwrap_or("")));
        }
    }

    None
}

fn style_color_is(style: &str, color: &str) -> bool {
    style.split(';').any(|declaration| {
        declaration
            .split_once(':')
            .map(|(property, value)| {
                property.trim().eq_ignore_ascii_case("color")
                    && value.trim().eq_ignore_ascii_case(color)
            })
            .unwrap_or(false)
    })
}

/// Value of `attr` on the first element whose class list contains `class`
pub fn find_tagged_attribute(html: &str, class: &str, attr: &str) -> Option<String> {
    let mut cursor = 0;

    while let Some(offset) = html.get(cursor..)?.find('<') {
        let tag_start = cursor + offset + 1;
        let Some(tag_end) = start_tag_end(html, tag_start) else {
            return None;
        };
        cursor = tag_end + 1;

        let tag = &html[tag_start..tag_end];
        if tag.starts_with('/') || tag.starts_with('!') {
            continue;
        }

        let attrs = tag.trim_start_matches(|c: char| c.is_ascii_alphanumeric());
        let has_class = attribute(attrs, "class")
            .map(|classes| classes.split_whitespace().any(|c| c == class))
            .unwrap_or(false);

        if has_class {
            return attribute(attrs, attr).filter(|value| !value.is_empty());
        }
    }

    None
}

/// Text of a markup fragment: tags dropped, entities decoded
pub fn text_content(fragment: &str) -> String {
    let mut text = String::with_capacity(fragment.len());
    let mut rest = fragment;

    while let Some(open) = rest.find('<') {
        text.push_str(&rest[..open]);
        match rest[open..].find('>') {
            Some(close) => rest = &rest[open + close + 1..],
            None => {
                rest = "";
                break;
            }
        }
    }
    text.push_str(rest);

    decode_entities(&text)
}

/// Decode the named entities the dialect uses plus numeric references
pub fn decode_entities(text: &str) -> String {
    if !text.contains('&') {
        return text.to_string();
    }

    let mut out = String::with_capacity(text.len());
    let mut rest = text;

    while let Some(amp) = rest.find('&') {
        out.push_str(&rest[..amp]);
        rest = &rest[amp..];

        let decoded = rest
            .find(';')
            .filter(|&end| end <= 10)
            .and_then(|end| decode_entity(&rest[1..end]).map(|c| (c, end)));

        match decoded {
            Some((c, end)) => {
                out.push(c);
                rest = &rest[end + 1..];
            }
            None => {
                out.push('&');
                rest = &rest[1..];
            }
        }
    }
    out.push_str(rest);

    out
}

fn decode_entity(name: &str) -> Option<char> {
    match name {
        "amp" => Some('&'),
        "lt" => Some('<'),
        "gt" => Some('>'),
        "quot" => Some('"'),
        "apos" => Some('\''),
        "nbsp" => Some(' '),
        _ => {
            let code = name.strip_prefix('#')?;
            let value = match code.strip_prefix(['x', 'X']) {
                Some(hex) => u32::from_str_radix(hex, 16).ok()?,
                None => code.parse().ok()?,
            };
            char::from_u32(value)
        }
    }
}
