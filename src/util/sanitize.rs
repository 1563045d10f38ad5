//! Allow-list HTML sanitizer and the markdown-to-safe-HTML pipeline.
//!
//! DESIGN
//! ======
//! Post content passes through here before it is stored as a draft and before
//! it is rendered anywhere. The sanitizer keeps a fixed set of formatting
//! tags, strips every attribute not explicitly allowed for its tag, drops
//! `script`/`style` elements together with their text content, and rejects
//! URL attributes whose scheme is not http(s). One carve-out: `<iframe>`
//! survives when its `src` sits on an allow-listed video-embed prefix, and is
//! rebuilt with a fixed attribute set regardless of what the author wrote.
//!
//! Unknown harmless tags (`div`, `span`, ...) are unwrapped: the tag goes,
//! the children stay. Malformed markup degrades to escaped text, never to an
//! element.

#[cfg(test)]
#[path = "sanitize_test.rs"]
mod sanitize_test;

use pulldown_cmark::{Options, Parser, html};

/// Formatting tags that survive sanitization.
const ALLOWED_TAGS: &[&str] = &[
    "p", "br", "strong", "em", "u", "s", "del", "h1", "h2", "h3", "blockquote", "ul", "ol", "li",
    "code", "pre", "a", "img",
];

/// Allowed tags that never take a closing tag.
const VOID_TAGS: &[&str] = &["br", "img"];

/// Embed-source prefixes the iframe carve-out accepts.
const EMBED_PREFIXES: &[&str] = &[
    "https://www.youtube.com/embed/",
    "https://www.youtube-nocookie.com/embed/",
];

/// Render composer markdown to sanitized HTML.
///
/// Raw HTML written in the markdown flows into [`sanitize_html`] rather than
/// being dropped wholesale, so allow-listed tags typed by the author survive.
#[must_use]
pub fn render_post_html(markdown: &str) -> String {
    let mut options = Options::empty();
    options.insert(Options::ENABLE_STRIKETHROUGH);
    let parser = Parser::new_ext(markdown, options);
    let mut rendered = String::new();
    html::push_html(&mut rendered, parser);
    sanitize_html(&rendered)
}

/// Filter an HTML fragment down to the allow-list.
#[must_use]
pub fn sanitize_html(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    let mut rest = input;
    while let Some(lt) = rest.find('<') {
        out.push_str(&rest[..lt]);
        rest = &rest[lt..];

        if rest.starts_with("<!--") {
            let end = rest.find("-->").map_or(rest.len(), |i| i + 3);
            rest = &rest[end..];
            continue;
        }
        if rest.starts_with("<!") || rest.starts_with("<?") {
            let end = rest.find('>').map_or(rest.len(), |i| i + 1);
            rest = &rest[end..];
            continue;
        }

        let Some(tag) = parse_tag(rest) else {
            // Not a tag: escape the '<' and keep going.
            out.push_str("&lt;");
            rest = &rest[1..];
            continue;
        };
        let after_tag = &rest[tag.len..];

        if tag.closing {
            if is_allowed(&tag.name) && !is_void(&tag.name) {
                out.push_str("</");
                out.push_str(&tag.name);
                out.push('>');
            }
            rest = after_tag;
            continue;
        }

        match tag.name.as_str() {
            "script" | "style" => {
                rest = skip_element_content(after_tag, &tag.name);
            }
            "iframe" => {
                let attrs = parse_attrs(tag.attrs);
                let src = attrs
                    .iter()
                    .find(|(name, _)| name == "src")
                    .map(|(_, value)| value.as_str())
                    .filter(|url| embed_allowed(url));
                if let Some(url) = src {
                    out.push_str("<iframe src=\"");
                    out.push_str(&escape_attr(url));
                    out.push_str("\" allowfullscreen></iframe>");
                }
                rest = skip_element_content(after_tag, "iframe");
            }
            name if is_allowed(name) => {
                write_open_tag(&mut out, name, tag.attrs);
                rest = after_tag;
            }
            // Unknown tag: unwrap it, keep its children.
            _ => rest = after_tag,
        }
    }
    out.push_str(rest);
    out
}

struct RawTag<'a> {
    /// Lowercased tag name.
    name: String,
    closing: bool,
    /// Raw source between the name and the closing `>`.
    attrs: &'a str,
    /// Bytes consumed from `<` through `>` inclusive.
    len: usize,
}

/// Parse one tag at the start of `src` (which begins with `<`).
///
/// Returns `None` for anything that is not a complete tag, including an
/// unterminated one; the caller then treats the `<` as text.
fn parse_tag(src: &str) -> Option<RawTag<'_>> {
    let bytes = src.as_bytes();
    let mut i = 1;
    let closing = bytes.get(1) == Some(&b'/');
    if closing {
        i = 2;
    }
    let name_start = i;
    while i < bytes.len() && bytes[i].is_ascii_alphanumeric() {
        i += 1;
    }
    if i == name_start {
        return None;
    }
    let name = src[name_start..i].to_ascii_lowercase();

    // Scan to the closing '>' without being fooled by one inside quotes.
    let attrs_start = i;
    let mut in_quote: Option<u8> = None;
    while i < bytes.len() {
        let byte = bytes[i];
        match in_quote {
            Some(quote) if byte == quote => in_quote = None,
            Some(_) => {}
            None if byte == b'"' || byte == b'\'' => in_quote = Some(byte),
            None if byte == b'>' => {
                return Some(RawTag { name, closing, attrs: &src[attrs_start..i], len: i + 1 });
            }
            None => {}
        }
        i += 1;
    }
    None
}

/// Skip past the matching close tag, dropping everything in between.
fn skip_element_content<'a>(src: &'a str, name: &str) -> &'a str {
    let lower = src.to_ascii_lowercase();
    let close = format!("</{name}");
    match lower.find(&close) {
        Some(idx) => {
            let tail = &src[idx..];
            match tail.find('>') {
                Some(gt) => &tail[gt + 1..],
                None => "",
            }
        }
        None => "",
    }
}

fn write_open_tag(out: &mut String, name: &str, attrs_src: &str) {
    out.push('<');
    out.push_str(name);
    for (attr, value) in parse_attrs(attrs_src) {
        if !allowed_attr(name, &attr) {
            continue;
        }
        if matches!(attr.as_str(), "href" | "src") && !safe_url(&value) {
            continue;
        }
        out.push(' ');
        out.push_str(&attr);
        out.push_str("=\"");
        out.push_str(&escape_attr(&value));
        out.push('"');
    }
    out.push('>');
}

/// Parse `name`, `name=bare`, `name="quoted"`, and `name='quoted'` pairs.
/// Attribute names are lowercased; a value-less attribute yields `""`.
fn parse_attrs(src: &str) -> Vec<(String, String)> {
    let bytes = src.as_bytes();
    let mut attrs = Vec::new();
    let mut i = 0;
    while i < bytes.len() {
        while i < bytes.len() && (bytes[i].is_ascii_whitespace() || bytes[i] == b'/') {
            i += 1;
        }
        let name_start = i;
        while i < bytes.len()
            && !bytes[i].is_ascii_whitespace()
            && bytes[i] != b'='
            && bytes[i] != b'/'
        {
            i += 1;
        }
        if i == name_start {
            break;
        }
        let name = src[name_start..i].to_ascii_lowercase();
        while i < bytes.len() && bytes[i].is_ascii_whitespace() {
            i += 1;
        }
        let mut value = String::new();
        if i < bytes.len() && bytes[i] == b'=' {
            i += 1;
            while i < bytes.len() && bytes[i].is_ascii_whitespace() {
                i += 1;
            }
            if i < bytes.len() && (bytes[i] == b'"' || bytes[i] == b'\'') {
                let quote = bytes[i];
                i += 1;
                let value_start = i;
                while i < bytes.len() && bytes[i] != quote {
                    i += 1;
                }
                value = src[value_start..i].to_owned();
                if i < bytes.len() {
                    i += 1;
                }
            } else {
                let value_start = i;
                while i < bytes.len() && !bytes[i].is_ascii_whitespace() {
                    i += 1;
                }
                value = src[value_start..i].to_owned();
            }
        }
        attrs.push((name, value));
    }
    attrs
}

fn is_allowed(name: &str) -> bool {
    ALLOWED_TAGS.contains(&name)
}

fn is_void(name: &str) -> bool {
    VOID_TAGS.contains(&name)
}

fn allowed_attr(tag: &str, attr: &str) -> bool {
    match tag {
        "a" => matches!(attr, "href" | "title"),
        "img" => matches!(attr, "src" | "alt" | "title"),
        _ => false,
    }
}

/// Accept relative URLs and absolute http(s) URLs; reject everything else.
///
/// Control characters and whitespace are removed before inspection (browsers
/// ignore them when parsing schemes), and an entity-encoded character in the
/// scheme position rejects the URL outright since it could hide a scheme from
/// this scanner.
fn safe_url(url: &str) -> bool {
    let cleaned: String = url.chars().filter(|c| *c > '\u{20}').collect();
    let head_end = cleaned.find(['/', '?', '#']).unwrap_or(cleaned.len());
    let head = &cleaned[..head_end];
    if head.contains('&') {
        return false;
    }
    match head.find(':') {
        None => true,
        Some(idx) => matches!(cleaned[..idx].to_ascii_lowercase().as_str(), "http" | "https"),
    }
}

fn embed_allowed(url: &str) -> bool {
    let cleaned: String = url.chars().filter(|c| *c > '\u{20}').collect();
    EMBED_PREFIXES.iter().any(|prefix| cleaned.starts_with(prefix))
}

/// Escape for a double-quoted attribute position. Ampersands pass through:
/// values from the markdown renderer are already entity-escaped and must not
/// be escaped twice.
fn escape_attr(value: &str) -> String {
    value.replace('"', "&quot;")
}
