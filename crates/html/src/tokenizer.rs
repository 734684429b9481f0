//! Lenient start-tag scanner.
//!
//! Emits the name of every start-tag in document order and nothing else: end tags, comments,
//! doctypes/markup declarations, marked sections (`<![CDATA[...]]>`) and processing instructions
//! are skipped. Tag names use the ASCII character class `[A-Za-z0-9:-]` and must start with a
//! letter.
//!
//! Known limitations (intentional):
//! - Not an HTML5 tokenizer state machine; there is no parse-error recovery beyond skipping.
//! - A start tag is only emitted once its closing `>` is seen. A truncated tag at end of input
//!   is dropped.
//! - Rawtext close-tag scanning accepts only ASCII whitespace before `>` (see
//!   `find_rawtext_close_tag`).
use crate::types::{TagName, TagStream};
use memchr::{memchr, memmem};
use std::iter::FusedIterator;

const HTML_COMMENT_START: &[u8] = b"<!--";
const HTML_COMMENT_END: &[u8] = b"-->";
const MARKED_SECTION_START: &[u8] = b"<![";
const MARKED_SECTION_END: &[u8] = b"]]>";

// it only attempts matches starting at ASCII <
// < cannot appear in UTF-8 continuation bytes
const SCRIPT_CLOSE_TAG: &[u8] = b"</script";
const STYLE_CLOSE_TAG: &[u8] = b"</style";

fn is_tag_name_byte(b: u8) -> bool {
    b.is_ascii_alphanumeric() || b == b'-' || b == b':'
}

fn starts_with_ignore_ascii_case_at(haystack: &[u8], start: usize, needle: &[u8]) -> bool {
    haystack.len() >= start + needle.len()
        && haystack[start..start + needle.len()].eq_ignore_ascii_case(needle)
}

fn rawtext_close_tag(name: &str) -> Option<&'static [u8]> {
    match name {
        "script" => Some(SCRIPT_CLOSE_TAG),
        "style" => Some(STYLE_CLOSE_TAG),
        _ => None,
    }
}

/// Returns the offset just past the `>` of the first matching rawtext close tag.
fn find_rawtext_close_tag(hay_bytes: &[u8], close_tag: &[u8]) -> Option<usize> {
    let len = hay_bytes.len();
    let n = close_tag.len();
    debug_assert!(n >= 2);
    debug_assert!(close_tag[0] == b'<' && close_tag[1] == b'/');
    debug_assert!(close_tag.is_ascii());
    if len < n {
        return None;
    }
    let mut i = 0;
    while i + n <= len {
        let rel = memchr(b'<', &hay_bytes[i..])?;
        i += rel;
        if i + n > len {
            return None;
        }
        if hay_bytes[i + 1] == b'/' && starts_with_ignore_ascii_case_at(hay_bytes, i, close_tag) {
            let mut k = i + n;
            // `</script foo>` is also a close tag in HTML5; we only accept whitespace before `>`.
            while k < len && hay_bytes[k].is_ascii_whitespace() {
                k += 1;
            }
            if k < len && hay_bytes[k] == b'>' {
                return Some(k + 1);
            }
        }
        i += 1;
    }
    None
}

/// Finds the `>` closing a start tag whose name ends at `from`.
///
/// Quoted attribute values (a quote right after `=`) may contain `>` and `<`. Returns `None`
/// when the tag runs to end of input.
fn find_start_tag_end(bytes: &[u8], from: usize) -> Option<usize> {
    let mut k = from;
    let mut after_equals = false;
    while k < bytes.len() {
        match bytes[k] {
            b'>' => return Some(k),
            quote @ (b'"' | b'\'') if after_equals => {
                // land on the closing quote; the increment below steps past it
                k += 1 + memchr(quote, &bytes[k + 1..])?;
                after_equals = false;
            }
            b'=' => after_equals = true,
            b if b.is_ascii_whitespace() => {}
            _ => after_equals = false,
        }
        k += 1;
    }
    None
}

/// Offset just past `close` searched from `from`, or end of input when it never appears.
fn skip_past_section(bytes: &[u8], from: usize, close: &[u8]) -> usize {
    match memmem::find(&bytes[from..], close) {
        Some(end) => from + end + close.len(),
        None => bytes.len(),
    }
}

fn skip_past(bytes: &[u8], needle: u8, from: usize) -> usize {
    match memchr(needle, &bytes[from..]) {
        Some(rel) => from + rel + 1,
        None => bytes.len(),
    }
}

/// Lazy, single-pass iterator over the start-tag names of a document.
///
/// Never fails: anything that is not a recognizable construct is treated as text.
#[derive(Clone, Debug)]
pub struct Tokenizer<'a> {
    input: &'a str,
    pos: usize,
}

impl<'a> Tokenizer<'a> {
    pub fn new(input: &'a str) -> Self {
        Self { input, pos: 0 }
    }

    /// Byte offset of the next unscanned input.
    pub fn position(&self) -> usize {
        self.pos
    }

    fn start_tag(&mut self, lt: usize) -> Option<TagName> {
        let bytes = self.input.as_bytes();
        let name_start = lt + 1;
        let mut name_end = name_start;
        while name_end < bytes.len() && is_tag_name_byte(bytes[name_end]) {
            name_end += 1;
        }
        let Some(gt) = find_start_tag_end(bytes, name_end) else {
            log::trace!(target: "html.tokenizer", "dropping unterminated tag at byte {lt}");
            self.pos = bytes.len();
            return None;
        };
        let self_closing = gt > name_end && bytes[gt - 1] == b'/';
        // Invariant: name bounds sit on ASCII bytes, so both are char boundaries.
        debug_assert!(self.input.is_char_boundary(name_start));
        debug_assert!(self.input.is_char_boundary(name_end));
        let name = TagName::new(&self.input[name_start..name_end]);
        self.pos = gt + 1;

        if !self_closing {
            if let Some(close_tag) = rawtext_close_tag(name.as_str()) {
                // If the rawtext close tag is missing the remainder is all rawtext.
                self.pos = match find_rawtext_close_tag(&bytes[self.pos..], close_tag) {
                    Some(rel_end) => self.pos + rel_end,
                    None => bytes.len(),
                };
            }
        }

        log::trace!(target: "html.tokenizer", "start tag <{name}> at byte {lt}");
        Some(name)
    }
}

impl Iterator for Tokenizer<'_> {
    type Item = TagName;

    fn next(&mut self) -> Option<TagName> {
        let bytes = self.input.as_bytes();
        loop {
            let Some(rel) = memchr(b'<', &bytes[self.pos..]) else {
                self.pos = bytes.len();
                return None;
            };
            let lt = self.pos + rel;
            match bytes.get(lt + 1) {
                Some(b) if b.is_ascii_alphabetic() => {
                    if let Some(name) = self.start_tag(lt) {
                        return Some(name);
                    }
                }
                Some(b'/') | Some(b'?') => self.pos = skip_past(bytes, b'>', lt + 2),
                Some(b'!') => {
                    let rest = &bytes[lt..];
                    self.pos = if rest.starts_with(HTML_COMMENT_START) {
                        skip_past_section(bytes, lt + HTML_COMMENT_START.len(), HTML_COMMENT_END)
                    } else if rest.starts_with(MARKED_SECTION_START) {
                        // `<![CDATA[ a > b ]]>` may hold `>` and tag-like text before its end.
                        skip_past_section(bytes, lt + MARKED_SECTION_START.len(), MARKED_SECTION_END)
                    } else {
                        skip_past(bytes, b'>', lt + 2)
                    };
                }
                _ => self.pos = lt + 1,
            }
        }
    }
}

impl FusedIterator for Tokenizer<'_> {}

/// Collects the start-tag names of `input` in document order.
pub fn tokenize(input: &str) -> TagStream {
    let stream: TagStream = Tokenizer::new(input).collect();
    log::debug!(
        target: "html.tokenizer",
        "tokenized {} bytes into {} start tags",
        input.len(),
        stream.len()
    );
    stream
}
