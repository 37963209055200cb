// src/core/tokenizer.rs
// Left-to-right tag scanner. Recognizes `< /? name attrs >` where name is
// [A-Za-z0-9:-]+ and attrs is anything up to the next '>'. Attribute text is opaque:
// a '>' inside an attribute value ends the tag early (known false negative).

use std::ops::Range;

use super::html::skip_ws;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TokenKind {
    Element,
    Doctype,     // <!doctype ...>
    CommentOpen, // the `<!--` opener only; the body is still scanned
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TagToken<'a> {
    pub kind: TokenKind,
    pub closing: bool,
    pub name: String,             // lowercased
    pub raw_attributes: &'a str,  // text between the name and '>'
    pub start: usize,             // char offset of '<'
    pub end: usize,               // char offset just past '>'
    pub span: Range<usize>,       // byte range in the source
}

impl TagToken<'_> {
    /// Trailing `/` before `>`, as in `<br/>` or `<x-icon />`.
    pub fn slash_closed(&self) -> bool {
        self.raw_attributes.trim_end().ends_with('/')
    }
}

pub struct Tokens<'a> {
    text: &'a str,
    pos: usize,      // byte cursor
    char_pos: usize, // chars in text[..pos]
}

pub fn tokenize(text: &str) -> Tokens<'_> {
    Tokens { text, pos: 0, char_pos: 0 }
}

fn is_name_byte(b: u8) -> bool {
    b.is_ascii_alphanumeric() || b == b':' || b == b'-'
}

impl<'a> Tokens<'a> {
    fn advance_to(&mut self, byte: usize) {
        self.char_pos += self.text[self.pos..byte].chars().count();
        self.pos = byte;
    }

    fn make(&mut self, kind: TokenKind, closing: bool, name: String, attrs: Range<usize>, lt: usize, end: usize) -> TagToken<'a> {
        let text = self.text;
        self.advance_to(lt);
        let start = self.char_pos;
        self.advance_to(end);
        TagToken {
            kind,
            closing,
            name,
            raw_attributes: &text[attrs],
            start,
            end: self.char_pos,
            span: lt..end,
        }
    }

    /// Try the element pattern at `lt`. None if it doesn't match there.
    fn element_at(&mut self, lt: usize) -> Option<TagToken<'a>> {
        let b = self.text.as_bytes();
        let mut j = skip_ws(b, lt + 1);
        let closing = b.get(j) == Some(&b'/');
        if closing {
            j = skip_ws(b, j + 1);
        }
        let name_start = j;
        while j < b.len() && is_name_byte(b[j]) {
            j += 1;
        }
        if j == name_start {
            return None;
        }
        let gt = j + self.text[j..].find('>')?;
        let name = self.text[name_start..j].to_ascii_lowercase();
        Some(self.make(TokenKind::Element, closing, name, j..gt, lt, gt + 1))
    }

    fn declaration_at(&mut self, lt: usize) -> Option<TagToken<'a>> {
        let b = self.text.as_bytes();
        if b[lt..].starts_with(b"<!--") {
            let end = lt + 4;
            return Some(self.make(TokenKind::CommentOpen, false, s!("!--"), end..end, lt, end));
        }
        if b.get(lt..lt + 9).is_some_and(|s| s.eq_ignore_ascii_case(b"<!doctype")) {
            let name_end = lt + "<!doctype".len();
            let gt = name_end + self.text[name_end..].find('>')?;
            return Some(self.make(TokenKind::Doctype, false, s!("!doctype"), name_end..gt, lt, gt + 1));
        }
        None
    }
}

impl<'a> Iterator for Tokens<'a> {
    type Item = TagToken<'a>;

    fn next(&mut self) -> Option<Self::Item> {
        let mut i = self.pos;
        loop {
            let lt = i + self.text.get(i..)?.find('<')?;
            let tok = if self.text.as_bytes().get(lt + 1) == Some(&b'!') {
                self.declaration_at(lt)
            } else {
                self.element_at(lt)
            };
            if tok.is_some() {
                return tok;
            }
            i = lt + 1;
        }
    }
}
