// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.
//
// Copyright (c) 2025 Pegasus Heavy Industries, LLC

//! Markup matchers for JSX children and Vue single-file components.

use super::Scanner;
use super::scanner::{is_line_terminator, is_whitespace};

fn is_word_char(ch: char) -> bool {
    ch.is_ascii_alphanumeric() || ch == '_'
}

impl<'a> Scanner<'a> {
    /// Matches JSX text: one or more characters other than `<` and `{`.
    pub fn jsx_text(&self, pos: usize) -> Option<usize> {
        let end = self.skip_while(pos, |ch| ch != '<' && ch != '{');
        (end > pos).then_some(end)
    }

    /// Matches a JSX identifier (`[-\w]+`).
    pub fn jsx_identifier(&self, pos: usize) -> Option<usize> {
        let end = self.skip_while(pos, |ch| is_word_char(ch) || ch == '-');
        (end > pos).then_some(end)
    }

    /// Matches a lower-case HTML tag name (`[a-z]\w*`). Names starting with
    /// `this` are left to the member-expression tag form.
    pub fn jsx_html_tag_name(&self, pos: usize) -> Option<usize> {
        let rest = self.rest(pos);
        if !rest.starts_with(|ch: char| ch.is_ascii_lowercase()) || rest.starts_with("this") {
            return None;
        }
        Some(self.skip_while(pos, is_word_char))
    }

    /// Matches a `<script ...>` start tag.
    pub fn vue_script_start(&self, pos: usize) -> Option<usize> {
        let tail = self.rest(pos).strip_prefix("<script")?;
        if !tail.starts_with(|ch: char| ch == '>' || is_whitespace(ch) || is_line_terminator(ch)) {
            return None;
        }
        self.tag_end(pos + "<script".len())
    }

    /// Matches a `</script>` end tag.
    pub fn vue_script_end(&self, pos: usize) -> Option<usize> {
        if !self.rest(pos).starts_with("</script") {
            return None;
        }
        let end = self.skip_blanks(pos + "</script".len());
        (self.peek(end) == Some('>')).then_some(end + 1)
    }

    /// Matches one opaque top-level section of a Vue file: an HTML comment or
    /// an element other than `<script>`, up to its balanced closing tag.
    pub fn vue_section(&self, pos: usize) -> Option<usize> {
        let rest = self.rest(pos);
        if let Some(body) = rest.strip_prefix("<!--") {
            return body.find("-->").map(|idx| pos + 4 + idx + 3);
        }
        let name_start = pos + 1;
        if !rest.starts_with('<') || !self.rest(name_start).starts_with(|c: char| c.is_ascii_alphabetic()) {
            return None;
        }
        let name_end = self.skip_while(name_start, |ch| is_word_char(ch) || ch == '-');
        let name = &self.source()[name_start..name_end];
        if name.eq_ignore_ascii_case("script") {
            return None;
        }
        let open_end = self.tag_end(name_end)?;
        if self.source()[..open_end].ends_with("/>") {
            return Some(open_end);
        }

        let mut depth = 1usize;
        let mut cursor = open_end;
        while depth > 0 {
            let offset = self.rest(cursor).find('<')?;
            cursor += offset;
            let tail = self.rest(cursor);
            if let Some(after) = tail.strip_prefix("</") {
                if self.tag_name_matches(after, name) {
                    let close_end = self.tag_end(cursor + 2 + name.len())?;
                    depth -= 1;
                    cursor = close_end;
                    continue;
                }
            } else if self.tag_name_matches(&tail[1..], name) {
                let nested_end = self.tag_end(cursor + 1 + name.len())?;
                if !self.source()[..nested_end].ends_with("/>") {
                    depth += 1;
                }
                cursor = nested_end;
                continue;
            }
            cursor += 1;
        }
        Some(cursor)
    }

    fn tag_name_matches(&self, text: &str, name: &str) -> bool {
        text.get(..name.len())
            .is_some_and(|prefix| prefix.eq_ignore_ascii_case(name))
            && !text[name.len()..].starts_with(|ch: char| is_word_char(ch) || ch == '-')
    }

    /// Finds the `>` closing a tag, skipping quoted attribute values.
    fn tag_end(&self, pos: usize) -> Option<usize> {
        let mut quote = None;
        for (idx, ch) in self.rest(pos).char_indices() {
            match (quote, ch) {
                (Some(q), c) if c == q => quote = None,
                (Some(_), _) => {}
                (None, '"' | '\'') => quote = Some(ch),
                (None, '>') => return Some(pos + idx + 1),
                _ => {}
            }
        }
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_jsx_text_stops_at_markup() {
        let scanner = Scanner::new("Hello, world!<br/>");
        assert_eq!(scanner.jsx_text(0), Some(13));
        assert_eq!(scanner.jsx_text(13), None);
    }

    #[test]
    fn test_jsx_identifier_allows_dashes() {
        let scanner = Scanner::new("data-id=");
        assert_eq!(scanner.jsx_identifier(0), Some(7));
    }

    #[test]
    fn test_html_tag_name() {
        let scanner = Scanner::new("div this Foo");
        assert_eq!(scanner.jsx_html_tag_name(0), Some(3));
        assert_eq!(scanner.jsx_html_tag_name(4), None);
        assert_eq!(scanner.jsx_html_tag_name(9), None);
    }

    #[test]
    fn test_vue_script_tags() {
        let source = "<script lang=\"ts\">x</script >";
        let scanner = Scanner::new(source);
        assert_eq!(scanner.vue_script_start(0), Some(18));
        assert_eq!(scanner.vue_script_end(19), Some(source.len()));
        assert_eq!(Scanner::new("<scripts>").vue_script_start(0), None);
    }

    #[test]
    fn test_vue_section_balances_nested_tags() {
        let source = "<template><div><template v-if=\"a > b\">x</template></div></template>\n";
        let scanner = Scanner::new(source);
        assert_eq!(scanner.vue_section(0), Some(source.len() - 1));
    }

    #[test]
    fn test_vue_section_comment_and_self_closing() {
        let scanner = Scanner::new("<!-- a\n b --><custom/>");
        assert_eq!(scanner.vue_section(0), Some(13));
        assert_eq!(scanner.vue_section(13), Some(22));
    }

    #[test]
    fn test_vue_section_rejects_script_and_unclosed() {
        assert_eq!(Scanner::new("<script>").vue_section(0), None);
        assert_eq!(Scanner::new("<style>a{}").vue_section(0), None);
    }
}
