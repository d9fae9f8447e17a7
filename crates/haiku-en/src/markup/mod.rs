// Markup flattening -- reduce block markup to newline-joined plain text
//
// Hosts usually store content as HTML-ish block markup, while the validator
// consumes plain text only. This module is the reference flattener: comments
// and script/style elements are dropped entirely, remaining tags are
// stripped, and block-level boundaries become line breaks so each block
// ends up on its own candidate line.
//
// The scanner is tolerant: malformed markup degrades to dropping the
// unparseable remainder, it never fails.

/// Closing tags that end a block-level element. Stripping one emits a line
/// break.
const BLOCK_CLOSERS: &[&str] = &[
    "/p",
    "/div",
    "/li",
    "/h1",
    "/h2",
    "/h3",
    "/h4",
    "/h5",
    "/h6",
    "/blockquote",
    "/pre",
];

/// Elements whose text content is dropped along with the tags themselves.
const DROPPED_ELEMENTS: &[&str] = &["script", "style"];

/// Flatten block markup into plain text.
///
/// - HTML comments (`<!-- ... -->`) are removed; an unterminated comment
///   runs to the end of the input.
/// - `<script>` and `<style>` elements are removed including their contents.
/// - Every other tag is stripped. Block-level closers and `<br>` variants
///   emit a line break.
/// - The result is trimmed of leading and trailing whitespace.
pub fn plain_text(markup: &str) -> String {
    let mut out = String::with_capacity(markup.len());
    let mut rest = markup;

    while let Some(lt) = rest.find('<') {
        out.push_str(&rest[..lt]);
        let tail = &rest[lt..];

        if let Some(after) = tail.strip_prefix("<!--") {
            rest = match after.find("-->") {
                Some(end) => &after[end + 3..],
                None => "",
            };
            continue;
        }

        match tail.find('>') {
            // Unterminated tag runs to the end of the input.
            None => rest = "",
            Some(gt) => {
                let tag = &tail[1..gt];
                rest = &tail[gt + 1..];

                let name = tag_name(tag);
                if DROPPED_ELEMENTS.iter().any(|e| name.eq_ignore_ascii_case(e)) {
                    rest = skip_element(rest, name);
                } else if emits_line_break(tag) {
                    out.push('\n');
                }
            }
        }
    }
    out.push_str(rest);

    out.trim().to_string()
}

/// Extract the element name from tag contents: leading alphanumeric run
/// after optional whitespace. Closing tags yield an empty name (they start
/// with `/`), which matches no dropped element.
fn tag_name(tag: &str) -> &str {
    let trimmed = tag.trim_start();
    let end = trimmed
        .find(|c: char| !c.is_ascii_alphanumeric())
        .unwrap_or(trimmed.len());
    &trimmed[..end]
}

/// Whether stripping this tag should emit a line break.
fn emits_line_break(tag: &str) -> bool {
    let normalized = tag.trim().trim_end_matches('/').trim_end();
    normalized.eq_ignore_ascii_case("br")
        || BLOCK_CLOSERS
            .iter()
            .any(|closer| normalized.eq_ignore_ascii_case(closer))
}

/// Skip past the matching closing tag of a dropped element, returning the
/// remainder. An unterminated element runs to the end of the input.
fn skip_element<'a>(rest: &'a str, name: &str) -> &'a str {
    let haystack = rest.to_ascii_lowercase();
    let needle = format!("</{}", name.to_ascii_lowercase());
    match haystack.find(&needle) {
        Some(start) => {
            let after = &rest[start + needle.len()..];
            match after.find('>') {
                Some(gt) => &after[gt + 1..],
                None => "",
            }
        }
        None => "",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // -- Tag stripping --

    #[test]
    fn text_without_markup_passes_through() {
        assert_eq!(plain_text("An old silent pond"), "An old silent pond");
    }

    #[test]
    fn result_is_trimmed() {
        assert_eq!(plain_text("  pond  "), "pond");
    }

    #[test]
    fn inline_tags_do_not_break_the_line() {
        assert_eq!(
            plain_text("<p>An <em>old</em> silent pond</p>"),
            "An old silent pond"
        );
    }

    #[test]
    fn paragraphs_become_lines() {
        assert_eq!(plain_text("<p>one</p><p>two</p>"), "one\ntwo");
    }

    #[test]
    fn headings_lists_and_quotes_become_lines() {
        assert_eq!(
            plain_text("<h2>one</h2><li>two</li><blockquote>three</blockquote>"),
            "one\ntwo\nthree"
        );
    }

    #[test]
    fn br_variants_break_the_line() {
        assert_eq!(plain_text("one<br>two"), "one\ntwo");
        assert_eq!(plain_text("one<br/>two"), "one\ntwo");
        assert_eq!(plain_text("one<br />two"), "one\ntwo");
    }

    #[test]
    fn tag_case_is_ignored() {
        assert_eq!(plain_text("<P>one</P><p>two</p>"), "one\ntwo");
    }

    #[test]
    fn attributes_are_stripped_with_the_tag() {
        assert_eq!(
            plain_text("<p class=\"verse\" data-line=\"1\">pond</p>"),
            "pond"
        );
    }

    // -- Comments --

    #[test]
    fn comments_are_removed() {
        assert_eq!(
            plain_text("<!-- wp:paragraph --><p>pond</p><!-- /wp:paragraph -->"),
            "pond"
        );
    }

    #[test]
    fn unterminated_comment_runs_to_end() {
        assert_eq!(plain_text("pond<!-- trailing"), "pond");
    }

    // -- Dropped elements --

    #[test]
    fn script_is_dropped_with_contents() {
        assert_eq!(
            plain_text("<p>one</p><script>var x = '<b>no</b>';</script><p>two</p>"),
            "one\ntwo"
        );
    }

    #[test]
    fn style_is_dropped_with_contents() {
        assert_eq!(
            plain_text("<style>p { color: red; }</style><p>pond</p>"),
            "pond"
        );
    }

    #[test]
    fn unterminated_script_runs_to_end() {
        assert_eq!(plain_text("<p>pond</p><script>var x = 1;"), "pond");
    }

    // -- Malformed markup --

    #[test]
    fn unterminated_tag_runs_to_end() {
        assert_eq!(plain_text("pond<em unterminated"), "pond");
    }

    #[test]
    fn empty_input() {
        assert_eq!(plain_text(""), "");
    }

    // -- Block documents --

    #[test]
    fn block_document_flattens_to_one_line_per_block() {
        let markup = "\
<!-- wp:paragraph -->\n\
<p>An old silent pond</p>\n\
<!-- /wp:paragraph -->\n\
<!-- wp:paragraph -->\n\
<p>A frog jumps into the pond</p>\n\
<!-- /wp:paragraph -->\n\
<!-- wp:paragraph -->\n\
<p>Splash! Silence again.</p>\n\
<!-- /wp:paragraph -->";
        let text = plain_text(markup);
        assert_eq!(
            crate::validator::content_lines(&text),
            vec![
                "An old silent pond",
                "A frog jumps into the pond",
                "Splash! Silence again.",
            ]
        );
    }
}
