use log::error;
use snafu::{Snafu, OptionExt};

/// `id` attribute of the script element carrying the embedded snapshot.
pub const PAYLOAD_ELEMENT_ID: &str = "__NEXT_DATA__";

/// `type` attribute the payload element must carry.
pub const PAYLOAD_MIME: &str = "application/json";

#[derive(Debug, Snafu)]
pub enum ExtractError {
    #[snafu(display("No '{}' payload element found in the document", PAYLOAD_ELEMENT_ID))]
    NotFound,

    #[snafu(display("Found {} '{}' payload elements, expected exactly one", count, PAYLOAD_ELEMENT_ID))]
    Ambiguous {
        count: usize,
    },
}

/// Locates the single marker script element and returns its inner text.
///
/// Tag names are matched ASCII case-insensitively, attribute values
/// exactly. More than one match means the upstream page structure drifted,
/// so the extraction fails rather than guessing which copy is live.
pub fn extract_payload(html: &str) -> Result<&str, ExtractError> {
    // ASCII lowering preserves byte offsets, so indexes found in the
    // lowered copy slice the original directly.
    let lowered = html.to_ascii_lowercase();

    let mut found: Option<&str> = None;
    let mut count = 0usize;
    let mut from = 0usize;

    while let Some(rel) = lowered[from..].find("<script") {
        let open_at = from + rel;
        let attrs_end = match lowered[open_at..].find('>') {
            Some(i) => open_at + i,
            None => break,
        };
        from = attrs_end + 1;

        let attrs = &html[open_at..attrs_end];
        if !(has_attr(attrs, "id", PAYLOAD_ELEMENT_ID) && has_attr(attrs, "type", PAYLOAD_MIME)) {
            continue;
        }

        let body_start = attrs_end + 1;
        let close_rel = match lowered[body_start..].find("</script") {
            Some(i) => i,
            None => break,
        };

        count += 1;
        if found.is_none() {
            found = Some(&html[body_start..body_start + close_rel]);
        }
        from = body_start + close_rel;
    }

    if count > 1 {
        error!("Found {} '{}' payload elements; the page structure has changed upstream", count, PAYLOAD_ELEMENT_ID);
        return Ambiguous { count }.fail();
    }

    found.context(NotFound)
}

fn has_attr(attrs: &str, name: &str, value: &str) -> bool {
    // Whole-token comparison: a bare substring search would also hit
    // attribute names like `data-id` or marker text embedded inside
    // another attribute's value.
    let double_quoted = format!("{}=\"{}\"", name, value);
    let single_quoted = format!("{}='{}'", name, value);
    attrs.split_ascii_whitespace()
        .any(|token| token == double_quoted || token == single_quoted)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn page(script: &str) -> String {
        format!("<html><head><script src=\"/app.js\"></script></head><body><p>hi</p>{}</body></html>", script)
    }

    #[test]
    fn extracts_the_marker_element_body() {
        let html = page(r#"<script id="__NEXT_DATA__" type="application/json">{"props":{}}</script>"#);
        assert_eq!(extract_payload(&html).unwrap(), r#"{"props":{}}"#);
    }

    #[test]
    fn accepts_single_quoted_attributes_and_mixed_tag_case() {
        let html = page(r#"<SCRIPT id='__NEXT_DATA__' type='application/json'>{"a":1}</SCRIPT>"#);
        assert_eq!(extract_payload(&html).unwrap(), r#"{"a":1}"#);
    }

    #[test]
    fn missing_marker_is_not_found() {
        let html = page(r#"<script type="application/json">{"a":1}</script>"#);
        match extract_payload(&html) {
            Err(ExtractError::NotFound) => (),
            other => panic!("expected NotFound, got {:?}", other),
        }
    }

    #[test]
    fn unterminated_marker_is_not_found() {
        let html = r#"<script id="__NEXT_DATA__" type="application/json">{"a":1}"#;
        assert!(matches!(extract_payload(html), Err(ExtractError::NotFound)));
    }

    #[test]
    fn data_prefixed_attribute_is_not_the_marker() {
        let html = page(concat!(
            r#"<script data-id="__NEXT_DATA__" type="application/json">{"decoy":1}</script>"#,
            r#"<script id="__NEXT_DATA__" type="application/json">{"props":{}}</script>"#,
        ));
        assert_eq!(extract_payload(&html).unwrap(), r#"{"props":{}}"#);
    }

    #[test]
    fn marker_text_inside_another_attribute_value_is_ignored() {
        let html = page(concat!(
            r#"<script data-template='id="__NEXT_DATA__" type="application/json"'>nope</script>"#,
            r#"<script id="__NEXT_DATA__" type="application/json">{"a":1}</script>"#,
        ));
        assert_eq!(extract_payload(&html).unwrap(), r#"{"a":1}"#);
    }

    #[test]
    fn duplicate_markers_are_ambiguous() {
        let dup = r#"<script id="__NEXT_DATA__" type="application/json">{"a":1}</script>
                     <script id="__NEXT_DATA__" type="application/json">{"b":2}</script>"#;
        let html = page(dup);
        match extract_payload(&html) {
            Err(ExtractError::Ambiguous { count }) => assert_eq!(count, 2),
            other => panic!("expected Ambiguous, got {:?}", other),
        }
    }
}
