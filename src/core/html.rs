// src/core/html.rs
//
// Small helpers over `scraper` so specs read like the markup they walk.

use scraper::{ElementRef, Html, Selector};

use super::sanitize::normalize_ws;

pub fn parse_document(text: &str) -> Html {
    Html::parse_document(text)
}

/// Compile a selector, keeping the offending text on failure.
pub fn selector(css: &str) -> Result<Selector, String> {
    Selector::parse(css).map_err(|_| s!(css))
}

/// Elements whose text is never rendered (inline TemplateStyles, scripts).
const NON_TEXT: [&str; 3] = ["style", "script", "template"];

/// Text nodes under `el`, minus anything inside a `NON_TEXT` element.
pub fn visible_text<'a>(el: ElementRef<'a>) -> impl Iterator<Item = &'a str> {
    el.descendants().filter_map(move |node| {
        let text = node.value().as_text()?;
        let hidden = node
            .ancestors()
            .take_while(|a| a.id() != el.id())
            .filter_map(|a| a.value().as_element())
            .any(|e| NON_TEXT.contains(&e.name()));
        if hidden { None } else { Some(&**text) }
    })
}

/// Visible text of an element: each text fragment trimmed, empty ones
/// dropped, the rest concatenated with no separator.
pub fn text_of(el: ElementRef<'_>) -> String {
    visible_text(el).map(str::trim).filter(|t| !t.is_empty()).collect()
}

/// Like [`text_of`] but keeps word boundaries between fragments.
/// For display strings (headers) rather than field values.
pub fn spaced_text_of(el: ElementRef<'_>) -> String {
    normalize_ws(&visible_text(el).collect::<Vec<_>>().join(" "))
}

pub fn has_class(el: ElementRef<'_>, class: &str) -> bool {
    el.value().classes().any(|c| c == class)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn first<'a>(doc: &'a Html, css: &str) -> ElementRef<'a> {
        doc.select(&selector(css).unwrap()).next().unwrap()
    }

    #[test]
    fn text_of_strips_and_joins_fragments() {
        let doc = Html::parse_fragment(
            "<table><tr><td>  Mont-Saint-Michel <br/>\n et sa baie <sup>[1]</sup></td></tr></table>",
        );
        assert_eq!(text_of(first(&doc, "td")), "Mont-Saint-Michelet sa baie[1]");
    }

    #[test]
    fn spaced_text_keeps_words_apart() {
        let doc = Html::parse_fragment("<table><tr><th>Année <br>d'inscription</th></tr></table>");
        assert_eq!(spaced_text_of(first(&doc, "th")), "Année d'inscription");
    }

    #[test]
    fn style_and_script_text_is_not_cell_text() {
        let doc = Html::parse_fragment(
            "<table><tr><td><style>.mw-parser-output .x{margin:0.5em 1.2em}</style>Vauban\
             <script>var n = 3;</script><span> fortifications</span></td></tr></table>",
        );
        let td = first(&doc, "td");
        assert_eq!(text_of(td), "Vaubanfortifications");
        assert_eq!(spaced_text_of(td), "Vauban fortifications");
    }

    #[test]
    fn bad_selector_reports_text() {
        assert_eq!(selector("td[").unwrap_err(), "td[");
    }

    #[test]
    fn class_membership() {
        let doc = Html::parse_fragment(r#"<table class="wikitable sortable"></table>"#);
        let t = first(&doc, "table");
        assert!(has_class(t, "wikitable"));
        assert!(!has_class(t, "wiki"));
    }
}
