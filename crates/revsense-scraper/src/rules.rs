//! Ordered attribute-matching rules used to locate review text.

use scraper::{ElementRef, Html, Node};

/// How an attribute value must look for a rule to match.
#[derive(Debug, Clone, Copy)]
pub(crate) enum AttrMatch {
    /// Whole attribute value equals the string.
    Exact(&'static str),
    /// One of the element's classes equals the string.
    HasClass(&'static str),
    /// Attribute value contains the lowercase needle, ignoring case.
    ContainsIgnoreCase(&'static str),
}

/// One entry of a selector fallback list: tag names plus an attribute test.
#[derive(Debug, Clone, Copy)]
pub(crate) struct SelectorRule {
    pub tags: &'static [&'static str],
    pub attr: &'static str,
    pub matcher: AttrMatch,
}

impl SelectorRule {
    pub(crate) const fn new(
        tags: &'static [&'static str],
        attr: &'static str,
        matcher: AttrMatch,
    ) -> Self {
        Self {
            tags,
            attr,
            matcher,
        }
    }

    fn matches(&self, element: &ElementRef<'_>) -> bool {
        let el = element.value();
        if !self.tags.contains(&el.name()) {
            return false;
        }
        match self.matcher {
            AttrMatch::HasClass(class) => {
                el.classes().any(|c| c == class) || el.attr(self.attr) == Some(class)
            }
            AttrMatch::Exact(expected) => el.attr(self.attr) == Some(expected),
            AttrMatch::ContainsIgnoreCase(needle) => el
                .attr(self.attr)
                .is_some_and(|v| v.to_lowercase().contains(needle)),
        }
    }

    /// All matching elements, in document order.
    pub(crate) fn select<'a>(&self, document: &'a Html) -> Vec<ElementRef<'a>> {
        document
            .root_element()
            .descendants()
            .filter_map(ElementRef::wrap)
            .filter(|el| self.matches(el))
            .collect()
    }
}

impl std::fmt::Display for SelectorRule {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let value = match self.matcher {
            AttrMatch::Exact(v) | AttrMatch::HasClass(v) => format!("={v}"),
            AttrMatch::ContainsIgnoreCase(v) => format!("~={v}"),
        };
        write!(f, "{}[{}{}]", self.tags.join("|"), self.attr, value)
    }
}

/// Visible text of an element: every text node trimmed, empties dropped,
/// the rest concatenated without a separator. Script and style bodies are
/// skipped.
pub(crate) fn visible_text(element: &ElementRef<'_>) -> String {
    let mut out = String::new();
    for node in element.descendants() {
        let Node::Text(text) = node.value() else {
            continue;
        };
        let hidden = node
            .parent()
            .and_then(|p| p.value().as_element().map(scraper::node::Element::name))
            .is_some_and(|name| matches!(name, "script" | "style" | "template"));
        if hidden {
            continue;
        }
        let trimmed = text.trim();
        if !trimmed.is_empty() {
            out.push_str(trimmed);
        }
    }
    out
}

/// Length in characters, not bytes.
pub(crate) fn char_len(s: &str) -> usize {
    s.chars().count()
}
