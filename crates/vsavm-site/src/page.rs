//! The page content model.
//!
//! A [`Page`] is an immutable description of one output document. Pages are
//! constructed once, at registry-build time, and consumed exactly once per
//! build: one `{slug}.html` file plus one card on the kind's index page.

/// The two page categories. A page's kind is fixed at construction and
/// decides its output directory, intro text, and index card note.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PageKind {
    /// Long-form theory notes under `theory/`.
    Theory,
    /// Glossary entries under `wiki/`.
    Wiki,
}

impl PageKind {
    /// Output directory name for this kind, relative to the docs root.
    pub fn dir_name(self) -> &'static str {
        match self {
            PageKind::Theory => "theory",
            PageKind::Wiki => "wiki",
        }
    }

    /// Descriptive note shown on this kind's index cards.
    pub fn card_note(self) -> &'static str {
        match self {
            PageKind::Theory => "Chapters, definitions, mechanisms, and references.",
            PageKind::Wiki => "Definition, role in VSAVM, mechanics, references.",
        }
    }
}

/// One heading/body pair. Sections render in insertion order; the order is
/// the visual reading order.
#[derive(Debug, Clone)]
pub struct Section {
    pub heading: String,
    pub body: String,
}

/// One labeled external link in a page's references paragraph.
#[derive(Debug, Clone)]
pub struct Reference {
    pub label: String,
    pub url: String,
}

/// One document's content specification.
///
/// `slug` is used verbatim as the output filename stem and as the hyperlink
/// target from index cards, so it must be unique within its kind's registry.
/// A collision is an authoring defect caught by the registry tests, not a
/// runtime condition.
#[derive(Debug, Clone)]
pub struct Page {
    pub slug: String,
    pub title: String,
    pub kind: PageKind,
    /// Accessibility label, emitted as the diagram frame's `aria-label`.
    pub diagram_label: String,
    /// Pre-composed inline SVG fragment, framed with `diagram_label`.
    pub diagram: String,
    pub caption: String,
    pub sections: Vec<Section>,
    pub references: Vec<Reference>,
}

impl Page {
    /// Output filename for this page: the slug plus the `.html` suffix.
    pub fn file_name(&self) -> String {
        format!("{}.html", self.slug)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn file_name_is_slug_plus_extension() {
        let page = Page {
            slug: "bounded-closure".to_string(),
            title: "Bounded closure".to_string(),
            kind: PageKind::Wiki,
            diagram_label: "Diagram".to_string(),
            diagram: "<svg/>".to_string(),
            caption: String::new(),
            sections: vec![],
            references: vec![],
        };
        assert_eq!(page.file_name(), "bounded-closure.html");
    }

    #[test]
    fn kinds_map_to_disjoint_directories() {
        assert_eq!(PageKind::Theory.dir_name(), "theory");
        assert_eq!(PageKind::Wiki.dir_name(), "wiki");
    }
}
