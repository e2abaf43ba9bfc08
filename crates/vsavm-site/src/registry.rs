//! The content registry: the ordered page lists, one per kind.
//!
//! Registry content is static configuration data. The lists are rebuilt
//! from scratch on every call, involve no I/O, and their order is the order
//! pages appear on the index cards and are written to disk.

mod theory;
mod wiki;

use crate::page::{Page, PageKind, Reference, Section};
use vsavm_diagrams::frame;

/// The ordered theory-note pages.
pub fn theory_pages() -> Vec<Page> {
    theory::pages()
}

/// The ordered wiki glossary pages.
pub fn wiki_pages() -> Vec<Page> {
    wiki::pages()
}

/// Declarative page constructor used by the data modules. The diagram body
/// is framed here, with `diagram_label` as the frame's aria-label, so the
/// stored label and the emitted one cannot drift apart.
#[allow(clippy::too_many_arguments)]
fn page(
    kind: PageKind,
    slug: &str,
    title: &str,
    view_box: &str,
    diagram_label: &str,
    diagram_body: String,
    caption: &str,
    sections: &[(&str, &str)],
    references: &[(&str, &str)],
) -> Page {
    Page {
        slug: slug.to_string(),
        title: title.to_string(),
        kind,
        diagram_label: diagram_label.to_string(),
        diagram: frame(view_box, diagram_label, &diagram_body),
        caption: caption.to_string(),
        sections: sections
            .iter()
            .map(|(heading, body)| Section {
                heading: (*heading).to_string(),
                body: (*body).to_string(),
            })
            .collect(),
        references: references
            .iter()
            .map(|(label, url)| Reference {
                label: (*label).to_string(),
                url: (*url).to_string(),
            })
            .collect(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    fn assert_unique_slugs(pages: &[Page]) {
        let mut seen = HashSet::new();
        for page in pages {
            assert!(
                seen.insert(page.slug.clone()),
                "duplicate slug in registry: {}",
                page.slug
            );
        }
    }

    #[test]
    fn theory_slugs_are_unique() {
        assert_unique_slugs(&theory_pages());
    }

    #[test]
    fn wiki_slugs_are_unique() {
        assert_unique_slugs(&wiki_pages());
    }

    #[test]
    fn kinds_match_their_registry() {
        assert!(theory_pages().iter().all(|p| p.kind == PageKind::Theory));
        assert!(wiki_pages().iter().all(|p| p.kind == PageKind::Wiki));
    }

    #[test]
    fn related_pages_targets_exist_in_wiki_registry() {
        // The fixed related-pages paragraph on every page links to these.
        let slugs: HashSet<String> = wiki_pages().into_iter().map(|p| p.slug).collect();
        for target in [
            "vm",
            "event-stream",
            "vsa",
            "bounded-closure",
            "consistency-contract",
        ] {
            assert!(slugs.contains(target), "missing wiki page: {target}");
        }
    }

    #[test]
    fn every_page_carries_diagram_and_label() {
        for page in theory_pages().into_iter().chain(wiki_pages()) {
            assert!(!page.diagram_label.is_empty(), "{}", page.slug);
            assert!(page.diagram.starts_with("<svg"), "{}", page.slug);
            assert!(!page.sections.is_empty(), "{}", page.slug);
            assert!(!page.references.is_empty(), "{}", page.slug);
        }
    }

    #[test]
    fn diagram_aria_label_matches_the_stored_label() {
        for page in theory_pages().into_iter().chain(wiki_pages()) {
            let expected = format!("aria-label=\"{}\"", page.diagram_label);
            assert!(page.diagram.contains(&expected), "{}", page.slug);
        }
    }

    #[test]
    fn theory_roster_is_complete_and_ordered() {
        let slugs: Vec<String> = theory_pages().into_iter().map(|p| p.slug).collect();
        assert_eq!(
            slugs,
            [
                "vision",
                "unified-input",
                "structure-and-scope",
                "training-and-emergence",
                "rl-shaping",
                "question-compilation",
                "controlled-generation",
                "decoding",
                "correctness-and-closure",
                "vm-core",
                "consistency-contract",
                "state-space-geometry",
                "federated-modules",
                "trust-and-transparency",
            ]
        );
    }

    #[test]
    fn wiki_roster_is_complete_and_ordered() {
        let slugs: Vec<String> = wiki_pages().into_iter().map(|p| p.slug).collect();
        assert_eq!(
            slugs,
            [
                "vm",
                "vsa",
                "event-stream",
                "bounded-closure",
                "beam-search",
                "mdl",
                "rl",
                "schema",
                "macro-program",
                "macro-token",
                "fact-store",
                "fact-id",
                "hypervector",
                "binding",
                "bundling",
                "canonicalization",
                "context-scope",
                "query-compiler",
                "multimodal",
                "symbolic-execution",
                "federated-learning",
                "trustworthy-ai",
                "llm",
                "consistency-contract",
                "conceptual-spaces",
                "program-synthesis",
            ]
        );
    }
}
