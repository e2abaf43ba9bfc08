//! The HTML shell and page renderer.
//!
//! [`Renderer`] turns one [`Page`] plus a path prefix into a complete,
//! self-contained document, and a page list into an index document.
//! Rendering is a pure function of its inputs: identical pages and prefix
//! produce byte-identical output, and nothing here touches the file system.
//! The caller supplies the prefix (`""` at the site root, `"../"` one
//! directory deep); the renderer never computes depth itself.

use minijinja::{context, Environment};

use crate::page::{Page, PageKind, Reference, Section};

/// Intro paragraphs shown on the theory index page.
pub const THEORY_INDEX_INTRO: &str = "<p>The theory section is written as engineer-friendly notes. Each page has 3\u{2013}4 short chapters, defined terminology, a transparent SVG diagram, and references.</p>\n<p>The goal is to explain mechanisms and trade-offs without duplicating specification text.</p>";

/// Intro paragraph shown on the wiki index page.
pub const WIKI_INDEX_INTRO: &str = "<p>The wiki defines core terms used throughout VSAVM. Each entry includes short chapters and a transparent SVG diagram with an operational interpretation.</p>";

const THEORY_PAGE_INTRO: &str = "<p>This page is a theory note. It expands the topic in short chapters and defines terminology without duplicating the formal specification documents.</p>\n<p>The diagram has a transparent background and is intended to be read together with the caption and the sections below.</p>";

const WIKI_PAGE_INTRO: &str = "<p>This wiki entry defines a term used across VSAVM and explains why it matters in the architecture.</p>\n<p>The diagram has a transparent background and highlights the operational meaning of the term inside VSAVM.</p>";

/// Renders documents through the fixed site shell.
pub struct Renderer {
    env: Environment<'static>,
}

impl Renderer {
    /// Create a renderer with the shell template compiled in.
    pub fn new() -> Self {
        let mut env = Environment::new();
        env.add_template_owned("page.html".to_string(), SHELL_TEMPLATE.to_string())
            .expect("shell template must compile");
        Self { env }
    }

    /// Wrap a content block in the full document frame. `prefix` is
    /// prepended to every site-internal link so the same shell works at any
    /// directory depth.
    pub fn shell(
        &self,
        title: &str,
        content: &str,
        prefix: &str,
    ) -> Result<String, minijinja::Error> {
        let tmpl = self.env.get_template("page.html")?;
        tmpl.render(context! {
            title => title,
            content => content,
            prefix => prefix,
        })
    }

    /// Render one page into a complete document. Individual pages always
    /// live one level below the site root.
    pub fn render_page(&self, page: &Page) -> Result<String, minijinja::Error> {
        let (intro, related) = match page.kind {
            PageKind::Theory => (THEORY_PAGE_INTRO, related_wiki_paragraph("../wiki/")),
            PageKind::Wiki => (WIKI_PAGE_INTRO, related_wiki_paragraph("")),
        };

        let mut body = format!("<h1>{}</h1>\n{intro}\n{related}\n", page.title);
        body.push_str(&section_blocks(&page.sections));
        body.push_str("\n<figure class=\"diagram\">\n");
        body.push_str(&page.diagram);
        body.push_str(&format!(
            "\n<figcaption>{}</figcaption>\n</figure>\n",
            page.caption
        ));
        body.push_str(&references_paragraph(&page.references));

        self.shell(&page.title, &body, "../")
    }

    /// Render an index document: a card grid linking to every page, in
    /// registry order. Index pages live inside their kind's directory, one
    /// level below the site root.
    pub fn render_index(
        &self,
        title: &str,
        intro_html: &str,
        pages: &[Page],
    ) -> Result<String, minijinja::Error> {
        let cards: Vec<String> = pages
            .iter()
            .map(|p| {
                format!(
                    "<a class=\"card\" href=\"{file}\"><div class=\"card-title\">{title}</div><div class=\"card-note\">{note}</div></a>",
                    file = p.file_name(),
                    title = p.title,
                    note = p.kind.card_note(),
                )
            })
            .collect();

        let body = format!(
            "<h1>{title}</h1>\n{intro_html}\n<div class=\"link-grid\">{}</div>",
            cards.join("\n")
        );
        self.shell(title, &body, "../")
    }
}

impl Default for Renderer {
    fn default() -> Self {
        Self::new()
    }
}

fn section_blocks(sections: &[Section]) -> String {
    sections
        .iter()
        .map(|s| format!("<h2>{}</h2>\n<p>{}</p>", s.heading, s.body))
        .collect::<Vec<_>>()
        .join("\n")
}

fn references_paragraph(references: &[Reference]) -> String {
    let links = references
        .iter()
        .map(|r| format!("<a href=\"{}\">{}</a>", r.url, r.label))
        .collect::<Vec<_>>()
        .join(" ");
    format!("<h2>References</h2>\n<p>{links}</p>")
}

/// The fixed related-pages paragraph. Both kinds link to the same five wiki
/// entries; only the path prefix differs.
fn related_wiki_paragraph(prefix: &str) -> String {
    format!(
        "<p>Related wiki pages: <a href=\"{prefix}vm.html\">VM</a>, <a href=\"{prefix}event-stream.html\">event stream</a>, \
         <a href=\"{prefix}vsa.html\">VSA</a>, <a href=\"{prefix}bounded-closure.html\">bounded closure</a>, \
         <a href=\"{prefix}consistency-contract.html\">consistency contract</a>.</p>"
    )
}

const SHELL_TEMPLATE: &str = r##"<!doctype html>
<html lang="en">
  <head>
    <meta charset="utf-8">
    <meta name="viewport" content="width=device-width, initial-scale=1">
    <title>{{ title }} | VSAVM</title>
    <link rel="preconnect" href="https://fonts.googleapis.com">
    <link rel="preconnect" href="https://fonts.gstatic.com" crossorigin>
    <link href="https://fonts.googleapis.com/css2?family=Fraunces:wght@400;600&family=Space+Grotesk:wght@400;500;600&display=swap" rel="stylesheet">
    <link rel="stylesheet" href="{{ prefix | safe }}assets/site.css">
  </head>
  <body>
    <div class="site">
      <header class="header">
        <div class="brand">VSAVM</div>
        <nav class="nav">
          <a href="{{ prefix | safe }}index.html">Home</a>
          <a href="{{ prefix | safe }}specs.html">Specs</a>
          <a href="{{ prefix | safe }}theory/index.html">Theory</a>
          <a href="{{ prefix | safe }}wiki/index.html">Wiki</a>
        </nav>
      </header>
      <main class="main content">
        {{ content | safe }}
      </main>
      <footer class="footer">
        VSAVM is an Axiologic Research experiment within the Achilles project. This static documentation is written in clear academic English for engineers.
      </footer>
    </div>
  </body>
</html>
"##;

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn sample_page(kind: PageKind) -> Page {
        Page {
            slug: "sample".to_string(),
            title: "Sample page".to_string(),
            kind,
            diagram_label: "Sample diagram".to_string(),
            diagram: "<svg viewBox=\"0 0 10 10\" role=\"img\" aria-label=\"Sample diagram\"></svg>"
                .to_string(),
            caption: "A caption.".to_string(),
            sections: vec![
                Section {
                    heading: "Overview".to_string(),
                    body: "A".to_string(),
                },
                Section {
                    heading: "Details".to_string(),
                    body: "B".to_string(),
                },
            ],
            references: vec![Reference {
                label: "Consistency (Wikipedia)".to_string(),
                url: "https://en.wikipedia.org/wiki/Consistency".to_string(),
            }],
        }
    }

    #[test]
    fn shell_applies_prefix_to_every_nav_link() {
        let renderer = Renderer::new();
        let html = renderer.shell("Home", "<p>hi</p>", "../").unwrap();

        assert!(html.contains("<title>Home | VSAVM</title>"));
        assert!(html.contains("href=\"../assets/site.css\""));
        assert!(html.contains("<a href=\"../index.html\">Home</a>"));
        assert!(html.contains("<a href=\"../specs.html\">Specs</a>"));
        assert!(html.contains("<a href=\"../theory/index.html\">Theory</a>"));
        assert!(html.contains("<a href=\"../wiki/index.html\">Wiki</a>"));
        assert!(html.contains("<p>hi</p>"));
    }

    #[test]
    fn shell_with_empty_prefix_links_site_root() {
        let renderer = Renderer::new();
        let html = renderer.shell("Home", "", "").unwrap();
        assert!(html.contains("href=\"assets/site.css\""));
        assert!(html.contains("<a href=\"index.html\">Home</a>"));
    }

    #[test]
    fn page_heading_equals_title() {
        let renderer = Renderer::new();
        let html = renderer.render_page(&sample_page(PageKind::Theory)).unwrap();
        assert!(html.contains("<h1>Sample page</h1>"));
    }

    #[test]
    fn sections_render_in_input_order() {
        let renderer = Renderer::new();
        let html = renderer.render_page(&sample_page(PageKind::Theory)).unwrap();

        let overview = html.find("<h2>Overview</h2>").unwrap();
        let details = html.find("<h2>Details</h2>").unwrap();
        assert!(overview < details);
        assert!(html.contains("<h2>Overview</h2>\n<p>A</p>"));
    }

    #[test]
    fn page_wraps_diagram_in_figure_with_caption() {
        let renderer = Renderer::new();
        let html = renderer.render_page(&sample_page(PageKind::Wiki)).unwrap();
        assert!(html.contains("<figure class=\"diagram\">"));
        assert!(html.contains("aria-label=\"Sample diagram\""));
        assert!(html.contains("<figcaption>A caption.</figcaption>"));
        assert!(html.contains("<a href=\"https://en.wikipedia.org/wiki/Consistency\">Consistency (Wikipedia)</a>"));
    }

    #[test]
    fn kind_selects_intro_and_related_prefix() {
        let renderer = Renderer::new();
        let theory = renderer.render_page(&sample_page(PageKind::Theory)).unwrap();
        let wiki = renderer.render_page(&sample_page(PageKind::Wiki)).unwrap();

        assert!(theory.contains("This page is a theory note."));
        assert!(theory.contains("<a href=\"../wiki/vm.html\">VM</a>"));
        assert!(wiki.contains("This wiki entry defines a term"));
        assert!(wiki.contains("<a href=\"vm.html\">VM</a>"));
    }

    #[test]
    fn index_cards_preserve_order_and_link_slugs() {
        let renderer = Renderer::new();
        let mut first = sample_page(PageKind::Wiki);
        first.slug = "alpha".to_string();
        first.title = "Alpha".to_string();
        let mut second = sample_page(PageKind::Wiki);
        second.slug = "beta".to_string();
        second.title = "Beta".to_string();

        let html = renderer
            .render_index("Wiki", WIKI_INDEX_INTRO, &[first, second])
            .unwrap();

        let alpha = html.find("href=\"alpha.html\"").unwrap();
        let beta = html.find("href=\"beta.html\"").unwrap();
        assert!(alpha < beta);
        assert!(html.contains("Definition, role in VSAVM, mechanics, references."));
    }

    #[test]
    fn rendering_is_deterministic() {
        let renderer = Renderer::new();
        let page = sample_page(PageKind::Theory);
        let a = renderer.render_page(&page).unwrap();
        let b = Renderer::new().render_page(&page).unwrap();
        assert_eq!(a, b);
    }
}
