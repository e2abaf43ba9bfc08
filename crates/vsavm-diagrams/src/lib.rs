//! Composable inline SVG fragments for the VSAVM documentation site.
//!
//! Every function here is a pure formatter: explicit geometry in, an SVG
//! fragment out. Fragments are composed by the page registry and embedded
//! directly in rendered documents, so nothing in this crate performs I/O or
//! holds shared state. Malformed input degrades to empty-looking markup
//! rather than an error; diagrams are decoration, not validated data.

const FONT: &str = "Space Grotesk";
const CAPTION_INK: &str = "#0b1a2b";
const NOTE_INK: &str = "#2f4a63";
const BOX_STROKE: &str = "#7fb3e6";

/// Vertical nudge applied to centered captions so the text baseline sits
/// visually centered inside its box. Callers always pass top-left + size;
/// centering happens in one place.
const BASELINE_OFFSET: f64 = 4.0;

/// Arrowhead depth, measured back from the tip along the line.
const HEAD_LENGTH: f64 = 10.0;
/// Half-width of the arrowhead base, perpendicular to the line.
const HEAD_HALF_WIDTH: f64 = 7.0;

/// Fixed legend box width.
const LEGEND_WIDTH: f64 = 360.0;

/// Color tokens for [`connector`] strokes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tone {
    /// Primary flow arrows, drawn with the shared `deep` gradient.
    Flow,
    /// Constraint arrows, drawn in solid blue.
    Constraint,
}

impl Tone {
    fn stroke(self) -> &'static str {
        match self {
            Tone::Flow => "url(#deep)",
            Tone::Constraint => "#0b6eff",
        }
    }
}

/// Wraps a body fragment in an `<svg>` container carrying the shared
/// two-stop gradient palette. `label` is the accessibility label read by
/// non-visual consumers and must not be empty.
pub fn frame(view_box: &str, label: &str, body: &str) -> String {
    debug_assert!(!label.is_empty(), "diagram frames need an aria-label");
    format!(
        r##"<svg viewBox="{view_box}" role="img" aria-label="{label}">
  <defs>
    <linearGradient id="sky" x1="0" y1="0" x2="1" y2="1">
      <stop offset="0" stop-color="#e8f3ff"/>
      <stop offset="1" stop-color="#d6f5e8"/>
    </linearGradient>
    <linearGradient id="deep" x1="0" y1="0" x2="1" y2="1">
      <stop offset="0" stop-color="#0b6eff"/>
      <stop offset="1" stop-color="#16b879"/>
    </linearGradient>
  </defs>
  {body}
</svg>"##
    )
}

/// A rounded rectangle with a centered caption.
pub fn labeled_box(x: f64, y: f64, width: f64, height: f64, text: &str) -> String {
    let cx = fmt(x + width / 2.0);
    let cy = fmt(y + height / 2.0 + BASELINE_OFFSET);
    format!(
        "<rect x=\"{x}\" y=\"{y}\" rx=\"18\" ry=\"18\" width=\"{width}\" height=\"{height}\" \
         fill=\"url(#sky)\" stroke=\"{BOX_STROKE}\" stroke-width=\"2\"/>\n\
         <text x=\"{cx}\" y=\"{cy}\" text-anchor=\"middle\" font-size=\"13\" \
         fill=\"{CAPTION_INK}\" font-family=\"{FONT}\">{text}</text>",
        x = fmt(x),
        y = fmt(y),
        width = fmt(width),
        height = fmt(height),
    )
}

/// A straight line with a triangular arrowhead whose tip sits exactly at
/// `(x2, y2)`. The base corners are placed [`HEAD_LENGTH`] back along the
/// line and [`HEAD_HALF_WIDTH`] out to each side, so heads render the same
/// at any angle or length. A zero-length connector falls back to a
/// horizontal head.
pub fn connector(x1: f64, y1: f64, x2: f64, y2: f64, tone: Tone) -> String {
    let (dx, dy) = (x2 - x1, y2 - y1);
    let len = (dx * dx + dy * dy).sqrt();
    let (ux, uy) = if len == 0.0 { (1.0, 0.0) } else { (dx / len, dy / len) };
    let (bx, by) = (x2 - HEAD_LENGTH * ux, y2 - HEAD_LENGTH * uy);
    let (px, py) = (-uy, ux);
    format!(
        "<line x1=\"{x1}\" y1=\"{y1}\" x2=\"{x2}\" y2=\"{y2}\" stroke=\"{stroke}\" \
         stroke-width=\"4\" stroke-linecap=\"round\"/>\n\
         <polygon points=\"{ax},{ay} {bx},{by} {tx},{ty}\" fill=\"#16b879\"/>",
        x1 = fmt(x1),
        y1 = fmt(y1),
        x2 = fmt(x2),
        y2 = fmt(y2),
        stroke = tone.stroke(),
        ax = fmt(bx + HEAD_HALF_WIDTH * px),
        ay = fmt(by + HEAD_HALF_WIDTH * py),
        bx = fmt(bx - HEAD_HALF_WIDTH * px),
        by = fmt(by - HEAD_HALF_WIDTH * py),
        tx = fmt(x2),
        ty = fmt(y2),
    )
}

/// An unfilled rounded rectangle with a left-aligned caption anchored at a
/// fixed `(16, 22)` inset from the top-left corner.
pub fn annotation_note(x: f64, y: f64, width: f64, height: f64, text: &str) -> String {
    format!(
        "<rect x=\"{x}\" y=\"{y}\" rx=\"16\" ry=\"16\" width=\"{width}\" height=\"{height}\" \
         fill=\"none\" stroke=\"{BOX_STROKE}\" stroke-width=\"2\"/>\n\
         <text x=\"{tx}\" y=\"{ty}\" text-anchor=\"start\" font-size=\"12\" \
         fill=\"{NOTE_INK}\" font-family=\"{FONT}\">{text}</text>",
        x = fmt(x),
        y = fmt(y),
        width = fmt(width),
        height = fmt(height),
        tx = fmt(x + 16.0),
        ty = fmt(y + 22.0),
    )
}

/// A titled legend box sized to its content. The box height is exactly
/// `24 + 18 * lines.len()`; every line must fit with no clipping. An empty
/// `lines` slice yields a title-only legend.
pub fn legend(x: f64, y: f64, lines: &[&str]) -> String {
    let height = 24.0 + 18.0 * lines.len() as f64;
    let mut parts = vec![
        format!(
            "<rect x=\"{x}\" y=\"{y}\" width=\"{w}\" height=\"{h}\" rx=\"16\" ry=\"16\" \
             fill=\"none\" stroke=\"{BOX_STROKE}\" stroke-width=\"2\"/>",
            x = fmt(x),
            y = fmt(y),
            w = fmt(LEGEND_WIDTH),
            h = fmt(height),
        ),
        legend_line(x, y + 22.0, "Legend"),
    ];
    for (i, line) in lines.iter().enumerate() {
        parts.push(legend_line(x, y + 44.0 + 18.0 * i as f64, line));
    }
    parts.join("\n")
}

fn legend_line(x: f64, y: f64, text: &str) -> String {
    format!(
        "<text x=\"{tx}\" y=\"{ty}\" text-anchor=\"start\" font-size=\"12\" \
         fill=\"{NOTE_INK}\" font-family=\"{FONT}\">{text}</text>",
        tx = fmt(x + 16.0),
        ty = fmt(y),
    )
}

/// Formats a coordinate with at most two decimal places and no trailing
/// zeros, keeping whole-number geometry byte-stable across builds.
fn fmt(value: f64) -> String {
    let s = format!("{value:.2}");
    s.trim_end_matches('0').trim_end_matches('.').to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn frame_carries_label_and_palette() {
        let svg = frame("0 0 900 320", "Pipeline diagram", "<g/>");
        assert!(svg.starts_with("<svg viewBox=\"0 0 900 320\""));
        assert!(svg.contains("aria-label=\"Pipeline diagram\""));
        assert!(svg.contains("linearGradient id=\"sky\""));
        assert!(svg.contains("linearGradient id=\"deep\""));
        assert!(svg.contains("<g/>"));
    }

    #[test]
    fn labeled_box_centers_caption_with_baseline_offset() {
        let chip = labeled_box(70.0, 70.0, 240.0, 70.0, "Interface");
        assert!(chip.contains("x=\"190\" y=\"109\""));
        assert!(chip.contains(">Interface</text>"));
    }

    #[test]
    fn connector_tip_sits_at_endpoint() {
        let arrow = connector(310.0, 105.0, 330.0, 105.0, Tone::Flow);
        // Base corners 10 back, +/-7 out; tip exactly at (330, 105).
        assert!(arrow.contains("points=\"320,112 320,98 330,105\""));
        assert!(arrow.contains("stroke=\"url(#deep)\""));
    }

    #[test]
    fn connector_head_follows_line_angle() {
        let arrow = connector(0.0, 0.0, 0.0, 100.0, Tone::Constraint);
        // Straight down: base at y=90, corners +/-7 in x.
        assert!(arrow.contains("points=\"-7,90 7,90 0,100\""));
        assert!(arrow.contains("stroke=\"#0b6eff\""));
    }

    #[test]
    fn zero_length_connector_stays_well_formed() {
        let arrow = connector(50.0, 50.0, 50.0, 50.0, Tone::Flow);
        assert!(arrow.contains("points=\"40,57 40,43 50,50\""));
    }

    #[test]
    fn annotation_note_anchors_text_at_fixed_inset() {
        let note = annotation_note(110.0, 165.0, 330.0, 48.0, "Prediction pressure.");
        assert!(note.contains("fill=\"none\""));
        assert!(note.contains("x=\"126\" y=\"187\""));
    }

    #[test]
    fn legend_height_is_exactly_24_plus_18_per_line() {
        for n in 0..5 {
            let lines: Vec<String> = (0..n).map(|i| format!("Line {i}.")).collect();
            let refs: Vec<&str> = lines.iter().map(String::as_str).collect();
            let fragment = legend(70.0, 255.0, &refs);
            let expected = format!("height=\"{}\"", 24 + 18 * n);
            assert!(fragment.contains(&expected), "n={n}: {fragment}");
        }
    }

    #[test]
    fn legend_lines_step_by_18_from_44() {
        let fragment = legend(70.0, 255.0, &["First.", "Second."]);
        assert!(fragment.contains("y=\"277\">Legend</text>"));
        assert!(fragment.contains("y=\"299\">First.</text>"));
        assert!(fragment.contains("y=\"317\">Second.</text>"));
    }

    #[test]
    fn empty_legend_degrades_to_title_only() {
        let fragment = legend(0.0, 0.0, &[]);
        assert_eq!(fragment.matches("<text").count(), 1);
        assert!(fragment.contains("height=\"24\""));
    }
}
