//! Wiki glossary page data.
//!
//! Every wiki entry follows the same four-chapter shape, so a local helper
//! keeps the data declarative.

use vsavm_diagrams::{connector, labeled_box, legend, Tone};

use super::page;
use crate::page::{Page, PageKind};

#[allow(clippy::too_many_arguments)]
fn entry(
    slug: &str,
    title: &str,
    view_box: &str,
    diagram_label: &str,
    diagram_body: String,
    caption: &str,
    definition: &str,
    role: &str,
    mechanics: &str,
    further: &str,
    references: &[(&str, &str)],
) -> Page {
    page(
        PageKind::Wiki,
        slug,
        title,
        view_box,
        diagram_label,
        diagram_body,
        caption,
        &[
            ("Definition", definition),
            ("Role in VSAVM", role),
            ("Mechanics and implications", mechanics),
            ("Further reading", further),
        ],
        references,
    )
}

pub(super) fn pages() -> Vec<Page> {
    vec![
        entry(
            "vm",
            "Virtual Machine (VM)",
            "0 0 900 320",
            "Diagram of VM components: facts, rules, contexts, trace",
            [
                r##"<rect x="90" y="55" width="720" height="205" rx="26" ry="26" fill="none" stroke="#0b6eff" stroke-width="3"/>"##.to_string(),
                r##"<text x="120" y="85" text-anchor="start" font-size="13" fill="#2f4a63" font-family="Space Grotesk">VM state</text>"##.to_string(),
                labeled_box(130.0, 105.0, 210.0, 60.0, "Fact store"),
                labeled_box(360.0, 105.0, 210.0, 60.0, "Rule library"),
                labeled_box(590.0, 105.0, 180.0, 60.0, "Contexts"),
                labeled_box(130.0, 180.0, 300.0, 60.0, "Typed bindings"),
                labeled_box(450.0, 180.0, 320.0, 60.0, "Execution trace"),
                legend(
                    90.0,
                    270.0,
                    &[
                        "State is explicit and inspectable.",
                        "Instructions transform state.",
                        "Trace supports audit and debugging.",
                    ],
                ),
            ]
            .join("\n"),
            "The VM is the executable core that makes reasoning explicit through state and trace.",
            "A virtual machine is an abstract execution engine that runs programs over a defined state. In VSAVM, the VM is the concrete core that holds canonical facts, applies rules, and records execution traces.",
            "The VM provides the state that conditions generation and enforces the consistency contract by running bounded closure and detecting conflicts. It is the authority: retrieval proposes candidates, but the VM decides acceptability via execution.",
            "Because the VM state is discrete, VSAVM can attach stable identifiers to claims and scope. This allows deterministic conflict checks, repeatable boundary behavior, and operational explanations derived from traces instead of from post-hoc narratives.",
            "Virtual machines and symbolic execution provide foundational ideas for explicit state transitions and branching exploration. VSAVM adapts these ideas for reasoning under budgets and scope.",
            &[
                ("Virtual machine (Wikipedia)", "https://en.wikipedia.org/wiki/Virtual_machine"),
                ("Symbolic execution (Wikipedia)", "https://en.wikipedia.org/wiki/Symbolic_execution"),
                ("Trace (software) (Wikipedia)", "https://en.wikipedia.org/wiki/Trace_(software)"),
            ],
        ),
        entry(
            "vsa",
            "Vector Symbolic Architecture (VSA)",
            "0 0 900 320",
            "Diagram of VSA similarity shortlist feeding VM validation",
            [
                labeled_box(90.0, 70.0, 240.0, 70.0, "Hypervectors"),
                labeled_box(350.0, 70.0, 240.0, 70.0, "Similarity (top-K)"),
                labeled_box(610.0, 70.0, 200.0, 70.0, "Candidates"),
                connector(330.0, 105.0, 350.0, 105.0, Tone::Flow),
                connector(590.0, 105.0, 610.0, 105.0, Tone::Flow),
                labeled_box(220.0, 170.0, 520.0, 70.0, "Validate by execution + bounded closure"),
                connector(710.0, 140.0, 560.0, 170.0, Tone::Constraint),
                legend(
                    90.0,
                    255.0,
                    &[
                        "Similarity is not truth.",
                        "Top-K bounds the search surface.",
                        "VM remains the authority.",
                    ],
                ),
            ]
            .join("\n"),
            "VSA accelerates retrieval; the VM validates candidates under the consistency contract.",
            "Vector Symbolic Architecture represents symbols as high-dimensional vectors and supports operations such as binding and bundling. It functions as an associative index for fast retrieval and clustering.",
            "VSA reduces combinatorial search by shortlisting schemas and macro programs similar to a given span. It guides what the system explores under budget without deciding truth.",
            "VSAVM treats VSA output as proposals. Candidates are executed in the VM and checked under bounded closure. This separation preserves correctness: similarity accelerates search, but execution determines acceptability.",
            "Hyperdimensional computing and VSA surveys provide background on why high-dimensional representations support robust associative behavior. In VSAVM, these methods are used as search accelerators rather than as semantic authorities.",
            &[
                ("Vector symbolic architecture (Wikipedia)", "https://en.wikipedia.org/wiki/Vector_symbolic_architecture"),
                ("Hyperdimensional computing (Wikipedia)", "https://en.wikipedia.org/wiki/Hyperdimensional_computing"),
                ("Nearest neighbor search (Wikipedia)", "https://en.wikipedia.org/wiki/Nearest_neighbor_search"),
            ],
        ),
        entry(
            "event-stream",
            "Event stream",
            "0 0 900 320",
            "Diagram of typed events, payload, and context",
            [
                labeled_box(90.0, 70.0, 240.0, 70.0, "Typed events"),
                labeled_box(350.0, 70.0, 240.0, 70.0, "Discrete payload"),
                labeled_box(610.0, 70.0, 240.0, 70.0, "Context path"),
                connector(330.0, 105.0, 350.0, 105.0, Tone::Flow),
                connector(590.0, 105.0, 610.0, 105.0, Tone::Flow),
                labeled_box(210.0, 170.0, 540.0, 70.0, "Separators define scope for closure"),
                connector(480.0, 140.0, 480.0, 170.0, Tone::Constraint),
                legend(
                    90.0,
                    255.0,
                    &[
                        "One substrate for all modalities.",
                        "Context encodes scope.",
                        "Scope enables contradiction checks.",
                    ],
                ),
            ]
            .join("\n"),
            "The event stream is the canonical, scoped input substrate for VSAVM.",
            "An event stream is an ordered sequence of typed, discrete events. In VSAVM, each event includes a payload and a structural context path that preserves scope and boundaries.",
            "The event stream unifies text and multimodal inputs so that the VM and bounded closure operate on a single representation. It is the foundation for schema discovery, program compilation, and scope-aware conflict detection.",
            "Structural separators are explicit events that delimit where a fact applies. By keeping structure in the representation, the system can maintain local theories and avoid global inconsistency while still enforcing correctness within scope.",
            "Event stream processing is a broad topic. VSAVM uses the term in a representational sense: explicit structure and discrete units that support deterministic parsing and auditing.",
            &[
                ("Event stream processing (Wikipedia)", "https://en.wikipedia.org/wiki/Event_stream_processing"),
                ("Tokenization (Wikipedia)", "https://en.wikipedia.org/wiki/Tokenization_(lexical_analysis)"),
                ("Scope (computer science) (Wikipedia)", "https://en.wikipedia.org/wiki/Scope_(computer_science)"),
            ],
        ),
        entry(
            "bounded-closure",
            "Bounded closure",
            "0 0 900 340",
            "Diagram of closure under budget and conflict checks",
            [
                labeled_box(80.0, 70.0, 240.0, 70.0, "Facts + rules"),
                labeled_box(340.0, 70.0, 240.0, 70.0, "Derive consequences"),
                labeled_box(600.0, 70.0, 240.0, 70.0, "Check conflicts"),
                connector(320.0, 105.0, 340.0, 105.0, Tone::Flow),
                connector(580.0, 105.0, 600.0, 105.0, Tone::Flow),
                labeled_box(180.0, 170.0, 540.0, 70.0, "Budget: depth, branching, steps, time"),
                connector(480.0, 140.0, 480.0, 170.0, Tone::Constraint),
                legend(
                    80.0,
                    255.0,
                    &[
                        "Closure is transitive but bounded.",
                        "Scope makes conflicts meaningful.",
                        "Budget defines claim strength.",
                    ],
                ),
            ]
            .join("\n"),
            "Bounded closure explores consequences under explicit limits and gates what the system may claim.",
            "Bounded closure is a controlled approximation of transitive closure. It derives consequences of rules and executions only up to explicit limits such as depth, branching, step count, or time.",
            "Bounded closure is the enforcement mechanism behind VSAVM correctness. It rejects candidates that introduce contradictions within scope and determines whether a conclusion is robust, conditional, or indeterminate under the current budget.",
            "Closure requires canonical facts and explicit negation. Conflicts are detected when the same canonical fact identifier appears with opposing polarity in the same scope. Budgets make the exploration boundary explicit and auditable.",
            "Bounded closure connects to search, verification, and model checking. VSAVM uses closure as a budgeted gate that turns correctness into an operational property.",
            &[
                ("Transitive closure (Wikipedia)", "https://en.wikipedia.org/wiki/Transitive_closure"),
                ("Consistency (Wikipedia)", "https://en.wikipedia.org/wiki/Consistency"),
                ("Verification and validation (Wikipedia)", "https://en.wikipedia.org/wiki/Verification_and_validation"),
            ],
        ),
        entry(
            "beam-search",
            "Beam search",
            "0 0 900 320",
            "Diagram of keeping top-K branches",
            [
                labeled_box(90.0, 80.0, 200.0, 60.0, "Root"),
                labeled_box(330.0, 55.0, 240.0, 55.0, "Branch 1"),
                labeled_box(330.0, 130.0, 240.0, 55.0, "Branch 2"),
                labeled_box(330.0, 205.0, 240.0, 55.0, "Branch 3"),
                labeled_box(610.0, 130.0, 240.0, 65.0, "Keep top-K"),
                connector(290.0, 110.0, 330.0, 82.0, Tone::Flow),
                connector(290.0, 110.0, 330.0, 157.0, Tone::Flow),
                connector(290.0, 110.0, 330.0, 232.0, Tone::Flow),
                connector(570.0, 157.0, 610.0, 162.0, Tone::Flow),
                legend(
                    90.0,
                    265.0,
                    &[
                        "Beam width is a budget parameter.",
                        "Keeps multiple hypotheses alive.",
                        "Balances cost and coverage.",
                    ],
                ),
            ]
            .join("\n"),
            "Beam search maintains multiple candidate branches while keeping computation bounded.",
            "Beam search keeps only a fixed number of best candidates at each step, providing a practical compromise between exhaustive search and greedy choice.",
            "VSAVM uses beam-like strategies for query compilation and for closure exploration. Beams make ambiguity explicit and allow the system to prune candidates that conflict under closure.",
            "Beam width impacts the strength of conclusions. A narrow beam can miss conflicting branches; a wider beam improves coverage but increases cost. VSAVM ties robustness to the budget and can downgrade to conditional outputs when coverage is limited.",
            "Beam search is widely used in sequence decoding and heuristic search. In VSAVM, beam scoring incorporates both predictive fit and consistency penalties.",
            &[
                ("Beam search (Wikipedia)", "https://en.wikipedia.org/wiki/Beam_search"),
                ("Heuristic (Wikipedia)", "https://en.wikipedia.org/wiki/Heuristic"),
                ("Best-first search (Wikipedia)", "https://en.wikipedia.org/wiki/Best-first_search"),
            ],
        ),
        entry(
            "mdl",
            "Minimum Description Length (MDL)",
            "0 0 900 320",
            "Diagram of balancing fit and complexity",
            [
                labeled_box(120.0, 90.0, 260.0, 70.0, "Data fit"),
                labeled_box(520.0, 90.0, 260.0, 70.0, "Complexity"),
                r##"<line x1="450" y1="80" x2="450" y2="235" stroke="#0b6eff" stroke-width="4" stroke-linecap="round"/>"##.to_string(),
                r##"<text x="450" y="70" text-anchor="middle" font-size="12" fill="#2f4a63" font-family="Space Grotesk">balance</text>"##.to_string(),
                labeled_box(270.0, 185.0, 360.0, 70.0, "Promote compact programs that still explain"),
                legend(
                    120.0,
                    265.0,
                    &[
                        "Bias toward reusable structure.",
                        "Penalize brittle special cases.",
                        "Supports macro consolidation.",
                    ],
                ),
            ]
            .join("\n"),
            "MDL favors compact executable structure that still explains data, supporting stable macro programs.",
            "MDL is a model selection principle that prefers hypotheses minimizing combined description length of model plus data given model. It formalizes the intuition that good structure compresses.",
            "VSAVM uses MDL as pressure for discovering and consolidating compact executable programs. If a reasoning move compresses repeated patterns, it becomes a candidate for macro promotion.",
            "MDL acts as a complexity guardrail. Without it, the system may proliferate brittle rules that fit locally but explode branching or create contradictions elsewhere. Combined with closure checks, MDL helps keep the program library stable and reusable.",
            "The MDL literature connects compression and inference. VSAVM borrows the principle to prioritize programmatic explanations that are both short and consistent under closure.",
            &[
                ("Minimum description length (Wikipedia)", "https://en.wikipedia.org/wiki/Minimum_description_length"),
                ("The MDL Book (Grünwald)", "https://www.grunwald.nl/mdlbook/"),
                ("Occam's razor (Wikipedia)", "https://en.wikipedia.org/wiki/Occam%27s_razor"),
            ],
        ),
        entry(
            "rl",
            "Reinforcement Learning (RL)",
            "0 0 900 320",
            "Diagram of action, feedback, and preference update",
            [
                labeled_box(90.0, 70.0, 240.0, 70.0, "Choose"),
                labeled_box(350.0, 70.0, 240.0, 70.0, "Feedback"),
                labeled_box(610.0, 70.0, 240.0, 70.0, "Update"),
                connector(330.0, 105.0, 350.0, 105.0, Tone::Flow),
                connector(590.0, 105.0, 610.0, 105.0, Tone::Flow),
                labeled_box(210.0, 170.0, 520.0, 70.0, "Penalty when closure finds contradictions"),
                connector(470.0, 140.0, 470.0, 170.0, Tone::Constraint),
                legend(
                    90.0,
                    255.0,
                    &[
                        "Used as shaping in VSAVM.",
                        "Acts on program choices, not tokens.",
                        "Consistency provides key signals.",
                    ],
                ),
            ]
            .join("\n"),
            "RL supplies shaping signals that bias high-level choices toward stable candidates.",
            "Reinforcement learning learns preferences over actions using feedback signals such as rewards and penalties.",
            "VSAVM uses RL as shaping when multiple plausible candidates exist. The goal is to select interpretations and response modes that remain stable under bounded closure, not to optimize token-by-token behavior.",
            "The action space is coarse: choose a schema, choose a macro program, choose a response mode. Closure-derived contradictions provide negative signals that discourage unstable choices. RL complements, but does not replace, explicit closure gating.",
            "RL is a broad area. VSAVM’s practical use is closer to bandit-like shaping than to full on-policy token-level control.",
            &[
                ("Reinforcement learning (Wikipedia)", "https://en.wikipedia.org/wiki/Reinforcement_learning"),
                ("Sutton & Barto (book)", "http://incompleteideas.net/book/the-book-2nd.html"),
                ("Multi-armed bandit (Wikipedia)", "https://en.wikipedia.org/wiki/Multi-armed_bandit"),
            ],
        ),
        entry(
            "schema",
            "Schema",
            "0 0 900 320",
            "Diagram of schema frame with slots and bindings",
            [
                r##"<rect x="120" y="70" width="660" height="180" rx="26" ry="26" fill="none" stroke="#0b6eff" stroke-width="3"/>"##.to_string(),
                r##"<text x="150" y="100" text-anchor="start" font-size="13" fill="#2f4a63" font-family="Space Grotesk">Schema frame</text>"##.to_string(),
                labeled_box(160.0, 125.0, 240.0, 55.0, "Intent"),
                labeled_box(420.0, 125.0, 320.0, 55.0, "Typed slots"),
                labeled_box(160.0, 195.0, 240.0, 55.0, "Bindings"),
                labeled_box(420.0, 195.0, 320.0, 55.0, "Program skeleton"),
                legend(
                    120.0,
                    265.0,
                    &[
                        "Frames structure repeated intents.",
                        "Slots are filled discretely.",
                        "Skeletons become executable programs.",
                    ],
                ),
            ]
            .join("\n"),
            "Schemas map paraphrases into structured frames that compile into executable programs.",
            "A schema is a structured representation of a recurring intent, often expressed as a frame with slots to be filled.",
            "Schemas are the bridge between language and execution. They constrain compilation and generation by defining what roles exist, what types are allowed, and how a surface span maps to program structure.",
            "Typed slots reduce branching and improve auditability. The system can log which span filled which slot and which assumptions were required. VSA can help retrieve candidate schemas, but final bindings must be validated by execution and closure checks.",
            "Schemas appear in cognitive science and linguistics; VSAVM uses them as an engineering abstraction that supports compilation and verification.",
            &[
                ("Schema (Wikipedia)", "https://en.wikipedia.org/wiki/Schema_(psychology)"),
                ("Frame semantics (Wikipedia)", "https://en.wikipedia.org/wiki/Frame_semantics"),
                ("Program synthesis (Wikipedia)", "https://en.wikipedia.org/wiki/Program_synthesis"),
            ],
        ),
        entry(
            "macro-program",
            "Macro program",
            "0 0 900 320",
            "Diagram of consolidating steps into a macro",
            [
                labeled_box(120.0, 80.0, 190.0, 60.0, "Step 1"),
                labeled_box(330.0, 80.0, 190.0, 60.0, "Step 2"),
                labeled_box(540.0, 80.0, 190.0, 60.0, "Step 3"),
                connector(310.0, 110.0, 330.0, 110.0, Tone::Flow),
                connector(520.0, 110.0, 540.0, 110.0, Tone::Flow),
                labeled_box(300.0, 185.0, 300.0, 70.0, "Macro program"),
                r##"<path d="M 215 140 C 260 170, 310 190, 350 205" fill="none" stroke="#0b6eff" stroke-width="4" stroke-linecap="round"/>"##.to_string(),
                r##"<path d="M 425 140 C 430 165, 430 185, 450 205" fill="none" stroke="#0b6eff" stroke-width="4" stroke-linecap="round"/>"##.to_string(),
                r##"<path d="M 635 140 C 590 170, 555 190, 550 205" fill="none" stroke="#0b6eff" stroke-width="4" stroke-linecap="round"/>"##.to_string(),
                legend(
                    120.0,
                    265.0,
                    &[
                        "Macros compress repeated routines.",
                        "Promoted after stable success.",
                        "Reduce search and cost.",
                    ],
                ),
            ]
            .join("\n"),
            "Macro programs compress repeated multi-step routines into reusable executable blocks.",
            "A macro program is a consolidated instruction sequence treated as a reusable unit.",
            "Macro programs reduce the need for repeated program search. They represent stabilized reasoning moves that can be invoked efficiently and audited as single units.",
            "Promotion should be constrained by MDL-style compression and by closure-based health checks. A macro that predicts well but causes contradictions or branching blow-ups should be demoted or scoped.",
            "Macros and abstraction are common in programming; VSAVM uses macro programs as explicit reusable reasoning primitives rather than implicit latent features.",
            &[
                ("Abstraction (Wikipedia)", "https://en.wikipedia.org/wiki/Abstraction_(computer_science)"),
                ("Program synthesis (Wikipedia)", "https://en.wikipedia.org/wiki/Program_synthesis"),
                ("Minimum description length (Wikipedia)", "https://en.wikipedia.org/wiki/Minimum_description_length"),
            ],
        ),
        entry(
            "macro-token",
            "Macro token",
            "0 0 900 320",
            "Diagram of reversible compression from tokens to macro unit",
            [
                labeled_box(90.0, 70.0, 240.0, 70.0, "Tokens"),
                labeled_box(350.0, 70.0, 240.0, 70.0, "Compression"),
                labeled_box(610.0, 70.0, 240.0, 70.0, "Macro token"),
                connector(330.0, 105.0, 350.0, 105.0, Tone::Flow),
                connector(590.0, 105.0, 610.0, 105.0, Tone::Flow),
                labeled_box(210.0, 170.0, 520.0, 70.0, "Invariant: deterministic expansion to tokens"),
                connector(470.0, 140.0, 470.0, 170.0, Tone::Constraint),
                legend(
                    90.0,
                    255.0,
                    &[
                        "Reduces entropy at phrase level.",
                        "Must be reversible for audit.",
                        "Supports stable scoring and decoding.",
                    ],
                ),
            ]
            .join("\n"),
            "Macro tokens compress recurring patterns while preserving deterministic expansion for evaluation and decoding.",
            "A macro token is a compressed phrase-level unit derived from repeated token sequences.",
            "Macro tokens help stabilize next-phrase prediction and reduce search cost. They can also become anchors for schema discovery by turning repeated patterns into stable discrete units.",
            "Reversibility is mandatory. If expansion is ambiguous, scoring becomes inconsistent and the system cannot maintain traceability. VSAVM treats deterministic expansion as a hard constraint to preserve correctness.",
            "Macro units relate to tokenization and compression. VSAVM’s emphasis is on reversibility and auditability under the consistency contract.",
            &[
                ("Tokenization (Wikipedia)", "https://en.wikipedia.org/wiki/Tokenization_(lexical_analysis)"),
                ("Data compression (Wikipedia)", "https://en.wikipedia.org/wiki/Data_compression"),
                ("Minimum description length (Wikipedia)", "https://en.wikipedia.org/wiki/Minimum_description_length"),
            ],
        ),
        entry(
            "fact-store",
            "Fact store",
            "0 0 900 340",
            "Diagram of canonical fact_id, polarity, and scope",
            [
                labeled_box(90.0, 70.0, 240.0, 70.0, "fact_id"),
                labeled_box(350.0, 70.0, 240.0, 70.0, "polarity"),
                labeled_box(610.0, 70.0, 240.0, 70.0, "scope"),
                connector(330.0, 105.0, 350.0, 105.0, Tone::Flow),
                connector(590.0, 105.0, 610.0, 105.0, Tone::Flow),
                labeled_box(180.0, 170.0, 540.0, 70.0, "Conflict if same fact_id has opposing polarity in same scope"),
                connector(480.0, 140.0, 480.0, 170.0, Tone::Constraint),
                legend(
                    90.0,
                    255.0,
                    &[
                        "Canonicalization enables comparison.",
                        "Scope prevents global collapse.",
                        "Used by closure and audit.",
                    ],
                ),
            ]
            .join("\n"),
            "The fact store holds canonical claims with explicit polarity and scope to make contradiction checks computable.",
            "A fact store is a structured memory of assertions. In VSAVM it stores canonical fact identifiers alongside polarity and scope metadata.",
            "The fact store is the substrate for closure and conflict detection. It is where derived facts are accumulated and where contradictions are detected during bounded closure.",
            "The key invariants are canonical identifiers, explicit negation via polarity, and explicit scope derived from structural boundaries. These make conflict detection robust to paraphrases and meaningful under localized contexts.",
            "Fact stores are related to knowledge bases; VSAVM’s emphasis is on canonical IDs and scope-aware closure rather than on open-world accumulation.",
            &[
                ("Knowledge base (Wikipedia)", "https://en.wikipedia.org/wiki/Knowledge_base"),
                ("Consistency (Wikipedia)", "https://en.wikipedia.org/wiki/Consistency"),
                ("Context (computing) (Wikipedia)", "https://en.wikipedia.org/wiki/Context_(computing)"),
            ],
        ),
        entry(
            "fact-id",
            "Fact identifier",
            "0 0 900 320",
            "Diagram of surface forms mapping to canonical ID",
            [
                labeled_box(90.0, 85.0, 280.0, 65.0, "Surface A"),
                labeled_box(90.0, 170.0, 280.0, 65.0, "Surface B"),
                labeled_box(450.0, 125.0, 360.0, 80.0, "Canonical fact_id"),
                connector(370.0, 118.0, 450.0, 165.0, Tone::Flow),
                connector(370.0, 202.0, 450.0, 165.0, Tone::Flow),
                legend(
                    90.0,
                    255.0,
                    &[
                        "Equivalence becomes explicit.",
                        "Contradictions become computable.",
                        "Supports conditional assumptions.",
                    ],
                ),
            ]
            .join("\n"),
            "Canonical identifiers turn paraphrase variation into a stable unit for closure and contradiction checks.",
            "A fact identifier is the internal canonical key for an assertion.",
            "Fact identifiers enable reliable conflict detection: a contradiction is opposing polarity for the same identifier inside scope. They also provide stable handles for assumptions and trace references.",
            "Schemas and canonicalization map surface forms into internal structures. VSA can propose mappings by similarity, but the final mapping must be validated by execution and consistency constraints to preserve the contract.",
            "Canonicalization and normal forms underpin the engineering practice of making equivalence explicit. VSAVM depends on this to make correctness computable under paraphrase variation.",
            &[
                ("Identifier (Wikipedia)", "https://en.wikipedia.org/wiki/Identifier"),
                ("Canonicalization (Wikipedia)", "https://en.wikipedia.org/wiki/Canonicalization"),
                ("Normal form (Wikipedia)", "https://en.wikipedia.org/wiki/Normal_form"),
            ],
        ),
        entry(
            "hypervector",
            "Hypervector",
            "0 0 900 320",
            "Diagram of deterministic seed to hypervector pipeline",
            [
                labeled_box(110.0, 90.0, 240.0, 70.0, "Stable seed"),
                labeled_box(370.0, 90.0, 240.0, 70.0, "Hash"),
                labeled_box(630.0, 90.0, 240.0, 70.0, "Hypervector"),
                connector(350.0, 125.0, 370.0, 125.0, Tone::Flow),
                connector(610.0, 125.0, 630.0, 125.0, Tone::Flow),
                labeled_box(210.0, 190.0, 520.0, 70.0, "Used for similarity, binding, bundling"),
                connector(540.0, 160.0, 500.0, 190.0, Tone::Constraint),
                legend(
                    110.0,
                    265.0,
                    &[
                        "Deterministic keys support reproducibility.",
                        "Operations build structured prototypes.",
                        "Similarity accelerates search.",
                    ],
                ),
            ]
            .join("\n"),
            "Hypervectors are deterministic high-dimensional keys used for associative retrieval and structured operations in VSA.",
            "A hypervector is a high-dimensional vector used to represent a symbol in hyperdimensional computing and VSA.",
            "In VSAVM, hypervectors serve as stable keys for retrieval and clustering. They accelerate schema discovery and candidate selection without defining truth.",
            "Hypervectors are generated deterministically from stable hashes, enabling reproducibility. Binding and bundling operations build structured composites and prototypes. Retrieved candidates are validated by the VM under bounded closure.",
            "Hyperdimensional computing provides background on why random-like high-dimensional vectors support robust associative behavior. VSAVM uses these ideas for indexing and search acceleration.",
            &[
                ("Hyperdimensional computing (Wikipedia)", "https://en.wikipedia.org/wiki/Hyperdimensional_computing"),
                ("Hash function (Wikipedia)", "https://en.wikipedia.org/wiki/Hash_function"),
                ("Vector symbolic architecture (Wikipedia)", "https://en.wikipedia.org/wiki/Vector_symbolic_architecture"),
            ],
        ),
        entry(
            "binding",
            "Binding",
            "0 0 900 320",
            "Diagram of role and filler bound into composite",
            [
                labeled_box(140.0, 100.0, 260.0, 70.0, "Role"),
                labeled_box(500.0, 100.0, 260.0, 70.0, "Filler"),
                labeled_box(320.0, 200.0, 260.0, 70.0, "Bound composite"),
                connector(320.0, 135.0, 370.0, 200.0, Tone::Constraint),
                connector(630.0, 135.0, 520.0, 200.0, Tone::Constraint),
                legend(
                    140.0,
                    275.0,
                    &[
                        "Encodes relational structure.",
                        "Used for slot-role representations.",
                        "Improves structured retrieval.",
                    ],
                ),
            ]
            .join("\n"),
            "Binding introduces relational structure into VSA representations, enabling slot-aware retrieval.",
            "Binding is a VSA operation that combines two vectors into a structured composite representation.",
            "VSAVM can use binding to represent typed slot assignments and relations in schema prototypes and span representations.",
            "Binding prevents the collapse of structure into bag-of-words similarity. It helps distinguish which value fills which role, supporting compilation into executable programs with explicit bindings.",
            "Different VSA variants implement binding differently, but the intent is consistent: bind roles to fillers to preserve structure in a distributed representation.",
            &[
                ("Vector symbolic architecture (Wikipedia)", "https://en.wikipedia.org/wiki/Vector_symbolic_architecture"),
                ("Hyperdimensional computing (Wikipedia)", "https://en.wikipedia.org/wiki/Hyperdimensional_computing"),
                ("Holographic reduced representation (Wikipedia)", "https://en.wikipedia.org/wiki/Holographic_reduced_representation"),
            ],
        ),
        entry(
            "bundling",
            "Bundling",
            "0 0 900 320",
            "Diagram of aggregating multiple vectors into a prototype",
            [
                labeled_box(130.0, 90.0, 200.0, 60.0, "A"),
                labeled_box(350.0, 90.0, 200.0, 60.0, "B"),
                labeled_box(570.0, 90.0, 200.0, 60.0, "C"),
                labeled_box(350.0, 200.0, 220.0, 70.0, "Prototype"),
                r##"<path d="M 230 150 C 285 180, 330 195, 360 215" fill="none" stroke="#0b6eff" stroke-width="4" stroke-linecap="round"/>"##.to_string(),
                r##"<path d="M 450 150 C 440 175, 435 195, 435 215" fill="none" stroke="#0b6eff" stroke-width="4" stroke-linecap="round"/>"##.to_string(),
                r##"<path d="M 670 150 C 610 180, 570 195, 560 215" fill="none" stroke="#0b6eff" stroke-width="4" stroke-linecap="round"/>"##.to_string(),
                legend(
                    130.0,
                    275.0,
                    &[
                        "Aggregates evidence across instances.",
                        "Builds paraphrase and schema prototypes.",
                        "Supports federated merging.",
                    ],
                ),
            ]
            .join("\n"),
            "Bundling aggregates multiple vectors into a prototype representation used for clustering and schema prototypes.",
            "Bundling is a VSA operation that aggregates multiple vectors into a prototype that captures shared structure.",
            "VSAVM uses bundling to form prototypes for schemas and macro programs and to cluster paraphrases under a shared representation.",
            "Bundling is compatible with federation: prototypes can be merged across clients by further bundling. Bundled candidates remain proposals; the VM validates conclusions through execution and closure checks.",
            "Bundling is one of the simplest VSA operations and is valuable for robust prototypes that tolerate noise and partial overlap.",
            &[
                ("Vector symbolic architecture (Wikipedia)", "https://en.wikipedia.org/wiki/Vector_symbolic_architecture"),
                ("Hyperdimensional computing (Wikipedia)", "https://en.wikipedia.org/wiki/Hyperdimensional_computing"),
                ("Federated learning (Wikipedia)", "https://en.wikipedia.org/wiki/Federated_learning"),
            ],
        ),
        entry(
            "canonicalization",
            "Canonicalization",
            "0 0 900 320",
            "Diagram of surface to canonical mapping",
            [
                labeled_box(90.0, 90.0, 280.0, 70.0, "Surface"),
                labeled_box(390.0, 90.0, 200.0, 70.0, "Normalize"),
                labeled_box(610.0, 90.0, 240.0, 70.0, "Canonical"),
                connector(370.0, 125.0, 390.0, 125.0, Tone::Flow),
                connector(590.0, 125.0, 610.0, 125.0, Tone::Flow),
                labeled_box(210.0, 190.0, 520.0, 70.0, "Enables: closure, equality, conflicts"),
                connector(520.0, 160.0, 480.0, 190.0, Tone::Constraint),
                legend(
                    90.0,
                    265.0,
                    &[
                        "Canonical form is the unit of checks.",
                        "Paraphrases map to stable IDs.",
                        "Required for correctness under closure.",
                    ],
                ),
            ]
            .join("\n"),
            "Canonicalization aligns diverse surface forms into stable internal representations used by closure and conflict detection.",
            "Canonicalization maps multiple representations into a single normalized form so equivalence and comparison are well-defined.",
            "VSAVM relies on canonicalization to detect contradictions across paraphrases. Without canonical identifiers, closure cannot reliably detect that two wordings refer to the same claim.",
            "Canonicalization is guided by schemas and may be accelerated by VSA suggestions, but it must remain deterministic and validated. Canonicalization produces fact identifiers with explicit polarity and scope so contradictions are computable.",
            "Canonicalization is closely related to normal forms. VSAVM uses it as a core correctness mechanism, not a presentation detail.",
            &[
                ("Canonicalization (Wikipedia)", "https://en.wikipedia.org/wiki/Canonicalization"),
                ("Normal form (Wikipedia)", "https://en.wikipedia.org/wiki/Normal_form"),
                ("Consistency (Wikipedia)", "https://en.wikipedia.org/wiki/Consistency"),
            ],
        ),
        entry(
            "context-scope",
            "Context and scope",
            "0 0 900 320",
            "Diagram of nested scope boundaries",
            [
                r##"<rect x="120" y="75" width="660" height="190" rx="26" ry="26" fill="none" stroke="#7fb3e6" stroke-width="3"/>"##.to_string(),
                r##"<text x="150" y="105" text-anchor="start" font-size="13" fill="#2f4a63" font-family="Space Grotesk">Document</text>"##.to_string(),
                r##"<rect x="190" y="120" width="520" height="135" rx="24" ry="24" fill="none" stroke="#0b6eff" stroke-width="3"/>"##.to_string(),
                r##"<text x="220" y="150" text-anchor="start" font-size="13" fill="#2f4a63" font-family="Space Grotesk">Section</text>"##.to_string(),
                r##"<rect x="270" y="160" width="360" height="75" rx="20" ry="20" fill="none" stroke="#16b879" stroke-width="3"/>"##.to_string(),
                r##"<text x="300" y="195" text-anchor="start" font-size="13" fill="#2f4a63" font-family="Space Grotesk">Local context</text>"##.to_string(),
                legend(
                    120.0,
                    270.0,
                    &[
                        "Scope controls interaction under closure.",
                        "Supports multiple local theories.",
                        "Avoids global contradiction explosion.",
                    ],
                ),
            ]
            .join("\n"),
            "Scope boundaries define where a claim holds and where contradictions are meaningful.",
            "Context and scope define the boundary within which a statement is interpreted and interacts with other statements.",
            "VSAVM uses scope derived from structural separators to localize inference and contradiction checks. This prevents incompatible sources from collapsing into a single inconsistent base.",
            "Scope is carried through execution as context metadata. Conflict checks require scope: a contradiction is opposing polarity for the same canonical fact identifier within the same scope. Without scope, correctness becomes either impossible or meaningless.",
            "Scope is a standard notion in computing; VSAVM extends it to reasoning and verification by treating document structure as semantic boundaries.",
            &[
                ("Scope (computer science) (Wikipedia)", "https://en.wikipedia.org/wiki/Scope_(computer_science)"),
                ("Context (computing) (Wikipedia)", "https://en.wikipedia.org/wiki/Context_(computing)"),
                ("Consistency (Wikipedia)", "https://en.wikipedia.org/wiki/Consistency"),
            ],
        ),
        entry(
            "query-compiler",
            "NL to query compiler",
            "0 0 900 320",
            "Diagram of question to schema to program",
            [
                labeled_box(90.0, 90.0, 240.0, 70.0, "Question"),
                labeled_box(350.0, 90.0, 240.0, 70.0, "Schema"),
                labeled_box(610.0, 90.0, 240.0, 70.0, "Program"),
                connector(330.0, 125.0, 350.0, 125.0, Tone::Flow),
                connector(590.0, 125.0, 610.0, 125.0, Tone::Flow),
                labeled_box(210.0, 190.0, 520.0, 70.0, "Search + validation under closure"),
                connector(520.0, 160.0, 480.0, 190.0, Tone::Constraint),
                legend(
                    90.0,
                    265.0,
                    &[
                        "Compilation is hypothesis generation.",
                        "Programs are executable artifacts.",
                        "Closure enforces honesty.",
                    ],
                ),
            ]
            .join("\n"),
            "Questions become executable programs via schemas, with search and closure validation enforcing correctness.",
            "An NL to query compiler transforms natural language questions into executable query programs.",
            "In VSAVM, compilation is central because it makes questions operational and auditable. It enables answers derived by execution and bounded closure rather than by free-form continuation.",
            "The compiler retrieves candidate schemas, fills typed slots, emits a program, and evaluates candidates with early closure checks. Multiple candidates can be kept in a beam to handle ambiguity explicitly and to support conditional results.",
            "Program synthesis provides a useful analogy: propose programs and validate them against constraints. VSAVM applies this pattern to query programs guided by retrieval and compression pressure.",
            &[
                ("Program synthesis (Wikipedia)", "https://en.wikipedia.org/wiki/Program_synthesis"),
                ("Beam search (Wikipedia)", "https://en.wikipedia.org/wiki/Beam_search"),
                ("Information retrieval (Wikipedia)", "https://en.wikipedia.org/wiki/Information_retrieval"),
            ],
        ),
        entry(
            "multimodal",
            "Multimodal",
            "0 0 900 340",
            "Diagram of modalities converging into event stream and VM",
            [
                labeled_box(90.0, 70.0, 200.0, 60.0, "Text"),
                labeled_box(90.0, 150.0, 200.0, 60.0, "Audio"),
                labeled_box(90.0, 230.0, 200.0, 60.0, "Image/Video"),
                labeled_box(360.0, 140.0, 260.0, 80.0, "Event stream"),
                labeled_box(660.0, 140.0, 180.0, 80.0, "VM"),
                connector(290.0, 100.0, 360.0, 180.0, Tone::Flow),
                connector(290.0, 180.0, 360.0, 180.0, Tone::Flow),
                connector(290.0, 260.0, 360.0, 180.0, Tone::Flow),
                connector(620.0, 180.0, 660.0, 180.0, Tone::Flow),
                legend(
                    360.0,
                    275.0,
                    &[
                        "Inputs become discrete events.",
                        "Structure carries scope.",
                        "One core handles all modalities.",
                    ],
                ),
            ]
            .join("\n"),
            "Multiple modalities converge into a single event stream so the same closure rules apply.",
            "Multimodal processing integrates multiple input or output modalities such as text, audio, and images.",
            "VSAVM is multimodal by representation: all modalities become event streams. This allows one VM and one correctness contract to operate uniformly across modalities.",
            "Audio becomes transcript events with timing; images and video become symbolic descriptors or discrete tokens. Structural separators define scope even in temporal streams. The VM remains modality-agnostic because it consumes discrete events and canonical facts.",
            "Multimodal learning literature is broad. VSAVM’s emphasis is on representation unification and execution-based checking, not on any specific encoder design.",
            &[
                ("Multimodal learning (Wikipedia)", "https://en.wikipedia.org/wiki/Multimodal_learning"),
                ("Event stream processing (Wikipedia)", "https://en.wikipedia.org/wiki/Event_stream_processing"),
                ("Computer vision (Wikipedia)", "https://en.wikipedia.org/wiki/Computer_vision"),
            ],
        ),
        entry(
            "symbolic-execution",
            "Symbolic execution",
            "0 0 900 320",
            "Diagram of branching paths and checks",
            [
                labeled_box(90.0, 90.0, 220.0, 60.0, "Symbols"),
                labeled_box(340.0, 65.0, 220.0, 55.0, "Branch A"),
                labeled_box(340.0, 140.0, 220.0, 55.0, "Branch B"),
                labeled_box(340.0, 215.0, 220.0, 55.0, "Branch C"),
                labeled_box(610.0, 140.0, 240.0, 65.0, "Constraints"),
                connector(310.0, 120.0, 340.0, 92.0, Tone::Flow),
                connector(310.0, 120.0, 340.0, 167.0, Tone::Flow),
                connector(310.0, 120.0, 340.0, 242.0, Tone::Flow),
                connector(560.0, 167.0, 610.0, 172.0, Tone::Flow),
                legend(
                    90.0,
                    275.0,
                    &[
                        "Explore multiple paths explicitly.",
                        "Prune with constraints.",
                        "Budgets bound exploration.",
                    ],
                ),
            ]
            .join("\n"),
            "Symbolic execution explores multiple branches explicitly and uses constraints to prune inconsistent paths.",
            "Symbolic execution runs programs with symbolic inputs, exploring multiple branches while accumulating constraints.",
            "VSAVM uses symbolic execution ideas to manage ambiguity and nondeterminism in interpretation and closure exploration.",
            "Branching makes uncertainty explicit. Robust conclusions must survive across explored branches; conditional conclusions are tied to assumptions. Constraints and closure checks prune or downgrade inconsistent branches under budget.",
            "Symbolic execution underpins many verification tools. VSAVM adapts the idea to reasoning about language-derived programs under bounded closure.",
            &[
                ("Symbolic execution (Wikipedia)", "https://en.wikipedia.org/wiki/Symbolic_execution"),
                ("Program analysis (Wikipedia)", "https://en.wikipedia.org/wiki/Program_analysis"),
                ("Constraint satisfaction (Wikipedia)", "https://en.wikipedia.org/wiki/Constraint_satisfaction_problem"),
            ],
        ),
        entry(
            "federated-learning",
            "Federated learning",
            "0 0 900 340",
            "Diagram of clients aggregating artifacts with validation",
            [
                labeled_box(90.0, 70.0, 200.0, 60.0, "Client A"),
                labeled_box(90.0, 150.0, 200.0, 60.0, "Client B"),
                labeled_box(90.0, 230.0, 200.0, 60.0, "Client C"),
                labeled_box(360.0, 140.0, 240.0, 80.0, "Aggregation"),
                labeled_box(650.0, 120.0, 200.0, 80.0, "Shared"),
                labeled_box(650.0, 215.0, 200.0, 80.0, "Validation"),
                connector(290.0, 100.0, 360.0, 180.0, Tone::Flow),
                connector(290.0, 180.0, 360.0, 180.0, Tone::Flow),
                connector(290.0, 260.0, 360.0, 180.0, Tone::Flow),
                connector(600.0, 180.0, 650.0, 160.0, Tone::Flow),
                connector(750.0, 200.0, 750.0, 215.0, Tone::Constraint),
                legend(
                    360.0,
                    285.0,
                    &[
                        "Share artifacts, not raw data.",
                        "Validate before promotion.",
                        "Supports modular libraries.",
                    ],
                ),
            ]
            .join("\n"),
            "Federation shares artifacts and applies validation to prevent polluted rule libraries.",
            "Federated learning trains across clients without centralizing raw data, using aggregated updates or artifacts.",
            "VSAVM can federate discrete statistics, VSA prototypes, and executable modules such as schemas and macro programs. This aligns naturally with modular learning and auditability.",
            "The main risk is rule pollution. VSAVM mitigates this by requiring closure-based health checks before promoting new rules into a shared library. Modules can be versioned and rolled back more transparently than dense parameter deltas.",
            "Federated learning is often paired with privacy techniques such as differential privacy. VSAVM’s approach emphasizes federating explicit artifacts with governance via consistency checks.",
            &[
                ("Federated learning (Wikipedia)", "https://en.wikipedia.org/wiki/Federated_learning"),
                ("Differential privacy (Wikipedia)", "https://en.wikipedia.org/wiki/Differential_privacy"),
                ("Privacy (Wikipedia)", "https://en.wikipedia.org/wiki/Privacy"),
            ],
        ),
        entry(
            "trustworthy-ai",
            "Trustworthy AI",
            "0 0 900 320",
            "Diagram of trace, checks, and honest output modes",
            [
                labeled_box(90.0, 70.0, 240.0, 70.0, "Trace"),
                labeled_box(350.0, 70.0, 240.0, 70.0, "Checks"),
                labeled_box(610.0, 70.0, 240.0, 70.0, "Output modes"),
                connector(330.0, 105.0, 350.0, 105.0, Tone::Flow),
                connector(590.0, 105.0, 610.0, 105.0, Tone::Flow),
                labeled_box(210.0, 170.0, 520.0, 70.0, "Robust / conditional / indeterminate"),
                connector(470.0, 140.0, 470.0, 170.0, Tone::Constraint),
                legend(
                    90.0,
                    255.0,
                    &[
                        "Constrain emission, not just tone.",
                        "Expose budgets and branch coverage.",
                        "Make uncertainty explicit.",
                    ],
                ),
            ]
            .join("\n"),
            "Trust is built by tying outputs to traces and checks and by using explicit output modes.",
            "Trustworthy AI refers to systems that behave predictably and transparently, especially at the boundaries of uncertainty.",
            "VSAVM approaches trustworthiness by construction: it constrains emission to what can be derived and checked under bounded closure and exposes traces and budgets on demand.",
            "The system’s outputs are classified into robust, conditional, or indeterminate based on closure and scope. This replaces ungrounded confidence with operational coverage. The surface realizer is constrained to avoid introducing facts beyond VM state.",
            "Trustworthy AI intersects with explainability, verification, and alignment. VSAVM’s contribution is to provide an executable substrate that makes these concerns operational and auditable.",
            &[
                ("Explainable AI (Wikipedia)", "https://en.wikipedia.org/wiki/Explainable_artificial_intelligence"),
                ("Verification and validation (Wikipedia)", "https://en.wikipedia.org/wiki/Verification_and_validation"),
                ("AI alignment (Wikipedia)", "https://en.wikipedia.org/wiki/AI_alignment"),
            ],
        ),
        entry(
            "llm",
            "Large Language Model (LLM)",
            "0 0 900 320",
            "Diagram of prompt to continuation with VM gating overlay",
            [
                labeled_box(90.0, 70.0, 240.0, 70.0, "Prompt"),
                labeled_box(350.0, 70.0, 240.0, 70.0, "LM proposals"),
                labeled_box(610.0, 70.0, 240.0, 70.0, "Continuation"),
                connector(330.0, 105.0, 350.0, 105.0, Tone::Flow),
                connector(590.0, 105.0, 610.0, 105.0, Tone::Flow),
                labeled_box(210.0, 170.0, 520.0, 70.0, "VSAVM adds VM state + closure gate"),
                connector(470.0, 140.0, 470.0, 170.0, Tone::Constraint),
                legend(
                    90.0,
                    255.0,
                    &[
                        "Standard LLM: continuation from text.",
                        "VSAVM: continuation conditioned on execution.",
                        "Gate prevents unsupported claims.",
                    ],
                ),
            ]
            .join("\n"),
            "VSAVM keeps LLM-like interaction but conditions continuations on executable state and closure checks.",
            "A large language model is typically a neural network trained to predict the next token or segment of text.",
            "VSAVM uses LLM-like prediction as a proposal mechanism, but acceptance is constrained by VM state and bounded closure. The interface stays familiar while the semantics change.",
            "Fluency proposals are filtered by schema constraints and closure gating. This prevents the generator from emitting facts that are not supported by executable state, turning trust into an operational property of checks and traces.",
            "LLMs are a fast-moving field. VSAVM’s design goal is to combine LLM-like interaction with an executable substrate and explicit boundary behavior.",
            &[
                ("Large language model (Wikipedia)", "https://en.wikipedia.org/wiki/Large_language_model"),
                ("Language model (Wikipedia)", "https://en.wikipedia.org/wiki/Language_model"),
                ("Natural language generation (Wikipedia)", "https://en.wikipedia.org/wiki/Natural_language_generation"),
            ],
        ),
        entry(
            "consistency-contract",
            "Consistency contract",
            "0 0 900 340",
            "Diagram of budget, closure, and emission rules",
            [
                labeled_box(80.0, 70.0, 240.0, 70.0, "Budget"),
                labeled_box(340.0, 70.0, 240.0, 70.0, "Closure"),
                labeled_box(600.0, 70.0, 240.0, 70.0, "Emission"),
                connector(320.0, 105.0, 340.0, 105.0, Tone::Flow),
                connector(580.0, 105.0, 600.0, 105.0, Tone::Flow),
                labeled_box(180.0, 170.0, 540.0, 70.0, "Strict / conditional / indeterminate"),
                connector(480.0, 140.0, 480.0, 170.0, Tone::Constraint),
                legend(
                    80.0,
                    255.0,
                    &[
                        "Defines what may be stated.",
                        "Budgets make boundaries explicit.",
                        "Modes define honest degradation.",
                    ],
                ),
            ]
            .join("\n"),
            "The contract ties what may be emitted to what was checked under budgeted closure and named modes.",
            "A consistency contract defines when a system is allowed to emit a conclusion, based on explicit checks and explicit budgets.",
            "In VSAVM, the contract is the semantic rule that turns closure outcomes into output permission. It prevents the system from projecting certainty when exploration is incomplete.",
            "The contract specifies budgets, closure behavior, and response modes. It requires logging of budget use, branches, and conflicts so results are auditable. Conditional outputs are tied to explicit assumptions rather than vague language.",
            "Consistency and non-monotonic reasoning provide background. VSAVM operationalizes these ideas through executable state and bounded exploration rather than purely through hand-coded logic.",
            &[
                ("Consistency (Wikipedia)", "https://en.wikipedia.org/wiki/Consistency"),
                ("Non-monotonic logic (SEP)", "https://plato.stanford.edu/entries/logic-nonmonotonic/"),
                ("Verification and validation (Wikipedia)", "https://en.wikipedia.org/wiki/Verification_and_validation"),
            ],
        ),
        entry(
            "conceptual-spaces",
            "Conceptual spaces",
            "0 0 900 340",
            "Diagram of regions and transitions",
            [
                r##"<ellipse cx="310" cy="185" rx="250" ry="125" fill="none" stroke="#7fb3e6" stroke-width="3"/>"##.to_string(),
                r##"<ellipse cx="650" cy="170" rx="230" ry="125" fill="none" stroke="#16b879" stroke-width="3"/>"##.to_string(),
                r##"<circle cx="250" cy="185" r="12" fill="#0b6eff"/>"##.to_string(),
                r##"<circle cx="370" cy="220" r="12" fill="#0b6eff"/>"##.to_string(),
                r##"<circle cx="610" cy="170" r="12" fill="#16b879"/>"##.to_string(),
                r##"<circle cx="715" cy="205" r="12" fill="#16b879"/>"##.to_string(),
                r##"<line x1="262" y1="185" x2="358" y2="220" stroke="url(#deep)" stroke-width="4" stroke-linecap="round"/>"##.to_string(),
                r##"<line x1="382" y1="220" x2="598" y2="170" stroke="url(#deep)" stroke-width="4" stroke-linecap="round"/>"##.to_string(),
                r##"<line x1="622" y1="170" x2="703" y2="205" stroke="url(#deep)" stroke-width="4" stroke-linecap="round"/>"##.to_string(),
                legend(
                    90.0,
                    270.0,
                    &[
                        "Regions are concepts as constraints.",
                        "Nodes are states/instances.",
                        "Edges are transitions or inferences.",
                    ],
                ),
            ]
            .join("\n"),
            "Concepts as regions: VSAVM maps this intuition to VM state-space regions rather than to embedding points.",
            "Conceptual spaces model concepts as regions in a geometric space rather than as discrete symbols.",
            "VSAVM uses a two-geometry view: VSA similarity provides candidate retrieval, while VM state-space geometry determines consequences and conflicts. Conceptual spaces offer a useful metaphor for regions and invariants in VM state space.",
            "A concept corresponds to a region of states satisfying constraints. Thinking more corresponds to exploring a larger neighborhood of the state graph. Similarity geometry accelerates search, but execution geometry governs correctness.",
            "Conceptual spaces connect cognition and geometry. VSAVM uses the idea operationally: regions correspond to stable state configurations under closure.",
            &[
                ("Conceptual spaces (Wikipedia)", "https://en.wikipedia.org/wiki/Conceptual_spaces"),
                ("State space (Wikipedia)", "https://en.wikipedia.org/wiki/State_space"),
                ("Graph traversal (Wikipedia)", "https://en.wikipedia.org/wiki/Graph_traversal"),
            ],
        ),
        entry(
            "program-synthesis",
            "Program synthesis",
            "0 0 900 340",
            "Diagram of intent to program via search and validation",
            [
                labeled_box(90.0, 90.0, 260.0, 70.0, "Intent / examples"),
                labeled_box(370.0, 90.0, 220.0, 70.0, "Search"),
                labeled_box(610.0, 90.0, 240.0, 70.0, "Program"),
                connector(350.0, 125.0, 370.0, 125.0, Tone::Flow),
                connector(590.0, 125.0, 610.0, 125.0, Tone::Flow),
                labeled_box(210.0, 190.0, 520.0, 70.0, "Validate with execution and constraints"),
                connector(520.0, 160.0, 480.0, 190.0, Tone::Constraint),
                legend(
                    90.0,
                    265.0,
                    &[
                        "Search proposes candidate programs.",
                        "Validation rejects invalid ones.",
                        "Similar pattern used in query compilation.",
                    ],
                ),
            ]
            .join("\n"),
            "Program synthesis illustrates the propose-and-validate pattern that VSAVM uses for query compilation.",
            "Program synthesis automatically constructs programs that satisfy a specification, often via search and validation.",
            "VSAVM query compilation resembles synthesis: candidate query programs are proposed using retrieval and schemas and then validated by execution and closure checks.",
            "Synthesis without validation becomes guesswork. VSAVM’s validation is bounded closure and conflict detection. This rejects candidates that look plausible by similarity but fail under consequences.",
            "Program synthesis is a large field. VSAVM applies the idea to executable queries and macro routines under explicit budgets and auditability requirements.",
            &[
                ("Program synthesis (Wikipedia)", "https://en.wikipedia.org/wiki/Program_synthesis"),
                ("Search algorithm (Wikipedia)", "https://en.wikipedia.org/wiki/Search_algorithm"),
                ("Verification and validation (Wikipedia)", "https://en.wikipedia.org/wiki/Verification_and_validation"),
            ],
        ),
    ]
}
