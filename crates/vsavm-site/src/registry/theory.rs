//! Theory-note page data.

use vsavm_diagrams::{annotation_note, connector, labeled_box, legend, Tone};

use super::page;
use crate::page::{Page, PageKind};

pub(super) fn pages() -> Vec<Page> {
    vec![
        page(
            PageKind::Theory,
            "vision",
            "System vision",
            "0 0 900 320",
            "Diagram of interface, executable VM core, and consistency contract",
            [
                labeled_box(70.0, 70.0, 240.0, 70.0, "LLM-like interface"),
                labeled_box(330.0, 70.0, 240.0, 70.0, "Executable VM core"),
                labeled_box(590.0, 70.0, 240.0, 70.0, "Consistency contract"),
                connector(310.0, 105.0, 330.0, 105.0, Tone::Flow),
                connector(570.0, 105.0, 590.0, 105.0, Tone::Flow),
                labeled_box(240.0, 170.0, 520.0, 70.0, "Bounded closure gates what may be stated"),
                connector(710.0, 140.0, 520.0, 170.0, Tone::Constraint),
                legend(
                    70.0,
                    255.0,
                    &[
                        "Green arrows: primary runtime flow.",
                        "Blue arrow: contract constrains emission.",
                        "Boxes are subsystems with explicit roles.",
                    ],
                ),
            ]
            .join("\n"),
            "The system vision: a familiar interface backed by executable state, with an explicit contract that governs emission.",
            &[
                (
                    "Overview",
                    "VSAVM aims to keep the ergonomics of an LLM-like interface while changing what an answer means internally. Instead of treating understanding as a latent numeric state, the system constructs and executes programs inside an explicit virtual machine. The user experience can remain conversational, but the internal semantics are grounded in execution and trace.",
                ),
                (
                    "Core concepts",
                    "A virtual machine is a state transition engine with explicit memory, instructions, and an execution trace. A consistency contract is a rule that ties output permission to budgeted checks. Bounded closure is the controlled exploration of consequences that turns correctness into a measurable property of search effort rather than a vague promise.",
                ),
                (
                    "Runtime story",
                    "Input is normalized into a structured event stream. Candidate interpretations are compiled into programs and executed to build VM state. Next-phrase generation proposes continuations, but acceptance is gated by closure checks that reject candidates introducing contradictions within scope.",
                ),
                (
                    "Boundary behavior",
                    "When budget is insufficient, the system must degrade honestly. It can emit conditional claims that explicitly depend on assumptions, or it can declare indeterminacy. In both cases, the system avoids substituting fluency for verification by making the exploration boundary explicit.",
                ),
            ],
            &[
                ("Virtual machine (Wikipedia)", "https://en.wikipedia.org/wiki/Virtual_machine"),
                ("Symbolic execution (Wikipedia)", "https://en.wikipedia.org/wiki/Symbolic_execution"),
                ("Consistency (Wikipedia)", "https://en.wikipedia.org/wiki/Consistency"),
                ("Non-monotonic logic (SEP)", "https://plato.stanford.edu/entries/logic-nonmonotonic/"),
            ],
        ),
        page(
            PageKind::Theory,
            "unified-input",
            "Unified input representation",
            "0 0 900 340",
            "Diagram of event stream and reversible macro units",
            [
                labeled_box(70.0, 45.0, 760.0, 60.0, "Event stream (type + payload + structural context)"),
                connector(450.0, 105.0, 450.0, 135.0, Tone::Flow),
                labeled_box(110.0, 135.0, 320.0, 80.0, "Lexical layer (reversible tokens)"),
                labeled_box(470.0, 135.0, 320.0, 80.0, "Phrase layer (reversible macro units)"),
                connector(270.0, 215.0, 270.0, 245.0, Tone::Flow),
                connector(630.0, 215.0, 630.0, 245.0, Tone::Flow),
                labeled_box(110.0, 245.0, 320.0, 65.0, "Deterministic expansion for scoring"),
                labeled_box(470.0, 245.0, 320.0, 65.0, "Stable units for retrieval and schemas"),
                legend(
                    70.0,
                    312.0,
                    &[
                        "Structure carries scope across modalities.",
                        "Reversibility prevents semantic drift.",
                        "Representation is shared by the VM.",
                    ],
                ),
            ]
            .join("\n"),
            "A single symbolic substrate supports multimodal inputs while preserving structure, scope, and reversible compression.",
            &[
                (
                    "Overview",
                    "Multimodality becomes tractable when all inputs are mapped into a single canonical representation. VSAVM uses an event stream where each event is discrete and typed and carries an explicit structural context. This creates a shared substrate so that execution, closure, and auditing do not fragment across modality-specific pipelines.",
                ),
                (
                    "Terminology",
                    "An event has a type and a discrete payload, plus a context path such as document → section → paragraph → sentence → span. Structural separators are explicit events that delimit scopes for reasoning. Macro units are compressed patterns discovered by learning, but they must remain reversible into lexical events so evaluation and decoding remain deterministic.",
                ),
                (
                    "How it supports reasoning",
                    "Stable structure and scope allow the VM to build local theories and to avoid global inconsistency. The event stream also provides stable indexing hooks for retrieval, schema discovery, and program construction. Reversible compression reduces cost while keeping the ability to reconstruct the exact basis of a claim.",
                ),
                (
                    "Implementation considerations",
                    "Representation fails when boundaries are ambiguous or when compression cannot expand deterministically. VSAVM therefore prioritizes deterministic segmentation and deterministic expansion. This makes later stages predictable and keeps the correctness contract enforceable.",
                ),
            ],
            &[
                ("Event stream processing (Wikipedia)", "https://en.wikipedia.org/wiki/Event_stream_processing"),
                ("Tokenization (Wikipedia)", "https://en.wikipedia.org/wiki/Tokenization_(lexical_analysis)"),
                ("Multimodal learning (Wikipedia)", "https://en.wikipedia.org/wiki/Multimodal_learning"),
            ],
        ),
        page(
            PageKind::Theory,
            "structure-and-scope",
            "Structural boundaries and scope",
            "0 0 900 320",
            "Diagram of nested scopes controlling inference",
            [
                r##"<rect x="90" y="55" width="720" height="210" rx="26" ry="26" fill="none" stroke="#7fb3e6" stroke-width="3"/>"##.to_string(),
                r##"<text x="120" y="85" text-anchor="start" font-size="13" fill="#2f4a63" font-family="Space Grotesk">Document scope</text>"##.to_string(),
                r##"<rect x="150" y="95" width="600" height="160" rx="24" ry="24" fill="none" stroke="#0b6eff" stroke-width="3"/>"##.to_string(),
                r##"<text x="180" y="125" text-anchor="start" font-size="13" fill="#2f4a63" font-family="Space Grotesk">Section scope</text>"##.to_string(),
                r##"<rect x="230" y="140" width="440" height="90" rx="20" ry="20" fill="none" stroke="#16b879" stroke-width="3"/>"##.to_string(),
                r##"<text x="260" y="170" text-anchor="start" font-size="13" fill="#2f4a63" font-family="Space Grotesk">Local context (quote / procedure / paragraph)</text>"##.to_string(),
                legend(
                    90.0,
                    275.0,
                    &[
                        "Scope defines what can interact under closure.",
                        "Conflicts are meaningful only in-scope.",
                        "Local theories reduce global inconsistency.",
                    ],
                ),
            ]
            .join("\n"),
            "Scope makes contradiction detection meaningful by restricting which facts may interact during closure.",
            &[
                (
                    "Overview",
                    "Correctness claims require scope. Real corpora contain incompatible sources, hypothetical statements, and quoted passages. If the system treats all statements as globally active, bounded closure either explodes in contradictions or becomes meaningless because conflicts are ignored.",
                ),
                (
                    "Boundaries as signals",
                    "Structural boundaries include headings, paragraphs, lists, quotes, definitions, and procedural steps. In multimodal inputs, boundaries also include temporal segments and scene changes. VSAVM treats these separators as explicit events so the VM can localize inference without guessing.",
                ),
                (
                    "Scope-aware correctness",
                    "A contradiction is defined canonically as the same fact identifier appearing with opposing polarity inside the same scope. Structural separators define that scope, and the VM carries scope through execution. This enables local theories that remain coherent even when global reconciliation is not possible under budget.",
                ),
                (
                    "Practical outcomes",
                    "Scope enables conditional reasoning across sources. A claim can be robust within a scope while being conditional across scopes. This makes the system useful under real-world inconsistency without abandoning the non-contradiction promise.",
                ),
            ],
            &[
                ("Scope (computer science) (Wikipedia)", "https://en.wikipedia.org/wiki/Scope_(computer_science)"),
                ("Context (computing) (Wikipedia)", "https://en.wikipedia.org/wiki/Context_(computing)"),
                ("Consistency (Wikipedia)", "https://en.wikipedia.org/wiki/Consistency"),
            ],
        ),
        page(
            PageKind::Theory,
            "training-and-emergence",
            "Training and emergent compilation",
            "0 0 900 320",
            "Diagram of prediction-search-consolidation loop",
            [
                r##"<circle cx="450" cy="150" r="96" fill="none" stroke="#0b6eff" stroke-width="6"/>"##.to_string(),
                r##"<path d="M520 70 L555 82 L525 108" fill="#16b879"/>"##.to_string(),
                labeled_box(110.0, 80.0, 250.0, 70.0, "Next-phrase prediction"),
                labeled_box(540.0, 80.0, 250.0, 70.0, "Program search"),
                labeled_box(325.0, 210.0, 250.0, 70.0, "Consolidation"),
                annotation_note(110.0, 165.0, 330.0, 48.0, "Prediction pressure favors compact executable explanations."),
                annotation_note(500.0, 165.0, 330.0, 48.0, "Search proposes candidate programs; closure rejects unstable ones."),
                legend(
                    110.0,
                    270.0,
                    &[
                        "Two loops: predict and search.",
                        "Consolidate repeated winners into macros.",
                        "Consistency signals constrain consolidation.",
                    ],
                ),
            ]
            .join("\n"),
            "Compilation emerges when prediction pressure makes compact executable programs the cheapest explanation for recurring patterns.",
            &[
                (
                    "Overview",
                    "VSAVM treats compilation as a learned capability. Next-phrase prediction provides a broad surface prior, but repeated patterns create pressure to represent intent as executable programs that compress the data. This creates a path from language modeling to program induction without hardcoded templates.",
                ),
                (
                    "What emerges and why",
                    "Repeated question forms and reasoning moves become schemas and macro programs because they reduce description length. VSA accelerates the emergence by clustering paraphrases and providing fast retrieval of nearby patterns. The VM provides the semantics by executing candidates and maintaining explicit state.",
                ),
                (
                    "Consolidation",
                    "Consolidation is the point where a candidate program becomes a macro instruction. It improves performance, but it also improves stability because the system can treat the macro as a unit that can be tested, audited, versioned, and federated. Consolidation is therefore an engineering mechanism, not only a learning trick.",
                ),
                (
                    "Risks and mitigations",
                    "Compression can consolidate spurious patterns if prediction alone is the criterion. VSAVM mitigates this by using bounded closure as a validator and by using scope to prevent unstable rules from contaminating unrelated contexts. Rules that cause branching blow-ups or frequent contradictions should be demoted or isolated.",
                ),
            ],
            &[
                ("Minimum description length (Wikipedia)", "https://en.wikipedia.org/wiki/Minimum_description_length"),
                ("The MDL Book (Grünwald)", "https://www.grunwald.nl/mdlbook/"),
                ("Program synthesis (Wikipedia)", "https://en.wikipedia.org/wiki/Program_synthesis"),
            ],
        ),
        page(
            PageKind::Theory,
            "rl-shaping",
            "RL as shaping for stable choices",
            "0 0 900 320",
            "Diagram of candidates, signals, and selection policy",
            [
                labeled_box(80.0, 70.0, 250.0, 70.0, "Candidates"),
                labeled_box(340.0, 70.0, 250.0, 70.0, "Signals"),
                labeled_box(600.0, 70.0, 240.0, 70.0, "Selection policy"),
                connector(330.0, 105.0, 340.0, 105.0, Tone::Flow),
                connector(590.0, 105.0, 600.0, 105.0, Tone::Flow),
                labeled_box(220.0, 170.0, 520.0, 70.0, "Penalty when closure reveals in-scope contradictions"),
                connector(465.0, 140.0, 465.0, 170.0, Tone::Constraint),
                legend(
                    80.0,
                    255.0,
                    &[
                        "Actions are coarse: choose a program or mode.",
                        "Signals are derived from consistency checks.",
                        "RL is a tiebreaker and stability prior.",
                    ],
                ),
            ]
            .join("\n"),
            "RL provides shaping signals for discrete choices, prioritizing candidates that remain stable under bounded closure.",
            &[
                (
                    "Overview",
                    "VSAVM uses RL as shaping rather than as a replacement for language training. The system often faces multiple plausible candidate programs or response modes. A learned preference can bias selection toward candidates that have historically remained consistent under closure.",
                ),
                (
                    "What is optimized",
                    "The action space is intentionally small: selecting among candidate programs, schemas, or response modes. This avoids token-level RL, which is expensive and difficult to audit. Each action corresponds to a semantic decision that can be logged and evaluated.",
                ),
                (
                    "Signals and discipline",
                    "Bounded closure naturally provides negative feedback when contradictions are detected. Additional shaping can penalize branching blow-ups and reward compact programs. The resulting preferences steer search toward stable solutions without overriding the explicit consistency gate.",
                ),
                (
                    "Trade-offs",
                    "Shaping can overfit to a narrow verifier if the verifier does not reflect the real failure modes. The safe approach is to keep RL as a stability prior while maintaining the correctness guarantee in explicit closure checks and deterministic boundary behavior.",
                ),
            ],
            &[
                ("Reinforcement learning (Wikipedia)", "https://en.wikipedia.org/wiki/Reinforcement_learning"),
                ("Sutton & Barto (book)", "http://incompleteideas.net/book/the-book-2nd.html"),
                ("Multi-armed bandit (Wikipedia)", "https://en.wikipedia.org/wiki/Multi-armed_bandit"),
            ],
        ),
        page(
            PageKind::Theory,
            "question-compilation",
            "Question compilation pipeline",
            "0 0 900 340",
            "Diagram of normalize-retrieve-fill-compile with beam evaluation",
            [
                labeled_box(80.0, 60.0, 180.0, 70.0, "Normalize"),
                labeled_box(280.0, 60.0, 180.0, 70.0, "Retrieve"),
                labeled_box(480.0, 60.0, 180.0, 70.0, "Fill slots"),
                labeled_box(680.0, 60.0, 180.0, 70.0, "Program"),
                connector(260.0, 95.0, 280.0, 95.0, Tone::Flow),
                connector(460.0, 95.0, 480.0, 95.0, Tone::Flow),
                connector(660.0, 95.0, 680.0, 95.0, Tone::Flow),
                labeled_box(210.0, 170.0, 480.0, 70.0, "Beam: evaluate fit and early consistency"),
                connector(570.0, 130.0, 450.0, 170.0, Tone::Constraint),
                legend(
                    80.0,
                    260.0,
                    &[
                        "Retrieval narrows search surface (VSA).",
                        "Slot filling stays discrete and auditable.",
                        "Beam keeps ambiguity explicit under budget.",
                    ],
                ),
            ]
            .join("\n"),
            "Questions are compiled into executable programs through explicit stages, with ambiguity managed by beam evaluation and consistency checks.",
            &[
                (
                    "Overview",
                    "A question is treated as a request to produce an executable query program. The pipeline is explicit to support audit and control: normalization creates a structured span, retrieval proposes candidate schemas, slot filling binds discrete values, and compilation emits a program in the VM instruction set.",
                ),
                (
                    "Retrieval and slot filling",
                    "Retrieval uses VSA to propose nearby schemas and macro programs. Slot filling binds entities, roles, and references using discrete matching and coreference heuristics, augmented by associative retrieval. The result is an executable artifact rather than a textual template.",
                ),
                (
                    "Managing ambiguity",
                    "Instead of forcing a single interpretation, VSAVM carries multiple candidate programs in a beam. Candidates are evaluated by explanatory fit and by early closure checks that detect contradictions. This makes uncertainty explicit and supports conditional outputs when necessary.",
                ),
                (
                    "Engineering implications",
                    "Because compilation is explicit, it is testable. You can measure how often a schema is retrieved, how often slot filling is ambiguous, and how often a candidate fails under closure. These metrics can guide consolidation and improve robustness over time.",
                ),
            ],
            &[
                ("Program synthesis (Wikipedia)", "https://en.wikipedia.org/wiki/Program_synthesis"),
                ("Beam search (Wikipedia)", "https://en.wikipedia.org/wiki/Beam_search"),
                ("Information retrieval (Wikipedia)", "https://en.wikipedia.org/wiki/Information_retrieval"),
            ],
        ),
        page(
            PageKind::Theory,
            "controlled-generation",
            "Controlled generation with closure gating",
            "0 0 900 340",
            "Diagram of proposal, simulation, closure check, acceptance",
            [
                labeled_box(80.0, 70.0, 260.0, 70.0, "Propose phrases"),
                labeled_box(360.0, 70.0, 240.0, 70.0, "Simulate"),
                labeled_box(620.0, 70.0, 200.0, 70.0, "Accept"),
                connector(340.0, 105.0, 360.0, 105.0, Tone::Flow),
                connector(600.0, 105.0, 620.0, 105.0, Tone::Flow),
                labeled_box(210.0, 170.0, 480.0, 70.0, "Gate: bounded closure rejects contradictions"),
                connector(480.0, 140.0, 450.0, 170.0, Tone::Constraint),
                annotation_note(210.0, 250.0, 580.0, 48.0, "Increasing budget deepens closure and changes what can be claimed."),
                legend(
                    80.0,
                    295.0,
                    &[
                        "Generation is proposal + verification.",
                        "Closure is a gate, not an afterthought.",
                        "Budget controls robustness vs cost.",
                    ],
                ),
            ]
            .join("\n"),
            "Generation is treated as proposal followed by verification: candidates must pass closure-based consistency checks before being emitted.",
            &[
                (
                    "Overview",
                    "VSAVM does not treat generation as free-form continuation. Candidates are proposed by learned distributions and schema constraints, but they must be verified against the VM state. This prevents the surface generator from introducing unsupported claims that violate correctness.",
                ),
                (
                    "Candidate sources",
                    "Candidates can come from a discrete language model over macro units, from the active schema, and from VSA retrieval of similar completions. The LM provides fluency, the schema provides structure, and VSA provides pattern-driven recall. The acceptance gate is what prevents any source from dominating truth.",
                ),
                (
                    "Closure gating",
                    "Before accepting a candidate, the system simulates its effect and runs a local bounded closure to detect contradictions. If contradictions are detected, the candidate is rejected in strict mode. If exploration is incomplete, the system can emit a conditional result rather than an unconditional claim.",
                ),
                (
                    "Budget as user-controlled effort",
                    "When a user asks the system to think more, the budget increases. This increases the depth or breadth of closure and therefore changes what is safe to claim. The system should surface that budget explicitly because it defines the strength of the response.",
                ),
            ],
            &[
                ("Beam search (Wikipedia)", "https://en.wikipedia.org/wiki/Beam_search"),
                ("Transitive closure (Wikipedia)", "https://en.wikipedia.org/wiki/Transitive_closure"),
                ("Verification and validation (Wikipedia)", "https://en.wikipedia.org/wiki/Verification_and_validation"),
            ],
        ),
        page(
            PageKind::Theory,
            "decoding",
            "Faithful surface realization",
            "0 0 900 320",
            "Diagram of VM results mapped to constrained output forms",
            [
                labeled_box(90.0, 70.0, 300.0, 70.0, "VM result (object + trace)"),
                labeled_box(410.0, 70.0, 220.0, 70.0, "Surface plan"),
                labeled_box(650.0, 70.0, 160.0, 70.0, "Output"),
                connector(390.0, 105.0, 410.0, 105.0, Tone::Flow),
                connector(630.0, 105.0, 650.0, 105.0, Tone::Flow),
                labeled_box(210.0, 170.0, 520.0, 70.0, "Constraint: do not add facts not in VM state"),
                connector(520.0, 140.0, 520.0, 170.0, Tone::Constraint),
                legend(
                    90.0,
                    255.0,
                    &[
                        "VM state is the source of truth.",
                        "Realization controls wording, not content.",
                        "Output can be text or event stream.",
                    ],
                ),
            ]
            .join("\n"),
            "Decoding is a constrained realization: it can choose phrasing, but it must not invent facts beyond the VM state and trace.",
            &[
                (
                    "Overview",
                    "Decoding is a common place where systems silently reintroduce hallucinations. VSAVM treats decoding as surface realization of internal objects. If the VM did not derive a fact, the realizer is not allowed to state it as true.",
                ),
                (
                    "What is realized",
                    "The VM can produce a verdict, a structured object, a plan, or an execution trace. The realizer converts these internal objects into a requested surface form such as prose, a structured event stream, or a report. The emphasis is on fidelity: every factual sentence corresponds to an internal artifact.",
                ),
                (
                    "Why constraints matter",
                    "Without constraints, a fluent realizer can add plausible details that were never derived. Constraints turn the correctness contract into an end-to-end property: not only is the internal reasoning checked, but the emitted text is guaranteed to be a rendering of checked state rather than an additional source of information.",
                ),
                (
                    "Audit and user trust",
                    "Faithful realization supports audit. When the user asks why a claim was made, the system can point to the underlying fact identifiers and trace steps. When it cannot justify a claim, it must degrade to conditional or indeterminate outputs rather than inventing.",
                ),
            ],
            &[
                ("Natural language generation (Wikipedia)", "https://en.wikipedia.org/wiki/Natural_language_generation"),
                ("Explainable AI (Wikipedia)", "https://en.wikipedia.org/wiki/Explainable_artificial_intelligence"),
                ("Verification and validation (Wikipedia)", "https://en.wikipedia.org/wiki/Verification_and_validation"),
            ],
        ),
        page(
            PageKind::Theory,
            "correctness-and-closure",
            "Operational correctness via bounded closure",
            "0 0 900 340",
            "Diagram of canonicalization, closure, and conflict detection",
            [
                labeled_box(80.0, 70.0, 240.0, 70.0, "Canonicalize"),
                labeled_box(340.0, 70.0, 240.0, 70.0, "Close (bounded)"),
                labeled_box(600.0, 70.0, 240.0, 70.0, "Detect conflicts"),
                connector(320.0, 105.0, 340.0, 105.0, Tone::Flow),
                connector(580.0, 105.0, 600.0, 105.0, Tone::Flow),
                labeled_box(180.0, 170.0, 540.0, 70.0, "Conflict = same fact_id with opposite polarity in same scope"),
                connector(480.0, 140.0, 480.0, 170.0, Tone::Constraint),
                annotation_note(180.0, 250.0, 610.0, 48.0, "Budgets define what was checked and therefore what may be stated."),
                legend(
                    80.0,
                    295.0,
                    &[
                        "Canonical IDs make contradictions comparable.",
                        "Scope makes contradictions meaningful.",
                        "Budgets define claim strength.",
                    ],
                ),
            ]
            .join("\n"),
            "Correctness is operational: canonical facts plus bounded closure plus scope-aware conflict detection define what can be safely emitted.",
            &[
                (
                    "Overview",
                    "Correctness in VSAVM is not a vague aspiration; it is a contract. The system is allowed to emit a conclusion only if bounded closure does not reveal contradictions within the configured budget and scope. This makes the cost of correctness explicit and configurable.",
                ),
                (
                    "Canonical facts and negation",
                    "Contradictions cannot be reliably detected at the text level. VSAVM maps assertions into canonical fact identifiers with typed slots and explicit polarity. Different surface forms can map to the same canonical identifier, making paraphrase-invariant conflict checks possible.",
                ),
                (
                    "Bounded closure and exploration",
                    "Closure applies rules and macro programs to derive consequences. It is bounded by depth, branching, steps, or time, and therefore it is incomplete by design. The important property is honesty: the system ties claim strength to the budget and can downgrade to conditional results when exploration is insufficient.",
                ),
                (
                    "Practical auditing",
                    "A correctness claim is only meaningful if it is auditable. VSAVM logs the closure budget, explored branches, applied rules, and detected conflicts. This allows the system to produce operational explanations that are traces of what was executed rather than post-hoc narratives.",
                ),
            ],
            &[
                ("Consistency (Wikipedia)", "https://en.wikipedia.org/wiki/Consistency"),
                ("Transitive closure (Wikipedia)", "https://en.wikipedia.org/wiki/Transitive_closure"),
                ("Non-monotonic logic (SEP)", "https://plato.stanford.edu/entries/logic-nonmonotonic/"),
            ],
        ),
        page(
            PageKind::Theory,
            "vm-core",
            "The VM core and retrieval interaction",
            "0 0 900 340",
            "Diagram of VM components and a retrieval sidecar",
            [
                r##"<rect x="90" y="55" width="540" height="220" rx="26" ry="26" fill="none" stroke="#0b6eff" stroke-width="3"/>"##.to_string(),
                r##"<text x="120" y="85" text-anchor="start" font-size="13" fill="#2f4a63" font-family="Space Grotesk">VM core</text>"##.to_string(),
                labeled_box(130.0, 105.0, 210.0, 60.0, "Fact store"),
                labeled_box(360.0, 105.0, 210.0, 60.0, "Rule memory"),
                labeled_box(130.0, 180.0, 210.0, 60.0, "Context stack"),
                labeled_box(360.0, 180.0, 210.0, 60.0, "Execution log"),
                r##"<rect x="670" y="85" width="160" height="190" rx="26" ry="26" fill="none" stroke="#16b879" stroke-width="3"/>"##.to_string(),
                r##"<text x="690" y="115" text-anchor="start" font-size="13" fill="#2f4a63" font-family="Space Grotesk">Retrieval</text>"##.to_string(),
                labeled_box(690.0, 130.0, 120.0, 55.0, "VSA"),
                labeled_box(690.0, 195.0, 120.0, 55.0, "Top-K"),
                connector(630.0, 170.0, 670.0, 170.0, Tone::Flow),
                legend(
                    90.0,
                    285.0,
                    &[
                        "VM is the authority via execution.",
                        "Retrieval proposes; VM validates.",
                        "Logs enable audit and debugging.",
                    ],
                ),
            ]
            .join("\n"),
            "A compact VM core remains the authority; retrieval accelerates candidate selection without changing semantics.",
            &[
                (
                    "Overview",
                    "The VM is the system’s semantic core. It stores facts, rules, contexts, and traces and executes programs to construct state. Retrieval exists to reduce search cost by proposing candidates, but it does not decide what is true.",
                ),
                (
                    "Minimalism and typing",
                    "A small, typed instruction set reduces absurd combinations and branching blow-ups. The VM needs primitives for canonicalization, matching, branching, context management, and conflict checks. Typed slots and typed terms reduce combinatorial exploration and improve trace readability.",
                ),
                (
                    "How retrieval interacts",
                    "VSA provides similarity-driven shortlists of schemas and macro programs. These shortlists are inputs to search and compilation, not outputs of truth. Every retrieved candidate must be validated by execution and closure to preserve the correctness contract under noise and paraphrase variation.",
                ),
                (
                    "Engineering benefits",
                    "The explicit VM core makes it possible to unit test rules, regression test closure behavior, and audit decisions. Retrieval can be swapped or improved without changing semantics, because semantics are enforced by the VM and contract rather than by similarity ranking.",
                ),
            ],
            &[
                ("Symbolic execution (Wikipedia)", "https://en.wikipedia.org/wiki/Symbolic_execution"),
                ("Vector symbolic architecture (Wikipedia)", "https://en.wikipedia.org/wiki/Vector_symbolic_architecture"),
                ("Execution trace (Wikipedia)", "https://en.wikipedia.org/wiki/Trace_(software)"),
            ],
        ),
        page(
            PageKind::Theory,
            "consistency-contract",
            "Consistency contract and boundary behavior",
            "0 0 900 340",
            "Diagram of budgets, closure, and response modes",
            [
                labeled_box(80.0, 70.0, 240.0, 70.0, "Budgets"),
                labeled_box(340.0, 70.0, 240.0, 70.0, "Closure"),
                labeled_box(600.0, 70.0, 240.0, 70.0, "Emission rules"),
                connector(320.0, 105.0, 340.0, 105.0, Tone::Flow),
                connector(580.0, 105.0, 600.0, 105.0, Tone::Flow),
                labeled_box(160.0, 170.0, 580.0, 70.0, "Modes: strict, conditional, indeterminate"),
                connector(470.0, 140.0, 470.0, 170.0, Tone::Constraint),
                annotation_note(160.0, 250.0, 640.0, 48.0, "The system reports what was checked, not just what it predicts."),
                legend(
                    80.0,
                    295.0,
                    &[
                        "Budgets define exploration boundaries.",
                        "Emission depends on closure outcome.",
                        "Boundary behavior is explicit and repeatable.",
                    ],
                ),
            ]
            .join("\n"),
            "The contract makes boundary behavior explicit by tying emission to budgeted closure and named response modes.",
            &[
                (
                    "Overview",
                    "The consistency contract defines what the system is allowed to emit and under what conditions. It formalizes budgets, closure behavior, and response modes. Without such a contract, the system cannot make honest claims about correctness.",
                ),
                (
                    "Budgets and monotonicity",
                    "Budgets include depth, branching, steps, and optionally time. These parameters define exploration coverage and therefore the strength of a conclusion. Increasing budget should not merely increase confidence; it should reveal more consequences and potentially uncover conflicts, making the system more honest rather than more fluent.",
                ),
                (
                    "Response modes",
                    "Strict mode emits only what remains consistent across explored branches. Conditional mode emits conclusions tied to explicit assumptions or branches. Indeterminate mode is returned when the system cannot justify a conclusion under the given budget. These modes are semantic commitments that prevent the system from pretending certainty.",
                ),
                (
                    "Auditability",
                    "The contract implies logs and metadata: budget used, branches explored, rules applied, and conflicts detected. This allows operational explanations and makes the system testable. It also provides a practical mechanism to debug where and why reasoning fails.",
                ),
            ],
            &[
                ("Consistency (Wikipedia)", "https://en.wikipedia.org/wiki/Consistency"),
                ("Verification and validation (Wikipedia)", "https://en.wikipedia.org/wiki/Verification_and_validation"),
                ("Non-monotonic logic (SEP)", "https://plato.stanford.edu/entries/logic-nonmonotonic/"),
            ],
        ),
        page(
            PageKind::Theory,
            "state-space-geometry",
            "State-space geometry and conceptual regions",
            "0 0 900 340",
            "Diagram of VM states, transitions, and regions",
            [
                r##"<ellipse cx="300" cy="185" rx="240" ry="125" fill="none" stroke="#7fb3e6" stroke-width="3"/>"##.to_string(),
                r##"<ellipse cx="650" cy="170" rx="230" ry="125" fill="none" stroke="#16b879" stroke-width="3"/>"##.to_string(),
                r##"<text x="300" y="70" text-anchor="middle" font-size="12" fill="#2f4a63" font-family="Space Grotesk">Region A (constraints)</text>"##.to_string(),
                r##"<text x="650" y="60" text-anchor="middle" font-size="12" fill="#2f4a63" font-family="Space Grotesk">Region B (constraints)</text>"##.to_string(),
                r##"<circle cx="240" cy="185" r="12" fill="#0b6eff"/>"##.to_string(),
                r##"<circle cx="360" cy="220" r="12" fill="#0b6eff"/>"##.to_string(),
                r##"<circle cx="610" cy="170" r="12" fill="#16b879"/>"##.to_string(),
                r##"<circle cx="715" cy="205" r="12" fill="#16b879"/>"##.to_string(),
                r##"<line x1="252" y1="185" x2="348" y2="220" stroke="url(#deep)" stroke-width="4" stroke-linecap="round"/>"##.to_string(),
                r##"<line x1="372" y1="220" x2="598" y2="170" stroke="url(#deep)" stroke-width="4" stroke-linecap="round"/>"##.to_string(),
                r##"<line x1="622" y1="170" x2="703" y2="205" stroke="url(#deep)" stroke-width="4" stroke-linecap="round"/>"##.to_string(),
                r##"<text x="470" y="155" text-anchor="middle" font-size="12" fill="#2f4a63" font-family="Space Grotesk">instructions are transitions</text>"##.to_string(),
                legend(
                    90.0,
                    270.0,
                    &[
                        "Nodes are VM states.",
                        "Edges are instruction transitions.",
                        "Regions are conceptual constraints.",
                    ],
                ),
            ]
            .join("\n"),
            "The relevant geometry is the VM state graph: concepts appear as regions stabilized by constraints, not as points in an embedding space.",
            &[
                (
                    "Overview",
                    "A geometric interpretation of VSAVM is best expressed in the VM state space. Each instruction is a state transition, and reasoning is a path through this graph under constraints. This makes thinking more equivalent to exploring more of the reachable neighborhood.",
                ),
                (
                    "Concepts as regions",
                    "A concept is not a single vector; it is a region of states that share invariants. For example, a contradiction is a region where opposing polarities for the same canonical fact identifier coexist in scope. A definition is a region where new identifiers and constraints are introduced with structural scope markers.",
                ),
                (
                    "Two geometries",
                    "VSA provides an auxiliary geometry of similarity over surface forms that accelerates retrieval. The VM provides the geometry of consequences and conflicts. Separating these prevents the system from equating resemblance with truth while still benefiting from fast candidate selection.",
                ),
                (
                    "Budgets as resolution",
                    "Budgets define exploration depth and breadth. Small budgets yield shallow checks; larger budgets reveal deeper consequences and more conflicts. This makes the system’s certainty a function of explored coverage rather than a stylistic tone.",
                ),
            ],
            &[
                ("Conceptual spaces (Wikipedia)", "https://en.wikipedia.org/wiki/Conceptual_spaces"),
                ("State space (Wikipedia)", "https://en.wikipedia.org/wiki/State_space"),
                ("Graph traversal (Wikipedia)", "https://en.wikipedia.org/wiki/Graph_traversal"),
            ],
        ),
        page(
            PageKind::Theory,
            "federated-modules",
            "Federated growth of modules",
            "0 0 900 340",
            "Diagram of clients aggregating artifacts into a shared library",
            [
                labeled_box(90.0, 70.0, 200.0, 60.0, "Client A"),
                labeled_box(90.0, 150.0, 200.0, 60.0, "Client B"),
                labeled_box(90.0, 230.0, 200.0, 60.0, "Client C"),
                labeled_box(360.0, 140.0, 240.0, 80.0, "Aggregation"),
                labeled_box(650.0, 120.0, 200.0, 80.0, "Shared library"),
                labeled_box(650.0, 215.0, 200.0, 80.0, "Health checks"),
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
                        "Validate rules before promotion.",
                        "Keep the consistency contract global.",
                    ],
                ),
            ]
            .join("\n"),
            "Federation shares discrete artifacts such as counts and prototypes and uses health checks to prevent polluted rule libraries.",
            &[
                (
                    "Overview",
                    "Federation becomes practical when what is learned is modular. VSAVM learns discrete objects such as macro programs, schemas, and prototypes that can be shared as artifacts rather than as opaque parameter deltas. This supports incremental growth without exposing raw corpora.",
                ),
                (
                    "What is shared",
                    "Clients can share filtered discrete statistics, VSA prototypes, and macro-program metadata such as utility and conflict rate. Hypervectors themselves can be deterministic and therefore need not be transmitted. Prototypes and rule candidates can be merged and deduplicated at the artifact level.",
                ),
                (
                    "Governance and safety",
                    "A wrong rule can pollute the global library. VSAVM mitigates this by requiring the same consistency contract as an admission gate: candidate rules and macros must pass health checks that detect contradiction explosion or uncontrolled branching. This resembles unit testing for learned rules.",
                ),
                (
                    "Why modularity helps engineering",
                    "Artifacts can be versioned, rolled back, and scoped. Domain-specific libraries can be maintained separately. This is easier than interpreting dense gradient updates and enables more transparent governance for research deployments.",
                ),
            ],
            &[
                ("Federated learning (Wikipedia)", "https://en.wikipedia.org/wiki/Federated_learning"),
                ("Differential privacy (Wikipedia)", "https://en.wikipedia.org/wiki/Differential_privacy"),
                ("Knowledge base (Wikipedia)", "https://en.wikipedia.org/wiki/Knowledge_base"),
            ],
        ),
        page(
            PageKind::Theory,
            "trust-and-transparency",
            "Trust and transparency",
            "0 0 900 320",
            "Diagram of trace, checks, and disclosure",
            [
                labeled_box(90.0, 70.0, 240.0, 70.0, "Execution trace"),
                labeled_box(350.0, 70.0, 240.0, 70.0, "Consistency checks"),
                labeled_box(610.0, 70.0, 200.0, 70.0, "Disclosure"),
                connector(330.0, 105.0, 350.0, 105.0, Tone::Flow),
                connector(590.0, 105.0, 610.0, 105.0, Tone::Flow),
                labeled_box(210.0, 170.0, 520.0, 70.0, "User-visible: budgets, branches, conflicts, mode"),
                connector(470.0, 140.0, 470.0, 170.0, Tone::Constraint),
                legend(
                    90.0,
                    255.0,
                    &[
                        "Trust is operational, not rhetorical.",
                        "Expose what was explored under budget.",
                        "Separate robust from conditional claims.",
                    ],
                ),
            ]
            .join("\n"),
            "Trust is earned by tying outputs to traces and checks and by disclosing budget and mode rather than projecting confidence.",
            &[
                (
                    "Overview",
                    "Trustworthy behavior is achieved by changing what the system is allowed to emit. VSAVM does not aim to be cautious by tone; it aims to be constrained by computation. If a claim cannot be justified under closure, it must not be stated as robust.",
                ),
                (
                    "Reducing hallucinations",
                    "Hallucinations are often failures of emission discipline. VSAVM prevents this by requiring that factual sentences correspond to canonical facts or explicit derivations. The surface realizer can explain what happened, but it cannot introduce new claims beyond VM state and trace.",
                ),
                (
                    "Explainability as audit",
                    "Explanations are operational. The system can report the budget used, the number of explored branches, the rules applied, and any conflicts detected. This avoids post-hoc narratives that sound plausible but are not connected to the actual computation.",
                ),
                (
                    "Limits and honest uncertainty",
                    "Bounded closure is incomplete by design. The promise is not absolute truth; it is honesty about what was checked. When budget is insufficient, VSAVM degrades to conditional or indeterminate outputs and can suggest increasing budget if the user wants stronger guarantees.",
                ),
            ],
            &[
                ("Explainable AI (Wikipedia)", "https://en.wikipedia.org/wiki/Explainable_artificial_intelligence"),
                ("Verification and validation (Wikipedia)", "https://en.wikipedia.org/wiki/Verification_and_validation"),
                ("AI alignment (Wikipedia)", "https://en.wikipedia.org/wiki/AI_alignment"),
            ],
        ),
    ]
}
