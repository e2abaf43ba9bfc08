//! Static site generator for the VSAVM documentation tree.
//!
//! Compiles the registered theory and wiki pages into an interlinked set of
//! HTML documents, each carrying an inline SVG diagram. The registry is the
//! only content source; a build reads nothing but the precondition check and
//! writes the same tree byte-for-byte every run.

pub mod builder;
pub mod page;
pub mod registry;
pub mod shell;

pub use builder::{BuildConfig, BuildError, BuildResult, SiteBuilder};
pub use page::{Page, PageKind, Reference, Section};
