//! The document-assembly core: a pure, synchronous pipeline from a loaded
//! resume aggregate to a complete LaTeX source string.
//!
//! Dependency order: escape → richtext → format → sections → composer.
//! Nothing in this module performs I/O or can fail; callers get a string or
//! nothing. Safe to invoke concurrently for different resumes.

pub mod composer;
pub mod escape;
pub mod format;
pub mod richtext;
pub mod sections;

pub use composer::compose;
