//! Static catalog site generation from the JSON items export.
//!
//! Used by the `generate_site` binary; kept in the library so extraction
//! and rendering stay testable.

/// JSON export parsing and card extraction
pub mod catalog;
/// HTML page rendering
pub mod render;
