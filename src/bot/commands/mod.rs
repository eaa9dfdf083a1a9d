//! Discord command implementations organized by category.

#![allow(clippy::too_long_first_doc_paragraph)]

/// Admin management commands
pub mod admins;

/// General utility commands
pub mod general;

/// Value lookup and edit commands
pub mod values;

// Export commands
pub use admins::*;
pub use general::*;
pub use values::*;
