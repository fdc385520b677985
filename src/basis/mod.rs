//! Basis introspection: naming, translation tables and Cayley tables.
//!
//! Every formatted surface in the crate (multiplication tables, product
//! tables, rotation labels) goes through the single-term naming pipeline in
//! this module, so output shape is uniform: symbolic `e<k>` terms by
//! default, translated letters (`1 i j k L ...`) on request.

mod format; // BasisFormat options and the fixed translation table
mod named; // Single-term naming (string and signed-index forms)
mod table; // Cayley multiplication table builders

pub use format::{BasisFormat, TRANSLATIONS};
pub use named::{basis_label, named_index, named_string};
pub(crate) use named::{leading_term, term_string};
pub use table::{multiplication_table_indexes, multiplication_table_strings, table_display};
