//! Request adapters for Capo chord diagrams.
//!
//! Two request shapes exist in the wild and both are parsed here into the
//! same normalized [`ChordDiagram`](capo_core::diagram::ChordDiagram):
//!
//! - [`parse_query`]: flat key-value parameters (`pos=-1,3,2,0,1,0&name=Cmaj`),
//!   where every value arrives as text.
//! - [`parse_json`]: a JSON body with `instrument`, `meta.name`, and a
//!   `diagram` object, where positions are already integers.
//!
//! Keeping the two parsers independent keeps the renderer agnostic to
//! transport: it only ever sees the normalized diagram.

pub mod error;

mod json;
mod query;

pub use error::ParseError;
pub use json::parse_json;
pub use query::parse_query;
