//! Export backends for rendered diagrams.

pub(crate) mod svg;
