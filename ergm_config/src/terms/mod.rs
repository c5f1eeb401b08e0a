//! Model terms: the capability catalog and the parsed term lists

pub mod catalog;
pub mod params;

pub use catalog::{
    AttrType, ChangeStat, DyadicKind, NetworkMode, NetworkType, TermSetKind, TermShape, TermSpec,
    DEFAULT_LAMBDA,
};
pub use params::{AttrInteractionTerm, AttributeTerm, DyadicTerm, ParamConfig, StructuralTerm};
