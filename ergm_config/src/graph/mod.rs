//! Network collaborator interface
//!
//! Attribute loading happens outside this crate. Resolution and validation
//! only need the per-type attribute name tables, the directed and bipartite
//! flags, and somewhere to record the coordinate attributes used by
//! compound dyadic covariates.

pub mod network;

pub use network::{CoordinateIndices, Graph, GraphBuilder};

use crate::terms::AttrType;
use serde::Serialize;
use std::fmt;

/// Destination for a resolved coordinate attribute
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum CoordinateSlot {
    Latitude,
    Longitude,
    X,
    Y,
    Z,
}

impl fmt::Display for CoordinateSlot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CoordinateSlot::Latitude => write!(f, "latitude"),
            CoordinateSlot::Longitude => write!(f, "longitude"),
            CoordinateSlot::X => write!(f, "x"),
            CoordinateSlot::Y => write!(f, "y"),
            CoordinateSlot::Z => write!(f, "z"),
        }
    }
}

/// What the resolver and validator need from a loaded network
pub trait NetworkAttributes {
    fn is_directed(&self) -> bool;

    fn is_bipartite(&self) -> bool;

    /// Attribute names loaded for one attribute table, in table order
    fn attribute_names(&self, attr_type: AttrType) -> &[String];

    /// Record a continuous attribute index as a coordinate
    fn set_coordinate_slot(&mut self, slot: CoordinateSlot, index: usize);

    /// Case-insensitive position of `name` in the `attr_type` table
    fn find_attribute(&self, attr_type: AttrType, name: &str) -> Option<usize> {
        self.attribute_names(attr_type)
            .iter()
            .position(|candidate| candidate.eq_ignore_ascii_case(name))
    }
}
