//! In-memory network description used by the command line and tests

use super::{CoordinateSlot, NetworkAttributes};
use crate::terms::AttrType;
use serde::Serialize;

/// Continuous attribute indices chosen as coordinates
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct CoordinateIndices {
    pub latitude: Option<usize>,
    pub longitude: Option<usize>,
    pub x: Option<usize>,
    pub y: Option<usize>,
    pub z: Option<usize>,
}

impl CoordinateIndices {
    pub fn get(&self, slot: CoordinateSlot) -> Option<usize> {
        match slot {
            CoordinateSlot::Latitude => self.latitude,
            CoordinateSlot::Longitude => self.longitude,
            CoordinateSlot::X => self.x,
            CoordinateSlot::Y => self.y,
            CoordinateSlot::Z => self.z,
        }
    }

    fn slot_mut(&mut self, slot: CoordinateSlot) -> &mut Option<usize> {
        match slot {
            CoordinateSlot::Latitude => &mut self.latitude,
            CoordinateSlot::Longitude => &mut self.longitude,
            CoordinateSlot::X => &mut self.x,
            CoordinateSlot::Y => &mut self.y,
            CoordinateSlot::Z => &mut self.z,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Graph {
    directed: bool,
    bipartite: bool,
    binary_names: Vec<String>,
    categorical_names: Vec<String>,
    continuous_names: Vec<String>,
    set_names: Vec<String>,
    coordinates: CoordinateIndices,
}

impl Graph {
    pub fn builder() -> GraphBuilder {
        GraphBuilder::default()
    }

    pub fn coordinates(&self) -> &CoordinateIndices {
        &self.coordinates
    }
}

impl NetworkAttributes for Graph {
    fn is_directed(&self) -> bool {
        self.directed
    }

    fn is_bipartite(&self) -> bool {
        self.bipartite
    }

    fn attribute_names(&self, attr_type: AttrType) -> &[String] {
        match attr_type {
            AttrType::Binary => &self.binary_names,
            AttrType::Categorical => &self.categorical_names,
            AttrType::Continuous => &self.continuous_names,
            AttrType::Set => &self.set_names,
        }
    }

    fn set_coordinate_slot(&mut self, slot: CoordinateSlot, index: usize) {
        *self.coordinates.slot_mut(slot) = Some(index);
    }
}

#[derive(Debug, Clone, Default)]
pub struct GraphBuilder {
    graph: Graph,
}

impl GraphBuilder {
    pub fn directed(mut self, directed: bool) -> Self {
        self.graph.directed = directed;
        self
    }

    pub fn bipartite(mut self, bipartite: bool) -> Self {
        self.graph.bipartite = bipartite;
        self
    }

    /// Replace the name table for one attribute type
    pub fn attributes<I, S>(mut self, attr_type: AttrType, names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let names = names.into_iter().map(Into::into).collect();
        match attr_type {
            AttrType::Binary => self.graph.binary_names = names,
            AttrType::Categorical => self.graph.categorical_names = names,
            AttrType::Continuous => self.graph.continuous_names = names,
            AttrType::Set => self.graph.set_names = names,
        }
        self
    }

    pub fn build(self) -> Graph {
        self.graph
    }
}
