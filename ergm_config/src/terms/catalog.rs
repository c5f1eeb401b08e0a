//! Immutable capability tables for every supported model term
//!
//! Each table is the single source of truth for a term's validity, argument
//! shape, attribute table and network applicability. Lookups are
//! case-insensitive.

use serde::Serialize;
use std::fmt;

/// Default decay (lambda) for alternating statistics when none is given
pub const DEFAULT_LAMBDA: f64 = 2.0;

/// Argument shape of a term
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum TermShape {
    /// No numeric argument
    Plain,
    /// Optional `(lambda)` clause, lambda > 1
    Decay,
    /// Every attribute name is followed by `, exponent` in [0, 1]
    Exponent,
}

impl fmt::Display for TermShape {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TermShape::Plain => write!(f, "plain"),
            TermShape::Decay => write!(f, "decay"),
            TermShape::Exponent => write!(f, "exponent"),
        }
    }
}

/// Which node attribute table a term reads
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum AttrType {
    Binary,
    Categorical,
    Continuous,
    Set,
}

impl fmt::Display for AttrType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AttrType::Binary => write!(f, "binary"),
            AttrType::Categorical => write!(f, "categorical"),
            AttrType::Continuous => write!(f, "continuous"),
            AttrType::Set => write!(f, "set"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum NetworkType {
    Directed,
    Undirected,
    Either,
}

impl NetworkType {
    pub fn accepts(self, directed: bool) -> bool {
        match self {
            NetworkType::Directed => directed,
            NetworkType::Undirected => !directed,
            NetworkType::Either => true,
        }
    }
}

impl fmt::Display for NetworkType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NetworkType::Directed => write!(f, "directed"),
            NetworkType::Undirected => write!(f, "undirected"),
            NetworkType::Either => write!(f, "directed or undirected"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum NetworkMode {
    OneMode,
    TwoMode,
    Either,
}

impl NetworkMode {
    pub fn accepts(self, bipartite: bool) -> bool {
        match self {
            NetworkMode::OneMode => !bipartite,
            NetworkMode::TwoMode => bipartite,
            NetworkMode::Either => true,
        }
    }
}

impl fmt::Display for NetworkMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NetworkMode::OneMode => write!(f, "one-mode"),
            NetworkMode::TwoMode => write!(f, "two-mode"),
            NetworkMode::Either => write!(f, "one-mode or two-mode"),
        }
    }
}

/// Compound dyadic covariate kinds
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum DyadicKind {
    /// Great-circle distance from (latitude, longitude)
    Geographic,
    /// Euclidean distance from (x, y, z)
    Euclidean,
}

impl fmt::Display for DyadicKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DyadicKind::Geographic => write!(f, "geographic"),
            DyadicKind::Euclidean => write!(f, "Euclidean"),
        }
    }
}

/// Opaque reference to the engine's change-statistic function for a term
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct ChangeStat(&'static str);

impl ChangeStat {
    pub const fn new(symbol: &'static str) -> Self {
        Self(symbol)
    }

    pub fn symbol(&self) -> &'static str {
        self.0
    }
}

impl fmt::Display for ChangeStat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// One capability table entry
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct TermSpec {
    pub name: &'static str,
    pub shape: TermShape,
    /// Attribute table read by attribute and interaction terms
    pub attr_type: Option<AttrType>,
    pub dyadic_kind: Option<DyadicKind>,
    pub net_type: NetworkType,
    pub net_mode: NetworkMode,
    pub change_stat: ChangeStat,
}

impl TermSpec {
    const fn structural(
        name: &'static str,
        shape: TermShape,
        net_type: NetworkType,
        net_mode: NetworkMode,
        change_stat: &'static str,
    ) -> Self {
        Self {
            name,
            shape,
            attr_type: None,
            dyadic_kind: None,
            net_type,
            net_mode,
            change_stat: ChangeStat::new(change_stat),
        }
    }

    const fn attribute(
        name: &'static str,
        shape: TermShape,
        attr_type: AttrType,
        net_type: NetworkType,
        net_mode: NetworkMode,
        change_stat: &'static str,
    ) -> Self {
        Self {
            name,
            shape,
            attr_type: Some(attr_type),
            dyadic_kind: None,
            net_type,
            net_mode,
            change_stat: ChangeStat::new(change_stat),
        }
    }

    const fn dyadic(name: &'static str, kind: DyadicKind, change_stat: &'static str) -> Self {
        Self {
            name,
            shape: TermShape::Plain,
            attr_type: Some(AttrType::Continuous),
            dyadic_kind: Some(kind),
            net_type: NetworkType::Either,
            net_mode: NetworkMode::OneMode,
            change_stat: ChangeStat::new(change_stat),
        }
    }

    pub fn takes_decay(&self) -> bool {
        self.shape == TermShape::Decay
    }

    pub fn takes_exponent(&self) -> bool {
        self.shape == TermShape::Exponent
    }
}

/// The four term-set keywords and their tables
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum TermSetKind {
    Structural,
    Attribute,
    Dyadic,
    AttrInteraction,
}

impl TermSetKind {
    pub const ALL: [TermSetKind; 4] = [
        TermSetKind::Structural,
        TermSetKind::Attribute,
        TermSetKind::Dyadic,
        TermSetKind::AttrInteraction,
    ];

    /// Configuration keyword introducing this term set
    pub fn keyword(self) -> &'static str {
        match self {
            TermSetKind::Structural => "structParams",
            TermSetKind::Attribute => "attrParams",
            TermSetKind::Dyadic => "dyadicParams",
            TermSetKind::AttrInteraction => "attrInteractionParams",
        }
    }

    pub fn table(self) -> &'static [TermSpec] {
        match self {
            TermSetKind::Structural => STRUCTURAL_TERMS,
            TermSetKind::Attribute => ATTRIBUTE_TERMS,
            TermSetKind::Dyadic => DYADIC_TERMS,
            TermSetKind::AttrInteraction => INTERACTION_TERMS,
        }
    }

    /// Case-insensitive lookup in this kind's table
    pub fn lookup(self, name: &str) -> Option<&'static TermSpec> {
        lookup(self.table(), name)
    }
}

impl fmt::Display for TermSetKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TermSetKind::Structural => write!(f, "structural"),
            TermSetKind::Attribute => write!(f, "attribute"),
            TermSetKind::Dyadic => write!(f, "dyadic"),
            TermSetKind::AttrInteraction => write!(f, "attribute interaction"),
        }
    }
}

/// Case-insensitive lookup of a term name
pub fn lookup(table: &'static [TermSpec], name: &str) -> Option<&'static TermSpec> {
    table.iter().find(|spec| spec.name.eq_ignore_ascii_case(name))
}

use AttrType::*;
use NetworkMode::{Either as AnyMode, OneMode, TwoMode};
use NetworkType::{Directed, Either as AnyType, Undirected};
use TermShape::{Decay, Exponent, Plain};

pub static STRUCTURAL_TERMS: &[TermSpec] = &[
    TermSpec::structural("Arc", Plain, AnyType, AnyMode, "changeArc"),
    TermSpec::structural("Reciprocity", Plain, Directed, OneMode, "changeReciprocity"),
    TermSpec::structural("Sink", Plain, Directed, OneMode, "changeSink"),
    TermSpec::structural("Source", Plain, Directed, OneMode, "changeSource"),
    TermSpec::structural("InTwoStars", Plain, Directed, OneMode, "changeInTwoStars"),
    TermSpec::structural("OutTwoStars", Plain, Directed, OneMode, "changeOutTwoStars"),
    TermSpec::structural("TwoPath", Plain, Directed, OneMode, "changeTwoPath"),
    TermSpec::structural("TransitiveTriad", Plain, Directed, OneMode, "changeTransitiveTriad"),
    TermSpec::structural("CyclicTriad", Plain, Directed, OneMode, "changeCyclicTriad"),
    TermSpec::structural("AltInStars", Decay, Directed, OneMode, "changeAltInStars"),
    TermSpec::structural("AltOutStars", Decay, Directed, OneMode, "changeAltOutStars"),
    TermSpec::structural("AltKTrianglesT", Decay, Directed, OneMode, "changeAltKTrianglesT"),
    TermSpec::structural("AltKTrianglesC", Decay, Directed, OneMode, "changeAltKTrianglesC"),
    TermSpec::structural("AltKTrianglesD", Decay, Directed, OneMode, "changeAltKTrianglesD"),
    TermSpec::structural("AltKTrianglesU", Decay, Directed, OneMode, "changeAltKTrianglesU"),
    TermSpec::structural("AltTwoPathsT", Decay, Directed, OneMode, "changeAltTwoPathsT"),
    TermSpec::structural("AltTwoPathsD", Decay, Directed, OneMode, "changeAltTwoPathsD"),
    TermSpec::structural("AltTwoPathsU", Decay, Directed, OneMode, "changeAltTwoPathsU"),
    TermSpec::structural("AltTwoPathsTD", Decay, Directed, OneMode, "changeAltTwoPathsTD"),
    TermSpec::structural("Loop", Plain, Directed, OneMode, "changeLoop"),
    TermSpec::structural("Edge", Plain, Undirected, AnyMode, "changeEdge"),
    TermSpec::structural("AltStars", Decay, Undirected, OneMode, "changeAltStars"),
    TermSpec::structural("AltKTriangles", Decay, Undirected, OneMode, "changeAltKTriangles"),
    TermSpec::structural("AltTwoPaths", Decay, Undirected, OneMode, "changeAltTwoPaths"),
    TermSpec::structural("FourCycles", Plain, Undirected, OneMode, "changeFourCycles"),
    TermSpec::structural("Isolates", Plain, AnyType, AnyMode, "changeIsolates"),
    TermSpec::structural("BipartiteAltStarsA", Decay, Undirected, TwoMode, "changeBipartiteAltStarsA"),
    TermSpec::structural("BipartiteAltStarsB", Decay, Undirected, TwoMode, "changeBipartiteAltStarsB"),
    TermSpec::structural("BipartiteAltKCyclesA", Decay, Undirected, TwoMode, "changeBipartiteAltKCyclesA"),
    TermSpec::structural("BipartiteAltKCyclesB", Decay, Undirected, TwoMode, "changeBipartiteAltKCyclesB"),
    TermSpec::structural("BipartiteFourCycles", Plain, Undirected, TwoMode, "changeBipartiteFourCycles"),
];

pub static ATTRIBUTE_TERMS: &[TermSpec] = &[
    TermSpec::attribute("Sender", Plain, Binary, Directed, OneMode, "changeSender"),
    TermSpec::attribute("Receiver", Plain, Binary, Directed, OneMode, "changeReceiver"),
    TermSpec::attribute("Interaction", Plain, Binary, AnyType, OneMode, "changeInteraction"),
    TermSpec::attribute("Activity", Plain, Binary, Undirected, OneMode, "changeActivity"),
    TermSpec::attribute("BipartiteActivityA", Plain, Binary, Undirected, TwoMode, "changeBipartiteActivityA"),
    TermSpec::attribute("BipartiteActivityB", Plain, Binary, Undirected, TwoMode, "changeBipartiteActivityB"),
    TermSpec::attribute("Matching", Plain, Categorical, Directed, OneMode, "changeMatching"),
    TermSpec::attribute("MatchingReciprocity", Plain, Categorical, Directed, OneMode, "changeMatchingReciprocity"),
    TermSpec::attribute("Mismatching", Plain, Categorical, Directed, OneMode, "changeMismatching"),
    TermSpec::attribute("MismatchingReciprocity", Plain, Categorical, Directed, OneMode, "changeMismatchingReciprocity"),
    TermSpec::attribute("Match", Plain, Categorical, Undirected, OneMode, "changeMatch"),
    TermSpec::attribute("Mismatch", Plain, Categorical, Undirected, OneMode, "changeMismatch"),
    TermSpec::attribute("BipartiteNodematchAlphaA", Exponent, Categorical, Undirected, TwoMode, "changeBipartiteNodematchAlphaA"),
    TermSpec::attribute("BipartiteNodematchAlphaB", Exponent, Categorical, Undirected, TwoMode, "changeBipartiteNodematchAlphaB"),
    TermSpec::attribute("BipartiteNodematchBetaA", Exponent, Categorical, Undirected, TwoMode, "changeBipartiteNodematchBetaA"),
    TermSpec::attribute("BipartiteNodematchBetaB", Exponent, Categorical, Undirected, TwoMode, "changeBipartiteNodematchBetaB"),
    TermSpec::attribute("ContinuousSender", Plain, Continuous, Directed, OneMode, "changeContinuousSender"),
    TermSpec::attribute("ContinuousReceiver", Plain, Continuous, Directed, OneMode, "changeContinuousReceiver"),
    TermSpec::attribute("ContinuousActivity", Plain, Continuous, Undirected, OneMode, "changeContinuousActivity"),
    TermSpec::attribute("Diff", Plain, Continuous, Directed, OneMode, "changeDiff"),
    TermSpec::attribute("DiffReciprocity", Plain, Continuous, Directed, OneMode, "changeDiffReciprocity"),
    TermSpec::attribute("DiffSign", Plain, Continuous, Directed, OneMode, "changeDiffSign"),
    TermSpec::attribute("DiffDirSR", Plain, Continuous, Directed, OneMode, "changeDiffDirSR"),
    TermSpec::attribute("DiffDirRS", Plain, Continuous, Directed, OneMode, "changeDiffDirRS"),
    TermSpec::attribute("JaccardSimilarity", Plain, Set, AnyType, OneMode, "changeJaccardSimilarity"),
];

pub static DYADIC_TERMS: &[TermSpec] = &[
    TermSpec::dyadic("GeoDistance", DyadicKind::Geographic, "changeGeoDistance"),
    TermSpec::dyadic("logGeoDistance", DyadicKind::Geographic, "changeLogGeoDistance"),
    TermSpec::dyadic("EuclideanDistance", DyadicKind::Euclidean, "changeEuclideanDistance"),
];

pub static INTERACTION_TERMS: &[TermSpec] = &[
    TermSpec::attribute("MatchingInteraction", Plain, Categorical, AnyType, OneMode, "changeMatchingInteraction"),
    TermSpec::attribute("BinaryPairInteraction", Plain, Binary, Directed, OneMode, "changeBinaryPairInteraction"),
];
