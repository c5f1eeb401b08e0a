//! Simulation-mode configuration record

use super::{ConfigRecord, FieldSetter, FieldSpec};
use crate::terms::{ParamConfig, TermSetKind};
use crate::validation::RequirementViolation;
use serde::Serialize;

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct SimConfig {
    /// Number of network samples to take
    pub sample_size: u32,
    /// Sampler iterations between samples
    pub interval: u32,
    /// Sampler iterations discarded before the first sample
    pub burnin: u32,
    pub num_nodes: u32,
    /// Nodes in the first bipartite mode; zero for one-mode networks
    pub num_nodes_a: u32,
    /// Fixed arc count for the IFD sampler; zero leaves density free
    pub num_arcs: u64,
    pub ifd_k: f64,

    pub is_directed: bool,
    pub use_ifd_sampler: bool,
    pub use_tnt_sampler: bool,
    pub output_simulated_networks: bool,
    pub use_conditional_simulation: bool,
    pub forbid_reciprocity: bool,
    pub allow_loops: bool,
    pub citation_ergm: bool,

    pub stats_file: String,
    pub sim_net_file_prefix: String,
    pub binattr_file: Option<String>,
    pub catattr_file: Option<String>,
    pub contattr_file: Option<String>,
    pub setattr_file: Option<String>,
    pub zone_file: Option<String>,
    pub term_file: Option<String>,

    pub params: ParamConfig,
}

impl SimConfig {
    pub fn is_bipartite(&self) -> bool {
        self.num_nodes_a > 0
    }
}

static SIM_SCHEMA: &[FieldSpec<SimConfig>] = &[
    FieldSpec {
        name: "sampleSize",
        setter: FieldSetter::UInt(|c, v| c.sample_size = v),
        default: Some("100"),
        description: "number of network samples",
    },
    FieldSpec {
        name: "interval",
        setter: FieldSetter::UInt(|c, v| c.interval = v),
        default: Some("1000"),
        description: "sampler iterations between samples",
    },
    FieldSpec {
        name: "burnin",
        setter: FieldSetter::UInt(|c, v| c.burnin = v),
        default: Some("10000"),
        description: "sampler iterations discarded before sampling",
    },
    FieldSpec {
        name: "numNodes",
        setter: FieldSetter::UInt(|c, v| c.num_nodes = v),
        default: None,
        description: "number of nodes (required)",
    },
    FieldSpec {
        name: "numNodesA",
        setter: FieldSetter::UInt(|c, v| c.num_nodes_a = v),
        default: Some("0"),
        description: "nodes in bipartite mode A (0 for one-mode)",
    },
    FieldSpec {
        name: "numArcs",
        setter: FieldSetter::ULong(|c, v| c.num_arcs = v),
        default: Some("0"),
        description: "fixed number of arcs for the IFD sampler",
    },
    FieldSpec {
        name: "ifd_K",
        setter: FieldSetter::Double(|c, v| c.ifd_k = v),
        default: Some("0.1"),
        description: "constant for sampler auxiliary parameter under IFD",
    },
    FieldSpec {
        name: "isDirected",
        setter: FieldSetter::Bool(|c, v| c.is_directed = v),
        default: Some("False"),
        description: "simulate a directed network",
    },
    FieldSpec {
        name: "useIFDsampler",
        setter: FieldSetter::Bool(|c, v| c.use_ifd_sampler = v),
        default: Some("False"),
        description: "use the improved fixed density sampler",
    },
    FieldSpec {
        name: "useTNTsampler",
        setter: FieldSetter::Bool(|c, v| c.use_tnt_sampler = v),
        default: Some("False"),
        description: "use the tie-no-tie sampler",
    },
    FieldSpec {
        name: "outputSimulatedNetworks",
        setter: FieldSetter::Bool(|c, v| c.output_simulated_networks = v),
        default: Some("False"),
        description: "write every sampled network",
    },
    FieldSpec {
        name: "useConditionalSimulation",
        setter: FieldSetter::Bool(|c, v| c.use_conditional_simulation = v),
        default: Some("False"),
        description: "condition on the snowball sample zone structure",
    },
    FieldSpec {
        name: "forbidReciprocity",
        setter: FieldSetter::Bool(|c, v| c.forbid_reciprocity = v),
        default: Some("False"),
        description: "never create reciprocated arcs",
    },
    FieldSpec {
        name: "allowLoops",
        setter: FieldSetter::Bool(|c, v| c.allow_loops = v),
        default: Some("False"),
        description: "allow self-edges",
    },
    FieldSpec {
        name: "citationERGM",
        setter: FieldSetter::Bool(|c, v| c.citation_ergm = v),
        default: Some("False"),
        description: "citation ERGM: only arcs from the last period vary",
    },
    FieldSpec {
        name: "statsFile",
        setter: FieldSetter::Str(|c, v| c.stats_file = v),
        default: Some("stats_sim.txt"),
        description: "statistics output file",
    },
    FieldSpec {
        name: "simNetFilePrefix",
        setter: FieldSetter::Str(|c, v| c.sim_net_file_prefix = v),
        default: Some("sim"),
        description: "simulated network output file prefix",
    },
    FieldSpec {
        name: "binattrFile",
        setter: FieldSetter::Str(|c, v| c.binattr_file = Some(v)),
        default: None,
        description: "binary attribute file",
    },
    FieldSpec {
        name: "catattrFile",
        setter: FieldSetter::Str(|c, v| c.catattr_file = Some(v)),
        default: None,
        description: "categorical attribute file",
    },
    FieldSpec {
        name: "contattrFile",
        setter: FieldSetter::Str(|c, v| c.contattr_file = Some(v)),
        default: None,
        description: "continuous attribute file",
    },
    FieldSpec {
        name: "setattrFile",
        setter: FieldSetter::Str(|c, v| c.setattr_file = Some(v)),
        default: None,
        description: "set attribute file",
    },
    FieldSpec {
        name: "zoneFile",
        setter: FieldSetter::Str(|c, v| c.zone_file = Some(v)),
        default: None,
        description: "snowball sample zone file",
    },
    FieldSpec {
        name: "termFile",
        setter: FieldSetter::Str(|c, v| c.term_file = Some(v)),
        default: None,
        description: "citation ERGM term (time period) file",
    },
    FieldSpec {
        name: "structParams",
        setter: FieldSetter::TermSet(TermSetKind::Structural),
        default: None,
        description: "structural parameters with values",
    },
    FieldSpec {
        name: "attrParams",
        setter: FieldSetter::TermSet(TermSetKind::Attribute),
        default: None,
        description: "attribute parameters with values",
    },
    FieldSpec {
        name: "dyadicParams",
        setter: FieldSetter::TermSet(TermSetKind::Dyadic),
        default: None,
        description: "dyadic covariate parameters with values",
    },
    FieldSpec {
        name: "attrInteractionParams",
        setter: FieldSetter::TermSet(TermSetKind::AttrInteraction),
        default: None,
        description: "attribute pair interaction parameters with values",
    },
];

impl ConfigRecord for SimConfig {
    const MODE: &'static str = "simulation";
    const VALUE_BEARING: bool = true;

    fn schema() -> &'static [FieldSpec<Self>] {
        SIM_SCHEMA
    }

    fn params(&self) -> &ParamConfig {
        &self.params
    }

    fn params_mut(&mut self) -> &mut ParamConfig {
        &mut self.params
    }

    fn requirement_violations(&self) -> Vec<RequirementViolation> {
        let mut violations = Vec::new();

        if self.num_nodes == 0 {
            violations.push(RequirementViolation::missing("numNodes"));
        }
        if self.use_ifd_sampler && self.use_tnt_sampler {
            violations.push(RequirementViolation::conflict(
                &["useIFDsampler", "useTNTsampler"],
                "only one sampler can be selected",
            ));
        }
        if self.use_conditional_simulation && self.zone_file.is_none() {
            violations.push(RequirementViolation::conflict(
                &["useConditionalSimulation", "zoneFile"],
                "conditional simulation requires a zone file",
            ));
        }
        if self.is_bipartite() {
            if self.num_nodes_a >= self.num_nodes {
                violations.push(RequirementViolation::conflict(
                    &["numNodesA", "numNodes"],
                    "bipartite mode A must be smaller than the whole network",
                ));
            }
            if self.is_directed {
                violations.push(RequirementViolation::conflict(
                    &["numNodesA", "isDirected"],
                    "bipartite networks must be undirected",
                ));
            }
        }

        violations
    }
}
