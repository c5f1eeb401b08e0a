//! Estimation-mode configuration record

use super::{ConfigRecord, FieldSetter, FieldSpec};
use crate::terms::{ParamConfig, TermSetKind};
use crate::validation::RequirementViolation;
use serde::Serialize;

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct EstimConfig {
    /// Multiplier for step size in Algorithm S
    pub aca_s: f64,
    /// Multiplier for step size in Algorithm EE
    pub aca_ee: f64,
    /// Multiplier of sd/mean theta to limit variance
    pub comp_c: f64,
    /// Constant for the sampler auxiliary parameter under IFD
    pub ifd_k: f64,
    /// Borisenko update learning rate
    pub learning_rate: f64,
    /// Borisenko update minimum theta magnitude
    pub min_theta: f64,

    pub sampler_steps: u32,
    pub s_steps: u32,
    pub ee_steps: u32,
    pub ee_inner_steps: u32,

    pub output_all_steps: bool,
    pub use_ifd_sampler: bool,
    pub use_tnt_sampler: bool,
    pub output_simulated_network: bool,
    pub use_conditional_estimation: bool,
    pub forbid_reciprocity: bool,
    pub use_borisenko_update: bool,
    pub allow_loops: bool,
    pub citation_ergm: bool,

    pub arclist_file: Option<String>,
    pub binattr_file: Option<String>,
    pub catattr_file: Option<String>,
    pub contattr_file: Option<String>,
    pub setattr_file: Option<String>,
    pub zone_file: Option<String>,
    pub term_file: Option<String>,
    pub theta_file_prefix: String,
    pub dza_file_prefix: String,
    pub sim_net_file_prefix: String,

    pub params: ParamConfig,
}

static ESTIM_SCHEMA: &[FieldSpec<EstimConfig>] = &[
    FieldSpec {
        name: "ACA_S",
        setter: FieldSetter::Double(|c, v| c.aca_s = v),
        default: Some("0.1"),
        description: "multiplier for step size in Algorithm S",
    },
    FieldSpec {
        name: "ACA_EE",
        setter: FieldSetter::Double(|c, v| c.aca_ee = v),
        default: Some("1e-09"),
        description: "multiplier for step size in Algorithm EE",
    },
    FieldSpec {
        name: "compC",
        setter: FieldSetter::Double(|c, v| c.comp_c = v),
        default: Some("1e-02"),
        description: "multiplier of sd(theta)/mean(theta) to limit variance",
    },
    FieldSpec {
        name: "ifd_K",
        setter: FieldSetter::Double(|c, v| c.ifd_k = v),
        default: Some("0.1"),
        description: "constant for sampler auxiliary parameter under IFD",
    },
    FieldSpec {
        name: "learningRate",
        setter: FieldSetter::Double(|c, v| c.learning_rate = v),
        default: Some("0.001"),
        description: "learning rate for the Borisenko update",
    },
    FieldSpec {
        name: "minTheta",
        setter: FieldSetter::Double(|c, v| c.min_theta = v),
        default: Some("0.01"),
        description: "minimum magnitude of theta for the Borisenko update",
    },
    FieldSpec {
        name: "samplerSteps",
        setter: FieldSetter::UInt(|c, v| c.sampler_steps = v),
        default: Some("1000"),
        description: "sampler iterations per algorithm step",
    },
    FieldSpec {
        name: "Ssteps",
        setter: FieldSetter::UInt(|c, v| c.s_steps = v),
        default: Some("100"),
        description: "steps of Algorithm S",
    },
    FieldSpec {
        name: "EEsteps",
        setter: FieldSetter::UInt(|c, v| c.ee_steps = v),
        default: Some("1000"),
        description: "steps of Algorithm EE",
    },
    FieldSpec {
        name: "EEinnerSteps",
        setter: FieldSetter::UInt(|c, v| c.ee_inner_steps = v),
        default: Some("100"),
        description: "inner iterations of Algorithm EE",
    },
    FieldSpec {
        name: "outputAllSteps",
        setter: FieldSetter::Bool(|c, v| c.output_all_steps = v),
        default: Some("False"),
        description: "write theta and dzA values on every iteration",
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
        name: "outputSimulatedNetwork",
        setter: FieldSetter::Bool(|c, v| c.output_simulated_network = v),
        default: Some("False"),
        description: "write the final simulated network",
    },
    FieldSpec {
        name: "useConditionalEstimation",
        setter: FieldSetter::Bool(|c, v| c.use_conditional_estimation = v),
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
        name: "useBorisenkoUpdate",
        setter: FieldSetter::Bool(|c, v| c.use_borisenko_update = v),
        default: Some("False"),
        description: "use the Borisenko update in Algorithm EE",
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
        name: "arclistFile",
        setter: FieldSetter::Str(|c, v| c.arclist_file = Some(v)),
        default: None,
        description: "network in Pajek arc list format (required)",
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
        name: "thetaFilePrefix",
        setter: FieldSetter::Str(|c, v| c.theta_file_prefix = v),
        default: Some("theta_values"),
        description: "theta output file prefix",
    },
    FieldSpec {
        name: "dzAFilePrefix",
        setter: FieldSetter::Str(|c, v| c.dza_file_prefix = v),
        default: Some("dzA_values"),
        description: "dzA output file prefix",
    },
    FieldSpec {
        name: "simNetFilePrefix",
        setter: FieldSetter::Str(|c, v| c.sim_net_file_prefix = v),
        default: Some("sim_giant"),
        description: "simulated network output file prefix",
    },
    FieldSpec {
        name: "structParams",
        setter: FieldSetter::TermSet(TermSetKind::Structural),
        default: None,
        description: "structural parameters",
    },
    FieldSpec {
        name: "attrParams",
        setter: FieldSetter::TermSet(TermSetKind::Attribute),
        default: None,
        description: "attribute parameters",
    },
    FieldSpec {
        name: "dyadicParams",
        setter: FieldSetter::TermSet(TermSetKind::Dyadic),
        default: None,
        description: "dyadic covariate parameters",
    },
    FieldSpec {
        name: "attrInteractionParams",
        setter: FieldSetter::TermSet(TermSetKind::AttrInteraction),
        default: None,
        description: "attribute pair interaction parameters",
    },
];

impl ConfigRecord for EstimConfig {
    const MODE: &'static str = "estimation";
    const VALUE_BEARING: bool = false;

    fn schema() -> &'static [FieldSpec<Self>] {
        ESTIM_SCHEMA
    }

    fn params(&self) -> &ParamConfig {
        &self.params
    }

    fn params_mut(&mut self) -> &mut ParamConfig {
        &mut self.params
    }

    fn requirement_violations(&self) -> Vec<RequirementViolation> {
        let mut violations = Vec::new();

        if self.arclist_file.as_deref().map_or(true, str::is_empty) {
            violations.push(RequirementViolation::missing("arclistFile"));
        }
        if self.use_ifd_sampler && self.use_tnt_sampler {
            violations.push(RequirementViolation::conflict(
                &["useIFDsampler", "useTNTsampler"],
                "only one sampler can be selected",
            ));
        }
        if self.use_conditional_estimation && self.zone_file.is_none() {
            violations.push(RequirementViolation::conflict(
                &["useConditionalEstimation", "zoneFile"],
                "conditional estimation requires a zone file",
            ));
        }
        if self.use_borisenko_update && self.learning_rate <= 0.0 {
            violations.push(RequirementViolation::conflict(
                &["useBorisenkoUpdate", "learningRate"],
                "the Borisenko update requires a positive learning rate",
            ));
        }

        violations
    }
}
