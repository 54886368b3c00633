use std::error::Error;
use std::fmt::Display;

// ********* Configuration structures ***********

/// The parameters of one simulated election.
///
/// A configuration stays fixed for the duration of a trial. Sweeps vary
/// `bandwagon_effect` between steps and keep everything else constant.
/// [SimConfig::DEFAULT] carries the reference parameter set.
#[derive(PartialEq, Debug, Clone)]
pub struct SimConfig {
    /// Number of candidates standing in each trial.
    pub num_candidates: usize,
    /// Number of preference dimensions the electorate is modelled on.
    pub num_dimensions: usize,
    /// Number of voters in each trial.
    pub num_voters: usize,
    /// Exponent applied to each per-dimension distance before summing.
    /// 1.0 gives Manhattan distances, 2.0 squared-Euclidean ones.
    pub distance_power: f64,
    /// Probability that a candidate's position on a dimension is blended
    /// with the position of a previously generated candidate instead of
    /// standing on its own.
    pub probability_bunching: f64,
    /// Blend weight given to the earlier candidate's position when bunching
    /// strikes.
    pub weight_bunching: f64,
    /// Probability that a dimension is variable, meaning voters differ on
    /// it. On a non-variable dimension every voter prefers the extreme 1.0.
    pub probability_dimension_variable: f64,
    /// When set, every dimension carries the same weight. Otherwise the
    /// weights come from a random partition that favours earlier dimensions.
    pub each_dimension_equal_weight: bool,
    /// In the random-partition mode, the largest fraction of the remaining
    /// unallocated weight a non-final dimension may take.
    pub max_proportion_remaining_weight: f64,
    /// Pulls voter preferences towards the extremes 0 and 1. At 0.0 the
    /// preferences are uniform, at 1.0 fully polarized.
    pub polarization_weight: f64,
    /// Master switch for the bandwagon adjustment.
    pub bandwagon_enabled: bool,
    /// Number of front-runners receiving the bandwagon bonus.
    pub bandwagon_num_candidates: usize,
    /// Proportion of voters subject to the bandwagon adjustment.
    pub bandwagon_proportion: f64,
    /// Size of the bandwagon bonus, expressed in standard deviations of the
    /// affected voter's own cost vector.
    pub bandwagon_effect: f64,
}

impl SimConfig {
    /// The reference parameter set.
    pub const DEFAULT: SimConfig = SimConfig {
        num_candidates: 10,
        num_dimensions: 2,
        num_voters: 1000,
        distance_power: 1.0,
        probability_bunching: 0.0,
        weight_bunching: 0.75,
        probability_dimension_variable: 1.0,
        each_dimension_equal_weight: true,
        max_proportion_remaining_weight: 0.5,
        polarization_weight: 0.0,
        bandwagon_enabled: true,
        bandwagon_num_candidates: 2,
        bandwagon_proportion: 0.5,
        bandwagon_effect: 3.0,
    };

    /// The proportion of voters actually subject to the bandwagon
    /// adjustment: the configured proportion when the bandwagon is enabled,
    /// zero otherwise.
    pub fn effective_bandwagon_proportion(&self) -> f64 {
        if self.bandwagon_enabled {
            self.bandwagon_proportion
        } else {
            0.0
        }
    }

    /// Validates the configuration. A rejected configuration never reaches
    /// electorate generation.
    pub fn check(&self) -> Result<(), SimErrors> {
        if self.num_candidates == 0 {
            return Err(SimErrors::EmptyElection {
                field: "num_candidates",
            });
        }
        if self.num_dimensions == 0 {
            return Err(SimErrors::EmptyElection {
                field: "num_dimensions",
            });
        }
        if self.num_voters == 0 {
            return Err(SimErrors::EmptyElection { field: "num_voters" });
        }
        check_probability("probability_bunching", self.probability_bunching)?;
        check_probability(
            "probability_dimension_variable",
            self.probability_dimension_variable,
        )?;
        check_probability("bandwagon_proportion", self.bandwagon_proportion)?;
        check_unit_weight("weight_bunching", self.weight_bunching)?;
        check_unit_weight(
            "max_proportion_remaining_weight",
            self.max_proportion_remaining_weight,
        )?;
        check_unit_weight("polarization_weight", self.polarization_weight)?;
        if !(self.distance_power.is_finite() && self.distance_power > 0.0) {
            return Err(SimErrors::WeightOutOfRange {
                field: "distance_power",
                value: self.distance_power,
            });
        }
        if !(self.bandwagon_effect.is_finite() && self.bandwagon_effect >= 0.0) {
            return Err(SimErrors::WeightOutOfRange {
                field: "bandwagon_effect",
                value: self.bandwagon_effect,
            });
        }
        Ok(())
    }
}

fn check_probability(field: &'static str, value: f64) -> Result<(), SimErrors> {
    if value.is_finite() && (0.0..=1.0).contains(&value) {
        Ok(())
    } else {
        Err(SimErrors::ProbabilityOutOfRange { field, value })
    }
}

fn check_unit_weight(field: &'static str, value: f64) -> Result<(), SimErrors> {
    if value.is_finite() && (0.0..=1.0).contains(&value) {
        Ok(())
    } else {
        Err(SimErrors::WeightOutOfRange { field, value })
    }
}

// ********* Outcome structures ***********

/// The outcome flags of one simulated trial.
///
/// The "true" Condorcet winner is resolved on the bandwagon-free scoring
/// pass and the "revealed" winner on the pass the bandwagon adjustment was
/// applied to. The ranked-choice winner is always resolved on the revealed
/// scores.
#[derive(Eq, PartialEq, Debug, Clone, Copy)]
pub struct TrialOutcome {
    /// A Condorcet winner exists under the true scores.
    pub true_condorcet_exists: bool,
    /// A Condorcet winner exists under the revealed scores.
    pub revealed_condorcet_exists: bool,
    /// The ranked-choice winner is the true Condorcet winner. False whenever
    /// no true winner exists.
    pub ranked_choice_matches_true: bool,
    /// The ranked-choice winner is the revealed Condorcet winner. False
    /// whenever no revealed winner exists.
    pub ranked_choice_matches_revealed: bool,
    /// A true Condorcet winner exists, and a revealed winner exists as well.
    pub existence_agreement: bool,
}

/// Errors that reject a configuration before anything is simulated.
#[derive(PartialEq, Debug, Clone)]
pub enum SimErrors {
    /// A candidate, dimension or voter count is zero.
    EmptyElection { field: &'static str },
    /// A probability parameter lies outside [0, 1].
    ProbabilityOutOfRange { field: &'static str, value: f64 },
    /// A weight or exponent parameter lies outside its valid range.
    WeightOutOfRange { field: &'static str, value: f64 },
}

impl Display for SimErrors {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SimErrors::EmptyElection { field } => {
                write!(f, "{} may not be zero", field)
            }
            SimErrors::ProbabilityOutOfRange { field, value } => {
                write!(f, "{} must lie in [0, 1], got {}", field, value)
            }
            SimErrors::WeightOutOfRange { field, value } => {
                write!(f, "{} is outside its valid range: {}", field, value)
            }
        }
    }
}

impl Error for SimErrors {}
