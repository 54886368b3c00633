use log::{debug, info, warn};

use spatial_voting::sweep::{run_sweep, SweepPoint};
use spatial_voting::SimConfig;

use snafu::{prelude::*, Snafu};

use rand::rngs::StdRng;
use rand::SeedableRng;

use std::fs;

use serde::{Deserialize, Serialize};
use text_diff::print_diff;

use crate::args::Args;
use crate::sim::config_reader::*;

// Historical defaults, used for anything the configuration file does not
// override.
const DEFAULT_TRIALS: u64 = 25_000;
const DEFAULT_SEED: u64 = 0;
const DEFAULT_EFFECT_START: f64 = 0.0;
const DEFAULT_EFFECT_STOP: f64 = 5.0;
const DEFAULT_EFFECT_STEP: f64 = 0.5;

#[derive(Debug, Snafu)]
pub enum BandsimError {
    #[snafu(display("Error opening config file {path}"))]
    OpeningConfig {
        source: std::io::Error,
        path: String,
    },
    #[snafu(display("Error parsing config file"))]
    ParsingConfig { source: serde_json::Error },
    #[snafu(display("Error parsing random seed {seed}"))]
    ParsingSeed {
        source: std::num::ParseIntError,
        seed: String,
    },
    #[snafu(display("Error rendering the summary"))]
    RenderingSummary { source: csv::Error },
    #[snafu(display("Error writing the summary to {path}"))]
    WritingSummary {
        source: std::io::Error,
        path: String,
    },
    #[snafu(display("Error opening reference file {path}"))]
    OpeningReference {
        source: std::io::Error,
        path: String,
    },

    #[snafu(whatever, display("{message}"))]
    Whatever {
        message: String,
        #[snafu(source(from(Box<dyn std::error::Error>, Some)))]
        source: Option<Box<dyn std::error::Error>>,
    },
}

type BandsimResult<T> = Result<T, BandsimError>;

/// Everything the driver needs besides the model itself: the swept effect
/// values, the number of trials per value and the generator seed.
#[derive(PartialEq, Debug, Clone)]
pub struct SweepPlan {
    pub effects: Vec<f64>,
    pub trials_per_effect: u64,
    pub seed: u64,
}

/// The swept effect values: start, start + step, and so on, strictly below
/// stop.
pub fn effect_range(start: f64, stop: f64, step: f64) -> Vec<f64> {
    let mut effects: Vec<f64> = Vec::new();
    let mut value = start;
    while value < stop {
        effects.push(value);
        value += step;
    }
    effects
}

pub mod config_reader {
    use crate::sim::*;

    /// Overrides for the electorate model. Anything left out keeps its
    /// historical default.
    #[derive(PartialEq, Debug, Clone, Serialize, Deserialize)]
    pub struct ModelSection {
        #[serde(rename = "numCandidates")]
        pub num_candidates: Option<usize>,
        #[serde(rename = "numDimensions")]
        pub num_dimensions: Option<usize>,
        #[serde(rename = "numVoters")]
        pub num_voters: Option<usize>,
        #[serde(rename = "distancePower")]
        pub distance_power: Option<f64>,
        #[serde(rename = "probabilityBunching")]
        pub probability_bunching: Option<f64>,
        #[serde(rename = "weightBunching")]
        pub weight_bunching: Option<f64>,
        #[serde(rename = "probabilityDimensionVariable")]
        pub probability_dimension_variable: Option<f64>,
        #[serde(rename = "eachDimensionEqualWeight")]
        pub each_dimension_equal_weight: Option<bool>,
        #[serde(rename = "maxProportionRemainingWeight")]
        pub max_proportion_remaining_weight: Option<f64>,
        #[serde(rename = "polarizationWeight")]
        pub polarization_weight: Option<f64>,
    }

    /// Overrides for the bandwagon adjustment and the swept effect range.
    #[derive(PartialEq, Debug, Clone, Serialize, Deserialize)]
    pub struct BandwagonSection {
        pub enabled: Option<bool>,
        #[serde(rename = "numCandidates")]
        pub num_candidates: Option<usize>,
        pub proportion: Option<f64>,
        #[serde(rename = "effectStart")]
        pub effect_start: Option<f64>,
        #[serde(rename = "effectStop")]
        pub effect_stop: Option<f64>,
        #[serde(rename = "effectStep")]
        pub effect_step: Option<f64>,
    }

    #[derive(PartialEq, Debug, Clone, Default, Serialize, Deserialize)]
    pub struct SimFileConfig {
        pub model: Option<ModelSection>,
        pub bandwagon: Option<BandwagonSection>,
        #[serde(rename = "numRepetitions")]
        pub num_repetitions: Option<u64>,
        // The seed is kept as a string to make the full 64-bit range
        // available in JSON.
        #[serde(rename = "randomSeed")]
        pub random_seed: Option<String>,
    }

    pub fn read_config(path: &str) -> BandsimResult<SimFileConfig> {
        let contents = fs::read_to_string(path).context(OpeningConfigSnafu {
            path: path.to_string(),
        })?;
        debug!("read content: {:?}", contents);
        serde_json::from_str(contents.as_str()).context(ParsingConfigSnafu {})
    }

    /// Merges the file configuration over the historical defaults and
    /// builds the sweep plan.
    pub fn validate_config(file: &SimFileConfig) -> BandsimResult<(SimConfig, SweepPlan)> {
        let mut config = SimConfig::DEFAULT;
        if let Some(model) = &file.model {
            if let Some(x) = model.num_candidates {
                config.num_candidates = x;
            }
            if let Some(x) = model.num_dimensions {
                config.num_dimensions = x;
            }
            if let Some(x) = model.num_voters {
                config.num_voters = x;
            }
            if let Some(x) = model.distance_power {
                config.distance_power = x;
            }
            if let Some(x) = model.probability_bunching {
                config.probability_bunching = x;
            }
            if let Some(x) = model.weight_bunching {
                config.weight_bunching = x;
            }
            if let Some(x) = model.probability_dimension_variable {
                config.probability_dimension_variable = x;
            }
            if let Some(x) = model.each_dimension_equal_weight {
                config.each_dimension_equal_weight = x;
            }
            if let Some(x) = model.max_proportion_remaining_weight {
                config.max_proportion_remaining_weight = x;
            }
            if let Some(x) = model.polarization_weight {
                config.polarization_weight = x;
            }
        }
        let mut effect_start = DEFAULT_EFFECT_START;
        let mut effect_stop = DEFAULT_EFFECT_STOP;
        let mut effect_step = DEFAULT_EFFECT_STEP;
        if let Some(bandwagon) = &file.bandwagon {
            if let Some(x) = bandwagon.enabled {
                config.bandwagon_enabled = x;
            }
            if let Some(x) = bandwagon.num_candidates {
                config.bandwagon_num_candidates = x;
            }
            if let Some(x) = bandwagon.proportion {
                config.bandwagon_proportion = x;
            }
            if let Some(x) = bandwagon.effect_start {
                effect_start = x;
            }
            if let Some(x) = bandwagon.effect_stop {
                effect_stop = x;
            }
            if let Some(x) = bandwagon.effect_step {
                effect_step = x;
            }
        }
        if let Err(e) = config.check() {
            whatever!("Invalid configuration: {}", e);
        }
        if !(effect_step.is_finite() && effect_step > 0.0) {
            whatever!("effectStep must be a positive number, got {}", effect_step);
        }
        let effects = effect_range(effect_start, effect_stop, effect_step);
        if effects.is_empty() {
            whatever!(
                "The swept range [{}, {}) contains no effect value",
                effect_start,
                effect_stop
            );
        }
        let seed: u64 = match &file.random_seed {
            Some(s) => s
                .parse::<u64>()
                .context(ParsingSeedSnafu { seed: s.clone() })?,
            None => DEFAULT_SEED,
        };
        let trials_per_effect = file.num_repetitions.unwrap_or(DEFAULT_TRIALS);
        Ok((
            config,
            SweepPlan {
                effects,
                trials_per_effect,
                seed,
            },
        ))
    }
}

/// Renders the sweep summary as CSV text, one row per effect value.
fn render_summary(points: &[SweepPoint]) -> BandsimResult<String> {
    let mut writer = csv::Writer::from_writer(vec![]);
    writer
        .write_record([
            "bandwagonEffect",
            "trueCondorcetExists",
            "revealedCondorcetExists",
            "rankedChoiceIsTrue",
            "rankedChoiceIsRevealed",
            "existenceAgreement",
        ])
        .context(RenderingSummarySnafu {})?;
    for point in points {
        writer
            .write_record([
                format!("{:.2}", point.bandwagon_effect),
                format!("{:.4}", point.p_true_condorcet_exists),
                format!("{:.4}", point.p_revealed_condorcet_exists),
                format!("{:.4}", point.p_ranked_choice_matches_true),
                format!("{:.4}", point.p_ranked_choice_matches_revealed),
                format!("{:.4}", point.p_existence_agreement),
            ])
            .context(RenderingSummarySnafu {})?;
    }
    let bytes = match writer.into_inner() {
        Ok(bytes) => bytes,
        Err(e) => whatever!("Error finalizing the summary buffer: {}", e),
    };
    match String::from_utf8(bytes) {
        Ok(text) => Ok(text),
        Err(e) => whatever!("The summary is not valid UTF-8: {}", e),
    }
}

pub fn run_simulation(args: &Args) -> BandsimResult<()> {
    let file_config = match &args.config {
        Some(path) => read_config(path)?,
        None => SimFileConfig::default(),
    };
    info!("config: {:?}", file_config);

    let (config, mut plan) = validate_config(&file_config)?;
    if let Some(seed) = args.seed {
        plan.seed = seed;
    }
    if let Some(trials) = args.trials {
        plan.trials_per_effect = trials;
    }
    info!(
        "Sweeping {} effect values with {} trials each, seed {}",
        plan.effects.len(),
        plan.trials_per_effect,
        plan.seed
    );
    debug!("model: {:?}", config);

    let mut rng = StdRng::seed_from_u64(plan.seed);
    let points = match run_sweep(&config, &plan.effects, plan.trials_per_effect, &mut rng) {
        Ok(points) => points,
        Err(e) => whatever!("Simulation error: {}", e),
    };

    let summary = render_summary(&points)?;
    match &args.out {
        Some(path) if path != "stdout" => {
            fs::write(path, &summary).context(WritingSummarySnafu { path: path.clone() })?;
            info!("Summary written to {}", path);
        }
        _ => {
            print!("{}", summary);
        }
    }

    // The reference summary, if provided for comparison
    if let Some(reference_path) = &args.reference {
        let reference = fs::read_to_string(reference_path).context(OpeningReferenceSnafu {
            path: reference_path.clone(),
        })?;
        if reference != summary {
            warn!("Found differences with the reference summary");
            print_diff(reference.as_str(), summary.as_str(), "\n");
            whatever!("Difference detected between computed summary and reference summary")
        }
    }

    Ok(())
}
