//! Aggregation of trial outcomes across a swept bandwagon effect.

use log::info;
use rand::Rng;

use crate::{run_trial, SimConfig, SimErrors, TrialOutcome};

/// Running counts of trial outcomes at one swept effect value.
#[derive(Eq, PartialEq, Debug, Clone, Default)]
pub struct OutcomeTally {
    pub trials: u64,
    pub true_condorcet_exists: u64,
    pub revealed_condorcet_exists: u64,
    pub ranked_choice_matches_true: u64,
    pub ranked_choice_matches_revealed: u64,
    pub existence_agreement: u64,
}

impl OutcomeTally {
    pub fn record(&mut self, outcome: &TrialOutcome) {
        self.trials += 1;
        if outcome.true_condorcet_exists {
            self.true_condorcet_exists += 1;
        }
        if outcome.revealed_condorcet_exists {
            self.revealed_condorcet_exists += 1;
        }
        if outcome.ranked_choice_matches_true {
            self.ranked_choice_matches_true += 1;
        }
        if outcome.ranked_choice_matches_revealed {
            self.ranked_choice_matches_revealed += 1;
        }
        if outcome.existence_agreement {
            self.existence_agreement += 1;
        }
    }

    /// The statistics of this tally. The existence rates are fractions of
    /// all trials; the match and agreement rates are conditioned on a
    /// Condorcet winner existing and come out as NaN when no trial had one.
    pub fn summarize(&self, bandwagon_effect: f64) -> SweepPoint {
        SweepPoint {
            bandwagon_effect,
            p_true_condorcet_exists: ratio(self.true_condorcet_exists, self.trials),
            p_revealed_condorcet_exists: ratio(self.revealed_condorcet_exists, self.trials),
            p_ranked_choice_matches_true: ratio(
                self.ranked_choice_matches_true,
                self.true_condorcet_exists,
            ),
            p_ranked_choice_matches_revealed: ratio(
                self.ranked_choice_matches_revealed,
                self.revealed_condorcet_exists,
            ),
            p_existence_agreement: ratio(self.existence_agreement, self.true_condorcet_exists),
        }
    }
}

fn ratio(numerator: u64, denominator: u64) -> f64 {
    numerator as f64 / denominator as f64
}

/// The aggregated statistics of one swept effect value.
#[derive(PartialEq, Debug, Clone)]
pub struct SweepPoint {
    pub bandwagon_effect: f64,
    pub p_true_condorcet_exists: f64,
    pub p_revealed_condorcet_exists: f64,
    pub p_ranked_choice_matches_true: f64,
    pub p_ranked_choice_matches_revealed: f64,
    pub p_existence_agreement: f64,
}

/// Runs `trials_per_effect` trials at every effect value in `effects` and
/// returns one aggregated point per value. The effects are visited in order
/// and all trials draw from the single generator `rng`, so a full sweep is
/// reproducible from one seed.
pub fn run_sweep<R: Rng>(
    config: &SimConfig,
    effects: &[f64],
    trials_per_effect: u64,
    rng: &mut R,
) -> Result<Vec<SweepPoint>, SimErrors> {
    config.check()?;
    let mut points = Vec::with_capacity(effects.len());
    for &effect in effects {
        let step_config = SimConfig {
            bandwagon_effect: effect,
            ..config.clone()
        };
        let mut tally = OutcomeTally::default();
        for _ in 0..trials_per_effect {
            let outcome = run_trial(&step_config, rng)?;
            tally.record(&outcome);
        }
        info!("run_sweep: effect {}: {:?}", effect, tally);
        points.push(tally.summarize(effect));
    }
    Ok(points)
}
