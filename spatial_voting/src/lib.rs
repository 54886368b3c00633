//! Monte-Carlo study of ranked-choice elections over a spatial preference
//! model: how often does the last-place-elimination winner coincide with the
//! Condorcet winner, and what does a bandwagon effect do to that rate?
//!
//! ```
//! use rand::rngs::StdRng;
//! use rand::SeedableRng;
//! use spatial_voting::{run_trial, SimConfig};
//!
//! let config = SimConfig {
//!     num_candidates: 5,
//!     num_voters: 200,
//!     ..SimConfig::DEFAULT
//! };
//! let mut rng = StdRng::seed_from_u64(0);
//! let outcome = run_trial(&config, &mut rng)?;
//! println!("a true Condorcet winner existed: {}", outcome.true_condorcet_exists);
//! # Ok::<(), spatial_voting::SimErrors>(())
//! ```
mod config;
pub mod manual;
pub mod sweep;

use log::debug;
use rand::Rng;

pub use crate::config::*;

// **** Private structures ****

const WEIGHT_SUM_TOLERANCE: f64 = 1e-9;

/// One preference axis of the electorate.
#[derive(Debug, Clone)]
struct Dimension {
    /// Share of the total preference weight carried by this axis. The
    /// weights of a trial always sum to 1. They are generated and checked
    /// but deliberately not applied by the scoring pass; see the note on
    /// `score_voter`.
    weight: f64,
    /// Whether voters differ on this axis. On a non-variable axis every
    /// voter prefers the extreme 1.0.
    variable_preference: bool,
}

#[derive(Debug, Clone)]
struct Candidate {
    /// Position on each dimension, in [0, 1].
    attributes: Vec<f64>,
}

#[derive(Debug, Clone)]
struct Voter {
    /// Ideal position on each dimension, in [0, 1].
    preferred: Vec<f64>,
}

/// Tally direction for the sequential elimination engine.
#[derive(Eq, PartialEq, Debug, Clone, Copy)]
enum Direction {
    /// Each round removes the candidate most voters currently rank last.
    /// This is the Coombs elimination; the last candidate removed is the
    /// ranked-choice winner.
    Worst,
    /// Each round removes the current plurality leader, yielding a
    /// popularity ranking from most to least popular.
    Best,
}

// **** Electorate generation ****

// The generation functions draw from the generator in a fixed order:
// dimensions, then candidates, then voters. Reproducing an electorate from
// a seed alone relies on that order.

fn setup_dimensions<R: Rng>(config: &SimConfig, rng: &mut R) -> Vec<Dimension> {
    let count = config.num_dimensions;
    let mut dimensions: Vec<Dimension> = Vec::with_capacity(count);
    let mut weight_left = 1.0;
    for d in 0..count {
        // The variable-preference roll consumes one draw on every axis,
        // whatever the probability, so the stream position does not depend
        // on the parameter value.
        let variable_preference = rng.gen::<f64>() < config.probability_dimension_variable;
        let weight = if d == count - 1 {
            // The final axis absorbs whatever weight is still unallocated.
            weight_left
        } else if config.each_dimension_equal_weight {
            let w = 1.0 / count as f64;
            weight_left -= w;
            w
        } else {
            let w = weight_left * rng.gen::<f64>() * config.max_proportion_remaining_weight;
            weight_left -= w;
            w
        };
        dimensions.push(Dimension {
            weight,
            variable_preference,
        });
    }
    let total: f64 = dimensions.iter().map(|d| d.weight).sum();
    assert!(
        (total - 1.0).abs() < WEIGHT_SUM_TOLERANCE,
        "dimension weights sum to {} instead of 1",
        total
    );
    dimensions
}

fn setup_candidates<R: Rng>(config: &SimConfig, rng: &mut R) -> Vec<Candidate> {
    let mut candidates: Vec<Candidate> = Vec::with_capacity(config.num_candidates);
    for c in 0..config.num_candidates {
        let mut attributes = Vec::with_capacity(config.num_dimensions);
        for d in 0..config.num_dimensions {
            let fresh = rng.gen::<f64>();
            // The bunching roll is drawn unconditionally. It only takes
            // effect once at least two candidates already exist.
            let bunched = rng.gen::<f64>() < config.probability_bunching;
            let value = if bunched && c > 1 {
                let prior = rng.gen_range(0..c);
                let prior_value = candidates[prior].attributes[d];
                config.weight_bunching * prior_value + (1.0 - config.weight_bunching) * fresh
            } else {
                fresh
            };
            attributes.push(value);
        }
        candidates.push(Candidate { attributes });
    }
    candidates
}

fn setup_voters<R: Rng>(config: &SimConfig, dimensions: &[Dimension], rng: &mut R) -> Vec<Voter> {
    let mut voters: Vec<Voter> = Vec::with_capacity(config.num_voters);
    for _ in 0..config.num_voters {
        let mut preferred = Vec::with_capacity(dimensions.len());
        for dim in dimensions {
            let value = if !dim.variable_preference {
                // Everyone wants the extreme on a non-variable axis, and no
                // draw is consumed for it.
                1.0
            } else {
                let r = rng.gen::<f64>();
                if config.polarization_weight != 0.0 {
                    let extreme = if r > 0.5 { 1.0 } else { 0.0 };
                    config.polarization_weight * extreme + (1.0 - config.polarization_weight) * r
                } else {
                    r
                }
            };
            preferred.push(value);
        }
        voters.push(Voter { preferred });
    }
    voters
}

// **** Scoring ****

/// Costs of every candidate for one voter. Lower is better.
///
/// The cost is the plain sum over dimensions of
/// |preferred - attribute| ^ distance_power. Dimension weights are left out
/// of the sum on purpose: whether they should apply at all is still an open
/// modelling question, and the historical behaviour is the unweighted sum.
fn score_voter(voter: &Voter, candidates: &[Candidate], distance_power: f64) -> Vec<f64> {
    candidates
        .iter()
        .map(|candidate| {
            voter
                .preferred
                .iter()
                .zip(candidate.attributes.iter())
                .map(|(p, a)| (p - a).abs().powf(distance_power))
                .sum()
        })
        .collect()
}

/// One cost row per voter, one column per candidate.
fn score_all(voters: &[Voter], candidates: &[Candidate], distance_power: f64) -> Vec<Vec<f64>> {
    voters
        .iter()
        .map(|v| score_voter(v, candidates, distance_power))
        .collect()
}

// **** Bandwagon adjustment ****

/// Population standard deviation (normalized by N, not N - 1).
fn population_stdev(values: &[f64]) -> f64 {
    let mean = values.iter().sum::<f64>() / values.len() as f64;
    let sum_of_squares: f64 = values.iter().map(|v| (v - mean) * (v - mean)).sum();
    (sum_of_squares / values.len() as f64).sqrt()
}

/// Lowers the cost of the given front-runners for a random subset of
/// voters. Each voter is selected with probability `proportion` (one draw
/// per voter); a selected voter discounts every front-runner by `effect`
/// standard deviations of their own cost row. The discount may push a cost
/// below zero.
fn apply_bandwagon<R: Rng>(
    costs: &mut [Vec<f64>],
    front_runners: &[usize],
    proportion: f64,
    effect: f64,
    rng: &mut R,
) {
    for row in costs.iter_mut() {
        if rng.gen::<f64>() < proportion {
            let bonus = population_stdev(row) * effect;
            for &c in front_runners {
                row[c] -= bonus;
            }
        }
    }
}

// **** Sequential elimination ****

/// The still-running candidate this voter ranks most extremely in the given
/// direction. A single forward scan; on equal costs the earlier index is
/// kept. `None` when every candidate has been removed.
fn extreme_choice(costs: &[f64], removed: &[bool], direction: Direction) -> Option<usize> {
    let mut choice: Option<usize> = None;
    for (c, &cost) in costs.iter().enumerate() {
        if removed[c] {
            continue;
        }
        let replace = match choice {
            None => true,
            Some(current) => match direction {
                Direction::Worst => cost > costs[current],
                Direction::Best => cost < costs[current],
            },
        };
        if replace {
            choice = Some(c);
        }
    }
    choice
}

/// Removes one candidate per round until none remain and returns the
/// removal order. Each round tallies every voter's extreme choice among the
/// still-running candidates and removes the candidate with the strictly
/// greatest tally, the earliest index winning ties.
fn elimination_order(
    costs: &[Vec<f64>],
    num_candidates: usize,
    direction: Direction,
) -> Vec<usize> {
    let mut removed = vec![false; num_candidates];
    let mut order: Vec<usize> = Vec::with_capacity(num_candidates);
    while order.len() < num_candidates {
        let mut tallies = vec![0u64; num_candidates];
        for row in costs {
            let choice = extreme_choice(row, &removed, direction)
                .expect("no running candidate left mid-round");
            tallies[choice] += 1;
        }
        let mut pick: Option<usize> = None;
        let mut pick_tally = 0u64;
        for c in 0..num_candidates {
            if !removed[c] && (pick.is_none() || tallies[c] > pick_tally) {
                pick = Some(c);
                pick_tally = tallies[c];
            }
        }
        let eliminated = pick.expect("no running candidate left to remove");
        removed[eliminated] = true;
        order.push(eliminated);
    }
    order
}

// **** Condorcet resolution ****

/// Whether strictly more voters give candidate `a` a lower cost than `b`
/// than the reverse. A voter with equal costs counts for `b`: a pairwise
/// tie is not a win.
fn majority_prefers(costs: &[Vec<f64>], a: usize, b: usize) -> bool {
    let mut votes_a = 0u64;
    let mut votes_b = 0u64;
    for row in costs {
        if row[a] < row[b] {
            votes_a += 1;
        } else {
            votes_b += 1;
        }
    }
    votes_a > votes_b
}

/// The candidate who beats every other candidate pairwise, if one exists.
/// Candidates are scanned in index order; a Condorcet winner is unique when
/// present, so the scan order only makes the no-winner path deterministic.
fn condorcet_winner(costs: &[Vec<f64>], num_candidates: usize) -> Option<usize> {
    (0..num_candidates)
        .find(|&c| (0..num_candidates).all(|other| other == c || majority_prefers(costs, c, other)))
}

// **** Trial orchestration ****

/// Runs one election trial and returns its outcome flags.
///
/// A trial generates a fresh electorate, scores it once without any
/// bandwagon to resolve the true Condorcet winner, scores it again from
/// scratch with the configured bandwagon adjustment applied, and resolves
/// both the revealed Condorcet winner and the ranked-choice (Coombs) winner
/// on that second pass. The front-runners receiving the bandwagon discount
/// are the top candidates of a plurality popularity ranking computed on the
/// unadjusted scores.
///
/// All randomness comes from `rng`: the same seed and configuration always
/// reproduce the same outcome.
pub fn run_trial<R: Rng>(config: &SimConfig, rng: &mut R) -> Result<TrialOutcome, SimErrors> {
    config.check()?;

    let dimensions = setup_dimensions(config, rng);
    let candidates = setup_candidates(config, rng);
    let voters = setup_voters(config, &dimensions, rng);
    debug!(
        "run_trial: candidate positions on dimension 0: {:?}",
        candidates
            .iter()
            .map(|c| c.attributes[0])
            .collect::<Vec<_>>()
    );

    let true_costs = score_all(&voters, &candidates, config.distance_power);
    let true_condorcet = condorcet_winner(&true_costs, config.num_candidates);

    // The revealed pass is rescored from scratch rather than reusing the
    // true costs, so the adjustment can never leak backwards.
    let mut revealed_costs = score_all(&voters, &candidates, config.distance_power);
    let proportion = config.effective_bandwagon_proportion();
    if proportion > 0.0 {
        let popularity = elimination_order(&revealed_costs, config.num_candidates, Direction::Best);
        let front_runners: Vec<usize> = popularity
            .into_iter()
            .take(config.bandwagon_num_candidates)
            .collect();
        apply_bandwagon(
            &mut revealed_costs,
            &front_runners,
            proportion,
            config.bandwagon_effect,
            rng,
        );
    }
    let revealed_condorcet = condorcet_winner(&revealed_costs, config.num_candidates);

    let coombs = elimination_order(&revealed_costs, config.num_candidates, Direction::Worst);
    let ranked_choice = *coombs.last().expect("empty elimination order");

    debug!(
        "run_trial: true condorcet {:?}, revealed condorcet {:?}, ranked choice {}",
        true_condorcet, revealed_condorcet, ranked_choice
    );

    let true_exists = true_condorcet.is_some();
    let revealed_exists = revealed_condorcet.is_some();
    Ok(TrialOutcome {
        true_condorcet_exists: true_exists,
        revealed_condorcet_exists: revealed_exists,
        ranked_choice_matches_true: true_condorcet == Some(ranked_choice),
        ranked_choice_matches_revealed: revealed_condorcet == Some(ranked_choice),
        existence_agreement: true_exists && (true_exists == revealed_exists),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn rng(seed: u64) -> StdRng {
        StdRng::seed_from_u64(seed)
    }

    fn small_config() -> SimConfig {
        SimConfig {
            num_candidates: 3,
            num_dimensions: 1,
            num_voters: 5,
            bandwagon_enabled: false,
            ..SimConfig::DEFAULT
        }
    }

    #[test]
    fn default_config_is_valid() {
        assert_eq!(SimConfig::DEFAULT.check(), Ok(()));
    }

    #[test]
    fn check_rejects_zero_counts() {
        let config = SimConfig {
            num_candidates: 0,
            ..SimConfig::DEFAULT
        };
        assert_eq!(
            config.check(),
            Err(SimErrors::EmptyElection {
                field: "num_candidates"
            })
        );
        let config = SimConfig {
            num_voters: 0,
            ..SimConfig::DEFAULT
        };
        assert_eq!(
            config.check(),
            Err(SimErrors::EmptyElection {
                field: "num_voters"
            })
        );
    }

    #[test]
    fn check_rejects_out_of_range_parameters() {
        let config = SimConfig {
            bandwagon_proportion: 1.5,
            ..SimConfig::DEFAULT
        };
        assert_eq!(
            config.check(),
            Err(SimErrors::ProbabilityOutOfRange {
                field: "bandwagon_proportion",
                value: 1.5
            })
        );
        let config = SimConfig {
            distance_power: 0.0,
            ..SimConfig::DEFAULT
        };
        assert!(config.check().is_err());
        let config = SimConfig {
            bandwagon_effect: f64::NAN,
            ..SimConfig::DEFAULT
        };
        assert!(config.check().is_err());
        let config = SimConfig {
            probability_bunching: -0.1,
            ..SimConfig::DEFAULT
        };
        assert!(config.check().is_err());
    }

    #[test]
    fn disabled_bandwagon_zeroes_the_proportion() {
        let config = SimConfig {
            bandwagon_enabled: false,
            bandwagon_proportion: 0.5,
            ..SimConfig::DEFAULT
        };
        assert_eq!(config.effective_bandwagon_proportion(), 0.0);
        let config = SimConfig {
            bandwagon_enabled: true,
            bandwagon_proportion: 0.5,
            ..SimConfig::DEFAULT
        };
        assert_eq!(config.effective_bandwagon_proportion(), 0.5);
    }

    #[test]
    fn equal_dimension_weights_sum_to_one() {
        let config = SimConfig {
            num_dimensions: 4,
            each_dimension_equal_weight: true,
            ..SimConfig::DEFAULT
        };
        let dims = setup_dimensions(&config, &mut rng(1));
        assert_eq!(dims.len(), 4);
        for d in &dims[..3] {
            assert_eq!(d.weight, 0.25);
        }
        let total: f64 = dims.iter().map(|d| d.weight).sum();
        assert!((total - 1.0).abs() < 1e-9);
    }

    #[test]
    fn random_dimension_weights_sum_to_one_with_last_taking_the_rest() {
        let config = SimConfig {
            num_dimensions: 5,
            each_dimension_equal_weight: false,
            max_proportion_remaining_weight: 0.5,
            ..SimConfig::DEFAULT
        };
        let dims = setup_dimensions(&config, &mut rng(7));
        let total: f64 = dims.iter().map(|d| d.weight).sum();
        assert!((total - 1.0).abs() < 1e-9, "weights sum to {}", total);
        let allocated: f64 = dims[..4].iter().map(|d| d.weight).sum();
        let last = dims[4].weight;
        assert!((last - (1.0 - allocated)).abs() < 1e-12);
        // Non-final axes take at most half of what remains, so the last one
        // keeps at least (1/2)^4 of the total.
        assert!(last >= 0.0625 - 1e-12, "last weight {}", last);
        for d in &dims {
            assert!(d.weight > 0.0 && d.weight <= 1.0);
        }
    }

    #[test]
    fn dimension_roll_consumption_does_not_depend_on_the_probability() {
        // The variable roll must consume a draw on every axis so that the
        // rest of the stream stays aligned across parameter values.
        let low = SimConfig {
            num_dimensions: 3,
            probability_dimension_variable: 0.1,
            ..SimConfig::DEFAULT
        };
        let high = SimConfig {
            num_dimensions: 3,
            probability_dimension_variable: 0.9,
            ..SimConfig::DEFAULT
        };
        let mut rng_low = rng(11);
        let mut rng_high = rng(11);
        setup_dimensions(&low, &mut rng_low);
        setup_dimensions(&high, &mut rng_high);
        assert_eq!(rng_low.gen::<f64>(), rng_high.gen::<f64>());
    }

    #[test]
    fn candidate_positions_stay_in_the_unit_interval() {
        let config = SimConfig {
            num_candidates: 12,
            num_dimensions: 3,
            probability_bunching: 1.0,
            weight_bunching: 0.75,
            ..SimConfig::DEFAULT
        };
        let candidates = setup_candidates(&config, &mut rng(3));
        assert_eq!(candidates.len(), 12);
        for candidate in &candidates {
            assert_eq!(candidate.attributes.len(), 3);
            for &a in &candidate.attributes {
                assert!((0.0..=1.0).contains(&a), "attribute {} out of range", a);
            }
        }
    }

    #[test]
    fn bunching_never_applies_to_the_first_two_candidates() {
        // The bunching roll is drawn either way, so with two candidates the
        // positions are identical whatever the bunching probability.
        let never = SimConfig {
            num_candidates: 2,
            probability_bunching: 0.0,
            ..SimConfig::DEFAULT
        };
        let always = SimConfig {
            num_candidates: 2,
            probability_bunching: 1.0,
            ..SimConfig::DEFAULT
        };
        let a = setup_candidates(&never, &mut rng(5));
        let b = setup_candidates(&always, &mut rng(5));
        for (ca, cb) in a.iter().zip(b.iter()) {
            assert_eq!(ca.attributes, cb.attributes);
        }
    }

    #[test]
    fn non_variable_dimensions_pin_preferences_to_one() {
        let config = SimConfig {
            num_dimensions: 3,
            num_voters: 20,
            probability_dimension_variable: 0.0,
            ..SimConfig::DEFAULT
        };
        let mut r = rng(2);
        let dims = setup_dimensions(&config, &mut r);
        let voters = setup_voters(&config, &dims, &mut r);
        for voter in &voters {
            assert_eq!(voter.preferred, vec![1.0, 1.0, 1.0]);
        }
    }

    #[test]
    fn polarized_preferences_stay_in_the_unit_interval() {
        let config = SimConfig {
            num_dimensions: 2,
            num_voters: 200,
            probability_dimension_variable: 1.0,
            polarization_weight: 0.9,
            ..SimConfig::DEFAULT
        };
        let mut r = rng(4);
        let dims = setup_dimensions(&config, &mut r);
        let voters = setup_voters(&config, &dims, &mut r);
        for voter in &voters {
            for &p in &voter.preferred {
                assert!((0.0..=1.0).contains(&p), "preference {} out of range", p);
            }
        }
    }

    #[test]
    fn scoring_is_deterministic_for_fixed_positions() {
        let config = small_config();
        let mut r = rng(9);
        let dims = setup_dimensions(&config, &mut r);
        let candidates = setup_candidates(&config, &mut r);
        let voters = setup_voters(&config, &dims, &mut r);
        let once = score_all(&voters, &candidates, config.distance_power);
        let twice = score_all(&voters, &candidates, config.distance_power);
        assert_eq!(once, twice);
    }

    #[test]
    fn scores_are_non_negative_and_bounded_by_dimension_count() {
        let config = SimConfig {
            num_candidates: 4,
            num_dimensions: 3,
            num_voters: 50,
            distance_power: 1.0,
            ..SimConfig::DEFAULT
        };
        let mut r = rng(8);
        let dims = setup_dimensions(&config, &mut r);
        let candidates = setup_candidates(&config, &mut r);
        let voters = setup_voters(&config, &dims, &mut r);
        let costs = score_all(&voters, &candidates, 1.0);
        for row in &costs {
            for &cost in row {
                assert!((0.0..=3.0).contains(&cost), "cost {} out of range", cost);
            }
        }
    }

    #[test]
    fn population_stdev_matches_the_textbook_value() {
        let values = [2.0, 4.0, 4.0, 4.0, 5.0, 5.0, 7.0, 9.0];
        assert_eq!(population_stdev(&values), 2.0);
        assert_eq!(population_stdev(&[3.5]), 0.0);
    }

    #[test]
    fn zero_proportion_bandwagon_changes_nothing() {
        let mut costs = vec![vec![1.0, 2.0, 3.0], vec![0.5, 0.25, 1.0]];
        let reference = costs.clone();
        apply_bandwagon(&mut costs, &[0, 1], 0.0, 10.0, &mut rng(1));
        assert_eq!(costs, reference);
    }

    #[test]
    fn zero_effect_bandwagon_changes_nothing() {
        let mut costs = vec![vec![1.0, 2.0, 3.0], vec![0.5, 0.25, 1.0]];
        let reference = costs.clone();
        // A proportion of 1.0 selects every voter, so this isolates the
        // effect factor.
        apply_bandwagon(&mut costs, &[0, 1], 1.0, 0.0, &mut rng(1));
        assert_eq!(costs, reference);
    }

    #[test]
    fn bandwagon_discounts_only_the_front_runners() {
        let mut costs = vec![vec![4.0, 6.0, 8.0]];
        apply_bandwagon(&mut costs, &[1], 1.0, 1.0, &mut rng(1));
        // Population stdev of [4, 6, 8] is sqrt(8/3); only candidate 1 moves.
        let stdev = (8.0_f64 / 3.0).sqrt();
        assert_eq!(costs[0][0], 4.0);
        assert!((costs[0][1] - (6.0 - stdev)).abs() < 1e-12);
        assert_eq!(costs[0][2], 8.0);
    }

    #[test]
    fn worst_direction_removes_most_hated_first() {
        let costs = vec![
            vec![1.0, 2.0, 9.0],
            vec![1.0, 2.0, 9.0],
            vec![9.0, 1.0, 2.0],
            vec![2.0, 9.0, 1.0],
            vec![1.0, 2.0, 9.0],
        ];
        let order = elimination_order(&costs, 3, Direction::Worst);
        // Three voters hate candidate 2; once it goes, four hate candidate 1.
        assert_eq!(order, vec![2, 1, 0]);
    }

    #[test]
    fn elimination_breaks_ties_on_the_earliest_index() {
        let costs = vec![vec![1.0, 2.0], vec![2.0, 1.0]];
        let order = elimination_order(&costs, 2, Direction::Worst);
        assert_eq!(order, vec![0, 1]);
        // A voter with equal costs also settles on the earliest index.
        let costs = vec![vec![1.0, 1.0]];
        let order = elimination_order(&costs, 2, Direction::Worst);
        assert_eq!(order, vec![0, 1]);
    }

    #[test]
    fn best_direction_recomputes_support_each_round() {
        let costs = vec![
            vec![1.0, 5.0, 9.0],
            vec![5.0, 1.0, 9.0],
            vec![9.0, 5.0, 1.0],
            vec![1.0, 9.0, 5.0],
        ];
        let order = elimination_order(&costs, 3, Direction::Best);
        // Candidate 0 leads with two first choices. Its removal hands one
        // vote to each remaining candidate and the tie goes to candidate 1.
        assert_eq!(order, vec![0, 1, 2]);
    }

    #[test]
    fn extreme_choice_returns_none_when_everyone_is_removed() {
        assert_eq!(extreme_choice(&[1.0], &[true], Direction::Worst), None);
    }

    #[test]
    fn condorcet_winner_found_when_one_beats_all() {
        let costs = vec![
            vec![1.0, 2.0, 3.0],
            vec![1.0, 3.0, 2.0],
            vec![2.0, 1.0, 3.0],
        ];
        assert_eq!(condorcet_winner(&costs, 3), Some(0));
    }

    #[test]
    fn condorcet_winner_absent_on_a_cycle() {
        let costs = vec![
            vec![1.0, 2.0, 3.0],
            vec![3.0, 1.0, 2.0],
            vec![2.0, 3.0, 1.0],
        ];
        assert_eq!(condorcet_winner(&costs, 3), None);
    }

    #[test]
    fn pairwise_tie_is_not_a_win() {
        let costs = vec![vec![1.0, 1.0]];
        assert_eq!(condorcet_winner(&costs, 2), None);
    }

    #[test]
    fn single_candidate_wins_everything() {
        let config = SimConfig {
            num_candidates: 1,
            num_dimensions: 1,
            num_voters: 10,
            ..SimConfig::DEFAULT
        };
        let outcome = run_trial(&config, &mut rng(0)).unwrap();
        assert!(outcome.true_condorcet_exists);
        assert!(outcome.revealed_condorcet_exists);
        assert!(outcome.ranked_choice_matches_true);
        assert!(outcome.ranked_choice_matches_revealed);
        assert!(outcome.existence_agreement);
    }

    #[test]
    fn run_trial_is_deterministic_per_seed() {
        let config = small_config();
        let a = run_trial(&config, &mut rng(42)).unwrap();
        let b = run_trial(&config, &mut rng(42)).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn zero_proportion_is_the_same_as_a_disabled_bandwagon() {
        // Neither variant enters the adjustment, so the draws line up and
        // the outcomes are identical.
        let disabled = SimConfig {
            bandwagon_enabled: false,
            bandwagon_proportion: 0.5,
            num_voters: 100,
            num_candidates: 5,
            ..SimConfig::DEFAULT
        };
        let zeroed = SimConfig {
            bandwagon_enabled: true,
            bandwagon_proportion: 0.0,
            ..disabled.clone()
        };
        for seed in 0..10 {
            let a = run_trial(&disabled, &mut rng(seed)).unwrap();
            let b = run_trial(&zeroed, &mut rng(seed)).unwrap();
            assert_eq!(a, b);
        }
    }

    #[test]
    fn outcome_flags_stay_consistent() {
        let _ = env_logger::builder().is_test(true).try_init();
        let config = SimConfig {
            num_candidates: 6,
            num_voters: 60,
            bandwagon_proportion: 0.5,
            bandwagon_effect: 2.0,
            ..SimConfig::DEFAULT
        };
        for seed in 0..50 {
            let outcome = run_trial(&config, &mut rng(seed)).unwrap();
            if outcome.ranked_choice_matches_true {
                assert!(outcome.true_condorcet_exists, "seed {}", seed);
            }
            if outcome.ranked_choice_matches_revealed {
                assert!(outcome.revealed_condorcet_exists, "seed {}", seed);
            }
            assert_eq!(
                outcome.existence_agreement,
                outcome.true_condorcet_exists && outcome.revealed_condorcet_exists,
                "seed {}",
                seed
            );
        }
    }

    #[test]
    fn run_trial_rejects_invalid_configurations() {
        let config = SimConfig {
            num_candidates: 0,
            ..SimConfig::DEFAULT
        };
        assert!(run_trial(&config, &mut rng(0)).is_err());
    }
}
