/*!

This is the long-form manual for `spatial_voting` and `bandsim`.

## The model

Every trial builds a fresh synthetic electorate on a small number of
preference dimensions:

* each **dimension** gets a weight (all weights sum to 1) and a
  variable-preference flag. On a non-variable dimension every voter wants
  the extreme position 1.0.
* each **candidate** takes a position in `[0, 1]` on every dimension.
  With `probabilityBunching` above zero, a position may instead be blended
  with the position of a previously generated candidate, which clusters the
  field.
* each **voter** gets an ideal position on every variable dimension,
  optionally pulled towards 0/1 by `polarizationWeight`.

A voter's cost for a candidate is the sum over dimensions of
`|preferred - position| ^ distancePower`; lower cost means higher
preference. Note that the dimension weights are currently not part of this
sum.

Each trial is then resolved three ways:

* the **true Condorcet winner** on the raw costs,
* the **revealed Condorcet winner** on costs adjusted by the bandwagon,
* the **ranked-choice winner** on the same adjusted costs, using Coombs
  elimination (each round removes the candidate the most voters rank last).

The **bandwagon** picks the `numCandidates` front-runners by iterated
plurality, then gives each voter, with probability `proportion`, a discount
on those front-runners worth `bandwagonEffect` standard deviations of that
voter's own cost spread.

`bandsim` sweeps `bandwagonEffect` over a range and reports, for every
value, how often the three winners exist and coincide.

## Configuration

`bandsim` comes with the historical defaults built in; a configuration file
in JSON can override any subset of them:

```text
{
    "model": {
        "numCandidates": 10,
        "numDimensions": 2,
        "numVoters": 1000,
        "distancePower": 1.0,
        "probabilityBunching": 0.0,
        "weightBunching": 0.75,
        "probabilityDimensionVariable": 1.0,
        "eachDimensionEqualWeight": true,
        "maxProportionRemainingWeight": 0.5,
        "polarizationWeight": 0.0
    },
    "bandwagon": {
        "enabled": true,
        "numCandidates": 2,
        "proportion": 0.5,
        "effectStart": 0.0,
        "effectStop": 5.0,
        "effectStep": 0.5
    },
    "numRepetitions": 25000,
    "randomSeed": "0"
}
```

Notes:
- `randomSeed` is given as a string to keep the full 64-bit range available.
- the swept values are `effectStart`, `effectStart + effectStep`, ... up to
  but excluding `effectStop`.
- `--seed` and `--trials` on the command line take precedence over
  `randomSeed` and `numRepetitions`.

## Output

The sweep summary is written in CSV, one row per swept effect value:

```text
bandwagonEffect,trueCondorcetExists,revealedCondorcetExists,rankedChoiceIsTrue,rankedChoiceIsRevealed,existenceAgreement
0.00,0.9928,0.9928,0.9994,0.9994,0.9928
0.50,0.9926,0.9921,0.9821,0.9890,0.9919
```

The existence columns are fractions of all trials. The match and agreement
columns are conditioned on the corresponding Condorcet winner existing, so
they come out as `NaN` whenever no trial at that effect value had one.

By default the summary goes to the standard output; `--out FILE` writes it
to a file instead. With `--reference FILE`, the computed summary is compared
against a previously recorded one and any difference is reported as an
error, which is handy for spotting unintended changes to the simulation.

## Logging

Progress is reported through `env_logger`: one line per swept value at the
`info` level. `--verbose` (or `RUST_LOG=debug`) adds per-trial details, which
is only sensible with a very small `numRepetitions`.

 */
