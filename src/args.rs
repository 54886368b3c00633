use clap::Parser;

/// This is a ranked voting simulation program.
#[derive(Parser, Debug, Clone)]
#[clap(author, version, about, long_about = None)]
pub struct Args {
    /// (file path, optional) The file containing the simulation parameters in JSON format.
    /// Any missing field falls back to the historical defaults. For more information about
    /// the file format, read the documentation.
    #[clap(short, long, value_parser)]
    pub config: Option<String>,
    /// (file path) A reference file containing the summary of a sweep in CSV format. If provided, bandsim will
    /// check that the computed summary matches the reference.
    #[clap(short, long, value_parser)]
    pub reference: Option<String>,

    /// (file path, 'stdout' or empty) If specified, the summary of the sweep will be written in CSV format to the given
    /// location. By default the summary goes to the standard output.
    #[clap(short, long, value_parser)]
    pub out: Option<String>,

    /// (integer, optional) The seed of the random generator. Setting this option overrides the randomSeed value
    /// that may be specified with the --config option.
    #[clap(short, long, value_parser)]
    pub seed: Option<u64>,

    /// (integer, optional) The number of trials to run at each swept effect value. Setting this option overrides
    /// the numRepetitions value that may be specified with the --config option.
    #[clap(short, long, value_parser)]
    pub trials: Option<u64>,

    // Other arguments
    /// If passed as an argument, will turn on verbose logging to the standard output.
    #[clap(long, takes_value = false)]
    pub verbose: bool,
}
