#[derive(Debug, Default, PartialEq, Eq)]
pub struct CliFlags {
    pub help: bool,
    pub version: bool,
    pub verbose: bool,
    pub urandom: bool,
    pub length: Option<usize>,
    pub include: Option<String>,
    pub exclude: Option<String>,
    pub number: Option<usize>,
    pub seed: Option<u64>,
    /// Positional arguments after the last flag; accepted and ignored.
    pub rest: Vec<String>,
}
