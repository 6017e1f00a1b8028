use clap::Parser;

/// Daily goal reminder: describe a goal with an informal Korean deadline and
/// track it until it is done
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Submit a single sentence, print the board, and exit
    #[clap(long, value_name = "SENTENCE")]
    pub once: Option<String>,

    /// Override the extraction model name
    #[clap(long)]
    pub model: Option<String>,
}
