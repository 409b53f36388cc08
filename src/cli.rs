use clap::{Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(author, version, about = "football match prediction backend")]
pub struct Cli {
    /// Command
    #[clap(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug, Clone, PartialEq)]
#[clap(rename_all = "lower_case")]
pub enum Command {
    /// Start the prediction server
    Serve {
        /// Port number (optional, defaults to 3000)
        #[arg(short, long, default_value_t = 3000)]
        port: u16,
    },
    /// Download the results feed for a league into the local cache
    Fetch {
        /// League code, e.g. F1 or E0
        #[arg(default_value = "F1")]
        league: String,
        /// Refetch even when the cached download is still fresh
        #[arg(long)]
        force: bool,
    },
    /// Fit the rating model for a league and print the coefficient table
    Ratings {
        /// League code, e.g. F1 or E0
        #[arg(default_value = "F1")]
        league: String,
    },
    /// Predict a single fixture
    Predict {
        /// Home team name as it appears in the feed
        home: String,
        /// Away team name as it appears in the feed
        away: String,
        /// League code, e.g. F1 or E0
        #[arg(short, long, default_value = "F1")]
        league: String,
        /// Simulation count (defaults to the model setting)
        #[arg(long)]
        simulations: Option<u32>,
        /// Fix the random seed for reproducible output
        #[arg(long)]
        seed: Option<u64>,
    },
}
