use {
    clap::{Parser, Subcommand, ValueEnum},
    std::path::PathBuf,
};

#[derive(Debug, Parser)]
#[command(author, version, about, long_about = None)]
pub struct Arguments {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Decide for each formula whether it is a theorem of linear arithmetic
    /// over the rationals
    Prove {
        /// Print a proof trace for each formula instead of a bare verdict
        #[arg(long, action)]
        verbose: bool,

        /// Abandon a proof when a single projection step produces more than
        /// this many constraints
        #[arg(long)]
        limit: Option<usize>,

        /// A file with one formula per line; standard input is read when
        /// absent
        input: Option<PathBuf>,
    },

    /// Translate each formula into a normal form
    Translate {
        /// The normal form to translate into
        #[arg(long, value_enum)]
        with: Translation,

        /// A file with one formula per line; standard input is read when
        /// absent
        input: Option<PathBuf>,
    },
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, ValueEnum)]
pub enum Translation {
    Simplify,
    Nnf,
    Pnf,
    Dnf,
    Close,
}

#[cfg(test)]
mod tests {
    use super::Arguments;

    #[test]
    fn verify() {
        use clap::CommandFactory as _;
        Arguments::command().debug_assert()
    }
}
