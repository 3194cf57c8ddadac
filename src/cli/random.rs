//! Random configuration command.

use clap::Args;
use rand::rngs::StdRng;
use rand::SeedableRng;

use crate::cli::common::{print_config, print_json, CliResult};
use crate::palette::{random_config, random_config_with};

/// Print a random starting configuration
#[derive(Args, Debug)]
pub struct RandomArgs {
    /// Seed for a reproducible configuration
    #[arg(long, value_name = "N")]
    seed: Option<u64>,

    /// Output as JSON
    #[arg(long)]
    json: bool,
}

impl RandomArgs {
    /// Execute random command
    pub fn execute(&self) -> CliResult<()> {
        let config = match self.seed {
            Some(seed) => random_config_with(&mut StdRng::seed_from_u64(seed)),
            None => random_config(),
        };

        if self.json {
            print_json(&config)?;
        } else {
            println!("Random Configuration");
            println!("====================");
            print_config(&config);
        }

        Ok(())
    }
}
