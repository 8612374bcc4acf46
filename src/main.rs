use archive_fixtures::{config, generate, output, prompt};
use clap::{Parser, Subcommand};
use rand::SeedableRng;
use rand::rngs::StdRng;
use std::io;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "archive-fixtures")]
#[command(about = "Generate randomized publication archives as test fixtures")]
#[command(long_about = "\
Generate randomized publication archives as test fixtures

Each publication gets its own directory under the output root:

  out/
  └── publication-1/
      ├── publication.xml          # identifier, authors, title, subjects
      ├── fulltext.xml             # pages, words and word coordinates
      └── images/
          └── 1.tif                # empty placeholder

Values not given on the command line are asked for interactively.
Re-running into the same output root reuses existing directories.

Run 'archive-fixtures gen-config' to print a documented config file.")]
#[command(version)]
struct Cli {
    /// Number of publications to generate
    #[arg(long)]
    count: Option<u32>,

    /// Existing directory to write publications into
    #[arg(long)]
    output: Option<PathBuf>,

    /// Seed for a reproducible run (default: random)
    #[arg(long)]
    seed: Option<u64>,

    /// TOML file overriding the generator ranges
    #[arg(long)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand)]
enum Command {
    /// Generate publications (the default)
    Generate,
    /// Print a stock config file with all options documented
    GenConfig,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    init_tracing();

    match cli.command.unwrap_or(Command::Generate) {
        Command::GenConfig => {
            print!("{}", config::stock_config_toml());
        }
        Command::Generate => {
            let generator_config = config::load_config(cli.config.as_deref())?;

            let stdin = io::stdin();
            let mut input = stdin.lock();
            let mut stdout = io::stdout();
            let count = match cli.count {
                Some(count) => count,
                None => prompt::prompt_count(&mut input, &mut stdout)?,
            };
            let root = match cli.output {
                Some(root) => root,
                None => prompt::prompt_output_dir(&mut input, &mut stdout)?,
            };

            let mut rng = match cli.seed {
                Some(seed) => StdRng::seed_from_u64(seed),
                None => StdRng::from_entropy(),
            };
            let summary = generate::generate(
                count,
                &root,
                &generator_config,
                &mut rng,
                |event| output::print_event(&event),
            )?;
            output::print_summary(&summary, &root);
        }
    }

    Ok(())
}

/// Log to stderr, `info` for this crate unless `RUST_LOG` says otherwise.
fn init_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("archive_fixtures=info")),
        )
        .with_writer(io::stderr)
        .init();
}
