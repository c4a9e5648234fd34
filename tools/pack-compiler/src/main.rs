mod lint;

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{bail, Context};
use clap::{Parser, Subcommand};
use log::{info, warn};
use rkyv::ser::{serializers::AllocSerializer, Serializer};
use wordplay_protocol::ContentPack;

use crate::lint::{lint, Severity};

#[derive(Parser)]
#[command(author, version, about = "Builds and checks Wordplay content packs")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Compile a JSON content pack into an rkyv archive.
    Compile {
        #[arg(short, long, value_name = "FILE")]
        input: PathBuf,

        #[arg(short, long, value_name = "FILE")]
        output: PathBuf,

        /// Write the archive even if the pack has errors.
        #[arg(long)]
        force: bool,
    },
    /// Report authoring problems in a JSON content pack.
    Check {
        #[arg(value_name = "FILE")]
        input: PathBuf,
    },
    /// Write the built-in pack as JSON, a starting point for new packs.
    Dump {
        #[arg(short, long, value_name = "FILE")]
        output: Option<PathBuf>,
    },
}

fn read_pack(path: &Path) -> anyhow::Result<ContentPack> {
    let json = fs::read_to_string(path).with_context(|| format!("reading {}", path.display()))?;
    let pack = serde_json::from_str(&json).with_context(|| format!("parsing {}", path.display()))?;
    Ok(pack)
}

/// Print findings; returns the number of errors.
fn report(pack: &ContentPack) -> usize {
    let findings = lint(pack);
    let mut errors = 0;
    for finding in &findings {
        match finding.severity {
            Severity::Error => {
                errors += 1;
                println!("error: {}", finding.message);
            }
            Severity::Warning => println!("warning: {}", finding.message),
        }
    }
    errors
}

fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    let cli = Cli::parse();

    match cli.command {
        Command::Compile { input, output, force } => {
            let pack = read_pack(&input)?;
            info!(
                "compiling pack v{}: {} passages, {} racks, {} jumbles, {} questions, {} words",
                pack.version,
                pack.passages.len(),
                pack.racks.len(),
                pack.jumbles.len(),
                pack.questions.len(),
                pack.words.len()
            );

            let errors = report(&pack);
            if errors > 0 {
                if !force {
                    bail!("{} error(s) in {}, not compiling (use --force)", errors, input.display());
                }
                warn!("writing archive despite {} error(s)", errors);
            }

            let mut serializer = AllocSerializer::<256>::default();
            serializer
                .serialize_value(&pack)
                .map_err(|e| anyhow::anyhow!("rkyv serialization failed: {:?}", e))?;
            let bytes = serializer.into_serializer().into_inner();

            fs::write(&output, &bytes).with_context(|| format!("writing {}", output.display()))?;
            info!("wrote {} bytes to {}", bytes.len(), output.display());
        }
        Command::Check { input } => {
            let pack = read_pack(&input)?;
            let errors = report(&pack);
            if errors > 0 {
                bail!("{} error(s) in {}", errors, input.display());
            }
            info!("{} is clean", input.display());
        }
        Command::Dump { output } => {
            let json = serde_json::to_string_pretty(&wordplay_games::builtin_pack())?;
            match output {
                Some(path) => {
                    fs::write(&path, json).with_context(|| format!("writing {}", path.display()))?;
                    info!("built-in pack written to {}", path.display());
                }
                None => println!("{}", json),
            }
        }
    }
    Ok(())
}
