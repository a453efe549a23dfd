use std::path::PathBuf;

use clap::Parser;

/// Overlay each builtin border template onto the given photos.
///
/// For every input photo and every border, writes `<photo-stem>_<border>.png`
/// next to the input file.
#[derive(Parser, Debug)]
#[command(name = "bordure", version)]
struct Cli {
    /// Input photos (PNG or JPEG).
    inputs: Vec<PathBuf>,

    /// List builtin border names and exit.
    #[arg(long)]
    list_borders: bool,

    /// Process photos on parallel workers.
    #[arg(long, default_value_t = false)]
    parallel: bool,

    /// Override worker threads (parallel mode only).
    #[arg(long)]
    threads: Option<usize>,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let catalog = bordure::Catalog::builtin()?;

    if cli.list_borders {
        for template in catalog.iter() {
            println!("{}", template.name());
        }
        return Ok(());
    }

    if cli.inputs.is_empty() {
        anyhow::bail!("must specify input image files");
    }

    let opts = bordure::RunOptions {
        parallel: cli.parallel,
        threads: cli.threads,
    };
    bordure::make_icons(&catalog, &cli.inputs, &opts)?;

    eprintln!("wrote {} icons", cli.inputs.len() * catalog.len());
    Ok(())
}
