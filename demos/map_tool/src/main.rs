//! Map Tool Example
//!
//! Creates blank estate maps, checks existing map files and converts them
//! between JSON and RON.

use clap::{Parser, Subcommand};
use estate_map::{
    duplicate_ids, load_directory, load_map, save_map, Codec, CodecConfig, MapInfo, MapInfoRoot,
};
use std::path::PathBuf;

/// Estate map file tool
#[derive(Parser)]
#[command(version, about = "Create, check and convert estate map files")]
struct Cli {
    /// Write compact output instead of pretty-printed
    #[arg(long, global = true)]
    compact: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Write a blank map stamped with the current time
    New {
        /// Output file (.json or .ron)
        path: PathBuf,
        #[arg(long, default_value = "")]
        user: String,
        #[arg(long, default_value = "")]
        description: String,
        #[arg(long, default_value = "1.0")]
        version: String,
    },
    /// Load a map file, or every map in a directory, and report problems
    Check { path: PathBuf },
    /// Re-encode a map; the format follows each file's extension
    Convert { input: PathBuf, output: PathBuf },
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let cli = Cli::parse();
    let config = CodecConfig::default().with_pretty(!cli.compact);

    if let Err(e) = run(cli.command, config) {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}

fn run(command: Command, config: CodecConfig) -> estate_map::Result<()> {
    match command {
        Command::New {
            path,
            user,
            description,
            version,
        } => {
            let root = MapInfoRoot::new(MapInfo::new(user, description, version));
            save_map(&path, &root, &Codec::new(config))?;
            println!("Blank map written to {}", path.display());
        }
        Command::Check { path } => {
            // Load leniently so every duplicate can be listed, not just the first.
            let codec = Codec::new(config.with_validate_on_load(false));
            let maps = if path.is_dir() {
                load_directory(&path, &codec)?
            } else {
                vec![(path.clone(), load_map(&path, &codec)?)]
            };

            let mut failed = false;
            for (file, root) in &maps {
                let info = &root.mapinfo;
                println!(
                    "{}: user {:?}, version {:?}, {} buildings, {} terrain, dated {}",
                    file.display(),
                    info.user,
                    info.version,
                    info.map_data.buildings.len(),
                    info.map_data.terrain.len(),
                    info.date
                );
                for dup in duplicate_ids(&info.map_data) {
                    println!("  {dup}");
                    failed = true;
                }
            }

            if failed {
                log::warn!("duplicate ids found");
                std::process::exit(2);
            }
        }
        Command::Convert { input, output } => {
            let codec = Codec::new(config);
            let root = load_map(&input, &codec)?;
            save_map(&output, &root, &codec)?;
            println!("{} -> {}", input.display(), output.display());
        }
    }
    Ok(())
}
