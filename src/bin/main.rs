//! Map Rebuilder CLI
//!
//! Rebuild racing-game maps from JSON block placements.

use clap::{Parser, Subcommand};
use map_rebuilder::{load_map, ManifestHost, MapBuilder, MeshIndex, TextureIndex};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "map-rebuilder")]
#[command(author, version, about = "Rebuild racing-game maps from JSON block placements", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Show information about a map file
    Info {
        /// Path to the map JSON file
        #[arg(short, long)]
        map: PathBuf,
    },

    /// Scan asset folders and report what was found
    Scan {
        /// Folder containing block mesh (.obj) files
        #[arg(short = 'M', long)]
        meshes: PathBuf,

        /// Folder containing texture (.dds/.png) files
        #[arg(short, long)]
        textures: Option<PathBuf>,
    },

    /// Rebuild a map into a placement manifest
    Build {
        /// Path to the map JSON file
        #[arg(short, long)]
        map: PathBuf,

        /// Folder containing block mesh (.obj) files
        #[arg(short = 'M', long)]
        meshes: PathBuf,

        /// Folder containing texture (.dds/.png) files
        #[arg(short, long)]
        textures: Option<PathBuf>,

        /// Output manifest file path
        #[arg(short, long)]
        output: PathBuf,
    },
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();
    let cli = Cli::parse();

    match cli.command {
        Commands::Info { map } => {
            let doc = load_map(&map)?;
            println!("Map: {:?}", map);
            println!("  Grid blocks:      {}", doc.grid_blocks.len());
            println!("  Free blocks:      {}", doc.free_blocks.len());
            println!("  Anchored objects: {}", doc.anchored_objects.len());
            println!("  Total:            {}", doc.block_count());
        }
        Commands::Scan { meshes, textures } => {
            let mesh_index = MeshIndex::scan(&meshes)?;
            println!("Found {} block meshes in {:?}", mesh_index.len(), meshes);
            if let Some(textures) = textures {
                let texture_index = TextureIndex::scan(&textures)?;
                println!(
                    "Found {} texture groups in {:?}",
                    texture_index.len(),
                    textures
                );
            }
        }
        Commands::Build {
            map,
            meshes,
            textures,
            output,
        } => {
            println!("Loading map from {:?}...", map);
            let doc = load_map(&map)?;
            println!("  {} block records", doc.block_count());

            println!("Scanning meshes in {:?}...", meshes);
            let mut builder = MapBuilder::new(MeshIndex::scan(&meshes)?);
            println!("  {} block meshes", builder.mesh_index().len());

            if let Some(textures) = &textures {
                builder = builder.with_textures(TextureIndex::scan(textures)?);
            }

            let mut host = ManifestHost::new();
            let report = builder.build(&doc, &mut host)?;
            host.write(&output)?;

            println!("Placed {} blocks:", report.placed());
            println!("  Grid:             {}", report.grid_placed);
            println!("  Free:             {}", report.free_placed);
            println!("  Unresolved:       {}", report.unresolved);
            println!("  Invalid records:  {}", report.invalid);
            println!("  Anchored skipped: {}", report.anchored_skipped);
            println!("Wrote manifest to {:?}", output);
        }
    }

    Ok(())
}
