use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use playlist_manifest::{
    Catalog, MissingSourcePolicy, Playlist, PlaylistStore, StdFileSystem, StoreConfig,
};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "playlist-manifest")]
#[command(about = "Inspect and normalize JSON playlist manifests", long_about = None)]
struct Args {
    /// Verbose logging
    #[arg(short = 'v', long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Show a playlist with its resolved songs
    Show {
        /// Playlist manifest
        playlist: String,

        /// Catalog file (JSON array of songs)
        #[arg(short = 'c', long)]
        catalog: String,
    },

    /// Print a playlist's cover image field
    Cover {
        /// Playlist manifest
        playlist: String,
    },

    /// Load a playlist and save it back as a .json manifest
    Normalize {
        /// Playlist manifest
        playlist: String,

        /// Catalog file (JSON array of songs)
        #[arg(short = 'c', long)]
        catalog: String,

        /// Replace the cover image (default: keep the stored one)
        #[arg(long)]
        image: Option<String>,

        /// Fail if the playlist file is missing when renaming
        #[arg(long)]
        require_existing: bool,

        /// Write through a temp file and rename it into place
        #[arg(long)]
        atomic: bool,

        /// Pretty-print the written manifest
        #[arg(long)]
        pretty: bool,
    },

    /// List the playlists in a directory
    List {
        /// Directory holding *.json manifests
        dir: String,

        /// Catalog file (JSON array of songs)
        #[arg(short = 'c', long)]
        catalog: String,
    },
}

/// Expand ~ in a user-supplied path
fn expand(path: &str) -> PathBuf {
    PathBuf::from(shellexpand::tilde(path).as_ref())
}

fn load_catalog(path: &str) -> Result<Catalog> {
    Catalog::from_json_file(&expand(path))
}

fn print_playlist(playlist: &Playlist) {
    println!("{} [{}]", playlist.title, playlist.hash());
    println!("  path:        {:?}", playlist.path());
    println!("  author:      {}", playlist.author);
    println!("  description: {}", playlist.description);
    println!("  songs:       {}", playlist.len());
    for (idx, song) in playlist.songs.iter().enumerate() {
        println!("  {:>3}. {} ({})", idx + 1, song.song_name, song.content_hash);
    }
}

fn main() -> Result<()> {
    let args = Args::parse();

    // Initialize logging
    let log_level = if args.verbose { "debug" } else { "info" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(log_level)).init();

    match args.command {
        Command::Show { playlist, catalog } => {
            let catalog = load_catalog(&catalog)?;
            let path = expand(&playlist);
            let playlist = PlaylistStore::new(StdFileSystem)
                .parse(&path, &catalog)
                .with_context(|| format!("Failed to load playlist {:?}", path))?;
            print_playlist(&playlist);
        }

        Command::Cover { playlist } => {
            let path = expand(&playlist);
            let image = PlaylistStore::new(StdFileSystem)
                .load_cover(&path)
                .with_context(|| format!("Failed to read cover of {:?}", path))?;
            println!("{}", image.unwrap_or_default());
        }

        Command::Normalize {
            playlist,
            catalog,
            image,
            require_existing,
            atomic,
            pretty,
        } => {
            let catalog = load_catalog(&catalog)?;
            let path = expand(&playlist);

            let missing_source = if require_existing {
                MissingSourcePolicy::Require
            } else {
                MissingSourcePolicy::Skip
            };
            let config = StoreConfig::new()
                .with_missing_source(missing_source)
                .with_atomic_write(atomic)
                .with_pretty(pretty);
            let store = PlaylistStore::with_config(StdFileSystem, config);

            let mut loaded = store
                .parse(&path, &catalog)
                .with_context(|| format!("Failed to load playlist {:?}", path))?;
            let image = match image {
                Some(image) => image,
                None => store
                    .load_cover(&path)
                    .with_context(|| format!("Failed to read cover of {:?}", path))?
                    .unwrap_or_default(),
            };

            store
                .save(&mut loaded, &image)
                .with_context(|| format!("Failed to save playlist {:?}", path))?;

            log::info!("Playlist saved to {:?} (hash {})", loaded.path(), loaded.hash());
        }

        Command::List { dir, catalog } => {
            let catalog = load_catalog(&catalog)?;
            let dir = expand(&dir);
            let playlists = PlaylistStore::new(StdFileSystem).load_dir(&dir, &catalog)?;

            for playlist in &playlists {
                println!(
                    "[{}] {} - {} songs ({:?})",
                    playlist.hash(),
                    playlist.title,
                    playlist.len(),
                    playlist.path()
                );
            }
        }
    }

    Ok(())
}
