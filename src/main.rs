//! prezi - IIIF Presentation document generator

use std::fs;
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use clap::{Parser, Subcommand};
use serde::Deserialize;
use serde::de::DeserializeOwned;
use tracing_subscriber::EnvFilter;

use prezi::{
    AnnotationRecord, Error, ManifestSet, ManifestSummary, Page, PhysicalMap, PhysicalPage,
    Record, Result, ServerConfig, ServerUrls, Size, ThumbnailMap, make_annotation_list,
    make_info_data, make_manifest, make_manifest_collection,
};

#[derive(Parser)]
#[command(name = "prezi")]
#[command(version, about = "IIIF Presentation document generator", long_about = None)]
#[command(after_help = "EXAMPLES:
    prezi manifest record.json pages.json       Build a manifest
    prezi collection listing.json --page 1      Build collection page p1
    prezi info img1 800x1200 200x300            Build an image info.json")]
struct Cli {
    #[command(subcommand)]
    command: Command,

    /// Server settings (JSON)
    #[arg(short, long, global = true, value_name = "FILE")]
    config: Option<PathBuf>,

    /// URL scheme, overrides the config file
    #[arg(long, global = true)]
    scheme: Option<String>,

    /// Server name (host[:port]), overrides the config file
    #[arg(long, global = true)]
    server_name: Option<String>,

    /// Write the document to FILE instead of stdout
    #[arg(short, long, global = true, value_name = "FILE")]
    output: Option<PathBuf>,

    /// Log debug output
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Only log errors
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    quiet: bool,
}

#[derive(Subcommand)]
enum Command {
    /// Build a manifest from a record and its page structure
    Manifest {
        #[arg(value_name = "RECORD")]
        record: PathBuf,
        #[arg(value_name = "PAGES")]
        pages: PathBuf,
        /// Manifest identifier (defaults to the record's file stem)
        #[arg(long)]
        id: Option<String>,
    },
    /// Build one page of a collection
    Collection {
        #[arg(value_name = "LISTING")]
        listing: PathBuf,
        /// Page number; omit for the landing page
        #[arg(short, long)]
        page: Option<usize>,
    },
    /// Build one page of annotation search results
    Annotations {
        #[arg(value_name = "LISTING")]
        listing: PathBuf,
        /// Canonical URL of the request
        #[arg(long)]
        url: String,
        /// Request parameter as KEY=VALUE (repeatable)
        #[arg(long = "arg", value_name = "KEY=VALUE", value_parser = parse_arg)]
        args: Vec<(String, String)>,
    },
    /// Build an image info.json
    Info {
        image_id: String,
        /// Rendition sizes as WIDTHxHEIGHT
        #[arg(required = true, value_name = "SIZE")]
        sizes: Vec<String>,
    },
}

/// Page structure input of `prezi manifest`.
#[derive(Deserialize)]
struct PagesInput {
    pages: Vec<PhysicalPage>,
    #[serde(default)]
    thumbnails: ThumbnailMap,
}

/// Listing input of `prezi collection`.
#[derive(Deserialize)]
struct CollectionInput {
    id: String,
    label: String,
    #[serde(default)]
    manifests: Vec<ManifestSummary>,
    #[serde(default)]
    subcollections: Vec<ManifestSet>,
    per_page: Option<usize>,
}

/// Listing input of `prezi annotations`.
#[derive(Deserialize)]
struct AnnotationInput {
    #[serde(default)]
    annotations: Vec<AnnotationRecord>,
    per_page: Option<usize>,
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_logging(&cli);

    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("error: {e}");
            ExitCode::FAILURE
        }
    }
}

fn init_logging(cli: &Cli) {
    let default_level = if cli.verbose {
        "debug"
    } else if cli.quiet {
        "error"
    } else {
        "warn"
    };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn run(cli: &Cli) -> Result<()> {
    let config = load_config(cli)?;
    let urls = ServerUrls::new(&config);

    let json = match &cli.command {
        Command::Manifest { record, pages, id } => {
            let ident = match id {
                Some(id) => id.clone(),
                None => file_stem(record),
            };
            let record: Record = read_json(record)?;
            record.validate(&ident)?;
            let pages: PagesInput = read_json(pages)?;
            let physical: PhysicalMap = pages.pages.into();
            let manifest = make_manifest(&ident, &record, &physical, &pages.thumbnails, &urls);
            serde_json::to_string_pretty(&manifest)?
        }
        Command::Collection { listing, page } => {
            if *page == Some(0) {
                return Err(Error::InvalidPage(0));
            }
            let input: CollectionInput = read_json(listing)?;
            let per_page = input.per_page.unwrap_or(config.items_per_page);
            let pagination = Page::from_slice(&input.manifests, page.unwrap_or(1), per_page);
            let collection = make_manifest_collection(
                &pagination,
                Some(&input.subcollections[..]),
                &input.label,
                &input.id,
                *page,
                &urls,
                &config,
            );
            serde_json::to_string_pretty(&collection)?
        }
        Command::Annotations { listing, url, args } => {
            let input: AnnotationInput = read_json(listing)?;
            let page = match args.iter().find(|(k, _)| k == "p") {
                Some((_, p)) => p
                    .parse()
                    .map_err(|_| Error::InvalidArgument(format!("p={p}")))?,
                None => 1,
            };
            if page == 0 {
                return Err(Error::InvalidPage(0));
            }
            let per_page = input.per_page.unwrap_or(config.items_per_page);
            let pagination = Page::from_slice(&input.annotations, page, per_page);
            let list = make_annotation_list(&pagination, url, args, &urls);
            serde_json::to_string_pretty(&list)?
        }
        Command::Info { image_id, sizes } => {
            let sizes = sizes
                .iter()
                .map(|s| parse_size(s))
                .collect::<Result<Vec<_>>>()?;
            serde_json::to_string_pretty(&make_info_data(image_id, &sizes, &urls))?
        }
    };

    write_output(cli.output.as_deref(), &json)
}

fn load_config(cli: &Cli) -> Result<ServerConfig> {
    let mut config = match &cli.config {
        Some(path) => ServerConfig::from_json_file(path)?,
        None => ServerConfig::default(),
    };
    if let Some(scheme) = &cli.scheme {
        config.scheme = scheme.clone();
    }
    if let Some(server_name) = &cli.server_name {
        config.server_name = server_name.clone();
    }
    Ok(config)
}

fn read_json<T: DeserializeOwned>(path: &Path) -> Result<T> {
    let data = fs::read(path)?;
    Ok(serde_json::from_slice(&data)?)
}

fn write_output(path: Option<&Path>, json: &str) -> Result<()> {
    match path {
        Some(path) => fs::write(path, format!("{json}\n"))?,
        None => println!("{json}"),
    }
    Ok(())
}

fn file_stem(path: &Path) -> String {
    path.file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_default()
}

fn parse_size(s: &str) -> Result<Size> {
    let parsed = s
        .split_once(['x', 'X'])
        .and_then(|(w, h)| Some(Size::new(w.trim().parse().ok()?, h.trim().parse().ok()?)));
    parsed.ok_or_else(|| Error::InvalidSize(s.to_string()))
}

fn parse_arg(s: &str) -> std::result::Result<(String, String), String> {
    s.split_once('=')
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .ok_or_else(|| format!("expected KEY=VALUE, got '{s}'"))
}
