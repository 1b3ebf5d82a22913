use clap::{Parser, Subcommand};
use figc_client::{extract_file_key, FigmaClient, FigmaFile};
use std::path::{Path, PathBuf};

#[derive(Parser)]
#[command(name = "figc")]
#[command(about = "figc — Figma design to HTML/CSS converter")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Fetch a Figma file and convert it to HTML + CSS
    Build {
        /// Figma file key or full file URL
        file: String,

        /// Output directory for index.html and styles.css
        #[arg(short, long, default_value = "output")]
        output: PathBuf,

        /// Figma API token (falls back to FIGMA_API_TOKEN)
        #[arg(short, long)]
        token: Option<String>,

        /// Page index to convert
        #[arg(long, default_value_t = 0)]
        page: usize,

        /// Save the raw API response alongside the output
        #[arg(long)]
        save_json: bool,
    },

    /// Convert a saved Figma API response without network access
    Convert {
        /// Path to a saved API response (JSON)
        path: PathBuf,

        /// Output directory for index.html and styles.css
        #[arg(short, long, default_value = "output")]
        output: PathBuf,

        /// Page index to convert
        #[arg(long, default_value_t = 0)]
        page: usize,
    },
}

fn main() {
    env_logger::init();
    let cli = Cli::parse();

    match cli.command {
        Command::Build { file, output, token, page, save_json } => {
            cmd_build(&file, &output, token, page, save_json)
        }
        Command::Convert { path, output, page } => cmd_convert(&path, &output, page),
    }
}

fn cmd_build(file: &str, output: &Path, token: Option<String>, page: usize, save_json: bool) {
    let token = token
        .or_else(|| std::env::var("FIGMA_API_TOKEN").ok())
        .unwrap_or_else(|| {
            eprintln!("Error: Figma API token is required.");
            eprintln!("Provide it via --token or the FIGMA_API_TOKEN environment variable.");
            std::process::exit(1);
        });

    let key = extract_file_key(file);
    let client = FigmaClient::new(token);
    let raw = match client.get_file_raw(key) {
        Ok(raw) => raw,
        Err(e) => {
            eprintln!("Fetch error: {e}");
            std::process::exit(1);
        }
    };

    if save_json {
        write_file(&output.join("figma.json"), &raw);
    }

    let document = match FigmaFile::from_json(&raw) {
        Ok(document) => document,
        Err(e) => {
            eprintln!("Decode error: {e}");
            std::process::exit(1);
        }
    };

    convert_and_write(&document, page, output);
}

fn cmd_convert(path: &Path, output: &Path, page: usize) {
    let raw = match std::fs::read_to_string(path) {
        Ok(raw) => raw,
        Err(e) => {
            eprintln!("Error reading {}: {e}", path.display());
            std::process::exit(1);
        }
    };

    let document = match FigmaFile::from_json(&raw) {
        Ok(document) => document,
        Err(e) => {
            eprintln!("Decode error: {e}");
            std::process::exit(1);
        }
    };

    convert_and_write(&document, page, output);
}

fn convert_and_write(document: &FigmaFile, page: usize, output: &Path) {
    let root = match document.page(page) {
        Ok(root) => root,
        Err(e) => {
            eprintln!("Page error: {e}");
            std::process::exit(1);
        }
    };

    let converted = match figc_convert::convert(root) {
        Ok(converted) => converted,
        Err(e) => {
            eprintln!("Conversion error: {e}");
            std::process::exit(1);
        }
    };

    write_file(&output.join("index.html"), &converted.html);
    write_file(&output.join("styles.css"), &converted.css);

    eprintln!("Built: {}", output.join("index.html").display());
}

fn write_file(path: &Path, contents: &str) {
    if let Some(dir) = path.parent() {
        if let Err(e) = std::fs::create_dir_all(dir) {
            eprintln!("Error creating {}: {e}", dir.display());
            std::process::exit(1);
        }
    }
    if let Err(e) = std::fs::write(path, contents) {
        eprintln!("Error writing {}: {e}", path.display());
        std::process::exit(1);
    }
}
