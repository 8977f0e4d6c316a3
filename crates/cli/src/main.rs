//! CLI tool for turning slide design documents into Marp decks.

use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand};
use slidesmith_core::{
    generate_stylesheet, parse_design_document, DeckAssembler, DefaultDocument, DesignTokens,
    LayoutCatalog, MarkupProducer, Session, TemplateProducer,
};
use slidesmith_llm::{GeminiClient, GenerationSettings, GenerativeProducer, DEFAULT_MODEL};
use std::fs::File;
use std::io::{self, Read, Write};
use std::path::{Path, PathBuf};

/// Render slide design documents into Marp markup.
#[derive(Parser, Debug)]
#[command(name = "slidesmith")]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Command,

    /// Design tokens YAML (default: built-in tokens)
    #[arg(long, global = true)]
    tokens: Option<PathBuf>,

    /// Layout catalog YAML (default: built-in catalog)
    #[arg(long, global = true)]
    catalog: Option<PathBuf>,

    /// Sample design document shown to the generation service (default: built-in sample)
    #[arg(long, global = true)]
    sample: Option<PathBuf>,

    /// Write output to this file instead of stdout
    #[arg(short, long, global = true)]
    output: Option<PathBuf>,

    /// Verbose output
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Render a design document into a Marp deck
    Render {
        /// Design document path, or `-` for stdin
        input: PathBuf,

        /// Ask the generation service for the markup instead of the built-in templates
        #[arg(long)]
        generate: bool,

        /// Marp theme for the built-in templates
        #[arg(long, default_value = "default")]
        theme: String,

        /// Slide size for the built-in templates
        #[arg(long, default_value = "16:9")]
        size: String,

        /// Turn off page numbers for the built-in templates
        #[arg(long)]
        no_paginate: bool,

        #[command(flatten)]
        service: ServiceArgs,
    },

    /// Draft a design document from a manuscript using the generation service
    Design {
        /// Manuscript path, or `-` for stdin
        input: PathBuf,

        #[command(flatten)]
        service: ServiceArgs,

        /// Level of detail, 1 (concise) to 5 (comprehensive)
        #[arg(long, default_value_t = 3, value_parser = clap::value_parser!(u8).range(1..=5))]
        detail: u8,

        /// Visual ratio, 1 (text-heavy) to 5 (visual-first)
        #[arg(long, default_value_t = 3, value_parser = clap::value_parser!(u8).range(1..=5))]
        visual: u8,

        /// Tone, 1 (casual) to 5 (formal)
        #[arg(long, default_value_t = 3, value_parser = clap::value_parser!(u8).range(1..=5))]
        tone: u8,
    },

    /// Print the stylesheet generated from the design tokens
    Stylesheet,

    /// List the layouts in the catalog
    Layouts,

    /// Print the parsed slide records as JSON
    Parse {
        /// Design document path, or `-` for stdin
        input: PathBuf,
    },

    /// Print a built-in default document
    Defaults {
        /// One of: tokens, catalog, sample, manuscript
        name: DefaultDocument,
    },
}

#[derive(Args, Debug)]
struct ServiceArgs {
    /// Gemini API key
    #[arg(long, env = "GEMINI_API_KEY", hide_env_values = true)]
    api_key: Option<String>,

    /// Gemini model id
    #[arg(long, env = "SLIDESMITH_MODEL", default_value = DEFAULT_MODEL)]
    model: String,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging
    let filter = if cli.verbose { "debug" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(filter)).init();

    let output = run(&cli)?;
    write_output(cli.output.as_deref(), &output)?;

    if cli.verbose {
        if let Some(path) = &cli.output {
            eprintln!("Written to: {}", path.display());
        }
    }

    Ok(())
}

/// Execute the selected command and return what it prints.
fn run(cli: &Cli) -> Result<String> {
    match &cli.command {
        Command::Render {
            input,
            generate,
            theme,
            size,
            no_paginate,
            service,
        } => {
            let mut session = load_session(cli)?;
            session.set_design_doc(read_input(input)?);

            let producer: Box<dyn MarkupProducer> = if *generate {
                Box::new(GenerativeProducer::new(gemini_client(service)?))
            } else {
                let assembler = DeckAssembler::new()
                    .with_theme(theme.as_str())
                    .with_size(size.as_str())
                    .with_paginate(!*no_paginate);
                Box::new(TemplateProducer::new().with_assembler(assembler))
            };
            let markup = session
                .render_with(producer.as_ref())
                .context("Failed to render design document")?;

            Ok(with_newline(markup.to_string()))
        }
        Command::Design {
            input,
            service,
            detail,
            visual,
            tone,
        } => {
            let mut session = load_session(cli)?;
            session.set_manuscript(read_input(input)?);
            let settings = GenerationSettings::new()
                .with_detail(*detail)
                .with_visual(*visual)
                .with_tone(*tone);

            if cli.verbose {
                eprint!("{}", settings.instruction());
            }

            let design_doc = gemini_client(service)?
                .generate_design_doc(session.manuscript(), &session.definitions(), &settings)
                .context("Failed to generate design document")?;

            Ok(with_newline(design_doc))
        }
        Command::Stylesheet => {
            let session = load_session(cli)?;
            let tokens = DesignTokens::from_yaml(session.design_tokens())
                .context("Invalid design tokens")?;

            Ok(with_newline(generate_stylesheet(&tokens)))
        }
        Command::Layouts => {
            let session = load_session(cli)?;
            let catalog = LayoutCatalog::from_yaml(session.layout_catalog())
                .context("Invalid layout catalog")?;

            Ok(format_layouts(&catalog))
        }
        Command::Parse { input } => {
            let design_doc = read_input(input)?;
            let slides = parse_design_document(&design_doc);

            if cli.verbose {
                eprintln!("  Found {} slides", slides.len());
            }

            let json = serde_json::to_string_pretty(&slides)
                .context("Failed to serialize slide records")?;
            Ok(with_newline(json))
        }
        Command::Defaults { name } => Ok(name.text().to_string()),
    }
}

/// A session holding `--tokens`/`--catalog`/`--sample`, or the built-in defaults.
fn load_session(cli: &Cli) -> Result<Session> {
    let mut session = Session::new();

    if let Some(path) = &cli.tokens {
        session.set_design_tokens(read_input(path)?);
    }
    if let Some(path) = &cli.catalog {
        session.set_layout_catalog(read_input(path)?);
    }
    if let Some(path) = &cli.sample {
        session.set_sample_design_doc(read_input(path)?);
    }

    Ok(session)
}

fn gemini_client(service: &ServiceArgs) -> Result<GeminiClient> {
    let api_key = service
        .api_key
        .as_deref()
        .ok_or_else(|| anyhow::anyhow!("An API key is required (--api-key or GEMINI_API_KEY)"))?;

    let client = GeminiClient::new(api_key)
        .context("Invalid API key")?
        .with_model(service.model.clone());
    log::debug!("Using model {}", client.model());
    Ok(client)
}

/// One line per layout: id, structure, counts, name.
fn format_layouts(catalog: &LayoutCatalog) -> String {
    catalog
        .layouts()
        .iter()
        .map(|layout| {
            let mut counts = Vec::new();
            if let Some(cols) = layout.cols {
                counts.push(format!("cols={}", cols));
            }
            if let Some(steps) = layout.steps {
                counts.push(format!("steps={}", steps));
            }
            format!(
                "{:<5} {:<24} {:<10} {}\n",
                layout.id,
                layout.structure_tag(),
                counts.join(","),
                layout.name
            )
        })
        .collect()
}

/// Read a file, or stdin when the path is `-`.
fn read_input(path: &Path) -> Result<String> {
    let mut text = String::new();

    if path == Path::new("-") {
        io::stdin()
            .read_to_string(&mut text)
            .context("Failed to read from stdin")?;
    } else {
        File::open(path)
            .with_context(|| format!("Failed to open {}", path.display()))?
            .read_to_string(&mut text)
            .with_context(|| format!("Failed to read {}", path.display()))?;
    }

    Ok(text)
}

fn with_newline(mut text: String) -> String {
    if !text.ends_with('\n') {
        text.push('\n');
    }
    text
}

/// Write output to a file, or stdout when no path is given.
fn write_output(path: Option<&Path>, content: &str) -> Result<()> {
    match path {
        Some(path) => {
            let mut file = File::create(path)
                .with_context(|| format!("Failed to create {}", path.display()))?;
            file.write_all(content.as_bytes())
                .with_context(|| format!("Failed to write to {}", path.display()))?;
        }
        None => {
            io::stdout()
                .write_all(content.as_bytes())
                .context("Failed to write to stdout")?;
        }
    }

    Ok(())
}
