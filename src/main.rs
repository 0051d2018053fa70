//! dubsar CLI: text-to-cuneiform rendering and sign search.

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use miette::{IntoDiagnostic, Result};

use dubsar::catalog::SignCatalog;
use dubsar::mapping::pack::MappingPack;
use dubsar::mapping::{Confidence, SyllableTable};
use dubsar::phrases;
use dubsar::scribe::{self, RenderOptions};
use dubsar::wedge::{self, Tolerance, WedgeComposition};

#[derive(Parser)]
#[command(name = "dubsar", version, about = "Cuneiform approximation toolkit")]
struct Cli {
    /// Mapping pack (TOML) merged over the bundled syllable table.
    #[arg(long, global = true)]
    pack: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Render text as cuneiform signs.
    Render {
        /// Input text; words split on whitespace, lines on newlines.
        text: String,

        /// Insert spaces between signs within a word.
        #[arg(long)]
        spacing: bool,

        /// Placeholder for unmapped syllables.
        #[arg(long, default_value = "?")]
        unknown: String,

        /// Fold line breaks into a single line.
        #[arg(long)]
        fold_lines: bool,

        /// Emit the per-word breakdown as JSON instead of plain signs.
        #[arg(long)]
        json: bool,
    },

    /// Show syllable mapping statistics for a text.
    Stats {
        text: String,
    },

    /// Search the catalog by wedge composition (h, v, o, w stroke counts).
    Search {
        horizontal: i64,
        vertical: i64,
        oblique: i64,
        winkelhaken: i64,

        /// Per-axis stroke-count slack; 0 demands an exact match.
        #[arg(long, default_value = "1")]
        tolerance: i64,

        /// Maximum number of results to print.
        #[arg(long, default_value = "10")]
        limit: usize,
    },

    /// Look up catalog signs by name, reading, meaning, or character.
    Sign {
        query: String,
    },

    /// List known syllables and their signs.
    Syllables {
        /// Only this confidence tier (high, medium, low).
        #[arg(long)]
        confidence: Option<Confidence>,
    },

    /// Show an attested ancient phrase.
    Phrase {
        /// Phrase id; picks one at random when omitted.
        id: Option<String>,
    },
}

fn main() -> Result<()> {
    miette::set_hook(Box::new(|_| {
        Box::new(
            miette::MietteHandlerOpts::new()
                .terminal_links(true)
                .unicode(true)
                .build(),
        )
    }))
    .ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let table = match &cli.pack {
        Some(path) => MappingPack::load(path)?.apply(SyllableTable::bundled())?,
        None => SyllableTable::bundled().clone(),
    };

    match cli.command {
        Commands::Render {
            text,
            spacing,
            unknown,
            fold_lines,
            json,
        } => {
            let options = RenderOptions {
                add_spacing: spacing,
                unknown_char: unknown,
                preserve_line_breaks: !fold_lines,
                ..Default::default()
            };
            if json {
                let words = scribe::breakdown(&text, &table, &options);
                println!(
                    "{}",
                    serde_json::to_string_pretty(&words).into_diagnostic()?
                );
            } else {
                println!("{}", scribe::to_script(&text, &table, &options));
            }
        }

        Commands::Stats { text } => {
            let stats = scribe::stats(&text, &table, &RenderOptions::default());
            println!("syllables:    {}", stats.total_syllables);
            println!("mapped:       {}", stats.mapped_syllables);
            println!("approximated: {}", stats.approximated_syllables);
            println!("unmapped:     {}", stats.unmapped_syllables);
            println!("mapping rate:    {:.1}%", stats.mapping_rate * 100.0);
            println!("confidence rate: {:.1}%", stats.confidence_rate * 100.0);
        }

        Commands::Search {
            horizontal,
            vertical,
            oblique,
            winkelhaken,
            tolerance,
            limit,
        } => {
            let target = WedgeComposition::checked(horizontal, vertical, oblique, winkelhaken)?;
            let tolerance = Tolerance::checked_uniform(tolerance)?;
            let results = wedge::search(SignCatalog::bundled(), &target, &tolerance);
            if results.is_empty() {
                println!("no matching signs");
            }
            for result in results.iter().take(limit) {
                println!(
                    "{:.2}  {}  {} ({})",
                    result.match_score, result.sign.character, result.sign.name, result.sign.codepoint,
                );
            }
        }

        Commands::Sign { query } => {
            let hits = SignCatalog::bundled().search(&query);
            if hits.is_empty() {
                println!("no signs match {query:?}");
            }
            for sign in hits {
                let readings: Vec<&str> =
                    sign.readings.iter().map(|r| r.value.as_str()).collect();
                println!("{}  {} ({})", sign.character, sign.name, sign.codepoint);
                println!("  category: {}", sign.category);
                println!("  readings: {}", readings.join(", "));
                println!("  meanings: {}", sign.meanings.join(", "));
                if let Some(c) = &sign.composition {
                    println!(
                        "  wedges: {}h {}v {}o {}w",
                        c.horizontal, c.vertical, c.oblique, c.winkelhaken,
                    );
                }
            }
        }

        Commands::Syllables { confidence } => {
            for mapping in table.mappings() {
                if confidence.is_some_and(|c| c != mapping.confidence) {
                    continue;
                }
                println!(
                    "{:4} → {}  ({})",
                    mapping.syllable, mapping.primary_sign, mapping.confidence,
                );
            }
        }

        Commands::Phrase { id } => {
            let phrase = match id {
                Some(id) => phrases::by_id(&id)
                    .ok_or_else(|| miette::miette!("no phrase with id {id:?}"))?,
                None => phrases::random(),
            };
            println!("{}", phrase.cuneiform);
            println!("  {}", phrase.transliteration);
            println!("  \"{}\"", phrase.translation);
            println!("  {}", phrase.context);
        }
    }

    Ok(())
}
