use std::process;

use clap::{ArgAction, Parser, Subcommand};
use log::LevelFilter;
use xliffcodec::XliffVersion;
use xliffcodec_cli::{
    convert::{ConvertOptions, run_convert_command},
    detect::{run_detect_command, unrecognized_message},
    merge::{MergeOptions, MergeStrategy, run_merge_command},
    parse_version,
    view::run_view_command,
};

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Increase log output (-v debug, -vv trace). `RUST_LOG` is honoured too.
    #[arg(short, long, action = ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    commands: Commands,
}

/// Supported subcommands.
#[derive(Subcommand, Debug)]
enum Commands {
    /// Print the XLIFF version of a file.
    Detect {
        /// The input file to inspect
        #[arg(short, long)]
        input: String,
    },

    /// View the translation units of an XLIFF file.
    View {
        /// The input file to view
        #[arg(short, long)]
        input: String,

        /// Display full values without truncation
        #[arg(long)]
        full: bool,

        /// Print the decoded catalog as JSON
        #[arg(long)]
        json: bool,
    },

    /// Convert an XLIFF file to another XLIFF version.
    Convert {
        /// The input file to process
        #[arg(short, long)]
        input: String,

        /// The output file to write the results to
        #[arg(short, long)]
        output: String,

        /// Output XLIFF version
        #[arg(long, default_value = "1.2", value_parser = parse_version)]
        to: XliffVersion,

        /// Source language written to the output header
        #[arg(long)]
        source_lang: Option<String>,

        /// Target language written to the output header
        #[arg(long)]
        target_lang: Option<String>,
    },

    /// Merge several XLIFF files into one.
    Merge {
        /// Input files, the first one is opened and the others imported into it
        #[arg(short, long, required = true)]
        inputs: Vec<String>,

        /// The output file
        #[arg(short, long)]
        output: String,

        /// Output XLIFF version (defaults to the first input's version)
        #[arg(long, value_parser = parse_version)]
        to: Option<XliffVersion>,

        /// What to do with units whose id exists with different content
        #[arg(short, long, value_enum, default_value_t = MergeStrategy::KeepExisting)]
        strategy: MergeStrategy,

        /// Target language written to the output header
        #[arg(long)]
        target_lang: Option<String>,
    },
}

fn init_logging(verbose: u8) {
    let mut builder =
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn"));
    match verbose {
        0 => {}
        1 => {
            builder.filter_level(LevelFilter::Debug);
        }
        _ => {
            builder.filter_level(LevelFilter::Trace);
        }
    }
    builder.format_timestamp(None).init();
}

fn main() {
    let args = Args::parse();
    init_logging(args.verbose);

    let result = match args.commands {
        Commands::Detect { input } => match run_detect_command(&input) {
            Ok(Some(version)) => {
                println!("{}", version);
                Ok(())
            }
            Ok(None) => {
                eprintln!("{}", unrecognized_message(&input));
                process::exit(2);
            }
            Err(e) => Err(e),
        },
        Commands::View { input, full, json } => run_view_command(&input, full, json),
        Commands::Convert {
            input,
            output,
            to,
            source_lang,
            target_lang,
        } => run_convert_command(ConvertOptions {
            input,
            output,
            to,
            source_lang,
            target_lang,
        }),
        Commands::Merge {
            inputs,
            output,
            to,
            strategy,
            target_lang,
        } => run_merge_command(MergeOptions {
            inputs,
            output,
            to,
            strategy,
            target_lang,
        })
        .map(|_| ()),
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        process::exit(1);
    }
}
