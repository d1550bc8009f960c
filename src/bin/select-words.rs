use std::env::args_os;
use std::ffi::OsString;
use std::fs::File;
use std::io::{self, BufReader, BufWriter};

use clap::{value_t, App, AppSettings, Arg, ArgMatches};
use embedding_select::prelude::*;
use stdinout::{Input, OrExit, Output};
use tracing::{debug, info};
use tracing_subscriber::{fmt, EnvFilter};

static DEFAULT_CLAP_SETTINGS: &[AppSettings] = &[
    AppSettings::AllowNegativeNumbers,
    AppSettings::DontCollapseArgsInUsage,
    AppSettings::UnifiedHelpMessage,
];

static ABOUT: &str = "Select the embeddings of the words in a word list. The first \
                      line of the embedding file is treated as a header and skipped.";

struct Config {
    embeddings_filename: String,
    word_list_filename: String,
    output_filename: String,
    lossy: bool,
    option: i64,
}

// Option constants
static LOSSY: &str = "lossy";
static OPTION: &str = "option";

// Argument constants
static EMB_FILE: &str = "EMB_FILE";
static WORD_LIST_FILE: &str = "WORD_LIST_FILE";
static OUT_FILE: &str = "OUT_FILE";

fn build_app(about: &'static str) -> App<'static, 'static> {
    App::new("select-words")
        .settings(DEFAULT_CLAP_SETTINGS)
        .about(about)
        .arg(
            Arg::with_name(EMB_FILE)
                .help("Embedding file, '-' reads from standard input")
                .index(1)
                .required(true),
        )
        .arg(
            Arg::with_name(WORD_LIST_FILE)
                .help("List of words, one per line")
                .index(2)
                .required(true),
        )
        .arg(
            Arg::with_name(OUT_FILE)
                .help("Output file, '-' writes to standard output")
                .index(3)
                .required(true),
        )
        .arg(
            Arg::with_name(OPTION)
                .short("o")
                .long("option")
                .value_name("N")
                .help("Option (default: 0)")
                .takes_value(true)
                .default_value("0"),
        )
        .arg(
            Arg::with_name(LOSSY)
                .long("lossy")
                .help("Replace invalid UTF-8 instead of failing"),
        )
}

fn parse_args<I, T>(about: &'static str, args: I) -> ArgMatches<'static>
where
    I: IntoIterator<Item = T>,
    T: Into<OsString> + Clone,
{
    build_app(about).get_matches_from(args)
}

fn config_from_matches(matches: &ArgMatches) -> Config {
    let embeddings_filename = matches.value_of(EMB_FILE).unwrap().to_owned();
    let word_list_filename = matches.value_of(WORD_LIST_FILE).unwrap().to_owned();
    let output_filename = matches.value_of(OUT_FILE).unwrap().to_owned();
    let option = value_t!(matches, OPTION, i64).unwrap_or_else(|e| e.exit());

    Config {
        embeddings_filename,
        word_list_filename,
        output_filename,
        lossy: matches.is_present(LOSSY),
        option,
    }
}

fn main() {
    fmt()
        .with_writer(io::stderr)
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_target(false)
        .init();

    let matches = parse_args(ABOUT, args_os());
    let config = config_from_matches(&matches);
    debug!("option = {}", config.option);

    info!(
        "Selecting embeddings from {} into {}",
        config.embeddings_filename, config.output_filename
    );

    let vocab = read_vocab(&config.word_list_filename, config.lossy);
    info!(
        "Read {} words from {}",
        vocab.len(),
        config.word_list_filename
    );

    let input = Input::from(stdio_filename(&config.embeddings_filename));
    let mut reader = input
        .buf_read()
        .or_exit("Cannot open embedding file for reading", 1);

    if config.output_filename != "-" {
        ensure_parent_dir(&config.output_filename).or_exit("Cannot create output directory", 1);
    }
    let output = Output::from(stdio_filename(&config.output_filename));
    let mut writer = BufWriter::new(output.write().or_exit("Cannot open output for writing", 1));

    let stats = if config.lossy {
        vocab.select_embeddings_lossy(&mut reader, &mut writer)
    } else {
        vocab.select_embeddings(&mut reader, &mut writer)
    }
    .or_exit("Cannot select embeddings", 1);

    info!(
        "Done! Num lines = {}, selected = {}",
        stats.n_lines, stats.n_selected
    );
}

fn read_vocab(filename: &str, lossy: bool) -> Vocabulary {
    let f = File::open(filename).or_exit(format!("Cannot open word list {}", filename), 1);
    let mut reader = BufReader::new(f);

    if lossy {
        Vocabulary::read_word_list_lossy(&mut reader)
    } else {
        Vocabulary::read_word_list(&mut reader)
    }
    .or_exit("Cannot read word list", 1)
}

/// `-` denotes standard input/output.
fn stdio_filename(filename: &str) -> Option<String> {
    if filename == "-" {
        None
    } else {
        Some(filename.to_owned())
    }
}
