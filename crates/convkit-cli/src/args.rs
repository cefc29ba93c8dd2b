#![doc(hidden)]

use clap::builder::BoolishValueParser;
use clap::{Parser, Subcommand};
use convkit_engine::{Category, Operation};

/// Arguments for the convkit CLI
#[derive(Parser, Debug)]
#[command(version, about = "Encode, decode, validate and format developer data formats")]
pub struct Args {
    #[command(subcommand)]
    pub command: Command,

    #[clap(
        short = 'q',
        long,
        global = true,
        conflicts_with = "verbose",
        help = "Don't print any messages except for errors",
        default_value_t = false
    )]
    pub quiet: bool,

    #[clap(
        short = 'v',
        long,
        global = true,
        conflicts_with = "quiet",
        action = clap::ArgAction::Count,
        help = "Output details about dispatch and formatting; specify multiple times for more detail"
    )]
    pub verbose: u8,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// List the available converters, sorted by name
    List {
        #[clap(
            short = 'c',
            long,
            value_name = "CATEGORY",
            help = "Only show one category (encoding, format, crypto, misc)"
        )]
        category: Option<Category>,

        #[clap(
            short = 's',
            long,
            value_name = "TERM",
            help = "Only show converters whose name or description contains TERM"
        )]
        search: Option<String>,

        #[clap(
            long,
            env = "CONVKIT_OUTPUT_JSON",
            value_parser = BoolishValueParser::new(),
            help = "Print converter metadata as JSON",
            default_value_t = false
        )]
        json: bool,
    },

    /// Run one operation of a converter
    Run {
        #[clap(help = "Converter name, case-insensitive (e.g. base64, \"JWT Decoder\")")]
        converter: String,

        #[clap(help = "Operation: encode, decode or validate")]
        operation: Operation,

        #[clap(help = "Input text; read from stdin when omitted or '-'")]
        input: Option<String>,

        #[clap(
            long,
            env = "CONVKIT_OUTPUT_JSON",
            value_parser = BoolishValueParser::new(),
            help = "Print the result as JSON",
            default_value_t = false
        )]
        json: bool,
    },

    /// Generate random (version 4) UUIDs
    Uuid {
        #[clap(
            short = 'n',
            long,
            value_name = "N",
            env = "CONVKIT_UUID_COUNT",
            help = "Number of UUIDs to generate",
            default_value_t = 1
        )]
        count: usize,

        #[clap(
            long,
            value_name = "SEED",
            help = "Use a deterministic generator with this seed (testing only)"
        )]
        seed: Option<u64>,
    },
}
