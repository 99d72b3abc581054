/*!
 Represents CLI options and validation logic.
*/

use std::path::PathBuf;

use clap::{Arg, ArgAction, ArgMatches, Command, crate_version};

use riff_parser::fourcc::FourCC;

use crate::app::error::RuntimeError;

pub const OPTION_FILE: &str = "file";
pub const OPTION_SHOW_SIZES: &str = "show-sizes";
pub const OPTION_FLAT: &str = "flat";
pub const OPTION_FIRST_CHUNK_ID: &str = "first-chunk-id";
pub const OPTION_LITTLE_ENDIAN: &str = "little-endian";
pub const OPTION_BIG_ENDIAN: &str = "big-endian";

const ABOUT: &str = concat!(
    "Prints the tree of chunks inside a RIFF container file.\n",
    "Works with WAVE, AVI, ANI, WEBP, and any other RIFF-framed format."
);

/// Represents options set by the user
#[derive(Debug, PartialEq, Eq)]
pub struct Options {
    /// Path to the file whose chunk tree we want to render
    pub input: PathBuf,
    /// If true, print each chunk's declared size next to its tag
    pub show_sizes: bool,
    /// If true, read the file as a bare sequence of chunks instead of a single enclosing form
    pub flat: bool,
    /// If present, the tag the file's first chunk must carry
    pub expected_first_tag: Option<FourCC>,
}

impl Options {
    /// Build an [`Options`] instance from the command line arguments
    pub fn from_args(args: &ArgMatches) -> Result<Self, RuntimeError> {
        let user_path = args.get_one::<String>(OPTION_FILE);
        let show_sizes = args.get_flag(OPTION_SHOW_SIZES);
        let flat = args.get_flag(OPTION_FLAT);
        let first_chunk_id = args.get_one::<String>(OPTION_FIRST_CHUNK_ID);
        let big_endian = args.get_flag(OPTION_BIG_ENDIAN);

        // Validation
        if big_endian {
            return Err(RuntimeError::InvalidOptions(String::from(
                "Big-endian files are not supported!",
            )));
        }

        let input = match user_path {
            Some(path) => PathBuf::from(path),
            None => {
                return Err(RuntimeError::InvalidOptions(String::from(
                    "You must provide a file argument.",
                )));
            }
        };

        let expected_first_tag = match first_chunk_id {
            Some(id) => match id.as_bytes().try_into() {
                Ok(tag) => Some(FourCC(tag)),
                Err(_) => {
                    return Err(RuntimeError::InvalidOptions(format!(
                        "Argument after '--{OPTION_FIRST_CHUNK_ID}' must be exactly 4 characters long."
                    )));
                }
            },
            None => None,
        };

        Ok(Options {
            input,
            show_sizes,
            flat,
            expected_first_tag,
        })
    }
}

/// Build the command line argument parser
fn get_command() -> Command {
    Command::new("RIFF Tree")
        .version(crate_version!())
        .about(ABOUT)
        .arg_required_else_help(true)
        .arg(
            Arg::new(OPTION_FILE)
                .value_name("FILE")
                .help("Path to the RIFF file to render")
                .display_order(0)
                .index(1)
                .required(true),
        )
        .arg(
            Arg::new(OPTION_SHOW_SIZES)
                .short('s')
                .long(OPTION_SHOW_SIZES)
                .help("Print each chunk's declared size next to its tag")
                .action(ArgAction::SetTrue)
                .display_order(1),
        )
        .arg(
            Arg::new(OPTION_FLAT)
                .long(OPTION_FLAT)
                .help("Read the file as a bare sequence of chunks instead of a single enclosing form")
                .action(ArgAction::SetTrue)
                .display_order(2),
        )
        .arg(
            Arg::new(OPTION_FIRST_CHUNK_ID)
                .long(OPTION_FIRST_CHUNK_ID)
                .help("Require the file's first chunk to carry this 4-character tag, for example RIFF")
                .action(ArgAction::Set)
                .value_name("CKID")
                .display_order(3),
        )
        .arg(
            Arg::new(OPTION_LITTLE_ENDIAN)
                .long(OPTION_LITTLE_ENDIAN)
                .help("Parse little-endian chunk data (the default)")
                .action(ArgAction::SetTrue)
                .display_order(4),
        )
        .arg(
            Arg::new(OPTION_BIG_ENDIAN)
                .long(OPTION_BIG_ENDIAN)
                .help("Parse big-endian (RIFX) chunk data, which is not supported")
                .action(ArgAction::SetTrue)
                .display_order(5),
        )
}

/// Parse arguments from the command line
pub fn from_command_line() -> ArgMatches {
    get_command().get_matches()
}
