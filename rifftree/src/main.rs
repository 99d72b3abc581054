/*!
 The main app runtime for the command line interface.
*/

#![forbid(unsafe_code)]

use std::process::exit;

use crate::app::{
    options::{Options, from_command_line},
    runtime::Config,
};

mod app;

fn main() {
    // Get args from command line
    let args = from_command_line();
    // Create application options
    match Options::from_args(&args) {
        Ok(options) => {
            // Create app state and start
            if let Err(why) = Config::new(options).start() {
                eprintln!("{why}");
                exit(1);
            }
        }
        Err(why) => {
            eprintln!("{why}");
            exit(1);
        }
    }
}
