// Copyright 2018 Chris Pearce
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//   http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

use std::env;
use std::io;
use std::io::Write;
use std::process;

use argparse::{ArgumentParser, Store};
use error::{parse_threshold, InputError};

pub const DEFAULT_OUTPUT_PATH: &str = "example-run.txt";

pub struct Arguments {
    pub input_file_path: String,
    pub output_report_path: String,
    pub min_support: f64,
    pub min_confidence: f64,
}

// Arguments as typed on the command line, before the thresholds are
// checked.
#[derive(Debug, PartialEq)]
pub struct RawArguments {
    pub input_file_path: String,
    pub output_report_path: String,
    pub min_support: String,
    pub min_confidence: String,
}

impl RawArguments {
    pub fn validate(self) -> Result<Arguments, InputError> {
        Ok(Arguments {
            min_support: parse_threshold("min_support", &self.min_support)?,
            min_confidence: parse_threshold("min_confidence", &self.min_confidence)?,
            input_file_path: self.input_file_path,
            output_report_path: self.output_report_path,
        })
    }
}

fn build_parser<'a>(args: &'a mut RawArguments) -> ArgumentParser<'a> {
    let mut parser = ArgumentParser::new();
    parser.set_description("Apriori frequent itemset and association rule miner.");

    parser
        .refer(&mut args.input_file_path)
        .add_argument(
            "input",
            Store,
            "Input dataset in CSV format. The first line is a header.",
        )
        .required();

    parser
        .refer(&mut args.min_support)
        .add_argument(
            "min_support",
            Store,
            "Minimum itemset support threshold, in range [0,1].",
        )
        .required();

    parser
        .refer(&mut args.min_confidence)
        .add_argument(
            "min_confidence",
            Store,
            "Minimum rule confidence threshold, in range [0,1].",
        )
        .required();

    parser
        .refer(&mut args.output_report_path)
        .add_option(
            &["--output"],
            Store,
            "File path in which to store the report of frequent itemsets \
             and rules.",
        )
        .metavar("file_path");

    parser
}

// Parses `argv` (program name first). On failure returns the exit code
// argparse asks for, having already printed the reason.
pub fn parse_command_line(
    argv: Vec<String>,
    stdout: &mut dyn Write,
    stderr: &mut dyn Write,
) -> Result<RawArguments, i32> {
    let mut args = RawArguments {
        input_file_path: String::new(),
        output_report_path: String::from(DEFAULT_OUTPUT_PATH),
        min_support: String::new(),
        min_confidence: String::new(),
    };
    {
        let parser = build_parser(&mut args);
        if argv.len() <= 1 {
            let _ = parser.print_help("Usage:", stderr);
            return Err(1);
        }
        parser.parse(argv, stdout, stderr)?;
    }
    Ok(args)
}

pub fn parse_args_or_exit() -> Arguments {
    let raw = match parse_command_line(
        env::args().collect(),
        &mut io::stdout(),
        &mut io::stderr(),
    ) {
        Ok(raw) => raw,
        Err(code) => process::exit(code),
    };

    match raw.validate() {
        Ok(args) => args,
        Err(err) => {
            eprintln!("{}", err);
            process::exit(1);
        }
    }
}
