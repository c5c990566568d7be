// Copyright (C) 2025 The waddl developers.
//
// This file is part of waddl. waddl is free software: you can redistribute it
// and/or modify it under the terms of the GNU General Public License as
// published by the Free Software Foundation, either version 3 of the License,
// or (at your option) any later version.
//
// waddl is distributed in the hope that it will be useful, but WITHOUT ANY
// WARRANTY; without even the implied warranty of MERCHANTABILITY or FITNESS
// FOR A PARTICULAR PURPOSE. See the GNU General Public License for more
// details.
//
// You should have received a copy of the GNU General Public License along with
// waddl. If not, see [http://www.gnu.org/licenses](http://www.gnu.org/licenses).
/// `main.rs` -- Entrypoint for the waddl command-line tool
/// =======================================================
///
/// Every subcommand reads its input from a file, or from stdin when no file is
/// given. `diagram`, `format` and `inspect` accept either a bare parsed tree or
/// the parsing service's `{ "parsed": ..., "error": ... }` envelope.
// Imports
// -------
//
// ### Standard library
use std::{
    fs,
    io::{self, Read},
    path::PathBuf,
    process::exit,
};

// ### Third-party
use clap::{Args, Parser, Subcommand, ValueEnum};
use log::LevelFilter;

// ### Local
use waddl::{
    classifier::{classify, score},
    diagram::outline,
    logging::{configure_logger, configure_logger_from_file},
    parse_result::{run, ParseOutcome, Report},
    pretty_printer,
};

// Data structures
// ---------------
#[derive(Parser)]
#[command(name = "waddl", version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Control logging verbosity. Defaults to `warn`.
    #[arg(short, long, global = true)]
    log: Option<LevelFilter>,

    /// Configure logging from this log4rs YAML file instead.
    #[arg(long, global = true)]
    log_config: Option<PathBuf>,
}

#[derive(Subcommand)]
enum Commands {
    /// Guess the programming language of a source file.
    Classify(ClassifyCommand),
    /// Transform a parsed tree into a code diagram.
    Diagram(DiagramCommand),
    /// Pretty-print a parsed tree.
    Format(InputArgs),
    /// Show the diagram outline followed by the formatted tree.
    Inspect(InspectCommand),
}

#[derive(Args)]
struct InputArgs {
    /// The file to read. Reads stdin if omitted.
    file: Option<PathBuf>,
}

#[derive(Args)]
struct ClassifyCommand {
    #[command(flatten)]
    input: InputArgs,

    /// Also print the score of every language.
    #[arg(long)]
    scores: bool,
}

#[derive(Args)]
struct DiagramCommand {
    #[command(flatten)]
    input: InputArgs,

    #[arg(short, long, value_enum, default_value_t = OutputFormat::Outline)]
    output: OutputFormat,

    /// Show at most this many levels of the outline.
    #[arg(long)]
    max_depth: Option<usize>,
}

#[derive(Args)]
struct InspectCommand {
    #[command(flatten)]
    input: InputArgs,

    /// Show at most this many levels of the outline.
    #[arg(long)]
    max_depth: Option<usize>,
}

#[derive(Clone, Copy, ValueEnum)]
enum OutputFormat {
    /// An indented list, one node per line.
    Outline,
    /// The display nodes as JSON.
    Json,
}

// Code
// ----
impl InputArgs {
    fn read(&self) -> Result<String, String> {
        match &self.file {
            Some(path) => fs::read_to_string(path)
                .map_err(|err| format!("Unable to read {}: {err}", path.display())),
            None => {
                let mut text = String::new();
                io::stdin()
                    .read_to_string(&mut text)
                    .map_err(|err| format!("Unable to read stdin: {err}"))?;
                Ok(text)
            }
        }
    }

    /// Read the input as a parse result; a failed parse becomes an error.
    fn read_tree(&self) -> Result<serde_json::Value, String> {
        match ParseOutcome::from_json(&self.read()?)? {
            ParseOutcome::Parsed(tree) => Ok(tree),
            ParseOutcome::Failed(message) => Err(message),
        }
    }
}

impl Cli {
    fn configure_logging(&self) -> Result<(), String> {
        match &self.log_config {
            Some(path) => configure_logger_from_file(path),
            None => configure_logger(self.log.unwrap_or(LevelFilter::Warn)),
        }
    }

    fn run(self) -> Result<(), String> {
        self.configure_logging()?;
        match &self.command {
            Commands::Classify(classify_command) => {
                let text = classify_command.input.read()?;
                println!("{}", classify(&text));
                if classify_command.scores {
                    for (language, language_score) in score(&text).iter() {
                        println!("{language:>10} {language_score}");
                    }
                }
            }
            Commands::Diagram(diagram_command) => {
                let outcome = ParseOutcome::from_json(&diagram_command.input.read()?)?;
                let forest = match run(outcome) {
                    Report::Diagram { forest, .. } => forest,
                    Report::Error(message) => return Err(message),
                };
                match diagram_command.output {
                    OutputFormat::Outline => {
                        println!("{}", outline(&forest, diagram_command.max_depth))
                    }
                    OutputFormat::Json => println!(
                        "{}",
                        serde_json::to_string_pretty(&forest)
                            .map_err(|err| format!("Unable to encode the diagram: {err}"))?
                    ),
                }
            }
            Commands::Format(input) => {
                println!("{}", pretty_printer::format(&input.read_tree()?, 0));
            }
            Commands::Inspect(inspect_command) => {
                let outcome = ParseOutcome::from_json(&inspect_command.input.read()?)?;
                match run(outcome) {
                    report @ Report::Diagram { .. } => {
                        println!("{}", report.to_text(inspect_command.max_depth))
                    }
                    Report::Error(message) => return Err(message),
                }
            }
        }
        Ok(())
    }
}

#[cfg(not(tarpaulin_include))]
fn main() {
    let cli = Cli::parse();
    if let Err(err) = cli.run() {
        eprintln!("{err}");
        exit(1);
    }
}

#[cfg(test)]
mod test {
    use super::Cli;
    use clap::CommandFactory;

    // This is recommended in the [docs](https://docs.rs/clap/latest/clap/_derive/_tutorial/chapter_4/index.html).
    #[test]
    fn verify_cli() {
        Cli::command().debug_assert();
    }
}
