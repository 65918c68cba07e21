//! `solver <input_file> <output_file>`: reads a cube in the nine-line
//! unfolded-cube format, solves it with the default search budget, and
//! writes the bare move-letter solution string.

use std::{env, fs, process::ExitCode};

use kociemba::solver::{solve, SolveOptions, Tables};
use kociemba::{parser, serialize::serialize};

fn main() -> ExitCode {
    let args: Vec<String> = env::args().collect();
    let [_, input_file, output_file] = args.as_slice() else {
        eprintln!("usage: solver <input_file> <output_file>");
        return ExitCode::FAILURE;
    };

    let contents = match fs::read_to_string(input_file) {
        Ok(contents) => contents,
        Err(e) => {
            eprintln!("{e}");
            return ExitCode::FAILURE;
        }
    };

    let cube = match parser::parse(&contents) {
        Ok(cube) => cube,
        Err(e) => {
            eprintln!("{}", e.code().map_or(e.to_string(), |n| format!("Error {n}")));
            return ExitCode::FAILURE;
        }
    };

    let tables = match Tables::new() {
        Ok(tables) => tables,
        Err(e) => {
            eprintln!("{e}");
            return ExitCode::FAILURE;
        }
    };

    let solution = match solve(&cube, &tables, &SolveOptions::default()) {
        Ok(solution) => solution,
        Err(e) => {
            eprintln!("{}", e.code().map_or(e.to_string(), |n| format!("Error {n}")));
            return ExitCode::FAILURE;
        }
    };

    if let Err(e) = fs::write(output_file, serialize(&solution)) {
        eprintln!("{e}");
        return ExitCode::FAILURE;
    }

    ExitCode::SUCCESS
}
