use std::io::{self, stdout};
use std::time::{Duration, Instant};

use clap::{Parser, Subcommand};
use crossterm::{
    cursor::{MoveLeft, MoveRight, MoveUp},
    execute,
    style::{Attribute, Color as TermColor, SetBackgroundColor, Stylize},
};
use kociemba::facelet::{Color, FaceCube};
use kociemba::scramble::{random_scramble, scramble_from_str, scramble_to_str};
use kociemba::solver::{solve as run_solve, SolveOptions, Tables};
use kociemba::{CubieCube, KociembaError as Error};
use spinners::Spinner;

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
#[command(arg_required_else_help(true))]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    #[command(about = "solves the cube using the two-phase algorithm")]
    #[clap(group(
        clap::ArgGroup::new("state")
            .required(true)
            .args(&["scramble", "facelet"]),
    ))]
    Solve {
        #[arg(short, long)]
        scramble: Option<String>,

        #[arg(short, long)]
        facelet: Option<String>,

        #[arg(short, long, default_value_t = 25)]
        max: u8,

        #[arg(short, long, default_value_t = 10.0)]
        timeout: f32,

        #[arg(short, long)]
        preview: bool,
    },

    #[command(about = "generates a random scramble")]
    Scramble {
        #[arg(short, long, default_value_t = 25)]
        length: usize,

        #[arg(short, long)]
        preview: bool,
    },
}

fn main() {
    let program = Cli::parse();

    let result = match &program.command {
        Some(Commands::Solve {
            scramble,
            facelet,
            max,
            timeout,
            preview,
        }) => solve(scramble, facelet, *max, *timeout, *preview),
        Some(Commands::Scramble { length, preview }) => scramble(*length, *preview),
        None => Ok(()),
    };

    if let Err(error) = result {
        let styled = "Error:".with(TermColor::Red).attribute(Attribute::Bold);
        println!("{styled} {error}");
    }
}

fn solve(
    scramble: &Option<String>,
    facelet: &Option<String>,
    max: u8,
    timeout: f32,
    preview: bool,
) -> Result<(), Error> {
    let cube = if let Some(scramble) = scramble {
        let moves = scramble_from_str(scramble)?;
        CubieCube::solved().apply_moves(&moves)
    } else if let Some(facelet) = facelet {
        CubieCube::try_from(&FaceCube::try_from(facelet.as_str())?)?
    } else {
        unreachable!("clap enforces exactly one of scramble/facelet");
    };

    if preview {
        print_facelet(&FaceCube::from(&cube))?;
    }

    let options = SolveOptions {
        max_depth: max,
        timeout: Duration::from_secs_f32(timeout),
    };

    let mut spinner = Spinner::new(spinners::Spinners::Dots, "Solving".to_owned());
    let start = Instant::now();
    let tables = Tables::new()?;
    let solution = run_solve(&cube, &tables, &options);
    let elapsed = start.elapsed();
    spinner.stop_with_newline();

    match solution {
        Ok(moves) => {
            println!("Solution: {}", scramble_to_str(&moves));
            println!("Move count: {}", moves.len());
            println!("Solve time: {elapsed:?}");
        }
        Err(e) => println!("No solution found: {e}"),
    }

    Ok(())
}

fn scramble(length: usize, preview: bool) -> Result<(), Error> {
    let moves = random_scramble(length);
    println!("Scramble: {}", scramble_to_str(&moves));
    if preview {
        let cube = CubieCube::solved().apply_moves(&moves);
        print_facelet(&FaceCube::from(&cube))?;
    }
    Ok(())
}

fn color_to_termcolor(color: Color) -> TermColor {
    match color {
        Color::U => TermColor::DarkYellow,
        Color::R => TermColor::Magenta,
        Color::F => TermColor::Green,
        Color::D => TermColor::White,
        Color::L => TermColor::Red,
        Color::B => TermColor::Blue,
    }
}

fn print_face(face: &[Color], offset: u16) -> Result<(), io::Error> {
    for i in 0..3 {
        let layer = format!(
            "{}  {}  {}  {}",
            SetBackgroundColor(color_to_termcolor(face[3 * i])),
            SetBackgroundColor(color_to_termcolor(face[3 * i + 1])),
            SetBackgroundColor(color_to_termcolor(face[3 * i + 2])),
            SetBackgroundColor(TermColor::Reset),
        );
        println!("{layer}");
        if offset != 0 {
            execute!(stdout(), MoveRight(offset))?;
        }
    }
    Ok(())
}

fn print_facelet(facelet: &FaceCube) -> Result<(), io::Error> {
    let stdout = stdout();
    let f = &facelet.facelets;

    println!();
    execute!(&stdout, MoveRight(6))?;
    print_face(&f[0..9], 6)?; // U
    execute!(&stdout, MoveLeft(6))?;
    print_face(&f[36..45], 0)?; // L
    execute!(&stdout, MoveRight(6), MoveUp(3))?;
    print_face(&f[18..27], 6)?; // F
    execute!(&stdout, MoveLeft(12), MoveUp(3), MoveRight(12))?;
    print_face(&f[9..18], 12)?; // R
    execute!(&stdout, MoveLeft(12), MoveUp(3), MoveRight(18))?;
    print_face(&f[45..54], 18)?; // B
    execute!(&stdout, MoveLeft(12))?;
    print_face(&f[27..36], 6)?; // D
    execute!(&stdout, MoveLeft(12))?;
    println!();

    Ok(())
}
