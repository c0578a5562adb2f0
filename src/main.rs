use std::path::PathBuf;

use clap::Parser;
use log::info;

use crate::error::Error;

mod day18;
mod error;

type Solver = fn(u8, &str) -> error::Result<String>;

#[derive(Parser, Debug)]
#[command(about = "Advent of Code 2022 puzzle solutions")]
struct Args {
    /// Puzzle day
    day: usize,
    /// Puzzle part
    #[arg(value_parser = clap::value_parser!(u8).range(1 ..= 2))]
    part: u8,
    /// Read `day{DAY}test{TEST}.in` instead of `day{DAY}.in`
    #[arg(short, long)]
    test: Option<u32>,
    /// Read this file instead
    #[arg(short, long, conflicts_with = "test")]
    input: Option<PathBuf>,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::Builder::new()
        .target(env_logger::Target::Stderr)
        .filter_level(log::LevelFilter::Info)
        .parse_env("RUST_LOG")
        .init();

    let days: [(usize, Solver); 1] = [(18, day18::day18)];

    let Args {day, part, test, input} = Args::parse();
    let &(_, solve) = days.iter().find(|&&(d, _)| d == day).ok_or(Error::UnknownDay(day))?;
    let path = input.unwrap_or_else(|| match test {
        Some(test) => PathBuf::from(format!("day{}test{}.in", day, test)),
        None => PathBuf::from(format!("day{}.in", day)),
    });

    info!("day {} part {} from {}", day, part, path.display());
    let input = std::fs::read_to_string(&path).map_err(|source| Error::Input {path, source})?;
    let time = std::time::Instant::now();
    println!("{}", solve(part, &input)?);
    info!("{} seconds elapsed", time.elapsed().as_secs_f32());
    Ok(())
}
