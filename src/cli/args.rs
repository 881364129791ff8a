use std::path::PathBuf;

use crate::models::errors::{GameError, GameResult};

#[derive(Debug, Clone, Default, PartialEq)]
pub struct Args {
    pub seed: Option<u64>,
    pub difficulty: Option<u32>,
    pub frames: Option<u64>,
    pub config: Option<PathBuf>,
    pub json: bool,
    pub help: bool,
}

pub fn parse() -> GameResult<Args> {
    parse_from(std::env::args().skip(1))
}

pub fn parse_from<I>(argv: I) -> GameResult<Args>
where
    I: IntoIterator<Item = String>,
{
    let mut args = Args::default();
    let mut iter = argv.into_iter();

    while let Some(arg) = iter.next() {
        match arg.as_str() {
            "--seed" | "-s" => args.seed = Some(value(&mut iter, &arg)?.parse()?),
            "--difficulty" | "-d" => args.difficulty = Some(value(&mut iter, &arg)?.parse()?),
            "--frames" | "-f" => args.frames = Some(value(&mut iter, &arg)?.parse()?),
            "--config" | "-c" => args.config = Some(PathBuf::from(value(&mut iter, &arg)?)),
            "--json" => args.json = true,
            "--help" | "-h" => args.help = true,
            other => return Err(GameError::InvalidInput(format!("Unknown argument: {}", other))),
        }
    }

    Ok(args)
}

fn value(iter: &mut impl Iterator<Item = String>, flag: &str) -> GameResult<String> {
    iter.next()
        .ok_or_else(|| GameError::InvalidInput(format!("{} requires a value", flag)))
}

pub fn print_usage() {
    println!("Usage: star_raiders [OPTIONS]");
    println!();
    println!("Options:");
    println!("  -s, --seed <INT>        Seed for the random number generator");
    println!("  -d, --difficulty <1-5>  Difficulty level");
    println!("  -f, --frames <INT>      Number of frames to simulate");
    println!("  -c, --config <PATH>     JSON configuration file");
    println!("      --json              Print a JSON snapshot every simulated second");
    println!("  -h, --help              Print help");
}

#[cfg(test)]
mod tests {
    use super::*;

    fn argv(items: &[&str]) -> Vec<String> {
        items.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn parses_all_flags() {
        let args = parse_from(argv(&["-s", "42", "--difficulty", "4", "-f", "600", "-c", "sim.json", "--json"])).unwrap();
        assert_eq!(args.seed, Some(42));
        assert_eq!(args.difficulty, Some(4));
        assert_eq!(args.frames, Some(600));
        assert_eq!(args.config, Some(PathBuf::from("sim.json")));
        assert!(args.json);
        assert!(!args.help);
    }

    #[test]
    fn empty_is_default() {
        assert_eq!(parse_from(Vec::new()).unwrap(), Args::default());
    }

    #[test]
    fn missing_value_is_error() {
        assert!(matches!(parse_from(argv(&["--seed"])), Err(GameError::InvalidInput(_))));
    }

    #[test]
    fn bad_number_is_parse_error() {
        assert!(matches!(parse_from(argv(&["-s", "abc"])), Err(GameError::ParseError(_))));
    }

    #[test]
    fn unknown_flag_is_error() {
        assert!(parse_from(argv(&["--warp"])).is_err());
    }
}
