use clap::Parser;
use snadder::{Face, Tile, DEFAULT_DICE_SIZE};

/// Expected number of dice rolls to finish a snakes-and-ladders board.
///
/// Without `--size`, solves the two preset boards.
#[derive(Parser)]
#[command(name = "snadder", version, about = "Expected rolls for snakes and ladders")]
pub struct Cli {
    /// Increase verbosity (-v info, -vv debug, -vvv trace).
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Number of playable tiles of a custom board.
    #[arg(short, long)]
    pub size: Option<Tile>,

    /// Number of dice faces.
    #[arg(short, long, default_value_t = DEFAULT_DICE_SIZE)]
    pub dice: Face,

    /// Snadder as FROM:TO; repeat for several.
    #[arg(long = "snadder", value_parser = parse_snadder, requires = "size")]
    pub snadders: Vec<(Tile, Tile)>,

    /// Follow chained snadders until none applies.
    #[arg(short, long, requires = "size")]
    pub transitive: bool,

    /// Overshooting the last tile wastes the roll.
    #[arg(short, long, requires = "size")]
    pub exact: bool,

    /// Print the expectation of every tile, not only the start.
    #[arg(short, long)]
    pub all: bool,
}

fn parse_snadder(s: &str) -> Result<(Tile, Tile), String> {
    let (from, to) = s
        .split_once(':')
        .ok_or_else(|| format!("expected FROM:TO, got `{s}`"))?;
    let from = from
        .trim()
        .parse()
        .map_err(|e| format!("bad source `{from}`: {e}"))?;
    let to = to
        .trim()
        .parse()
        .map_err(|e| format!("bad destination `{to}`: {e}"))?;
    Ok((from, to))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_snadder_pair() {
        assert_eq!(parse_snadder("12:25"), Ok((12, 25)));
        assert_eq!(parse_snadder(" 99 : 44 "), Ok((99, 44)));
    }

    #[test]
    fn rejects_malformed_snadder() {
        assert!(parse_snadder("12-25").is_err());
        assert!(parse_snadder("a:3").is_err());
    }

    #[test]
    fn custom_board_flags() {
        let cli = Cli::try_parse_from([
            "snadder", "--size", "10", "--snadder", "3:7", "--snadder", "9:1", "-e",
        ])
        .unwrap();
        assert_eq!(cli.size, Some(10));
        assert_eq!(cli.dice, DEFAULT_DICE_SIZE);
        assert_eq!(cli.snadders, vec![(3, 7), (9, 1)]);
        assert!(cli.exact);
        assert!(!cli.transitive);
    }

    #[test]
    fn board_flags_require_size() {
        assert!(Cli::try_parse_from(["snadder", "--exact"]).is_err());
    }
}
