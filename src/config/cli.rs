use crate::core::TimeRangeProvider;
use clap::Parser;

#[derive(Debug, Clone, Parser)]
#[command(name = "game-slots")]
#[command(about = "Count the 15-minute games that fit between two times of day")]
pub struct CliConfig {
    /// Start time, zero-padded 24-hour HH:MM
    pub start: String,

    /// End time, zero-padded 24-hour HH:MM. Earlier than START means the next day
    pub end: String,

    /// Print the result and its breakdown as JSON
    #[arg(long)]
    pub json: bool,

    /// Exit with an error on unparseable times instead of reporting 0 games
    #[arg(long)]
    pub strict: bool,

    #[arg(short, long, help = "Enable verbose output")]
    pub verbose: bool,
}

impl TimeRangeProvider for CliConfig {
    fn start_time(&self) -> &str {
        &self.start
    }

    fn end_time(&self) -> &str {
        &self.end
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_positionals_and_flags() {
        let config = CliConfig::try_parse_from(["game-slots", "17:01", "19:02", "--json"]).unwrap();
        assert_eq!(config.start_time(), "17:01");
        assert_eq!(config.end_time(), "19:02");
        assert!(config.json);
        assert!(!config.strict);
        assert!(!config.verbose);
    }

    #[test]
    fn test_both_times_are_required() {
        assert!(CliConfig::try_parse_from(["game-slots", "17:01"]).is_err());
        assert!(CliConfig::try_parse_from(["game-slots"]).is_err());
    }

    #[test]
    fn test_blank_times_are_accepted_as_arguments() {
        // Blank times are rejected by the counter, not by argument parsing.
        let config = CliConfig::try_parse_from(["game-slots", " ", "10:00"]).unwrap();
        assert_eq!(config.start_time(), " ");
    }
}
