use clap::Parser;

use crate::utils::version;

#[derive(Parser, Debug)]
#[command(author, version = version(), about)]
pub struct Cli {
    #[arg(
        short,
        long,
        value_name = "FLOAT",
        help = "Tick rate, i.e. number of ticks per second",
        default_value_t = 4.0
    )]
    pub tick_rate: f64,

    #[arg(
        short,
        long,
        value_name = "FLOAT",
        help = "Frame rate, i.e. number of frames per second",
        default_value_t = 60.0
    )]
    pub frame_rate: f64,
}

#[cfg(test)]
mod tests {
    use clap::CommandFactory;

    use super::*;

    #[test]
    fn test_cli_defaults() {
        let cli = Cli::parse_from(["jestui"]);
        assert_eq!(cli.tick_rate, 4.0);
        assert_eq!(cli.frame_rate, 60.0);
    }

    #[test]
    fn test_cli_overrides() {
        let cli = Cli::parse_from(["jestui", "--tick-rate", "10", "--frame-rate", "30"]);
        assert_eq!(cli.tick_rate, 10.0);
        assert_eq!(cli.frame_rate, 30.0);
    }

    #[test]
    fn test_cli_asserts() {
        Cli::command().debug_assert();
    }
}
