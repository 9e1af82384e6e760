use clap::Parser;

use crate::client::ClightClient;

mod backlight;

/// Command-line control for the clight backlight daemon
#[derive(Debug, Parser)]
#[clap(about, version)]
pub struct Args {
    /// Enable debug logging
    #[clap(short, long, global = true)]
    pub debug: bool,

    #[clap(subcommand)]
    pub command: Command,
}

#[derive(Debug, clap::Subcommand)]
pub enum Command {
    /// Query or adjust the display backlight
    #[clap(subcommand)]
    Backlight(backlight::Command),
}

impl Command {
    pub async fn run(&self) -> anyhow::Result<()> {
        let mut client = ClightClient::new();

        match self {
            Self::Backlight(command) => command.run(&mut client).await,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> Result<Args, clap::Error> { Args::try_parse_from(args) }

    #[test]
    fn parses_get() {
        let args = parse(&["clight-ctl", "backlight", "get"]).unwrap();
        assert!(!args.debug);
        assert!(matches!(
            args.command,
            Command::Backlight(backlight::Command::Get)
        ));
    }

    #[test]
    fn parses_set_value() {
        let args = parse(&["clight-ctl", "backlight", "set", "42"]).unwrap();
        match args.command {
            Command::Backlight(backlight::Command::Set { value }) => assert_eq!(value, 42),
            other => panic!("parsed {:?}", other),
        }
    }

    #[test]
    fn parses_negative_step() {
        let args = parse(&["clight-ctl", "backlight", "decrease", "-5"]).unwrap();
        match args.command {
            Command::Backlight(backlight::Command::Decrease { value }) => assert_eq!(value, -5),
            other => panic!("parsed {:?}", other),
        }
    }

    #[test]
    fn debug_flag_is_global() {
        assert!(parse(&["clight-ctl", "-d", "backlight", "get"]).unwrap().debug);
        assert!(parse(&["clight-ctl", "backlight", "get", "--debug"]).unwrap().debug);
    }

    #[test]
    fn rejects_non_integer_value() {
        assert!(parse(&["clight-ctl", "backlight", "set", "abc"]).is_err());
    }

    #[test]
    fn rejects_missing_subcommand() {
        assert!(parse(&["clight-ctl", "backlight"]).is_err());
        assert!(parse(&["clight-ctl"]).is_err());
    }

    #[test]
    fn rejects_missing_value() {
        assert!(parse(&["clight-ctl", "backlight", "increase"]).is_err());
    }
}
