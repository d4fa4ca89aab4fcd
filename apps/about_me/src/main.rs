use std::path::PathBuf;

use aboutme_platform::{RunnerOptions, run_headless_app};
use clap::Parser;

/// Runs the About Me screen in the terminal. Commands are read from stdin,
/// one per line: type <text>, backspace, clear, tap <label>, rotate, dump, quit.
#[derive(Parser, Debug)]
#[command(name = "about-me", version, about)]
struct Args {
    /// Locale tag used for string resources.
    #[arg(long, default_value = "en")]
    locale: String,

    /// Load saved instance state from this file at start and write it on exit.
    #[arg(long)]
    state_file: Option<PathBuf>,

    /// Only print the screen when asked with `dump`.
    #[arg(short, long)]
    quiet: bool,
}

impl From<Args> for RunnerOptions {
    fn from(args: Args) -> Self {
        RunnerOptions {
            dump_each_frame: !args.quiet,
            state_file: args.state_file,
            locale: args.locale,
        }
    }
}

fn main() -> anyhow::Result<()> {
    env_logger::init();
    let args = Args::parse();
    log::debug!("{args:?}");

    run_headless_app(
        about_me::screen::app,
        args.into(),
        std::io::stdin().lock(),
        std::io::stdout(),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn options(argv: &[&str]) -> RunnerOptions {
        Args::try_parse_from(argv).unwrap().into()
    }

    #[test]
    fn defaults_match_runner_defaults() {
        let opts = options(&["about-me"]);
        let defaults = RunnerOptions::default();
        assert_eq!(opts.dump_each_frame, defaults.dump_each_frame);
        assert_eq!(opts.state_file, defaults.state_file);
        assert_eq!(opts.locale, defaults.locale);
    }

    #[test]
    fn flags_fill_the_runner_options() {
        let opts = options(&["about-me", "-q", "--locale", "de", "--state-file", "s.json"]);
        assert!(!opts.dump_each_frame);
        assert_eq!(opts.locale, "de");
        assert_eq!(opts.state_file, Some(PathBuf::from("s.json")));

        assert!(!options(&["about-me", "--quiet"]).dump_each_frame);
    }

    #[test]
    fn unknown_flags_are_rejected() {
        assert!(Args::try_parse_from(["about-me", "--verbose"]).is_err());
    }
}
