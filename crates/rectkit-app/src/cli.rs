use std::path::PathBuf;

use clap::Parser;

/// rectkit: instanced rectangle renderer demo.
#[derive(Parser, Debug)]
#[command(name = "rectkit", version, about)]
pub struct Args {
    /// Config file path override.
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Log filter directive override (e.g. `debug`, `rectkit=trace`).
    #[arg(long)]
    pub log_level: Option<String>,

    /// Atlas image to sample instead of `atlas.path` or the built-in atlas.
    #[arg(long)]
    pub atlas: Option<PathBuf>,

    /// Render the demo scene headlessly to this PNG and exit.
    #[arg(long, value_name = "PNG")]
    pub snapshot: Option<PathBuf>,

    /// Snapshot width in pixels (defaults to `window.width`).
    #[arg(long)]
    pub width: Option<u32>,

    /// Snapshot height in pixels (defaults to `window.height`).
    #[arg(long)]
    pub height: Option<u32>,

    /// Print the effective configuration as JSON and exit.
    #[arg(long)]
    pub print_config: bool,
}

pub fn parse() -> Args {
    Args::parse()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_snapshot_flags() {
        let args = Args::parse_from([
            "rectkit",
            "--snapshot",
            "out.png",
            "--width",
            "320",
            "--height",
            "200",
        ]);
        assert_eq!(args.snapshot, Some(PathBuf::from("out.png")));
        assert_eq!(args.width, Some(320));
        assert_eq!(args.height, Some(200));
        assert!(args.config.is_none());
        assert!(!args.print_config);
    }

    #[test]
    fn parses_overrides() {
        let args = Args::parse_from([
            "rectkit",
            "--config",
            "/tmp/rectkit.toml",
            "--log-level",
            "debug",
            "--atlas",
            "sprites.png",
        ]);
        assert_eq!(args.config, Some(PathBuf::from("/tmp/rectkit.toml")));
        assert_eq!(args.log_level.as_deref(), Some("debug"));
        assert_eq!(args.atlas, Some(PathBuf::from("sprites.png")));
    }

    #[test]
    fn cli_definition_is_consistent() {
        use clap::CommandFactory;
        Args::command().debug_assert();
    }
}
