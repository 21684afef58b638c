use std::path::PathBuf;

use clap::Parser;
use kanji_types::ViewMode;

#[derive(Parser, Debug)]
#[command(name = "kanji-master")]
#[command(about = "Browse and study JLPT N5 kanji with Bengali meanings", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Profile file ({ "name": ..., "value": <config> })
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Initial search text
    #[arg(long)]
    pub search: Option<String>,

    /// Initial category id
    #[arg(long)]
    pub category: Option<String>,

    /// Initial view mode: grid, list or stats
    #[arg(long, value_parser = parse_mode)]
    pub mode: Option<ViewMode>,

    /// Render one frame and exit without reading stdin
    #[arg(long)]
    pub once: bool,
}

fn parse_mode(value: &str) -> Result<ViewMode, String> {
    ViewMode::parse(value).ok_or_else(|| format!("unknown view mode '{value}'"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_args() {
        let cli = Cli::try_parse_from([
            "kanji-master",
            "--search",
            "water",
            "--category",
            "nature",
            "--mode",
            "stats",
            "--once",
        ])
        .unwrap();

        assert_eq!(cli.search.as_deref(), Some("water"));
        assert_eq!(cli.category.as_deref(), Some("nature"));
        assert_eq!(cli.mode, Some(ViewMode::Stats));
        assert!(cli.once);
        assert!(cli.config.is_none());
    }

    #[test]
    fn test_rejects_unknown_mode() {
        assert!(Cli::try_parse_from(["kanji-master", "--mode", "chart"]).is_err());
    }
}
