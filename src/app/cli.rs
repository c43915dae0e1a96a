use super::config::UserConfig;
use clap::Parser;
use std::path::PathBuf;

/// Vaultfeed - your saved clips from YouTube, TikTok and Instagram in one grid 🎞️
#[derive(Parser, Debug, Default)]
#[command(name = "vaultfeed", version, about)]
pub struct Args {
    /// TOML catalog file (defaults to the built-in sample)
    #[arg(long, value_name = "PATH")]
    pub catalog: Option<PathBuf>,

    /// Shuffle seed (default: 42)
    #[arg(long)]
    pub seed: Option<u64>,

    /// Skip oEmbed thumbnail lookups
    #[arg(long)]
    pub no_thumbnails: bool,

    /// Generate default config.toml to stdout
    #[arg(long)]
    pub generate_config: bool,

    /// Print the catalog in display order and exit
    #[arg(long)]
    pub list: bool,

    /// Folder for --list
    #[arg(long, requires = "list", default_value = "All")]
    pub folder: String,

    /// Search text for --list
    #[arg(long, requires = "list", default_value = "")]
    pub query: String,
}

impl Args {
    /// Flags win over `config.toml`
    pub fn apply(&self, config: &mut UserConfig) {
        if let Some(path) = &self.catalog {
            config.catalog_path = Some(path.clone());
        }
        if let Some(seed) = self.seed {
            config.seed = seed;
        }
        if self.no_thumbnails {
            config.resolve_thumbnails = false;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_flags_override_config() {
        let args = Args::parse_from(["vaultfeed", "--seed", "7", "--no-thumbnails"]);
        let mut config = UserConfig::default();
        args.apply(&mut config);
        assert_eq!(config.seed, 7);
        assert!(!config.resolve_thumbnails);
        assert!(config.catalog_path.is_none());
    }

    #[test]
    fn test_list_filters_require_list() {
        assert!(Args::try_parse_from(["vaultfeed", "--folder", "Gaming"]).is_err());
        let args = Args::try_parse_from(["vaultfeed", "--list", "--query", "tiktok"]).unwrap();
        assert_eq!(args.folder, "All");
        assert_eq!(args.query, "tiktok");
    }
}
