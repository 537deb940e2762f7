//! Share link configuration.

use serde::{Deserialize, Serialize};

/// Settings for building public campaign links.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LinksConfig {
    /// Base URL prepended to every link (no trailing slash). Empty yields
    /// path-only links, which is what server-side templates want.
    #[serde(default)]
    pub base_url: String,
    /// Mount path of the game routes (play, spin, dashboard).
    #[serde(default = "default_game_mount")]
    pub game_mount: String,
    /// Mount path of the influencer routes (register).
    #[serde(default = "default_influencers_mount")]
    pub influencers_mount: String,
}

impl Default for LinksConfig {
    fn default() -> Self {
        Self {
            base_url: String::new(),
            game_mount: default_game_mount(),
            influencers_mount: default_influencers_mount(),
        }
    }
}

fn default_game_mount() -> String {
    "game".to_string()
}

fn default_influencers_mount() -> String {
    "influencers".to_string()
}
