//! Share link value objects.

/// Public surfaces a campaign link can point at.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ShareTarget {
    /// Visitor-facing wheel page.
    Play,
    /// Spin submission endpoint.
    Spin,
    /// Results dashboard for the campaign owner.
    Dashboard,
    /// Influencer self-registration page.
    Register,
}

impl ShareTarget {
    /// Route action segment within the target's mount.
    pub fn action(&self) -> &'static str {
        match self {
            Self::Play => "play",
            Self::Spin => "spin",
            Self::Dashboard => "dashboard",
            Self::Register => "register",
        }
    }

    /// Whether the target lives under the game mount; everything else is
    /// under the influencers mount.
    pub(crate) fn uses_game_mount(&self) -> bool {
        !matches!(self, Self::Register)
    }
}

/// A fully built public link for a campaign entity.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShareLink {
    /// Which public surface the link points at.
    pub target: ShareTarget,
    /// The complete URL, or an absolute path when no base URL is configured.
    pub url: String,
    /// The path segment carrying the identity: a signed token, or the raw
    /// slug when signing was unavailable.
    pub segment: String,
    /// Whether `segment` is a signed token.
    pub is_signed: bool,
}
