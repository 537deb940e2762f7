//! Builds public campaign links with signed slug segments.

use std::time::Duration;

use tracing::{debug, warn};

use spinhub_core::config::LinksConfig;
use spinhub_core::types::Slug;
use spinhub_signing::TokenEncoder;

use super::link::{ShareLink, ShareTarget};

/// Builds the public links shared for a campaign entity.
///
/// Every link carries the slug as a signed token. When signing fails the
/// builder falls back to the raw slug so the campaign still gets a working
/// link; routing that unsigned form is the embedding application's
/// concern.
#[derive(Debug, Clone)]
pub struct ShareLinkBuilder {
    encoder: TokenEncoder,
    config: LinksConfig,
}

impl ShareLinkBuilder {
    /// Creates a builder over a token encoder and link configuration.
    pub fn new(encoder: TokenEncoder, config: LinksConfig) -> Self {
        Self { encoder, config }
    }

    /// Builds a link for the given target.
    pub fn build(&self, target: ShareTarget, slug: &Slug) -> ShareLink {
        let segment = self.encoder.encode(slug.as_str());
        self.assemble(target, slug, segment)
    }

    /// Builds a link whose token embeds the current issue time, so
    /// decoders can enforce a maximum age on it.
    pub fn build_expiring(&self, target: ShareTarget, slug: &Slug, ttl: Duration) -> ShareLink {
        let segment = self.encoder.encode_with_expiry(slug.as_str(), Some(ttl));
        self.assemble(target, slug, segment)
    }

    fn assemble(&self, target: ShareTarget, slug: &Slug, segment: Option<String>) -> ShareLink {
        let (segment, is_signed) = match segment {
            Some(token) => (token, true),
            None => {
                warn!(slug = %slug, target = ?target, "Falling back to an unsigned slug segment");
                (slug.as_str().to_string(), false)
            }
        };
        let mount = if target.uses_game_mount() {
            &self.config.game_mount
        } else {
            &self.config.influencers_mount
        };
        let url = format!(
            "{}/{}/{}/{}/",
            self.config.base_url,
            mount,
            target.action(),
            segment
        );
        debug!(target = ?target, url = %url, signed = is_signed, "Built share link");
        ShareLink {
            target,
            url,
            segment,
            is_signed,
        }
    }
}
