use reel_extract::models::PlayerResolution;
use std::time::Duration;

const HOUR: Duration = Duration::from_secs(60 * 60);
const DAY: Duration = Duration::from_secs(24 * 60 * 60);

/// How long each kind of result stays fresh in the cache.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Ttl {
    pub listing: Duration,
    pub search: Duration,
    pub player: Duration,
    /// Watch-page fallbacks are lower confidence and get re-checked sooner.
    pub player_fallback: Duration,
}
impl Default for Ttl {
    fn default() -> Self {
        Self {
            listing: DAY,
            search: HOUR,
            player: DAY,
            player_fallback: HOUR,
        }
    }
}
impl Ttl {
    pub fn for_resolution(&self, resolution: &PlayerResolution) -> Duration {
        if resolution.is_fallback() { self.player_fallback } else { self.player }
    }
}
