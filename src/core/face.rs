/// Which coin face a raster belongs to.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CoinFace {
    Heads,
    Tails,
}

/// Remembers the last rasterized label per face so textures are only
/// regenerated when the text actually changes.
#[derive(Default)]
pub struct FaceTextureCache {
    heads: Option<String>,
    tails: Option<String>,
}

impl FaceTextureCache {
    /// Returns true when `label` differs from the cached one and records it.
    pub fn refresh(&mut self, face: CoinFace, label: &str) -> bool {
        let slot = match face {
            CoinFace::Heads => &mut self.heads,
            CoinFace::Tails => &mut self.tails,
        };
        if slot.as_deref() == Some(label) {
            return false;
        }
        *slot = Some(label.to_string());
        true
    }
}
