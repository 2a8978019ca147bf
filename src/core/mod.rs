pub mod coin;
pub mod face;
pub mod i18n;
pub mod session;

pub use coin::*;
pub use face::{CoinFace, FaceTextureCache};
pub use i18n::{default_labels, detect, strings, Language, Strings};
pub use session::{FaceLabels, FlipRecord, Session, HISTORY_CAP, LABEL_MAX_CHARS};

// Shader bundled as a string constant
pub static COIN_WGSL: &str = include_str!("../../shaders/coin.wgsl");
