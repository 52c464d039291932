//! Remote image references
//!
//! The card has no asset pipeline; artwork is hot-linked and treated as an
//! opaque, always-available resource.

/// Polaroid portrait on the asking screen
pub const PORTRAIT: &str = "https://i.pinimg.com/736x/6c/b8/2c/6cb82c6fc5523ff925d8d3b9651acae6.jpg";

/// Swapped in once the declines pile up
pub const WEEPY_PORTRAIT: &str = "https://media.tenor.com/K2s5y4w_WzAAAAAi/sad-hamster-sad.gif";

/// Drifting background heart
pub const FLOATING_HEART: &str = "https://i.pinimg.com/1200x/a2/52/da/a252dae142c7bb21ade3ba5ac9905b36.jpg";

/// Pixel rose sprite used by the bouquet
pub const ROSE_SPRITE: &str = "https://i.pinimg.com/736x/ef/20/b8/ef20b8e0eadde2c27fdb401852b43fe0.jpg";

/// Stamp in the letter corner
pub const LETTER_STAMP: &str = "https://i.pinimg.com/736x/ef/20/b8/ef20b8e0eadde2c27fdb401852b43fe0.jpg";

/// Cover art on the song card
pub const SONG_COVER: &str = "https://i.pinimg.com/736x/ac/89/be/ac89be05d84885506c57b0eab0b24650.jpg";
