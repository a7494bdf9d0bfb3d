//! ANSI color constants for spinner parts.
//!
//! `ansi16` holds SGR parameter lists (each entry becomes `ESC[<a;b;..>m`),
//! `ansi256` holds palette indices for `ESC[38;5;<n>m` foregrounds and
//! `(fg, bg)` pairs for `ESC[38;5;<fg>;48;5;<bg>m`.

/// 16-color SGR parameter lists.
pub mod ansi16 {
    /// Bold
    pub const BOLD: &[u8] = &[1];
    /// Dim / faint
    pub const DARK: &[u8] = &[2];
    pub const LIGHT_YELLOW: &[u8] = &[93];
    pub const LIGHT_BLUE: &[u8] = &[94];
    pub const LIGHT_CYAN: &[u8] = &[96];
}

/// 256-color palette sequences. Lists cycle in lockstep with the frame index.
pub mod ansi256 {
    /// Full hue sweep, red through magenta and back.
    pub const RAINBOW: &[u8] = &[
        196, 202, 208, 214, 220, 226, 190, 154, 118, 82, 46, 47, 48, 49, 50, 51, 45, 39, 33, 27,
        21, 57, 93, 129, 165, 201, 200, 199, 198, 197,
    ];
    /// Yellow foreground fading towards white.
    pub const YELLOW_WHITE: &[u8] = &[226, 227, 228, 229, 230, 231, 230, 229, 228, 227];
    /// Royal blue foreground shades.
    pub const ROYAL_BLUE: &[u8] = &[21, 27, 33, 39, 33, 27];
    /// Greys used for muted text.
    pub const DARK_GREY: &[u8] = &[240];
    /// Cyan tones for block spinners.
    pub const CYAN_SHADES: &[u8] = &[23, 30, 37, 44, 51, 44, 37, 30];
    /// White on a cycling background: `(fg, bg)`.
    pub const WHITE_ON_RAINBOW: &[(u8, u8)] = &[
        (231, 196),
        (231, 208),
        (231, 220),
        (231, 46),
        (231, 51),
        (231, 21),
        (231, 201),
    ];
}
