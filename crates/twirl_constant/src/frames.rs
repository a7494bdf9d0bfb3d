//! Frame catalogs: ordered glyph sequences that spinners cycle through.
//!
//! Some glyphs render as empty boxes in fonts that lack them; they are still there.
//! Wide glyphs (emoji) occupy two cells but count as one codepoint, so presets
//! using them carry an erasing shift.

pub const DIAMOND: &[&str] = &["♦"];

pub const SIMPLE: &[&str] = &["/", "|", "\\", "─"];

pub const CIRCLES: &[&str] = &["◐", "◓", "◑", "◒"];

pub const SECTORS: &[&str] = &["◴", "◷", "◶", "◵"];

pub const CLOCK: &[&str] = &[
    "🕐", "🕑", "🕒", "🕓", "🕔", "🕕", "🕖", "🕗", "🕘", "🕙", "🕚", "🕛",
];

pub const EARTH: &[&str] = &["🌍", "🌎", "🌏"];

pub const MOON: &[&str] = &["🌘", "🌗", "🌖", "🌕", "🌔", "🌓", "🌒", "🌑"];

pub const SNAKE: &[&str] = &["⠏", "⠛", "⠹", "⢸", "⣰", "⣤", "⣆", "⡇"];

pub const BRAILLE: &[&str] = &["⠋", "⠙", "⠹", "⠸", "⠼", "⠴", "⠦", "⠧", "⠇", "⠏"];

pub const DOTS: &[&str] = &["⢹", "⢺", "⢼", "⣸", "⣇", "⡧", "⡗", "⡏"];

pub const ARROW: &[&str] = &["▹▹▹▹▹", "▸▹▹▹▹", "▹▸▹▹▹", "▹▹▸▹▹", "▹▹▹▸▹", "▹▹▹▹▸"];

pub const BLOCK: &[&str] = &[
    "▁", "▂", "▃", "▄", "▅", "▆", "▇", "█", "▇", "▆", "▅", "▄", "▃", "▂", "▁",
];

pub const TRIGRAM: &[&str] = &["☰", "☱", "☲", "☴", "☵", "☶", "☳", "☷"];

pub const DICE: &[&str] = &["⚀", "⚁", "⚂", "⚃", "⚄", "⚅"];

pub const TOGGLE: &[&str] = &["■", "□", "▪", "▫"];

/// Weather glyphs are followed by a space so every frame spans two cells.
pub const WEATHER: &[&str] = &[
    "🌤 ", "🌤 ", "🌤 ", "🌥 ", "🌧 ", "🌨 ", "🌧 ", "🌨 ", "🌧 ", "🌨 ", "🌨 ", "🌧 ", "🌨 ", "🌥 ",
    "🌤 ", "🌤 ", "🌤 ",
];

pub const BOUNCING_BAR: &[&str] = &[
    "[    ]", "[=   ]", "[==  ]", "[=== ]", "[ ===]", "[  ==]", "[   =]", "[    ]", "[   =]",
    "[  ==]", "[ ===]", "[====]", "[=== ]", "[==  ]", "[=   ]",
];
