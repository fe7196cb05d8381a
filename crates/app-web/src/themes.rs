// Static theme palette table. The core treats palettes as opaque injected
// data; this table is the only place theme content lives. Pure Rust (also
// included by the host-side test suite).

use app_core::{Palette, Rgba, Theme};

struct ThemeDef {
    id: &'static str,
    name: &'static str,
    colors: &'static [&'static str],
    background: &'static str,
}

const THEME_DEFS: &[ThemeDef] = &[
    ThemeDef {
        id: "love",
        name: "Romantic Pink",
        colors: &["#8b0000", "#ff0000", "#ff99cc", "#ea4c89", "#ffffff"],
        background: "#000000",
    },
    ThemeDef {
        id: "ocean",
        name: "Starry Night",
        colors: &["#0a1628", "#1e3a5f", "#2563eb", "#60a5fa", "#ffffff", "#fbbf24"],
        background: "#050a14",
    },
    ThemeDef {
        id: "forest",
        name: "Forest Magic",
        colors: &["#14532d", "#166534", "#22c55e", "#86efac", "#ffffff", "#fde047"],
        background: "#0a1f0f",
    },
    ThemeDef {
        id: "sunset",
        name: "Sunset Glow",
        colors: &["#7c2d12", "#ea580c", "#f97316", "#fbbf24", "#ffffff", "#fcd34d"],
        background: "#1a0a05",
    },
    ThemeDef {
        id: "lavender",
        name: "Lavender Dream",
        colors: &["#4c1d95", "#7c3aed", "#a78bfa", "#c4b5fd", "#ffffff", "#f0abfc"],
        background: "#0f0518",
    },
    ThemeDef {
        id: "rainbow",
        name: "Rainbow",
        colors: &[
            "#ef4444", "#f97316", "#eab308", "#22c55e", "#06b6d4", "#3b82f6", "#a855f7",
            "#ffffff",
        ],
        background: "#000000",
    },
    ThemeDef {
        id: "gold",
        name: "Golden Flow",
        colors: &["#78350f", "#b45309", "#d97706", "#fbbf24", "#fde68a", "#ffffff"],
        background: "#0f0a05",
    },
    ThemeDef {
        id: "mint",
        name: "Mint Fresh",
        colors: &["#064e3b", "#059669", "#10b981", "#6ee7b7", "#ffffff", "#ccfbf1"],
        background: "#021c15",
    },
];

fn build(def: &ThemeDef) -> Theme {
    let colors: Palette = def
        .colors
        .iter()
        .filter_map(|hex| Rgba::parse_hex(hex))
        .collect();
    Theme {
        id: def.id,
        name: def.name,
        colors,
        background: Rgba::parse_hex(def.background).unwrap_or(Rgba::rgb(0, 0, 0)),
    }
}

/// Resolve a theme id; unknown ids fall back to the first (default) theme.
pub fn resolve(id: &str) -> Theme {
    let def = THEME_DEFS
        .iter()
        .find(|d| d.id == id)
        .unwrap_or(&THEME_DEFS[0]);
    build(def)
}

pub fn default_theme() -> Theme {
    build(&THEME_DEFS[0])
}

/// Ids in table order, for the UI layer.
pub fn theme_ids() -> Vec<&'static str> {
    THEME_DEFS.iter().map(|d| d.id).collect()
}
