//! Named display colors players can pick from. Purely cosmetic: the engine
//! never sees colors, only `Player::One`/`Player::Two`.

use ratatui::style::Color;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PaletteEntry {
    /// Canonical name, as written in config files.
    pub name: &'static str,
    /// Capitalized label for on-screen messages.
    pub label: &'static str,
    pub color: Color,
}

pub const PALETTE: &[PaletteEntry] = &[
    PaletteEntry {
        name: "red",
        label: "Red",
        color: Color::Red,
    },
    PaletteEntry {
        name: "yellow",
        label: "Yellow",
        color: Color::Yellow,
    },
    PaletteEntry {
        name: "blue",
        label: "Blue",
        color: Color::Blue,
    },
    PaletteEntry {
        name: "green",
        label: "Green",
        color: Color::Green,
    },
    PaletteEntry {
        name: "magenta",
        label: "Magenta",
        color: Color::Magenta,
    },
    PaletteEntry {
        name: "cyan",
        label: "Cyan",
        color: Color::Cyan,
    },
    PaletteEntry {
        name: "white",
        label: "White",
        color: Color::White,
    },
];

/// Look up a palette entry by name, case-insensitively.
pub fn find(name: &str) -> Option<&'static PaletteEntry> {
    PALETTE
        .iter()
        .find(|entry| entry.name.eq_ignore_ascii_case(name))
}

/// Index of a named entry in [`PALETTE`], case-insensitively.
pub fn index_of(name: &str) -> Option<usize> {
    PALETTE
        .iter()
        .position(|entry| entry.name.eq_ignore_ascii_case(name))
}

/// Canonical color names, for error messages and help text.
pub fn names() -> Vec<&'static str> {
    PALETTE.iter().map(|entry| entry.name).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_find_is_case_insensitive() {
        assert_eq!(find("red").unwrap().label, "Red");
        assert_eq!(find("RED").unwrap().label, "Red");
        assert_eq!(find("Yellow").unwrap().color, Color::Yellow);
    }

    #[test]
    fn test_unknown_name() {
        assert!(find("chartreuse").is_none());
        assert!(index_of("chartreuse").is_none());
    }

    #[test]
    fn test_index_of_matches_palette_order() {
        for (i, entry) in PALETTE.iter().enumerate() {
            assert_eq!(index_of(entry.name), Some(i));
        }
    }

    #[test]
    fn test_names_are_unique() {
        let names = names();
        for (i, a) in names.iter().enumerate() {
            for b in &names[i + 1..] {
                assert_ne!(a, b);
            }
        }
    }
}
