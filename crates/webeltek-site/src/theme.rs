//! Design tokens
//!
//! Mirrors the `extend` block of `tailwind.config.js`. The utility classes
//! `text-brand`, `bg-brandDark` and `shadow-glow` resolve to these values.

/// A named styling value referenced from markup by its utility class.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DesignToken {
    pub name: &'static str,
    pub value: &'static str,
}

pub const BRAND: DesignToken = DesignToken {
    name: "brand",
    value: "#007BFF",
};

pub const BRAND_DARK: DesignToken = DesignToken {
    name: "brandDark",
    value: "#0056c9",
};

pub const SHADOW_GLOW: DesignToken = DesignToken {
    name: "glow",
    value: "0 0 24px rgba(0,123,255,.35)",
};

pub const COLORS: &[DesignToken] = &[BRAND, BRAND_DARK];
pub const SHADOWS: &[DesignToken] = &[SHADOW_GLOW];

/// Softer glow a card picks up while hovered (`.lift:hover`).
pub const HOVER_SHADOW: &str = "0 0 24px rgba(0, 123, 255, 0.22)";

#[cfg(test)]
mod tests {
    use super::*;

    const TAILWIND_CONFIG: &str = include_str!("../tailwind.config.js");
    const STYLESHEET: &str = include_str!("../style/tailwind.css");

    #[test]
    fn test_tokens_match_tailwind_config() {
        for token in COLORS.iter().chain(SHADOWS) {
            let entry = format!("{}: '{}'", token.name, token.value);
            assert!(
                TAILWIND_CONFIG.contains(&entry),
                "tailwind.config.js is missing `{entry}`"
            );
        }
    }

    #[test]
    fn test_hover_shadow_matches_stylesheet() {
        assert!(STYLESHEET.contains(&format!("box-shadow: {HOVER_SHADOW};")));
    }
}
