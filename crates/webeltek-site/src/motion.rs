//! Reveal animation variants
//!
//! Elements marked with [`REVEAL_CLASS`] start hidden and shifted down; the
//! observer script adds [`VISIBLE_CLASS`] the first time they intersect the
//! viewport, and the stylesheet transitions them into place.

use std::time::Duration;

pub const REVEAL_CLASS: &str = "reveal";
pub const VISIBLE_CLASS: &str = "visible";

/// Hidden → shown transition for a single element.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FadeUp {
    /// Initial downward offset in pixels.
    pub offset_px: u32,
    pub duration: Duration,
}

pub const FADE_UP: FadeUp = FadeUp {
    offset_px: 18,
    duration: Duration::from_millis(600),
};

/// Per-child delay applied to the items of a revealed group.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Stagger {
    pub step: Duration,
}

pub const STAGGER: Stagger = Stagger {
    step: Duration::from_millis(120),
};

impl Stagger {
    pub fn delay(&self, index: usize) -> Duration {
        self.step * u32::try_from(index).unwrap_or(u32::MAX)
    }

    /// Inline style for the child at `index`.
    pub fn style(&self, index: usize) -> String {
        format!("transition-delay: {}ms;", self.delay(index).as_millis())
    }
}

/// Fraction of an element that must be visible before it reveals.
pub const REVEAL_THRESHOLD: f64 = 0.1;

/// Observer that reveals `.reveal` elements once, then stops watching them.
/// Elements already on screen at load (the hero) reveal immediately.
pub fn observer_script() -> String {
    format!(
        r#"(function() {{
    function reveal() {{
        var targets = document.querySelectorAll('.{reveal}');
        if (!('IntersectionObserver' in window)) {{
            targets.forEach(function(el) {{ el.classList.add('{visible}'); }});
            return;
        }}
        var observer = new IntersectionObserver(function(entries) {{
            entries.forEach(function(entry) {{
                if (entry.isIntersecting) {{
                    entry.target.classList.add('{visible}');
                    observer.unobserve(entry.target);
                }}
            }});
        }}, {{ threshold: {threshold} }});
        targets.forEach(function(el) {{ observer.observe(el); }});
    }}
    if (document.readyState === 'loading') {{
        document.addEventListener('DOMContentLoaded', reveal);
    }} else {{
        reveal();
    }}
}})();"#,
        reveal = REVEAL_CLASS,
        visible = VISIBLE_CLASS,
        threshold = REVEAL_THRESHOLD,
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    const STYLESHEET: &str = include_str!("../style/tailwind.css");

    #[test]
    fn test_stagger_delays() {
        assert_eq!(STAGGER.delay(0), Duration::ZERO);
        assert_eq!(STAGGER.delay(3), Duration::from_millis(360));
        assert_eq!(STAGGER.style(2), "transition-delay: 240ms;");
    }

    #[test]
    fn test_fade_up_matches_stylesheet() {
        assert!(STYLESHEET.contains(&format!("translateY({}px)", FADE_UP.offset_px)));
        assert!(STYLESHEET.contains(&format!(
            "transition-duration: {}s",
            FADE_UP.duration.as_secs_f64()
        )));
    }

    #[test]
    fn test_observer_script_targets_reveal_class() {
        let script = observer_script();
        assert!(script.contains("querySelectorAll('.reveal')"));
        assert!(script.contains("classList.add('visible')"));
        assert!(script.contains("threshold: 0.1"));
        assert!(script.contains("unobserve"));
    }
}
