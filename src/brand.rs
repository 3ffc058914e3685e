//! Static brand configuration served to front-end consumers.
//!
//! Pure constants: no state, no inputs, identical on every call. These
//! exist so design-system values have one source of truth.
use serde_json::{json, Value};

/// The VeriTrust color palette.
pub fn brand_colors() -> Value {
    json!({
        "primary": {
            "main": "#00FF94",
            "hover": "#00CC76",
            "foreground": "#000000",
            "name": "Neon Green"
        },
        "secondary": {
            "main": "#3B82F6",
            "hover": "#2563EB",
            "foreground": "#FFFFFF",
            "name": "Trust Blue"
        },
        "background": {
            "default": "#050A14",
            "paper": "#0B1221",
            "subtle": "#111827",
            "name": "Deep Obsidian"
        },
        "text": {
            "primary": "#F8FAFC",
            "secondary": "#94A3B8",
            "muted": "#64748B"
        },
        "accent": {
            "error": "#EF4444",
            "warning": "#F59E0B",
            "success": "#10B981"
        }
    })
}

/// The VeriTrust typography system.
pub fn brand_typography() -> Value {
    json!({
        "fonts": {
            "primary": "Outfit",
            "secondary": "Inter",
            "mono": "JetBrains Mono"
        },
        "scale": {
            "h1": { "size": "72px", "weight": "700", "tracking": "-0.02em" },
            "h2": { "size": "48px", "weight": "600", "tracking": "-0.01em" },
            "h3": { "size": "32px", "weight": "500", "tracking": "0" },
            "body": { "size": "18px", "weight": "400", "tracking": "0" },
            "caption": { "size": "14px", "weight": "500", "tracking": "0.05em" }
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn colors_carry_all_documented_sections() {
        let colors = brand_colors();
        for key in ["primary", "secondary", "background", "text", "accent"] {
            assert!(colors.get(key).is_some(), "missing section {}", key);
        }
        assert_eq!(colors["primary"]["main"], "#00FF94");
        assert_eq!(colors["background"]["name"], "Deep Obsidian");
    }

    #[test]
    fn typography_carries_fonts_and_scale() {
        let typography = brand_typography();
        assert!(typography.get("fonts").is_some());
        assert!(typography.get("scale").is_some());
        assert_eq!(typography["fonts"]["primary"], "Outfit");
        assert_eq!(typography["scale"]["h1"]["size"], "72px");
    }

    #[test]
    fn payloads_are_constant_across_calls() {
        assert_eq!(brand_colors(), brand_colors());
        assert_eq!(brand_typography(), brand_typography());
    }
}
