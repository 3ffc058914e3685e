//! Brand prompt enrichment for image generation.
//!
//! Every caller prompt is wrapped in fixed styling text before it is sent
//! upstream; the caller always gets their original prompt back, never the
//! enriched one.

/// Wrap `prompt` in the VeriTrust brand-styling text, interpolating the
/// requested style adjective.
pub fn brand_prompt(prompt: &str, style: &str) -> String {
    format!(
        "Professional, high-quality {style} style image for VeriTrust AI FinTech company: {prompt}. \
         Style: Modern SaaS, enterprise-grade, clean, minimal, trustworthy. \
         Colors: Deep blue, neon green accents, white. \
         No text or logos in the image."
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn keeps_the_caller_prompt_verbatim() {
        let enriched = brand_prompt("a team reviewing dashboards", "realistic");
        assert!(enriched.contains("a team reviewing dashboards"));
    }

    #[test]
    fn interpolates_the_style_adjective() {
        let enriched = brand_prompt("a vault door", "isometric");
        assert!(enriched.contains("isometric style image"));
    }

    #[test]
    fn carries_the_fixed_brand_directives() {
        let enriched = brand_prompt("anything", "realistic");
        assert!(enriched.contains("VeriTrust AI FinTech company"));
        assert!(enriched.contains("No text or logos in the image."));
    }
}
