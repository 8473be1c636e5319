//! Prompt enrichment: wraps a narrative segment in style-specific modifiers.
//!
//! Pure string construction with no failure modes. The "Visual scene" framing
//! nudges the image backends toward rendering a scene rather than literal
//! text.

/// Fixed set of supported art styles. Unrecognized tags parse to
/// [`Style::Cinematic`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Style {
    Cinematic,
    Anime,
    Cyberpunk,
    Pixar,
    Watercolor,
}

impl Style {
    pub fn from_tag(tag: &str) -> Self {
        match tag {
            "anime" => Style::Anime,
            "cyberpunk" => Style::Cyberpunk,
            "pixar" => Style::Pixar,
            "watercolor" => Style::Watercolor,
            _ => Style::Cinematic,
        }
    }

    pub fn modifiers(self) -> &'static str {
        match self {
            Style::Cinematic => {
                "cinematic shot, 35mm film, bokeh, dramatic lighting, 8k, highly detailed, movie still, color graded"
            }
            Style::Anime => {
                "anime style, Studio Ghibli, Makoto Shinkai, vibrant colors, detailed background, 4k, cell shaded"
            }
            Style::Cyberpunk => {
                "cyberpunk city, neon lights, rain, futuristic, high tech, blade runner vibes, volumetric lighting"
            }
            Style::Pixar => {
                "3d render, pixar style, disney animation, cute, vibrant, volumetric lighting, c4d, unreal engine"
            }
            Style::Watercolor => {
                "watercolor painting, soft brush strokes, artistic, pastel colors, white background, illustration"
            }
        }
    }
}

/// Build the generation prompt for one segment.
pub fn enhance(segment: &str, style: Style) -> String {
    format!("Visual scene: {}. Art style: {}", segment, style.modifiers())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn anime_prompt_is_exact() {
        assert_eq!(
            enhance("a man walks", Style::from_tag("anime")),
            "Visual scene: a man walks. Art style: anime style, Studio Ghibli, Makoto Shinkai, \
             vibrant colors, detailed background, 4k, cell shaded"
        );
    }

    #[test]
    fn unknown_style_falls_back_to_cinematic() {
        assert_eq!(Style::from_tag("unknown-style"), Style::Cinematic);
        assert_eq!(
            enhance("a man walks", Style::from_tag("unknown-style")),
            enhance("a man walks", Style::Cinematic)
        );
    }

    #[test]
    fn every_known_tag_resolves() {
        for (tag, style) in [
            ("cinematic", Style::Cinematic),
            ("anime", Style::Anime),
            ("cyberpunk", Style::Cyberpunk),
            ("pixar", Style::Pixar),
            ("watercolor", Style::Watercolor),
        ] {
            assert_eq!(Style::from_tag(tag), style);
        }
    }
}
