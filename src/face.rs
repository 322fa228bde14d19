//! Deterministic face synthesis.
//!
//! A seed string is hashed into a bounded index space and decoded into
//! independent visual attributes. The same seed always yields the same
//! [`FaceSpec`] and therefore the same SVG markup, across processes and
//! machines: no random state, no wall clock, and no text/font dependence.

use crate::raster::{FRAME_HEIGHT, FRAME_WIDTH};

const OUTLINE: &str = "#2e2622";
const EYE_WHITE: &str = "#ffffff";

const SKIN_TONES: [&str; 6] = [
    "#ffd5b8", "#f2b388", "#d99e6b", "#b97f4f", "#8c5a33", "#5d3a1f",
];

const BACKGROUNDS: [&str; 5] = ["#e8f4fd", "#fdeee8", "#edfbe8", "#f6e8fd", "#fdf8e1"];

/// Total number of distinct faces: 4 * 6 * 5 * 6 * 4 * 5 = 14,400.
pub const PARAM_COMBINATIONS: u64 = (FaceShape::ALL.len()
    * SKIN_TONES.len()
    * EyeStyle::ALL.len()
    * MouthStyle::ALL.len()
    * Accessory::ALL.len()
    * BACKGROUNDS.len()) as u64;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
pub enum FaceShape {
    Round,
    Oval,
    Squarish,
    Wide,
}

impl FaceShape {
    pub const ALL: [FaceShape; 4] = [
        FaceShape::Round,
        FaceShape::Oval,
        FaceShape::Squarish,
        FaceShape::Wide,
    ];
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
pub enum EyeStyle {
    Dot,
    Ring,
    Wide,
    Sleepy,
    Sparkle,
}

impl EyeStyle {
    pub const ALL: [EyeStyle; 5] = [
        EyeStyle::Dot,
        EyeStyle::Ring,
        EyeStyle::Wide,
        EyeStyle::Sleepy,
        EyeStyle::Sparkle,
    ];
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
pub enum MouthStyle {
    Smile,
    Grin,
    Frown,
    Neutral,
    Open,
    Smirk,
}

impl MouthStyle {
    pub const ALL: [MouthStyle; 6] = [
        MouthStyle::Smile,
        MouthStyle::Grin,
        MouthStyle::Frown,
        MouthStyle::Neutral,
        MouthStyle::Open,
        MouthStyle::Smirk,
    ];
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
pub enum Accessory {
    None,
    Blush,
    Eyebrows,
    Freckles,
}

impl Accessory {
    pub const ALL: [Accessory; 4] = [
        Accessory::None,
        Accessory::Blush,
        Accessory::Eyebrows,
        Accessory::Freckles,
    ];
}

/// The structured image description for one frame.
///
/// `skin_tone` and `background` index into the fixed palettes above.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
pub struct FaceSpec {
    pub shape: FaceShape,
    pub skin_tone: u8,
    pub eyes: EyeStyle,
    pub mouth: MouthStyle,
    pub accessory: Accessory,
    pub background: u8,
}

/// Map a seed string into the face index space.
///
/// Total over all strings, including the empty string.
pub fn seed_index(seed: &str) -> u64 {
    fnv1a64(seed.as_bytes()) % PARAM_COMBINATIONS
}

impl FaceSpec {
    pub fn from_seed(seed: &str) -> Self {
        Self::from_index(seed_index(seed))
    }

    /// Decode an index into attributes by mixed radix, least significant
    /// attribute first.
    pub fn from_index(index: u64) -> Self {
        let mut index = index % PARAM_COMBINATIONS;
        let background = take(&mut index, BACKGROUNDS.len()) as u8;
        let accessory = Accessory::ALL[take(&mut index, Accessory::ALL.len())];
        let mouth = MouthStyle::ALL[take(&mut index, MouthStyle::ALL.len())];
        let eyes = EyeStyle::ALL[take(&mut index, EyeStyle::ALL.len())];
        let skin_tone = take(&mut index, SKIN_TONES.len()) as u8;
        let shape = FaceShape::ALL[take(&mut index, FaceShape::ALL.len())];

        Self {
            shape,
            skin_tone,
            eyes,
            mouth,
            accessory,
            background,
        }
    }

    pub fn skin_color(&self) -> &'static str {
        SKIN_TONES[self.skin_tone as usize]
    }

    pub fn background_color(&self) -> &'static str {
        BACKGROUNDS[self.background as usize]
    }

    /// Emit the face as a 400x480 SVG document.
    ///
    /// Only rects, circles, ellipses and paths are used, so rasterization
    /// does not depend on installed fonts.
    pub fn to_svg(&self) -> String {
        let mut svg = String::with_capacity(2048);
        svg.push_str(&format!(
            r#"<svg xmlns="http://www.w3.org/2000/svg" width="{w}" height="{h}" viewBox="0 0 {w} {h}">"#,
            w = FRAME_WIDTH,
            h = FRAME_HEIGHT,
        ));
        svg.push_str(&format!(
            r#"<rect width="{w}" height="{h}" fill="{bg}"/>"#,
            w = FRAME_WIDTH,
            h = FRAME_HEIGHT,
            bg = self.background_color(),
        ));
        svg.push_str(&self.head_svg());
        svg.push_str(&self.eyes_svg());
        svg.push_str(&self.mouth_svg());
        svg.push_str(&self.accessory_svg());
        svg.push_str("</svg>");
        svg
    }

    fn head_svg(&self) -> String {
        let skin = self.skin_color();
        match self.shape {
            FaceShape::Round => format!(
                r#"<circle cx="200" cy="235" r="150" fill="{skin}" stroke="{OUTLINE}" stroke-width="6"/>"#
            ),
            FaceShape::Oval => format!(
                r#"<ellipse cx="200" cy="235" rx="130" ry="170" fill="{skin}" stroke="{OUTLINE}" stroke-width="6"/>"#
            ),
            FaceShape::Squarish => format!(
                r#"<rect x="70" y="95" width="260" height="290" rx="48" fill="{skin}" stroke="{OUTLINE}" stroke-width="6"/>"#
            ),
            FaceShape::Wide => format!(
                r#"<ellipse cx="200" cy="245" rx="165" ry="135" fill="{skin}" stroke="{OUTLINE}" stroke-width="6"/>"#
            ),
        }
    }

    fn eyes_svg(&self) -> String {
        let mut out = String::new();
        for x in [145u32, 255u32] {
            out.push_str(&match self.eyes {
                EyeStyle::Dot => format!(r#"<circle cx="{x}" cy="205" r="13" fill="{OUTLINE}"/>"#),
                EyeStyle::Ring => format!(
                    r#"<circle cx="{x}" cy="205" r="19" fill="none" stroke="{OUTLINE}" stroke-width="6"/><circle cx="{x}" cy="205" r="6" fill="{OUTLINE}"/>"#
                ),
                EyeStyle::Wide => format!(
                    r#"<circle cx="{x}" cy="205" r="21" fill="{EYE_WHITE}" stroke="{OUTLINE}" stroke-width="4"/><circle cx="{x}" cy="208" r="9" fill="{OUTLINE}"/>"#
                ),
                EyeStyle::Sleepy => format!(
                    r#"<path d="M{x0},205 Q{x},220 {x1},205" fill="none" stroke="{OUTLINE}" stroke-width="6" stroke-linecap="round"/>"#,
                    x0 = x - 22,
                    x1 = x + 22,
                ),
                EyeStyle::Sparkle => format!(
                    r#"<path d="M{x},188 L{x},222 M{x0},205 L{x1},205" fill="none" stroke="{OUTLINE}" stroke-width="6" stroke-linecap="round"/>"#,
                    x0 = x - 17,
                    x1 = x + 17,
                ),
            });
        }
        out
    }

    fn mouth_svg(&self) -> String {
        match self.mouth {
            MouthStyle::Smile => format!(
                r#"<path d="M150,300 Q200,348 250,300" fill="none" stroke="{OUTLINE}" stroke-width="8" stroke-linecap="round"/>"#
            ),
            MouthStyle::Grin => format!(
                r#"<path d="M148,298 Q200,360 252,298 Z" fill="{EYE_WHITE}" stroke="{OUTLINE}" stroke-width="6"/>"#
            ),
            MouthStyle::Frown => format!(
                r#"<path d="M150,330 Q200,288 250,330" fill="none" stroke="{OUTLINE}" stroke-width="8" stroke-linecap="round"/>"#
            ),
            MouthStyle::Neutral => format!(
                r#"<path d="M158,314 L242,314" fill="none" stroke="{OUTLINE}" stroke-width="8" stroke-linecap="round"/>"#
            ),
            MouthStyle::Open => {
                format!(r#"<ellipse cx="200" cy="318" rx="22" ry="30" fill="{OUTLINE}"/>"#)
            }
            MouthStyle::Smirk => format!(
                r#"<path d="M160,308 Q218,334 246,300" fill="none" stroke="{OUTLINE}" stroke-width="8" stroke-linecap="round"/>"#
            ),
        }
    }

    fn accessory_svg(&self) -> String {
        match self.accessory {
            Accessory::None => String::new(),
            Accessory::Blush => {
                r##"<circle cx="128" cy="258" r="17" fill="#f2a2a2" fill-opacity="0.55"/><circle cx="272" cy="258" r="17" fill="#f2a2a2" fill-opacity="0.55"/>"##
                    .to_string()
            }
            Accessory::Eyebrows => format!(
                r#"<path d="M122,172 Q145,160 168,172 M232,172 Q255,160 278,172" fill="none" stroke="{OUTLINE}" stroke-width="7" stroke-linecap="round"/>"#
            ),
            Accessory::Freckles => {
                let mut out = String::new();
                for (cx, cy) in [(150, 250), (165, 262), (180, 252), (220, 252), (235, 262), (250, 250)] {
                    out.push_str(&format!(
                        r#"<circle cx="{cx}" cy="{cy}" r="4" fill="{OUTLINE}" fill-opacity="0.5"/>"#
                    ));
                }
                out
            }
        }
    }
}

fn take(index: &mut u64, radix: usize) -> usize {
    let r = (*index % radix as u64) as usize;
    *index /= radix as u64;
    r
}

fn fnv1a64(bytes: &[u8]) -> u64 {
    let mut h = 0xcbf29ce484222325u64;
    for &b in bytes {
        h ^= u64::from(b);
        h = h.wrapping_mul(0x100000001b3);
    }
    h
}
