use crate::{
    refs::{ObjectReferences, RefType},
    Pt,
};
use id_arena::Id;
use pdf_writer::{Name, Pdf};

/// Form line pitch relative to the nominal font size. The waybill is laid
/// out on a typewriter grid, so lines advance slightly more than one em.
const LINE_PITCH: f32 = 1.15;

/// One of the PDF base-14 faces used for form output. The waybill is a
/// fixed-pitch form, so the Courier family covers everything that is emitted;
/// viewers supply these faces themselves and nothing is embedded in the file.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Face {
    Courier,
    CourierBold,
    CourierOblique,
}

impl Face {
    /// The `BaseFont` name the face is registered under in the PDF
    pub fn base_name(&self) -> &'static str {
        match self {
            Face::Courier => "Courier",
            Face::CourierBold => "Courier-Bold",
            Face::CourierOblique => "Courier-Oblique",
        }
    }

    // Standard AFM vertical metrics for the Courier family, in 1/1000 em.
    const ASCENDER: f32 = 629.0;
    const DESCENDER: f32 = -157.0;
    // Every Courier glyph advances exactly 600/1000 em, which makes text
    // measurement exact rather than an estimate.
    const ADVANCE: f32 = 600.0;
}

/// A font usable on pages of a [Document](crate::Document). Only the built-in
/// Courier family is supported: the form needs exact measurement more than it
/// needs typographic variety, and the fixed advance of 600/1000 em gives the
/// layout engine column arithmetic that is correct by construction.
///
/// Typically fonts are referred to throughout the crate by the [Id] returned
/// from [Document::add_font](crate::Document::add_font).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Font {
    pub face: Face,
}

impl Font {
    /// Wrap one of the built-in faces for use in a document
    pub fn builtin(face: Face) -> Font {
        Font { face }
    }

    /// Calculate the ascent (distance from the baseline to the top of the
    /// font) for the given font size
    pub fn ascent(&self, size: Pt) -> Pt {
        size * (Face::ASCENDER / 1000.0)
    }

    /// Calculate the descent (distance from the baseline to the bottom of the
    /// font) for the given font size. Note: this is negative
    pub fn descent(&self, size: Pt) -> Pt {
        size * (Face::DESCENDER / 1000.0)
    }

    /// The vertical offset between two consecutive lines of text at the given
    /// size
    pub fn line_height(&self, size: Pt) -> Pt {
        size * LINE_PITCH
    }

    /// The horizontal advance of any single glyph at the given size
    pub fn char_advance(&self, size: Pt) -> Pt {
        size * (Face::ADVANCE / 1000.0)
    }

    /// Calculate the width of a string of text at the given size. Fixed
    /// pitch: the width is the character count times the glyph advance.
    pub fn width_of(&self, text: &str, size: Pt) -> Pt {
        self.char_advance(size) * text.chars().count() as f32
    }

    pub(crate) fn write(&self, refs: &mut ObjectReferences, id: Id<Font>, writer: &mut Pdf) {
        let font_index = id.index();
        let font_id = refs.gen(RefType::Font(font_index));

        let mut font = writer.type1_font(font_id);
        font.base_font(Name(self.face.base_name().as_bytes()));
        font.encoding_predefined(Name(b"WinAnsiEncoding"));
    }
}

/// Encode span text for a WinAnsi `Tj` operand. Characters outside the
/// encoding degrade to a question mark; the caller pre-sanitizes anything it
/// cares about.
pub(crate) fn encode_winansi(text: &str) -> Vec<u8> {
    text.chars().map(winansi_byte).collect()
}

fn winansi_byte(ch: char) -> u8 {
    match ch {
        ' '..='~' => ch as u8,
        '\u{a0}'..='\u{ff}' => ch as u8,
        '\u{20ac}' => 0x80, // euro sign
        '\u{2018}' => 0x91,
        '\u{2019}' => 0x92,
        '\u{201c}' => 0x93,
        '\u{201d}' => 0x94,
        '\u{2022}' => 0x95,
        '\u{2013}' => 0x96,
        '\u{2014}' => 0x97,
        _ => b'?',
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn width_is_exact_for_fixed_pitch() {
        let font = Font::builtin(Face::Courier);
        let w = font.width_of("0123456789", Pt(10.0));
        assert!((w.0 - 60.0).abs() < f32::EPSILON);
    }

    #[test]
    fn winansi_passes_ascii_and_latin1() {
        assert_eq!(encode_winansi("AWB 123"), b"AWB 123".to_vec());
        assert_eq!(encode_winansi("Alg\u{e9}rie"), b"Alg\xe9rie".to_vec());
    }

    #[test]
    fn winansi_degrades_unknown_glyphs() {
        assert_eq!(encode_winansi("\u{4e2d}"), b"?".to_vec());
        assert_eq!(encode_winansi("\u{2013}"), vec![0x96]);
    }
}
