use crate::font::Font;
use crate::page::Page;
use crate::units::Pt;

/// Calculates the vertical offset from a text coordinate to the font's
/// baseline.
///
/// In PDF, text coordinates specify the baseline position. This function
/// returns the negative ascent value, which can be added to a y-coordinate to
/// account for the font's ascender height when positioning text from a top
/// reference point.
pub fn baseline_offset(font: &Font, size: Pt) -> Pt {
    Pt(0.0) - font.ascent(size)
}

/// Calculates the coordinates of where text can start on a page to be just
/// within the top left margin, taking into account the ascending height of
/// the font and the font size.
pub fn baseline_start(page: &Page, font: &Font, size: Pt) -> (Pt, Pt) {
    let ascent = baseline_offset(font, size);
    let x = page.content_box.x1;
    let y = page.content_box.y2 + ascent;
    (x, y)
}

/// Calculate the width of a given string of text given the font and font size
pub fn width_of_text(text: &str, font: &Font, size: Pt) -> Pt {
    font.width_of(text, size)
}

/// Greedy word wrap at a fixed column width, returning whole lines.
///
/// Fixed-pitch metrics make the column a character count, so the wrap is
/// exact: a line never exceeds `max_width`. Words wider than the column on
/// their own are hard-split at the column boundary rather than overflowing.
/// Always returns at least one (possibly empty) line, so callers can advance
/// their cursor by `lines.len()` unconditionally.
pub fn wrap_text(text: &str, font: &Font, size: Pt, max_width: Pt) -> Vec<String> {
    let advance = font.char_advance(size);
    let cols = ((max_width.0 / advance.0).floor() as usize).max(1);

    let mut lines: Vec<String> = Vec::new();
    let mut current = String::new();

    for word in text.split_whitespace() {
        let mut word = word;

        // a word wider than the column is split at the column boundary
        while word.chars().count() > cols {
            if !current.is_empty() {
                lines.push(std::mem::take(&mut current));
            }
            let split = word
                .char_indices()
                .nth(cols)
                .map(|(i, _)| i)
                .unwrap_or(word.len());
            let (head, tail) = word.split_at(split);
            lines.push(head.to_string());
            word = tail;
        }
        if word.is_empty() {
            continue;
        }

        let sep = if current.is_empty() { 0 } else { 1 };
        if current.chars().count() + sep + word.chars().count() > cols {
            lines.push(std::mem::take(&mut current));
            current.push_str(word);
        } else {
            if sep == 1 {
                current.push(' ');
            }
            current.push_str(word);
        }
    }

    if !current.is_empty() {
        lines.push(current);
    }
    if lines.is_empty() {
        lines.push(String::new());
    }
    lines
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::font::Face;

    fn courier() -> Font {
        Font::builtin(Face::Courier)
    }

    // size 10 Courier advances 6pt per glyph, so 60pt fits 10 characters
    const TEN_COLS: Pt = Pt(60.0);

    #[test]
    fn short_text_stays_on_one_line() {
        let lines = wrap_text("SHIPPER", &courier(), Pt(10.0), TEN_COLS);
        assert_eq!(lines, vec!["SHIPPER".to_string()]);
    }

    #[test]
    fn wraps_at_word_boundaries() {
        let lines = wrap_text("lorem ipsum dolor", &courier(), Pt(10.0), TEN_COLS);
        assert_eq!(
            lines,
            vec![
                "lorem".to_string(),
                "ipsum".to_string(),
                "dolor".to_string()
            ]
        );
    }

    #[test]
    fn packs_words_that_fit_together() {
        let lines = wrap_text("rue de la paix", &courier(), Pt(10.0), TEN_COLS);
        assert_eq!(lines, vec!["rue de la".to_string(), "paix".to_string()]);
    }

    #[test]
    fn hard_splits_oversized_words() {
        let lines = wrap_text("ABCDEFGHIJKLMNOP", &courier(), Pt(10.0), TEN_COLS);
        assert_eq!(lines, vec!["ABCDEFGHIJ".to_string(), "KLMNOP".to_string()]);
    }

    #[test]
    fn empty_text_is_a_single_empty_line() {
        let lines = wrap_text("", &courier(), Pt(10.0), TEN_COLS);
        assert_eq!(lines, vec![String::new()]);
    }

    #[test]
    fn exact_width_measurement() {
        let w = width_of_text("0123456789", &courier(), Pt(10.0));
        assert!((w.0 - TEN_COLS.0).abs() < f32::EPSILON);
    }
}
