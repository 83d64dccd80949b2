use crate::colour::colours;
use crate::document::Document;
use crate::engine::{add_form_fonts, boxed_section, Artifact, PageStyle};
use crate::error::AwbError;
use crate::layout::Cursor;
use crate::page::{Page, SpanFont, SpanLayout};
use crate::units::Pt;
use serde::{Deserialize, Serialize};

/// A confirmed booking, as echoed back to the customer. Like the waybill
/// record, every field is pre-formatted by the caller.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct BookingConfirmation {
    pub reference: String,
    pub passenger_name: String,
    pub departure: String,
    pub destination: String,
    pub flight: String,
    pub departure_date: String,
    pub carrier: String,
}

/// Artifact identifier for a confirmation render, with the same fallback
/// rule as the waybill
pub fn confirmation_name(reference: &str) -> String {
    let stem = reference.trim();
    let stem = if stem.is_empty() { "document" } else { stem };
    format!("CONF_{stem}.pdf")
}

/// Renders the printable booking confirmation: a single fixed page sharing
/// the waybill's form style, with no tabular section and no pagination.
#[derive(Debug, Clone, Default)]
pub struct ConfirmationLayout {
    pub style: PageStyle,
}

impl ConfirmationLayout {
    pub fn new() -> ConfirmationLayout {
        ConfirmationLayout::default()
    }

    pub fn layout(&self, booking: &BookingConfirmation) -> Document {
        let mut doc = Document::default();
        let fonts = add_form_fonts(&mut doc);
        let mut page = Page::new(self.style.size, Some(self.style.margins.clone()));

        let title_size = Pt(13.0);
        let bold = &doc.fonts[fonts.bold];
        let title = "BOOKING CONFIRMATION";
        let x = page.content_box.x1
            + (page.content_box.width() - bold.width_of(title, title_size)) / 2.0;
        let mut cur = Cursor::at(page.content_box.y2);
        page.add_span(SpanLayout {
            text: title.to_string(),
            font: SpanFont {
                id: fonts.bold,
                size: title_size,
            },
            colour: colours::BLACK,
            coords: (x, cur.y - bold.ascent(title_size)),
        });
        cur = cur
            .advanced(bold.line_height(title_size))
            .advanced(self.style.section_gap * 2.0);

        let fields = [
            ("Reference", booking.reference.clone()),
            ("Passenger", booking.passenger_name.clone()),
            ("Departure", booking.departure.clone()),
            ("Destination", booking.destination.clone()),
            ("Flight", booking.flight.clone()),
            ("Date", booking.departure_date.clone()),
            ("Carrier", booking.carrier.clone()),
        ];
        let box_height = self.style.header_offset
            + doc.fonts[fonts.regular].line_height(self.style.text_size) * fields.len() as f32
            + self.style.cell_padding;
        let box_x = page.content_box.x1;
        let box_width = page.content_box.width();
        cur = boxed_section(
            &self.style,
            &doc,
            &mut page,
            &fonts,
            "RESERVATION",
            box_x,
            box_width,
            box_height,
            &fields,
            cur,
        );
        cur = cur.advanced(self.style.section_gap * 2.0);

        let regular = &doc.fonts[fonts.regular];
        let note = "Please present this confirmation with the accompanying documents at check-in.";
        page.add_span(SpanLayout {
            text: note.to_string(),
            font: SpanFont {
                id: fonts.regular,
                size: self.style.text_size,
            },
            colour: colours::BLACK,
            coords: (
                page.content_box.x1 + self.style.cell_padding,
                cur.y - regular.ascent(self.style.text_size),
            ),
        });

        doc.add_page(page);
        doc
    }

    pub fn render(&self, booking: &BookingConfirmation) -> Result<Artifact, AwbError> {
        let document = self.layout(booking);
        let mut bytes = Vec::new();
        document.write(&mut bytes)?;
        Ok(Artifact {
            file_name: confirmation_name(&booking.reference),
            bytes,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn confirmation_name_mirrors_the_waybill_rule() {
        assert_eq!(confirmation_name("BK-2041"), "CONF_BK-2041.pdf");
        assert_eq!(confirmation_name(""), "CONF_document.pdf");
    }
}
