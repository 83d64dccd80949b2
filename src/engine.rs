use crate::colour::colours;
use crate::document::Document;
use crate::error::AwbError;
use crate::font::{Face, Font};
use crate::info::Info;
use crate::layout::{wrap_text, Cursor, Margins};
use crate::page::{Page, SpanFont, SpanLayout};
use crate::pagesize::{self, PageSize};
use crate::record::{
    AirWaybill, ChargesDeclaration, ChargesSummary, ConsignmentInfo, ExecutionInfo,
    FlightBookingInfo, OtherCharge, PartyInfo, RateLineItem,
};
use crate::units::{Mm, Pt};
use id_arena::Id;
use pdf_writer::Content;

// Section box heights. The form is fixed-format: each box is drawn at its
// nominal height and the text flows over it when a field wraps further than
// the box was designed for. Overflow is tolerated, never reflowed.
const PARTY_BOX_HEIGHT: Pt = Pt(70.0);
const AGENT_BOX_HEIGHT: Pt = Pt(52.0);
const FLIGHT_BOX_HEIGHT: Pt = Pt(60.0);
const CHARGES_BOX_HEIGHT: Pt = Pt(60.0);
const OTHER_CHARGES_BOX_HEIGHT: Pt = Pt(42.0);
const SUMMARY_BOX_HEIGHT: Pt = Pt(70.0);
const EXECUTION_BOX_HEIGHT: Pt = Pt(52.0);

/// The rate schedule columns: header label and fraction of the content
/// width. The fractions sum to 1.0.
pub(crate) const RATE_COLUMNS: [(&str, f32); 9] = [
    ("Pcs RCP", 0.07),
    ("Gross Wt", 0.09),
    ("Unit", 0.05),
    ("Cls", 0.06),
    ("Item No", 0.09),
    ("Chrg Wt", 0.09),
    ("Rate/Chg", 0.09),
    ("Total", 0.12),
    ("Nature and Quantity of Goods", 0.34),
];

/// The only column whose cell text word-wraps (and grows its row)
pub(crate) const NATURE_COLUMN: usize = 8;

/// Fixed geometry of the printed form. The defaults describe the A4 waybill;
/// the struct is plain data so a caller can derive a variant (letter paper,
/// larger type) without touching the engine.
#[derive(Debug, Clone)]
pub struct PageStyle {
    pub size: PageSize,
    pub margins: Margins,
    /// Size of section titles, set in the bold face
    pub title_size: Pt,
    /// Size of field and cell text
    pub text_size: Pt,
    /// Advance from a box top to the first field line inside it
    pub header_offset: Pt,
    /// Advance between a section's last line and the next section's box
    pub section_gap: Pt,
    /// Horizontal gap between the two side-by-side columns
    pub column_gutter: Pt,
    /// Vertical space that must remain under the cursor for the rate
    /// schedule to start on the current page
    pub footer_reserve: Pt,
    /// Nominal height of one rate schedule row
    pub table_row_height: Pt,
    /// Height of the rate schedule header row
    pub table_header_height: Pt,
    /// Inset between a cell or box border and the text inside it
    pub cell_padding: Pt,
}

impl Default for PageStyle {
    fn default() -> PageStyle {
        PageStyle {
            size: pagesize::A4,
            margins: Margins::all(Mm(12.0)),
            title_size: Pt(9.0),
            text_size: Pt(8.0),
            header_offset: Pt(14.0),
            section_gap: Pt(6.0),
            column_gutter: Pt(8.0),
            footer_reserve: Pt(160.0),
            table_row_height: Pt(16.0),
            table_header_height: Pt(18.0),
            cell_padding: Pt(3.0),
        }
    }
}

/// The finished artifact: rendered bytes plus the derived file name, ready to
/// hand to an [OutputSink](crate::OutputSink)
#[derive(Debug, Clone, PartialEq)]
pub struct Artifact {
    pub file_name: String,
    pub bytes: Vec<u8>,
}

/// Artifact identifier for a waybill render: `LTA_<number>.pdf`, falling back
/// to `LTA_document.pdf` when the waybill number is absent
pub fn artifact_name(waybill_number: &str) -> String {
    let stem = waybill_number.trim();
    let stem = if stem.is_empty() { "document" } else { stem };
    format!("LTA_{stem}.pdf")
}

/// The fonts every form render registers on its document
pub(crate) struct FormFonts {
    pub regular: Id<Font>,
    pub bold: Id<Font>,
}

pub(crate) fn add_form_fonts(doc: &mut Document) -> FormFonts {
    FormFonts {
        regular: doc.add_font(Font::builtin(Face::Courier)),
        bold: doc.add_font(Font::builtin(Face::CourierBold)),
    }
}

/// Stroke a section or cell outline with its top edge at `top`
pub(crate) fn stroke_box(page: &mut Page, x: Pt, top: Pt, width: Pt, height: Pt) {
    let mut content = Content::new();
    content.set_line_width(0.8);
    content.set_stroke_gray(0.0);
    content.rect(x.0, (top - height).0, width.0, height.0);
    content.stroke();
    page.add_content(content);
}

/// Emit a bold section title just inside the top-left corner of its box
pub(crate) fn title_span(
    style: &PageStyle,
    doc: &Document,
    page: &mut Page,
    fonts: &FormFonts,
    title: &str,
    x: Pt,
    top: Pt,
) {
    let size = style.title_size;
    let font = &doc.fonts[fonts.bold];
    page.add_span(SpanLayout {
        text: title.to_string(),
        font: SpanFont {
            id: fonts.bold,
            size,
        },
        colour: colours::BLACK,
        coords: (
            x + style.cell_padding,
            top - style.cell_padding - font.ascent(size),
        ),
    });
}

/// Emit one `LABEL: value` line, wrapped to the section width. The returned
/// cursor has advanced past every wrapped line, so long values push the rest
/// of the form down proportionally.
#[allow(clippy::too_many_arguments)]
pub(crate) fn field_line(
    style: &PageStyle,
    doc: &Document,
    page: &mut Page,
    font_id: Id<Font>,
    x: Pt,
    width: Pt,
    label: &str,
    value: &str,
    cur: Cursor,
) -> Cursor {
    let font = &doc.fonts[font_id];
    let size = style.text_size;
    let text = if label.is_empty() {
        value.to_string()
    } else {
        format!("{label}: {value}")
    };
    let lines = wrap_text(&text, font, size, width - style.cell_padding * 2.0);

    let mut cur = cur;
    for line in lines {
        if !line.is_empty() {
            page.add_span(SpanLayout {
                text: line,
                font: SpanFont { id: font_id, size },
                colour: colours::BLACK,
                coords: (x + style.cell_padding, cur.y - font.ascent(size)),
            });
        }
        cur = cur.advanced(font.line_height(size));
    }
    cur
}

/// Render one bordered section: box, bold title, then the field lines.
/// Returns the cursor after the last field line (the caller adds the
/// inter-section gap).
#[allow(clippy::too_many_arguments)]
pub(crate) fn boxed_section(
    style: &PageStyle,
    doc: &Document,
    page: &mut Page,
    fonts: &FormFonts,
    title: &str,
    x: Pt,
    width: Pt,
    height: Pt,
    fields: &[(&str, String)],
    cur: Cursor,
) -> Cursor {
    stroke_box(page, x, cur.y, width, height);
    title_span(style, doc, page, fonts, title, x, cur.y);

    let mut inner = cur.advanced(style.header_offset);
    for (label, value) in fields.iter() {
        inner = field_line(
            style,
            doc,
            page,
            fonts.regular,
            x,
            width,
            label,
            value,
            inner,
        );
    }
    inner
}

fn payment_terms(charges: &ChargesDeclaration) -> &'static str {
    match (charges.prepaid, charges.collect) {
        (true, false) => "PREPAID",
        (false, true) => "COLLECT",
        (true, true) => "PREPAID / COLLECT",
        (false, false) => "",
    }
}

/// The document layout engine: turns one [AirWaybill] record into a
/// paginated, fixed-format printable document.
///
/// One render is one synchronous pass down the page: a single cursor value
/// advances top-to-bottom, each section draws its box and fields at the
/// cursor, and the only overflow check happens just before the rate
/// schedule. The record is borrowed immutably and never retained, so the
/// same engine value can render any number of records, concurrently or not.
#[derive(Debug, Clone, Default)]
pub struct WaybillLayout {
    pub style: PageStyle,
    /// Optional document metadata. Leave the creation date unset to keep
    /// renders byte-reproducible.
    pub info: Option<Info>,
}

impl WaybillLayout {
    pub fn new() -> WaybillLayout {
        WaybillLayout::default()
    }

    pub fn with_style(style: PageStyle) -> WaybillLayout {
        WaybillLayout { style, info: None }
    }

    /// Attach document metadata to subsequent renders
    pub fn set_info(&mut self, info: Info) -> &mut Self {
        self.info = Some(info);
        self
    }

    /// Lay the record out into a [Document] without serializing it. Exposed
    /// so callers (and the crate's tests) can inspect pages and spans.
    pub fn layout(&self, awb: &AirWaybill) -> Document {
        let mut doc = Document::default();
        if let Some(info) = &self.info {
            doc.set_info(info.clone());
        }
        let fonts = add_form_fonts(&mut doc);

        let mut page = self.blank_page();
        let mut cur = Cursor::at(page.content_box.y2);

        cur = self.header(&doc, &mut page, &fonts, &awb.consignment, cur);
        cur = self.party_section(&doc, &mut page, &fonts, "SHIPPER", &awb.shipper, cur);
        cur = self.party_section(&doc, &mut page, &fonts, "CONSIGNEE", &awb.consignee, cur);
        cur = self.agent_and_consignment(&doc, &mut page, &fonts, awb, cur);
        cur = self.flight_section(&doc, &mut page, &fonts, &awb.flight, cur);
        cur = self.charges_section(&doc, &mut page, &fonts, &awb.charges, cur);

        // the single overflow check: the rate schedule starts on a fresh page
        // when the cursor has run into the reserved footer space. Earlier
        // sections never paginate.
        if cur.y < page.content_box.y1 + self.style.footer_reserve {
            log::debug!("page break before rate schedule at y={}", cur.y);
            let full = std::mem::replace(&mut page, self.blank_page());
            doc.add_page(full);
            cur = Cursor::at(page.content_box.y2);
        }

        cur = self.rate_table(&doc, &mut page, &fonts, &awb.rate_lines, cur);
        if !awb.other_charges.is_empty() {
            cur = self.other_charges_section(&doc, &mut page, &fonts, &awb.other_charges, cur);
        }
        cur = self.summary_section(&doc, &mut page, &fonts, &awb.summary, cur);
        self.execution_section(&doc, &mut page, &fonts, &awb.execution, cur);

        doc.add_page(page);
        doc
    }

    /// Render the record and serialize it: the complete engine contract.
    /// Either the full artifact comes back or an error does; no partial
    /// output is ever exposed.
    pub fn render(&self, awb: &AirWaybill) -> Result<Artifact, AwbError> {
        let document = self.layout(awb);
        let mut bytes = Vec::new();
        document.write(&mut bytes)?;
        Ok(Artifact {
            file_name: artifact_name(&awb.consignment.waybill_number),
            bytes,
        })
    }

    fn blank_page(&self) -> Page {
        Page::new(self.style.size, Some(self.style.margins.clone()))
    }

    fn header(
        &self,
        doc: &Document,
        page: &mut Page,
        fonts: &FormFonts,
        consignment: &ConsignmentInfo,
        cur: Cursor,
    ) -> Cursor {
        let size = Pt(11.0);
        let font = &doc.fonts[fonts.bold];
        let baseline = cur.y - font.ascent(size);

        if !consignment.waybill_number.is_empty() {
            page.add_span(SpanLayout {
                text: consignment.waybill_number.clone(),
                font: SpanFont {
                    id: fonts.bold,
                    size,
                },
                colour: colours::BLACK,
                coords: (page.content_box.x1, baseline),
            });
        }

        let title = "AIR WAYBILL / LTA";
        page.add_span(SpanLayout {
            text: title.to_string(),
            font: SpanFont {
                id: fonts.bold,
                size,
            },
            colour: colours::BLACK,
            coords: (
                page.content_box.x2 - font.width_of(title, size),
                baseline,
            ),
        });

        // rule under the header strip
        let rule_y = cur.y - font.line_height(size) - Pt(2.0);
        let mut content = Content::new();
        content.set_line_width(1.2);
        content.set_stroke_gray(0.0);
        content.move_to(page.content_box.x1.0, rule_y.0);
        content.line_to(page.content_box.x2.0, rule_y.0);
        content.stroke();
        page.add_content(content);

        Cursor::at(rule_y).advanced(self.style.section_gap)
    }

    fn party_section(
        &self,
        doc: &Document,
        page: &mut Page,
        fonts: &FormFonts,
        title: &str,
        party: &PartyInfo,
        cur: Cursor,
    ) -> Cursor {
        let fields = [
            ("Account No", party.account_number.clone()),
            ("Name", party.name.clone()),
            ("Address", party.address.clone()),
            ("City", party.city.clone()),
            ("Country", party.country.clone()),
            ("Postal Code", party.postal_code.clone()),
        ];
        let end = boxed_section(
            &self.style,
            doc,
            page,
            fonts,
            title,
            page.content_box.x1,
            page.content_box.width(),
            PARTY_BOX_HEIGHT,
            &fields,
            cur,
        );
        end.advanced(self.style.section_gap)
    }

    /// The two-column row: issuing agent on the left, consignment details on
    /// the right, both starting at the same offset. The page cursor advances
    /// past the left column only; the right column is bounded by the same box
    /// height, so its own end offset is discarded.
    fn agent_and_consignment(
        &self,
        doc: &Document,
        page: &mut Page,
        fonts: &FormFonts,
        awb: &AirWaybill,
        cur: Cursor,
    ) -> Cursor {
        let x = page.content_box.x1;
        let col_width = (page.content_box.width() - self.style.column_gutter) / 2.0;
        let right_x = x + col_width + self.style.column_gutter;

        let agent_fields = [
            ("Name", awb.agent.name.clone()),
            ("City", awb.agent.city.clone()),
            ("IATA Code", awb.agent.iata_code.clone()),
            ("Account No", awb.agent.account_number.clone()),
        ];
        let left_end = boxed_section(
            &self.style,
            doc,
            page,
            fonts,
            "ISSUING CARRIER'S AGENT",
            x,
            col_width,
            AGENT_BOX_HEIGHT,
            &agent_fields,
            cur,
        );

        let consignment_fields = [
            ("Waybill No", awb.consignment.waybill_number.clone()),
            ("Origin Airport", awb.consignment.origin_airport.clone()),
            ("Issued By", awb.consignment.issued_by.clone()),
            ("Issuer", awb.consignment.issuer.clone()),
        ];
        let _right_end = boxed_section(
            &self.style,
            doc,
            page,
            fonts,
            "CONSIGNMENT",
            right_x,
            col_width,
            AGENT_BOX_HEIGHT,
            &consignment_fields,
            cur,
        );

        left_end.advanced(self.style.section_gap)
    }

    fn flight_section(
        &self,
        doc: &Document,
        page: &mut Page,
        fonts: &FormFonts,
        flight: &FlightBookingInfo,
        cur: Cursor,
    ) -> Cursor {
        let fields = [
            ("Departure", flight.departure.clone()),
            ("Route", flight.route.clone()),
            ("Destination", flight.destination.clone()),
            ("Flight/Date", flight.flight_date.clone()),
            ("Carrier", flight.carrier.clone()),
        ];
        let end = boxed_section(
            &self.style,
            doc,
            page,
            fonts,
            "ROUTING AND BOOKING",
            page.content_box.x1,
            page.content_box.width(),
            FLIGHT_BOX_HEIGHT,
            &fields,
            cur,
        );
        end.advanced(self.style.section_gap)
    }

    fn charges_section(
        &self,
        doc: &Document,
        page: &mut Page,
        fonts: &FormFonts,
        charges: &ChargesDeclaration,
        cur: Cursor,
    ) -> Cursor {
        let fields = [
            ("Currency", charges.currency.clone()),
            ("Declared Value for Carriage", charges.declared_carriage.clone()),
            ("Declared Value for Customs", charges.declared_customs.clone()),
            ("Insurance", charges.insurance.clone()),
            ("Payment", payment_terms(charges).to_string()),
        ];
        let end = boxed_section(
            &self.style,
            doc,
            page,
            fonts,
            "CHARGES DECLARATION",
            page.content_box.x1,
            page.content_box.width(),
            CHARGES_BOX_HEIGHT,
            &fields,
            cur,
        );
        end.advanced(self.style.section_gap)
    }

    fn rate_table(
        &self,
        doc: &Document,
        page: &mut Page,
        fonts: &FormFonts,
        lines: &[RateLineItem],
        cur: Cursor,
    ) -> Cursor {
        let style = &self.style;
        let x0 = page.content_box.x1;
        let total_width = page.content_box.width();
        let font = &doc.fonts[fonts.regular];
        let bold = &doc.fonts[fonts.bold];
        let cell_size = style.text_size;
        let header_size = Pt(6.5);

        // header row: one bordered cell per column, always emitted
        let header_h = style.table_header_height;
        let mut content = Content::new();
        content.set_line_width(0.8);
        content.set_stroke_gray(0.0);
        let mut x = x0;
        for (_, frac) in RATE_COLUMNS.iter() {
            let w = total_width * *frac;
            content.rect(x.0, (cur.y - header_h).0, w.0, header_h.0);
            x += w;
        }
        content.stroke();
        page.add_content(content);

        let mut x = x0;
        for (title, frac) in RATE_COLUMNS.iter() {
            page.add_span(SpanLayout {
                text: (*title).to_string(),
                font: SpanFont {
                    id: fonts.bold,
                    size: header_size,
                },
                colour: colours::BLACK,
                coords: (
                    x + style.cell_padding,
                    cur.y - style.cell_padding - bold.ascent(header_size),
                ),
            });
            x += total_width * *frac;
        }
        let mut cur = cur.advanced(header_h);

        let nature_text_width =
            total_width * RATE_COLUMNS[NATURE_COLUMN].1 - style.cell_padding * 2.0;

        for item in lines.iter() {
            let wrapped = wrap_text(&item.nature_goods, font, cell_size, nature_text_width);
            // only the designated column grows its row; every other cell is
            // single-line and clips rather than reflowing
            let grown =
                style.cell_padding * 2.0 + font.line_height(cell_size) * wrapped.len() as f32;
            let row_h = if grown.0 > style.table_row_height.0 {
                grown
            } else {
                style.table_row_height
            };

            let mut content = Content::new();
            content.set_line_width(0.6);
            content.set_stroke_gray(0.0);
            let mut x = x0;
            for (_, frac) in RATE_COLUMNS.iter() {
                let w = total_width * *frac;
                content.rect(x.0, (cur.y - row_h).0, w.0, row_h.0);
                x += w;
            }
            content.stroke();
            page.add_content(content);

            let cells = [
                &item.pieces,
                &item.gross_weight,
                &item.weight_unit,
                &item.rate_class,
                &item.item_number,
                &item.chargeable_weight,
                &item.rate,
                &item.total,
            ];
            let baseline = cur.y - style.cell_padding - font.ascent(cell_size);
            let mut x = x0;
            for (ci, text) in cells.iter().enumerate() {
                if !text.is_empty() {
                    page.add_span(SpanLayout {
                        text: (*text).clone(),
                        font: SpanFont {
                            id: fonts.regular,
                            size: cell_size,
                        },
                        colour: colours::BLACK,
                        coords: (x + style.cell_padding, baseline),
                    });
                }
                x += total_width * RATE_COLUMNS[ci].1;
            }

            let mut line_y = baseline;
            for line in wrapped {
                if !line.is_empty() {
                    page.add_span(SpanLayout {
                        text: line,
                        font: SpanFont {
                            id: fonts.regular,
                            size: cell_size,
                        },
                        colour: colours::BLACK,
                        coords: (x + style.cell_padding, line_y),
                    });
                }
                line_y = line_y - font.line_height(cell_size);
            }

            cur = cur.advanced(row_h);
        }

        log::debug!("rate schedule: {} rows", lines.len());
        cur.advanced(style.section_gap)
    }

    fn other_charges_section(
        &self,
        doc: &Document,
        page: &mut Page,
        fonts: &FormFonts,
        charges: &[OtherCharge],
        cur: Cursor,
    ) -> Cursor {
        let fields: Vec<(&str, String)> = charges
            .iter()
            .map(|c| {
                (
                    "",
                    format!("{}  {}  ({})", c.description, c.amount, c.entitlement),
                )
            })
            .collect();
        let end = boxed_section(
            &self.style,
            doc,
            page,
            fonts,
            "OTHER CHARGES",
            page.content_box.x1,
            page.content_box.width(),
            OTHER_CHARGES_BOX_HEIGHT,
            &fields,
            cur,
        );
        end.advanced(self.style.section_gap)
    }

    fn summary_section(
        &self,
        doc: &Document,
        page: &mut Page,
        fonts: &FormFonts,
        summary: &ChargesSummary,
        cur: Cursor,
    ) -> Cursor {
        let fields = [
            ("Weight Charge", summary.weight_charge.clone()),
            ("Valuation Charge", summary.valuation_charge.clone()),
            ("Tax", summary.tax.clone()),
            ("Other Charges Due Agent", summary.other_due_agent.clone()),
            ("Other Charges Due Carrier", summary.other_due_carrier.clone()),
            ("TOTAL", summary.total.clone()),
        ];
        let end = boxed_section(
            &self.style,
            doc,
            page,
            fonts,
            "CHARGES SUMMARY",
            page.content_box.x1,
            page.content_box.width(),
            SUMMARY_BOX_HEIGHT,
            &fields,
            cur,
        );
        end.advanced(self.style.section_gap)
    }

    fn execution_section(
        &self,
        doc: &Document,
        page: &mut Page,
        fonts: &FormFonts,
        execution: &ExecutionInfo,
        cur: Cursor,
    ) -> Cursor {
        let fields = [
            ("Executed On", execution.date.clone()),
            ("At", execution.place.clone()),
            ("Shipper", execution.shipper_signature.clone()),
            ("Carrier", execution.carrier_signature.clone()),
        ];
        let end = boxed_section(
            &self.style,
            doc,
            page,
            fonts,
            "EXECUTION",
            page.content_box.x1,
            page.content_box.width(),
            EXECUTION_BOX_HEIGHT,
            &fields,
            cur,
        );
        end.advanced(self.style.section_gap)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn artifact_name_uses_waybill_number() {
        assert_eq!(artifact_name("LTA123"), "LTA_LTA123.pdf");
    }

    #[test]
    fn artifact_name_falls_back_when_absent() {
        assert_eq!(artifact_name(""), "LTA_document.pdf");
        assert_eq!(artifact_name("   "), "LTA_document.pdf");
    }

    #[test]
    fn rate_columns_span_the_content_width() {
        let sum: f32 = RATE_COLUMNS.iter().map(|(_, frac)| frac).sum();
        assert!((sum - 1.0).abs() < 1e-5);
    }

    #[test]
    fn payment_terms_reflects_the_flags() {
        let mut charges = ChargesDeclaration::default();
        assert_eq!(payment_terms(&charges), "");
        charges.prepaid = true;
        assert_eq!(payment_terms(&charges), "PREPAID");
        charges.collect = true;
        assert_eq!(payment_terms(&charges), "PREPAID / COLLECT");
        charges.prepaid = false;
        assert_eq!(payment_terms(&charges), "COLLECT");
    }
}
