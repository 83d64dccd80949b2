use crate::colour::Colour;
use crate::font::{encode_winansi, Font};
use crate::layout::Margins;
use crate::pagesize::PageSize;
use crate::rect::Rect;
use crate::refs::{ObjectReferences, RefType};
use crate::units::Pt;
use id_arena::{Arena, Id};
use pdf_writer::{Content, Filter, Finish, Name, Pdf, Str};

/// Which font a span is set in, referred to by the id the font was given by
/// [Document::add_font](crate::Document::add_font), and at what size
#[derive(Copy, Clone, PartialEq, Debug)]
pub struct SpanFont {
    pub id: Id<Font>,
    pub size: Pt,
}

/// A single run of text placed on a page. `coords` is the baseline start of
/// the run.
#[derive(Clone, PartialEq, Debug)]
pub struct SpanLayout {
    pub text: String,
    pub font: SpanFont,
    pub colour: Colour,
    pub coords: (Pt, Pt),
}

/// The contents of a page: laid-out text spans, or raw content streams used
/// for the form rules and boxes
#[derive(Clone, PartialEq, Debug)]
pub enum PageContents {
    Text(Vec<SpanLayout>),
    RawContent(Vec<u8>),
}

pub struct Page {
    /// The size of the page
    pub media_box: Rect,
    /// Where content can live, i.e. within the margins
    pub content_box: Rect,
    /// The laid out contents
    pub contents: Vec<PageContents>,
}

impl Page {
    /// Create a blank page of the given size. When margins are supplied the
    /// content box shrinks accordingly; otherwise it spans the full page.
    pub fn new(size: PageSize, margins: Option<Margins>) -> Page {
        let (width, height) = size;
        let margins = margins.unwrap_or_else(Margins::empty);
        Page {
            media_box: Rect {
                x1: Pt(0.0),
                y1: Pt(0.0),
                x2: width,
                y2: height,
            },
            content_box: Rect {
                x1: margins.left,
                y1: margins.bottom,
                x2: width - margins.right,
                y2: height - margins.top,
            },
            contents: Vec::default(),
        }
    }

    pub fn add_span(&mut self, span: SpanLayout) {
        self.contents.push(PageContents::Text(vec![span]));
    }

    /// Add a raw content stream to the page, typically box outlines and cell
    /// rules built with [pdf_writer::Content]
    pub fn add_content(&mut self, content: Content) {
        self.contents.push(PageContents::RawContent(content.finish()));
    }

    fn render(&self) -> Vec<u8> {
        let mut out: Vec<u8> = Vec::default();

        for page_content in self.contents.iter() {
            match page_content {
                PageContents::Text(spans) => {
                    let mut content = Content::new();
                    content.save_state();
                    for span in spans.iter() {
                        let name = format!("F{}", span.font.id.index());
                        content.begin_text();
                        content.set_font(Name(name.as_bytes()), span.font.size.0);
                        match span.colour {
                            Colour::RGB { r, g, b } => content.set_fill_rgb(r, g, b),
                            Colour::Grey { g } => content.set_fill_gray(g),
                        };
                        content.next_line(span.coords.0 .0, span.coords.1 .0);
                        content.show(Str(&encode_winansi(&span.text)));
                        content.end_text();
                    }
                    content.restore_state();
                    out.extend(content.finish());
                }
                PageContents::RawContent(c) => {
                    out.extend_from_slice(b"q\n");
                    out.extend_from_slice(c.as_slice());
                    out.extend_from_slice(b"\nQ\n");
                }
            }
        }

        out
    }

    pub(crate) fn write(
        &self,
        refs: &mut ObjectReferences,
        page_index: usize,
        fonts: &Arena<Font>,
        writer: &mut Pdf,
    ) {
        let id = refs.get(RefType::Page(page_index)).unwrap();
        let mut page = writer.page(id);
        page.media_box((&self.media_box).into());
        page.art_box((&self.content_box).into());
        page.parent(refs.get(RefType::PageTree).unwrap());

        let mut resources = page.resources();
        let mut resource_fonts = resources.fonts();
        for (i, _) in fonts.iter() {
            let name = format!("F{}", i.index());
            resource_fonts.pair(
                Name(name.as_bytes()),
                refs.get(RefType::Font(i.index())).unwrap(),
            );
        }
        resource_fonts.finish();
        resources.finish();

        let content_id = refs.gen(RefType::ContentForPage(page_index));
        page.contents(content_id);
        page.finish();

        let rendered = self.render();
        let compressed = miniz_oxide::deflate::compress_to_vec_zlib(
            rendered.as_slice(),
            miniz_oxide::deflate::CompressionLevel::DefaultCompression as u8,
        );
        let mut stream = writer.stream(content_id, compressed.as_slice());
        stream.filter(Filter::FlateDecode);
    }
}
