// src/export/pdf.rs

//! Minimal paginated table writer on top of `pdf-writer` (Helvetica, A4 landscape).

use pdf_writer::{Content, Name, Pdf, Rect, Ref, Str};
use std::fs;
use std::path::Path;

const PAGE_W: f32 = 842.0;
const PAGE_H: f32 = 595.0;
const MARGIN: f32 = 40.0;
const ROW_H: f32 = 18.0;
const FONT_SIZE: f32 = 9.0;
const HEADER_FONT_SIZE: f32 = 10.0;
const TITLE_FONT_SIZE: f32 = 14.0;
/// Larghezza media di un carattere Helvetica in rapporto al corpo.
const CHAR_WIDTH_RATIO: f32 = 0.55;
const CELL_PADDING: f32 = 4.0;

const FONT_NAME: Name<'static> = Name(b"F1");

pub struct PdfTable<'a> {
    title: &'a str,
    headers: &'a [&'a str],
    rows: &'a [Vec<String>],
}

impl<'a> PdfTable<'a> {
    pub fn new(title: &'a str, headers: &'a [&'a str], rows: &'a [Vec<String>]) -> Self {
        Self {
            title,
            headers,
            rows,
        }
    }

    /// Rows that fit under the title and the header row of one page.
    fn rows_per_page() -> usize {
        let usable = PAGE_H - 2.0 * MARGIN - 30.0 - ROW_H;
        (usable / ROW_H).floor().max(1.0) as usize
    }

    fn column_widths(&self) -> Vec<f32> {
        let char_w = FONT_SIZE * CHAR_WIDTH_RATIO;
        let mut widths: Vec<f32> = self
            .headers
            .iter()
            .map(|h| h.chars().count() as f32 * HEADER_FONT_SIZE * CHAR_WIDTH_RATIO)
            .collect();

        for row in self.rows {
            for (w, cell) in widths.iter_mut().zip(row) {
                *w = w.max(cell.chars().count() as f32 * char_w);
            }
        }

        for w in &mut widths {
            *w += 2.0 * CELL_PADDING;
        }

        let total: f32 = widths.iter().sum();
        let available = PAGE_W - 2.0 * MARGIN;
        if total > available {
            let scale = available / total;
            widths.iter_mut().for_each(|w| *w *= scale);
        }

        widths
    }

    /// Render the whole document; an empty table still gets one page with
    /// the header row.
    pub fn render(&self) -> Vec<u8> {
        let mut pdf = Pdf::new();
        let catalog_id = Ref::new(1);
        let pages_id = Ref::new(2);
        let font_id = Ref::new(3);
        let mut next_id = 4;

        pdf.type1_font(font_id).base_font(Name(b"Helvetica"));

        let widths = self.column_widths();
        let chunks: Vec<&[Vec<String>]> = if self.rows.is_empty() {
            vec![self.rows]
        } else {
            self.rows.chunks(Self::rows_per_page()).collect()
        };
        let page_count = chunks.len();

        let mut page_refs = Vec::with_capacity(page_count);

        for (idx, chunk) in chunks.iter().enumerate() {
            let page_id = Ref::new(next_id);
            let content_id = Ref::new(next_id + 1);
            next_id += 2;
            page_refs.push(page_id);

            {
                let mut page = pdf.page(page_id);
                page.parent(pages_id)
                    .media_box(Rect::new(0.0, 0.0, PAGE_W, PAGE_H))
                    .contents(content_id);
                page.resources().fonts().pair(FONT_NAME, font_id);
            }

            let content = self.draw_page(chunk, &widths, idx + 1, page_count);
            pdf.stream(content_id, &content.finish());
        }

        pdf.catalog(catalog_id).pages(pages_id);
        pdf.pages(pages_id)
            .count(page_count as i32)
            .kids(page_refs);

        pdf.finish()
    }

    fn draw_page(&self, rows: &[Vec<String>], widths: &[f32], page: usize, pages: usize) -> Content {
        let mut content = Content::new();
        let table_w: f32 = widths.iter().sum();

        text(&mut content, MARGIN, PAGE_H - MARGIN, TITLE_FONT_SIZE, self.title);
        text(
            &mut content,
            PAGE_W - MARGIN - 70.0,
            MARGIN - 20.0,
            FONT_SIZE,
            &format!("Page {page} of {pages}"),
        );

        let mut y = PAGE_H - MARGIN - 30.0;

        fill_band(&mut content, y, table_w, (0.18, 0.46, 0.71));
        let header_cells: Vec<String> = self.headers.iter().map(|h| h.to_string()).collect();
        draw_row(&mut content, y, widths, &header_cells, HEADER_FONT_SIZE);

        for (i, row) in rows.iter().enumerate() {
            y -= ROW_H;
            if i % 2 == 0 {
                fill_band(&mut content, y, table_w, (0.92, 0.95, 0.98));
            }
            draw_row(&mut content, y, widths, row, FONT_SIZE);
        }

        content
    }

    pub fn save(&self, path: &Path) -> std::io::Result<()> {
        fs::write(path, self.render())
    }
}

fn text(content: &mut Content, x: f32, y: f32, size: f32, s: &str) {
    // Helvetica Type1 copre solo Latin-1: il resto diventa '?'
    let bytes: Vec<u8> = s
        .chars()
        .map(|c| u8::try_from(u32::from(c)).unwrap_or(b'?'))
        .collect();

    content.begin_text();
    content.set_font(FONT_NAME, size);
    content.set_text_matrix([1.0, 0.0, 0.0, 1.0, x, y]);
    content.show(Str(&bytes));
    content.end_text();
}

fn fill_band(content: &mut Content, y: f32, width: f32, rgb: (f32, f32, f32)) {
    content.save_state();
    content.set_fill_rgb(rgb.0, rgb.1, rgb.2);
    content.rect(MARGIN, y, width, ROW_H);
    content.fill_nonzero();
    content.restore_state();
}

fn draw_row(content: &mut Content, y: f32, widths: &[f32], cells: &[String], size: f32) {
    let mut x = MARGIN;

    for (w, cell) in widths.iter().zip(cells) {
        text(content, x + CELL_PADDING, y + 5.0, size, cell);

        content.save_state();
        content.set_stroke_rgb(0.65, 0.65, 0.65);
        content.rect(x, y, *w, ROW_H);
        content.stroke();
        content.restore_state();

        x += w;
    }
}
