use pdf_writer::{Content, Name, Pdf, Rect, Ref};
use std::fs::File;
use std::io::Write;
use std::path::Path;

/// Low-level PDF builder: stacked sections (headings, text blocks, tables)
/// flowing down the page, with automatic page breaks.
pub struct PdfManager {
    pdf: Pdf,
    catalog_id: Ref,
    pages_id: Ref,
    page_refs: Vec<Ref>,
    current_content_id: Option<Ref>,
    content: Option<Content>,

    page_w: f32,
    page_h: f32,
    margin: f32,
    row_h: f32,
    y: f32,

    next_id: i32,
    font_id: Ref,

    font_size: f32,
    header_font_size: f32,
    title_font_size: f32,

    title: String,
    page_idx: usize,
}

impl PdfManager {
    pub fn new(title: &str) -> Self {
        let mut pdf = Pdf::new();

        // Manually managed object ids
        let catalog_id = Ref::new(1);
        let pages_id = Ref::new(2);
        let font_id = Ref::new(3);
        let next_id = 4;

        // Global font
        pdf.type1_font(font_id).base_font(Name(b"Helvetica"));

        Self {
            pdf,
            catalog_id,
            pages_id,
            page_refs: Vec::new(),
            current_content_id: None,
            content: None,

            page_w: 595.0,
            page_h: 842.0,
            margin: 50.0,
            row_h: 20.0,
            y: 0.0,

            next_id,
            font_id,

            font_size: 10.0,
            header_font_size: 11.0,
            title_font_size: 14.0,

            title: title.to_string(),
            page_idx: 0,
        }
    }

    /// Generate a fresh unique Ref
    fn fresh_ref(&mut self) -> Ref {
        let id = self.next_id;
        self.next_id += 1;
        Ref::new(id)
    }

    /// Open a new page, draw its header/footer and reset the cursor.
    fn start_page(&mut self) {
        let page_id = self.fresh_ref();
        let content_id = self.fresh_ref();

        self.page_refs.push(page_id);

        let mut page = self.pdf.page(page_id);
        page.parent(self.pages_id)
            .media_box(Rect::new(0.0, 0.0, self.page_w, self.page_h))
            .contents(content_id);

        page.resources().fonts().pair(Name(b"F1"), self.font_id);
        drop(page);

        self.current_content_id = Some(content_id);
        self.page_idx += 1;

        let mut content = Content::new();

        // Page title
        content.begin_text();
        content.set_font(Name(b"F1"), self.title_font_size);
        content.set_text_matrix([
            1.0,
            0.0,
            0.0,
            1.0,
            self.margin,
            self.page_h - self.margin + 15.0,
        ]);
        content.show(pdf_writer::Str(self.title.as_bytes()));
        content.end_text();

        // Page number
        let pg = format!("Page {}", self.page_idx);
        content.begin_text();
        content.set_font(Name(b"F1"), self.font_size);
        content.set_text_matrix([
            1.0,
            0.0,
            0.0,
            1.0,
            self.page_w - self.margin - 60.0,
            self.margin - 35.0,
        ]);
        content.show(pdf_writer::Str(pg.as_bytes()));
        content.end_text();

        self.content = Some(content);
        self.y = self.page_h - self.margin - 30.0;
    }

    /// Write the stream of the current page, if any.
    fn finish_page(&mut self) {
        if let (Some(id), Some(content)) = (self.current_content_id.take(), self.content.take()) {
            self.pdf.stream(id, &content.finish());
        }
    }

    /// Break the page when less than `needed` vertical space remains.
    fn ensure_room(&mut self, needed: f32) {
        if self.content.is_none() {
            self.start_page();
            return;
        }
        if self.y - needed < self.margin {
            self.finish_page();
            self.start_page();
        }
    }

    /// Fill the `Pages` node with count and kids
    fn build_pages_tree(&mut self) {
        let mut pages = self.pdf.pages(self.pages_id);
        pages.count(self.page_refs.len() as i32);
        pages.kids(self.page_refs.clone());
    }

    fn draw_text(content: &mut Content, x: f32, y: f32, size: f32, text: &str) {
        content.begin_text();
        content.set_font(Name(b"F1"), size);
        content.set_text_matrix([1.0, 0.0, 0.0, 1.0, x, y]);
        content.show(pdf_writer::Str(text.as_bytes()));
        content.end_text();
    }

    fn draw_cell_borders(content: &mut Content, x: f32, y: f32, w: f32, h: f32) {
        content.save_state();
        content.set_stroke_rgb(0.65, 0.65, 0.65);
        content.rect(x, y, w, h);
        content.stroke();
        content.restore_state();
    }

    fn draw_row(&mut self, col_widths: &[f32], row: &[String], font_size: f32) {
        let y = self.y;
        let row_h = self.row_h;
        let x_start = self.margin;
        let content = self.content.as_mut().expect("page must be open");

        let mut x = x_start;
        for (i, text) in row.iter().enumerate() {
            let w = col_widths[i];
            Self::draw_text(content, x + 4.0, y + 5.0, font_size, text);
            Self::draw_cell_borders(content, x, y, w, row_h);
            x += w;
        }
    }

    /// Compute column widths from header + content, scaled to the page.
    fn compute_col_widths(&self, headers: &[&str], rows: &[Vec<String>]) -> Vec<f32> {
        let mut widths: Vec<f32> = headers.iter().map(|h| h.len() as f32 * 6.5).collect();

        for row in rows {
            for (i, cell) in row.iter().enumerate() {
                let w = (cell.len() as f32 * 6.2).max(widths[i]);
                widths[i] = w;
            }
        }

        let total: f32 = widths.iter().sum();
        let max = self.page_w - 2.0 * self.margin;

        if total > max {
            let scale = max / total;
            for w in &mut widths {
                *w *= scale;
            }
        }

        widths
    }

    /// Bold-ish section heading at the current cursor.
    pub fn write_heading(&mut self, text: &str) {
        self.ensure_room(self.row_h * 2.0);
        self.y -= self.row_h;

        let y = self.y;
        let size = self.header_font_size + 1.0;
        let margin = self.margin;
        let content = self.content.as_mut().expect("page must be open");
        Self::draw_text(content, margin, y, size, text);

        self.y -= self.row_h * 0.5;
    }

    /// Plain text lines (user info block and the like).
    pub fn write_lines(&mut self, lines: &[String]) {
        for line in lines {
            self.ensure_room(self.row_h);
            self.y -= self.row_h * 0.75;

            let y = self.y;
            let size = self.font_size;
            let margin = self.margin;
            let content = self.content.as_mut().expect("page must be open");
            Self::draw_text(content, margin, y, size, line);
        }
        self.y -= self.row_h * 0.5;
    }

    /// Bordered table with a shaded header row and zebra stripes, broken
    /// across pages as needed (the header row is repeated on each page).
    pub fn write_table(&mut self, headers: &[&str], rows: &[Vec<String>]) {
        let col_widths = self.compute_col_widths(headers, rows);
        let header_row: Vec<String> = headers.iter().map(|s| s.to_string()).collect();
        let table_w: f32 = col_widths.iter().sum();

        let mut need_header = true;
        let mut remaining: &[Vec<String>] = rows;
        let mut stripe = 0usize;

        loop {
            if self.content.is_none() {
                self.start_page();
                need_header = true;
            } else if self.y - self.row_h * 2.0 < self.margin {
                // Page break: the header row is repeated on the next page.
                self.finish_page();
                self.start_page();
                need_header = true;
            }

            if need_header {
                self.y -= self.row_h;
                let y = self.y;
                let row_h = self.row_h;
                let margin = self.margin;

                {
                    let content = self.content.as_mut().expect("page must be open");
                    content.save_state();
                    content.set_fill_rgb(0.85, 0.87, 0.90);
                    content.rect(margin, y, table_w, row_h);
                    content.fill_nonzero();
                    content.restore_state();
                }

                self.draw_row(&col_widths, &header_row, self.header_font_size);
                need_header = false;
            }

            let Some((row, rest)) = remaining.split_first() else {
                break;
            };

            self.y -= self.row_h;

            // zebra stripe
            if stripe % 2 == 0 {
                let y = self.y;
                let row_h = self.row_h;
                let margin = self.margin;
                let content = self.content.as_mut().expect("page must be open");
                content.save_state();
                content.set_fill_rgb(0.96, 0.96, 0.96);
                content.rect(margin, y, table_w, row_h);
                content.fill_nonzero();
                content.restore_state();
            }

            self.draw_row(&col_widths, row, self.font_size);

            stripe += 1;
            remaining = rest;
        }

        self.y -= self.row_h * 0.5;
    }

    pub fn save(mut self, path: &Path) -> std::io::Result<()> {
        if self.content.is_none() && self.page_refs.is_empty() {
            // Never emit a zero-page document.
            self.start_page();
        }
        self.finish_page();

        // Build Catalog + Pages once, here
        self.pdf.catalog(self.catalog_id).pages(self.pages_id);
        self.build_pages_tree();

        let bytes = self.pdf.finish();
        let mut f = File::create(path)?;
        f.write_all(&bytes)?;
        Ok(())
    }
}
