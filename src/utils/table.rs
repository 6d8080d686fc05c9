//! Plain-text table rendering for report outputs.

pub struct Column {
    pub header: String,
    pub width: usize,
    pub right_align: bool,
}

impl Column {
    pub fn left(header: &str, width: usize) -> Self {
        Self {
            header: header.to_string(),
            width,
            right_align: false,
        }
    }

    pub fn right(header: &str, width: usize) -> Self {
        Self {
            header: header.to_string(),
            width,
            right_align: true,
        }
    }
}

pub struct Table {
    pub columns: Vec<Column>,
    pub rows: Vec<Vec<String>>,
}

impl Table {
    pub fn new(columns: Vec<Column>) -> Self {
        Self {
            columns,
            rows: Vec::new(),
        }
    }

    pub fn add_row(&mut self, row: Vec<String>) {
        self.rows.push(row);
    }

    fn render_cell(&self, i: usize, text: &str) -> String {
        let col = &self.columns[i];
        if col.right_align {
            format!("{:>width$} ", text, width = col.width)
        } else {
            format!("{:<width$} ", text, width = col.width)
        }
    }

    pub fn render(&self) -> String {
        let mut out = String::new();

        // Header
        for (i, col) in self.columns.iter().enumerate() {
            out.push_str(&self.render_cell(i, &col.header));
        }
        out.push('\n');

        // Separator
        let total: usize = self.columns.iter().map(|c| c.width + 1).sum();
        out.push_str(&"-".repeat(total));
        out.push('\n');

        // Rows
        for row in &self.rows {
            for (i, cell) in row.iter().enumerate() {
                out.push_str(&self.render_cell(i, cell));
            }
            out.push('\n');
        }

        out
    }
}
