use ratatui::buffer::Buffer;
use ratatui::layout::{Constraint, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::Span;
use ratatui::widgets::{Block, Borders, Cell, Row, Widget};

const COLUMN_SPACING: u16 = 1;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum TableKind {
    Balance,
    TrustLine,
    Order,
    Payment,
}

impl TableKind {
    pub fn name(self) -> &'static str {
        match self {
            TableKind::Balance => "balance",
            TableKind::TrustLine => "trustline",
            TableKind::Order => "order",
            TableKind::Payment => "payment",
        }
    }

    pub fn columns(self) -> &'static [&'static str] {
        match self {
            TableKind::Balance => &["Currency", "Value", "Issuer", "Name"],
            TableKind::TrustLine => &["Currency", "Limit", "Rippling", "Issuer", "Name"],
            TableKind::Order => &[
                "Seq", "Type", "Amount", "Currency", "", "Amount", "Currency", "Price",
            ],
            TableKind::Payment => &[
                "Time",
                "Type",
                "Amount",
                "Currency",
                "Issuer",
                "Name",
                "",
                "Counterparty",
                "Success",
            ],
        }
    }
}

/// A resettable table rendered as bordered plain text.
#[derive(Clone, Debug)]
pub struct Table {
    kind: TableKind,
    rows: Vec<Vec<String>>,
}

impl Table {
    pub fn new(kind: TableKind) -> Self {
        Self {
            kind,
            rows: Vec::new(),
        }
    }

    pub fn rows(&self) -> &[Vec<String>] {
        &self.rows
    }

    pub fn replace(&mut self, rows: Vec<Vec<String>>) {
        self.rows = rows;
    }

    pub fn render(&self) -> String {
        let columns = self.kind.columns();
        let mut widths = columns.iter().map(|c| text_width(c)).collect::<Vec<_>>();
        for row in &self.rows {
            for (w, cell) in widths.iter_mut().zip(row) {
                *w = (*w).max(text_width(cell));
            }
        }

        let spacing = COLUMN_SPACING.saturating_mul(widths.len().saturating_sub(1) as u16);
        let width = widths
            .iter()
            .fold(spacing.saturating_add(2), |acc, w| acc.saturating_add(*w));
        let height = u16::try_from(self.rows.len())
            .unwrap_or(u16::MAX)
            .saturating_add(3);
        let area = Rect::new(0, 0, width, height);

        let header = Row::new(columns.iter().copied())
            .style(Style::default().add_modifier(Modifier::BOLD));
        let body = self
            .rows
            .iter()
            .map(|r| Row::new(r.iter().map(|c| Cell::from(c.as_str()))));
        let table = ratatui::widgets::Table::new(body, widths.iter().map(|w| Constraint::Length(*w)))
            .header(header)
            .column_spacing(COLUMN_SPACING)
            .block(Block::default().borders(Borders::ALL));

        let mut buf = Buffer::empty(area);
        table.render(area, &mut buf);
        buffer_text(&buf)
    }
}

fn text_width(s: &str) -> u16 {
    u16::try_from(Span::raw(s).width()).unwrap_or(u16::MAX)
}

fn buffer_text(buf: &Buffer) -> String {
    let width = usize::from(buf.area.width.max(1));
    buf.content
        .chunks(width)
        .map(|row| {
            // A wide symbol is followed by blank continuation cells.
            let mut line = String::new();
            let mut skip = 0;
            for cell in row {
                if skip > 0 {
                    skip -= 1;
                    continue;
                }
                let symbol = cell.symbol();
                line.push_str(symbol);
                skip = Span::raw(symbol).width().saturating_sub(1);
            }
            line.trim_end().to_string()
        })
        .collect::<Vec<_>>()
        .join("\n")
}

#[cfg(test)]
#[path = "../tests/present/table_tests.rs"]
mod tests;
