//! Plain-text results table.

use denue_core::Company;

const HEADERS: [&str; 9] = [
    "Nombre de la empresa",
    "Giro o sector",
    "Tamaño",
    "Teléfono",
    "Correo",
    "Sitio web",
    "Estado",
    "Ciudad",
    "Fuente",
];

const MAX_CELL_WIDTH: usize = 40;
const EMPTY_CELL: &str = "N/A";

fn cells(company: &Company) -> [String; 9] {
    let text = |value: &str| {
        if value.is_empty() {
            EMPTY_CELL.to_string()
        } else {
            truncate(value)
        }
    };
    let optional = |value: Option<&str>| text(value.unwrap_or_default());
    [
        text(&company.nombre),
        text(&company.giro),
        company.tamanio.label().to_string(),
        optional(company.telefono.as_deref()),
        optional(company.correo.as_deref()),
        optional(company.sitio_web.as_deref()),
        text(&company.estado),
        text(&company.ciudad),
        text(&company.fuente),
    ]
}

fn truncate(value: &str) -> String {
    // Line breaks would break the row layout.
    let flat = value.replace(['\n', '\r'], " ");
    if flat.chars().count() <= MAX_CELL_WIDTH {
        return flat;
    }
    let mut cut: String = flat.chars().take(MAX_CELL_WIDTH - 1).collect();
    cut.push('…');
    cut
}

/// Renders companies as a left-aligned table, one line per company.
pub fn render_table(companies: &[Company]) -> String {
    let rows: Vec<[String; 9]> = companies.iter().map(cells).collect();

    let mut widths = HEADERS.map(|h| h.chars().count());
    for row in &rows {
        for (width, cell) in widths.iter_mut().zip(row) {
            *width = (*width).max(cell.chars().count());
        }
    }

    let mut out = String::new();
    push_line(&mut out, HEADERS.iter().copied(), &widths);
    let rule: Vec<String> = widths.iter().map(|w| "-".repeat(*w)).collect();
    push_line(&mut out, rule.iter().map(String::as_str), &widths);
    for row in &rows {
        push_line(&mut out, row.iter().map(String::as_str), &widths);
    }
    out
}

fn push_line<'a>(out: &mut String, cells: impl Iterator<Item = &'a str>, widths: &[usize; 9]) {
    let padded: Vec<String> = cells
        .zip(widths)
        .map(|(cell, width)| {
            let pad = width.saturating_sub(cell.chars().count());
            format!("{cell}{}", " ".repeat(pad))
        })
        .collect();
    out.push_str(padded.join("  ").trim_end());
    out.push('\n');
}
