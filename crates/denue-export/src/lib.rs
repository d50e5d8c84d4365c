//! CSV export of search results.
//!
//! Output is UTF-8 with a leading byte-order mark so spreadsheet tools pick
//! the right encoding, a fixed Spanish header, and one row per company. A
//! field is quoted only when it contains a comma, a quote or a line break.

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use csv::{QuoteStyle, Terminator, WriterBuilder};
use denue_core::Company;
use thiserror::Error;

const BOM: &[u8] = b"\xEF\xBB\xBF";

pub const HEADERS: [&str; 9] = [
    "Nombre de la empresa",
    "Giro o sector",
    "Tamaño",
    "Teléfono principal",
    "Correo electrónico de contacto",
    "Sitio web",
    "Estado",
    "Ciudad o municipio",
    "Fuente",
];

#[derive(Debug, Error)]
pub enum ExportError {
    #[error("I/O error writing CSV: {0}")]
    Io(#[from] std::io::Error),

    #[error("CSV encoding error: {0}")]
    Csv(#[from] csv::Error),
}

/// Writes the BOM, the header and one row per company to `writer`.
///
/// # Errors
///
/// Returns [`ExportError`] if writing to `writer` fails.
pub fn write_csv<W: Write>(mut writer: W, companies: &[Company]) -> Result<(), ExportError> {
    writer.write_all(BOM)?;

    let mut csv = WriterBuilder::new()
        .quote_style(QuoteStyle::Necessary)
        .terminator(Terminator::Any(b'\n'))
        .from_writer(writer);

    csv.write_record(HEADERS)?;
    for company in companies {
        let tamanio = company.tamanio.label();
        csv.write_record([
            company.nombre.as_str(),
            company.giro.as_str(),
            tamanio,
            company.telefono.as_deref().unwrap_or_default(),
            company.correo.as_deref().unwrap_or_default(),
            company.sitio_web.as_deref().unwrap_or_default(),
            company.estado.as_str(),
            company.ciudad.as_str(),
            company.fuente.as_str(),
        ])?;
    }
    csv.flush()?;
    Ok(())
}

/// Renders `companies` as a CSV string, BOM included.
///
/// # Errors
///
/// Returns [`ExportError::Csv`] if a record cannot be encoded.
pub fn to_csv_string(companies: &[Company]) -> Result<String, ExportError> {
    let mut buf = Vec::new();
    write_csv(&mut buf, companies)?;
    String::from_utf8(buf).map_err(|e| {
        ExportError::Io(std::io::Error::new(std::io::ErrorKind::InvalidData, e))
    })
}

/// Writes `companies` to the file at `path`, replacing it if present.
///
/// # Errors
///
/// Returns [`ExportError::Io`] if the file cannot be created or written.
pub fn export_csv(path: &Path, companies: &[Company]) -> Result<(), ExportError> {
    let file = File::create(path)?;
    write_csv(BufWriter::new(file), companies)?;
    tracing::info!(path = %path.display(), rows = companies.len(), "exported CSV");
    Ok(())
}

#[cfg(test)]
mod tests {
    use denue_core::SizeCategory;

    use super::*;

    fn company(nombre: &str) -> Company {
        Company {
            nombre: nombre.to_string(),
            giro: "Panificación tradicional".to_string(),
            tamanio: SizeCategory::Small,
            telefono: Some("5555123456".to_string()),
            correo: None,
            sitio_web: None,
            estado: "CIUDAD DE MÉXICO".to_string(),
            ciudad: "Coyoacán".to_string(),
            fuente: "DENUE (Nombre)".to_string(),
        }
    }

    fn read_back(csv_text: &str) -> Vec<Vec<String>> {
        let body = csv_text.strip_prefix('\u{feff}').expect("BOM must lead");
        let mut reader = csv::ReaderBuilder::new()
            .has_headers(false)
            .from_reader(body.as_bytes());
        reader
            .records()
            .map(|r| r.unwrap().iter().map(str::to_string).collect())
            .collect()
    }

    #[test]
    fn starts_with_bom_and_header() {
        let text = to_csv_string(&[]).unwrap();
        assert!(text.starts_with('\u{feff}'));
        assert_eq!(
            text.trim_start_matches('\u{feff}'),
            "Nombre de la empresa,Giro o sector,Tamaño,Teléfono principal,\
             Correo electrónico de contacto,Sitio web,Estado,Ciudad o municipio,Fuente\n"
        );
    }

    #[test]
    fn plain_row_is_unquoted_and_absent_fields_are_empty() {
        let text = to_csv_string(&[company("PANADERIA ROSITA")]).unwrap();
        let row = text.lines().nth(1).unwrap();
        assert_eq!(
            row,
            "PANADERIA ROSITA,Panificación tradicional,Pequeña,5555123456,,,CIUDAD DE MÉXICO,Coyoacán,DENUE (Nombre)"
        );
    }

    #[test]
    fn comma_and_quote_are_escaped() {
        let text = to_csv_string(&[company(r#"PANADERIA "LA ROSA", SA"#)]).unwrap();
        let row = text.lines().nth(1).unwrap();
        assert!(
            row.starts_with(r#""PANADERIA ""LA ROSA"", SA","#),
            "unexpected row: {row}"
        );
    }

    #[test]
    fn tricky_name_round_trips() {
        let original = "Tortillería \"Doña Lupe\", sucursal 2\nCentro";
        let text = to_csv_string(&[company(original)]).unwrap();
        let rows = read_back(&text);
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0][0], "Nombre de la empresa");
        assert_eq!(rows[1][0], original);
        assert_eq!(rows[1][3], "5555123456");
        assert_eq!(rows[1][4], "");
    }

    #[test]
    fn export_csv_writes_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("empresas_resultado.csv");
        export_csv(&path, &[company("A"), company("B")]).unwrap();
        let text = std::fs::read_to_string(&path).unwrap();
        assert_eq!(read_back(&text).len(), 3);
    }
}
