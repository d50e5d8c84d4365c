//! Normalization of raw DENUE establishment objects into [`Company`] records.
//!
//! Field names vary across API versions, so every field is read from a list
//! of candidate keys in priority order. The first candidate holding a
//! non-empty value wins.

use denue_core::{classify_size, Company};
use serde_json::{Map, Value};

/// `fuente` label for records from the by-name endpoint.
pub const SOURCE_BY_NAME: &str = "DENUE (Nombre)";
/// `fuente` label for records from the by-radius endpoint.
pub const SOURCE_BY_RADIUS: &str = "DENUE (Radio)";

const NAME_KEYS: &[&str] = &["Nombre", "raz_social", "Razon_social"];
const ACTIVITY_KEYS: &[&str] = &["Clase_actividad", "Clase_act"];
const BRACKET_KEYS: &[&str] = &["Estrato"];
const PHONE_KEYS: &[&str] = &["Telefono", "Tel"];
const EMAIL_KEYS: &[&str] = &["Correo_e"];
const WEBSITE_KEYS: &[&str] = &["Sitio_internet"];
const STATE_KEYS: &[&str] = &["Entidad", "Entidad_federativa"];
const CITY_KEYS: &[&str] = &["Municipio"];

/// Converts a response body into companies tagged with `fuente`.
///
/// A body that is not a JSON array yields no companies, and array elements
/// that are not objects are skipped.
#[must_use]
pub fn parse_establishments(body: &Value, fuente: &str) -> Vec<Company> {
    let Some(items) = body.as_array() else {
        return Vec::new();
    };
    items
        .iter()
        .filter_map(Value::as_object)
        .map(|obj| normalize_establishment(obj, fuente))
        .collect()
}

/// Builds one [`Company`] from a raw establishment object.
#[must_use]
pub fn normalize_establishment(obj: &Map<String, Value>, fuente: &str) -> Company {
    let bracket = first_text(obj, BRACKET_KEYS).unwrap_or_default();
    Company {
        nombre: first_text(obj, NAME_KEYS).unwrap_or_default(),
        giro: first_text(obj, ACTIVITY_KEYS).unwrap_or_default(),
        tamanio: classify_size(&bracket),
        telefono: first_text(obj, PHONE_KEYS),
        correo: first_text(obj, EMAIL_KEYS),
        sitio_web: first_text(obj, WEBSITE_KEYS),
        estado: first_text(obj, STATE_KEYS).unwrap_or_default(),
        ciudad: first_text(obj, CITY_KEYS).unwrap_or_default(),
        fuente: fuente.to_string(),
    }
}

/// Returns the first candidate whose value is non-empty after trimming.
fn first_text(obj: &Map<String, Value>, keys: &[&str]) -> Option<String> {
    keys.iter()
        .filter_map(|key| obj.get(*key).and_then(value_text))
        .find(|text| !text.is_empty())
}

/// Strings are trimmed and numbers keep their JSON text. Anything else
/// counts as absent.
fn value_text(value: &Value) -> Option<String> {
    match value {
        Value::String(s) => Some(s.trim().to_string()),
        Value::Number(n) => Some(n.to_string()),
        _ => None,
    }
}
