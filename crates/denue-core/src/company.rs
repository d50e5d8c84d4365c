use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::CoreError;

/// Coarse business-size bucket derived from the registry's employee-count
/// bracket text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum SizeCategory {
    Micro,
    Small,
    Medium,
    Large,
    Unknown,
}

impl SizeCategory {
    /// Spanish label shown in tables and written to CSV.
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            SizeCategory::Micro => "Micro",
            SizeCategory::Small => "Pequeña",
            SizeCategory::Medium => "Mediana",
            SizeCategory::Large => "Grande",
            SizeCategory::Unknown => "Desconocido",
        }
    }
}

impl fmt::Display for SizeCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for SizeCategory {
    type Err = CoreError;

    /// Accepts the Spanish labels and the English variant names, ignoring case.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "micro" => Ok(SizeCategory::Micro),
            "small" | "pequeña" | "pequena" => Ok(SizeCategory::Small),
            "medium" | "mediana" => Ok(SizeCategory::Medium),
            "large" | "grande" => Ok(SizeCategory::Large),
            "unknown" | "desconocido" => Ok(SizeCategory::Unknown),
            _ => Err(CoreError::InvalidSizeCategory(s.to_string())),
        }
    }
}

/// One establishment returned by the business registry, normalized.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Company {
    pub nombre: String,
    pub giro: String,
    pub tamanio: SizeCategory,
    pub telefono: Option<String>,
    pub correo: Option<String>,
    pub sitio_web: Option<String>,
    pub estado: String,
    pub ciudad: String,
    /// Label of the endpoint that produced this record.
    pub fuente: String,
}

/// Borrowed identity of an establishment: name, phone, state and city.
pub type DedupKey<'a> = (&'a str, Option<&'a str>, &'a str, &'a str);

impl Company {
    /// Two records with the same key are the same establishment, whatever
    /// their activity, email, website or source.
    #[must_use]
    pub fn dedup_key(&self) -> DedupKey<'_> {
        (
            self.nombre.as_str(),
            self.telefono.as_deref(),
            self.estado.as_str(),
            self.ciudad.as_str(),
        )
    }
}
