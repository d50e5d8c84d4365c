//! `denue search`: one request/response cycle from flags to rendered output.

use std::io::Write;
use std::path::PathBuf;

use anyhow::Context;
use clap::Args;
use denue_client::{DenueClient, DenueError};
use denue_core::{split_list, AppConfig, Company, GeoFilter, SearchCriteria, SizeCategory};
use denue_search::Aggregator;

use crate::table::render_table;

#[derive(Debug, Args)]
pub struct SearchArgs {
    /// DENUE API token (defaults to `DENUE_API_TOKEN`)
    #[arg(long)]
    pub token: Option<String>,

    /// Comma-separated keywords, e.g. "comercio, legal, consultoría"
    #[arg(long, short = 'k')]
    pub keywords: String,

    /// Comma-separated state codes, e.g. "09, 15, 19" (national when omitted)
    #[arg(long, short = 's', conflicts_with = "lat")]
    pub states: Option<String>,

    /// Keep medium-sized companies (Mediana)
    #[arg(long)]
    pub medium: bool,

    /// Keep large companies (Grande)
    #[arg(long)]
    pub large: bool,

    /// Comma-separated size labels to keep, e.g. "mediana, grande"
    #[arg(long = "size", value_delimiter = ',')]
    pub sizes: Vec<SizeCategory>,

    /// Latitude of the radius search centre
    #[arg(long, requires_all = ["lon", "radius"], allow_negative_numbers = true)]
    pub lat: Option<f64>,

    /// Longitude of the radius search centre
    #[arg(long, requires_all = ["lat", "radius"], allow_negative_numbers = true)]
    pub lon: Option<f64>,

    /// Search radius in meters (the API caps it at 5000)
    #[arg(long, requires_all = ["lat", "lon"])]
    pub radius: Option<u32>,

    /// Export results to CSV, optionally at PATH (defaults to `DENUE_EXPORT_PATH`)
    #[arg(long, value_name = "PATH")]
    #[allow(clippy::option_option)]
    pub export: Option<Option<PathBuf>>,
}

impl SearchArgs {
    /// Turns the flags into search criteria.
    ///
    /// # Errors
    ///
    /// Fails when no token is available or no usable keyword was given.
    pub fn to_criteria(&self, config: &AppConfig) -> anyhow::Result<SearchCriteria> {
        let token = config.resolve_token(self.token.as_deref())?;

        let keywords = split_list(&self.keywords);
        if keywords.is_empty() {
            anyhow::bail!("at least one keyword is required");
        }

        let mut sizes = self.sizes.clone();
        if self.medium {
            sizes.push(SizeCategory::Medium);
        }
        if self.large {
            sizes.push(SizeCategory::Large);
        }

        Ok(SearchCriteria::new(token, keywords)
            .with_states(self.states.as_deref().map(split_list).unwrap_or_default())
            .with_sizes(sizes)
            .with_geo(GeoFilter::from_parts(self.lat, self.lon, self.radius)))
    }
}

/// What one search produced, ready to render.
#[derive(Debug)]
pub enum SearchOutcome {
    Found(Vec<Company>),
    NoResults,
    Failed(String),
}

impl SearchOutcome {
    pub fn from_result(result: Result<Vec<Company>, DenueError>) -> Self {
        match result {
            Ok(companies) if companies.is_empty() => SearchOutcome::NoResults,
            Ok(companies) => SearchOutcome::Found(companies),
            Err(e) => SearchOutcome::Failed(e.to_string()),
        }
    }

    /// Writes the user-facing summary for this outcome.
    pub fn render<W: Write>(&self, out: &mut W) -> std::io::Result<()> {
        match self {
            SearchOutcome::Found(companies) => {
                writeln!(out, "Se encontraron {} empresas", companies.len())?;
                writeln!(out)?;
                out.write_all(render_table(companies).as_bytes())
            }
            SearchOutcome::NoResults => {
                writeln!(out, "No se encontraron resultados")?;
                writeln!(out, "Intenta ajustar tus criterios de búsqueda.")
            }
            SearchOutcome::Failed(_) => writeln!(out, "Ocurrió un error"),
        }
    }
}

/// Runs one search and prints the outcome, exporting CSV when asked.
///
/// # Errors
///
/// Returns an error if the criteria are invalid, the client cannot be built,
/// the search fails, or the CSV cannot be written.
pub async fn run(config: &AppConfig, args: SearchArgs) -> anyhow::Result<()> {
    let criteria = args.to_criteria(config)?;
    tracing::debug!(?criteria, "starting search");

    let client = DenueClient::with_base_url(
        config.request_timeout_secs,
        &config.user_agent,
        &config.base_url,
    )
    .context("failed to build DENUE client")?;
    let aggregator = Aggregator::new(client).with_max_concurrency(config.max_concurrent_queries);

    let outcome = SearchOutcome::from_result(aggregator.aggregate(&criteria).await);

    match &outcome {
        SearchOutcome::Failed(message) => {
            outcome.render(&mut std::io::stderr().lock())?;
            anyhow::bail!("{message}");
        }
        SearchOutcome::NoResults => outcome.render(&mut std::io::stdout().lock())?,
        SearchOutcome::Found(companies) => {
            outcome.render(&mut std::io::stdout().lock())?;
            if let Some(path) = args.export {
                let path = path.unwrap_or_else(|| config.export_path.clone());
                denue_export::export_csv(&path, companies)
                    .with_context(|| format!("failed to export CSV to {}", path.display()))?;
                println!("Exportado a {}", path.display());
            }
        }
    }

    Ok(())
}
