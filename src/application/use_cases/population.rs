use std::sync::Arc;

use crate::application::dto::QueryResult;
use crate::application::errors::PopulationUseCaseError;
use crate::application::use_cases::run_query::{SelectQueryUseCase, SelectRequest};

/// Fixed table and field list per livestock data source.
const OIE_TABLE: &str = "livestock_national_population_oie";
const OIE_FIELDS: &str = "country,year,species,population,metadataflags";
const FAOSTAT_TABLE: &str = "livestock_countries_population_faostat";
const FAOSTAT_FIELDS: &str = "iso3,country,year,species,population";

/// Species umbrella terms that expand to an OR-group of the per-source
/// species labels actually stored in the tables.
fn aggregate_species(source: &str, species: &str) -> Option<&'static [&'static str]> {
    match (source, species) {
        ("oie", "Poultry") => Some(&[
            "Birds",
            "Layers",
            "Broilers",
            "Turkeys",
            "Other commercial poultry",
            "Backyard poultry",
        ]),
        ("oie", "All Cattle") => Some(&[
            "Cattle",
            "Male and female cattle",
            "Adult beef cattle",
            "Adult dairy cattle",
            "Calves",
        ]),
        ("oie", "All Swine") => Some(&[
            "Swine",
            "Adult pigs",
            "Backyard pigs",
            "Commercial pigs",
            "Fattening pigs",
            "Piglets",
        ]),
        ("oie", "All Sheep") => Some(&["Sheep", "Adult sheep", "Lambs"]),
        ("oie", "All Goats") => Some(&["Goats", "Adult goats", "Kids"]),
        ("oie", "All Equids") => Some(&["Equidae", "Domestic Horses", "Donkeys/ Mules/ Hinnies"]),
        ("faostat", "Poultry") => Some(&["Chickens", "Turkeys", "Ducks", "Geese and guinea fowls"]),
        _ => None,
    }
}

/// Optional population filters; `None` means "all values" (the public API
/// spells that `*`).
#[derive(Debug, Clone, Default)]
pub struct PopulationFilter {
    pub year: Option<String>,
    pub country: Option<String>,
    pub iso3: Option<String>,
    pub species: Option<String>,
}

/// Use case: query livestock population rows from one of the two fixed
/// source tables, with AND-combined filters.
pub struct PopulationQueryUseCase {
    select: Arc<SelectQueryUseCase>,
}

impl PopulationQueryUseCase {
    pub fn new(select: Arc<SelectQueryUseCase>) -> Self {
        Self { select }
    }

    pub async fn execute(
        &self,
        source: &str,
        filter: PopulationFilter,
    ) -> Result<QueryResult, PopulationUseCaseError> {
        let (table, fields) = match source {
            "oie" => (OIE_TABLE, OIE_FIELDS),
            "faostat" => (FAOSTAT_TABLE, FAOSTAT_FIELDS),
            other => return Err(PopulationUseCaseError::InvalidSource(other.to_string())),
        };

        let where_clause = build_where(source, &filter);

        let request = SelectRequest {
            table: table.to_string(),
            fields: fields.to_string(),
            where_clause,
            ..Default::default()
        };

        Ok(self.select.execute(request).await?)
    }
}

fn build_where(source: &str, filter: &PopulationFilter) -> String {
    let mut predicates = Vec::new();

    if let Some(year) = &filter.year {
        predicates.push(format!("year={year}"));
    }
    if let Some(country) = &filter.country {
        predicates.push(format!("country='{country}'"));
    }
    if source == "faostat" {
        if let Some(iso3) = &filter.iso3 {
            predicates.push(format!("iso3='{iso3}'"));
        }
    }
    if let Some(species) = &filter.species {
        match aggregate_species(source, species) {
            Some(group) => {
                let members: Vec<String> =
                    group.iter().map(|s| format!("species='{s}'")).collect();
                predicates.push(format!("({})", members.join(" OR ")));
            }
            None => predicates.push(format!("species='{species}'")),
        }
    }

    predicates.join(" AND ")
}
