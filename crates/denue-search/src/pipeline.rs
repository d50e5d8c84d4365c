use std::collections::hash_map::Entry;
use std::collections::{BTreeSet, HashMap};

use denue_core::{Company, SizeCategory};

type OwnedKey = (String, Option<String>, String, String);

fn owned_key(company: &Company) -> OwnedKey {
    let (nombre, telefono, estado, ciudad) = company.dedup_key();
    (
        nombre.to_owned(),
        telefono.map(str::to_owned),
        estado.to_owned(),
        ciudad.to_owned(),
    )
}

/// Collapses companies sharing a dedup key.
///
/// Each key keeps the position where it was first seen and the value that
/// was seen last, i.e. insertion-ordered map semantics.
#[must_use]
pub fn dedup_companies(companies: impl IntoIterator<Item = Company>) -> Vec<Company> {
    let mut positions: HashMap<OwnedKey, usize> = HashMap::new();
    let mut unique: Vec<Company> = Vec::new();

    for company in companies {
        match positions.entry(owned_key(&company)) {
            Entry::Occupied(slot) => unique[*slot.get()] = company,
            Entry::Vacant(slot) => {
                slot.insert(unique.len());
                unique.push(company);
            }
        }
    }

    unique
}

/// Keeps companies whose size is in `sizes`. An empty set keeps everything.
#[must_use]
pub fn filter_by_size(companies: Vec<Company>, sizes: &BTreeSet<SizeCategory>) -> Vec<Company> {
    if sizes.is_empty() {
        return companies;
    }
    companies
        .into_iter()
        .filter(|c| sizes.contains(&c.tamanio))
        .collect()
}
