use std::collections::HashSet;

use crate::{City, Error, Result};

/// The resolved, immutable search space for one run.
///
/// Built once, validated at construction, then only lent by reference to the
/// sampler and the evaluator.
#[derive(Clone, Debug)]
pub struct CityTable {
    cities: Vec<City>,
}

impl CityTable {
    pub fn new(cities: Vec<City>) -> Result<Self> {
        if cities.is_empty() {
            return Err(Error::invalid_input(
                "No cities with resolvable coordinates",
            ));
        }

        let mut seen = HashSet::with_capacity(cities.len());
        for city in &cities {
            if !city.is_valid() {
                return Err(Error::invalid_data(format!(
                    "City {} has out-of-range coordinates ({},{})",
                    city.name, city.latitude, city.longitude
                )));
            }
            if !seen.insert(city.name.as_str()) {
                return Err(Error::invalid_input(format!(
                    "Duplicate city name: {}",
                    city.name
                )));
            }
        }

        Ok(Self { cities })
    }

    pub fn len(&self) -> usize {
        self.cities.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cities.is_empty()
    }

    pub fn get(&self, idx: usize) -> &City {
        &self.cities[idx]
    }

    pub fn cities(&self) -> &[City] {
        &self.cities
    }

    /// City names in the order the given tour visits them.
    pub fn route_names(&self, order: &[usize]) -> Vec<String> {
        order
            .iter()
            .map(|&idx| self.cities[idx].name.clone())
            .collect()
    }
}
