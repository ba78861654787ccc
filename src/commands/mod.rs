pub mod benchmark;
pub mod cities;
pub mod simulate;

use std::path::Path;

use rand::{SeedableRng, rngs::StdRng};
use tsp_sim_core::{
    CityTable, CoordinateCache, DEFAULT_PACING, NominatimGeocoder, Result, resolve_city_table,
};

/// Load the cache, resolve every name, persist the cache once.
pub(crate) fn build_city_table<S: AsRef<str>>(cache_path: &Path, names: &[S]) -> Result<CityTable> {
    let mut cache = CoordinateCache::load(cache_path)?;
    let geocoder = NominatimGeocoder::new()?;
    let table = resolve_city_table(names, &mut cache, &geocoder, DEFAULT_PACING)?;
    cache.save(cache_path)?;
    Ok(table)
}

pub(crate) fn rng_from_seed(seed: Option<u64>) -> StdRng {
    match seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_os_rng(),
    }
}
