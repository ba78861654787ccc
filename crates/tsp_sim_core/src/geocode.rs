//! Coordinate resolution: a persistent JSON cache in front of a forward
//! geocoding service, feeding the immutable [`CityTable`].

use std::{
    collections::BTreeMap,
    fs,
    path::Path,
    thread,
    time::Duration,
};

use serde::{Deserialize, Serialize};
use tempfile::NamedTempFile;

use crate::{City, CityTable, Error, Result};

pub const DEFAULT_CACHE_FILE: &str = "city_coordinates_cache.json";

/// Delay after every cache miss, out of courtesy to the public endpoint.
pub const DEFAULT_PACING: Duration = Duration::from_secs(1);

const NOMINATIM_URL: &str = "https://nominatim.openstreetmap.org/search";
const USER_AGENT: &str = "tsp-sim/0.1";
const HTTP_TIMEOUT: Duration = Duration::from_secs(10);

/// Default working set, used when no city names are given on the command line.
pub const DEFAULT_CITIES: [&str; 20] = [
    "New York",
    "Knoxville",
    "Birmingham",
    "Baltimore",
    "Bangor",
    "Cleveland",
    "Chicago",
    "Denver",
    "Los Angeles",
    "San Francisco",
    "Raleigh",
    "Seattle",
    "Boston",
    "Houston",
    "Dallas",
    "Miami",
    "Atlanta",
    "Fort Worth",
    "Phoenix",
    "San Diego",
];

#[derive(Clone, Copy, Debug, Deserialize, Serialize)]
pub struct CachedCoordinate {
    pub latitude: f64,
    pub longitude: f64,
}

/// On-disk coordinate cache keyed by city name.
///
/// Loaded once at startup and persisted once after table construction; never
/// touched mid-optimization. A missing file is a valid cold start.
#[derive(Debug, Default)]
pub struct CoordinateCache {
    entries: BTreeMap<String, CachedCoordinate>,
}

impl CoordinateCache {
    pub fn load(path: &Path) -> Result<Self> {
        if !path.exists() {
            log::debug!("cache: cold start path={}", path.display());
            return Ok(Self::default());
        }

        let raw = fs::read_to_string(path)?;
        let entries: BTreeMap<String, CachedCoordinate> = serde_json::from_str(&raw)?;
        log::debug!(
            "cache: loaded path={} entries={}",
            path.display(),
            entries.len()
        );
        Ok(Self { entries })
    }

    /// Write-then-rename so a failed write never corrupts the existing file.
    pub fn save(&self, path: &Path) -> Result<()> {
        let dir = match path.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => parent,
            _ => Path::new("."),
        };
        let tmp = NamedTempFile::new_in(dir)?;
        serde_json::to_writer_pretty(tmp.as_file(), &self.entries)?;
        tmp.persist(path)
            .map_err(|e| Error::other(format!("persist cache {}: {e}", path.display())))?;

        log::debug!(
            "cache: saved path={} entries={}",
            path.display(),
            self.entries.len()
        );
        Ok(())
    }

    pub fn get(&self, city: &str) -> Option<CachedCoordinate> {
        self.entries.get(city).copied()
    }

    pub fn insert(&mut self, city: &str, latitude: f64, longitude: f64) {
        self.entries.insert(
            city.to_owned(),
            CachedCoordinate {
                latitude,
                longitude,
            },
        );
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Source of coordinates for cache misses.
pub trait Geocoder {
    /// `Ok(None)` when the service knows nothing under the given name.
    fn lookup(&self, city: &str) -> Result<Option<(f64, f64)>>;
}

/// Forward geocoder backed by the public Nominatim search endpoint.
pub struct NominatimGeocoder {
    client: reqwest::blocking::Client,
}

impl NominatimGeocoder {
    pub fn new() -> Result<Self> {
        let client = reqwest::blocking::Client::builder()
            .user_agent(USER_AGENT)
            .timeout(HTTP_TIMEOUT)
            .build()?;
        Ok(Self { client })
    }
}

// Nominatim serializes coordinates as strings.
#[derive(Debug, Deserialize)]
struct NominatimPlace {
    lat: String,
    lon: String,
}

impl Geocoder for NominatimGeocoder {
    fn lookup(&self, city: &str) -> Result<Option<(f64, f64)>> {
        let response = self
            .client
            .get(NOMINATIM_URL)
            .query(&[("q", city), ("format", "json"), ("limit", "1")])
            .send()?
            .error_for_status()?;

        let raw = response.text()?;
        let places: Vec<NominatimPlace> = serde_json::from_str(&raw)?;
        let Some(place) = places.into_iter().next() else {
            return Ok(None);
        };

        let latitude = parse_coordinate(city, "latitude", &place.lat)?;
        let longitude = parse_coordinate(city, "longitude", &place.lon)?;
        Ok(Some((latitude, longitude)))
    }
}

fn parse_coordinate(city: &str, field: &str, value: &str) -> Result<f64> {
    value.parse().map_err(|_| {
        Error::invalid_data(format!(
            "geocoder returned non-numeric {field} for {city}: {value}"
        ))
    })
}

/// Build the city table for `names`, consulting the cache first and pacing
/// every external lookup.
///
/// A name the geocoder cannot resolve is excluded with a warning; it never
/// enters the table with placeholder coordinates. An empty result fails fast
/// before any simulation runs.
pub fn resolve_city_table<S: AsRef<str>, G: Geocoder>(
    names: &[S],
    cache: &mut CoordinateCache,
    geocoder: &G,
    pacing: Duration,
) -> Result<CityTable> {
    let mut cities = Vec::with_capacity(names.len());

    for name in names {
        let name = name.as_ref();
        if let Some(hit) = cache.get(name) {
            log::debug!("geocode: cache hit city={name}");
            cities.push(City::new(name, hit.latitude, hit.longitude));
            continue;
        }

        log::info!("geocode: lookup city={name}");
        match geocoder.lookup(name)? {
            Some((latitude, longitude)) => {
                cache.insert(name, latitude, longitude);
                cities.push(City::new(name, latitude, longitude));
            }
            None => {
                log::warn!("geocode: no coordinates for city={name}, excluding it");
            }
        }
        thread::sleep(pacing);
    }

    CityTable::new(cities)
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;
    use std::time::Duration;

    use super::{CoordinateCache, Geocoder, resolve_city_table};
    use crate::Result;

    struct StubGeocoder {
        places: HashMap<&'static str, (f64, f64)>,
    }

    impl StubGeocoder {
        fn new(places: &[(&'static str, (f64, f64))]) -> Self {
            Self {
                places: places.iter().copied().collect(),
            }
        }
    }

    impl Geocoder for StubGeocoder {
        fn lookup(&self, city: &str) -> Result<Option<(f64, f64)>> {
            Ok(self.places.get(city).copied())
        }
    }

    #[test]
    fn load_tolerates_a_missing_file() {
        let dir = tempfile::tempdir().expect("tempdir");
        let cache = CoordinateCache::load(&dir.path().join("absent.json")).expect("load");
        assert!(cache.is_empty());
    }

    #[test]
    fn cache_round_trips_through_disk() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("cache.json");

        let mut cache = CoordinateCache::default();
        cache.insert("Testville", 40.7128, -74.0060);
        cache.save(&path).expect("save");

        let loaded = CoordinateCache::load(&path).expect("load");
        assert_eq!(loaded.len(), 1);
        let entry = loaded.get("Testville").expect("entry");
        assert_eq!(entry.latitude, 40.7128);
        assert_eq!(entry.longitude, -74.0060);
    }

    #[test]
    fn load_rejects_a_corrupt_file() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("cache.json");
        std::fs::write(&path, "not json").expect("write");
        assert!(CoordinateCache::load(&path).is_err());
    }

    #[test]
    fn resolve_mixes_cache_hits_and_lookups_in_input_order() {
        let mut cache = CoordinateCache::default();
        cache.insert("A", 1.0, 2.0);
        let geocoder = StubGeocoder::new(&[("B", (3.0, 4.0))]);

        let table = resolve_city_table(&["A", "B"], &mut cache, &geocoder, Duration::ZERO)
            .expect("table");

        assert_eq!(table.len(), 2);
        assert_eq!(table.get(0).name, "A");
        assert_eq!(table.get(1).name, "B");
        assert_eq!(table.get(1).latitude, 3.0);
        // The miss was written back for the next run.
        assert!(cache.get("B").is_some());
    }

    #[test]
    fn resolve_excludes_unresolvable_names() {
        let mut cache = CoordinateCache::default();
        let geocoder = StubGeocoder::new(&[("A", (1.0, 2.0))]);

        let table = resolve_city_table(
            &["A", "Atlantis"],
            &mut cache,
            &geocoder,
            Duration::ZERO,
        )
        .expect("table");

        assert_eq!(table.len(), 1);
        assert_eq!(table.get(0).name, "A");
        assert!(cache.get("Atlantis").is_none());
    }

    #[test]
    fn resolve_fails_when_nothing_resolves() {
        let mut cache = CoordinateCache::default();
        let geocoder = StubGeocoder::new(&[]);

        let err = resolve_city_table(&["Atlantis"], &mut cache, &geocoder, Duration::ZERO)
            .expect_err("empty table should fail");
        assert!(err.to_string().contains("No cities"));
    }
}
