use std::fmt;

const EARTH_RADIUS_MILES: f64 = 3_958.761;
const NINETY: f64 = 90.0;
const ONE_EIGHTY: f64 = NINETY * 2.0;

/// A named point on the globe. Coordinates are decimal degrees.
#[derive(Clone, Debug, PartialEq)]
pub struct City {
    pub name: String,
    pub latitude: f64,
    pub longitude: f64,
}

impl City {
    pub fn new(name: impl Into<String>, latitude: f64, longitude: f64) -> Self {
        Self {
            name: name.into(),
            latitude,
            longitude,
        }
    }

    pub fn dist_miles(&self, rhs: &Self) -> f64 {
        // Haversine miles
        let (lat1, lat2) = (self.latitude.to_radians(), rhs.latitude.to_radians());
        let dlat = (rhs.latitude - self.latitude).to_radians();
        let dlng = (rhs.longitude - self.longitude).to_radians();
        let s1 = (dlat / 2.0).sin();
        let s2 = (dlng / 2.0).sin();
        let h = s1 * s1 + lat1.cos() * lat2.cos() * s2 * s2;
        2.0 * EARTH_RADIUS_MILES * h.sqrt().asin()
    }

    pub(crate) fn is_valid(&self) -> bool {
        self.latitude.is_finite()
            && self.longitude.is_finite()
            && (-NINETY..=NINETY).contains(&self.latitude)
            && (-ONE_EIGHTY..=ONE_EIGHTY).contains(&self.longitude)
    }
}

impl fmt::Display for City {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut b1 = ryu::Buffer::new();
        let mut b2 = ryu::Buffer::new();
        write!(
            f,
            "{} ({},{})",
            self.name,
            b1.format(self.latitude),
            b2.format(self.longitude)
        )
    }
}

#[cfg(test)]
mod tests {
    use super::City;

    #[test]
    fn valid_bounds_are_accepted() {
        assert!(City::new("a", -90.0, -180.0).is_valid());
        assert!(City::new("b", 90.0, 180.0).is_valid());
    }

    #[test]
    fn invalid_values_are_rejected() {
        assert!(!City::new("a", 91.0, 0.0).is_valid());
        assert!(!City::new("b", 0.0, 181.0).is_valid());
        assert!(!City::new("c", f64::NAN, 0.0).is_valid());
        assert!(!City::new("d", 0.0, f64::INFINITY).is_valid());
    }

    #[test]
    fn dist_is_symmetric_and_zero_for_same_point() {
        let a = City::new("San Francisco", 37.7749, -122.4194);
        let b = City::new("Los Angeles", 34.0522, -118.2437);

        let dab = a.dist_miles(&b);
        let dba = b.dist_miles(&a);
        let daa = a.dist_miles(&a);

        assert!((dab - dba).abs() < 1e-9);
        assert!(daa.abs() < 1e-12);
    }

    #[test]
    fn dist_is_in_miles() {
        // SF to LA is roughly 350 miles great-circle.
        let a = City::new("San Francisco", 37.7749, -122.4194);
        let b = City::new("Los Angeles", 34.0522, -118.2437);
        let d = a.dist_miles(&b);
        assert!((300.0..400.0).contains(&d), "unexpected distance: {d}");
    }

    #[test]
    fn display_formats_name_and_coordinates() {
        let city = City::new("Testville", 1.5, -2.25);
        assert_eq!(city.to_string(), "Testville (1.5,-2.25)");
    }
}
