use crate::CityTable;

/// Total closed-loop length of `order` in miles: every consecutive edge plus
/// the edge from the last city back to the first, summed left to right.
///
/// `order` must be a permutation of the table's indices; anything else is a
/// caller bug and panics.
pub fn cycle_distance_miles(table: &CityTable, order: &[usize]) -> f64 {
    assert_permutation(table.len(), order);

    let n = order.len();
    if n < 2 {
        return 0.0;
    }

    (0..n)
        .map(|i| {
            table
                .get(order[i])
                .dist_miles(table.get(order[(i + 1) % n]))
        })
        .sum()
}

fn assert_permutation(n: usize, order: &[usize]) {
    assert_eq!(
        order.len(),
        n,
        "tour length {} does not match city count {n}",
        order.len()
    );
    let mut seen = vec![false; n];
    for &idx in order {
        assert!(idx < n, "tour index {idx} out of bounds for {n} cities");
        assert!(!seen[idx], "tour visits index {idx} twice");
        seen[idx] = true;
    }
}

#[cfg(test)]
mod tests {
    use super::cycle_distance_miles;
    use crate::{City, CityTable};

    fn table(cities: Vec<City>) -> CityTable {
        CityTable::new(cities).expect("table")
    }

    #[test]
    fn two_cities_traverse_the_edge_twice() {
        let t = table(vec![City::new("A", 0.0, 0.0), City::new("B", 0.0, 1.0)]);
        let edge = t.get(0).dist_miles(t.get(1));
        let cycle = cycle_distance_miles(&t, &[0, 1]);
        assert!(edge > 0.0);
        assert!((cycle - 2.0 * edge).abs() < 1e-9);
    }

    #[test]
    fn reversing_a_tour_keeps_the_distance() {
        let t = table(vec![
            City::new("A", 0.0, 0.0),
            City::new("B", 10.0, 10.0),
            City::new("C", -5.0, 20.0),
            City::new("D", 3.0, -7.0),
        ]);
        let forward = cycle_distance_miles(&t, &[0, 1, 2, 3]);
        let backward = cycle_distance_miles(&t, &[3, 2, 1, 0]);
        assert!(forward >= 0.0);
        assert!((forward - backward).abs() < 1e-9);
    }

    #[test]
    fn single_city_cycle_has_zero_length() {
        let t = table(vec![City::new("A", 12.0, 34.0)]);
        assert_eq!(cycle_distance_miles(&t, &[0]), 0.0);
    }

    #[test]
    #[should_panic(expected = "does not match city count")]
    fn wrong_length_order_panics() {
        let t = table(vec![City::new("A", 0.0, 0.0), City::new("B", 0.0, 1.0)]);
        cycle_distance_miles(&t, &[0]);
    }

    #[test]
    #[should_panic(expected = "visits index 0 twice")]
    fn duplicate_index_panics() {
        let t = table(vec![City::new("A", 0.0, 0.0), City::new("B", 0.0, 1.0)]);
        cycle_distance_miles(&t, &[0, 0]);
    }
}
