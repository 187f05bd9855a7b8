//! Row rendering for list and detail screens.
//!
//! A screen keeps the immutable slice it was last given and refers to rows
//! by position in it; nothing here holds on to widgets.

use std::fmt;

use crate::data::Restaurant;

pub trait RowBinder {
    /// Called once before any row, with the number of rows to come.
    fn begin(&mut self, _count: usize) {}

    fn bind(&mut self, position: usize, restaurant: &Restaurant);
}

/// Bind every restaurant in order, position `i` being `restaurants[i]`.
pub fn render_restaurants<B: RowBinder>(restaurants: &[Restaurant], binder: &mut B) {
    binder.begin(restaurants.len());
    for (position, restaurant) in restaurants.iter().enumerate() {
        binder.bind(position, restaurant);
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DetailField {
    Name,
    Photo,
    Rating,
    Location,
}

impl fmt::Display for DetailField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Self::Name => "Name",
            Self::Photo => "Photo",
            Self::Rating => "Rating",
            Self::Location => "Location",
        };
        f.write_str(label)
    }
}

pub fn detail_rows(restaurant: &Restaurant) -> Vec<(DetailField, String)> {
    let location = restaurant.location;
    vec![
        (DetailField::Name, restaurant.name.clone()),
        (DetailField::Photo, restaurant.photo.clone()),
        (DetailField::Rating, format!("{:.1}", restaurant.rating)),
        (
            DetailField::Location,
            format!("{:.5}, {:.5}", location.lat, location.lng),
        ),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::Location;

    #[derive(Default)]
    struct Rows {
        count: Option<usize>,
        bound: Vec<(usize, String)>,
    }

    impl RowBinder for Rows {
        fn begin(&mut self, count: usize) {
            self.count = Some(count);
        }

        fn bind(&mut self, position: usize, restaurant: &Restaurant) {
            self.bound.push((position, restaurant.name.clone()));
        }
    }

    fn restaurant(name: &str) -> Restaurant {
        Restaurant {
            name: name.to_string(),
            photo: "x.png".to_string(),
            rating: 4.5,
            location: Location {
                lat: -34.603722,
                lng: -58.381592,
            },
        }
    }

    #[test]
    fn test_rows_follow_slice_positions() {
        let list = [restaurant("a"), restaurant("b"), restaurant("a")];
        let mut rows = Rows::default();

        render_restaurants(&list, &mut rows);

        assert_eq!(rows.count, Some(3));
        assert_eq!(
            rows.bound,
            [(0, "a".to_string()), (1, "b".to_string()), (2, "a".to_string())]
        );
    }

    #[test]
    fn test_empty_list_still_begins() {
        let mut rows = Rows::default();
        render_restaurants(&[], &mut rows);
        assert_eq!(rows.count, Some(0));
        assert!(rows.bound.is_empty());
    }

    #[test]
    fn test_detail_rows() {
        let rows = detail_rows(&restaurant("Cafe Tortoni"));
        let labels: Vec<_> = rows.iter().map(|(field, _)| field.to_string()).collect();

        assert_eq!(labels, ["Name", "Photo", "Rating", "Location"]);
        assert_eq!(rows[0].1, "Cafe Tortoni");
        assert_eq!(rows[2].1, "4.5");
        assert_eq!(rows[3].1, "-34.60372, -58.38159");
    }
}
