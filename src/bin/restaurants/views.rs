use std::sync::Mutex;

use restaurant_finder::data::{Location, Restaurant};
use restaurant_finder::render::{detail_rows, render_restaurants, DetailField, RowBinder};
use restaurant_finder::view::{MapView, RestaurantDetailsView, RestaurantsView};

/// Prints the list screen; keeps the last shown list around like a real screen would.
#[derive(Default)]
pub(super) struct TerminalListView {
    restaurants: Mutex<Vec<Restaurant>>,
}

struct StdoutRows;

impl RowBinder for StdoutRows {
    fn begin(&mut self, count: usize) {
        if count == 0 {
            println!("No restaurants found.");
        }
    }

    fn bind(&mut self, position: usize, restaurant: &Restaurant) {
        println!(
            "{position:>3}. {} ({:.1}) {}",
            restaurant.name, restaurant.rating, restaurant.photo
        );
    }
}

impl RestaurantsView for TerminalListView {
    fn show_loading(&self) {
        eprintln!("Loading...");
    }

    fn hide_loading(&self) {}

    fn show_restaurants(&self, restaurants: Vec<Restaurant>) {
        let Ok(mut shown) = self.restaurants.lock() else {
            tracing::error!("list view state poisoned");
            return;
        };
        *shown = restaurants;
        render_restaurants(&shown, &mut StdoutRows);
    }

    fn show_error(&self, error: &str) {
        eprintln!("Fail to load restaurants: {error}");
    }
}

pub(super) struct TerminalDetailsView;

impl RestaurantDetailsView for TerminalDetailsView {
    fn show_name(&self, name: &str) {
        println!("{}: {name}", DetailField::Name);
    }

    fn show_photo(&self, photo: &str) {
        println!("{}: {photo}", DetailField::Photo);
    }

    fn show_rating(&self, rating: f32) {
        println!("{}: {rating:.1}", DetailField::Rating);
    }

    fn show_restaurant(&self, restaurant: Restaurant) {
        for (field, value) in detail_rows(&restaurant) {
            match field {
                DetailField::Name => self.show_name(&value),
                DetailField::Photo => self.show_photo(&value),
                DetailField::Rating => self.show_rating(restaurant.rating),
                DetailField::Location => println!("{field}: {value}"),
            }
        }
    }
}

pub(super) struct TerminalMapView;

impl MapView for TerminalMapView {
    fn add_marker(&self, title: &str, position: Location) {
        println!("marker {title:?} at {:.5}, {:.5}", position.lat, position.lng);
    }
}
