//! Capabilities a UI surface implements to receive presenter updates.
//!
//! Calls may arrive on any runtime worker thread, so implementations hop to
//! their own UI thread if they need one.

use crate::data::{Location, Restaurant};

/// The restaurant list screen.
pub trait RestaurantsView: Send + Sync + 'static {
    fn show_loading(&self);
    fn hide_loading(&self);
    /// Replace whatever is displayed with `restaurants`.
    fn show_restaurants(&self, restaurants: Vec<Restaurant>);
    fn show_error(&self, error: &str);
}

/// The single restaurant screen.
///
/// The presenter only drives `show_restaurant`; the per-field methods are
/// there for implementations that render field by field.
pub trait RestaurantDetailsView: Send + Sync + 'static {
    fn show_name(&self, name: &str);
    fn show_photo(&self, photo: &str);
    fn show_rating(&self, rating: f32);
    fn show_restaurant(&self, restaurant: Restaurant);
}

pub trait MapView: Send + Sync + 'static {
    fn add_marker(&self, title: &str, position: Location);
}
