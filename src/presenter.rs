//! Presenters translate UI intents into repository calls and repository
//! results into view calls. They keep no state besides their collaborators.
//!
//! Every intent returns the completion handle of the underlying request. No
//! result travels through it; views are the only output. A newer request does
//! not cancel an older one, whichever completes last is what stays displayed.

use std::sync::Arc;

use tokio::task::JoinHandle;

use crate::api::{ApiResult, RestaurantSource};
use crate::data::Restaurant;
use crate::repository::RestaurantRepository;
use crate::view::{MapView, RestaurantDetailsView, RestaurantsView};

pub struct RestaurantsPresenter<V, S> {
    view: Arc<V>,
    repository: RestaurantRepository<S>,
}

impl<V: RestaurantsView, S: RestaurantSource> RestaurantsPresenter<V, S> {
    pub fn new(view: Arc<V>, repository: RestaurantRepository<S>) -> Self {
        Self { view, repository }
    }

    pub fn load_restaurants(&self) -> JoinHandle<()> {
        self.view.show_loading();
        let view = Arc::clone(&self.view);
        self.repository
            .get_restaurants(move |result| show_list(view.as_ref(), result))
    }

    pub fn search_restaurants(&self, query: &str) -> JoinHandle<()> {
        self.view.show_loading();
        let view = Arc::clone(&self.view);
        self.repository
            .search_restaurants(query, move |result| show_list(view.as_ref(), result))
    }
}

fn show_list<V: RestaurantsView>(view: &V, result: ApiResult<Vec<Restaurant>>) {
    view.hide_loading();
    match result {
        Ok(restaurants) => view.show_restaurants(restaurants),
        Err(e) => view.show_error(&e.message()),
    }
}

pub struct RestaurantDetailsPresenter<V, S> {
    view: Arc<V>,
    repository: RestaurantRepository<S>,
}

impl<V: RestaurantDetailsView, S: RestaurantSource> RestaurantDetailsPresenter<V, S> {
    pub fn new(view: Arc<V>, repository: RestaurantRepository<S>) -> Self {
        Self { view, repository }
    }

    /// The view has no error capability, a failed fetch leaves it untouched.
    pub fn load_restaurant(&self, restaurant_id: &str) -> JoinHandle<()> {
        let view = Arc::clone(&self.view);
        self.repository
            .get_restaurant(restaurant_id, move |result| {
                if let Ok(restaurant) = result {
                    view.show_restaurant(restaurant);
                }
            })
    }
}

pub struct MapPresenter<V, S> {
    view: Arc<V>,
    repository: RestaurantRepository<S>,
}

impl<V: MapView, S: RestaurantSource> MapPresenter<V, S> {
    pub fn new(view: Arc<V>, repository: RestaurantRepository<S>) -> Self {
        Self { view, repository }
    }

    /// Place one marker per restaurant, in server order.
    pub fn on_map_ready(&self) -> JoinHandle<()> {
        let view = Arc::clone(&self.view);
        self.repository.get_restaurants(move |result| {
            let Ok(restaurants) = result else { return };
            for restaurant in &restaurants {
                view.add_marker(&restaurant.name, restaurant.location);
            }
        })
    }
}
