use actix_web::{web, HttpResponse};
use anyhow::Context;
use fuzzy_matcher::{skim::SkimMatcherV2, FuzzyMatcher};
use restaurant_finder::data::Restaurant;

pub(super) struct ApiState {
    restaurants: Vec<Restaurant>,
}

impl ApiState {
    /// Fixtures are a JSON array of restaurants, ids are array positions.
    pub(super) fn load(path: &str) -> anyhow::Result<Self> {
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("fail to read fixtures from {path}"))?;
        let restaurants = serde_json::from_str(&text)
            .with_context(|| format!("fail to parse fixtures in {path}"))?;
        Ok(Self { restaurants })
    }
}

pub(super) fn routes(cfg: &mut web::ServiceConfig) {
    // search has to be registered before the id route or it would be taken as an id
    cfg.service(list_restaurants)
        .service(search_restaurants)
        .service(get_restaurant);
}

#[derive(serde::Serialize)]
struct ErrJsonResp {
    message: String,
}

#[actix_web::get("/restaurants")]
async fn list_restaurants(data: web::Data<ApiState>) -> HttpResponse {
    HttpResponse::Ok().json(&data.restaurants)
}

#[derive(serde::Deserialize)]
struct SearchQuery {
    #[serde(default)]
    q: String,
}

#[actix_web::get("/restaurants/search")]
async fn search_restaurants(
    data: web::Data<ApiState>,
    query: web::Query<SearchQuery>,
) -> HttpResponse {
    HttpResponse::Ok().json(search_by_name(&data.restaurants, &query.q))
}

#[derive(serde::Deserialize)]
struct RestaurantPath {
    id: String,
}

#[actix_web::get("/restaurants/{id}")]
async fn get_restaurant(
    data: web::Data<ApiState>,
    path: web::Path<RestaurantPath>,
) -> HttpResponse {
    let found = path
        .id
        .parse::<usize>()
        .ok()
        .and_then(|index| data.restaurants.get(index));
    match found {
        Some(restaurant) => HttpResponse::Ok().json(restaurant),
        None => HttpResponse::NotFound().json(ErrJsonResp {
            message: format!("no restaurant with id {}", path.id),
        }),
    }
}

fn search_by_name(restaurants: &[Restaurant], pattern: &str) -> Vec<Restaurant> {
    if pattern.is_empty() {
        return restaurants.to_vec();
    }
    let matcher = SkimMatcherV2::default();
    restaurants
        .iter()
        .filter(|restaurant| matcher.fuzzy_match(&restaurant.name, pattern).is_some())
        .cloned()
        .collect()
}
