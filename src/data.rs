use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Restaurant {
    pub name: String,
    /// URI of the cover photo
    pub photo: String,
    /// usually within 0.0..=5.0, the server is trusted on this
    pub rating: f32,
    pub location: Location,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Location {
    pub lat: f64,
    pub lng: f64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decode_server_shape() {
        let body = r#"{"name":"Cafe","photo":"p.jpg","rating":4.5,"location":{"lat":1.0,"lng":2.0}}"#;
        let restaurant: Restaurant = serde_json::from_str(body).unwrap();
        assert_eq!(
            restaurant,
            Restaurant {
                name: "Cafe".to_string(),
                photo: "p.jpg".to_string(),
                rating: 4.5,
                location: Location { lat: 1.0, lng: 2.0 },
            }
        );
    }

    #[test]
    fn test_json_round_trip_keeps_edge_values() {
        for (rating, lat, lng) in [(0.0, -33.8688, -151.2093), (5.0, 90.0, 180.0)] {
            let restaurant = Restaurant {
                name: "Bar Sur".to_string(),
                photo: "https://img.example/sur.png".to_string(),
                rating,
                location: Location { lat, lng },
            };
            let json = serde_json::to_string(&restaurant).unwrap();
            let back: Restaurant = serde_json::from_str(&json).unwrap();
            assert_eq!(back, restaurant);
        }
    }

    #[test]
    fn test_missing_location_is_rejected() {
        let body = r#"{"name":"Cafe","photo":"p.jpg","rating":4.5}"#;
        assert!(serde_json::from_str::<Restaurant>(body).is_err());
    }
}
