use std::future::Future;
use std::sync::Arc;

use tokio::task::JoinHandle;

use crate::api::{ApiResult, RestaurantApi, RestaurantSource};
use crate::config::ClientConfig;
use crate::data::Restaurant;

/// Single point of contact between the presenters and the remote data.
///
/// Every operation issues exactly one request on a freshly spawned task and
/// hands its outcome to `on_result` exactly once, success or failure. Calls
/// are independent of each other: nothing is cached, coalesced or cancelled,
/// so overlapping calls complete in whatever order the network decides.
///
/// The returned [`JoinHandle`] only signals completion. Dropping it does not
/// abort the request. All operations must be called from within a tokio
/// runtime.
pub struct RestaurantRepository<S = RestaurantApi> {
    source: Arc<S>,
}

impl<S> Clone for RestaurantRepository<S> {
    fn clone(&self) -> Self {
        Self {
            source: Arc::clone(&self.source),
        }
    }
}

impl RestaurantRepository<RestaurantApi> {
    pub fn from_config(config: &ClientConfig) -> ApiResult<Self> {
        Ok(Self::new(RestaurantApi::new(config)?))
    }
}

impl<S: RestaurantSource> RestaurantRepository<S> {
    pub fn new(source: S) -> Self {
        Self {
            source: Arc::new(source),
        }
    }

    pub fn source(&self) -> &S {
        &self.source
    }

    pub fn get_restaurants<F>(&self, on_result: F) -> JoinHandle<()>
    where
        F: FnOnce(ApiResult<Vec<Restaurant>>) + Send + 'static,
    {
        let source = Arc::clone(&self.source);
        dispatch("restaurant list", on_result, async move {
            source.list_restaurants().await
        })
    }

    pub fn get_restaurant<F>(&self, id: &str, on_result: F) -> JoinHandle<()>
    where
        F: FnOnce(ApiResult<Restaurant>) + Send + 'static,
    {
        let source = Arc::clone(&self.source);
        let id = id.to_string();
        dispatch("restaurant details", on_result, async move {
            source.get_restaurant(&id).await
        })
    }

    pub fn search_restaurants<F>(&self, query: &str, on_result: F) -> JoinHandle<()>
    where
        F: FnOnce(ApiResult<Vec<Restaurant>>) + Send + 'static,
    {
        let source = Arc::clone(&self.source);
        let query = query.to_string();
        dispatch("restaurant search", on_result, async move {
            source.search_restaurants(&query).await
        })
    }
}

fn dispatch<T, F, Fut>(what: &'static str, on_result: F, request: Fut) -> JoinHandle<()>
where
    T: Send + 'static,
    F: FnOnce(ApiResult<T>) + Send + 'static,
    Fut: Future<Output = ApiResult<T>> + Send + 'static,
{
    tokio::spawn(async move {
        let result = request.await;
        if let Err(e) = &result {
            tracing::warn!("fail to fetch {what}: {e}");
        }
        on_result(result);
    })
}
