//! Tour retrieval for [`ToursClient`].

use std::future::Future;

use crate::client::ToursClient;
use crate::endpoints;
use crate::error::Result;
use crate::models::Tour;
use crate::source::TourSource;

impl TourSource for ToursClient {
    fn list_tours(&self) -> impl Future<Output = Result<Vec<Tour>>> + Send {
        endpoints::list_tours(&self.http, &self.tours_url)
    }
}
