use std::path::Path;
use std::sync::Arc;
use std::time::Instant;

use anyhow::{Context, Result};
use rand::rngs::StdRng;
use rand::SeedableRng;
use seethio_core::{
    generate_itinerary, generate_itinerary_with_rng, CatalogSummary, Itinerary, ItineraryRequest,
    PlannerConfig, PlannerError, ReferenceCatalog,
};
use seethio_observability::AppMetrics;
use tracing::{info, instrument, warn};

#[derive(Clone)]
pub struct ItineraryService {
    catalog: Arc<ReferenceCatalog>,
    config: PlannerConfig,
    metrics: Arc<AppMetrics>,
}

impl ItineraryService {
    pub fn new(
        catalog: Arc<ReferenceCatalog>,
        config: PlannerConfig,
        metrics: Arc<AppMetrics>,
    ) -> Self {
        Self {
            catalog,
            config,
            metrics,
        }
    }

    pub fn load(
        path: Option<&Path>,
        config: PlannerConfig,
        metrics: Arc<AppMetrics>,
    ) -> Result<Self> {
        let catalog = match path {
            Some(path) => ReferenceCatalog::from_json_file(path)
                .with_context(|| format!("failed loading catalog from {}", path.display()))?,
            None => ReferenceCatalog::builtin().clone(),
        };

        info!(
            destinations = catalog.len(),
            exhaustion = config.exhaustion.as_code(),
            max_trip_days = config.max_trip_days,
            "itinerary catalog loaded"
        );

        Ok(Self::new(Arc::new(catalog), config, metrics))
    }

    pub fn catalog(&self) -> &ReferenceCatalog {
        &self.catalog
    }

    pub fn catalog_summary(&self) -> CatalogSummary {
        self.catalog.summary()
    }

    pub fn config(&self) -> PlannerConfig {
        self.config
    }

    pub fn metrics(&self) -> &Arc<AppMetrics> {
        &self.metrics
    }

    #[instrument(
        skip(self, request),
        fields(
            destination = %request.destination,
            interest = %request.interest,
            trip_length = request.trip_length
        )
    )]
    pub fn generate(
        &self,
        request: &ItineraryRequest,
        seed: Option<u64>,
    ) -> Result<Itinerary, PlannerError> {
        let started = Instant::now();
        self.metrics.inc_request();

        let result = match seed {
            Some(seed) => generate_itinerary_with_rng(
                &self.catalog,
                request,
                &self.config,
                &mut StdRng::seed_from_u64(seed),
            ),
            None => generate_itinerary(&self.catalog, request, &self.config),
        };
        self.metrics.observe_latency(started.elapsed());

        match &result {
            Ok(itinerary) => {
                self.metrics.record_itinerary(itinerary.trip_length);
                info!(
                    destination = %itinerary.destination,
                    interest = %itinerary.interest,
                    days = itinerary.trip_length,
                    "itinerary generated"
                );
            }
            Err(error) => {
                self.metrics.inc_planner_error(error.code());
                warn!(code = error.code(), %error, "itinerary rejected");
            }
        }

        result
    }
}
