//! Fastest-warehouse selection for a return
//!
//! Every warehouse registered for the order's category is routed from the
//! user's location; the candidate with the lowest travel time wins and its
//! path is kept together with the derived trip costs. Candidates whose
//! response carries no path are skipped. A transport failure aborts the
//! whole search.

use futures::future::join_all;
use serde::Serialize;
use thiserror::Error;
use tracing::{debug, info, warn};

use crate::services::cost::{CostModel, TripCosts};
use crate::services::routing::RoutingService;
use crate::types::{Coordinates, Instruction, ReturnOrder, RoutePath, RouteTime, WarehouseCandidate};

#[derive(Debug, Error)]
pub enum RouteError {
    #[error("Location unavailable: enable location services first")]
    LocationUnavailable,

    #[error("No warehouses available for category '{category}'. Add addresses first.")]
    NoCandidates { category: String },

    #[error("Error fetching route")]
    Routing(#[source] anyhow::Error),

    #[error("No route found to any of {evaluated} warehouses")]
    NoRoute { evaluated: usize },
}

/// How candidate requests are issued
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SearchMode {
    /// One request at a time, in candidate order
    #[default]
    Sequential,
    /// All requests in flight at once, reduced in candidate order
    Concurrent,
}

/// The winning route with everything needed to present it
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BestRoute {
    pub warehouse: WarehouseCandidate,
    pub time_seconds: f64,
    pub distance_meters: f64,
    /// Decoded path as [lat, lng] pairs
    pub points: Vec<[f64; 2]>,
    pub instructions: Vec<Instruction>,
    pub costs: TripCosts,
    /// Two-decimal figures shown to the driver
    pub display_costs: TripCosts,
    /// Times of every successfully evaluated candidate, in evaluation order
    pub route_times: Vec<RouteTime>,
}

impl BestRoute {
    pub fn is_fastest(&self, route_time: &RouteTime) -> bool {
        route_time.candidate_id == self.warehouse.id
    }
}

/// Streaming minimum over candidate results; strict `<` keeps the first of equals
#[derive(Default)]
struct FastestTracker {
    best: Option<(WarehouseCandidate, RoutePath)>,
    route_times: Vec<RouteTime>,
}

impl FastestTracker {
    fn offer(&mut self, candidate: &WarehouseCandidate, path: RoutePath) {
        self.route_times.push(RouteTime {
            candidate_id: candidate.id.clone(),
            address: candidate.address.clone(),
            time_seconds: path.time_seconds,
        });

        let faster = self
            .best
            .as_ref()
            .map_or(true, |(_, best)| path.time_seconds < best.time_seconds);

        if faster {
            self.best = Some((candidate.clone(), path));
        }
    }
}

pub struct BestRouteFinder<'a> {
    routing: &'a dyn RoutingService,
    cost_model: CostModel,
    mode: SearchMode,
}

impl<'a> BestRouteFinder<'a> {
    pub fn new(routing: &'a dyn RoutingService) -> Self {
        Self {
            routing,
            cost_model: CostModel::default(),
            mode: SearchMode::default(),
        }
    }

    pub fn with_mode(mut self, mode: SearchMode) -> Self {
        self.mode = mode;
        self
    }

    pub fn with_cost_model(mut self, cost_model: CostModel) -> Self {
        self.cost_model = cost_model;
        self
    }

    /// Route the order to the fastest warehouse of its category
    pub async fn find(
        &self,
        user_location: Option<Coordinates>,
        order: &ReturnOrder,
        warehouses: &[WarehouseCandidate],
    ) -> Result<BestRoute, RouteError> {
        let origin = user_location.ok_or(RouteError::LocationUnavailable)?;

        let candidates: Vec<&WarehouseCandidate> = warehouses
            .iter()
            .filter(|w| w.category == order.category)
            .collect();

        if candidates.is_empty() {
            return Err(RouteError::NoCandidates {
                category: order.category.clone(),
            });
        }

        info!(
            "Routing return {} to {} '{}' warehouses via {}",
            order.id,
            candidates.len(),
            order.category,
            self.routing.name()
        );

        let tracker = match self.mode {
            SearchMode::Sequential => self.evaluate_sequential(&origin, &candidates).await?,
            SearchMode::Concurrent => self.evaluate_concurrent(&origin, &candidates).await?,
        };

        let FastestTracker { best, route_times } = tracker;
        let (warehouse, path) = best.ok_or(RouteError::NoRoute {
            evaluated: candidates.len(),
        })?;

        info!(
            "Fastest warehouse for {}: {} ({:.0} s, {:.0} m)",
            order.id,
            warehouse.short_address(),
            path.time_seconds,
            path.distance_meters
        );

        Ok(BestRoute {
            costs: self.cost_model.estimate(path.distance_meters),
            display_costs: self.cost_model.estimate_display(path.distance_meters),
            warehouse,
            time_seconds: path.time_seconds,
            distance_meters: path.distance_meters,
            points: path.points,
            instructions: path.instructions,
            route_times,
        })
    }

    async fn evaluate_sequential(
        &self,
        origin: &Coordinates,
        candidates: &[&WarehouseCandidate],
    ) -> Result<FastestTracker, RouteError> {
        let mut tracker = FastestTracker::default();

        for candidate in candidates {
            let result = self
                .routing
                .route(origin, &candidate.coordinates())
                .await
                .map_err(RouteError::Routing)?;
            self.record(&mut tracker, candidate, result);
        }

        Ok(tracker)
    }

    async fn evaluate_concurrent(
        &self,
        origin: &Coordinates,
        candidates: &[&WarehouseCandidate],
    ) -> Result<FastestTracker, RouteError> {
        let destinations: Vec<Coordinates> = candidates.iter().map(|c| c.coordinates()).collect();
        let results = join_all(destinations.iter().map(|to| self.routing.route(origin, to))).await;

        let mut tracker = FastestTracker::default();
        for (candidate, result) in candidates.iter().zip(results) {
            let result = result.map_err(RouteError::Routing)?;
            self.record(&mut tracker, candidate, result);
        }

        Ok(tracker)
    }

    fn record(&self, tracker: &mut FastestTracker, candidate: &WarehouseCandidate, result: Option<RoutePath>) {
        match result {
            Some(path) => {
                debug!("{}: {:.0} s", candidate.short_address(), path.time_seconds);
                tracker.offer(candidate, path);
            }
            None => warn!("No usable path to {}, skipping", candidate.short_address()),
        }
    }
}

/// Find the fastest warehouse with default costs, one request at a time
pub async fn find_best_route(
    routing: &dyn RoutingService,
    user_location: Option<Coordinates>,
    order: &ReturnOrder,
    warehouses: &[WarehouseCandidate],
) -> Result<BestRoute, RouteError> {
    BestRouteFinder::new(routing)
        .find(user_location, order, warehouses)
        .await
}

/// `"1 hr 5 min"`, or `"12 min"` under an hour
pub fn format_duration(seconds: f64) -> String {
    let total = seconds.max(0.0) as u64;
    let hours = total / 3600;
    let minutes = (total % 3600) / 60;

    if hours > 0 {
        format!("{} hr {} min", hours, minutes)
    } else {
        format!("{} min", minutes)
    }
}
