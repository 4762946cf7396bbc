//! Command handlers for the CLI

use anyhow::{Context, Result};
use tracing::info;

use returnflow::config::Config;
use returnflow::defaults::{active_return_order, seed_stops, DRIVER_ORIGIN};
use returnflow::services::best_route::{format_duration, BestRoute, BestRouteFinder, SearchMode};
use returnflow::services::candidate_store::CandidateStore;
use returnflow::services::geocoding::create_geocoder;
use returnflow::services::manifest::DriverManifest;
use returnflow::services::routing::create_routing_service;
use returnflow::types::{Coordinates, DeliveryStop, ReturnOrder};

use crate::cli::{Command, WarehouseCommand};

pub async fn run(command: Command, config: &Config) -> Result<()> {
    match command {
        Command::Manifest { complete } => manifest(&complete),
        Command::Search { query } => search(config, &query).await,
        Command::Warehouse { action } => warehouse(config, action).await,
        Command::Route { lat, lng, category, concurrent, json } => {
            let location = lat.zip(lng).map(|(lat, lng)| Coordinates { lat, lng });
            let mode = if concurrent { SearchMode::Concurrent } else { SearchMode::Sequential };
            route(config, location, category, mode, json).await
        }
    }
}

pub fn manifest(complete: &[String]) -> Result<()> {
    let mut manifest = DriverManifest::new(DRIVER_ORIGIN, seed_stops());

    for order_id in complete {
        manifest.complete(order_id)?;
    }

    if manifest.is_finished() {
        println!("All pickups complete. No more active stops.");
        return Ok(());
    }

    let summary = manifest.summary();
    let origin = manifest.origin();
    println!(
        "Driver manifest for {} from ({:.4}, {:.4}): {} stops, {:.1} km, ~{} minutes ({} picked up)",
        chrono::Local::now().date_naive(),
        origin.lat,
        origin.lng,
        summary.active_stops,
        summary.total_distance_km,
        summary.estimated_minutes,
        summary.completed_stops,
    );

    for (index, stop) in manifest.stops().iter().enumerate() {
        print_stop(index, stop);
    }

    Ok(())
}

fn print_stop(index: usize, stop: &DeliveryStop) {
    let marker = if index == 0 { "NEXT" } else { "    " };
    println!(
        "{} {:>2}. {}  {:<20} {:>5.1} km  due {}",
        marker,
        index + 1,
        stop.order_id,
        stop.customer_name,
        stop.distance_km.unwrap_or(0.0),
        stop.estimated_delivery_time.format("%H:%M"),
    );
    println!("         {} ({}), {}  {}", stop.address, stop.landmark, stop.pincode, stop.contact_number);
}

pub async fn search(config: &Config, query: &str) -> Result<()> {
    let geocoder = create_geocoder(config)?;
    let places = geocoder
        .search(query)
        .await
        .context("Error searching for location")?;

    if places.is_empty() {
        println!("No places found for '{}'", query);
    }
    for (index, place) in places.iter().enumerate() {
        println!(
            "{:>2}. {}  ({:.4}, {:.4})",
            index + 1,
            place.display_name,
            place.coordinates.lat,
            place.coordinates.lng
        );
    }

    Ok(())
}

pub async fn warehouse(config: &Config, action: WarehouseCommand) -> Result<()> {
    let mut store = CandidateStore::open(&config.candidate_store_path)?;

    match action {
        WarehouseCommand::Add { category, query, pick } => {
            let category = category.unwrap_or_else(|| active_return_order().category);
            let geocoder = create_geocoder(config)?;
            let places = geocoder
                .search(&query)
                .await
                .context("Error searching for location")?;

            let place = pick
                .checked_sub(1)
                .and_then(|index| places.get(index))
                .with_context(|| format!("No search result #{} for '{}' ({} found)", pick, query, places.len()))?;

            let candidate = store.add(&category, place)?;
            println!("Added {} [{}] {}", candidate.id, candidate.category, candidate.address);
        }
        WarehouseCommand::List { category } => {
            let candidates = match &category {
                Some(category) => store.for_category(category),
                None => store.list().to_vec(),
            };
            if candidates.is_empty() {
                println!("No warehouses stored in {}", store.path().display());
            }
            for candidate in candidates {
                println!(
                    "{}  [{}]  {}  ({:.4}, {:.4})",
                    candidate.id,
                    candidate.category,
                    candidate.short_address(),
                    candidate.lat,
                    candidate.lng
                );
            }
        }
        WarehouseCommand::Delete { id } => {
            if store.delete(&id)? {
                println!("Deleted {}", id);
            } else {
                anyhow::bail!("No warehouse with id {}", id);
            }
        }
    }

    Ok(())
}

pub async fn route(
    config: &Config,
    location: Option<Coordinates>,
    category: Option<String>,
    mode: SearchMode,
    json: bool,
) -> Result<()> {
    let store = CandidateStore::open(&config.candidate_store_path)?;
    let routing = create_routing_service(config.graphhopper())?;

    let mut order = active_return_order();
    if let Some(category) = category {
        order.category = category;
    }

    let best = BestRouteFinder::new(routing.as_ref())
        .with_mode(mode)
        .find(location, &order, store.list())
        .await?;

    info!("Route ready for {}", order.id);

    if json {
        println!("{}", serde_json::to_string_pretty(&best)?);
    } else {
        print_route(&order, &best);
    }

    Ok(())
}

fn print_route(order: &ReturnOrder, best: &BestRoute) {
    let display = &best.display_costs;

    println!(
        "Return {} ({}, {}) -> {}",
        order.id,
        order.product_name,
        order.status.as_str(),
        best.warehouse.address
    );
    println!("  Most optimised route: {}", format_duration(best.time_seconds));
    println!("  Time:      {:.2} mins", best.time_seconds / 60.0);
    println!("  Distance:  {:.2} km", best.distance_meters / 1000.0);
    println!("  Fuel:      {}L", display.fuel_liters);
    println!("  Emissions: {} Kg", display.emissions_kg);
    println!("  Cost:      Rs. {}", display.cost_rupees);

    println!("Route times:");
    for route_time in &best.route_times {
        let marker = if best.is_fastest(route_time) { "*" } else { " " };
        println!("  {} {:<40} {}", marker, route_time.address, format_duration(route_time.time_seconds));
    }

    if !best.instructions.is_empty() {
        println!("Directions:");
        for step in &best.instructions {
            println!(
                "  {} {}  ({:.2} km)",
                step.maneuver().arrow(),
                step.text,
                step.distance / 1000.0
            );
        }
    }
}
