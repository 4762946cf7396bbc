//! CLI argument parsing for the returnflow binary.

use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "returnflow", about = "Driver manifest and returns routing")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Subcommand)]
pub enum Command {
    /// Print the driver manifest, nearest stop first (default if no subcommand given)
    Manifest {
        /// Mark a stop picked up before printing; repeat in pickup order
        #[arg(long = "complete", value_name = "ORDER_ID")]
        complete: Vec<String>,
    },
    /// Search places by free text
    Search {
        query: String,
    },
    /// Manage warehouse candidates
    Warehouse {
        #[command(subcommand)]
        action: WarehouseCommand,
    },
    /// Route the active return to the fastest warehouse of its category
    Route {
        /// Current latitude
        #[arg(long, allow_hyphen_values = true)]
        lat: Option<f64>,
        /// Current longitude
        #[arg(long, allow_hyphen_values = true)]
        lng: Option<f64>,
        /// Override the return's category
        #[arg(long)]
        category: Option<String>,
        /// Issue all routing requests at once
        #[arg(long)]
        concurrent: bool,
        /// Print the result as JSON
        #[arg(long)]
        json: bool,
    },
}

#[derive(Subcommand)]
pub enum WarehouseCommand {
    /// Geocode a query and store the chosen result
    Add {
        /// Category the warehouse accepts (defaults to the active return's)
        #[arg(long)]
        category: Option<String>,
        /// Free-text address search
        #[arg(long)]
        query: String,
        /// 1-based index into the search results
        #[arg(long, default_value_t = 1)]
        pick: usize,
    },
    /// List stored warehouses
    List {
        #[arg(long)]
        category: Option<String>,
    },
    /// Delete a stored warehouse
    Delete {
        id: String,
    },
}
