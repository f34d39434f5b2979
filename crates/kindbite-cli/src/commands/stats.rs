//! One-shot statistics snapshot printer.

use std::path::PathBuf;

use anyhow::Result;
use clap::Args;
use console::style;

use kindbite_engine::ListingStats;

use crate::listings;

#[derive(Args)]
pub struct StatsArgs {
    /// Path to a JSON file with the current food listings
    #[arg(long)]
    pub listings: PathBuf,
}

pub fn run(args: StatsArgs) -> Result<()> {
    let listings = listings::load(&args.listings)?;
    print_stats(&ListingStats::from_listings(&listings));
    Ok(())
}

/// Render a snapshot the way the chat surface summarizes it.
pub fn print_stats(stats: &ListingStats) {
    println!("{}", style("Current food snapshot").bold());
    println!("  total items:     {}", stats.total);
    println!(
        "  free items:      {} ({}%)",
        stats.free, stats.free_percentage
    );
    println!("  restaurants:     {}", stats.restaurants.len());
    println!("  average rating:  {}", stats.avg_rating_display());
    if let Some(top) = &stats.top_rated {
        println!(
            "  top rated:       {} from {} ({})",
            top.name, top.restaurant, top.rating
        );
    }
    if !stats.categories.is_empty() {
        println!("  categories:      {}", stats.categories.join(", "));
    }
}
