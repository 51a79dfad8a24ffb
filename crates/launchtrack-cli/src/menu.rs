//! Interactive text menu.
//!
//! Reads choices line by line, calls into `LaunchService`, and prints the
//! results. Every service error is reported and the loop continues.

use std::io::{BufRead, Write};

use anyhow::Result;
use tracing::{debug, warn};

use launchtrack_core::models::{Lookup, SearchCriteria};
use launchtrack_core::{LaunchService, LaunchSource};

use crate::format::{
    format_cache_summary, format_favorite, format_launch_line, format_payload, format_rocket_stats,
};

const MENU: &str = "\
Welcome to the Launch Tracker!
1. Search Launches by Year
2. View Favorites
3. Remove from Favorites
4. View Payload Details
5. View Rocket Statistics
6. Cache Status
7. Exit";

/// A menu selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Choice {
    SearchLaunches,
    ViewFavorites,
    RemoveFavorite,
    PayloadDetails,
    RocketStatistics,
    CacheStatus,
    Exit,
}

impl Choice {
    pub fn parse(input: &str) -> Option<Self> {
        match input.trim() {
            "1" => Some(Choice::SearchLaunches),
            "2" => Some(Choice::ViewFavorites),
            "3" => Some(Choice::RemoveFavorite),
            "4" => Some(Choice::PayloadDetails),
            "5" => Some(Choice::RocketStatistics),
            "6" => Some(Choice::CacheStatus),
            "7" => Some(Choice::Exit),
            _ => None,
        }
    }
}

pub struct Menu<S, R, W> {
    service: LaunchService<S>,
    input: R,
    output: W,
}

impl<S: LaunchSource, R: BufRead, W: Write> Menu<S, R, W> {
    pub fn new(service: LaunchService<S>, input: R, output: W) -> Self {
        Self {
            service,
            input,
            output,
        }
    }

    /// Run until the user exits or input ends.
    pub async fn run(&mut self) -> Result<()> {
        loop {
            writeln!(self.output, "{}", MENU)?;
            let Some(line) = self.prompt("Enter your choice:")? else {
                return Ok(());
            };

            match Choice::parse(&line) {
                Some(Choice::SearchLaunches) => self.search_launches().await?,
                Some(Choice::ViewFavorites) => self.view_favorites()?,
                Some(Choice::RemoveFavorite) => self.remove_favorite()?,
                Some(Choice::PayloadDetails) => self.payload_details().await?,
                Some(Choice::RocketStatistics) => self.rocket_statistics().await?,
                Some(Choice::CacheStatus) => self.cache_status()?,
                Some(Choice::Exit) => {
                    writeln!(self.output, "Exiting the application.")?;
                    return Ok(());
                }
                None => writeln!(self.output, "Invalid choice, please try again.")?,
            }
        }
    }

    /// Print a prompt and read one line. `None` on end of input.
    fn prompt(&mut self, message: &str) -> Result<Option<String>> {
        writeln!(self.output, "{}", message)?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            debug!("Input closed");
            return Ok(None);
        }
        Ok(Some(line.trim().to_string()))
    }

    async fn search_launches(&mut self) -> Result<()> {
        let Some(input) = self.prompt("Enter year to search launches:")? else {
            return Ok(());
        };
        let criteria = match SearchCriteria::parse(&input) {
            Ok(criteria) => criteria,
            Err(e) => {
                writeln!(self.output, "{}", e)?;
                return Ok(());
            }
        };

        let launches = match self.service.find_launches_by_year(criteria.year).await {
            Ok(launches) => launches.to_vec(),
            Err(e) => {
                warn!(year = criteria.year, error = %e, "Launch search failed");
                writeln!(self.output, "Error fetching launches: {}", e)?;
                return Ok(());
            }
        };

        if launches.is_empty() {
            writeln!(self.output, "No launches found for {}.", criteria.year)?;
            return Ok(());
        }

        writeln!(self.output, "Found {} launches in {}:", launches.len(), criteria.year)?;
        for (i, launch) in launches.iter().enumerate() {
            let rocket_name = self.service.cached_rocket(&launch.rocket).map(|r| r.name.as_str());
            writeln!(self.output, "{}", format_launch_line(i + 1, launch, rocket_name))?;
        }

        let Some(selection) = self.prompt("Enter the number to add to favorites, or 0 to skip:")? else {
            return Ok(());
        };
        match selection.parse::<usize>() {
            Ok(0) => {}
            Ok(n) if n <= launches.len() => {
                let launch = launches[n - 1].clone();
                match self.service.add_favorite(launch) {
                    Ok(favorite) => {
                        let name = favorite.launch.mission_name.clone();
                        writeln!(self.output, "{} added to favorites!", name)?;
                    }
                    Err(e) => writeln!(self.output, "{}", e)?,
                }
            }
            _ => writeln!(self.output, "Invalid selection, nothing added.")?,
        }
        Ok(())
    }

    fn view_favorites(&mut self) -> Result<()> {
        writeln!(self.output, "Favorites List:")?;
        let favorites = self.service.list_favorites();
        if favorites.is_empty() {
            writeln!(self.output, "No favorites found.")?;
        }
        for favorite in favorites {
            writeln!(self.output, "{}", format_favorite(favorite))?;
        }
        Ok(())
    }

    fn remove_favorite(&mut self) -> Result<()> {
        let Some(launch_id) = self.prompt("Enter launch ID to remove from favorites:")? else {
            return Ok(());
        };
        match self.service.remove_favorite(&launch_id) {
            Ok(removed) => writeln!(
                self.output,
                "{} removed from favorites!",
                removed.launch.mission_name
            )?,
            Err(e) => writeln!(self.output, "{}", e)?,
        }
        Ok(())
    }

    async fn payload_details(&mut self) -> Result<()> {
        let Some(mission_name) = self.prompt("Enter the mission name:")? else {
            return Ok(());
        };

        let launch_id = match self.service.resolve_launch_id_by_mission_name(&mission_name) {
            Lookup::Value(id) => id,
            Lookup::NotYetFetched => {
                writeln!(
                    self.output,
                    "No launches cached yet, try to search for launches first."
                )?;
                return Ok(());
            }
            Lookup::Empty => {
                writeln!(self.output, "Mission '{}' not found in searched launches.", mission_name)?;
                return Ok(());
            }
        };

        match self.service.find_payload_for_launch(&launch_id).await {
            Ok(Some(payload)) => {
                let text = format_payload(payload, &mission_name);
                writeln!(self.output, "{}", text)?;
            }
            Ok(None) => writeln!(self.output, "No payloads found for mission '{}'.", mission_name)?,
            Err(e) => {
                warn!(launch_id = %launch_id, error = %e, "Payload lookup failed");
                writeln!(self.output, "Error fetching payload: {}", e)?;
            }
        }
        Ok(())
    }

    async fn rocket_statistics(&mut self) -> Result<()> {
        let Some(rocket_name) = self.prompt("Enter the rocket name:")? else {
            return Ok(());
        };
        match self.service.rocket_stats(&rocket_name).await {
            Ok(stats) => writeln!(self.output, "{}", format_rocket_stats(&stats))?,
            Err(e) => writeln!(self.output, "{}", e)?,
        }
        Ok(())
    }

    fn cache_status(&mut self) -> Result<()> {
        let summary = self.service.cache_summary();
        writeln!(self.output, "{}", format_cache_summary(&summary))?;
        Ok(())
    }
}
