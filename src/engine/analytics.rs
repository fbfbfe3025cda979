//! Batch statistics over a built user/story graph.

use std::collections::HashMap;
use std::fmt;

use serde::Serialize;

use crate::graph::RatGraph;

use super::titles::TitleResolver;

/// Summary of every statistic, in the order they are reported.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct InvestigationReport {
    /// User with the most story arcs.
    pub most_stories: Option<String>,
    /// User with the highest tweet count.
    pub most_active: Option<String>,
    /// Title of the story with the most participating users.
    pub most_popular_story: Option<String>,
    /// Length of the largest component walk.
    pub largest_component_size: usize,
    /// Members of the largest component with the smallest distance sum.
    pub central_nodes: Vec<String>,
}

impl fmt::Display for InvestigationReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let or_none = |v: &Option<String>| v.clone().unwrap_or_else(|| "(none)".to_string());
        writeln!(
            f,
            "The user involved with the most stories is {}",
            or_none(&self.most_stories)
        )?;
        writeln!(
            f,
            "The most active user (highest tweet count) is {}",
            or_none(&self.most_active)
        )?;
        writeln!(
            f,
            "The most popular story (involving the most users) is {}",
            or_none(&self.most_popular_story)
        )?;
        writeln!(
            f,
            "The size of the largest connected component is {}",
            self.largest_component_size
        )?;
        writeln!(f, "The most central nodes in the largest connected component are:")?;
        for node in &self.central_nodes {
            writeln!(f, "  {}", node)?;
        }
        Ok(())
    }
}

/// Read-only analytics over a [`RatGraph`].
///
/// "Maximum over users" queries walk the user registry in registration
/// order and keep the first strictly greater value, so the earliest
/// registered user wins a tie. A user or story only wins with a value above
/// zero.
pub struct Investigator<'a, R> {
    rat: &'a RatGraph,
    titles: R,
}

impl<'a, R: TitleResolver> Investigator<'a, R> {
    /// Create an investigator over `rat`, resolving story titles through `titles`.
    pub fn new(rat: &'a RatGraph, titles: R) -> Self {
        Self { rat, titles }
    }

    /// The user with the largest out-degree.
    pub fn most_stories(&self) -> Option<&'a str> {
        let rat = self.rat;
        first_max(rat.users().iter().map(|user| {
            let degree = rat.successors(&user.name).map_or(0, <[String]>::len);
            (user.name.as_str(), degree as i64)
        }))
    }

    /// The user with the highest tweet count.
    pub fn most_active(&self) -> Option<&'a str> {
        let rat = self.rat;
        first_max(
            rat.users()
                .iter()
                .map(|user| (user.name.as_str(), user.tweet_count)),
        )
    }

    /// Id of the story with the most predecessors, first in story order on a tie.
    pub fn most_popular_story_id(&self) -> Option<&'a str> {
        let rat = self.rat;
        first_max(
            rat.stories()
                .iter()
                .map(|id| (id.as_str(), rat.predecessors(id).len() as i64)),
        )
    }

    /// Display title of the most popular story.
    pub fn most_popular_story(&self) -> Option<String> {
        self.most_popular_story_id()
            .map(|id| self.titles.resolve_title(id))
    }

    /// The longest depth-first walk started from any registered user.
    ///
    /// Users are tried in registration order and the first longest walk is
    /// kept. On a graph whose arcs all come in reciprocal pairs (as built by
    /// ingestion) the walk reaches every vertex connected to its start.
    pub fn largest_connected_component(&self) -> Vec<String> {
        let mut largest: Vec<String> = Vec::new();
        for user in self.rat.users().iter() {
            match self.rat.dfs(&user.name) {
                Ok(walk) if walk.len() > largest.len() => largest = walk,
                Ok(_) => {}
                Err(e) => log::debug!("Skipping component from {}: {}", user.name, e),
            }
        }
        largest
    }

    /// Number of user/story level switches along the BFS order from `from`,
    /// counted up to the first visit of `to`.
    ///
    /// If `to` is never reached the switches of the whole walk are returned.
    /// An absent `from` gives 0.
    pub fn diam_between(&self, from: &str, to: &str) -> usize {
        let order = self.rat.bfs(from);
        let switches = self.level_switches(&order);
        order
            .iter()
            .position(|v| v == to)
            .or_else(|| order.len().checked_sub(1))
            .map_or(0, |pos| switches[pos])
    }

    /// Sum of [`Self::diam_between`] from `vertex` to every member of the
    /// largest component.
    pub fn distance_sum(&self, vertex: &str) -> usize {
        let component = self.largest_connected_component();
        self.distance_sum_within(vertex, &component)
    }

    /// Members of the largest component with the smallest distance sum, ties
    /// included in component order. Story ids are replaced by their titles.
    pub fn central_nodes(&self) -> Vec<String> {
        let component = self.largest_connected_component();
        let sums: Vec<usize> = component
            .iter()
            .map(|member| self.distance_sum_within(member, &component))
            .collect();
        let Some(&min) = sums.iter().min() else {
            return Vec::new();
        };
        log::debug!(
            "Central nodes: {} members, minimum distance sum {}",
            component.len(),
            min
        );

        component
            .iter()
            .zip(&sums)
            .filter(|&(_, &sum)| sum == min)
            .map(|(member, _)| {
                if self.rat.is_story(member) {
                    self.titles.resolve_title(member)
                } else {
                    member.clone()
                }
            })
            .collect()
    }

    /// All statistics at once.
    pub fn report(&self) -> InvestigationReport {
        InvestigationReport {
            most_stories: self.most_stories().map(str::to_string),
            most_active: self.most_active().map(str::to_string),
            most_popular_story: self.most_popular_story(),
            largest_component_size: self.largest_connected_component().len(),
            central_nodes: self.central_nodes(),
        }
    }

    /// One BFS from `vertex` serves every member of `component`.
    fn distance_sum_within(&self, vertex: &str, component: &[String]) -> usize {
        let order = self.rat.bfs(vertex);
        let switches = self.level_switches(&order);
        let Some(&total) = switches.last() else {
            return 0;
        };
        let positions: HashMap<&str, usize> = order
            .iter()
            .enumerate()
            .map(|(i, v)| (v.as_str(), i))
            .collect();
        component
            .iter()
            .map(|member| positions.get(member.as_str()).map_or(total, |&i| switches[i]))
            .sum()
    }

    /// Running count of level switches at each position of a BFS order.
    ///
    /// The level starts as "user" if the first vertex is a registered user
    /// and "story" otherwise. Vertices that are neither (unregistered
    /// accounts) never switch the level.
    fn level_switches(&self, order: &[String]) -> Vec<usize> {
        let mut on_user = order.first().is_some_and(|v| self.rat.is_user(v));
        let mut count = 0;
        order
            .iter()
            .map(|v| {
                if !on_user && self.rat.is_user(v) {
                    count += 1;
                    on_user = true;
                } else if on_user && self.rat.is_story(v) {
                    count += 1;
                    on_user = false;
                }
                count
            })
            .collect()
    }
}

/// First key with the largest strictly positive value.
fn first_max<'k>(candidates: impl Iterator<Item = (&'k str, i64)>) -> Option<&'k str> {
    let mut best: Option<&str> = None;
    let mut best_value = 0;
    for (key, value) in candidates {
        if value > best_value {
            best = Some(key);
            best_value = value;
        }
    }
    best
}
