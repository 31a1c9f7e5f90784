//! Route grouping of time-sorted arrivals.
//!
//! The board shows one line per route, and the lines appear in the
//! order each route first shows up in the time-sorted arrival list.
//! `RouteGroups` makes that ordering explicit: it is a stable
//! partition, never a re-sort, and iteration order is part of its
//! contract.

use std::collections::HashMap;
use std::collections::hash_map::Entry;

use crate::domain::RouteId;

use super::finder::UpcomingArrival;

/// Arrivals partitioned by route, in first-seen route order.
#[derive(Debug)]
pub struct RouteGroups {
    /// Routes in the order they were first encountered.
    order: Vec<RouteId>,

    /// Arrivals per route, keeping the relative order of the input.
    groups: HashMap<RouteId, Vec<UpcomingArrival>>,
}

impl RouteGroups {
    /// Partition a time-sorted arrival list by route.
    pub fn partition(arrivals: Vec<UpcomingArrival>) -> Self {
        let mut order = Vec::new();
        let mut groups: HashMap<RouteId, Vec<UpcomingArrival>> = HashMap::new();

        for arrival in arrivals {
            match groups.entry(arrival.route.clone()) {
                Entry::Occupied(mut entry) => entry.get_mut().push(arrival),
                Entry::Vacant(entry) => {
                    order.push(arrival.route.clone());
                    entry.insert(vec![arrival]);
                }
            }
        }

        Self { order, groups }
    }

    /// Iterate the groups in first-seen route order.
    pub fn iter(&self) -> impl Iterator<Item = (&RouteId, &[UpcomingArrival])> {
        self.order
            .iter()
            .filter_map(|route| self.groups.get(route).map(|group| (route, group.as_slice())))
    }

    /// Get one route's arrivals.
    pub fn get(&self, route: &RouteId) -> &[UpcomingArrival] {
        self.groups
            .get(route)
            .map(|group| group.as_slice())
            .unwrap_or(&[])
    }

    /// Number of route groups.
    pub fn len(&self) -> usize {
        self.order.len()
    }

    /// True if there are no groups at all.
    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }
}
