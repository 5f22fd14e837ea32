//! # Lunar nodes
//!
//! The Moon crosses the ecliptic twice per draconic month (about 27.2 days): northward at
//! the ascending node and southward at the descending node. The crossings are bracketed by
//! sampling the Moon's true ecliptic latitude every 10 days, which is less than the
//! 13.6 days separating consecutive nodes.

use log::debug;

use crate::moon::ecliptic_geo_moon;
use crate::orrery::Orrery;
use crate::orrery_errors::OrreryError;
use crate::search::{search, SearchOptions};
use crate::time::AstroTime;

const NODE_STEP_DAYS: f64 = 10.0;

const NODE_TOLERANCE_SECONDS: f64 = 1.0;

const MAX_NODE_STEPS: usize = 10;

/// Direction of the Moon's crossing of the ecliptic.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NodeKind {
    /// Moving from south to north
    Ascending,
    /// Moving from north to south
    Descending,
}

impl NodeKind {
    fn sign(self) -> f64 {
        match self {
            NodeKind::Ascending => 1.0,
            NodeKind::Descending => -1.0,
        }
    }
}

/// A passage of the Moon through one of its nodes.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct NodeEvent {
    pub time: AstroTime,
    pub kind: NodeKind,
}

/// Find the first time after `start` when the Moon crosses the ecliptic.
///
/// Returns
/// --------
/// * The [`NodeEvent`], or [`OrreryError::InternalError`] if no sign change of the latitude
///   turns up in the sampled window.
pub fn search_moon_node(orrery: &Orrery, start: &AstroTime) -> Result<NodeEvent, OrreryError> {
    let latitude = |t: &AstroTime| -> Result<f64, OrreryError> {
        Ok(ecliptic_geo_moon(orrery, t)?.lat)
    };

    let mut t1 = *start;
    let mut lat1 = latitude(&t1)?;
    for _ in 0..MAX_NODE_STEPS {
        let t2 = t1.add_days(NODE_STEP_DAYS);
        let lat2 = latitude(&t2)?;
        if lat1 * lat2 <= 0.0 {
            let kind = if lat2 > lat1 {
                NodeKind::Ascending
            } else {
                NodeKind::Descending
            };
            let sign = kind.sign();
            let time = search(
                |t| Ok(sign * latitude(t)?),
                &t1,
                &t2,
                &SearchOptions::with_tolerance(NODE_TOLERANCE_SECONDS),
            )?
            .ok_or_else(|| {
                OrreryError::InternalError(format!("lunar node not bracketed in [{t1}, {t2}]"))
            })?;
            debug!("{kind:?} lunar node at {time}");
            return Ok(NodeEvent { time, kind });
        }
        t1 = t2;
        lat1 = lat2;
    }
    Err(OrreryError::InternalError(format!("no lunar node found after {start}")))
}

/// The lunar node following `previous`.
///
/// Returns
/// --------
/// * The next node, or [`OrreryError::InternalError`] if it is of the same kind as
///   `previous`.
pub fn next_moon_node(orrery: &Orrery, previous: &NodeEvent) -> Result<NodeEvent, OrreryError> {
    let node = search_moon_node(orrery, &previous.time.add_days(NODE_STEP_DAYS))?;
    if node.kind == previous.kind {
        return Err(OrreryError::InternalError(format!(
            "two {:?} lunar nodes in a row at {} and {}",
            node.kind, previous.time, node.time
        )));
    }
    Ok(node)
}

#[cfg(test)]
mod nodes_test {
    use super::*;

    #[test]
    fn test_nodes_january_2001() {
        let orrery = Orrery::new();
        let start = orrery.make_time(2001, 1, 1, 0, 0, 0.0).unwrap();

        let ascending = search_moon_node(&orrery, &start).unwrap();
        assert_eq!(ascending.kind, NodeKind::Ascending);
        let almanac = orrery.make_time(2001, 1, 9, 13, 53, 0.0).unwrap();
        assert!((ascending.time.ut() - almanac.ut()).abs() * 1440.0 < 3.0);

        let descending = next_moon_node(&orrery, &ascending).unwrap();
        assert_eq!(descending.kind, NodeKind::Descending);
        let almanac = orrery.make_time(2001, 1, 22, 22, 22, 0.0).unwrap();
        assert!((descending.time.ut() - almanac.ut()).abs() * 1440.0 < 3.0);
    }

    #[test]
    fn test_nodes_alternate() {
        let orrery = Orrery::new();
        let mut node = search_moon_node(&orrery, &AstroTime::from_ut(-10_000.0)).unwrap();
        for _ in 0..40 {
            let next = next_moon_node(&orrery, &node).unwrap();
            let gap = next.time.ut() - node.time.ut();
            assert!(gap > 12.0 && gap < 15.5, "gap {gap}");
            let lat = ecliptic_geo_moon(&orrery, &next.time).unwrap().lat;
            assert!(lat.abs() < 1.0e-3, "latitude {lat}");
            node = next;
        }
    }
}
