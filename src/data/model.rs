use std::collections::BTreeMap;

use indexmap::IndexMap;

// ---------------------------------------------------------------------------
// Measurement – the two values recorded for one protein
// ---------------------------------------------------------------------------

/// A single protein's coordinates in the scatter plot.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Measurement {
    /// log2 Ratio H/L (x).
    pub x: f64,
    /// log10 protein abundance (y).
    pub y: f64,
}

impl Measurement {
    pub fn new(x: f64, y: f64) -> Self {
        Measurement { x, y }
    }
}

// ---------------------------------------------------------------------------
// ProteinMeasurements – protein identifier → measurement
// ---------------------------------------------------------------------------

/// Measurements keyed by protein identifier.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ProteinMeasurements {
    entries: BTreeMap<String, Measurement>,
}

impl ProteinMeasurements {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a measurement, returning the one it replaced (if any).
    pub fn insert(&mut self, protein: impl Into<String>, value: Measurement) -> Option<Measurement> {
        self.entries.insert(protein.into(), value)
    }

    pub fn get(&self, protein: &str) -> Option<&Measurement> {
        self.entries.get(protein)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl<S: Into<String>> FromIterator<(S, Measurement)> for ProteinMeasurements {
    fn from_iter<I: IntoIterator<Item = (S, Measurement)>>(iter: I) -> Self {
        let mut map = ProteinMeasurements::new();
        for (protein, value) in iter {
            map.insert(protein, value);
        }
        map
    }
}

// ---------------------------------------------------------------------------
// PathwayMembership – pathway identifier → member proteins
// ---------------------------------------------------------------------------

/// Member protein lists keyed by pathway identifier.
///
/// Pathways iterate in the order they were first read. Member order is
/// kept as read; duplicates are allowed.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PathwayMembership {
    pathways: IndexMap<String, Vec<String>>,
}

impl PathwayMembership {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a pathway, returning the member list it replaced (if any).
    /// A replaced pathway keeps its original position.
    pub fn insert(&mut self, pathway: impl Into<String>, members: Vec<String>) -> Option<Vec<String>> {
        self.pathways.insert(pathway.into(), members)
    }

    pub fn remove(&mut self, pathway: &str) -> Option<Vec<String>> {
        self.pathways.shift_remove(pathway)
    }

    pub fn get(&self, pathway: &str) -> Option<&[String]> {
        self.pathways.get(pathway).map(Vec::as_slice)
    }

    pub fn contains(&self, pathway: &str) -> bool {
        self.pathways.contains_key(pathway)
    }

    pub fn len(&self) -> usize {
        self.pathways.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pathways.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&String, &Vec<String>)> {
        self.pathways.iter()
    }
}

// ---------------------------------------------------------------------------
// CoordinateSeries – plot-ready points for one pathway
// ---------------------------------------------------------------------------

/// Parallel x / y vectors; always the same length.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CoordinateSeries {
    pub x: Vec<f64>,
    pub y: Vec<f64>,
}

impl CoordinateSeries {
    pub fn with_capacity(n: usize) -> Self {
        CoordinateSeries {
            x: Vec::with_capacity(n),
            y: Vec::with_capacity(n),
        }
    }

    pub fn push(&mut self, value: Measurement) {
        self.x.push(value.x);
        self.y.push(value.y);
    }

    pub fn len(&self) -> usize {
        self.x.len()
    }

    pub fn is_empty(&self) -> bool {
        self.x.is_empty()
    }

    /// Zip the two axes into `[x, y]` pairs.
    pub fn points(&self) -> impl Iterator<Item = [f64; 2]> + '_ {
        self.x.iter().zip(self.y.iter()).map(|(&x, &y)| [x, y])
    }
}

/// One coordinate series per pathway, in pathway order.
pub type SeriesMap = IndexMap<String, CoordinateSeries>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn insert_replaces_previous_measurement() {
        let mut map = ProteinMeasurements::new();
        assert!(map.insert("P1", Measurement::new(1.0, 2.0)).is_none());
        let old = map.insert("P1", Measurement::new(3.0, 4.0));

        assert_eq!(old, Some(Measurement::new(1.0, 2.0)));
        assert_eq!(map.get("P1"), Some(&Measurement::new(3.0, 4.0)));
        assert_eq!(map.len(), 1);
    }

    #[test]
    fn pathways_keep_first_seen_order() {
        let mut pathways = PathwayMembership::new();
        pathways.insert("hsa9", vec!["P1".into()]);
        pathways.insert("hsa1", vec!["P2".into()]);
        pathways.insert("hsa9", vec!["P3".into()]);

        let keys: Vec<&String> = pathways.iter().map(|(k, _)| k).collect();
        assert_eq!(keys, vec!["hsa9", "hsa1"]);
        assert_eq!(pathways.get("hsa9").unwrap(), &["P3".to_string()]);

        pathways.remove("hsa9");
        pathways.insert("hsa5", vec![]);
        let keys: Vec<&String> = pathways.iter().map(|(k, _)| k).collect();
        assert_eq!(keys, vec!["hsa1", "hsa5"]);
    }

    #[test]
    fn series_points_zip_axes() {
        let mut series = CoordinateSeries::default();
        series.push(Measurement::new(0.5, 6.0));
        series.push(Measurement::new(-1.0, 7.5));

        let points: Vec<[f64; 2]> = series.points().collect();
        assert_eq!(points, vec![[0.5, 6.0], [-1.0, 7.5]]);
        assert_eq!(series.len(), 2);
    }
}
