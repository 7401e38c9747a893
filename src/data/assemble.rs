use super::error::{DataError, Result};
use super::model::{CoordinateSeries, PathwayMembership, ProteinMeasurements, SeriesMap};

/// Join pathways with measurements into one coordinate series per pathway.
///
/// Points follow the pathway's member order. Any member without a
/// measurement fails the whole join; nothing is skipped.
pub fn assemble_series(
    measurements: &ProteinMeasurements,
    pathways: &PathwayMembership,
) -> Result<SeriesMap> {
    let mut series = SeriesMap::new();
    for (pathway, members) in pathways.iter() {
        let mut coords = CoordinateSeries::with_capacity(members.len());
        for protein in members {
            let value = measurements
                .get(protein)
                .ok_or_else(|| DataError::unmatched_protein(pathway, protein))?;
            coords.push(*value);
        }
        series.insert(pathway.clone(), coords);
    }
    Ok(series)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::loader::{index_pathway_rows, remove_header_row};
    use crate::data::model::Measurement;

    fn measurements() -> ProteinMeasurements {
        [
            ("P1", Measurement::new(1.0, 2.0)),
            ("P2", Measurement::new(1.5, 2.5)),
            ("P3", Measurement::new(-0.5, 4.0)),
        ]
        .into_iter()
        .collect()
    }

    #[test]
    fn test_assemble_example_scenario() {
        let rows = vec![vec!["#term ID", "...", "x"], vec!["path:00010", "...", "P1,P2"]];
        let mut pathways = index_pathway_rows(&rows).unwrap();
        remove_header_row(&mut pathways).unwrap();

        let series = assemble_series(&measurements(), &pathways).unwrap();
        assert_eq!(series.len(), 1);
        let coords = &series["path:00010"];
        assert_eq!(coords.x, vec![1.0, 1.5]);
        assert_eq!(coords.y, vec![2.0, 2.5]);
    }

    #[test]
    fn test_series_follow_member_order() {
        let measurements = measurements();
        let mut pathways = PathwayMembership::new();
        pathways.insert("a", vec!["P3".into(), "P1".into(), "P3".into()]);
        pathways.insert("b", vec!["P2".into()]);

        let series = assemble_series(&measurements, &pathways).unwrap();
        for (pathway, members) in pathways.iter() {
            let coords = &series[pathway];
            assert_eq!(coords.len(), members.len());
            for (i, protein) in members.iter().enumerate() {
                let m = measurements.get(protein).unwrap();
                assert_eq!(coords.x[i], m.x);
                assert_eq!(coords.y[i], m.y);
            }
        }
    }

    #[test]
    fn test_unmatched_protein_fails() {
        let mut pathways = PathwayMembership::new();
        pathways.insert("hsa00010", vec!["P1".into(), "P404".into()]);

        let err = assemble_series(&measurements(), &pathways).unwrap_err();
        match err {
            DataError::UnmatchedProtein { pathway, protein } => {
                assert_eq!(pathway, "hsa00010");
                assert_eq!(protein, "P404");
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_no_pathways_gives_no_series() {
        let series = assemble_series(&measurements(), &PathwayMembership::new()).unwrap();
        assert!(series.is_empty());
    }
}
