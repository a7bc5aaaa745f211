//! Per-project measure translation into the registry.

use std::ops::AddAssign;

use sonarprom_core::protocol::{Measure, Project};
use sonarprom_core::translate::{infer_severity, sample_value};

use crate::obs::{LabelSet, Registry, WriteOutcome};

/// Counters for one or more translated projects.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct TranslateStats {
    /// Samples written (declared or dynamic series).
    pub written: usize,
    /// Series created for uncatalogued keys.
    pub dynamic: usize,
    /// Measures dropped because the key cannot form a metric name.
    pub rejected: usize,
}

impl AddAssign for TranslateStats {
    fn add_assign(&mut self, rhs: Self) {
        self.written += rhs.written;
        self.dynamic += rhs.dynamic;
        self.rejected += rhs.rejected;
    }
}

/// Write one sample per measure, labelled with the project and the
/// severity inferred from the metric key. Never fails: bad values have
/// already degraded to the default in `sample_value`.
pub fn translate_measures(
    registry: &mut Registry,
    project: &Project,
    measures: &[Measure],
) -> TranslateStats {
    let mut stats = TranslateStats::default();
    for m in measures {
        let value = sample_value(&m.metric, m.raw_value());
        let labels = LabelSet::new(&project.key, &project.name, infer_severity(&m.metric));

        match registry.write(&m.metric, labels, value) {
            WriteOutcome::Declared => stats.written += 1,
            WriteOutcome::Dynamic => {
                stats.written += 1;
                stats.dynamic += 1;
            }
            WriteOutcome::Rejected => stats.rejected += 1,
        }
    }
    stats
}
