use std::collections::HashMap;

use serde::Serialize;

use crate::{
    kvs::{sort::sort, PairOrder, SortedPairs},
    viewmodel::{ChartData, CodingSessionsView, Dataset},
};

use super::entities::CodingSession;

const MS_PER_HOUR: f64 = 3_600_000.0;

/// Language categories that reach this many accumulated hours are dropped
/// from the language chart, leaving only the sub-hour ones.
const LANGUAGE_HOUR_CUTOFF: f64 = 1.0;

/// A batch of sessions fetched for one period. All aggregation runs on a
/// freshly fetched batch and produces a [CodingSessionsView]; nothing is
/// cached between calls.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(transparent)]
pub struct CodingSessions(Vec<CodingSession>);

impl CodingSessions {
    pub fn new(sessions: Vec<CodingSession>) -> Self {
        Self(sessions)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn to_view_model(&self) -> CodingSessionsView {
        CodingSessionsView {
            time_spent_data: self.time_spent_chart_data(),
            language_data: self.language_chart_data(),
        }
    }

    /// Hours per date label, labels sorted ascending. Multiple sessions with
    /// the same label end up summed into one bucket.
    pub fn time_spent_chart_data(&self) -> ChartData {
        let mut time_map = HashMap::<String, f64>::new();

        for session in &self.0 {
            *time_map.entry(session.date_string.clone()).or_insert(0.0) +=
                session.total_time_ms as f64 / MS_PER_HOUR;
        }

        let mut pairs = SortedPairs::from_map(time_map, PairOrder::ByKey);
        sort(&mut pairs);

        ChartData {
            labels: pairs.keys(),
            datasets: vec![Dataset {
                label: "Hours Spent".to_string(),
                data: pairs.values(),
            }],
        }
    }

    /// Hours per filetype across every file of every repository, ascending by
    /// time. Filetypes at or above [LANGUAGE_HOUR_CUTOFF] are filtered out.
    pub fn language_chart_data(&self) -> ChartData {
        let mut lang_map = HashMap::<String, f64>::new();

        for session in &self.0 {
            for repo in &session.repositories {
                for file in &repo.files {
                    *lang_map.entry(file.filetype.clone()).or_insert(0.0) +=
                        file.duration_ms as f64 / MS_PER_HOUR;
                }
            }
        }

        let pairs = SortedPairs::from_map(lang_map, PairOrder::ByValue);
        let mut pairs = pairs.filter(|pair, _| pair.val >= LANGUAGE_HOUR_CUTOFF);
        sort(&mut pairs);

        ChartData {
            labels: pairs.keys(),
            datasets: vec![Dataset {
                label: "Hours spent".to_string(),
                data: pairs.values(),
            }],
        }
    }
}

impl From<Vec<CodingSession>> for CodingSessions {
    fn from(sessions: Vec<CodingSession>) -> Self {
        Self(sessions)
    }
}
