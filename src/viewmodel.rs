//! Output shapes handed to presentation consumers. The layout mirrors what
//! charting frontends expect: one label list plus positionally aligned
//! datasets.

use serde::Deserialize;
use serde::Serialize;

/// The combined per-period view: one chart over time, one over languages.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CodingSessionsView {
    pub time_spent_data: ChartData,
    pub language_data: ChartData,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChartData {
    pub labels: Vec<String>,
    pub datasets: Vec<Dataset>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Dataset {
    pub label: String,
    pub data: Vec<f64>,
}

#[cfg(test)]
mod tests {
    use super::{ChartData, CodingSessionsView, Dataset};

    #[test]
    fn view_serializes_with_camel_case_keys() {
        let view = CodingSessionsView {
            time_spent_data: ChartData {
                labels: vec!["2024-01-01".to_string()],
                datasets: vec![Dataset {
                    label: "Hours Spent".to_string(),
                    data: vec![1.5],
                }],
            },
            language_data: ChartData {
                labels: vec![],
                datasets: vec![Dataset {
                    label: "Hours spent".to_string(),
                    data: vec![],
                }],
            },
        };

        let json = serde_json::to_value(&view).unwrap();
        assert_eq!(
            json["timeSpentData"]["labels"][0],
            serde_json::json!("2024-01-01")
        );
        assert_eq!(
            json["timeSpentData"]["datasets"][0]["data"][0],
            serde_json::json!(1.5)
        );
        assert_eq!(json["languageData"]["labels"], serde_json::json!([]));
    }
}
