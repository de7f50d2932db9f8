use std::collections::BTreeMap;
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::model::movie::MovieRecord;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PopularActor {
    pub name: String,
    #[serde(default)]
    pub id: Option<u64>,
    #[serde(default)]
    pub popularity: Option<f64>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ActorSearchResult {
    pub name: String,
    #[serde(default)]
    pub id: Option<u64>,
    #[serde(default)]
    pub popularity: Option<f64>,
}

/// Detail panel payload of `/api/actor/<name>`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ActorDetails {
    pub name: String,
    #[serde(default)]
    pub birth_year: Option<i32>,
    #[serde(default)]
    pub career_start: Option<i32>,
    #[serde(default)]
    pub total_movies: u32,
    #[serde(default)]
    pub place_of_birth: Option<String>,
    #[serde(default)]
    pub genres: Vec<String>,
    #[serde(default)]
    pub awards: Option<u32>,
    #[serde(default)]
    pub analysis: CareerAnalysis,
    #[serde(default)]
    pub movies: Vec<MovieRecord>,
}

/// Backend-computed career metrics. Every field may be missing, and the whole
/// analysis degrades to `{"error": ...}` when the actor has too little data.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CareerAnalysis {
    #[serde(default)]
    pub career_score: Option<f64>,
    #[serde(default)]
    pub avg_rating: Option<f64>,
    #[serde(default)]
    pub total_box_office: Option<f64>,
    #[serde(default)]
    pub performance_trend: Option<MetricLabel>,
    #[serde(default)]
    pub consistency: Option<MetricLabel>,
    #[serde(default)]
    pub productivity: Option<MetricLabel>,
    #[serde(default)]
    pub commercial_success: Option<MetricLabel>,
    #[serde(default)]
    pub recommendations: Option<Vec<String>>,
    #[serde(default)]
    pub error: Option<String>,
}

/// Qualitative metric the backend usually sends as a word ("High",
/// "Improving") but falls back to a bare number when it has nothing to say,
/// e.g. `"productivity": 0`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum MetricLabel {
    Text(String),
    Number(f64),
}

impl fmt::Display for MetricLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MetricLabel::Text(text) => write!(f, "{}", text),
            MetricLabel::Number(number) => write!(f, "{}", number),
        }
    }
}

/// Payload of `/api/compare-actors`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ActorComparison {
    #[serde(default)]
    pub actors: Vec<ComparedActor>,
    #[serde(default)]
    pub metrics_comparison: BTreeMap<String, Vec<MetricValue>>,
    #[serde(default)]
    pub winner_categories: BTreeMap<String, String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ComparedActor {
    pub name: String,
    #[serde(default)]
    pub analysis: CareerAnalysis,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MetricValue {
    pub name: String,
    pub value: f64,
}
