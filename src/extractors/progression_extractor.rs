use serde_json::Value;

use crate::model::{charts_response::ChartsResponse, movie::MovieRecord};

const FIXED_PROGRESSION_KEY: &str = "progression";
const PROGRESSION_KEY_MARKER: &str = "_progression";

#[derive(Debug)]
pub struct ProgressionExtractor {}

impl ProgressionExtractor {
    /// Key holding the progression set: an exact `progression` key if the
    /// backend sends one, else the first key containing `_progression`.
    pub fn find_progression_key(response: &ChartsResponse) -> Option<&str> {
        if response.get(FIXED_PROGRESSION_KEY).is_some() {
            return Some(FIXED_PROGRESSION_KEY);
        }

        response
            .keys()
            .find(|key| key.contains(PROGRESSION_KEY_MARKER))
    }

    pub fn extract_progression(response: &ChartsResponse) -> Vec<MovieRecord> {
        let key = match ProgressionExtractor::find_progression_key(response) {
            Some(key) => key,
            None => {
                log::debug!("Charts data has no progression key");
                return vec![];
            }
        };

        match response.get(key) {
            Some(Value::Array(entries)) => entries
                .iter()
                .enumerate()
                .filter_map(|(index, entry)| {
                    match serde_json::from_value::<MovieRecord>(entry.clone()) {
                        Ok(movie) => Some(movie),
                        Err(e) => {
                            log::warn!(
                                "Could not read progression entry {} under {}. Ignoring it and continuing. Error was: {}",
                                index, key, e
                            );
                            None
                        }
                    }
                })
                .collect(),
            Some(other) => {
                log::warn!(
                    "Expected a list under {}, got {}. Treating progression as empty",
                    key, other
                );
                vec![]
            }
            None => vec![],
        }
    }
}
