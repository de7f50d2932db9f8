use serde::{Deserialize, Deserializer, Serialize};

/// One movie of an actor, as the backend sends it in progression sets and
/// actor details.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MovieRecord {
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub year: Option<i32>,
    #[serde(default)]
    pub rating: Option<f64>,
    /// Millions. Missing or null values count as 0.
    #[serde(default, deserialize_with = "null_as_zero")]
    pub box_office: f64,
}

impl MovieRecord {
    pub fn year_label(&self) -> String {
        self.year
            .map(|year| year.to_string())
            .unwrap_or_else(|| "N/A".to_string())
    }

    /// `"7.9/10"`, or `"N/A"` without the scale when unrated.
    pub fn rating_label(&self) -> String {
        self.rating
            .map(|rating| format!("{}/10", rating))
            .unwrap_or_else(|| "N/A".to_string())
    }
}

fn null_as_zero<'de, D>(deserializer: D) -> Result<f64, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<f64>::deserialize(deserializer)?.unwrap_or(0.0))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_and_null_fields_take_defaults() {
        let movie: MovieRecord =
            serde_json::from_str(r#"{"title": "Easy A", "year": null, "box_office": null}"#)
                .unwrap();

        assert_eq!(movie.title, "Easy A");
        assert_eq!(movie.year, None);
        assert_eq!(movie.rating, None);
        assert_eq!(movie.box_office, 0.0);
        assert_eq!(movie.year_label(), "N/A");
        assert_eq!(movie.rating_label(), "N/A");
    }

    #[test]
    fn integer_box_office_is_accepted() {
        let movie: MovieRecord = serde_json::from_str(
            r#"{"title": "Titanic", "year": 1997, "rating": 7.9, "box_office": 2187}"#,
        )
        .unwrap();

        assert_eq!(movie.year, Some(1997));
        assert_eq!(movie.rating, Some(7.9));
        assert_eq!(movie.box_office, 2187.0);
        assert_eq!(movie.rating_label(), "7.9/10");
    }
}
