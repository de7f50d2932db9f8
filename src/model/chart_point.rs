use serde::Serialize;

/// One point of the rating progression line.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RatingPoint {
    pub year: Option<i32>,
    pub rating: Option<f64>,
    /// Shown in the tooltip
    pub title: String,
}

impl RatingPoint {
    pub fn to_csvable_array(&self) -> Vec<String> {
        vec![
            self.year.map(|y| y.to_string()).unwrap_or_default(),
            self.rating.map(|r| r.to_string()).unwrap_or_default(),
            self.title.clone(),
        ]
    }

    pub fn csv_titles() -> Vec<&'static str> {
        vec!["Year", "Rating", "Title"]
    }
}

/// One bar of the box office ranking.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BoxOfficePoint {
    /// Full title, kept for the tooltip
    pub title: String,
    /// Axis label, shortened for long titles
    pub label: String,
    pub box_office: f64,
    pub year: Option<i32>,
    pub rating: Option<f64>,
}

impl BoxOfficePoint {
    pub fn to_csvable_array(&self) -> Vec<String> {
        vec![
            self.title.clone(),
            self.box_office.to_string(),
            self.year.map(|y| y.to_string()).unwrap_or_default(),
            self.rating.map(|r| r.to_string()).unwrap_or_default(),
        ]
    }

    pub fn csv_titles() -> Vec<&'static str> {
        vec!["Title", "Box Office ($M)", "Year", "Rating"]
    }
}
