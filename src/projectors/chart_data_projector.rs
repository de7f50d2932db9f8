use std::cmp::Ordering;

use crate::{
    config::DEFAULT_TOP_N,
    extractors::progression_extractor::ProgressionExtractor,
    model::{
        chart_point::{BoxOfficePoint, RatingPoint},
        charts_response::ChartsResponse,
        movie::MovieRecord,
    },
};

pub const MAX_LABEL_CHARS: usize = 15;
const LABEL_ELLIPSIS: &str = "...";

/// Shapes a charts-data response into the two chart series.
///
/// Both builders are pure: the same response always yields the same series,
/// and ties keep the order the backend sent.
#[derive(Debug)]
pub struct ChartDataProjector {}

impl ChartDataProjector {
    /// One point per progression record, oldest year first. Records without a
    /// year go last.
    pub fn build_rating_series(response: &ChartsResponse) -> Vec<RatingPoint> {
        let mut movies = ProgressionExtractor::extract_progression(response);
        movies.sort_by(|a, b| compare_years(a.year, b.year));

        movies
            .into_iter()
            .map(|movie| RatingPoint {
                year: movie.year,
                rating: movie.rating,
                title: movie.title,
            })
            .collect()
    }

    pub fn build_box_office_series(response: &ChartsResponse) -> Vec<BoxOfficePoint> {
        ChartDataProjector::build_box_office_series_top(response, DEFAULT_TOP_N)
    }

    /// Up to `top_n` records with a positive box office, highest first.
    pub fn build_box_office_series_top(
        response: &ChartsResponse,
        top_n: usize,
    ) -> Vec<BoxOfficePoint> {
        let mut movies: Vec<MovieRecord> = ProgressionExtractor::extract_progression(response)
            .into_iter()
            .filter(|movie| movie.box_office > 0.0)
            .collect();
        movies.sort_by(|a, b| b.box_office.total_cmp(&a.box_office));
        movies.truncate(top_n);

        movies
            .into_iter()
            .map(|movie| BoxOfficePoint {
                label: axis_label(&movie.title),
                title: movie.title,
                box_office: movie.box_office,
                year: movie.year,
                rating: movie.rating,
            })
            .collect()
    }
}

fn compare_years(a: Option<i32>, b: Option<i32>) -> Ordering {
    match (a, b) {
        (Some(a), Some(b)) => a.cmp(&b),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => Ordering::Equal,
    }
}

/// Shortens titles longer than [`MAX_LABEL_CHARS`] characters for axis display.
pub fn axis_label(title: &str) -> String {
    if title.chars().count() <= MAX_LABEL_CHARS {
        return title.to_string();
    }

    let mut label: String = title.chars().take(MAX_LABEL_CHARS).collect();
    label.push_str(LABEL_ELLIPSIS);
    label
}
