use std::path::{Path, PathBuf};

use csv::Writer;

use crate::error::{ApiError, Result};
use crate::model::chart_point::{BoxOfficePoint, RatingPoint};

pub struct CsvWriter {}

impl CsvWriter {
    pub fn save_rating_series(series: &[RatingPoint], path: &Path) -> Result<()> {
        CsvWriter::save_rows(
            RatingPoint::csv_titles(),
            series.iter().map(RatingPoint::to_csvable_array),
            path,
        )
    }

    pub fn save_box_office_series(series: &[BoxOfficePoint], path: &Path) -> Result<()> {
        CsvWriter::save_rows(
            BoxOfficePoint::csv_titles(),
            series.iter().map(BoxOfficePoint::to_csvable_array),
            path,
        )
    }

    /// Writes `<actor>_ratings.csv` and `<actor>_box_office.csv` into `dir`,
    /// returning both paths.
    pub fn export_series(
        dir: &Path,
        actor_name: &str,
        ratings: &[RatingPoint],
        box_office: &[BoxOfficePoint],
    ) -> Result<(PathBuf, PathBuf)> {
        std::fs::create_dir_all(dir).map_err(|e| ApiError::Csv {
            file_name: dir.display().to_string(),
            source: csv::Error::from(e),
        })?;

        let slug = file_slug(actor_name);
        let ratings_path = dir.join(format!("{}_ratings.csv", slug));
        let box_office_path = dir.join(format!("{}_box_office.csv", slug));

        CsvWriter::save_rating_series(ratings, &ratings_path)?;
        CsvWriter::save_box_office_series(box_office, &box_office_path)?;

        Ok((ratings_path, box_office_path))
    }

    fn save_rows<I>(header: Vec<&str>, rows: I, path: &Path) -> Result<()>
    where
        I: Iterator<Item = Vec<String>>,
    {
        let file_name = path.display().to_string();
        let csv_error = |source| ApiError::Csv {
            file_name: file_name.clone(),
            source,
        };

        let mut wrt = Writer::from_path(path).map_err(csv_error)?;
        wrt.write_record(&header).map_err(csv_error)?;
        for row in rows {
            wrt.write_record(&row).map_err(csv_error)?;
        }
        wrt.flush().map_err(|e| csv_error(csv::Error::from(e)))?;

        Ok(())
    }
}

pub(crate) fn file_slug(actor_name: &str) -> String {
    let slug: String = actor_name
        .trim()
        .chars()
        .map(|c| {
            if c.is_alphanumeric() {
                c.to_ascii_lowercase()
            } else {
                '_'
            }
        })
        .collect();

    if slug.is_empty() {
        "actor".to_string()
    } else {
        slug
    }
}
