use std::fmt::Write;

use crate::model::actor::{ActorComparison, ActorDetails, ActorSearchResult, PopularActor};
use crate::views::format::{format_currency, or_na, ScoreBand};

const RECENT_MOVIES_SHOWN: usize = 6;

pub fn render_popular_actors(actors: &[PopularActor]) -> String {
    let mut out = String::from("Popular Actors\n");
    for actor in actors {
        let popularity = actor.popularity.unwrap_or(0.0).round();
        let _ = writeln!(out, "  * {}  (Popularity: {})", actor.name, popularity);
    }
    out
}

pub fn render_search_results(results: &[ActorSearchResult]) -> String {
    let mut out = String::from("Search Results\n");
    for actor in results {
        let _ = writeln!(out, "  * {}  (ID: {})", actor.name, or_na(actor.id));
    }
    out
}

pub fn render_actor_details(details: &ActorDetails) -> String {
    let analysis = &details.analysis;
    let mut out = String::new();

    let _ = writeln!(out, "Actor Analysis");
    let _ = writeln!(out, "{}", details.name);
    let _ = writeln!(out, "  Birth Year:   {}", or_na(details.birth_year));
    let _ = writeln!(out, "  Career Start: {}", or_na(details.career_start));
    let _ = writeln!(out, "  Total Movies: {}", details.total_movies);
    if let Some(place) = &details.place_of_birth {
        let _ = writeln!(out, "  Born In:      {}", place);
    }
    if !details.genres.is_empty() {
        let _ = writeln!(out, "  Genres:       {}", details.genres.join(", "));
    }
    if let Some(awards) = details.awards {
        let _ = writeln!(out, "  Awards:       {}", awards);
    }
    match analysis.career_score {
        Some(score) => {
            let _ = writeln!(
                out,
                "  Career Score: {}/100 ({})",
                score,
                ScoreBand::from_score(score)
            );
        }
        None => {
            let _ = writeln!(out, "  Career Score: N/A");
        }
    }

    let _ = writeln!(out, "\nPerformance Metrics");
    if let Some(error) = &analysis.error {
        let _ = writeln!(out, "  ({})", error);
    }
    match analysis.avg_rating {
        Some(rating) => {
            let _ = writeln!(out, "  Average Rating:   {}/10", rating);
        }
        None => {
            let _ = writeln!(out, "  Average Rating:   N/A");
        }
    }
    let _ = writeln!(
        out,
        "  Total Box Office: ${}",
        format_currency(analysis.total_box_office.unwrap_or(0.0))
    );
    let _ = writeln!(
        out,
        "  Career Trend:     {}",
        or_na(analysis.performance_trend.as_ref())
    );
    let _ = writeln!(
        out,
        "  Consistency:      {}",
        or_na(analysis.consistency.as_ref())
    );
    let _ = writeln!(
        out,
        "  Productivity:     {}",
        or_na(analysis.productivity.as_ref())
    );
    let _ = writeln!(
        out,
        "  Commercial:       {}",
        or_na(analysis.commercial_success.as_ref())
    );

    let _ = writeln!(out, "\nAI Recommendations");
    match analysis.recommendations.as_deref() {
        Some(recommendations) if !recommendations.is_empty() => {
            for recommendation in recommendations {
                let _ = writeln!(out, "  - {}", recommendation);
            }
        }
        _ => {
            let _ = writeln!(out, "  - No recommendations available");
        }
    }

    let _ = writeln!(out, "\nRecent Movies");
    if details.movies.is_empty() {
        let _ = writeln!(out, "  No movie data available");
    }
    for movie in details.movies.iter().take(RECENT_MOVIES_SHOWN) {
        let _ = writeln!(
            out,
            "  {}  Year: {}  Rating: {}  Box Office: {}M",
            movie.title,
            movie.year_label(),
            movie.rating_label(),
            movie.box_office
        );
    }

    out
}

pub fn render_comparison(comparison: &ActorComparison) -> String {
    let mut out = String::from("Actor Comparison\n");

    for (metric, ranking) in &comparison.metrics_comparison {
        let _ = writeln!(out, "  {}", metric);
        for entry in ranking {
            let _ = writeln!(out, "    {:<24} {}", entry.name, entry.value);
        }
    }

    if !comparison.winner_categories.is_empty() {
        let _ = writeln!(out, "\nWinners");
        for (metric, name) in &comparison.winner_categories {
            let _ = writeln!(out, "  {}: {}", metric, name);
        }
    }

    for actor in &comparison.actors {
        if let Some(error) = &actor.analysis.error {
            let _ = writeln!(out, "  {}: {}", actor.name, error);
        }
    }

    out
}
