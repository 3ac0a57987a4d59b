//! Integration tests for candidate aggregation.
//!
//! These tests drive `build_candidates` through a `SourceSet` the way the
//! session does, and check the ordering, dedup and filter-mode guarantees.

use catalog::{GenreId, MovieId, RawMovie, RawMoviePage};
use chrono::NaiveDate;
use pipeline::build_candidates;
use sources::{ListKind, MovieFilters, SourceSet, YearRange};

fn today() -> NaiveDate {
    NaiveDate::from_ymd_opt(2026, 10, 16).unwrap()
}

fn raw(id: MovieId, genres: &[GenreId]) -> RawMovie {
    RawMovie {
        id,
        title: format!("Movie {}", id),
        release_date: Some("2015-06-01".to_string()),
        vote_average: 6.0,
        genre_ids: genres.to_vec(),
        ..RawMovie::default()
    }
}

fn rated(id: MovieId, vote_average: f64) -> RawMovie {
    RawMovie {
        vote_average,
        ..raw(id, &[28])
    }
}

fn released(id: MovieId, date: &str) -> RawMovie {
    RawMovie {
        release_date: Some(date.to_string()),
        ..raw(id, &[28])
    }
}

fn page(results: Vec<RawMovie>) -> RawMoviePage {
    RawMoviePage {
        page: 1,
        total_results: results.len() as u32,
        results,
        total_pages: 1,
    }
}

fn set_with(now_playing: Vec<RawMovie>, popular: Vec<RawMovie>, upcoming: Vec<RawMovie>) -> SourceSet {
    let mut set = SourceSet::new();
    set.set_ready(ListKind::NowPlaying, page(now_playing));
    set.set_ready(ListKind::Popular, page(popular));
    set.set_ready(ListKind::Upcoming, page(upcoming));
    set
}

fn ids(set: &SourceSet, filters: &MovieFilters) -> Vec<MovieId> {
    build_candidates(set, filters, today())
        .expect("sources are settled")
        .movies
        .iter()
        .map(|m| m.id)
        .collect()
}

#[test]
fn test_dedup_keeps_first_and_filters_genre() {
    // [{id:1, genre:[28]}, {id:2, genre:[35]}, {id:1, genre:[28]}] with genres [28]
    let set = set_with(
        vec![raw(1, &[28]), raw(2, &[35])],
        vec![raw(1, &[28])],
        vec![],
    );
    let filters = MovieFilters {
        genres: [28].into(),
        ..MovieFilters::default()
    };

    let list = build_candidates(&set, &filters, today()).unwrap();
    assert_eq!(list.movies.len(), 1);
    assert_eq!(list.movies[0].id, 1);
    assert_eq!(list.movies[0].genre_ids, vec![28]);
}

#[test]
fn test_unfiltered_concatenates_in_source_order() {
    let set = set_with(
        vec![raw(3, &[28]), raw(1, &[35]), raw(2, &[18])],
        vec![raw(5, &[28]), raw(4, &[99])],
        vec![],
    );

    assert_eq!(ids(&set, &MovieFilters::default()), vec![3, 1, 2, 5, 4]);
}

#[test]
fn test_no_duplicate_ids_across_sources() {
    let set = set_with(
        vec![raw(1, &[28]), raw(2, &[28]), raw(1, &[28]), raw(3, &[28])],
        vec![raw(3, &[28]), raw(2, &[28]), raw(4, &[28]), raw(4, &[28])],
        vec![],
    );

    let result = ids(&set, &MovieFilters::default());
    assert_eq!(result, vec![1, 2, 3, 4]);
}

#[test]
fn test_first_occurrence_wins_across_sources() {
    let mut later = rated(1, 2.0);
    later.title = "From popular".to_string();
    let set = set_with(vec![rated(1, 9.0)], vec![later], vec![]);

    let list = build_candidates(&set, &MovieFilters::default(), today()).unwrap();
    assert_eq!(list.movies.len(), 1);
    assert_eq!(list.movies[0].title, "Movie 1");
    assert!((list.movies[0].rating - 4.5).abs() < f32::EPSILON);
}

#[test]
fn test_order_is_stable_under_filtering() {
    let set = set_with(
        vec![raw(10, &[28]), raw(11, &[35]), raw(12, &[28])],
        vec![raw(13, &[35]), raw(14, &[28])],
        vec![],
    );
    let filters = MovieFilters {
        genres: [28].into(),
        ..MovieFilters::default()
    };

    assert_eq!(ids(&set, &filters), vec![10, 12, 14]);
}

#[test]
fn test_rating_boundary() {
    // 7.0 / 2 = 3.5 exactly; 6.98 / 2 = 3.49
    let set = set_with(vec![rated(1, 7.0), rated(2, 6.98), rated(3, 9.0)], vec![], vec![]);
    let filters = MovieFilters {
        rating: Some(3.5),
        ..MovieFilters::default()
    };

    assert_eq!(ids(&set, &filters), vec![1, 3]);
}

#[test]
fn test_year_range_boundary() {
    let set = set_with(
        vec![
            released(1, "1999-12-31"),
            released(2, "2000-01-01"),
            released(3, "2005-05-05"),
            released(4, "2010-12-31"),
            released(5, "2011-01-01"),
        ],
        vec![],
        vec![],
    );
    let filters = MovieFilters {
        years: Some(YearRange::new(2000, 2010)),
        ..MovieFilters::default()
    };

    assert_eq!(ids(&set, &filters), vec![2, 3, 4]);
}

#[test]
fn test_latest_uses_only_future_upcoming() {
    let set = set_with(
        vec![raw(1, &[28])],
        vec![raw(2, &[28])],
        vec![
            released(20, "2026-10-01"),
            released(21, "2026-11-20"),
            released(22, "2026-10-16"),
            released(23, "2027-03-03"),
            released(21, "2026-11-20"),
        ],
    );

    assert_eq!(ids(&set, &MovieFilters::latest()), vec![21, 23]);
}

#[test]
fn test_latest_ignores_content_filters() {
    let set = set_with(
        vec![],
        vec![],
        vec![
            RawMovie { vote_average: 1.0, ..released(30, "2027-01-01") },
            RawMovie { genre_ids: vec![35], ..released(31, "2028-06-01") },
        ],
    );

    let baseline = ids(&set, &MovieFilters::latest());
    let constrained = MovieFilters {
        genres: [99].into(),
        rating: Some(5.0),
        years: Some(YearRange::new(1900, 1901)),
        platforms: ["8".to_string()].into(),
        ..MovieFilters::latest()
    };

    assert_eq!(baseline, vec![30, 31]);
    assert_eq!(ids(&set, &constrained), baseline);
}

#[test]
fn test_top_rated_is_not_part_of_default_mix() {
    let mut set = set_with(vec![raw(1, &[28])], vec![raw(2, &[28])], vec![]);
    set.set_ready(ListKind::TopRated, page(vec![raw(99, &[28])]));

    assert_eq!(ids(&set, &MovieFilters::default()), vec![1, 2]);
}
