//! Analytics queries over a course offerings dataset
//!
//! Each query is a pure function over [`CourseDataset`]: the dataset is
//! never mutated, no results are cached, and every call re-scans the
//! records. Queries aggregate either by course title (rankings, search,
//! instructor lists) or by course number (recommendation); the two keys are
//! deliberately distinct, see [`crate::core::models::record`].

use crate::core::dataset::CourseDataset;
use crate::core::error::AnalyticsError;
use crate::core::models::CourseRecord;
use chrono::NaiveDate;
use std::collections::{HashMap, HashSet};
use std::str::FromStr;

/// Summed participants keyed by institution.
pub type ParticipantsByInstitution = HashMap<String, u64>;

/// Summed participants keyed by `institution-subject`, in ranked order.
pub type ParticipationRanking = Vec<(String, u64)>;

/// Solo/co-taught course titles keyed by instructor name.
pub type CoursesByInstructor = HashMap<String, InstructorCourses>;

/// Maximum number of titles the recommendation query returns.
const RECOMMENDATION_LIMIT: usize = 10;

/// Course titles taught by one instructor, split by teaching arrangement
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct InstructorCourses {
    /// Titles of offerings where this instructor is the sole name listed
    pub solo: Vec<String>,
    /// Titles of offerings listing this instructor alongside others
    pub co_taught: Vec<String>,
}

/// Metric used to rank course titles
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum RankMetric {
    /// Rank by total course hours
    Hours,
    /// Rank by participant count
    Participants,
}

impl RankMetric {
    fn value_of(self, record: &CourseRecord) -> f64 {
        match self {
            Self::Hours => record.total_hours,
            Self::Participants => f64::from(record.participants),
        }
    }
}

impl FromStr for RankMetric {
    type Err = AnalyticsError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "hours" => Ok(Self::Hours),
            "participants" => Ok(Self::Participants),
            other => Err(AnalyticsError::InvalidArgument(format!(
                "unrecognized ranking metric '{other}' (expected 'hours' or 'participants')"
            ))),
        }
    }
}

/// Sum participants per institution.
///
/// Every record contributes, so institutions with repeated offerings have
/// all of them summed. Output carries no ordering contract.
#[must_use]
pub fn participants_by_institution(dataset: &CourseDataset) -> ParticipantsByInstitution {
    let mut totals = ParticipantsByInstitution::new();
    for record in dataset.records() {
        *totals.entry(record.institution.clone()).or_insert(0) +=
            u64::from(record.participants);
    }
    totals
}

/// Sum participants per `institution-subject` pair, ranked.
///
/// The output is sorted descending by summed participants; ties are broken
/// ascending by key. This is the only query with a mandated output order.
#[must_use]
pub fn participants_by_institution_and_subject(dataset: &CourseDataset) -> ParticipationRanking {
    let mut totals: HashMap<String, u64> = HashMap::new();
    for record in dataset.records() {
        let key = format!("{}-{}", record.institution, record.subject);
        *totals.entry(key).or_insert(0) += u64::from(record.participants);
    }

    let mut ranking: ParticipationRanking = totals.into_iter().collect();
    ranking.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(&b.0)));
    ranking
}

/// Collect each instructor's solo-taught and co-taught course titles.
///
/// An offering with exactly one listed name feeds that name's solo list;
/// an offering with several names feeds every listed name's co-taught list.
/// Both lists come back deduplicated and sorted ascending. The same title
/// can legitimately appear in both lists of one instructor when they taught
/// different offerings of it under different arrangements.
#[must_use]
pub fn courses_by_instructor(dataset: &CourseDataset) -> CoursesByInstructor {
    let mut result = CoursesByInstructor::new();

    for record in dataset.records() {
        let co_taught = record.is_co_taught();
        for name in record.instructor_names() {
            let entry = result.entry(name.to_string()).or_default();
            let list = if co_taught {
                &mut entry.co_taught
            } else {
                &mut entry.solo
            };
            list.push(record.title.clone());
        }
    }

    for courses in result.values_mut() {
        courses.solo.sort();
        courses.solo.dedup();
        courses.co_taught.sort();
        courses.co_taught.dedup();
    }

    result
}

/// Return the `top_k` course titles ranked by the given metric.
///
/// `by` must be `"hours"` or `"participants"`. Records are ordered
/// descending by the metric with ties broken ascending by title; the first
/// occurrence of a title fixes its rank and later, lower-ranked duplicates
/// of the same title are invisible. When fewer than `top_k` distinct titles
/// exist, all of them are returned.
///
/// # Errors
/// Returns [`AnalyticsError::InvalidArgument`] when `by` is not a
/// recognized metric or `top_k` is zero.
pub fn top_courses(
    dataset: &CourseDataset,
    top_k: usize,
    by: &str,
) -> Result<Vec<String>, AnalyticsError> {
    let metric = by.parse::<RankMetric>()?;
    if top_k == 0 {
        return Err(AnalyticsError::InvalidArgument(
            "ranking count must be positive".to_string(),
        ));
    }

    let mut ranked: Vec<&CourseRecord> = dataset.records().iter().collect();
    ranked.sort_by(|a, b| {
        metric
            .value_of(b)
            .total_cmp(&metric.value_of(a))
            .then_with(|| a.title.cmp(&b.title))
    });

    let mut seen = HashSet::new();
    let mut titles = Vec::with_capacity(top_k.min(ranked.len()));
    for record in ranked {
        if !seen.insert(record.title.as_str()) {
            continue;
        }
        titles.push(record.title.clone());
        if titles.len() == top_k {
            break;
        }
    }

    Ok(titles)
}

/// Find course titles matching a subject substring and metric bounds.
///
/// A record matches when its subject contains `subject` case-insensitively,
/// its audited percentage is at least `min_percent_audited`, and its total
/// hours do not exceed `max_total_hours` (both bounds inclusive). Matching
/// titles come back sorted ascending and deduplicated; no match is an empty
/// list, never an error.
#[must_use]
pub fn search_courses(
    dataset: &CourseDataset,
    subject: &str,
    min_percent_audited: f64,
    max_total_hours: f64,
) -> Vec<String> {
    let needle = subject.to_lowercase();

    let mut titles: Vec<String> = dataset
        .records()
        .iter()
        .filter(|record| {
            record.subject.to_lowercase().contains(&needle)
                && record.percent_audited >= min_percent_audited
                && record.total_hours <= max_total_hours
        })
        .map(|record| record.title.clone())
        .collect();

    titles.sort();
    titles.dedup();
    titles
}

/// Recommend up to ten course titles for a demographic profile.
///
/// Records are grouped by course number. For each number the arithmetic
/// means of `median_age`, `percent_male`, and `percent_degree` are taken
/// over that group's own records, and a squared-Euclidean distance to the
/// target profile is computed:
///
/// `(age - mean_age)² + (gender·100 - mean_male)² + (bachelor·100 - mean_degree)²`
///
/// Numbers are ordered ascending by distance, ties broken ascending by the
/// title of the number's most recently launched offering. Each number maps
/// to that representative title; duplicate titles collapse onto their best
/// rank. Never fails: fewer than ten distinct titles simply yields fewer.
#[must_use]
pub fn recommend_courses(
    dataset: &CourseDataset,
    age: u32,
    gender: u8,
    is_bachelor_or_higher: u8,
) -> Vec<String> {
    let mut sums: HashMap<&str, (f64, f64, f64, u32)> = HashMap::new();
    for record in dataset.records() {
        let entry = sums
            .entry(record.number.as_str())
            .or_insert((0.0, 0.0, 0.0, 0));
        entry.0 += record.median_age;
        entry.1 += record.percent_male;
        entry.2 += record.percent_degree;
        entry.3 += 1;
    }

    let representative = latest_title_by_number(dataset);

    let target_age = f64::from(age);
    let target_male = f64::from(gender) * 100.0;
    let target_degree = f64::from(is_bachelor_or_higher) * 100.0;

    let mut candidates: Vec<(f64, &str)> = sums
        .into_iter()
        .map(|(number, (age_sum, male_sum, degree_sum, count))| {
            let n = f64::from(count);
            let distance = (target_age - age_sum / n).powi(2)
                + (target_male - male_sum / n).powi(2)
                + (target_degree - degree_sum / n).powi(2);
            (distance, number)
        })
        .collect();

    candidates.sort_by(|a, b| {
        a.0.total_cmp(&b.0).then_with(|| {
            let title_a = representative.get(a.1).copied().unwrap_or_default();
            let title_b = representative.get(b.1).copied().unwrap_or_default();
            title_a.cmp(title_b)
        })
    });

    let mut seen = HashSet::new();
    let mut titles = Vec::new();
    for (_, number) in candidates {
        if let Some(&title) = representative.get(number) {
            if seen.insert(title) {
                titles.push(title.to_string());
                if titles.len() == RECOMMENDATION_LIMIT {
                    break;
                }
            }
        }
    }

    titles
}

/// Map each course number to the title of its most recently launched record.
/// On a literal launch-date tie the first-encountered record wins.
fn latest_title_by_number(dataset: &CourseDataset) -> HashMap<&str, &str> {
    let mut latest: HashMap<&str, (NaiveDate, &str)> = HashMap::new();

    for record in dataset.records() {
        match latest.get(record.number.as_str()) {
            Some((date, _)) if record.launch_date <= *date => {}
            _ => {
                latest.insert(
                    record.number.as_str(),
                    (record.launch_date, record.title.as_str()),
                );
            }
        }
    }

    latest
        .into_iter()
        .map(|(number, (_, title))| (number, title))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn offering(
        institution: &str,
        number: &str,
        launch: (i32, u32, u32),
        title: &str,
        instructors: &str,
        subject: &str,
    ) -> CourseRecord {
        CourseRecord {
            institution: institution.to_string(),
            number: number.to_string(),
            launch_date: NaiveDate::from_ymd_opt(launch.0, launch.1, launch.2)
                .expect("valid test date"),
            title: title.to_string(),
            instructors: instructors.to_string(),
            subject: subject.to_string(),
            year: 2016,
            honor_code: 0,
            participants: 0,
            audited: 0,
            certified: 0,
            percent_audited: 0.0,
            percent_certified: 0.0,
            percent_certified_50: 0.0,
            percent_video: 0.0,
            percent_forum: 0.0,
            grade_higher_zero: 0.0,
            total_hours: 0.0,
            median_hours_certification: 0.0,
            median_age: 0.0,
            percent_male: 0.0,
            percent_female: 0.0,
            percent_degree: 0.0,
        }
    }

    #[test]
    fn sums_participants_per_institution() {
        let mut a = offering("MITx", "6.002x", (2012, 9, 5), "Circuits", "A", "EE");
        a.participants = 100;
        let mut b = offering("MITx", "8.02x", (2013, 9, 5), "Physics", "B", "Physics");
        b.participants = 50;

        let dataset = CourseDataset::from_records(vec![a, b]);
        let totals = participants_by_institution(&dataset);

        assert_eq!(totals.len(), 1);
        assert_eq!(totals.get("MITx"), Some(&150));
    }

    #[test]
    fn institution_totals_preserve_dataset_total() {
        let mut records = Vec::new();
        for (inst, count) in [("MITx", 10), ("HarvardX", 25), ("MITx", 7), ("UTAustinX", 3)] {
            let mut r = offering(inst, "n", (2014, 1, 1), "t", "i", "s");
            r.participants = count;
            records.push(r);
        }
        let dataset = CourseDataset::from_records(records);

        let totals = participants_by_institution(&dataset);
        let grand_total: u64 = totals.values().sum();
        assert_eq!(grand_total, 45);
        assert_eq!(totals.get("MITx"), Some(&17));
        assert_eq!(totals.get("HarvardX"), Some(&25));
    }

    #[test]
    fn ranks_institution_subject_pairs_by_sum_then_key() {
        let mut a = offering("MITx", "1", (2014, 1, 1), "t1", "i", "CS");
        a.participants = 300;
        let mut b = offering("HarvardX", "2", (2014, 1, 1), "t2", "i", "Math");
        b.participants = 300;
        let mut c = offering("MITx", "3", (2014, 1, 1), "t3", "i", "Bio");
        c.participants = 100;
        let mut d = offering("MITx", "4", (2015, 1, 1), "t4", "i", "Bio");
        d.participants = 50;

        let dataset = CourseDataset::from_records(vec![a, b, c, d]);
        let ranking = participants_by_institution_and_subject(&dataset);

        assert_eq!(
            ranking,
            vec![
                ("HarvardX-Math".to_string(), 300),
                ("MITx-CS".to_string(), 300),
                ("MITx-Bio".to_string(), 150),
            ]
        );

        // Adjacent-pair contract: value descending, key ascending on ties.
        for pair in ranking.windows(2) {
            assert!(pair[0].1 > pair[1].1 || (pair[0].1 == pair[1].1 && pair[0].0 <= pair[1].0));
        }
    }

    #[test]
    fn classifies_solo_and_co_taught_titles() {
        let records = vec![
            offering("MITx", "1", (2014, 1, 1), "Circuits", "Alice", "EE"),
            offering("MITx", "2", (2014, 1, 1), "Signals", "Alice, Bob", "EE"),
        ];
        let dataset = CourseDataset::from_records(records);

        let by_instructor = courses_by_instructor(&dataset);

        let alice = by_instructor.get("Alice").expect("Alice present");
        assert_eq!(alice.solo, vec!["Circuits"]);
        assert_eq!(alice.co_taught, vec!["Signals"]);

        let bob = by_instructor.get("Bob").expect("Bob present");
        assert!(bob.solo.is_empty());
        assert_eq!(bob.co_taught, vec!["Signals"]);
    }

    #[test]
    fn same_title_can_appear_in_both_lists() {
        let records = vec![
            offering("MITx", "1", (2014, 1, 1), "Circuits", "Alice", "EE"),
            offering("MITx", "2", (2015, 1, 1), "Circuits", "Alice, Bob", "EE"),
        ];
        let dataset = CourseDataset::from_records(records);

        let alice = courses_by_instructor(&dataset)
            .remove("Alice")
            .expect("Alice present");
        assert_eq!(alice.solo, vec!["Circuits"]);
        assert_eq!(alice.co_taught, vec!["Circuits"]);
    }

    #[test]
    fn instructor_lists_are_sorted_and_deduplicated() {
        let records = vec![
            offering("MITx", "1", (2014, 1, 1), "Zebra Studies", "Alice", "Bio"),
            offering("MITx", "1", (2015, 1, 1), "Zebra Studies", "Alice", "Bio"),
            offering("MITx", "2", (2014, 1, 1), "Ant Studies", "Alice", "Bio"),
        ];
        let dataset = CourseDataset::from_records(records);

        let alice = courses_by_instructor(&dataset)
            .remove("Alice")
            .expect("Alice present");
        assert_eq!(alice.solo, vec!["Ant Studies", "Zebra Studies"]);
    }

    #[test]
    fn ranks_titles_by_participants_with_title_tiebreak() {
        let mut a = offering("MITx", "1", (2014, 1, 1), "Bravo", "i", "s");
        a.participants = 300;
        let mut b = offering("MITx", "2", (2014, 1, 1), "Alpha", "i", "s");
        b.participants = 300;
        let mut c = offering("MITx", "3", (2014, 1, 1), "Charlie", "i", "s");
        c.participants = 500;

        let dataset = CourseDataset::from_records(vec![a, b, c]);
        let top = top_courses(&dataset, 3, "participants").expect("valid query");

        assert_eq!(top, vec!["Charlie", "Alpha", "Bravo"]);
    }

    #[test]
    fn duplicate_titles_rank_at_their_best_record() {
        let mut a = offering("MITx", "1", (2014, 1, 1), "Xray", "i", "s");
        a.participants = 500;
        let mut b = offering("MITx", "2", (2014, 1, 1), "Yankee", "i", "s");
        b.participants = 300;
        let mut c = offering("MITx", "1", (2015, 1, 1), "Xray", "i", "s");
        c.participants = 200;

        let dataset = CourseDataset::from_records(vec![a, b, c]);
        let top = top_courses(&dataset, 3, "participants").expect("valid query");

        // The weaker Xray offering is invisible; only two distinct titles exist.
        assert_eq!(top, vec!["Xray", "Yankee"]);
    }

    #[test]
    fn ranks_titles_by_hours() {
        let mut a = offering("MITx", "1", (2014, 1, 1), "Short", "i", "s");
        a.total_hours = 10.5;
        let mut b = offering("MITx", "2", (2014, 1, 1), "Long", "i", "s");
        b.total_hours = 400.0;

        let dataset = CourseDataset::from_records(vec![a, b]);
        let top = top_courses(&dataset, 2, "hours").expect("valid query");

        assert_eq!(top, vec!["Long", "Short"]);
    }

    #[test]
    fn top_count_clamps_to_distinct_titles() {
        let dataset = CourseDataset::from_records(vec![
            offering("MITx", "1", (2014, 1, 1), "Only", "i", "s"),
            offering("MITx", "2", (2015, 1, 1), "Only", "i", "s"),
        ]);

        let top = top_courses(&dataset, 10, "participants").expect("valid query");
        assert_eq!(top, vec!["Only"]);
    }

    #[test]
    fn top_rejects_zero_count() {
        let dataset = CourseDataset::from_records(vec![offering(
            "MITx",
            "1",
            (2014, 1, 1),
            "t",
            "i",
            "s",
        )]);

        let err = top_courses(&dataset, 0, "participants").unwrap_err();
        assert!(matches!(err, AnalyticsError::InvalidArgument(_)));
    }

    #[test]
    fn top_rejects_unknown_metric() {
        let dataset = CourseDataset::from_records(Vec::new());

        let err = top_courses(&dataset, 1, "certified").unwrap_err();
        assert!(matches!(err, AnalyticsError::InvalidArgument(_)));
        assert!(err.to_string().contains("certified"));
    }

    #[test]
    fn search_matches_substring_case_insensitively() {
        let mut a = offering("MITx", "1", (2014, 1, 1), "Data Course", "i", "CS, Data");
        a.percent_audited = 10.0;
        a.total_hours = 50.0;
        let mut b = offering("MITx", "2", (2014, 1, 1), "Plain CS", "i", "CS");
        b.percent_audited = 10.0;
        b.total_hours = 50.0;
        let mut c = offering("MITx", "3", (2014, 1, 1), "History", "i", "Humanities");
        c.percent_audited = 10.0;
        c.total_hours = 50.0;

        let dataset = CourseDataset::from_records(vec![a, b, c]);
        let titles = search_courses(&dataset, "cs", 0.0, 100.0);

        assert_eq!(titles, vec!["Data Course", "Plain CS"]);
    }

    #[test]
    fn search_bounds_are_inclusive() {
        let mut a = offering("MITx", "1", (2014, 1, 1), "On The Line", "i", "CS");
        a.percent_audited = 25.0;
        a.total_hours = 100.0;

        let dataset = CourseDataset::from_records(vec![a]);

        assert_eq!(
            search_courses(&dataset, "cs", 25.0, 100.0),
            vec!["On The Line"]
        );
        assert!(search_courses(&dataset, "cs", 25.1, 100.0).is_empty());
        assert!(search_courses(&dataset, "cs", 25.0, 99.9).is_empty());
    }

    #[test]
    fn search_result_is_sorted_and_deduplicated() {
        let mut records = Vec::new();
        for (number, title) in [("1", "Zulu"), ("2", "Alpha"), ("3", "Zulu")] {
            let mut r = offering("MITx", number, (2014, 1, 1), title, "i", "CS");
            r.percent_audited = 10.0;
            r.total_hours = 10.0;
            records.push(r);
        }
        let dataset = CourseDataset::from_records(records);

        let titles = search_courses(&dataset, "cs", 0.0, 100.0);
        assert_eq!(titles, vec!["Alpha", "Zulu"]);
    }

    #[test]
    fn search_returns_empty_on_no_match() {
        let dataset = CourseDataset::from_records(vec![offering(
            "MITx",
            "1",
            (2014, 1, 1),
            "t",
            "i",
            "CS",
        )]);

        assert!(search_courses(&dataset, "philosophy", 0.0, 100.0).is_empty());
    }

    #[test]
    fn recommends_nearest_demographic_group_first() {
        // Number "N1" averages to the exact target profile; "N2" is far off.
        let mut a = offering("MITx", "N1", (2014, 1, 1), "Near Course", "i", "s");
        a.median_age = 20.0;
        a.percent_male = 0.0;
        a.percent_degree = 0.0;
        let mut b = offering("MITx", "N1", (2015, 1, 1), "Near Course", "i", "s");
        b.median_age = 30.0;
        b.percent_male = 0.0;
        b.percent_degree = 0.0;
        let mut c = offering("MITx", "N2", (2014, 1, 1), "Far Course", "i", "s");
        c.median_age = 60.0;
        c.percent_male = 100.0;
        c.percent_degree = 100.0;

        let dataset = CourseDataset::from_records(vec![a, b, c]);
        let titles = recommend_courses(&dataset, 25, 0, 0);

        assert_eq!(titles, vec!["Near Course", "Far Course"]);
    }

    #[test]
    fn recommendation_uses_group_means_not_single_records() {
        // The group mean (25) matches the target even though neither record does.
        let mut a = offering("MITx", "N1", (2014, 1, 1), "Averaged", "i", "s");
        a.median_age = 20.0;
        let mut b = offering("MITx", "N1", (2015, 1, 1), "Averaged", "i", "s");
        b.median_age = 30.0;
        let mut c = offering("MITx", "N2", (2014, 1, 1), "Exact Solo", "i", "s");
        c.median_age = 26.0;

        let dataset = CourseDataset::from_records(vec![a, b, c]);
        let titles = recommend_courses(&dataset, 25, 0, 0);

        assert_eq!(titles, vec!["Averaged", "Exact Solo"]);
    }

    #[test]
    fn recommendation_uses_latest_offering_title() {
        let mut old = offering("MITx", "N1", (2013, 1, 1), "Old Title", "i", "s");
        old.median_age = 25.0;
        let mut new = offering("MITx", "N1", (2016, 6, 1), "New Title", "i", "s");
        new.median_age = 25.0;

        let dataset = CourseDataset::from_records(vec![old, new]);
        let titles = recommend_courses(&dataset, 25, 0, 0);

        assert_eq!(titles, vec!["New Title"]);
    }

    #[test]
    fn launch_date_ties_keep_first_encountered_record() {
        let first = offering("MITx", "N1", (2016, 6, 1), "First Seen", "i", "s");
        let second = offering("MITx", "N1", (2016, 6, 1), "Second Seen", "i", "s");

        let dataset = CourseDataset::from_records(vec![first, second]);
        let titles = recommend_courses(&dataset, 0, 0, 0);

        assert_eq!(titles, vec!["First Seen"]);
    }

    #[test]
    fn distance_ties_order_by_representative_title() {
        // Symmetric around the target age of 25, so both distances are equal.
        let mut a = offering("MITx", "N1", (2014, 1, 1), "Beta", "i", "s");
        a.median_age = 20.0;
        let mut b = offering("MITx", "N2", (2014, 1, 1), "Alpha", "i", "s");
        b.median_age = 30.0;

        let dataset = CourseDataset::from_records(vec![a, b]);
        let titles = recommend_courses(&dataset, 25, 0, 0);

        assert_eq!(titles, vec!["Alpha", "Beta"]);
    }

    #[test]
    fn recommendation_deduplicates_shared_titles() {
        let mut a = offering("MITx", "N1", (2014, 1, 1), "Shared", "i", "s");
        a.median_age = 25.0;
        let mut b = offering("MITx", "N2", (2014, 1, 1), "Shared", "i", "s");
        b.median_age = 30.0;

        let dataset = CourseDataset::from_records(vec![a, b]);
        let titles = recommend_courses(&dataset, 25, 0, 0);

        assert_eq!(titles, vec!["Shared"]);
    }

    #[test]
    fn recommendation_caps_at_ten_titles() {
        let mut records = Vec::new();
        for i in 0..15 {
            let mut r = offering(
                "MITx",
                &format!("N{i}"),
                (2014, 1, 1),
                &format!("Title {i:02}"),
                "i",
                "s",
            );
            r.median_age = f64::from(i);
            records.push(r);
        }
        let dataset = CourseDataset::from_records(records);

        let titles = recommend_courses(&dataset, 0, 0, 0);
        assert_eq!(titles.len(), 10);
    }

    #[test]
    fn recommendation_never_fails_on_tiny_datasets() {
        let dataset = CourseDataset::from_records(vec![offering(
            "MITx",
            "N1",
            (2014, 1, 1),
            "Lonely",
            "i",
            "s",
        )]);

        assert_eq!(recommend_courses(&dataset, 0, 0, 0), vec!["Lonely"]);
        assert_eq!(recommend_courses(&dataset, 120, 1, 1), vec!["Lonely"]);

        let empty = CourseDataset::from_records(Vec::new());
        assert!(recommend_courses(&empty, 30, 1, 0).is_empty());
    }
}
