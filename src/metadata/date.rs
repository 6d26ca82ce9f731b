//! Date normalisation and most-common-date selection.

use std::collections::HashMap;

use chrono::NaiveDate;

use super::types::PhotoMetadata;

const ISO_DATE_FORMAT: &str = "%Y-%m-%d";

/// Normalise a timestamp string to `YYYY-MM-DD`.
///
/// EXIF timestamps (`YYYY:MM:DD HH:MM:SS`) are cut at the space and have the
/// colons of the date part replaced with hyphens. ISO timestamps
/// (`YYYY-MM-DDTHH:MM:SS...`) are cut at the `T`. Anything else passes
/// through unchanged.
pub fn to_iso_date_string(raw: &str) -> String {
    match raw.split_once(' ') {
        Some((date, _)) => date.replace(':', "-"),
        None => raw.split_once('T').map_or(raw, |(date, _)| date).to_string(),
    }
}

/// Format a calendar date as `YYYY-MM-DD`.
pub fn format_iso_date(date: NaiveDate) -> String {
    date.format(ISO_DATE_FORMAT).to_string()
}

/// Parse `YYYY-MM-DD` into a calendar date. No timezone is involved, so the
/// year, month and day come back exactly as written.
pub fn date_from_iso(date: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(date, ISO_DATE_FORMAT).ok()
}

/// Most frequent non-empty date, in input order.
///
/// A later date only takes the lead when its running count is strictly
/// greater than the leader's, so ties go to whichever date was seen first.
pub fn most_common_date(metadatas: &[PhotoMetadata]) -> Option<String> {
    let mut counts: HashMap<&str, usize> = HashMap::new();

    metadatas
        .iter()
        .filter_map(|m| m.date.as_deref())
        .filter(|date| !date.is_empty())
        .fold(None, |leader: Option<&str>, date| {
            let count = counts.entry(date).or_insert(0);
            *count += 1;
            let count = *count;

            match leader {
                Some(current) if count <= counts[current] => Some(current),
                _ => Some(date),
            }
        })
        .map(str::to_owned)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn with_date(date: Option<&str>) -> PhotoMetadata {
        PhotoMetadata {
            date: date.map(str::to_owned),
            coordinates: None,
            filename: String::new(),
            mime_type: "image/png".into(),
        }
    }

    #[test]
    fn exif_timestamp_normalises_date_part_only() {
        assert_eq!(to_iso_date_string("2023:02:15 14:30:25"), "2023-02-15");
        assert_eq!(to_iso_date_string("2022:12:01 09:45:00"), "2022-12-01");
    }

    #[test]
    fn iso_timestamp_is_cut_at_t() {
        assert_eq!(to_iso_date_string("2023-03-20T10:15:30"), "2023-03-20");
        assert_eq!(to_iso_date_string("2023-11-05T22:45:10.123Z"), "2023-11-05");
    }

    #[test]
    fn bare_date_passes_through() {
        assert_eq!(to_iso_date_string("2023-01-15"), "2023-01-15");
    }

    #[test]
    fn parses_month_boundaries() {
        let jan = date_from_iso("2023-01-01").unwrap();
        assert_eq!(jan, NaiveDate::from_ymd_opt(2023, 1, 1).unwrap());
        let dec = date_from_iso("2023-12-31").unwrap();
        assert_eq!(dec, NaiveDate::from_ymd_opt(2023, 12, 31).unwrap());
    }

    #[test]
    fn rejects_malformed_dates() {
        assert_eq!(date_from_iso("2023:01:15"), None);
        assert_eq!(date_from_iso("2023-02-30"), None);
        assert_eq!(date_from_iso(""), None);
    }

    #[test]
    fn formatting_pads_single_digits() {
        let date = NaiveDate::from_ymd_opt(2023, 9, 9).unwrap();
        assert_eq!(format_iso_date(date), "2023-09-09");
    }

    #[test]
    fn date_round_trips_without_drift() {
        let mut date = NaiveDate::from_ymd_opt(1999, 12, 25).unwrap();
        let end = NaiveDate::from_ymd_opt(2001, 3, 1).unwrap();
        while date <= end {
            assert_eq!(date_from_iso(&format_iso_date(date)), Some(date));
            date = date.succ_opt().unwrap();
        }
    }

    #[test]
    fn strict_majority_wins() {
        let metadatas = [
            with_date(Some("2023-01-15")),
            with_date(Some("2023-01-15")),
            with_date(Some("2023-01-16")),
        ];
        assert_eq!(most_common_date(&metadatas).as_deref(), Some("2023-01-15"));
    }

    #[test]
    fn tie_goes_to_first_seen() {
        let metadatas = [
            with_date(Some("2023-01-16")),
            with_date(Some("2023-01-15")),
            with_date(Some("2023-01-15")),
            with_date(Some("2023-01-16")),
        ];
        assert_eq!(most_common_date(&metadatas).as_deref(), Some("2023-01-16"));
    }

    #[test]
    fn later_date_takes_lead_once_strictly_ahead() {
        let metadatas = [
            with_date(Some("2023-01-15")),
            with_date(Some("2023-01-16")),
            with_date(Some("2023-01-16")),
        ];
        assert_eq!(most_common_date(&metadatas).as_deref(), Some("2023-01-16"));
    }

    #[test]
    fn missing_dates_are_not_counted() {
        let metadatas = [
            with_date(None),
            with_date(None),
            with_date(Some("")),
            with_date(Some("2023-05-01")),
        ];
        assert_eq!(most_common_date(&metadatas).as_deref(), Some("2023-05-01"));
        assert_eq!(most_common_date(&[with_date(None)]), None);
        assert_eq!(most_common_date(&[]), None);
    }
}
