use chrono::DateTime;

pub trait UnixTimestamp {
    /// Renders a unix timestamp in seconds like `Thu Jan  1 00:16:40 1970 UTC`.
    fn to_utc_string(&self) -> String;
}

impl UnixTimestamp for i64 {
    fn to_utc_string(&self) -> String {
        match DateTime::from_timestamp(*self, 0) {
            Some(date_time) => date_time.format("%a %b %e %H:%M:%S %Y UTC").to_string(),
            None => format!("<invalid timestamp {}>", self),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    #[rstest]
    #[case::epoch(0, "Thu Jan  1 00:00:00 1970 UTC")]
    #[case::padded_day(1000, "Thu Jan  1 00:16:40 1970 UTC")]
    #[case::two_digit_day(1_700_000_000, "Tue Nov 14 22:13:20 2023 UTC")]
    #[case::out_of_range(i64::MAX, "<invalid timestamp 9223372036854775807>")]
    fn to_utc_string(#[case] timestamp: i64, #[case] expected: &str) {
        assert_eq!(timestamp.to_utc_string(), expected);
    }
}
