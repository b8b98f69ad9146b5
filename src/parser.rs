use crate::error::ConvertError;

use std::time::Duration;

use nom::bytes::complete::{tag, take_while_m_n};
use nom::character::complete::{char, digit1, i64 as integer, space0};
use nom::combinator::{all_consuming, map_res};
use nom::error::{convert_error, VerboseError};
use nom::sequence::{delimited, separated_pair};
use nom::{Err, IResult};

/// Parses an ASS timestamp of the form `H:MM:SS.CC`.
pub fn parse_timestamp(input: &str) -> Result<Duration, ConvertError> {
    finish(input, all_consuming(timestamp)(input))
        .map_err(|msg| ConvertError::Format(format!("Invalid timestamp '{}': {}", input, msg)))
}

/// Parses an `x,y` origin offset.
pub fn parse_position(input: &str) -> Result<(i64, i64), ConvertError> {
    finish(input, all_consuming(position)(input))
        .map_err(|msg| ConvertError::Format(format!("Invalid position '{}': {}", input, msg)))
}

fn finish<T>(input: &str, result: IResult<&str, T, VerboseError<&str>>) -> Result<T, String> {
    match result {
        Ok((_, value)) => Ok(value),
        Err(Err::Error(err)) | Err(Err::Failure(err)) => Err(convert_error(input, err)),
        Err(Err::Incomplete(_)) => {
            unreachable!("Incomplete data received by non-streaming parser.")
        }
    }
}

fn timestamp(input: &str) -> IResult<&str, Duration, VerboseError<&str>> {
    let take_two = || {
        map_res(
            take_while_m_n(2, 2, |c: char| c.is_ascii_digit()),
            |s: &str| s.parse::<u64>(),
        )
    };

    let (input, hours) = map_res(digit1, |s: &str| s.parse::<u64>())(input)?;
    let (input, _) = tag(":")(input)?;
    let (input, minutes) = take_two()(input)?;
    let (input, _) = tag(":")(input)?;
    let (input, seconds) = take_two()(input)?;
    let (input, _) = tag(".")(input)?;
    let (input, centis) = take_two()(input)?;

    let secs = hours
        .checked_mul(3600)
        .and_then(|s| s.checked_add(minutes * 60 + seconds));
    match secs {
        Some(secs) => Ok((
            input,
            Duration::from_secs(secs) + Duration::from_millis(centis * 10),
        )),
        None => Err(Err::Error(nom::error::make_error(
            input,
            nom::error::ErrorKind::TooLarge,
        ))),
    }
}

fn position(input: &str) -> IResult<&str, (i64, i64), VerboseError<&str>> {
    separated_pair(
        delimited(space0, integer, space0),
        char(','),
        delimited(space0, integer, space0),
    )(input)
}

#[cfg(test)]
mod tests {
    use super::*;

    macro_rules! test_parse_ts {
        ($($name:ident: $value:expr,)*) => {
        $(
            #[test]
            fn $name() {
                let (input, expected) = $value;

                let duration = parse_timestamp(input).unwrap();

                assert_eq!(duration.as_millis(), expected);
            }
        )*
        }
    }

    test_parse_ts! {
        test_parse_ts_0: ("0:00:00.00", 0),
        test_parse_ts_1: ("0:00:00.01", 10),
        test_parse_ts_2: ("0:00:01.20", 1200),
        test_parse_ts_3: ("1:02:03.04", 3_723_040),
        test_parse_ts_4: ("01:00:00.00", 3_600_000),
        test_parse_ts_5: ("100:00:00.99", 360_000_990),
        test_parse_ts_6: ("0:99:99.99", 99 * 60_000 + 99_990),
    }

    macro_rules! test_reject_ts {
        ($($name:ident: $value:expr,)*) => {
        $(
            #[test]
            fn $name() {
                assert!(matches!(parse_timestamp($value), Err(ConvertError::Format(_))));
            }
        )*
        }
    }

    test_reject_ts! {
        test_reject_ts_empty: "",
        test_reject_ts_no_hours: ":00:00.00",
        test_reject_ts_short_minutes: "0:0:00.00",
        test_reject_ts_long_seconds: "0:00:000.00",
        test_reject_ts_millis: "0:00:00.000",
        test_reject_ts_comma: "0:00:00,00",
        test_reject_ts_trailing: "0:00:00.00 ",
        test_reject_ts_leading: " 0:00:00.00",
        test_reject_ts_overflow: "99999999999999999999:00:00.00",
    }

    #[test]
    fn parses_positions() {
        assert_eq!(parse_position("0,0").unwrap(), (0, 0));
        assert_eq!(parse_position("120,-40").unwrap(), (120, -40));
        assert_eq!(parse_position(" 3 , 4 ").unwrap(), (3, 4));
    }

    #[test]
    fn rejects_bad_positions() {
        for input in &["", "1", "1,", ",1", "1;2", "1,2,3", "a,b", "1.5,2"] {
            assert!(
                matches!(parse_position(input), Err(ConvertError::Format(_))),
                "accepted '{}'",
                input
            );
        }
    }
}
