//! Flag value normalization
//!
//! Empty or unparsable values normalize to `None`, meaning "unset".

use itertools::Itertools;
use serde_json::Number;

use crate::domain::TermRef;

/// Normalize a comma separated query list: trim items, drop empties, re-join.
///
/// `" 1, 2 ,,3"` → `"1,2,3"`
pub fn parse_list_query(value: Option<&str>) -> Option<String> {
    let value = value.filter(|v| !v.is_empty())?;
    let joined = value
        .split(',')
        .map(str::trim)
        .filter(|v| !v.is_empty())
        .join(",");
    Some(joined).filter(|v| !v.is_empty())
}

/// Normalize a comma separated id list into numbers, keeping non-numeric
/// tokens as strings. A list with no tokens is unset, never an empty array.
pub fn parse_id_list(value: Option<&str>) -> Option<Vec<TermRef>> {
    let ids = value?
        .split(',')
        .map(str::trim)
        .filter(|v| !v.is_empty())
        .map(|v| match parse_finite(v) {
            Some(n) => TermRef::Id(n),
            None => TermRef::Name(v.to_string()),
        })
        .collect::<Vec<_>>();
    Some(ids).filter(|ids| !ids.is_empty())
}

/// Parse a positive integer flag. Zero and non-numeric values are unset.
pub fn parse_number(value: Option<&str>) -> Option<u64> {
    let n = value?.trim().parse::<f64>().ok()?;
    if !n.is_finite() || n <= 0.0 {
        return None;
    }
    Some(n.trunc() as u64).filter(|n| *n > 0)
}

fn parse_finite(token: &str) -> Option<Number> {
    if let Ok(n) = token.parse::<u64>() {
        return Some(Number::from(n));
    }
    if let Ok(n) = token.parse::<i64>() {
        return Some(Number::from(n));
    }
    token
        .parse::<f64>()
        .ok()
        .filter(|n| n.is_finite())
        .and_then(Number::from_f64)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(None, None)]
    #[case(Some(""), None)]
    #[case(Some("1,2"), Some("1,2"))]
    #[case(Some(" 1 , 2 ,, 3 "), Some("1,2,3"))]
    #[case(Some(" , "), None)]
    fn test_parse_list_query(#[case] input: Option<&str>, #[case] expected: Option<&str>) {
        assert_eq!(parse_list_query(input).as_deref(), expected);
    }

    #[test]
    fn given_mixed_ids_when_parse_id_list_then_keeps_names_as_strings() {
        let ids = parse_id_list(Some("3, news ,4")).unwrap();
        assert_eq!(
            ids,
            vec![
                TermRef::Id(Number::from(3u64)),
                TermRef::Name("news".into()),
                TermRef::Id(Number::from(4u64)),
            ]
        );
        assert_eq!(
            serde_json::to_string(&ids).unwrap(),
            r#"[3,"news",4]"#
        );
    }

    #[test]
    fn given_non_finite_token_when_parse_id_list_then_keeps_string() {
        let ids = parse_id_list(Some("inf,NaN")).unwrap();
        assert_eq!(
            ids,
            vec![TermRef::Name("inf".into()), TermRef::Name("NaN".into())]
        );
    }

    #[rstest]
    #[case(None)]
    #[case(Some(""))]
    #[case(Some(" , "))]
    #[case(Some(",,"))]
    fn given_empty_value_when_parse_id_list_then_unset(#[case] input: Option<&str>) {
        assert_eq!(parse_id_list(input), None);
    }

    #[rstest]
    #[case(None, None)]
    #[case(Some("5"), Some(5))]
    #[case(Some("0"), None)]
    #[case(Some("abc"), None)]
    #[case(Some("-2"), None)]
    #[case(Some("10.7"), Some(10))]
    fn test_parse_number(#[case] input: Option<&str>, #[case] expected: Option<u64>) {
        assert_eq!(parse_number(input), expected);
    }
}
