use crate::domain::model::{Number, NumberSet, PlayedSets, MAX_NUMBER, MIN_NUMBER, SET_SIZE};
use crate::utils::error::{LottoError, Result};
use regex::Regex;
use std::sync::LazyLock;
use url::Url;

/// 每組號碼前面都有一個英文字母
static SET_DELIMITER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new("[a-zA-Z]").expect("set delimiter regex is valid"));

const PAYLOAD_PARAM: &str = "v";
const FIELD_WIDTH: usize = 2;

/// Decodes the played sets out of a scanned ticket URL.
///
/// Returns `Ok(None)` when there is nothing to do: the text is empty, is not
/// an `http` URL, or has no (or an empty) `v` query parameter. Any field that
/// is not a two-digit number in 1..=45 fails the whole payload.
///
/// The `v` value looks like `<header><letter><12 digits>[<letter><12 digits>]*`;
/// the header before the first letter is ignored and every block after a
/// letter holds six two-digit numbers. Digits past the first twelve of a
/// block are ignored.
pub fn parse_payload(payload: &str) -> Result<Option<PlayedSets>> {
    if payload.is_empty() || !payload.starts_with("http") {
        tracing::debug!("Ignoring non-URL scan: {:?}", payload);
        return Ok(None);
    }

    let url = Url::parse(payload).map_err(|source| LottoError::InvalidUrl {
        payload: payload.to_string(),
        source,
    })?;

    let param = url
        .query_pairs()
        .find(|(key, _)| key == PAYLOAD_PARAM)
        .map(|(_, value)| value.into_owned());

    let param = match param {
        Some(param) if !param.is_empty() => param,
        _ => {
            tracing::debug!("No '{}' parameter in scanned URL: {}", PAYLOAD_PARAM, payload);
            return Ok(None);
        }
    };

    let sets = SET_DELIMITER
        .split(&param)
        .skip(1)
        .enumerate()
        .map(|(i, segment)| decode_set(payload, i + 1, segment))
        .collect::<Result<Vec<_>>>()?;

    tracing::debug!("Decoded {} played sets from {}", sets.len(), payload);
    Ok(Some(PlayedSets::new(sets)))
}

fn decode_set(payload: &str, set_index: usize, segment: &str) -> Result<NumberSet> {
    (0..SET_SIZE)
        .map(|i| {
            let start = i * FIELD_WIDTH;
            let value = segment
                .get(start..start + FIELD_WIDTH)
                .and_then(parse_field)
                .ok_or_else(|| LottoError::InvalidNumber {
                    payload: payload.to_string(),
                    set_index,
                    field: segment.chars().skip(start).take(FIELD_WIDTH).collect(),
                })?;

            if !(MIN_NUMBER..=MAX_NUMBER).contains(&value) {
                return Err(LottoError::NumberOutOfRange {
                    payload: payload.to_string(),
                    set_index,
                    value,
                });
            }
            Ok(value)
        })
        .collect()
}

fn parse_field(field: &str) -> Option<Number> {
    if !field.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    field.parse().ok()
}
