use serde::Deserialize;

use super::error::TransportError;
use crate::domain::{FindMessagesQuery, JalaliDateTime, ReceivedMessage};

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
struct ReceivedMessageJson {
    id: i64,
    date: String,
    #[serde(default)]
    body: Option<String>,
    from_number: String,
    to_number: String,
}

pub fn encode_find_messages_query(query: &FindMessagesQuery) -> Vec<(String, String)> {
    let mut params = Vec::<(String, String)>::new();

    if let Some(page_number) = query.page_number() {
        params.push((
            FindMessagesQuery::PAGE_NUMBER_FIELD.to_owned(),
            page_number.to_string(),
        ));
    }
    if let Some(page_size) = query.page_size() {
        params.push((
            FindMessagesQuery::PAGE_SIZE_FIELD.to_owned(),
            page_size.to_string(),
        ));
    }
    if let Some(phone_number) = query.phone_number() {
        params.push((
            FindMessagesQuery::PHONE_NUMBER_FIELD.to_owned(),
            phone_number.to_owned(),
        ));
    }
    if let Some(from_date) = query.from_date() {
        params.push((
            FindMessagesQuery::FROM_DATE_FIELD.to_owned(),
            from_date.format_query(),
        ));
    }
    if let Some(to_date) = query.to_date() {
        params.push((
            FindMessagesQuery::TO_DATE_FIELD.to_owned(),
            to_date.format_query(),
        ));
    }

    params
}

pub fn decode_find_messages_json_response(
    json: &str,
) -> Result<Vec<ReceivedMessage>, TransportError> {
    let parsed: Vec<ReceivedMessageJson> = serde_json::from_str(json)?;
    parsed
        .into_iter()
        .map(|item| {
            let received_at = JalaliDateTime::parse_api(&item.date)
                .and_then(|date| date.to_gregorian())
                .ok_or_else(|| TransportError::InvalidDate {
                    value: item.date.clone(),
                })?;
            Ok::<_, TransportError>(ReceivedMessage {
                id: item.id,
                received_at,
                body: item.body.unwrap_or_default(),
                from_number: item.from_number,
                to_number: item.to_number,
            })
        })
        .collect()
}
