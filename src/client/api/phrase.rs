use crate::{
    client::{
        api::helper::{
            delete, get, parse_empty_response, parse_response, post, put, send_request,
            serialize_json,
        },
        model::error::ApiError,
    },
    model::phrase::{CreatePhraseDto, PaginatedPhrasesDto, PhraseDto, UpdatePhraseDto},
};

pub async fn get_phrases(page: u64, entries: u64) -> Result<PaginatedPhrasesDto, ApiError> {
    let url = format!("/api/phrases?page={}&entries={}", page, entries);
    let response = send_request(get(&url)).await?;
    parse_response(response).await
}

pub async fn create_phrase(payload: CreatePhraseDto) -> Result<PhraseDto, ApiError> {
    let body = serialize_json(&payload)?;
    let response = send_request(post("/api/phrases").body(body)).await?;
    parse_response(response).await
}

pub async fn update_phrase(id: &str, payload: UpdatePhraseDto) -> Result<PhraseDto, ApiError> {
    let body = serialize_json(&payload)?;
    let url = format!("/api/phrases/{}", id);
    let response = send_request(put(&url).body(body)).await?;
    parse_response(response).await
}

pub async fn delete_phrase(id: &str) -> Result<(), ApiError> {
    let url = format!("/api/phrases/{}", id);
    let response = send_request(delete(&url)).await?;
    parse_empty_response(response).await
}
