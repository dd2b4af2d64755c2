use log::{debug, error};
use serde_json::Value;
use shared::{data::Member, normalize::normalize_members};
use thiserror::Error;

/// Shown in place of the crew whenever loading it fails.
pub const LOAD_FAILED: &str = "Could not load crew. Try again later.";

#[derive(Debug, Error)]
pub enum Error {
    #[error("An error occured when interacting with the server: {0}")]
    Http(#[from] reqwest::Error),
    #[error("The server answered with status {0}")]
    Status(reqwest::StatusCode),
}

pub fn members_url(api_url: &str) -> String {
    format!("{}/api/members", api_url.trim_end_matches('/'))
}

/// Fetches and normalizes the member list. One attempt, no retries.
pub fn fetch_members(api_url: &str) -> Result<Vec<Member>, Error> {
    let url = members_url(api_url);
    debug!("Fetching {url}");

    let response = reqwest::blocking::Client::new().get(&url).send()?;
    if !response.status().is_success() {
        return Err(Error::Status(response.status()));
    }

    let payload: Value = response.json()?;
    Ok(normalize_members(&payload))
}

/// Like [`fetch_members`], but a failure is logged and reported to the user
/// as an empty crew.
pub fn load_crew(api_url: &str) -> Vec<Member> {
    match fetch_members(api_url) {
        Ok(members) => members,
        Err(e) => {
            error!("Error fetching members: {e}");
            eprintln!("{LOAD_FAILED}");
            Vec::new()
        }
    }
}
