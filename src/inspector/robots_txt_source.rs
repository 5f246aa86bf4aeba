use crate::inspector::inspect_error::InspectError;
use crate::robots::{self, ParseResult};
use reqwest::StatusCode;
use url::Url;

/// Raw robots.txt text for one site, either fetched from the live site or
/// supplied directly (the editor workflow). A missing robots.txt is treated
/// as empty content, meaning everything is allowed.
#[derive(Clone)]
pub struct RobotsTxtSource {
    content: String,
}

impl RobotsTxtSource {
    pub fn from_content(content: String) -> Self {
        Self { content }
    }

    pub fn from_file(path: &std::path::Path) -> Result<Self, InspectError> {
        Ok(Self {
            content: std::fs::read_to_string(path)?,
        })
    }

    pub async fn load_from_url(client: &reqwest::Client, url: &Url) -> Result<Self, InspectError> {
        let mut robots_txt_url = url.clone();
        robots_txt_url.set_path("/robots.txt");
        robots_txt_url.set_query(None);
        robots_txt_url.set_fragment(None);

        log::debug!("fetching {robots_txt_url}");
        let response = client.get(robots_txt_url).send().await?;
        if !response.status().is_success() {
            if response.status() == StatusCode::NOT_FOUND {
                log::warn!("no robots.txt found for {url}, treating as empty");
                return Ok(Self {
                    content: String::new(),
                });
            }
            return Err(InspectError::HttpError(response.status().as_u16()));
        }
        let content = response.text().await?;
        Ok(Self { content })
    }

    pub fn content(&self) -> &str {
        &self.content
    }

    pub fn parse(&self) -> ParseResult {
        robots::parse(&self.content)
    }
}
