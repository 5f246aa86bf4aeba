use crate::inspector::inspect_error::InspectError;
use anyhow::anyhow;
use std::collections::HashSet;
use url::Url;

/// Collects candidate resource URLs from the target page itself: links,
/// stylesheets, scripts and images, restricted to the page's own host.
pub struct ResourceDiscoverer {
    client: reqwest::Client,
}

impl ResourceDiscoverer {
    pub fn new(client: reqwest::Client) -> Self {
        Self { client }
    }

    pub async fn discover(&self, page_url: &Url) -> Result<Vec<Url>, InspectError> {
        let response = self.client.get(page_url.clone()).send().await?;
        if !response.status().is_success() {
            return Err(InspectError::HttpError(response.status().as_u16()));
        }

        let content_type_str = response
            .headers()
            .get(reqwest::header::CONTENT_TYPE)
            .and_then(|v| v.to_str().ok())
            .unwrap_or("unknown")
            .to_string();
        let content_type: mime::Mime = content_type_str.parse()?;
        match (content_type.type_(), content_type.subtype()) {
            (mime::TEXT, mime::HTML) => {}
            _ => {
                return Err(InspectError::AnyError(anyhow!(
                    "cannot discover resources in non-HTML content type: {content_type}"
                )));
            }
        }

        let html_text = response.text().await?;
        let urls = Self::extract_resource_urls(page_url, html_text.as_str());
        log::debug!("discovered {} resources on {page_url}", urls.len());
        Ok(urls)
    }

    fn extract_resource_urls(page_url: &Url, html_text: &str) -> Vec<Url> {
        let document = scraper::Html::parse_document(html_text);

        let mut discovered_urls: HashSet<Url> = HashSet::new();
        let selectors = [
            ("a[href]", "href"),
            ("link[href]", "href"),
            ("script[src]", "src"),
            ("img[src]", "src"),
        ];
        for (selector_str, attribute) in selectors {
            let selector = scraper::Selector::parse(selector_str).unwrap();
            for element in document.select(&selector) {
                let Some(reference) = element.value().attr(attribute) else {
                    continue;
                };
                if reference.starts_with('#')
                    || reference.starts_with("mailto:")
                    || reference.starts_with("javascript:")
                    || reference.starts_with("tel:")
                    || reference.starts_with("data:")
                {
                    continue;
                }
                if let Ok(resource_url) = page_url.join(reference) {
                    discovered_urls.insert(resource_url);
                }
            }
        }

        let mut same_host_urls: Vec<Url> = discovered_urls
            .into_iter()
            .filter(|u| u.host() == page_url.host())
            .collect();
        same_host_urls.sort_by(|lhs, rhs| lhs.as_str().cmp(rhs.as_str()));
        same_host_urls
    }
}
