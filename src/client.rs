//! Client to retrieve the catalog resources.
//!
//! Resources are addressed by URL: `http(s)` goes over the network, `file`
//! is read straight from disk so that a site can be rendered locally.

use eyre::{bail, ensure, eyre, Result, WrapErr};
use serde::de::DeserializeOwned;
use std::{
    fs::File,
    io::{BufReader, Read},
};
use url::Url;

/// User agent sent along every request.
const USER_AGENT: &str = concat!("anshell/", env!("CARGO_PKG_VERSION"));

/// A simple resource client, without retry.
#[derive(Clone)]
pub struct Client {
    /// HTTP client.
    agent: ureq::Agent,
}

impl Client {
    /// Initialize a new client.
    pub fn new() -> Self {
        Self {
            agent: ureq::builder().user_agent(USER_AGENT).build(),
        }
    }

    /// Retrieves and parses the JSON at `url`.
    pub fn get_json<T>(&self, url: &Url) -> Result<T>
    where
        T: DeserializeOwned,
    {
        let reader = self.open(url, "application/json").context("get JSON")?;

        serde_json::from_reader(BufReader::new(reader)).context("read JSON")
    }

    /// Downloads the specified image in the given buffer.
    pub fn get_image(&self, url: &Url, buf: &mut Vec<u8>) -> Result<()> {
        let mut reader = self.open(url, "image/*").context("get image")?;

        reader.read_to_end(buf).context("read image")?;

        Ok(())
    }

    /// Opens the resource at `url`.
    ///
    /// Any non-success HTTP status is an error.
    fn open(&self, url: &Url, accept: &str) -> Result<Box<dyn Read + Send>> {
        match url.scheme() {
            "file" => {
                let path = url
                    .to_file_path()
                    .map_err(|()| eyre!("invalid file URL {url}"))?;
                let file = File::open(&path)
                    .with_context(|| format!("open {}", path.display()))?;

                Ok(Box::new(file))
            },
            "http" | "https" => {
                let response = self
                    .agent
                    .request_url("GET", url)
                    .set("accept", accept)
                    .call()
                    .with_context(|| format!("GET {url}"))?;
                ensure!(
                    (200..300).contains(&response.status()),
                    "GET {url}: unexpected status {}",
                    response.status()
                );

                Ok(Box::new(response.into_reader()))
            },
            scheme => bail!("unsupported scheme {scheme} for {url}"),
        }
    }
}

impl Default for Client {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Collection;
    use std::path::Path;

    fn fixture(path: &str) -> Url {
        let path = Path::new(env!("CARGO_MANIFEST_DIR"))
            .join("tests/fixtures")
            .join(path);
        Url::from_file_path(path).expect("absolute fixture path")
    }

    #[test]
    fn read_local_json() {
        let client = Client::new();

        let records = client
            .get_json::<Collection>(&fixture("site/data/anime.json"))
            .expect("anime");

        assert!(!records.is_empty());
    }

    #[test]
    fn missing_local_file() {
        let client = Client::new();

        let res = client.get_json::<Collection>(&fixture("site/data/nope.json"));

        assert!(res.is_err());
    }

    #[test]
    fn unsupported_scheme() {
        let client = Client::new();
        let url = Url::parse("ftp://example.org/data/anime.json").expect("URL");

        let mut buf = Vec::new();
        assert!(client.get_image(&url, &mut buf).is_err());
    }
}
