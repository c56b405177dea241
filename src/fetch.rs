//! Turning a source string into a readable file on disk.
//!
//! Local paths are used as is. `http://` and `https://` URLs are downloaded through a
//! [SourceFetcher] into a temporary file that lives as long as the [ResolvedSource].

use std::{
    fs::File,
    io::Write,
    path::{Path, PathBuf},
};

use tempfile::NamedTempFile;

use crate::{error::CropError, wc_err, wc_try};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Source {
    Path(PathBuf),
    Url(String),
}

impl Source {
    /// Anything starting with `http://` or `https://` (in any case) is a URL, the rest is a path.
    pub fn parse(source: &str) -> Self {
        let is_url = ["http://", "https://"].iter().any(|scheme| {
            source
                .get(..scheme.len())
                .is_some_and(|prefix| prefix.eq_ignore_ascii_case(scheme))
        });
        if is_url {
            Source::Url(source.to_owned())
        } else {
            Source::Path(PathBuf::from(source))
        }
    }
}

impl From<&str> for Source {
    fn from(source: &str) -> Self {
        Self::parse(source)
    }
}

impl From<&Path> for Source {
    fn from(path: &Path) -> Self {
        Source::Path(path.to_owned())
    }
}

impl From<PathBuf> for Source {
    fn from(path: PathBuf) -> Self {
        Source::Path(path)
    }
}

/// What the remote end answered, before any checks are applied.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FetchResponse {
    pub status: u16,
    pub body: Vec<u8>,
}

/// Downloads remote sources.
///
/// Implementations only report transport errors;
/// the status code and the body are checked by [resolve].
pub trait SourceFetcher {
    fn fetch(&self, url: &str) -> Result<FetchResponse, CropError>;
}

/// A source that can be opened from disk.
/// Downloaded sources are deleted when this is dropped.
#[derive(Debug)]
pub struct ResolvedSource {
    path: PathBuf,
    download: Option<NamedTempFile>,
}

impl ResolvedSource {
    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn is_download(&self) -> bool {
        self.download.is_some()
    }
}

pub fn resolve(
    source: &Source,
    fetcher: Option<&dyn SourceFetcher>,
) -> Result<ResolvedSource, CropError> {
    match source {
        Source::Path(path) => {
            if let Err(error) = File::open(path) {
                return Err(wc_err!(
                    FetchFailure,
                    "the file `{}' is not readable: {error}",
                    path.display()
                ));
            }
            Ok(ResolvedSource {
                path: path.clone(),
                download: None,
            })
        }
        Source::Url(url) => {
            let fetcher = fetcher.ok_or_else(|| {
                wc_err!(
                    FetchFailure,
                    "source image `{url}' is a URL but no fetcher is configured"
                )
            })?;
            let response = fetcher.fetch(url)?;
            if response.status != 200 {
                return Err(wc_err!(
                    FetchFailure,
                    "source image `{url}' cannot be used: it returned error code {}",
                    response.status
                ));
            }
            if response.body.is_empty() {
                return Err(wc_err!(
                    FetchFailure,
                    "source image `{url}' cannot be used: downloaded file is empty"
                ));
            }

            let mut file = wc_try!(
                FetchFailure,
                tempfile::Builder::new().prefix("wondercrop").tempfile()
            );
            wc_try!(FetchFailure, file.write_all(&response.body));
            wc_try!(FetchFailure, file.flush());
            tracing::debug!(
                url = %url,
                bytes = response.body.len(),
                path = %file.path().display(),
                "downloaded source"
            );
            Ok(ResolvedSource {
                path: file.path().to_owned(),
                download: Some(file),
            })
        }
    }
}

#[cfg(feature = "fetch")]
pub use http::HttpFetcher;

#[cfg(feature = "fetch")]
mod http {
    use std::time::Duration;

    use super::{FetchResponse, SourceFetcher};
    use crate::{error::CropError, wc_try};

    /// Fetches sources with a blocking `reqwest` client.
    /// Must not be used from within an async runtime.
    #[derive(Debug, Clone)]
    pub struct HttpFetcher {
        client: reqwest::blocking::Client,
    }

    impl HttpFetcher {
        pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

        pub fn new() -> Result<Self, CropError> {
            Self::with_timeout(Self::DEFAULT_TIMEOUT)
        }

        pub fn with_timeout(timeout: Duration) -> Result<Self, CropError> {
            let client = wc_try!(
                FetchFailure,
                reqwest::blocking::Client::builder().timeout(timeout).build()
            );
            Ok(Self { client })
        }
    }

    impl SourceFetcher for HttpFetcher {
        fn fetch(&self, url: &str) -> Result<FetchResponse, CropError> {
            let response = wc_try!(FetchFailure, self.client.get(url).send());
            let status = response.status().as_u16();
            let body = wc_try!(FetchFailure, response.bytes()).to_vec();
            tracing::debug!(url, status, bytes = body.len(), "fetched source");
            Ok(FetchResponse { status, body })
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorKind;

    struct Canned(u16, &'static [u8]);

    impl SourceFetcher for Canned {
        fn fetch(&self, _url: &str) -> Result<FetchResponse, CropError> {
            Ok(FetchResponse {
                status: self.0,
                body: self.1.to_vec(),
            })
        }
    }

    #[test]
    fn test_parse() {
        assert_eq!(
            Source::parse("https://example.com/a.png"),
            Source::Url("https://example.com/a.png".into())
        );
        assert_eq!(
            Source::parse("HTTP://example.com/a.png"),
            Source::Url("HTTP://example.com/a.png".into())
        );
        assert_eq!(
            Source::parse("/tmp/http.png"),
            Source::Path(PathBuf::from("/tmp/http.png"))
        );
        assert_eq!(Source::parse("ftp://x"), Source::Path(PathBuf::from("ftp://x")));
        assert_eq!(Source::parse("💥"), Source::Path(PathBuf::from("💥")));
    }

    #[test]
    fn test_unreadable_path() {
        let dir = tempfile::tempdir().unwrap();
        let source = Source::from(dir.path().join("missing.png"));
        let err = resolve(&source, None).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::FetchFailure);
        assert!(err.message().contains("is not readable"));
    }

    #[test]
    fn test_readable_path_is_used_in_place() {
        let file = NamedTempFile::new().unwrap();
        let resolved = resolve(&Source::from(file.path()), None).unwrap();
        assert_eq!(resolved.path(), file.path());
        assert!(!resolved.is_download());
    }

    #[test]
    fn test_url_without_fetcher() {
        let err = resolve(&Source::parse("http://example.com/a.gif"), None).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::FetchFailure);
    }

    #[test]
    fn test_error_status() {
        let source = Source::parse("http://example.com/a.gif");
        let err = resolve(&source, Some(&Canned(404, b"not found"))).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::FetchFailure);
        assert!(err.message().contains("returned error code 404"));
    }

    #[test]
    fn test_empty_body() {
        let source = Source::parse("http://example.com/a.gif");
        let err = resolve(&source, Some(&Canned(200, b""))).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::FetchFailure);
        assert!(err.message().contains("downloaded file is empty"));
    }

    #[test]
    fn test_download_is_removed_on_drop() {
        let source = Source::parse("https://example.com/a.gif");
        let resolved = resolve(&source, Some(&Canned(200, b"GIF89a"))).unwrap();
        assert!(resolved.is_download());
        let path = resolved.path().to_owned();
        assert_eq!(std::fs::read(&path).unwrap(), b"GIF89a");
        drop(resolved);
        assert!(!path.exists());
    }

    #[cfg(feature = "fetch")]
    mod http_fetcher {
        use super::*;
        use std::{
            io::{BufRead, BufReader},
            net::TcpListener,
            thread,
        };

        /// Answers a single request with `response` and returns the URL to request.
        fn serve_once(response: &'static [u8]) -> (String, thread::JoinHandle<()>) {
            let listener = TcpListener::bind("127.0.0.1:0").unwrap();
            let url = format!("http://{}/a.gif", listener.local_addr().unwrap());
            let server = thread::spawn(move || {
                let (mut stream, _) = listener.accept().unwrap();
                let mut reader = BufReader::new(stream.try_clone().unwrap());
                let mut line = String::new();
                while reader.read_line(&mut line).unwrap() > 0 && line != "\r\n" {
                    line.clear();
                }
                stream.write_all(response).unwrap();
            });
            (url, server)
        }

        #[test]
        fn test_http_download() {
            let (url, server) = serve_once(
                b"HTTP/1.1 200 OK\r\nContent-Length: 6\r\nConnection: close\r\n\r\nGIF89a",
            );
            let fetcher = HttpFetcher::new().unwrap();
            let resolved = resolve(&Source::parse(&url), Some(&fetcher)).unwrap();
            server.join().unwrap();
            assert!(resolved.is_download());
            assert_eq!(std::fs::read(resolved.path()).unwrap(), b"GIF89a");
        }

        #[test]
        fn test_http_error_status() {
            let (url, server) = serve_once(
                b"HTTP/1.1 404 Not Found\r\nContent-Length: 0\r\nConnection: close\r\n\r\n",
            );
            let fetcher = HttpFetcher::new().unwrap();
            let err = resolve(&Source::parse(&url), Some(&fetcher)).unwrap_err();
            server.join().unwrap();
            assert_eq!(err.kind(), ErrorKind::FetchFailure);
            assert!(err.message().contains("returned error code 404"));
        }

        #[test]
        fn test_connection_refused() {
            let addr = TcpListener::bind("127.0.0.1:0").unwrap().local_addr().unwrap();
            // the listener is dropped, nothing accepts on that port anymore
            let fetcher = HttpFetcher::with_timeout(std::time::Duration::from_secs(5)).unwrap();
            let err = fetcher.fetch(&format!("http://{addr}/a.gif")).unwrap_err();
            assert_eq!(err.kind(), ErrorKind::FetchFailure);
        }
    }
}
