use std::future::Future;
use std::path::{Path, PathBuf};

use tracing::debug;

use crate::document::Document;
use crate::encoding::decode;
use crate::error::Error;
use crate::serialize::SerializeOptions;

/// Access to files, as used by [`load_document_with`] and
/// [`save_document_with`].
///
/// Both operations suspend until the I/O completes; failures are returned
/// once and never retried.
pub trait FileProvider {
    /// Read the file at `path` and return its content as lines, without
    /// line terminators.
    fn read_all_lines(&self, path: &Path) -> impl Future<Output = Result<Vec<String>, Error>> + Send;

    /// Write `text` to `path` verbatim, creating or truncating the file.
    fn write_all(&self, text: &str, path: &Path) -> impl Future<Output = Result<(), Error>> + Send;
}

/// [`FileProvider`] backed by `tokio::fs`.
///
/// Files are decoded according to their byte order mark or XML declaration
/// before they are split into lines.
#[derive(Debug, Clone, Copy, Default)]
pub struct TokioFiles;

impl FileProvider for TokioFiles {
    fn read_all_lines(&self, path: &Path) -> impl Future<Output = Result<Vec<String>, Error>> + Send {
        async move {
            let data = tokio::fs::read(path).await?;
            let (text, encoding) = decode(&data);
            debug!(
                path = %path.display(),
                bytes = data.len(),
                encoding = encoding.name(),
                "read file"
            );
            Ok::<_, Error>(text.lines().map(str::to_string).collect())
        }
    }

    fn write_all(&self, text: &str, path: &Path) -> impl Future<Output = Result<(), Error>> + Send {
        async move {
            tokio::fs::write(path, text).await?;
            debug!(path = %path.display(), bytes = text.len(), "wrote file");
            Ok::<_, Error>(())
        }
    }
}

/// Load and parse the XML file at `path`.
///
/// ```rust,no_run
/// # async fn example() -> Result<(), xmledit::Error> {
/// let doc = xmledit::load_document("catalog.xml").await?;
/// println!("{}", doc.tag(doc.root()));
/// # Ok(())
/// # }
/// ```
pub async fn load_document<P: AsRef<Path>>(path: P) -> Result<Document, Error> {
    load_document_with(&TokioFiles, path).await
}

/// Load a document through a specific [`FileProvider`].
///
/// The lines are joined with `\n` and parsed. Read failures give
/// [`Error::Io`], malformed content gives [`Error::Parse`].
pub async fn load_document_with<F: FileProvider, P: AsRef<Path>>(
    files: &F,
    path: P,
) -> Result<Document, Error> {
    let path = path.as_ref();
    debug!(path = %path.display(), "loading document");
    let lines = files.read_all_lines(path).await?;
    Document::parse(&lines.join("\n"))
}

/// Serialize `document` with an XML declaration and write it to `path`,
/// overwriting any existing content.
pub async fn save_document<P: AsRef<Path>>(document: &Document, path: P) -> Result<(), Error> {
    save_document_with(&TokioFiles, document, path).await
}

/// Save a document through a specific [`FileProvider`].
pub async fn save_document_with<F: FileProvider, P: AsRef<Path>>(
    files: &F,
    document: &Document,
    path: P,
) -> Result<(), Error> {
    save_document_with_options(files, document, path, &SerializeOptions::default()).await
}

/// Save a document with explicit serialization options.
pub async fn save_document_with_options<F: FileProvider, P: AsRef<Path>>(
    files: &F,
    document: &Document,
    path: P,
    options: &SerializeOptions,
) -> Result<(), Error> {
    let path = path.as_ref();
    debug!(path = %path.display(), "saving document");
    let text = document.serialize_with(options);
    files.write_all(&text, path).await
}

/// Join path segments using the host platform's separator.
///
/// ```rust
/// let path = xmledit::join_path(["data", "catalog.xml"]);
/// assert!(path.ends_with("catalog.xml"));
/// assert_eq!(path.components().count(), 2);
/// ```
pub fn join_path<I, S>(segments: I) -> PathBuf
where
    I: IntoIterator<Item = S>,
    S: AsRef<Path>,
{
    segments.into_iter().fold(PathBuf::new(), |mut path, segment| {
        path.push(segment);
        path
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_join_path() {
        let path = join_path(["a", "b", "c.xml"]);
        assert_eq!(path, Path::new("a").join("b").join("c.xml"));
    }

    #[test]
    fn test_join_path_empty() {
        assert_eq!(join_path(Vec::<&str>::new()), PathBuf::new());
    }
}
