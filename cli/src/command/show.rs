use clap::{Args, ValueEnum};
use epubinfo::{ClosePolicy, EpubMetadata, ExtractOptions, ExtractionError};
use std::path::{Path, PathBuf};
use std::process::ExitCode;

#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// One labelled field per line
    #[default]
    Text,
    /// One tab-separated row per file: path, title, creator, language
    Tsv,
}

#[derive(Debug, Args)]
pub struct ShowCommand {
    /// EPUB files or directories containing the contents of an unzipped EPUB
    #[arg(required = true)]
    pub ebook_paths: Vec<PathBuf>,

    /// Output layout
    #[arg(long, value_enum, default_value_t)]
    format: OutputFormat,

    /// Bytes read from an archive entry at a time
    #[arg(long, default_value_t = 1024)]
    chunk_size: usize,

    /// Keep the metadata when the archive fails to close afterwards
    #[arg(long)]
    lenient_close: bool,
}

impl ShowCommand {
    /// Extracts every path; the title is replaced by the error text on failure.
    ///
    /// Exits with failure if any path could not be extracted.
    pub fn show(&self) -> ExitCode {
        let mut failed = false;

        for path in &self.ebook_paths {
            let result = epubinfo::extract_with(path, self.options());

            if let Err(error) = &result {
                tracing::debug!(path = %path.display(), ?error, "extraction failed");
                failed = true;
            }
            println!("{}", self.render(path, &result));
        }

        if failed {
            ExitCode::FAILURE
        } else {
            ExitCode::SUCCESS
        }
    }

    pub fn options(&self) -> ExtractOptions {
        ExtractOptions::builder()
            .chunk_size(self.chunk_size)
            .close_failure(if self.lenient_close {
                ClosePolicy::Warn
            } else {
                ClosePolicy::Error
            })
            .build()
    }

    pub fn render(&self, path: &Path, result: &Result<EpubMetadata, ExtractionError>) -> String {
        let (title, creator, language) = match result {
            Ok(metadata) => (
                metadata.title().to_owned(),
                metadata.creator(),
                metadata.language(),
            ),
            Err(error) => (error.title_fallback(), "", ""),
        };

        match self.format {
            OutputFormat::Text => format!(
                "File: {}\nTitle: {title}\nCreator: {creator}\nLanguage: {language}\n",
                path.display()
            ),
            OutputFormat::Tsv => [
                path.display().to_string().as_str(),
                title.as_str(),
                creator,
                language,
            ]
            .map(escape_tsv)
            .join("\t"),
        }
    }
}

fn escape_tsv(field: &str) -> String {
    field.replace(['\t', '\n', '\r'], " ")
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;

    #[derive(Debug, Parser)]
    struct TestCli {
        #[command(flatten)]
        show: ShowCommand,
    }

    fn parse(args: &[&str]) -> ShowCommand {
        TestCli::parse_from(std::iter::once("epubinfo").chain(args.iter().copied())).show
    }

    #[test]
    fn test_options() {
        let show = parse(&["--chunk-size", "64", "--lenient-close", "a.epub", "b.epub"]);
        let options = show.options();

        assert_eq!(2, show.ebook_paths.len());
        assert_eq!(64, options.chunk_size);
        assert_eq!(ClosePolicy::Warn, options.close_failure);
    }

    #[test]
    fn test_render_error_tsv() {
        let show = parse(&["--format", "tsv", "missing.epub"]);
        let result = Err(ExtractionError::Cancelled);

        assert_eq!(
            "missing.epub\textraction cancelled, Code: 6\t\t",
            show.render(Path::new("missing.epub"), &result)
        );
    }

    #[test]
    fn test_escape_tsv() {
        assert_eq!("a b c", escape_tsv("a\tb\nc"));
    }
}
