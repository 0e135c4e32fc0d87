//! Glossary publishing
//!
//! Runs the whole pipeline against the filesystem: read and parse the source,
//! sort the terms, write `index.html`, then write one page per term. Pages are
//! written one at a time; each file is flushed and closed before the next is
//! opened. The first failure aborts the run and leaves already written files
//! in place.

use crate::glossary::entries::Glossary;
use crate::glossary::error::GlossaryError;
use crate::glossary::parsing::load_glossary;
use crate::glossary::rendering::{
    page_file_name, write_index, write_term_page, RenderOptions, INDEX_FILE_NAME,
};
use crate::glossary::tokenizing::SeparatorSet;
use glossary_config::GlossaryConfig;
use std::fs::{self, File};
use std::io::{self, BufWriter, Write};
use std::path::{Path, PathBuf};

/// Files written by a publish run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PublishReport {
    pub index: PathBuf,
    /// Term pages in index order.
    pub pages: Vec<PathBuf>,
}

/// Writes a glossary out as a folder of HTML pages.
#[derive(Debug, Clone)]
pub struct Publisher {
    separators: SeparatorSet,
    options: RenderOptions,
}

impl Publisher {
    pub fn new(config: &GlossaryConfig) -> Self {
        Self {
            separators: SeparatorSet::from_chars(&config.tokenizer.separators),
            options: RenderOptions::from(config),
        }
    }

    pub fn with_parts(separators: SeparatorSet, options: RenderOptions) -> Self {
        Self {
            separators,
            options,
        }
    }

    pub fn separators(&self) -> &SeparatorSet {
        &self.separators
    }

    /// Parse `input` and write the glossary into `output_dir`, creating the
    /// folder if needed.
    pub fn publish(
        &self,
        input: impl AsRef<Path>,
        output_dir: impl AsRef<Path>,
    ) -> Result<PublishReport, GlossaryError> {
        let glossary = load_glossary(input.as_ref())?;
        self.publish_glossary(&glossary, output_dir)
    }

    /// Write an already parsed glossary into `output_dir`.
    pub fn publish_glossary(
        &self,
        glossary: &Glossary,
        output_dir: impl AsRef<Path>,
    ) -> Result<PublishReport, GlossaryError> {
        let output_dir = output_dir.as_ref();
        fs::create_dir_all(output_dir).map_err(|source| GlossaryError::CreateOutputDir {
            path: output_dir.to_path_buf(),
            source,
        })?;

        if glossary.is_empty() {
            log::warn!("glossary has no terms; writing an empty index");
        }

        let terms = glossary.sorted_terms();

        let index = output_dir.join(INDEX_FILE_NAME);
        write_file(&index, |out| write_index(out, &terms, &self.options))?;
        log::debug!("wrote {}", index.display());

        let mut pages = Vec::with_capacity(terms.len());
        for term in &terms {
            let definition = glossary.get(term).unwrap_or_default();
            let path = output_dir.join(page_file_name(term));
            write_file(&path, |out| {
                write_term_page(
                    out,
                    term,
                    definition,
                    glossary,
                    &self.separators,
                    &self.options,
                )
            })?;
            log::debug!("wrote {}", path.display());
            pages.push(path);
        }

        log::info!(
            "published {} term pages and {} to {}",
            pages.len(),
            INDEX_FILE_NAME,
            output_dir.display()
        );
        Ok(PublishReport { index, pages })
    }
}

impl Default for Publisher {
    fn default() -> Self {
        Self::with_parts(SeparatorSet::default(), RenderOptions::default())
    }
}

/// Create `path`, hand a buffered writer to `render`, then flush and close.
fn write_file<F>(path: &Path, render: F) -> Result<(), GlossaryError>
where
    F: FnOnce(&mut BufWriter<File>) -> io::Result<()>,
{
    let to_error = |source: io::Error| GlossaryError::WriteOutput {
        path: path.to_path_buf(),
        source,
    };

    let file = File::create(path).map_err(to_error)?;
    let mut out = BufWriter::new(file);
    render(&mut out).map_err(to_error)?;
    out.flush().map_err(to_error)
}
