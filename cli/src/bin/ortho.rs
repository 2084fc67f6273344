use std::path::PathBuf;

use clap::{Parser, ValueHint};
use unicode_info::reports::*;
use unicode_info::OrthographyIndex;
use unicode_info_cli::{font_cmap, load_config};

/// Query fonts about orthographic support.
#[derive(Parser, Debug)]
#[clap(author, about, version)]
struct Cli
{
    /// Report only orthographies that are supported with all optional characters
    #[clap(short, long)]
    full_only: bool,

    /// Report orthographies that have only basic support, i.e. no optional characters and no punctuation present
    #[clap(short, long)]
    minimum: bool,

    /// Report orthographies that have at minimum basic support
    #[clap(short = 'i', long)]
    minimum_inclusive: bool,

    /// Output a list of characters that are not used by any supported orthography
    #[clap(short, long)]
    kill_list: bool,

    /// Report missing punctuation for otherwise supported orthographies
    #[clap(short, long)]
    punctuation: bool,

    /// Report almost supported orthographies with maximum number of missing characters
    #[clap(short, long, value_name = "N")]
    near_miss: Option<usize>,

    /// Report support level and missing characters for orthographies, code[_script][_territory]
    #[clap(short, long, value_name = "CODE", num_args = 1..)]
    support: Vec<String>,

    /// Output kerning pair candidates for orthographies with at least basic support
    #[clap(long)]
    pairs: bool,

    /// Include optional characters in kerning pair candidates
    #[clap(long, requires = "pairs")]
    pairs_optional: bool,

    /// Configuration file
    #[clap(long, value_name = "PATH", value_hint = ValueHint::FilePath)]
    config: Option<PathBuf>,

    /// Directory with the orthography catalog
    #[clap(long, value_name = "DIR", value_hint = ValueHint::DirPath)]
    data_dir: Option<PathBuf>,

    /// One or more fonts
    #[clap(required = true, num_args = 1.., value_hint = ValueHint::FilePath)]
    font: Vec<PathBuf>,
}

impl Cli
{
    /// отчет для текущего набора символов
    fn report(&self, index: &OrthographyIndex, near_miss: usize) -> String
    {
        if !self.support.is_empty() {
            return self
                .support
                .iter()
                .map(|id| match index.orthography_by_id(id) {
                    Some(orthography) => format_support(orthography),
                    None => format!("Unknown orthography: {}\n", id),
                })
                .collect::<Vec<String>>()
                .join("\n");
        }

        if self.pairs {
            return format_kerning_pairs(index, self.pairs_optional, true);
        }

        if self.punctuation {
            format_missing_punctuation(index, near_miss)
        } else if let Some(n) = self.near_miss {
            format_near_misses(index, n)
        } else if self.minimum {
            format_supported_minimum(index)
        } else if self.minimum_inclusive {
            format_supported_minimum_inclusive(index)
        } else if self.full_only {
            format_supported(index, true)
        } else if self.kill_list {
            format_kill_list(index)
        } else {
            format_supported(index, false)
        }
    }
}

fn main() -> anyhow::Result<()>
{
    env_logger::init();

    let cli = Cli::parse();
    let config = load_config(cli.config.as_deref(), cli.data_dir.clone())?;

    let mut index = OrthographyIndex::load(&config)?;

    for path in cli.font.iter() {
        let cmap = font_cmap(path)?;

        index.set_cmap(cmap);
        print!("{}", cli.report(&index, config.near_miss));
    }

    Ok(())
}
