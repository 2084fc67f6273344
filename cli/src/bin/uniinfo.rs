use clap::Parser;
use unicode_info::UniInfo;
use unicode_info_cli::parse_codepoint;

/// Show information about Unicode codepoints.
#[derive(Parser, Debug)]
#[clap(author, about, version)]
struct Cli
{
    /// One or more Unicode codepoints (0x1E9E, U+1E9E or decimal)
    #[clap(required = true, num_args = 1..)]
    codepoint: Vec<String>,
}

fn main() -> anyhow::Result<()>
{
    env_logger::init();

    let cli = Cli::parse();
    let mut info = UniInfo::default();

    for argument in cli.codepoint.iter() {
        match parse_codepoint(argument) {
            Some(code) => {
                info.set_unicode(Some(code));
                println!("{}\n", info);
            }
            None => log::error!("not a codepoint: {}", argument),
        }
    }

    Ok(())
}
