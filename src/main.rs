mod ass;
mod error;
mod parser;
mod processor;
mod serialiser;
mod source;

use crate::ass::ConversionParams;
use crate::source::DecodedImage;

use std::io;
use std::time::Duration;

use anyhow::{Context, Result};
use clap::Parser as ClapParser;

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    match run() {
        Ok(()) => (),
        Err(err) => {
            eprintln!("An error occurred: {}", err);
            for cause in err.chain().skip(1) {
                eprintln!("    {}", cause);
            }
            std::process::exit(1);
        }
    }
}

#[derive(ClapParser)]
#[command(about = "Convert an image into ASS drawing commands, one dialogue line per row")]
struct Cli {
    #[arg(
        value_name = "NAME",
        help = "The image to convert. Use '-' to read it from standard input."
    )]
    name: String,
    #[arg(long, default_value_t = 0, help = "The layer of every dialogue line.")]
    layer: i32,
    #[arg(
        long,
        value_name = "H:MM:SS.CC",
        default_value = "0:00:00.00",
        value_parser = parser::parse_timestamp,
        help = "When the image appears."
    )]
    start_time: Duration,
    #[arg(
        long,
        value_name = "H:MM:SS.CC",
        default_value = "1:00:00.00",
        value_parser = parser::parse_timestamp,
        help = "When the image disappears."
    )]
    end_time: Duration,
    #[arg(
        long,
        value_name = "X,Y",
        default_value = "0,0",
        value_parser = parser::parse_position,
        help = "Position of the top-left corner of the image."
    )]
    pos: (i64, i64),
    #[arg(
        long,
        help = "Text inserted before the drawing of every row, e.g. '{\\fad(500,500)}'."
    )]
    text_prefix: Option<String>,
    #[arg(long, help = "Text appended after the drawing of every row.")]
    text_suffix: Option<String>,
    #[arg(long, help = "Write the script header and style block before the events.")]
    with_ass_header: bool,
    #[arg(
        short,
        long,
        value_name = "FILE",
        help = "The file to write to. If not supplied, the script will be written to standard output.",
        default_value = "-"
    )]
    output: String,
}

fn run() -> Result<()> {
    let cli = Cli::parse();

    let image = DecodedImage::open(&cli.name)
        .context(format!("Failed to read image: '{}'", cli.name))?;
    log::debug!("Decoded {}x{} image", image.width(), image.height());

    let params = ConversionParams {
        layer: cli.layer,
        start_time: cli.start_time,
        end_time: cli.end_time,
        origin: cli.pos,
        text_prefix: cli.text_prefix.unwrap_or_default(),
        text_suffix: cli.text_suffix.unwrap_or_default(),
        with_header: cli.with_ass_header,
    };
    log::debug!("{:?}", params);

    let rows = processor::rows(image.width(), image.rows());
    if cli.output == "-" {
        let dst = io::stdout();
        serialiser::serialise(rows, &params, dst.lock())?;
    } else {
        let dst = std::fs::File::create(&cli.output)
            .context(format!("Failed to create output file: '{}'", cli.output))?;
        serialiser::serialise(rows, &params, dst)?;
    };

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn cli_is_consistent() {
        Cli::command().debug_assert();
    }

    #[test]
    fn cli_defaults() {
        let cli = Cli::try_parse_from(["png2ass", "image.png"]).unwrap();
        assert_eq!(cli.layer, 0);
        assert_eq!(cli.start_time, Duration::from_secs(0));
        assert_eq!(cli.end_time, Duration::from_secs(3600));
        assert_eq!(cli.pos, (0, 0));
        assert!(!cli.with_ass_header);
        assert_eq!(cli.output, "-");
    }

    #[test]
    fn cli_rejects_malformed_arguments() {
        assert!(Cli::try_parse_from(["png2ass", "a.png", "--start-time", "0:0:00.00"]).is_err());
        assert!(Cli::try_parse_from(["png2ass", "a.png", "--pos", "10"]).is_err());
    }

    #[test]
    fn cli_parses_options() {
        let cli = Cli::try_parse_from([
            "png2ass",
            "M10.png",
            "--layer",
            "3",
            "--start-time",
            "0:00:10.00",
            "--pos",
            "20,-4",
            "--text-prefix",
            r"{\fad(500,500)}",
            "--with-ass-header",
        ])
        .unwrap();
        assert_eq!(cli.layer, 3);
        assert_eq!(cli.start_time, Duration::from_secs(10));
        assert_eq!(cli.pos, (20, -4));
        assert_eq!(cli.text_prefix.as_deref(), Some(r"{\fad(500,500)}"));
        assert!(cli.with_ass_header);
    }
}
