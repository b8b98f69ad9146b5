use crate::ass::{ConversionParams, Row, Run, ASS_HEADER};
use crate::error::ConvertError;

use std::convert::TryFrom;
use std::io::{BufWriter, Write};
use std::time::Duration;

use anyhow::{Context, Result};

/// Writes the script for every encoded row, streaming each one as it arrives.
pub fn serialise<W, I>(rows: I, params: &ConversionParams, dst: W) -> Result<()>
where
    W: Write,
    I: IntoIterator<Item = Result<Row, ConvertError>>,
{
    let mut writer = BufWriter::new(dst);
    if params.with_header {
        writeln!(writer, "{}", ASS_HEADER).context("Failed to write ASS header.")?;
    }

    let start_time = format_ts(params.start_time);
    let end_time = format_ts(params.end_time);

    let mut written = 0;
    for row in rows {
        let row = row.context("Failed to convert image row.")?;
        log::trace!(
            "Row {}: {} runs from column {}",
            row.index,
            row.runs.len(),
            row.origin_column
        );
        let pos = row_position(&row, params.origin)
            .context(format!("Failed to position row {}.", row.index))?;
        write_row(&mut writer, &row, pos, params, &start_time, &end_time)
            .context("Failed to write to output.")?;
        written += 1;
    }
    writer.flush().context("Failed to write to output.")?;

    log::info!("Wrote {} dialogue lines", written);
    Ok(())
}

fn row_position(row: &Row, (org_x, org_y): (i64, i64)) -> Result<(i64, i64), ConvertError> {
    let offset = |origin: i64, delta: usize| {
        i64::try_from(delta)
            .ok()
            .and_then(|delta| origin.checked_add(delta))
    };
    match (
        offset(org_x, row.origin_column),
        offset(org_y, row.index),
    ) {
        (Some(x), Some(y)) => Ok((x, y)),
        _ => Err(ConvertError::Format(format!(
            "Position ({},{}) + ({},{}) is out of range",
            org_x, org_y, row.origin_column, row.index
        ))),
    }
}

fn write_row<W: Write>(
    buf: &mut W,
    row: &Row,
    (x, y): (i64, i64),
    params: &ConversionParams,
    start_time: &str,
    end_time: &str,
) -> Result<()> {
    write!(
        buf,
        "Dialogue: {},{},{},Default,,0000,0000,0000,,{}",
        params.layer, start_time, end_time, params.text_prefix
    )?;
    write!(buf, r"{{\an7\bord0\shad0\fnArial\fs20\pos({},{})}}", x, y)?;
    for run in &row.runs {
        write_run(buf, run)?;
    }
    writeln!(buf, "{}", params.text_suffix)?;
    Ok(())
}

fn write_run<W: Write>(buf: &mut W, run: &Run) -> Result<()> {
    let color = run.color;
    // ASS colours are BGR, and its alpha is transparency.
    write!(
        buf,
        r"{{\1c&H{:02X}{:02X}{:02X}\alpha&H{:X}\p1}}",
        color.b,
        color.g,
        color.r,
        0xff - color.a
    )?;
    write!(buf, r"m 0 0 l 0 1 {0} 1 {0} 0{{\p0}}", run.length)?;
    Ok(())
}

/// Formats a duration as `H:MM:SS.CC`, rounding to the nearest centisecond.
///
/// A remainder that rounds up to 100 centiseconds carries into the seconds.
pub fn format_ts(timestamp: Duration) -> String {
    let total_centis = (timestamp.as_micros() + 5_000) / 10_000;
    let centis = total_centis % 100;
    let total_secs = total_centis / 100;
    let hours = total_secs / 3600;
    let minutes = (total_secs % 3600) / 60;
    let seconds = total_secs % 60;
    format!("{}:{:02}:{:02}.{:02}", hours, minutes, seconds, centis)
}
