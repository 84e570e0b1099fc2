use std::io::{BufRead, Write};

use colored::Colorize;
use log::debug;
use volrank_core::{Pipeline, ValidationError};

use crate::error::CliError;
use crate::render::{render_header, render_report, RenderOptions};

/// Year-selection loop. Each line is one selection; errors are shown and the
/// loop continues. Returns on `q`, `quit`, or end of input.
pub async fn run<R: BufRead, W: Write>(
    pipeline: &Pipeline,
    options: &RenderOptions,
    input: R,
    mut output: W,
) -> Result<(), CliError> {
    let years = pipeline.years();
    writeln!(output, "{}", render_header())?;
    prompt(&mut output, pipeline)?;

    for line in input.lines() {
        let line = line?;
        let selection = line.trim();
        if matches!(selection, "q" | "quit") {
            break;
        }

        let outcome = match parse_year(selection, years.default_year()) {
            Ok(year) => pipeline.run(year).await.map_err(CliError::from),
            Err(error) => Err(error.into()),
        };
        match outcome {
            Ok(report) => writeln!(output, "{}", render_report(&report, options))?,
            Err(error) => {
                debug!("selection '{selection}' failed: {error}");
                writeln!(output, "{} {error}", "error:".red())?;
            }
        }
        prompt(&mut output, pipeline)?;
    }

    writeln!(output)?;
    Ok(())
}

fn prompt<W: Write>(output: &mut W, pipeline: &Pipeline) -> Result<(), CliError> {
    let years = pipeline.years();
    write!(
        output,
        "\nSelect a year ({}-{}, enter for {}, q to quit): ",
        years.oldest(),
        years.newest(),
        years.default_year()
    )?;
    output.flush()?;
    Ok(())
}

fn parse_year(selection: &str, default_year: i32) -> Result<i32, ValidationError> {
    if selection.is_empty() {
        return Ok(default_year);
    }
    selection
        .parse::<i32>()
        .map_err(|_| ValidationError::UnparsableYear {
            input: selection.to_string(),
        })
}

#[cfg(test)]
mod tests {
    use std::io::Cursor;
    use std::sync::Arc;

    use super::*;
    use volrank_core::{DashboardConfig, SyntheticAdapter};

    fn pipeline() -> Pipeline {
        let config = DashboardConfig::default().with_top_n(2);
        Pipeline::new(Arc::new(SyntheticAdapter::default()), &config)
    }

    async fn session(input: &str) -> (String, Pipeline) {
        let pipeline = pipeline();
        let options = RenderOptions {
            charts: false,
            ..RenderOptions::default()
        };
        let mut output = Vec::new();
        run(&pipeline, &options, Cursor::new(input.to_string()), &mut output)
            .await
            .expect("session completes");
        (String::from_utf8(output).expect("utf8 output"), pipeline)
    }

    #[tokio::test]
    async fn renders_each_selection_and_reuses_fetched_years() {
        // given
        let input = "2021\n\n2021\nq\n2020\n";

        // when
        let (output, pipeline) = session(input).await;

        // then
        assert_eq!(output.matches("Year:").count(), 3);
        // 2021 and the default 2023; input after `q` is ignored.
        assert_eq!(pipeline.cache().len().await, 2);
    }

    #[tokio::test]
    async fn invalid_selection_is_reported_and_loop_continues() {
        let (output, _) = session("1999\nabc\n2022\n").await;

        assert_eq!(output.matches("error:").count(), 2);
        assert!(output.contains("1999"));
        assert_eq!(output.matches("Year:").count(), 1);
    }

    #[test]
    fn empty_line_selects_default_year() {
        assert_eq!(parse_year("", 2023), Ok(2023));
        assert_eq!(parse_year("2019", 2023), Ok(2019));
        assert_eq!(
            parse_year("20x9", 2023),
            Err(ValidationError::UnparsableYear {
                input: "20x9".to_string()
            })
        );
    }
}
